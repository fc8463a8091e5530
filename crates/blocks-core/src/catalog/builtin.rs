//! Catalog compiled into the binary

use super::CatalogEntry;

/// Components in display order
const COMPONENTS: &[&str] = &[
    "Card",
    "Select",
    "SideBar",
    "MultiSelect",
    "Button",
    "DatePicker",
    "Checkbox",
    "DarkMode",
    "Dialog",
    "Input",
    "Modal",
    "Spinner",
    "Toast",
    "Tabs",
    "Uploader",
    "FormRenderer",
    "MaterialInput",
    "ContextMenu",
    "Navbar",
    "DataGrid",
    "BreadCrumb",
    "Bargraph",
    "UsePaginatedData",
];

/// Direct dependencies, one level only
const DEPENDENCIES: &[(&str, &[&str])] = &[(
    "FormRenderer",
    &["Select", "MultiSelect", "Input", "DatePicker"],
)];

pub fn entries() -> Vec<CatalogEntry> {
    COMPONENTS
        .iter()
        .map(|name| {
            let deps = DEPENDENCIES
                .iter()
                .find(|(owner, _)| owner == name)
                .map(|(_, deps)| deps.to_vec())
                .unwrap_or_default();
            CatalogEntry::new(*name).requires(deps)
        })
        .collect()
}
