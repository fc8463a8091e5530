//! Product configuration trait for CLI binaries
//!
//! Each binary built on this library describes itself through this trait:
//! identity, where components are installed, and where to point users for docs.

/// Configuration trait for a component-distribution CLI
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable product name shown in messages
    fn display_name(&self) -> &'static str;

    /// One-line description used as the CLI about text
    fn cli_description(&self) -> &'static str;

    /// URL for component documentation, used when the catalog does not declare one
    fn docs_url(&self) -> &'static str;

    /// Directory created under the working directory to hold installed components
    fn destination_dir_name(&self) -> &'static str {
        "component-lib"
    }

    /// Environment variable the binary reads to override the template directory
    fn template_dir_env(&self) -> &'static str;
}
