//! Product configuration trait for the CLI binary
//!
//! This trait defines the interface the binary implements to configure the
//! scaffolding behavior: identity, where templates live, and what to tell the user
//! once the project exists.

use crate::frameworks::FrameworkDescriptor;
use crate::runtime::PackageManager;
use std::path::PathBuf;

/// Configuration trait for the scaffolding product
///
/// The binary implements this trait to define:
/// - Product identity (name, display name, version)
/// - Bundled template location and its environment override
/// - Documentation and issue tracker links
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command and install layout)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Version of the tool itself
    fn version(&self) -> &'static str;

    /// Environment variable name for overriding the templates directory
    fn templates_dir_env(&self) -> &'static str;

    /// Templates directory used when nothing is found next to the executable
    fn bundled_templates_dir(&self) -> PathBuf;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// URL where packaging bugs should be reported
    fn issues_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation.
    ///
    /// `dir` is `None` when the project was created in the current folder.
    fn next_steps(
        &self,
        dir: Option<&str>,
        framework: &FrameworkDescriptor,
        package_manager: PackageManager,
        installed: bool,
    ) -> Vec<String>;
}
