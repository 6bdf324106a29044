//! Bundled template resolution, copying, and manifest patching
//!
//! This module provides:
//! - Resolution of the templates directory shipped next to the binary
//! - Recursive template copying into the project destination
//! - `package.json` patching after the copy

pub mod copier;
pub mod package_json;
pub mod source;

pub use copier::copy_template;
pub use package_json::update_package_json;
pub use source::resolve_templates_dir;
