//! Launchpad Core - Shared library for the web project scaffolding CLI
//!
//! This library provides the core functionality for scaffolding projects from the
//! framework templates bundled next to the `launchpad` binary. The binary supplies a
//! [`ProductConfig`] and a [`Ui`] and hands control to [`run`].
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Framework registry, project name validation,
//!   template copying, `package.json` patching, package manager install
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` and `Ui` traits and the
//!   sequential prompt/action pipeline in [`scaffold`]
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based `Ui` (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-backed [`tui::ClackUi`]
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use launchpad_core::{frameworks, templates};
//!
//! let frameworks = frameworks::load_frameworks(&templates_dir)?;
//! let react = frameworks::get_framework_by_id(&frameworks, "react").unwrap();
//! templates::copy_template(&templates_dir, &react.id, &dest).await?;
//! ```

pub mod error;
pub mod frameworks;
pub mod product;
pub mod runtime;
pub mod scaffold;
pub mod templates;
pub mod ui;
pub mod validate;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{detailed_error_message, ErrorClass, ScaffoldError};
pub use frameworks::{get_framework_by_id, load_frameworks, FrameworkDescriptor};
pub use product::ProductConfig;
pub use runtime::{install_dependencies, install_with, PackageManager};
pub use scaffold::{run, Outcome, ScaffoldEnv, ScaffoldOptions};
pub use templates::{copy_template, update_package_json};
pub use ui::{Choice, Ui};
pub use validate::{validate_project_name, validate_project_name_in, NameError};
