//! Package manager detection and dependency installation
//!
//! This module provides:
//! - Lockfile-based package manager detection (yarn, pnpm, npm)
//! - Running `<package manager> install` inside the new project

pub mod install;
pub mod package_manager;

pub use install::{install_dependencies, install_with};
pub use package_manager::PackageManager;
