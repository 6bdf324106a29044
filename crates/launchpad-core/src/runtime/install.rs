//! Running the package manager install inside a new project

use super::package_manager::PackageManager;
use crate::error::ScaffoldError;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Install dependencies in `project_dir` with the detected package manager.
///
/// Output is streamed straight to the user's terminal. No timeout is applied:
/// a slow registry simply keeps the user waiting.
pub async fn install_dependencies(project_dir: &Path) -> Result<PackageManager, ScaffoldError> {
    let package_manager = PackageManager::detect(project_dir);
    install_with(package_manager, project_dir).await?;
    Ok(package_manager)
}

/// Install dependencies in `project_dir` with an already detected package manager
pub async fn install_with(
    package_manager: PackageManager,
    project_dir: &Path,
) -> Result<(), ScaffoldError> {
    run_install(&executable(package_manager.program()), project_dir).await
}

/// Spawn `<program> install` in `dir` and wait for it to finish
pub(crate) async fn run_install(program: &str, dir: &Path) -> Result<(), ScaffoldError> {
    tracing::debug!(program, dir = %dir.display(), "running install");

    let status = TokioCommand::new(program)
        .arg("install")
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| ScaffoldError::Install(format!("failed to run {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(ScaffoldError::Install(format!(
            "{} install exited with code {}",
            program,
            status.code().unwrap_or(-1)
        )))
    }
}

/// Package managers ship as `.cmd` shims on Windows
fn executable(program: &str) -> String {
    if cfg!(windows) {
        format!("{}.cmd", program)
    } else {
        program.to_string()
    }
}
