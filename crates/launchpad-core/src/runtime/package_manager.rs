//! Package manager detection for scaffolded projects

use std::fmt;
use std::path::Path;

/// Supported Node package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Yarn,
    Pnpm,
    Npm,
}

/// Lockfiles checked in priority order; npm is the fallback
const LOCKFILES: &[(&str, PackageManager)] = &[
    ("yarn.lock", PackageManager::Yarn),
    ("pnpm-lock.yaml", PackageManager::Pnpm),
];

impl PackageManager {
    /// Detect the package manager from the lockfile present in `dir`
    pub fn detect(dir: &Path) -> Self {
        LOCKFILES
            .iter()
            .find(|(lockfile, _)| dir.join(lockfile).is_file())
            .map(|(_, pm)| *pm)
            .unwrap_or(PackageManager::Npm)
    }

    /// Name of the executable
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Npm => "npm",
        }
    }

    /// Command line that installs dependencies
    pub fn install_command(&self) -> String {
        format!("{} install", self.program())
    }

    /// Command line that starts the dev server
    pub fn dev_command(&self) -> String {
        match self {
            PackageManager::Npm => "npm run dev".to_string(),
            other => format!("{} dev", other.program()),
        }
    }

    /// Command the user can run by hand when the automatic install fails.
    ///
    /// `dir` is `None` when the project is the current directory.
    pub fn manual_install_hint(&self, dir: Option<&str>) -> String {
        match dir {
            Some(dir) => format!("cd {} && {}", dir, self.install_command()),
            None => self.install_command(),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_to_npm() {
        let dir = TempDir::new().unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Npm);
    }

    #[test]
    fn test_detects_pnpm() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("pnpm-lock.yaml"), "").unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Pnpm);
    }

    #[test]
    fn test_yarn_wins_over_pnpm() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("pnpm-lock.yaml"), "").unwrap();
        std::fs::write(dir.path().join("yarn.lock"), "").unwrap();
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Yarn);
    }

    #[test]
    fn test_commands() {
        assert_eq!(PackageManager::Npm.install_command(), "npm install");
        assert_eq!(PackageManager::Npm.dev_command(), "npm run dev");
        assert_eq!(PackageManager::Pnpm.dev_command(), "pnpm dev");
        assert_eq!(
            PackageManager::Yarn.manual_install_hint(Some("my-app")),
            "cd my-app && yarn install"
        );
        assert_eq!(PackageManager::Pnpm.manual_install_hint(None), "pnpm install");
    }
}
