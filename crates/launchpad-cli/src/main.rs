//! Launchpad CLI - Project scaffolding for React, Angular and plain HTML apps

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use launchpad_core::tui::ClackUi;
use launchpad_core::{
    FrameworkDescriptor, PackageManager, ProductConfig, ScaffoldEnv, ScaffoldOptions,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Launchpad product configuration
#[derive(Clone)]
pub struct LaunchpadConfig;

impl ProductConfig for LaunchpadConfig {
    fn name(&self) -> &'static str {
        "launchpad"
    }

    fn display_name(&self) -> &'static str {
        "Launchpad"
    }

    fn version(&self) -> &'static str {
        CLI_VERSION
    }

    fn templates_dir_env(&self) -> &'static str {
        "LAUNCHPAD_TEMPLATES_DIR"
    }

    fn bundled_templates_dir(&self) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("templates")
    }

    fn docs_url(&self) -> &'static str {
        "https://launchpad.dev/docs"
    }

    fn issues_url(&self) -> &'static str {
        "https://github.com/launchpad-dev/launchpad/issues"
    }

    fn next_steps(
        &self,
        dir: Option<&str>,
        _framework: &FrameworkDescriptor,
        package_manager: PackageManager,
        installed: bool,
    ) -> Vec<String> {
        let mut steps = Vec::new();

        // Step 1: cd to directory if not current
        if let Some(dir) = dir {
            steps.push(format!("cd {}", dir));
        }

        // Step 2: Install dependencies if that was skipped or failed
        if !installed {
            steps.push(package_manager.install_command());
        }

        // Step 3: Start dev server
        steps.push(package_manager.dev_command());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "launchpad")]
#[command(about = "CLI for scaffolding React, Angular and plain HTML projects")]
#[command(version, disable_version_flag = true)]
pub struct Args {
    /// Project name; use "." to scaffold into the current directory
    pub project_name: Option<String>,

    /// Framework to use (e.g. react, angular, html)
    #[arg(short, long)]
    pub framework: Option<String>,

    /// Skip installing dependencies
    #[arg(long = "no-install", conflicts_with = "install")]
    pub no_install: bool,

    /// Install dependencies without asking
    #[arg(long)]
    pub install: bool,

    /// Scaffold into the current directory
    #[arg(long = "current-folder", conflicts_with = "project_name")]
    pub current_folder: bool,

    /// Show the plan without writing anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Show detailed error output
    #[arg(long)]
    pub verbose: bool,

    /// List the available frameworks
    #[arg(long)]
    pub info: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: (),
}

impl From<Args> for ScaffoldOptions {
    fn from(args: Args) -> Self {
        let here = args.project_name.as_deref() == Some(".");
        let install = if args.no_install {
            Some(false)
        } else if args.install {
            Some(true)
        } else {
            None
        };

        ScaffoldOptions {
            framework: args.framework,
            project_name: if here { None } else { args.project_name },
            current_folder: args.current_folder || here,
            install,
            verbose: args.verbose,
            dry_run: args.dry_run,
            show_info: args.info,
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("launchpad={level},launchpad_core={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_tracing(args.verbose);

    let config = LaunchpadConfig;
    let env = ScaffoldEnv::from_process(&config)?;
    let mut ui = ClackUi::new();

    let result = launchpad_core::run(&config, &mut ui, &env, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(outcome) => {
            tracing::debug!(?outcome, "finished");
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(argv: &[&str]) -> ScaffoldOptions {
        let mut full = vec!["launchpad"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap().into()
    }

    #[test]
    fn test_positional_name_and_flags() {
        let opts = options(&["--framework", "react", "my-app", "--no-install"]);
        assert_eq!(opts.framework.as_deref(), Some("react"));
        assert_eq!(opts.project_name.as_deref(), Some("my-app"));
        assert_eq!(opts.install, Some(false));
        assert!(!opts.current_folder);
    }

    #[test]
    fn test_dot_means_current_folder() {
        let opts = options(&["."]);
        assert!(opts.current_folder);
        assert!(opts.project_name.is_none());
    }

    #[test]
    fn test_install_is_asked_by_default() {
        assert_eq!(options(&[]).install, None);
        assert_eq!(options(&["--install"]).install, Some(true));
    }

    #[test]
    fn test_install_flags_conflict() {
        assert!(Args::try_parse_from(["launchpad", "--install", "--no-install"]).is_err());
    }

    #[test]
    fn test_next_steps_skip_cd_in_current_folder() {
        let framework = FrameworkDescriptor {
            id: "react".to_string(),
            name: "React".to_string(),
            description: "React".to_string(),
            badge: "R".to_string(),
            note: None,
            disabled: false,
            docs_url: None,
        };
        let steps = LaunchpadConfig.next_steps(None, &framework, PackageManager::Npm, true);
        assert_eq!(steps, vec!["npm run dev".to_string()]);

        let steps = LaunchpadConfig.next_steps(Some("app"), &framework, PackageManager::Pnpm, false);
        assert_eq!(steps, vec!["cd app", "pnpm install", "pnpm dev"]);
    }
}
