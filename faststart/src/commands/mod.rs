mod bake;
mod check;
mod completions;
mod init;

use bake::BakeCommand;
use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use faststart_config::{AuthType, ProjectSection, ProjectType};
use init::InitCommand;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for faststart_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "faststart")]
#[command(version)]
#[command(about = "Generate FastAPI routers from faststart.toml")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Bake(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a faststart.toml for a new project
    Init(InitCommand),

    /// Generate the API router files from faststart.toml
    Bake(BakeCommand),

    /// Validate faststart.toml and show what would be generated
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Flags that take precedence over faststart.toml.
#[derive(Args, Debug, Default)]
pub struct Overrides {
    /// Project type: generic, ml_api, microservice
    #[arg(long = "type", value_name = "TYPE")]
    pub project_type: Option<ProjectType>,

    /// Authentication: none, jwt, oauth2
    #[arg(long, value_name = "AUTH")]
    pub auth: Option<AuthType>,

    /// Generate async database access
    #[arg(long = "async", conflicts_with = "sync")]
    pub is_async: bool,

    /// Generate sync database access
    #[arg(long)]
    pub sync: bool,
}

impl Overrides {
    /// Execution mode requested on the command line, if any.
    pub fn mode(&self) -> Option<bool> {
        match (self.is_async, self.sync) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    pub fn apply(&self, project: &mut ProjectSection) {
        if let Some(project_type) = self.project_type {
            project.project_type = project_type;
        }
        if let Some(auth) = self.auth {
            project.auth = auth;
        }
        if let Some(is_async) = self.mode() {
            project.is_async = is_async;
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn section() -> ProjectSection {
        ProjectSection {
            name: "demo".to_string(),
            project_type: ProjectType::Generic,
            auth: AuthType::None,
            is_async: true,
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_overrides_keeps_manifest() {
        let mut project = section();
        Overrides::default().apply(&mut project);
        assert_eq!(project, section());
    }

    #[test]
    fn test_overrides_apply() {
        let mut project = section();
        let overrides = Overrides {
            project_type: Some(ProjectType::MlApi),
            auth: Some(AuthType::Jwt),
            is_async: false,
            sync: true,
        };
        overrides.apply(&mut project);

        assert_eq!(project.project_type, ProjectType::MlApi);
        assert_eq!(project.auth, AuthType::Jwt);
        assert!(!project.is_async);
    }

    #[test]
    fn test_parse_bake_flags() {
        let cli = Cli::try_parse_from([
            "faststart", "-vv", "bake", "--type", "ml-api", "--auth", "oauth2", "--async",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Bake(_)));
    }

    #[test]
    fn test_async_and_sync_conflict() {
        assert!(Cli::try_parse_from(["faststart", "bake", "--async", "--sync"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_type() {
        assert!(Cli::try_parse_from(["faststart", "bake", "--type", "desktop"]).is_err());
    }
}
