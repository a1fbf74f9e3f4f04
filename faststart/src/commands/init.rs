use std::{
    io::IsTerminal,
    path::{Path, PathBuf},
};

use clap::Args;
use dialoguer::{Confirm, Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use faststart_codegen::generation::FaststartTomlFile;
use faststart_config::{AuthType, GenerationConfig, MANIFEST_FILE, ProjectType};
use faststart_core::{GeneratedFile, WriteResult};

use super::{Overrides, UnwrapOrExit};

#[derive(Args)]
pub struct InitCommand {
    /// Project name (defaults to current directory)
    #[arg(default_value = ".")]
    pub name: String,

    /// Output directory (defaults to ./<name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: Overrides,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let (project_name, output_dir) = Self::resolve_paths(&self.name, self.output.clone())?;
        let interactive = std::io::stdin().is_terminal();

        let project_type = match self.overrides.project_type {
            Some(project_type) => project_type,
            None if interactive => Self::prompt_project_type()?,
            None => ProjectType::default(),
        };
        let auth = match self.overrides.auth {
            Some(auth) => auth,
            None if interactive => Self::prompt_auth()?,
            None => AuthType::default(),
        };
        let is_async = match self.overrides.mode() {
            Some(is_async) => is_async,
            None if interactive => Self::prompt_async()?,
            None => false,
        };

        let config = GenerationConfig::new(project_name)
            .unwrap_or_exit()
            .with_project_type(project_type)
            .with_auth(auth)
            .with_async(is_async);

        match FaststartTomlFile::from_config(&config).write(&output_dir)? {
            WriteResult::Written => {
                println!("Created {}", output_dir.join(MANIFEST_FILE).display());
            }
            WriteResult::Skipped => {
                println!(
                    "{} already exists, left unchanged",
                    output_dir.join(MANIFEST_FILE).display()
                );
            }
        }

        println!();
        println!("Next steps:");
        if output_dir != Path::new(".") {
            println!("  cd {}", output_dir.display());
        }
        println!("  faststart bake");

        Ok(())
    }

    fn prompt_project_type() -> Result<ProjectType> {
        let labels: Vec<_> = ProjectType::ALL.iter().map(ProjectType::label).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a project type")
            .items(&labels)
            .default(0)
            .interact()
            .wrap_err("Failed to get project type selection")?;

        Ok(ProjectType::ALL[selection])
    }

    fn prompt_auth() -> Result<AuthType> {
        let labels: Vec<_> = AuthType::ALL.iter().map(AuthType::label).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select authentication")
            .items(&labels)
            .default(0)
            .interact()
            .wrap_err("Failed to get auth selection")?;

        Ok(AuthType::ALL[selection])
    }

    fn prompt_async() -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Use async database sessions?")
            .default(false)
            .interact()
            .wrap_err("Failed to get async selection")
    }

    fn resolve_paths(name: &str, output: Option<PathBuf>) -> Result<(String, PathBuf)> {
        if name == "." {
            let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
            let dir_name = cwd
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| eyre::eyre!("Current directory has no valid name"))?
                .to_string();
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            Ok((dir_name, output_dir))
        } else {
            let output_dir = output.unwrap_or_else(|| PathBuf::from(name));
            Ok((name.to_string(), output_dir))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_named_paths() {
        let (name, dir) = InitCommand::resolve_paths("shop", None).unwrap();
        assert_eq!(name, "shop");
        assert_eq!(dir, PathBuf::from("shop"));

        let (_, dir) = InitCommand::resolve_paths("shop", Some(PathBuf::from("elsewhere"))).unwrap();
        assert_eq!(dir, PathBuf::from("elsewhere"));
    }

    #[test]
    fn test_resolve_current_dir() {
        let (name, dir) = InitCommand::resolve_paths(".", None).unwrap();
        assert!(!name.is_empty());
        assert_eq!(dir, PathBuf::from("."));
    }
}
