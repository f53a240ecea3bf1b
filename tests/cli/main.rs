use std::{
    fs,
    path::PathBuf,
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta::internals::SettingsBindDropGuard;
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod patch;

const BIN_NAME: &str = "esper-helper";

pub struct CliTest {
    _temp_dir: TempDir,
    _settings_scope: SettingsBindDropGuard,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config discovery at the project root.
        fs::create_dir(project_dir.join(".git"))?;

        // Warnings carry absolute paths; snapshot them relative to the project.
        let mut settings = insta::Settings::clone_current();
        settings.add_filter(
            &regex::escape(&project_dir.display().to_string()),
            "[PROJECT]",
        );
        let settings_scope = settings.bind_to_scope();

        Ok(Self {
            _temp_dir: temp_dir,
            _settings_scope: settings_scope,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        self.write_bytes(path, content.as_bytes())
    }

    pub fn write_bytes(&self, path: &str, content: &[u8]) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn patch_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("patch");
        cmd
    }

    pub fn init_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("init");
        cmd
    }

    /// `patch` subcommand that can reach the system `patch` binary.
    pub fn system_patch_command(&self) -> Command {
        let mut cmd = self.patch_command();
        cmd.env("PATH", std::env::var_os("PATH").unwrap_or_default());
        cmd
    }

    pub fn exists(&self, path: &str) -> bool {
        self.project_dir.join(path).exists()
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}
