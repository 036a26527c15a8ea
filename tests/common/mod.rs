use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use insta_cmd::get_cargo_bin;

/// A throwaway resource tree: named subdirectories holding pony/balloon
/// files, plus a `ponyls` command wired to an isolated environment.
pub struct TestAssets {
    temp_dir: TempDir,
}

impl TestAssets {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Path of a named directory, creating it on first use.
    pub fn dir(&self, name: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        if !path.exists() {
            std::fs::create_dir_all(&path).expect("Failed to create resource dir");
        }
        path
    }

    /// Create an empty resource file `dir/<file>`.
    pub fn file(&self, dir: &str, file: &str) -> PathBuf {
        let path = self.dir(dir).join(file);
        std::fs::write(&path, "").expect("Failed to write resource file");
        path
    }

    /// Create a symlink `dir/<link>` pointing at `target`.
    #[cfg(unix)]
    pub fn link(&self, dir: &str, link: &str, target: &Path) {
        std::os::unix::fs::symlink(target, self.dir(dir).join(link))
            .expect("Failed to create symlink");
    }

    /// The `ponyls` binary with config and color detection pinned down:
    /// `PONYLS_CONFIG` points at a missing file so the user's real config
    /// never leaks in, and forced-color variables are cleared so piped
    /// output is plain text at the default 80-column width.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin("ponyls"));
        cmd.env("PONYLS_CONFIG", self.temp_dir.path().join("no-config.toml"))
            .env("NO_COLOR", "1")
            .env_remove("CLICOLOR_FORCE")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run the command and return (stdout, stderr, success).
    pub fn run(&self, mut cmd: Command) -> (String, String, bool) {
        let output = cmd.output().expect("Failed to run ponyls");
        (
            String::from_utf8(output.stdout).expect("stdout not UTF-8"),
            String::from_utf8(output.stderr).expect("stderr not UTF-8"),
            output.status.success(),
        )
    }
}
