//! Integration test common infrastructure.
//!
//! Spawns the `kami` binary with a temporary config, feeds it input lines
//! and collects what it printed.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Output of one finished console session.
pub struct SessionOutput {
    pub stdout: Vec<String>,
    pub stderr: String,
    pub success: bool,
}

/// A console session against the `kami` binary.
pub struct TestConsole {
    _dir: TempDir,
    config_path: PathBuf,
}

impl TestConsole {
    /// Prepare a session with the given TOML config.
    pub fn with_config(config: &str) -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let config_path = dir.path().join("kami.toml");
        std::fs::write(&config_path, config)?;
        Ok(Self {
            _dir: dir,
            config_path,
        })
    }

    /// Prepare a session pointing at a config file that does not exist.
    pub fn without_config() -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let config_path = dir.path().join("missing.toml");
        Ok(Self {
            _dir: dir,
            config_path,
        })
    }

    /// Feed `lines` to the binary, close stdin and wait for it to exit.
    pub async fn run(&self, lines: &[&str]) -> anyhow::Result<SessionOutput> {
        let mut child = Command::new(env!("CARGO_BIN_EXE_kami"))
            .arg(&self.config_path)
            .env("RUST_LOG", "kami=debug")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow::anyhow!("stdin not captured"))?;
        for line in lines {
            stdin.write_all(line.as_bytes()).await?;
            stdin.write_all(b"\n").await?;
        }
        stdin.flush().await?;
        drop(stdin);

        let output =
            tokio::time::timeout(Duration::from_secs(10), child.wait_with_output()).await??;

        Ok(SessionOutput {
            stdout: String::from_utf8(output.stdout)?
                .lines()
                .map(str::to_string)
                .collect(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        })
    }
}
