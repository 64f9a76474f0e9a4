// components/now_playing_source/src/cli.rs
use crate::{NowPlayingSource, SampleError};
use async_trait::async_trait;
use now_playing_primitives::NowPlayingField;
use tokio::process::Command;

pub const DEFAULT_PROGRAM: &str = "nowplaying-cli";

/// Queries `nowplaying-cli`, spawning one process per sample
#[derive(Debug, Clone)]
pub struct NowPlayingCli {
    program: String,
}

impl NowPlayingCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("get")
            .args(NowPlayingField::ALL.iter().map(|field| field.name()));
        command
    }
}

impl Default for NowPlayingCli {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

#[async_trait]
impl NowPlayingSource for NowPlayingCli {
    async fn check_available(&self) -> Result<(), SampleError> {
        which::which(&self.program)
            .map(|path| tracing::debug!("Using {}", path.display()))
            .map_err(|_| SampleError::NotFound(self.program.clone()))
    }

    async fn sample(&self) -> Result<String, SampleError> {
        let output = self
            .command()
            .output()
            .await
            .map_err(|source| SampleError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SampleError::ExitStatus {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
