// components/now_playing_source/src/lib.rs
mod cli;

pub use cli::{NowPlayingCli, DEFAULT_PROGRAM};

use async_trait::async_trait;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("now-playing utility not found: {0}")]
    NotFound(String),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    ExitStatus {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Something that can report what is currently playing
///
/// The report is the raw six-line text understood by
/// [`now_playing_primitives::parse_now_playing`].
#[async_trait]
pub trait NowPlayingSource {
    /// Check that the source can be queried at all
    async fn check_available(&self) -> Result<(), SampleError>;

    /// Take one sample
    async fn sample(&self) -> Result<String, SampleError>;
}
