use now_playing_primitives::FormatError;
use now_playing_source::SampleError;
use play_history::StoreError;
use thiserror::Error;

/// Why a single tick was abandoned
///
/// None of these stop the recorder; the next tick simply tries again.
#[derive(Error, Debug)]
pub enum TickError {
    #[error("Error executing command: {0}")]
    Execution(#[from] SampleError),

    #[error("Error parsing output: {0}")]
    Format(#[from] FormatError),

    #[error("Error inserting data: {0}")]
    Persistence(#[from] StoreError),
}
