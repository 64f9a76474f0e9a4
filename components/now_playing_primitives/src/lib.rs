//! Now-playing domain types
//!
//! This component provides the building blocks for recording what a media
//! player is playing:
//! - [`NowPlayingRecord`]: one snapshot of the player's metadata
//! - [`parse_now_playing`]: turns the six-line report of the now-playing
//!   utility into a record
//! - [`ChangeDetector`]: suppresses consecutive identical snapshots
//! - [`StoredSample`]: a record stamped with the time it was recorded
//!
//! # Examples
//!
//! ```
//! use now_playing_primitives::{parse_now_playing, Change, ChangeDetector};
//!
//! let record = parse_now_playing("Song\nAlbum\nArtist\n1.0\n200.5\n50.25\n").unwrap();
//! assert_eq!(record.playback_rate, 1);
//!
//! let mut detector = ChangeDetector::new();
//! assert!(matches!(detector.observe(record.clone()), Change::Changed(_)));
//! assert!(matches!(detector.observe(record), Change::Unchanged));
//! ```

mod dedup;
mod parse;
mod record;

pub use dedup::{Change, ChangeDetector};
pub use parse::{parse_now_playing, FormatError};
pub use record::{NowPlayingField, NowPlayingRecord, StoredSample};
