use chrono::{DateTime, Utc};
use std::fmt;

/// The metadata fields requested from the now-playing utility
///
/// Declaration order is request order: the utility prints one line per
/// field, in the order the fields were asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NowPlayingField {
    Title,
    Album,
    Artist,
    PlaybackRate,
    Duration,
    ElapsedTime,
}

impl NowPlayingField {
    pub const ALL: [Self; 6] = [
        Self::Title,
        Self::Album,
        Self::Artist,
        Self::PlaybackRate,
        Self::Duration,
        Self::ElapsedTime,
    ];

    /// Name understood by the now-playing utility
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Album => "album",
            Self::Artist => "artist",
            Self::PlaybackRate => "playbackRate",
            Self::Duration => "duration",
            Self::ElapsedTime => "elapsedTime",
        }
    }
}

impl fmt::Display for NowPlayingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One snapshot of what the media player reports as playing
///
/// `Default` is the all-empty snapshot, which is also what the change
/// detector compares the very first sample against.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NowPlayingRecord {
    pub title: String,
    pub album: String,
    pub artist: String,
    /// Playback speed multiplier, truncated toward zero (1 playing,
    /// 0 paused, -1 rewinding)
    pub playback_rate: i8,
    /// Track length in seconds
    pub duration: f64,
    /// Position within the track in seconds
    pub elapsed_time: f64,
}

/// A record as it is appended to the history
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSample {
    pub recorded_at: DateTime<Utc>,
    pub record: NowPlayingRecord,
}

impl StoredSample {
    pub fn new(recorded_at: DateTime<Utc>, record: NowPlayingRecord) -> Self {
        Self {
            recorded_at,
            record,
        }
    }

    /// Recording time as whole seconds since the Unix epoch
    pub fn epoch_seconds(&self) -> i64 {
        self.recorded_at.timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fields_are_listed_in_request_order() {
        let names: Vec<_> = NowPlayingField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            [
                "title",
                "album",
                "artist",
                "playbackRate",
                "duration",
                "elapsedTime"
            ]
        );
    }

    #[test]
    fn default_record_is_empty() {
        let record = NowPlayingRecord::default();
        assert!(record.title.is_empty());
        assert!(record.album.is_empty());
        assert!(record.artist.is_empty());
        assert_eq!(record.playback_rate, 0);
        assert_eq!(record.duration, 0.0);
        assert_eq!(record.elapsed_time, 0.0);
    }

    #[test]
    fn stored_sample_reports_epoch_seconds() {
        let at = Utc.timestamp_opt(1_700_000_123, 500_000_000).unwrap();
        let sample = StoredSample::new(at, NowPlayingRecord::default());
        assert_eq!(sample.epoch_seconds(), 1_700_000_123);
    }
}
