use crate::record::{NowPlayingField, NowPlayingRecord};
use std::num::ParseFloatError;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("unexpected output format: expected 6 lines, found {found}")]
    LineCount { found: usize },

    #[error("invalid {field} value {value:?}: {source}")]
    InvalidNumber {
        field: NowPlayingField,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("{field} value {value:?} is out of range")]
    OutOfRange {
        field: NowPlayingField,
        value: String,
    },
}

/// Parse the output of `nowplaying-cli get title album artist playbackRate
/// duration elapsedTime`.
///
/// Surrounding whitespace (including the trailing newline) is trimmed
/// before splitting, so exactly six lines must remain. The text lines are
/// taken verbatim; empty ones stay empty.
pub fn parse_now_playing(output: &str) -> Result<NowPlayingRecord, FormatError> {
    let lines: Vec<&str> = output.trim().split('\n').collect();
    let &[title, album, artist, rate, duration, elapsed] = lines.as_slice() else {
        return Err(FormatError::LineCount { found: lines.len() });
    };

    let playback_rate = parse_number(NowPlayingField::PlaybackRate, rate)?;
    let duration = parse_number(NowPlayingField::Duration, duration)?;
    let elapsed_time = parse_number(NowPlayingField::ElapsedTime, elapsed)?;

    Ok(NowPlayingRecord {
        title: title.to_string(),
        album: album.to_string(),
        artist: artist.to_string(),
        // `as` truncates toward zero and saturates at the i8 bounds
        playback_rate: playback_rate as i8,
        duration,
        elapsed_time,
    })
}

/// Parse one numeric line. Spelled-out infinities are accepted, but a
/// finite literal too large for an `f64` is rejected.
fn parse_number(field: NowPlayingField, value: &str) -> Result<f64, FormatError> {
    let number: f64 = value.parse().map_err(|source| FormatError::InvalidNumber {
        field,
        value: value.to_string(),
        source,
    })?;

    if number.is_infinite() && !names_infinity(value) {
        return Err(FormatError::OutOfRange {
            field,
            value: value.to_string(),
        });
    }
    Ok(number)
}

fn names_infinity(value: &str) -> bool {
    value
        .trim_start_matches(['+', '-'])
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("inf"))
}

impl FromStr for NowPlayingRecord {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_now_playing(s)
    }
}
