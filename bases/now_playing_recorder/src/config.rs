// bases/now_playing_recorder/src/config.rs
use clap::Parser;
use now_playing_source::DEFAULT_PROGRAM;
use play_history::DEFAULT_DATABASE;
use std::path::PathBuf;
use std::time::Duration;

/// How often the player is sampled
pub const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Recorder configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database file the history is appended to
    pub database: PathBuf,

    /// Executable queried for now-playing metadata
    pub program: String,

    pub poll_interval: Duration,
}

/// Records a history of what your media player is playing
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Database file to append the history to
    #[arg(long, default_value = DEFAULT_DATABASE)]
    pub database: PathBuf,

    /// Now-playing utility to query
    #[arg(long, default_value = DEFAULT_PROGRAM)]
    pub command: String,
}

impl Config {
    pub fn from_args(args: CliArgs) -> Self {
        Self {
            database: args.database,
            program: args.command,
            poll_interval: POLL_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let argv = std::iter::once("now-playing-recorder").chain(args.iter().copied());
        let args = CliArgs::try_parse_from(argv).unwrap();
        Config::from_args(args)
    }

    #[test]
    fn defaults_match_nowplaying_cli_setup() {
        let config = parse(&[]);
        assert_eq!(config.database, PathBuf::from("my_music_data.db"));
        assert_eq!(config.program, "nowplaying-cli");
        assert_eq!(config.poll_interval, Duration::from_secs(10));
    }

    #[test]
    fn database_and_command_can_be_overridden() {
        let config = parse(&["--database", "/tmp/history.db", "--command", "/opt/bin/np"]);
        assert_eq!(config.database, PathBuf::from("/tmp/history.db"));
        assert_eq!(config.program, "/opt/bin/np");
    }

    #[test]
    fn interval_is_not_a_flag() {
        let result = CliArgs::try_parse_from(["now-playing-recorder", "--interval", "1"]);
        assert!(result.is_err());
    }
}
