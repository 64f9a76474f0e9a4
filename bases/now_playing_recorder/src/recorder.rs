// bases/now_playing_recorder/src/recorder.rs
use crate::error::TickError;
use clock::TimeSource;
use now_playing_primitives::{parse_now_playing, Change, ChangeDetector, StoredSample};
use now_playing_source::NowPlayingSource;
use play_history::{HistoryStore, StoreError};
use std::future::Future;
use std::path::Path;
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};

/// What a successful tick did
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Same as the previous sample, nothing written
    Unchanged,
    Recorded(StoredSample),
}

/// Counters reported when the recorder stops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub recorded: u64,
    pub failed: u64,
}

/// Samples the player on a fixed interval and appends changes to the history
pub struct Recorder<S, T> {
    source: S,
    store: HistoryStore,
    detector: ChangeDetector,
    clock: T,
    poll_interval: Duration,
}

impl<S: NowPlayingSource, T: TimeSource> Recorder<S, T> {
    /// Open the history database and build a recorder around it.
    ///
    /// Failing here is fatal: without a store there is nothing to record to.
    pub fn open(
        database: impl AsRef<Path>,
        source: S,
        clock: T,
        poll_interval: Duration,
    ) -> Result<Self, StoreError> {
        let store = HistoryStore::open(database)?;
        Ok(Self::new(source, store, clock, poll_interval))
    }

    pub fn new(source: S, store: HistoryStore, clock: T, poll_interval: Duration) -> Self {
        Self {
            source,
            store,
            detector: ChangeDetector::new(),
            clock,
            poll_interval,
        }
    }

    /// One sample, parse, compare, store cycle.
    ///
    /// The first failing stage ends the tick. A record that fails to insert
    /// still counts as seen, so it is not retried until playback changes.
    pub async fn tick(&mut self) -> Result<TickOutcome, TickError> {
        let output = self.source.sample().await?;
        let record = parse_now_playing(&output)?;

        let record = match self.detector.observe(record) {
            Change::Unchanged => return Ok(TickOutcome::Unchanged),
            Change::Changed(record) => record.clone(),
        };

        let sample = StoredSample::new(self.clock.now(), record);
        self.store.record(&sample)?;

        let record = &sample.record;
        tracing::info!(
            "{} {} {} {} {} {} {}",
            sample.epoch_seconds(),
            record.title,
            record.album,
            record.artist,
            record.playback_rate,
            record.duration,
            record.elapsed_time
        );

        Ok(TickOutcome::Recorded(sample))
    }

    /// Tick every poll interval until `shutdown` resolves, then close the store.
    ///
    /// The first tick happens one interval after start. A tick that overruns
    /// is followed by at most one immediate tick; missed ticks are not
    /// replayed. Shutdown is only noticed between ticks and wins over a tick
    /// that is due at the same moment.
    pub async fn run<F>(mut self, shutdown: F) -> Result<RunSummary, StoreError>
    where
        F: Future<Output = ()>,
    {
        let mut ticker = time::interval_at(Instant::now() + self.poll_interval, self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        tracing::info!(
            "Recording now playing every {}s",
            self.poll_interval.as_secs_f64()
        );

        let mut summary = RunSummary::default();
        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    tracing::info!("Interrupt signal received. Exiting...");
                    break;
                }
                _ = ticker.tick() => {
                    summary.ticks += 1;
                    match self.tick().await {
                        Ok(TickOutcome::Recorded(_)) => summary.recorded += 1,
                        Ok(TickOutcome::Unchanged) => tracing::debug!("Now playing unchanged"),
                        Err(err) => {
                            summary.failed += 1;
                            tracing::warn!("{}", err);
                        }
                    }
                }
            }
        }

        drop(ticker);
        self.store.close()?;

        tracing::info!(
            "Stopped after {} ticks ({} recorded, {} failed)",
            summary.ticks,
            summary.recorded,
            summary.failed
        );
        Ok(summary)
    }
}
