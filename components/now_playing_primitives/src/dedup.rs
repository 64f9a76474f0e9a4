use crate::record::NowPlayingRecord;

/// Outcome of comparing a fresh sample with the last one seen
#[derive(Debug, PartialEq)]
pub enum Change<'a> {
    Unchanged,
    /// The sample differs and is now the one future samples compare against
    Changed(&'a NowPlayingRecord),
}

/// Remembers the last observed record so identical consecutive samples
/// (a paused player, say) are only stored once.
///
/// Comparison is exact on every field, floats included.
#[derive(Debug, Default)]
pub struct ChangeDetector {
    previous: NowPlayingRecord,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, record: NowPlayingRecord) -> Change<'_> {
        if record == self.previous {
            return Change::Unchanged;
        }
        self.previous = record;
        Change::Changed(&self.previous)
    }
}
