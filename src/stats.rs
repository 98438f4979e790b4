// Copyright (c) Sienna Satterwhite, Peekbuf Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use getset::CopyGetters;

/// Counters kept by each [`crate::PeekBuffer`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Stats {
    /// Elements pulled out of the source, whether delivered directly or queued.
    pulled: usize,
    /// The deepest the lookahead queue has been.
    max_queued: usize,
}

impl Stats {
    pub(crate) fn record_pull(&mut self, queued: usize) {
        self.pulled += 1;
        self.max_queued = self.max_queued.max(queued);
    }
}

#[cfg(test)]
mod tests {
    use super::Stats;

    #[test]
    fn test_record_pull() {
        let mut stats = Stats::default();
        stats.record_pull(1);
        stats.record_pull(3);
        stats.record_pull(0);

        assert_eq!(stats.pulled(), 3);
        assert_eq!(stats.max_queued(), 3);
    }
}
