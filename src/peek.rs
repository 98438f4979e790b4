// Copyright (c) Sienna Satterwhite, Peekbuf Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::{
    collections::VecDeque,
    iter::FusedIterator,
};

use tracing::{
    instrument,
    trace,
};

use crate::{
    config::BufferConfig,
    errs::{
        PeekError,
        Result,
    },
    producer::PeekableProducer,
    stats::Stats,
};

/// A peekable adapter for an iterator with unbounded lookahead. Items pulled
/// out of the source to answer a lookahead request are queued until they are
/// handed out by [`Iterator::next`], so the remaining sequence is always the
/// queue followed by whatever the source has not produced yet.
///
/// The source is pulled lazily: the queue only grows as far as the deepest
/// offset that was asked for.
#[derive(Debug, Clone)]
pub struct PeekBuffer<I: Iterator> {
    iter: I,
    peeked: VecDeque<I::Item>,
    stats: Stats,
}

/// Wraps anything iterable in a [`PeekBuffer`].
pub fn buffered<T: IntoIterator>(iterable: T) -> PeekBuffer<T::IntoIter> {
    PeekBuffer::new(iterable.into_iter())
}

impl<I: Iterator> PeekBuffer<I> {
    pub fn new(iter: I) -> Self {
        Self::with_config(iter, BufferConfig::default())
    }

    pub fn with_capacity(iter: I, capacity: usize) -> Self {
        Self::with_config(iter, BufferConfig::default().with_queue_capacity(capacity))
    }

    pub fn with_config(iter: I, config: BufferConfig) -> Self {
        Self {
            iter,
            peeked: VecDeque::with_capacity(config.queue_capacity),
            stats: Stats::default(),
        }
    }

    /// A buffer is already buffered, so this hands back the same instance
    /// rather than stacking a second queue on top of it.
    pub fn buffered(self) -> Self {
        self
    }

    pub fn source(&self) -> &I {
        &self.iter
    }

    /// How many items are sitting in the lookahead queue right now.
    pub fn buffered_len(&self) -> usize {
        self.peeked.len()
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Mutable access to the item `index` positions ahead. Like
    /// [`PeekableProducer::lift`], this pulls from the source as needed.
    #[instrument(level = "trace", skip(self))]
    pub fn lift_mut(&mut self, index: usize) -> Option<&mut I::Item> {
        self.fill(index.saturating_add(1));
        self.peeked.get_mut(index)
    }

    /// Splits the buffer into the queued items and the source. Chaining the
    /// two yields exactly what the buffer would still have produced.
    pub fn into_parts(self) -> (VecDeque<I::Item>, I) {
        (self.peeked, self.iter)
    }

    // pulls from the source until `len` items are queued. returns false if
    // the source ran dry first.
    fn fill(&mut self, len: usize) -> bool {
        while self.peeked.len() < len {
            match self.iter.next() {
                | Some(item) => {
                    self.peeked.push_back(item);
                    self.stats.record_pull(self.peeked.len());
                    trace!(queued = self.peeked.len(), "pulled from source");
                },
                | None => {
                    trace!(queued = self.peeked.len(), "source exhausted");
                    return false;
                },
            }
        }
        true
    }
}

impl<I: Iterator> PeekableProducer for PeekBuffer<I> {
    type Item = I::Item;

    #[instrument(level = "trace", skip(self))]
    fn lift(&mut self, index: usize) -> Option<&I::Item> {
        self.fill(index.saturating_add(1));
        self.peeked.get(index)
    }

    #[instrument(level = "trace", skip(self))]
    fn lift_many(&mut self, start: usize, end: usize) -> Result<Vec<Option<&I::Item>>> {
        if start > end {
            return Err(PeekError::InvalidRange { start, end });
        }

        self.fill(end.saturating_add(1));
        Ok((start..=end).map(|idx| self.peeked.get(idx)).collect())
    }

    fn has_next(&mut self) -> bool {
        !self.peeked.is_empty() || self.fill(1)
    }

    fn consume(&mut self) -> Result<I::Item> {
        self.next().ok_or(PeekError::EmptySequence)
    }

    fn known_size(&self) -> Option<usize> {
        match self.iter.size_hint() {
            | (lower, Some(upper)) if lower == upper => Some(lower.saturating_add(self.peeked.len())),
            | _ => None,
        }
    }
}

impl<I: Iterator> Iterator for PeekBuffer<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.peeked.pop_front() {
            return Some(item);
        }

        let item = self.iter.next();
        if item.is_some() {
            self.stats.record_pull(0);
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let queued = self.peeked.len();
        let (lower, upper) = self.iter.size_hint();

        (
            lower.saturating_add(queued),
            upper.and_then(|u| u.checked_add(queued)),
        )
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for PeekBuffer<I> {}

impl<I: FusedIterator> FusedIterator for PeekBuffer<I> {}
