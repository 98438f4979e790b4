// Copyright (c) Sienna Satterwhite, Peekbuf Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use crate::{
    errs::{
        PeekError,
        Result,
    },
    views::{
        PeekWhile,
        TakeWhileRef,
    },
};

/// Lookahead over a single-pass sequence. Anything implementing this can be
/// looked into at any forward offset without giving up items; only
/// [`PeekableProducer::consume`] moves the position forward.
///
/// This sits next to [`Iterator`] rather than on top of it, so a type can be a
/// plain producer, a lookahead producer, or both.
pub trait PeekableProducer {
    type Item;

    /// The item `index` positions ahead, where `0` is the item the next
    /// [`PeekableProducer::consume`] would return. Returns `None` if the
    /// sequence ends before that offset.
    fn lift(&mut self, index: usize) -> Option<&Self::Item>;

    /// Every offset in `start..=end`, in order. An inverted range is rejected
    /// with [`PeekError::InvalidRange`].
    fn lift_many(&mut self, start: usize, end: usize) -> Result<Vec<Option<&Self::Item>>>;

    /// Removes and returns the next item.
    fn consume(&mut self) -> Result<Self::Item>;

    /// The exact number of items left, or `None` if the underlying source
    /// can't say.
    fn known_size(&self) -> Option<usize>;

    fn has_next(&mut self) -> bool {
        self.lift(0).is_some()
    }

    fn head(&mut self) -> Result<&Self::Item> {
        self.lift(0).ok_or(PeekError::EmptySequence)
    }

    fn head_option(&mut self) -> Option<&Self::Item> {
        self.lift(0)
    }

    /// Looks ahead from the current position for as long as `predicate`
    /// holds. Nothing is consumed, so this can be repeated as often as needed.
    fn peek_while<F>(&mut self, predicate: F) -> PeekWhile<'_, Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool, {
        PeekWhile::new(self, predicate)
    }

    /// Consumes items for as long as `predicate` holds. The first item that
    /// fails is left in place for the next read.
    fn take_while_ref<F>(&mut self, predicate: F) -> TakeWhileRef<'_, Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool, {
        TakeWhileRef::new(self, predicate)
    }

    /// Discards items for as long as `predicate` holds and stops on the first
    /// one that fails, without consuming it.
    fn drop_while<F>(&mut self, mut predicate: F) -> &mut Self
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool, {
        while self.head_option().is_some_and(&mut predicate) {
            let _ = self.consume();
        }
        self
    }
}
