// Copyright (c) Sienna Satterwhite, Peekbuf Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::iter::FusedIterator;

use crate::producer::PeekableProducer;

/// Lookahead view returned by [`PeekableProducer::peek_while`]. It walks
/// forward by offset and hands out clones, so the parent's position never
/// moves.
pub struct PeekWhile<'a, P, F> {
    parent: &'a mut P,
    offset: usize,
    predicate: F,
    done: bool,
}

impl<'a, P, F> PeekWhile<'a, P, F>
where
    P: PeekableProducer,
    F: FnMut(&P::Item) -> bool,
{
    pub(crate) fn new(parent: &'a mut P, predicate: F) -> Self {
        Self {
            parent,
            offset: 0,
            predicate,
            done: false,
        }
    }
}

impl<P, F> Iterator for PeekWhile<'_, P, F>
where
    P: PeekableProducer,
    P::Item: Clone,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.parent.lift(self.offset) {
            | Some(item) if (self.predicate)(item) => {
                let item = item.clone();
                self.offset += 1;
                Some(item)
            },
            | _ => {
                self.done = true;
                None
            },
        }
    }
}

impl<P, F> FusedIterator for PeekWhile<'_, P, F>
where
    P: PeekableProducer,
    P::Item: Clone,
    F: FnMut(&P::Item) -> bool,
{
}

/// Consuming view returned by [`PeekableProducer::take_while_ref`]. Each item
/// is checked in place before it is taken, so the first failing item stays
/// with the parent.
pub struct TakeWhileRef<'a, P, F> {
    parent: &'a mut P,
    predicate: F,
    done: bool,
}

impl<'a, P, F> TakeWhileRef<'a, P, F>
where
    P: PeekableProducer,
    F: FnMut(&P::Item) -> bool,
{
    pub(crate) fn new(parent: &'a mut P, predicate: F) -> Self {
        Self {
            parent,
            predicate,
            done: false,
        }
    }
}

impl<P, F> Iterator for TakeWhileRef<'_, P, F>
where
    P: PeekableProducer,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.parent.head_option().is_some_and(&mut self.predicate) {
            return self.parent.consume().ok();
        }

        self.done = true;
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        (0, self.parent.known_size())
    }
}

impl<P, F> FusedIterator for TakeWhileRef<'_, P, F>
where
    P: PeekableProducer,
    F: FnMut(&P::Item) -> bool,
{
}
