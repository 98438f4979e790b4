//! Unbounded lookahead over any single-pass iterator.
//!
//! Wrap a source with [`buffered`] (or [`PeekBuffer::new`]) to look at any
//! number of future items by offset, by range, or while a predicate holds,
//! without consuming them. The buffer is still a plain [`Iterator`] for code
//! that only ever calls `next`.

pub mod config;
pub mod errs;
pub mod peek;
pub mod producer;
pub mod stats;
pub mod views;


pub use crate::{
    errs::{
        PeekError,
        Result,
    },
    peek::{
        buffered,
        PeekBuffer,
    },
    producer::PeekableProducer,
};
