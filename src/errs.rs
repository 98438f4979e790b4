// Copyright (c) Sienna Satterwhite, Peekbuf Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PeekError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeekError {
    #[error("empty sequence")]
    EmptySequence,
    #[error("invalid lookahead range: start {start} is past end {end}")]
    InvalidRange { start: usize, end: usize },
}
