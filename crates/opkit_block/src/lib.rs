#![forbid(unsafe_code)]
#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::multiple_crate_versions
)]

//! Historical block metadata lookup.
//!
//! The headers live with the caller; this crate only enforces which rounds
//! may be read. A round is available when it is strictly before the current
//! round and at most [`MAX_BLOCK_LOOKBACK`] rounds behind it.

use core::ops::RangeInclusive;

use thiserror::Error;

/// Oldest readable round is `current - MAX_BLOCK_LOOKBACK`.
pub const MAX_BLOCK_LOOKBACK: u64 = 1000;

/// 32-byte block seed.
pub type BlockSeed = [u8; 32];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    pub round: u64,
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
    pub seed: BlockSeed,
}

/// Caller-side header store.
pub trait BlockSource {
    /// Round currently being evaluated.
    fn current_round(&self) -> u64;

    /// Header of a committed round, if the source still has it.
    fn header(&self, round: u64) -> Option<BlockHeader>;
}

impl<T: BlockSource + ?Sized> BlockSource for &T {
    fn current_round(&self) -> u64 {
        (**self).current_round()
    }

    fn header(&self, round: u64) -> Option<BlockHeader> {
        (**self).header(round)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockField {
    Timestamp,
    Seed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockValue {
    Timestamp(u64),
    Seed(BlockSeed),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("round {round} unavailable at current round {current} (window {first}..={last})")]
    RoundUnavailable {
        round: u64,
        current: u64,
        first: u64,
        last: u64,
    },

    #[error("header for round {round} missing from source")]
    HeaderMissing { round: u64 },

    #[error("source returned header for round {got} when asked for {round}")]
    HeaderMismatch { round: u64, got: u64 },
}

/// Rounds readable while evaluating `current`; `None` at round 0.
#[must_use]
pub fn available_rounds(current: u64) -> Option<RangeInclusive<u64>> {
    let last = current.checked_sub(1)?;
    Some(current.saturating_sub(MAX_BLOCK_LOOKBACK)..=last)
}

/// Fetch the header of `round`, enforcing the lookback window.
pub fn lookup<S: BlockSource + ?Sized>(src: &S, round: u64) -> Result<BlockHeader, BlockError> {
    let current = src.current_round();
    let window = available_rounds(current);
    if !window.as_ref().is_some_and(|w| w.contains(&round)) {
        let (first, last) = window.map_or((current, current), |w| (*w.start(), *w.end()));
        tracing::debug!(round, current, first, last, "block round outside lookback window");
        return Err(BlockError::RoundUnavailable {
            round,
            current,
            first,
            last,
        });
    }
    let header = src.header(round).ok_or_else(|| {
        tracing::debug!(round, "block header missing");
        BlockError::HeaderMissing { round }
    })?;
    if header.round != round {
        tracing::debug!(round, got = header.round, "block source returned a foreign header");
        return Err(BlockError::HeaderMismatch {
            round,
            got: header.round,
        });
    }
    Ok(header)
}

/// Timestamp of `round`.
pub fn block_timestamp<S: BlockSource + ?Sized>(src: &S, round: u64) -> Result<u64, BlockError> {
    lookup(src, round).map(|h| h.timestamp)
}

/// Seed of `round`.
pub fn block_seed<S: BlockSource + ?Sized>(src: &S, round: u64) -> Result<BlockSeed, BlockError> {
    lookup(src, round).map(|h| h.seed)
}

pub fn block_field<S: BlockSource + ?Sized>(
    src: &S,
    round: u64,
    field: BlockField,
) -> Result<BlockValue, BlockError> {
    let header = lookup(src, round)?;
    Ok(match field {
        BlockField::Timestamp => BlockValue::Timestamp(header.timestamp),
        BlockField::Seed => BlockValue::Seed(header.seed),
    })
}
