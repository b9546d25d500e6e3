//! Test harness: an in-memory header source and log setup.

use std::collections::BTreeMap;
use std::sync::Once;

use opkit::{BlockHeader, BlockSource};

/// Headers keyed by round, with an explicit current round.
#[derive(Clone, Debug, Default)]
pub struct MemoryBlocks {
    current: u64,
    headers: BTreeMap<u64, BlockHeader>,
}

impl MemoryBlocks {
    /// A chain whose rounds `0..current` all have headers.
    ///
    /// Round `r` gets timestamp `genesis_ts + 4 * r` and seed `sha3_256(le64(r))`.
    #[must_use]
    pub fn linear(current: u64, genesis_ts: u64) -> Self {
        let headers = (0..current)
            .map(|round| {
                let header = BlockHeader {
                    round,
                    timestamp: genesis_ts + 4 * round,
                    seed: opkit::ops::sha3_256(&round.to_le_bytes()),
                };
                (round, header)
            })
            .collect();
        Self { current, headers }
    }

    /// Drop a header to simulate a pruned source.
    pub fn prune(&mut self, round: u64) {
        self.headers.remove(&round);
    }
}

impl BlockSource for MemoryBlocks {
    fn current_round(&self) -> u64 {
        self.current
    }

    fn header(&self, round: u64) -> Option<BlockHeader> {
        self.headers.get(&round).copied()
    }
}

/// Install a test-writer subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Decode a hex fixture.
///
/// # Panics
/// On invalid hex; fixtures are compile-time constants.
#[must_use]
pub fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("valid hex fixture")
}
