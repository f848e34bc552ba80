//! Presentation metadata attached to records by whoever stores them.
//!
//! Nothing here is hashed or signed.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::record::Transaction;

/// Sequence number and timestamp of a stored record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub seq: u64,
    /// Unix time in nanoseconds.
    pub ts: i64,
}

impl Meta {
    pub fn new(seq: u64, ts: i64) -> Self {
        Self { seq, ts }
    }

    /// Stamp `seq` with the current system time.
    pub fn now(seq: u64) -> Self {
        let ts = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_nanos()).unwrap_or(i64::MAX),
            Err(before) => i64::try_from(before.duration().as_nanos())
                .map(|n| -n)
                .unwrap_or(i64::MIN),
        };
        Self { seq, ts }
    }
}

/// A record together with its metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wrapper {
    pub tx: Transaction,
    pub meta: Meta,
}

impl Wrapper {
    pub fn new(tx: Transaction, meta: Meta) -> Self {
        Self { tx, meta }
    }
}
