/// Counter updates and snapshots.
pub mod stats_atomics;
