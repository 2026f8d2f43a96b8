use serde::{Deserialize, Serialize};

/// A statistic that can be incremented, decremented or set.
///
/// Used with `StatsAtomics::update_stats()` and `StatsAtomics::set_stats()`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    DatagramsReceived,
    PacketsReceived,
    MetricsParsed,
    MalformedMetrics,
    MetricsRelayed,
    RelayFailures,
    Unroutable,
    BackendsAlive,
    BackendsConfigured,
}
