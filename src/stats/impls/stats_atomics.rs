use std::sync::atomic::{AtomicI64, Ordering};
use chrono::Utc;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        let stats = StatsAtomics::default();
        stats.started.store(Utc::now().timestamp(), Ordering::SeqCst);
        stats
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::DatagramsReceived => &self.datagrams_received,
            StatsEvent::PacketsReceived => &self.packets_received,
            StatsEvent::MetricsParsed => &self.metrics_parsed,
            StatsEvent::MalformedMetrics => &self.malformed_metrics,
            StatsEvent::MetricsRelayed => &self.metrics_relayed,
            StatsEvent::RelayFailures => &self.relay_failures,
            StatsEvent::Unroutable => &self.unroutable,
            StatsEvent::BackendsAlive => &self.backends_alive,
            StatsEvent::BackendsConfigured => &self.backends_configured,
        }
    }

    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            datagrams_received: self.datagrams_received.load(Ordering::SeqCst),
            packets_received: self.packets_received.load(Ordering::SeqCst),
            metrics_parsed: self.metrics_parsed.load(Ordering::SeqCst),
            malformed_metrics: self.malformed_metrics.load(Ordering::SeqCst),
            metrics_relayed: self.metrics_relayed.load(Ordering::SeqCst),
            relay_failures: self.relay_failures.load(Ordering::SeqCst),
            unroutable: self.unroutable.load(Ordering::SeqCst),
            backends_alive: self.backends_alive.load(Ordering::SeqCst),
            backends_configured: self.backends_configured.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.counter(event).store(value, Ordering::SeqCst);
    }
}
