use std::sync::Arc;
use log::{debug, info};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use crate::metric::metric::split_lines;
use crate::metric::structs::metric_sample::MetricSample;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::udp::structs::datagram::Datagram;
use crate::udp::structs::parse_pool::ParsePool;

impl ParsePool {
    pub fn new(workers: usize, payload: mpsc::Receiver<Datagram>, stats: Arc<StatsAtomics>) -> ParsePool {
        ParsePool {
            workers: workers.max(1),
            payload: Arc::new(Mutex::new(payload)),
            stats,
        }
    }

    /// Spawns the workers. Each worker exits once the work queue is closed
    /// and drained, or when the relay queue is closed.
    pub fn start_thread(self, relay_tx: mpsc::Sender<MetricSample>) -> Vec<JoinHandle<()>> {
        let mut handles = Vec::with_capacity(self.workers);
        for i in 0..self.workers {
            let payload = self.payload.clone();
            let relay_tx = relay_tx.clone();
            let stats = self.stats.clone();
            handles.push(tokio::spawn(async move {
                info!("[WORKER] Start Parse Pool worker {i}...");
                loop {
                    let datagram = {
                        let mut payload = payload.lock().await;
                        payload.recv().await
                    };
                    let Some(datagram) = datagram else {
                        info!("[WORKER] Work queue closed, shutting down Parse Pool worker {i}...");
                        return;
                    };
                    if Self::handle_datagram(&datagram.data, &relay_tx, &stats).await.is_err() {
                        info!("[WORKER] Relay queue closed, shutting down Parse Pool worker {i}...");
                        return;
                    }
                }
            }));
        }
        handles
    }

    /// Parses every line of `data` and forwards the samples in line order.
    ///
    /// Malformed lines are counted and dropped. Returns the number of samples
    /// forwarded, or an error when the relay queue is closed.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn handle_datagram(data: &[u8], relay_tx: &mpsc::Sender<MetricSample>, stats: &StatsAtomics) -> Result<usize, mpsc::error::SendError<MetricSample>> {
        let mut forwarded = 0;
        for line in split_lines(data) {
            stats.update_stats(StatsEvent::PacketsReceived, 1);
            match MetricSample::from_bytes(line) {
                Ok(sample) => {
                    stats.update_stats(StatsEvent::MetricsParsed, 1);
                    relay_tx.send(sample).await?;
                    forwarded += 1;
                }
                Err(error) => {
                    stats.update_stats(StatsEvent::MalformedMetrics, 1);
                    debug!("[WORKER] {error}");
                }
            }
        }
        Ok(forwarded)
    }
}
