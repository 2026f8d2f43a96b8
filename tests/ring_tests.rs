mod common;

use std::collections::HashMap;
use std::sync::Arc;
use statsd_proxy::backend::structs::statsd_backend::StatsdBackend;
use statsd_proxy::ring::enums::ring_error::RingError;
use statsd_proxy::ring::structs::hash_ring::HashRing;
use statsd_proxy::ring::structs::ring_position::RingPosition;

async fn switched_backend(port: u16, up: bool) -> (Arc<StatsdBackend>, Arc<common::SwitchProbe>) {
    let probe = common::SwitchProbe::new(up);
    let backend = StatsdBackend::new("127.0.0.1", port, 9999, 1000).unwrap().with_probe(probe.clone());
    backend.check_liveness().await;
    (Arc::new(backend), probe)
}

fn assignments(ring: &HashRing, names: &[String]) -> HashMap<String, u16> {
    names.iter()
        .map(|name| (name.clone(), ring.resolve_metric(name).unwrap()[0].port))
        .collect()
}

fn metric_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("service.endpoint_{i}.latency")).collect()
}

#[test]
fn test_position_of_matches_md5_prefix() {
    assert_eq!(HashRing::position_of(""), RingPosition(0xd98c1dd4));
    assert_eq!(HashRing::position_of("requests.count"), HashRing::position_of("requests.count"));
}

#[tokio::test]
async fn test_ring_members_sorted_by_position() {
    let mut ring = HashRing::new(false);
    for port in [9001, 9002, 9003, 9004] {
        let (backend, _) = switched_backend(port, true).await;
        ring.add(backend).unwrap();
    }
    let positions: Vec<RingPosition> = ring.backends().iter().map(|backend| backend.ring_position()).collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
    assert_eq!(ring.len(), 4);
}

#[tokio::test]
async fn test_ring_rejects_dead_backend() {
    let mut ring = HashRing::new(false);
    let (backend, _) = switched_backend(9001, false).await;
    assert!(matches!(ring.add(backend), Err(RingError::BackendUnavailable(_))));
    assert!(ring.is_empty());
    assert_eq!(ring.resolve_metric("requests.count").unwrap_err(), RingError::EmptyRing);
}

#[tokio::test]
async fn test_ring_spreads_metrics() {
    let mut ring = HashRing::new(false);
    for port in [9001, 9002, 9003] {
        let (backend, _) = switched_backend(port, true).await;
        ring.add(backend).unwrap();
    }
    let names = metric_names(2000);
    let assigned = assignments(&ring, &names);
    let mut per_backend: HashMap<u16, usize> = HashMap::new();
    for port in assigned.values() {
        *per_backend.entry(*port).or_default() += 1;
    }
    assert_eq!(per_backend.values().sum::<usize>(), 2000);
    assert!(per_backend.len() >= 2, "Metrics should not all land on one backend");
}

#[tokio::test]
async fn test_ring_only_moves_metrics_of_dead_backend() {
    let mut ring = HashRing::new(false);
    let mut probes = Vec::new();
    for port in [9001, 9002, 9003] {
        let (backend, probe) = switched_backend(port, true).await;
        ring.add(backend).unwrap();
        probes.push(probe);
    }
    let names = metric_names(500);
    let before = assignments(&ring, &names);

    let victim = ring.backends()[1].clone();
    let victim_index = [9001, 9002, 9003].iter().position(|port| *port == victim.port).unwrap();
    probes[victim_index].set(false);
    assert!(!victim.check_liveness().await);

    let during = assignments(&ring, &names);
    for name in &names {
        if before[name] == victim.port {
            assert_ne!(during[name], victim.port, "{name} should move off the dead backend");
        } else {
            assert_eq!(during[name], before[name], "{name} should stay where it was");
        }
    }

    probes[victim_index].set(true);
    assert!(victim.check_liveness().await);
    assert_eq!(assignments(&ring, &names), before, "Metrics return once the backend recovers");
}

#[tokio::test]
async fn test_ring_all_dead_is_empty_ring() {
    let mut ring = HashRing::new(false);
    let (backend, probe) = switched_backend(9001, true).await;
    ring.add(backend.clone()).unwrap();
    probe.set(false);
    backend.check_liveness().await;
    assert_eq!(ring.resolve_metric("requests.count").unwrap_err(), RingError::EmptyRing);
}

#[tokio::test]
async fn test_ring_mirror_totality() {
    let mut ring = HashRing::new(true);
    for port in [9001, 9002, 9003] {
        let (backend, _) = switched_backend(port, true).await;
        ring.add(backend).unwrap();
    }
    let expected: Vec<String> = ring.backends().iter().map(|backend| backend.key()).collect();
    for name in metric_names(50) {
        let resolved: Vec<String> = ring.resolve_metric(&name).unwrap().iter().map(|backend| backend.key()).collect();
        assert_eq!(resolved, expected);
    }
}

#[tokio::test]
async fn test_ring_duplicate_rejected() {
    let mut ring = HashRing::new(false);
    let (first, _) = switched_backend(9001, true).await;
    let (second, _) = switched_backend(9001, true).await;
    ring.add(first).unwrap();
    assert!(matches!(ring.add(second), Err(RingError::DuplicateBackend(_))));
    assert_eq!(ring.len(), 1);
}
