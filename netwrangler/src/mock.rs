//! Mock API responses for demo mode and tests.
//!
//! Provides realistic snapshots without a running backend.

use rand::Rng;
use serde_json::json;

use netwrangler_common::{MetricsSnapshot, OperationsSnapshot, SliceRecord};

/// Slice categories served by the mock backend, with their nominal
/// throughput (Mbps) and latency (ms).
const SLICE_PROFILES: [(&str, &str, f64, f64); 3] = [
    ("embb-1", "eMBB", 850.0, 18.0),
    ("urllc-1", "URLLC", 45.0, 1.0),
    ("mmtc-1", "mMTC", 5.0, 95.0),
];

/// A fixed operations snapshot.
pub fn operations() -> OperationsSnapshot {
    OperationsSnapshot {
        metrics: MetricsSnapshot::new()
            .with_metric("health_score", 97.5)
            .with_metric("active_cells", 1248)
            .with_metric("connected_ues", 48_210),
        slice_performance: json!({
            "embb-1": {"throughput": 850, "latency": 18},
            "urllc-1": {"throughput": 45, "latency": 1},
        }),
        anomalies: vec![json!({
            "cell": "gNB-0412",
            "kind": "latency_spike",
            "severity": "warning",
        })],
    }
}

/// A fixed slice list.
pub fn slices() -> Vec<SliceRecord> {
    SLICE_PROFILES
        .iter()
        .map(|(id, kind, throughput, latency)| {
            SliceRecord::new(*id, *kind)
                .with_readings(*throughput, *latency)
                .with_status("active")
        })
        .collect()
}

/// An operations snapshot with random jitter on every numeric value.
pub fn jittered_operations<R: Rng>(rng: &mut R) -> OperationsSnapshot {
    let health: f64 = rng.random_range(88.0..99.5);
    let anomaly_count = rng.random_range(0..4);

    OperationsSnapshot {
        metrics: MetricsSnapshot::new()
            .with_metric("health_score", (health * 10.0).round() / 10.0)
            .with_metric("active_cells", rng.random_range(1200..1300))
            .with_metric("connected_ues", rng.random_range(45_000..52_000)),
        slice_performance: json!({
            "embb-1": {"throughput": rng.random_range(700..900), "latency": rng.random_range(12..25)},
            "urllc-1": {"throughput": rng.random_range(40..50), "latency": 1},
        }),
        anomalies: (0..anomaly_count)
            .map(|i| {
                json!({
                    "cell": format!("gNB-{:04}", rng.random_range(1..2000)),
                    "kind": if i % 2 == 0 { "latency_spike" } else { "throughput_drop" },
                })
            })
            .collect(),
    }
}

/// A slice list with random jitter on throughput and latency.
pub fn jittered_slices<R: Rng>(rng: &mut R) -> Vec<SliceRecord> {
    SLICE_PROFILES
        .iter()
        .map(|(id, kind, throughput, latency)| {
            let throughput = (throughput * rng.random_range(0.85..1.1)).round();
            let latency = (latency * rng.random_range(0.9..1.3) * 10.0).round() / 10.0;
            SliceRecord::new(*id, *kind)
                .with_readings(throughput, latency)
                .with_status("active")
        })
        .collect()
}
