//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::Once;
use studyhere_core::{NoiseLevel, SpaceId, SpaceRecord};

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Build a record with the fields the query engine looks at
pub fn record(id: u32, name: &str, capacity: u32, open_now: bool) -> SpaceRecord {
    SpaceRecord {
        id: SpaceId(id),
        name: name.to_string(),
        building: "Test Campus".to_string(),
        capacity,
        open_now,
        outlets: true,
        noise: NoiseLevel::Medium,
        emoji: String::new(),
    }
}

pub fn names(records: &[&SpaceRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

pub fn ids(records: &[&SpaceRecord]) -> Vec<u32> {
    records.iter().map(|r| r.id.0).collect()
}
