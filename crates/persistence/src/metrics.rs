//! Prometheus instrumentation for the data layer.

use metrics::{gauge, histogram};
use sqlx::PgPool;
use std::time::Instant;

/// Histogram of query round-trip times, labeled by query name.
const QUERY_DURATION: &str = "database_query_duration_seconds";

/// Times a single query for the duration histogram.
///
/// Create one right before issuing a query and call [`QueryTimer::observe`]
/// once the future resolves, on success and failure alike.
pub struct QueryTimer {
    name: &'static str,
    started: Instant,
}

impl QueryTimer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            started: Instant::now(),
        }
    }

    pub fn observe(self) {
        histogram!(QUERY_DURATION, "query" => self.name)
            .record(self.started.elapsed().as_secs_f64());
    }
}

/// Samples connection pool occupancy into gauges.
pub fn record_pool_metrics(pool: &PgPool) {
    let size = pool.size() as f64;
    let idle = pool.num_idle() as f64;

    gauge!("database_connections_total").set(size);
    gauge!("database_connections_idle").set(idle);
    gauge!("database_connections_active").set((size - idle).max(0.0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_keeps_query_name() {
        let timer = QueryTimer::new("create_investment");
        assert_eq!(timer.name, "create_investment");
    }

    #[test]
    fn test_observe_without_recorder_is_noop() {
        let timer = QueryTimer::new("find_fund_pool_by_id");
        timer.observe();
    }
}
