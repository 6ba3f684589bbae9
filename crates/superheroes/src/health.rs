//! Liveness probes for the running stores.
//!
//! A probe round-trips a `count` through the service's typed client: if the
//! answer comes back, the store task is alive and draining its channel. The
//! count rides along in the status because it is free at that point and
//! handy in logs.

use entity_store::{EntityClient, StoreEntity};
use serde::Serialize;
use std::fmt::Display;
use tracing::{debug, warn};

/// The outcome of pinging one service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub service: &'static str,
    pub up: bool,
    pub count: Option<usize>,
}

/// Ping one store through its typed client.
pub async fn ping<T, C>(service: &'static str, client: &C) -> HealthStatus
where
    T: StoreEntity,
    C: EntityClient<T>,
    C::Error: Display,
{
    match client.count().await {
        Ok(count) => {
            debug!(service, count, "Ping ok");
            HealthStatus {
                service,
                up: true,
                count: Some(count),
            }
        }
        Err(e) => {
            warn!(service, error = %e, "Ping failed");
            HealthStatus {
                service,
                up: false,
                count: None,
            }
        }
    }
}
