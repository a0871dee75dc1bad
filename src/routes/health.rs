//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe used by Kubernetes, ECS, systemd, and load
//! balancers to verify the service is alive. It only checks that the process
//! can respond to HTTP; there are no dependencies to probe.

use axum::Json;
use serde::Serialize;

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Health check handler.
///
/// Returns `{"status": "ok"}` to indicate the service is running.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_ok() {
        let Json(payload) = health().await;
        assert_eq!(payload.status, "ok");
    }

    #[test]
    fn payload_serializes_with_status_key() {
        let json = serde_json::to_value(HealthStatus { status: "ok" }).expect("serialize");
        assert_eq!(json["status"], "ok");
    }
}
