//! Prometheus exposition endpoint

use axum::extract::State;
use metrics_exporter_prometheus::PrometheusHandle;

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Metrics",
    responses((status = 200, description = "Prometheus text exposition"))
)]
pub async fn render(State(handle): State<PrometheusHandle>) -> String {
    handle.render()
}
