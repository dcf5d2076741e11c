//! One-shot orchestration: fetch, solve, deliver.

use crate::config::RunConfig;
use crate::domain::models::{RunSummary, WebhookResult};
use crate::services::delivery::deliver;
use crate::services::fetch::fetch_assignment;
use crate::services::http::JsonTransport;
use crate::solver::SolverKind;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Fetch and selector failures abort with `Err` before anything is computed
/// or sent, as does a shutdown that arrives while fetching. Delivery
/// failures do not; they are reported in the summary.
pub async fn run<T: JsonTransport + ?Sized>(
    transport: &T,
    config: &RunConfig,
    cancel: &CancellationToken,
) -> anyhow::Result<RunSummary> {
    let assignment = tokio::select! {
        biased;
        _ = cancel.cancelled() => anyhow::bail!("shutdown requested before assignment was fetched"),
        fetched = fetch_assignment(transport, &config.fetch_endpoint, &config.identity) => fetched?,
    };

    let solver = SolverKind::for_registration(&config.identity.reg_no)?;
    info!(%solver, reg_no = %config.identity.reg_no, "selected solver");

    let result = WebhookResult {
        reg_no: config.identity.reg_no.clone(),
        outcome: solver.solve(&assignment.data),
    };
    let payload = serde_json::to_value(&result)?;
    if result.outcome.is_empty() {
        warn!(%solver, "outcome is empty");
    }
    info!(result = %payload, "prepared result");

    let delivery = deliver(
        transport,
        &assignment.credential,
        &payload,
        &config.retry,
        cancel,
    )
    .await;

    Ok(RunSummary {
        solver: solver.to_string(),
        result_len: result.outcome.len(),
        delivery,
    })
}
