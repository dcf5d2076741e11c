use clap::Parser;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod directory;
mod domain;
mod error;
mod payload;
mod run;
mod services;
mod solver;

use crate::config::RunConfig;
use crate::services::http::ReqwestTransport;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "followgraph=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RunConfig::default();
    let cancel = CancellationToken::new();
    tokio::spawn(cancel_on_shutdown(cancel.clone()));

    info!(reg_no = %config.identity.reg_no, "starting run");

    // Failures end here as log lines; the process still exits 0.
    let task = tokio::spawn(async move {
        let transport = ReqwestTransport::new(config.request_timeout)?;
        run::run(&transport, &config, &cancel).await
    });

    match task.await {
        Ok(Ok(summary)) => info!(
            solver = %summary.solver,
            result_len = summary.result_len,
            attempts = summary.delivery.attempts,
            outcome = ?summary.delivery.outcome,
            "run finished"
        ),
        Ok(Err(e)) => error!(error = ?e, "run aborted"),
        Err(e) if e.is_panic() => error!(error = %e, "run panicked"),
        Err(e) => error!(error = %e, "run task did not complete"),
    }

    Ok(())
}

/// Cancels `cancel` on SIGINT or SIGTERM.
async fn cancel_on_shutdown(cancel: CancellationToken) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                error!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received SIGINT, abandoning pending retries"),
        _ = terminate => info!("received SIGTERM, abandoning pending retries"),
    }
    cancel.cancel();
}
