use crate::domain::models::{DeliveryCredential, DeliveryOutcome, DeliveryReport};
use crate::services::http::JsonTransport;
use serde_json::Value;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Sleep after failed attempt `k` is `backoff_step * k`.
    pub backoff_step: Duration,
}

impl RetryPolicy {
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff_step.saturating_mul(attempt)
    }
}

/// POSTs `payload` to the credential's target until a 2xx reply arrives or
/// the policy runs out of attempts. Never returns an error: the caller gets
/// a report of how it ended. Cancellation is checked before every attempt
/// and interrupts the sleep between attempts; an in-flight request is not
/// aborted.
pub async fn deliver<T: JsonTransport + ?Sized>(
    transport: &T,
    credential: &DeliveryCredential,
    payload: &Value,
    policy: &RetryPolicy,
    cancel: &CancellationToken,
) -> DeliveryReport {
    let mut attempts = 0;
    while attempts < policy.max_attempts {
        if cancel.is_cancelled() {
            warn!(attempts, "shutdown requested, abandoning delivery");
            return DeliveryReport {
                attempts,
                outcome: DeliveryOutcome::Cancelled,
            };
        }
        attempts += 1;
        info!(attempt = attempts, url = %credential.target_url, "sending result to webhook");

        match transport
            .post_json(&credential.target_url, Some(&credential.bearer_token), payload)
            .await
        {
            Ok(reply) if reply.is_success() => {
                info!(attempt = attempts, status = reply.status, "webhook accepted result");
                return DeliveryReport {
                    attempts,
                    outcome: DeliveryOutcome::Delivered,
                };
            }
            Ok(reply) => {
                warn!(attempt = attempts, status = reply.status, "webhook rejected result");
            }
            Err(e) => {
                warn!(attempt = attempts, error = %e, "webhook call failed");
            }
        }

        if attempts < policy.max_attempts {
            let delay = policy.delay_after(attempts);
            tokio::select! {
                _ = cancel.cancelled() => {
                    warn!(attempt = attempts, "shutdown requested, abandoning delivery");
                    return DeliveryReport {
                        attempts,
                        outcome: DeliveryOutcome::Cancelled,
                    };
                }
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }

    error!(attempts, "failed to deliver result after all attempts");
    DeliveryReport {
        attempts,
        outcome: DeliveryOutcome::Exhausted,
    }
}

#[cfg(test)]
mod tests {
    use super::{deliver, RetryPolicy};
    use crate::domain::models::{DeliveryCredential, DeliveryOutcome};
    use crate::error::TransportError;
    use crate::services::http::testing::ScriptedTransport;
    use serde_json::json;
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    fn credential() -> DeliveryCredential {
        DeliveryCredential {
            target_url: "https://hook.test/submit".to_string(),
            bearer_token: "raw-token".to_string(),
        }
    }

    fn policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            backoff_step: Duration::from_millis(1000),
        }
    }

    #[test]
    fn backoff_grows_linearly() {
        let p = policy(4);
        assert_eq!(p.delay_after(1), Duration::from_secs(1));
        assert_eq!(p.delay_after(2), Duration::from_secs(2));
        assert_eq!(p.delay_after(3), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_on_fourth_attempt_after_linear_backoff() {
        let transport = ScriptedTransport::new()
            .reply(500, "")
            .fail(TransportError::Timeout)
            .reply(429, "")
            .reply(200, "ok");
        let payload = json!({"regNo": "REG12347", "outcome": []});

        let report = deliver(
            &transport,
            &credential(),
            &payload,
            &policy(4),
            &CancellationToken::new(),
        )
        .await;

        assert_eq!(report.attempts, 4);
        assert_eq!(report.outcome, DeliveryOutcome::Delivered);

        let calls = transport.calls();
        assert_eq!(calls.len(), 4);
        let gaps: Vec<Duration> = calls.windows(2).map(|w| w[1].at - w[0].at).collect();
        assert_eq!(
            gaps,
            vec![
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(3)
            ]
        );
        for call in &calls {
            assert_eq!(call.url, "https://hook.test/submit");
            assert_eq!(call.authorization.as_deref(), Some("raw-token"));
            assert_eq!(call.body, payload);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stops_at_first_success() {
        let transport = ScriptedTransport::new().reply(201, "").reply(500, "");
        let report = deliver(
            &transport,
            &credential(),
            &json!({}),
            &policy(4),
            &CancellationToken::new(),
        )
        .await;
        assert_eq!(report.attempts, 1);
        assert_eq!(report.outcome, DeliveryOutcome::Delivered);
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn always_failing_target_exhausts_attempts() {
        let transport = ScriptedTransport::new();
        let start = tokio::time::Instant::now();
        let report = deliver(
            &transport,
            &credential(),
            &json!({}),
            &policy(4),
            &CancellationToken::new(),
        )
        .await;
        assert_eq!(report.attempts, 4);
        assert_eq!(report.outcome, DeliveryOutcome::Exhausted);
        assert_eq!(transport.calls().len(), 4);
        // No sleep after the final attempt.
        assert_eq!(start.elapsed(), Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_before_first_attempt_sends_nothing() {
        let transport = ScriptedTransport::new().reply(200, "");
        let cancel = CancellationToken::new();
        cancel.cancel();
        let start = tokio::time::Instant::now();

        let report = deliver(&transport, &credential(), &json!({}), &policy(4), &cancel).await;

        assert_eq!(report.attempts, 0);
        assert_eq!(report.outcome, DeliveryOutcome::Cancelled);
        assert!(transport.calls().is_empty());
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_mid_sleep_abandons_remaining_attempts() {
        let transport = ScriptedTransport::new();
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(1500)).await;
            trigger.cancel();
        });

        let report = deliver(&transport, &credential(), &json!({}), &policy(4), &cancel).await;

        assert_eq!(report.attempts, 2);
        assert_eq!(report.outcome, DeliveryOutcome::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_attempts_sends_nothing() {
        let transport = ScriptedTransport::new().reply(200, "");
        let report = deliver(
            &transport,
            &credential(),
            &json!({}),
            &policy(0),
            &CancellationToken::new(),
        )
        .await;
        assert_eq!(report.attempts, 0);
        assert_eq!(report.outcome, DeliveryOutcome::Exhausted);
        assert!(transport.calls().is_empty());
    }
}
