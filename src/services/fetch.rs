use crate::domain::models::{Assignment, DeliveryCredential, Identity};
use crate::error::FetchError;
use crate::payload::{as_mapping, as_string};
use crate::services::http::JsonTransport;
use serde_json::Value;
use tracing::{debug, info};

/// Registers `identity` with the fetch endpoint and returns the webhook
/// credential together with the dataset to solve.
pub async fn fetch_assignment<T: JsonTransport + ?Sized>(
    transport: &T,
    endpoint: &str,
    identity: &Identity,
) -> Result<Assignment, FetchError> {
    let body = serde_json::to_value(identity).map_err(FetchError::Encode)?;
    info!(endpoint, body = %body, "requesting assignment");

    let reply = transport.post_json(endpoint, None, &body).await?;
    if !reply.is_success() {
        return Err(FetchError::Status(reply.status));
    }
    debug!(status = reply.status, body = %reply.body, "assignment response");

    let parsed: Value = serde_json::from_str(&reply.body).map_err(|_| FetchError::MissingBody)?;
    let Value::Object(response) = parsed else {
        return Err(FetchError::MissingBody);
    };

    let target_url = as_string(&response, "webhook").ok_or(FetchError::MissingField("webhook"))?;
    let bearer_token =
        as_string(&response, "accessToken").ok_or(FetchError::MissingField("accessToken"))?;
    let data = as_mapping(&response, "data").ok_or(FetchError::MissingField("data"))?;

    Ok(Assignment {
        credential: DeliveryCredential {
            target_url: target_url.to_string(),
            bearer_token: bearer_token.to_string(),
        },
        data: data.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::fetch_assignment;
    use crate::domain::models::Identity;
    use crate::error::{FetchError, TransportError};
    use crate::services::http::testing::ScriptedTransport;
    use serde_json::json;

    fn identity() -> Identity {
        Identity {
            name: "John Doe".to_string(),
            reg_no: "REG12347".to_string(),
            email: "john@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn posts_identity_and_reads_assignment() {
        let transport = ScriptedTransport::new().reply(
            200,
            r#"{"webhook":"https://hook.test/x","accessToken":"tok","data":{"users":[]}}"#,
        );
        let got = fetch_assignment(&transport, "https://fetch.test", &identity())
            .await
            .unwrap();

        assert_eq!(got.credential.target_url, "https://hook.test/x");
        assert_eq!(got.credential.bearer_token, "tok");
        assert_eq!(got.data.get("users"), Some(&json!([])));

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].url, "https://fetch.test");
        assert_eq!(calls[0].authorization, None);
        assert_eq!(
            calls[0].body,
            json!({"name": "John Doe", "regNo": "REG12347", "email": "john@example.com"})
        );
    }

    #[tokio::test]
    async fn non_2xx_status_aborts() {
        let transport = ScriptedTransport::new().reply(503, "busy");
        let err = fetch_assignment(&transport, "u", &identity()).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(503)));
    }

    #[tokio::test]
    async fn empty_or_non_object_body_is_missing_body() {
        for body in ["", "not json", "[1,2]", "null"] {
            let transport = ScriptedTransport::new().reply(200, body);
            let err = fetch_assignment(&transport, "u", &identity()).await.unwrap_err();
            assert!(matches!(err, FetchError::MissingBody), "{body:?}");
        }
    }

    #[tokio::test]
    async fn each_required_field_is_checked() {
        let cases = [
            (json!({"accessToken": "t", "data": {}}), "webhook"),
            (json!({"webhook": "w", "data": {}}), "accessToken"),
            (json!({"webhook": "w", "accessToken": "t"}), "data"),
            (json!({"webhook": 5, "accessToken": "t", "data": {}}), "webhook"),
            (json!({"webhook": "w", "accessToken": "t", "data": []}), "data"),
        ];
        for (body, field) in cases {
            let transport = ScriptedTransport::new().reply(200, body.to_string());
            let err = fetch_assignment(&transport, "u", &identity()).await.unwrap_err();
            assert!(
                matches!(err, FetchError::MissingField(f) if f == field),
                "expected missing {field}, got {err}"
            );
        }
    }

    #[tokio::test]
    async fn transport_error_is_propagated() {
        let transport = ScriptedTransport::new().fail(TransportError::Timeout);
        let err = fetch_assignment(&transport, "u", &identity()).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(TransportError::Timeout)));
    }
}
