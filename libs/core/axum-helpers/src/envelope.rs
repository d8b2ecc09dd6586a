//! Uniform JSON response wrapper.
//!
//! Every response body is an [`Envelope`]: an object with an optional `data`
//! member and an optional `message` member, each omitted when absent.
//!
//! ```json
//! {"data": {"id": "…", "first_name": "Ada"}}
//! {"message": "The user with the specified ID does not exist"}
//! {}
//! ```

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::errors::messages;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }
}

impl Envelope<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }

    /// `{}`
    pub fn empty() -> Self {
        Self {
            data: None,
            error: None,
        }
    }
}

/// Serializes `envelope` and writes it with `status`.
///
/// If the envelope cannot be serialized, the failure is logged and a
/// `500 {"message": "something went wrong"}` is written instead.
pub fn send_json<T: Serialize>(envelope: &Envelope<T>, status: StatusCode) -> Response {
    match serde_json::to_vec(envelope) {
        Ok(bytes) => json_response(status, bytes),
        Err(e) => {
            tracing::error!(error = %e, "failed to marshal json data");
            let fallback = format!(r#"{{"message":"{}"}}"#, messages::INTERNAL_ERROR);
            json_response(StatusCode::INTERNAL_SERVER_ERROR, fallback.into_bytes())
        }
    }
}

fn json_response(status: StatusCode, bytes: Vec<u8>) -> Response {
    let mut response = (status, Body::from(bytes)).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde::ser::Error as _;
    use serde_json::json;

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("boom"))
        }
    }

    #[test]
    fn test_envelope_omits_absent_members() {
        assert_eq!(serde_json::to_value(Envelope::empty()).unwrap(), json!({}));
        assert_eq!(
            serde_json::to_value(Envelope::error("nope")).unwrap(),
            json!({"message": "nope"})
        );
        assert_eq!(
            serde_json::to_value(Envelope::data(vec![1, 2])).unwrap(),
            json!({"data": [1, 2]})
        );
    }

    #[test]
    fn test_envelope_with_none_payload_serializes_null_data() {
        let envelope = Envelope::data(None::<u32>);
        assert_eq!(serde_json::to_value(envelope).unwrap(), json!({"data": null}));
    }

    #[tokio::test]
    async fn test_send_json_sets_status_and_content_type() {
        let response = send_json(&Envelope::data("ok"), StatusCode::CREATED);

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(body_string(response).await, r#"{"data":"ok"}"#);
    }

    #[tokio::test]
    async fn test_send_json_falls_back_on_serialization_failure() {
        let response = send_json(&Envelope::data(Unserializable), StatusCode::OK);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_string(response).await,
            r#"{"message":"something went wrong"}"#
        );
    }
}
