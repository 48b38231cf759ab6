/// Acknowledgement body returned by every write endpoint
///
/// ```json
/// { "status_code": 201, "transaction": "Successful" }
/// ```
///
/// The HTTP status of the response always equals `status_code`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Fixed-shape write acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    /// Numeric HTTP status, repeated in the body
    pub status_code: u16,

    /// Outcome message
    pub transaction: String,
}

impl Ack {
    /// 201 acknowledgement for a successful insert
    pub fn created() -> Self {
        Self {
            status_code: StatusCode::CREATED.as_u16(),
            transaction: "Successful".to_string(),
        }
    }

    /// 200 acknowledgement carrying `message`
    pub fn ok(message: &str) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            transaction: message.to_string(),
        }
    }
}

impl IntoResponse for Ack {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}
