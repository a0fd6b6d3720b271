use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::borrow::Cow;

const MISSING_PARAMETER_MESSAGE: &str = "Parameter missing!";
const INVALID_PARAMETER_MESSAGE: &str = "Parameter is not of expected type!";
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub enum ServiceError {
    /// A required body field is absent.
    MissingParameter,
    /// A body field or query parameter has the wrong type.
    InvalidParameter,
    /// A domain rule rejected the request; the message is sent to the
    /// caller as-is.
    BadRequest { message: Cow<'static, str> },
    /// Anything unexpected. Logged in full, rendered without detail.
    Unexpected { source: anyhow::Error },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    status_code: u16,
    message: Cow<'static, str>,
}

fn error_to_json(status_code: StatusCode, message: Cow<'static, str>) -> Response {
    tracing::error!("{}", message);
    (
        status_code,
        Json(ErrorBody {
            status_code: status_code.as_u16(),
            message,
        }),
    )
        .into_response()
}

impl<E> From<E> for ServiceError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        ServiceError::Unexpected { source: err.into() }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::MissingParameter => {
                error_to_json(StatusCode::BAD_REQUEST, MISSING_PARAMETER_MESSAGE.into())
            }
            ServiceError::InvalidParameter => {
                error_to_json(StatusCode::BAD_REQUEST, INVALID_PARAMETER_MESSAGE.into())
            }
            ServiceError::BadRequest { message } => {
                error_to_json(StatusCode::BAD_REQUEST, message)
            }
            ServiceError::Unexpected { source } => {
                tracing::error!("{:#}", source);
                error_to_json(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.into(),
                )
            }
        }
    }
}
