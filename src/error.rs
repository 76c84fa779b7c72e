use std::collections::BTreeMap;

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Unified application error. Every handler returns `Result<_, AppError>`;
/// the `IntoResponse` impl renders the wire shape.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Rejected input, keyed by field name in `details`. Maps to 422.
    #[error("{message}")]
    Validation { message: String, details: Value },
    /// Malformed request outside the field-validation flow, e.g. a missing
    /// search query. Maps to 400 with a flat `{"error": message}` body.
    #[error("{message}")]
    BadRequest { message: String },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// Missing, unknown, or revoked bearer token. Maps to 401.
    #[error("{message}")]
    Unauthorized { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    /// Single-field validation error with the standard details shape.
    pub fn validation_field(field: &str, message: &str) -> Self {
        let mut errors = FieldErrors::new();
        errors.add(field, message);
        errors.into_error()
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                message,
                details,
            ),
            AppError::BadRequest { message } => {
                return (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
                    .into_response();
            }
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Unauthorized { message, details } => {
                let body = ErrorBody {
                    error: ErrorInfo {
                        code: "unauthorized",
                        message,
                        details,
                    },
                };
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Bearer")],
                    Json(body),
                )
                    .into_response();
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Accumulates per-field validation messages so one response can name every
/// failing field.
#[derive(Debug, Default)]
pub struct FieldErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_error(self) -> AppError {
        AppError::validation("Validation failed", json!(self.fields))
    }

    /// `Ok(())` when nothing was recorded, the collected error otherwise.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.fields.is_empty() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, violations) in errors.field_errors() {
            for violation in violations {
                let message = violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                fields.add(field.as_ref(), message);
            }
        }
        fields.into_error()
    }
}

/// Store constraints are the final arbiter for uniqueness and referential
/// integrity. A violation that slipped past the advisory pre-checks (e.g.
/// two concurrent creates with the same name) surfaces as the same
/// field-keyed validation error the pre-check would have produced.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                match db.constraint() {
                    Some("counties_name_key") => {
                        return AppError::validation_field("name", "Name has already been taken");
                    }
                    Some("postal_codes_code_key") => {
                        return AppError::validation_field("code", "Code has already been taken");
                    }
                    _ => {}
                }
            }
            if db.is_foreign_key_violation() {
                match db.constraint() {
                    Some("cities_county_id_fkey") => {
                        return AppError::validation_field(
                            "county_id",
                            "Selected county does not exist",
                        );
                    }
                    Some("postal_codes_city_id_fkey") => {
                        return AppError::validation_field(
                            "city_id",
                            "Selected city does not exist",
                        );
                    }
                    _ => {}
                }
            }
            if db.is_check_violation() && db.constraint() == Some("postal_codes_code_len_check") {
                return AppError::validation_field("code", "Code must be exactly 4 characters");
            }
        }

        tracing::error!(error = %e, "Unhandled database error");
        AppError::internal("Database error", json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_group_messages_by_field() {
        let mut errors = FieldErrors::new();
        errors.add("name", "Name must not be empty");
        errors.add("name", "Name has already been taken");
        errors.add("county_id", "Selected county does not exist");

        let err = errors.into_error();
        match err {
            AppError::Validation { details, .. } => {
                assert_eq!(
                    details,
                    json!({
                        "county_id": ["Selected county does not exist"],
                        "name": ["Name must not be empty", "Name has already been taken"],
                    })
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn empty_field_errors_are_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn status_codes_match_variants() {
        let cases = [
            (AppError::validation("v", json!({})), 422),
            (AppError::bad_request("b"), 400),
            (AppError::not_found("n", json!({})), 404),
            (AppError::unauthorized("u", json!({})), 401),
            (AppError::internal("i", json!({})), 500),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status().as_u16(), expected);
        }
    }

    #[test]
    fn unauthorized_carries_challenge_header() {
        let response = AppError::unauthorized("nope", json!({})).into_response();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }
}
