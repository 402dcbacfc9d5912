use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// One segment of a diagnostic location, e.g. `["body", "nodes", 0, "id"]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Loc {
    Field(String),
    Index(usize),
}

impl From<&str> for Loc {
    fn from(name: &str) -> Self {
        Loc::Field(name.to_string())
    }
}

impl From<usize> for Loc {
    fn from(index: usize) -> Self {
        Loc::Index(index)
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Loc::Field(name) => f.write_str(name),
            Loc::Index(index) => write!(f, "{index}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    JsonInvalid,
    Missing,
    StringType,
    ListType,
    ModelType,
}

/// Field-level diagnostic for a rejected request body
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{}: {msg}", render_loc(.loc))]
pub struct FieldError {
    pub loc: Vec<Loc>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: FieldErrorKind,
}

fn render_loc(loc: &[Loc]) -> String {
    loc.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

impl FieldError {
    pub fn new(loc: Vec<Loc>, kind: FieldErrorKind, msg: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind,
        }
    }
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid pipeline: {} field error(s)", .0.len())]
    Validation(Vec<FieldError>),
}

impl DecodeError {
    pub fn diagnostics(&self) -> Vec<FieldError> {
        match self {
            DecodeError::InvalidJson(e) => vec![FieldError::new(
                vec![Loc::from("body")],
                FieldErrorKind::JsonInvalid,
                e.to_string(),
            )],
            DecodeError::Validation(errors) => errors.clone(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            ApiError::Decode(e) => e.diagnostics(),
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
            "detail": detail,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display() {
        let err = FieldError::new(
            vec!["body".into(), "nodes".into(), Loc::Index(2), "id".into()],
            FieldErrorKind::Missing,
            "Field required",
        );
        assert_eq!(err.to_string(), "body.nodes.2.id: Field required");
    }

    #[test]
    fn test_field_error_serialization() {
        let err = FieldError::new(
            vec!["body".into(), "edges".into(), Loc::Index(0), "source".into()],
            FieldErrorKind::StringType,
            "Input should be a valid string",
        );
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({
                "loc": ["body", "edges", 0, "source"],
                "msg": "Input should be a valid string",
                "type": "string_type"
            })
        );
    }

    #[test]
    fn test_decode_error_status() {
        let err = ApiError::from(DecodeError::Validation(vec![]));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
