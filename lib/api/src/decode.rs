//! Request body decoding.
//!
//! Bodies are parsed into a [`serde_json::Value`] first and then walked by
//! hand so that every offending field is reported with its full location,
//! not just the first one serde would stop at. Unknown fields are ignored.
//!
//! A body is only read as JSON when `Content-Type` is absent, `application/json`
//! or an `application/*+json` subtype. An empty body counts as a missing body.

use dagcheck_core::{Edge, Node, Pipeline};
use serde_json::{Map, Value};

use crate::error::{DecodeError, FieldError, FieldErrorKind, Loc};

const MSG_MISSING: &str = "Field required";
const MSG_STRING: &str = "Input should be a valid string";
const MSG_LIST: &str = "Input should be a valid list";
const MSG_OBJECT: &str = "Input should be a valid object";
const MSG_NOT_JSON: &str = "Input should be a valid dictionary or object to extract fields from";

/// Decode a request, honouring its `Content-Type` header.
pub fn decode_request(content_type: Option<&str>, body: &[u8]) -> Result<Pipeline, DecodeError> {
    match content_type {
        Some(ct) if !body.is_empty() && !is_json_content_type(ct) => {
            Err(DecodeError::Validation(vec![FieldError::new(
                vec![Loc::from("body")],
                FieldErrorKind::ModelType,
                MSG_NOT_JSON,
            )]))
        }
        _ => decode_pipeline(body),
    }
}

/// Decode a `/pipelines/parse` body into a [`Pipeline`].
pub fn decode_pipeline(body: &[u8]) -> Result<Pipeline, DecodeError> {
    if body.is_empty() {
        return Err(DecodeError::Validation(vec![FieldError::new(
            vec![Loc::from("body")],
            FieldErrorKind::Missing,
            MSG_MISSING,
        )]));
    }
    let value: Value = serde_json::from_slice(body)?;
    pipeline_from_value(&value)
}

/// `application/json` or `application/<anything>+json`, parameters ignored.
pub fn is_json_content_type(value: &str) -> bool {
    let essence = value.split(';').next().unwrap_or_default().trim();
    let Some((main, sub)) = essence.split_once('/') else {
        return false;
    };
    let sub = sub.trim().to_ascii_lowercase();
    main.trim().eq_ignore_ascii_case("application") && (sub == "json" || sub.ends_with("+json"))
}

pub fn pipeline_from_value(value: &Value) -> Result<Pipeline, DecodeError> {
    let mut errors = Vec::new();
    let root = vec![Loc::from("body")];

    let Some(obj) = as_object(value, &root, &mut errors) else {
        return Err(DecodeError::Validation(errors));
    };

    let nodes = decode_list(obj, "nodes", &root, &mut errors, decode_node);
    let edges = decode_list(obj, "edges", &root, &mut errors, decode_edge);

    if errors.is_empty() {
        Ok(Pipeline::new(nodes, edges))
    } else {
        Err(DecodeError::Validation(errors))
    }
}

fn decode_node(value: &Value, loc: &[Loc], errors: &mut Vec<FieldError>) -> Option<Node> {
    let obj = as_object(value, loc, errors)?;
    let id = string_field(obj, "id", loc, errors)?;
    Some(Node { id })
}

fn decode_edge(value: &Value, loc: &[Loc], errors: &mut Vec<FieldError>) -> Option<Edge> {
    let obj = as_object(value, loc, errors)?;
    // both fields are checked before bailing out so each gets a diagnostic
    let source = string_field(obj, "source", loc, errors);
    let target = string_field(obj, "target", loc, errors);
    Some(Edge {
        source: source?,
        target: target?,
    })
}

fn decode_list<T>(
    obj: &Map<String, Value>,
    name: &str,
    loc: &[Loc],
    errors: &mut Vec<FieldError>,
    decode_item: fn(&Value, &[Loc], &mut Vec<FieldError>) -> Option<T>,
) -> Vec<T> {
    let loc = child(loc, name);
    let items = match obj.get(name) {
        None => {
            errors.push(FieldError::new(loc, FieldErrorKind::Missing, MSG_MISSING));
            return Vec::new();
        }
        Some(Value::Array(items)) => items,
        Some(_) => {
            errors.push(FieldError::new(loc, FieldErrorKind::ListType, MSG_LIST));
            return Vec::new();
        }
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| decode_item(item, &child(&loc, index), errors))
        .collect()
}

fn as_object<'v>(
    value: &'v Value,
    loc: &[Loc],
    errors: &mut Vec<FieldError>,
) -> Option<&'v Map<String, Value>> {
    let obj = value.as_object();
    if obj.is_none() {
        errors.push(FieldError::new(
            loc.to_vec(),
            FieldErrorKind::ModelType,
            MSG_OBJECT,
        ));
    }
    obj
}

fn string_field(
    obj: &Map<String, Value>,
    name: &str,
    loc: &[Loc],
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match obj.get(name) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(
                child(loc, name),
                FieldErrorKind::StringType,
                MSG_STRING,
            ));
            None
        }
        None => {
            errors.push(FieldError::new(
                child(loc, name),
                FieldErrorKind::Missing,
                MSG_MISSING,
            ));
            None
        }
    }
}

fn child(loc: &[Loc], segment: impl Into<Loc>) -> Vec<Loc> {
    let mut path = loc.to_vec();
    path.push(segment.into());
    path
}
