use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::catalog::Domain;
use crate::projection::{FieldSelection, ProjectionRequest, WILDCARD};

pub const INVALID_FIELD_NAME_CODE: &str = "invalid_field_name";

/// Shape errors caught before a request reaches the projection engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("invalid field name `{name}`")]
    InvalidFieldName { name: String },
}

impl RequestError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidFieldName { .. } => INVALID_FIELD_NAME_CODE,
        }
    }
}

/// Raw listing parameters as they arrive from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRequest {
    pub fields: String,
    pub order_by: Option<String>,
    pub desc: bool,
}

impl ListRequest {
    pub fn into_projection_request(
        self,
        domain: Domain,
    ) -> Result<ProjectionRequest, RequestError> {
        let fields = parse_field_selection(&self.fields)?;
        let order_by = match self.order_by.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => {
                validate_field_name(key)?;
                key.to_string()
            }
            _ => domain.default_order_by().to_string(),
        };

        Ok(ProjectionRequest {
            fields,
            order_by,
            descending: self.desc,
        })
    }
}

/// Parses `*` or a comma-separated field list. Blank entries are skipped, so
/// an empty string selects only the domain's mandatory fields.
pub fn parse_field_selection(raw: &str) -> Result<FieldSelection, RequestError> {
    let trimmed = raw.trim();
    if trimmed == WILDCARD {
        return Ok(FieldSelection::All);
    }

    let mut names: Vec<String> = Vec::new();
    for token in trimmed.split(',').map(str::trim) {
        if token.is_empty() {
            continue;
        }
        validate_field_name(token)?;
        if !names.iter().any(|name| name == token) {
            names.push(token.to_string());
        }
    }

    Ok(FieldSelection::Only(names))
}

fn validate_field_name(name: &str) -> Result<(), RequestError> {
    if field_name_regex().is_match(name) {
        Ok(())
    } else {
        Err(RequestError::InvalidFieldName {
            name: name.to_string(),
        })
    }
}

fn field_name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("field name regex should compile")
    })
}
