use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::Serialize;
use serde_json::Value;

use crate::utils::time::now_utc_rfc3339;

pub const QUERY_ENVELOPE_SCHEMA_VERSION: &str = "querylens.query-envelope.v1";

/// A warning or error attached to an envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvelopeNotice {
    pub code: String,
    pub message: String,
    pub details: Value,
}

/// The single JSON document every command prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryEnvelope {
    pub schema_version: &'static str,
    pub ok: bool,
    pub command: &'static str,
    pub generated_at_utc: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    pub meta: BTreeMap<&'static str, Value>,
    pub warnings: Vec<EnvelopeNotice>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<EnvelopeNotice>,
}

impl QueryEnvelope {
    #[must_use]
    pub fn ok(command: &'static str, data: Value) -> Self {
        Self {
            data: Some(data),
            ..Self::base(command, true)
        }
    }

    #[must_use]
    pub fn failed(
        command: &'static str,
        code: impl Into<String>,
        message: impl Into<String>,
        details: Value,
    ) -> Self {
        Self {
            error: Some(EnvelopeNotice {
                code: code.into(),
                message: message.into(),
                details,
            }),
            ..Self::base(command, false)
        }
    }

    fn base(command: &'static str, ok: bool) -> Self {
        Self {
            schema_version: QUERY_ENVELOPE_SCHEMA_VERSION,
            ok,
            command,
            generated_at_utc: now_utc_rfc3339(),
            data: None,
            meta: BTreeMap::new(),
            warnings: Vec::new(),
            error: None,
        }
    }

    #[must_use]
    pub fn with_meta(mut self, key: &'static str, value: Value) -> Self {
        self.meta.insert(key, value);
        self
    }

    #[must_use]
    pub fn with_warning(
        mut self,
        code: impl Into<String>,
        message: impl Into<String>,
        details: Value,
    ) -> Self {
        self.warnings.push(EnvelopeNotice {
            code: code.into(),
            message: message.into(),
            details,
        });
        self
    }

    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.error.as_ref().map(|error| error.code.as_str())
    }
}

/// Whether a failed command was turned away or broke while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// The request cannot be served on this schema; retrying will not help.
    Rejected,
    Runtime,
}

impl FailureClass {
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Rejected => 2,
            Self::Runtime => 1,
        }
    }
}

/// Error type carrying the envelope a failed command prints on stderr.
#[derive(Debug, Clone)]
pub struct CommandFailure {
    class: FailureClass,
    envelope: QueryEnvelope,
}

impl CommandFailure {
    #[must_use]
    pub fn rejected(envelope: QueryEnvelope) -> Self {
        Self {
            class: FailureClass::Rejected,
            envelope,
        }
    }

    #[must_use]
    pub fn runtime(envelope: QueryEnvelope) -> Self {
        Self {
            class: FailureClass::Runtime,
            envelope,
        }
    }

    #[must_use]
    pub fn class(&self) -> FailureClass {
        self.class
    }

    #[must_use]
    pub fn envelope(&self) -> &QueryEnvelope {
        &self.envelope
    }
}

impl Display for CommandFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(&self.envelope) {
            Ok(encoded) => f.write_str(&encoded),
            Err(_) => f.write_str("query envelope serialization failure"),
        }
    }
}

impl std::error::Error for CommandFailure {}
