pub mod slow_query;
pub mod statement;

use std::fmt::{Display, Formatter};

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::projection::{DomainPolicy, Field, Projector};

pub const CATALOG_SCHEMA_VERSION: &str = "querylens.field-catalog.v1";

/// Listing domains served by the projection engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    SlowQuery,
    Statement,
}

impl Domain {
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::SlowQuery, Self::Statement]
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SlowQuery => "slow_query",
            Self::Statement => "statement",
        }
    }

    #[must_use]
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Self::SlowQuery => slow_query::FIELDS,
            Self::Statement => statement::FIELDS,
        }
    }

    #[must_use]
    pub const fn policy(self) -> &'static DomainPolicy {
        match self {
            Self::SlowQuery => &slow_query::POLICY,
            Self::Statement => &statement::POLICY,
        }
    }

    #[must_use]
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::SlowQuery => slow_query::TABLE,
            Self::Statement => statement::TABLE,
        }
    }

    #[must_use]
    pub const fn default_order_by(self) -> &'static str {
        match self {
            Self::SlowQuery => slow_query::DEFAULT_ORDER_BY,
            Self::Statement => statement::DEFAULT_ORDER_BY,
        }
    }

    #[must_use]
    pub const fn projector(self) -> Projector<'static> {
        Projector::new(self.fields(), self.policy())
    }
}

impl Display for Domain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Serializable view of one catalog field, as listed by `querylens catalog`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogEntry {
    pub json_name: String,
    pub column_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<String>,

    pub mandatory: bool,
}

#[must_use]
pub fn catalog_entries(domain: Domain) -> Vec<CatalogEntry> {
    let policy = domain.policy();
    domain
        .fields()
        .iter()
        .map(|field| CatalogEntry {
            json_name: field.json_name.to_string(),
            column_name: field.column_name.to_string(),
            expression: field
                .expression
                .filter(|expression| !expression.is_empty())
                .map(str::to_string),
            related: field.related.iter().map(ToString::to_string).collect(),
            mandatory: policy.is_mandatory(field.json_name),
        })
        .collect()
}

#[must_use]
pub fn catalog_entry_json_schema() -> Value {
    let schema = schemars::schema_for!(CatalogEntry);
    match serde_json::to_value(schema) {
        Ok(value) => value,
        Err(error) => {
            panic!("failed to serialize generated catalog entry schema: {error}");
        }
    }
}
