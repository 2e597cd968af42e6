pub mod catalog;
pub mod columns;
pub mod render;

use anyhow::Result;
use clap::Args;
use serde_json::json;

use crate::catalog::Domain;
use crate::config::{MirrorPath, MirrorPathSource};
use crate::models::{CommandFailure, QueryEnvelope};
use crate::projection::PhysicalSchema;

/// Where the physical column snapshot comes from.
#[derive(Debug, Clone, Default, Args)]
pub struct SchemaSourceArgs {
    /// Comma-separated live column list; skips database introspection.
    #[arg(long, value_name = "COLUMNS")]
    pub columns: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaSource {
    Explicit,
    Mirror(MirrorPathSource),
}

impl SchemaSource {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::Mirror(_) => "mirror",
        }
    }

    /// Adds `schema_source`, plus `db_source` for mirror snapshots.
    #[must_use]
    pub fn annotate(self, envelope: QueryEnvelope) -> QueryEnvelope {
        let envelope = envelope.with_meta("schema_source", json!(self.key()));
        match self {
            Self::Explicit => envelope,
            Self::Mirror(source) => envelope.with_meta("db_source", json!(source.key())),
        }
    }
}

pub(crate) fn load_schema(
    command: &'static str,
    domain: Domain,
    source: &SchemaSourceArgs,
    mirror: &MirrorPath,
) -> Result<(PhysicalSchema, SchemaSource)> {
    if let Some(columns) = source.columns.as_deref() {
        return Ok((
            crate::schema::parse_column_list(columns),
            SchemaSource::Explicit,
        ));
    }

    let table = domain.table_name();
    let schema =
        crate::schema::load_table_columns_from_path(&mirror.path, table).map_err(|error| {
            CommandFailure::runtime(
                QueryEnvelope::failed(
                    command,
                    "schema_introspection_failed",
                    "unable to read live table columns",
                    json!({
                        "db_path": mirror.path.display().to_string(),
                        "db_source": mirror.source.key(),
                        "table": table,
                        "cause": format!("{error:#}")
                    }),
                )
                .with_meta("domain", json!(domain.key())),
            )
        })?;

    Ok((schema, SchemaSource::Mirror(mirror.source)))
}

pub(crate) fn print_envelope(envelope: &QueryEnvelope) -> Result<()> {
    let encoded = serde_json::to_string(envelope).map_err(|error| {
        CommandFailure::runtime(QueryEnvelope::failed(
            envelope.command,
            "response_encode_failed",
            "failed to encode query response",
            json!({ "cause": format!("{error:#}") }),
        ))
    })?;
    println!("{encoded}");

    Ok(())
}
