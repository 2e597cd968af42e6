use anyhow::Result;
use clap::Args;
use serde_json::json;

use super::{SchemaSourceArgs, load_schema, print_envelope};
use crate::catalog::Domain;
use crate::config::MirrorPath;
use crate::models::QueryEnvelope;
use crate::projection::Field;

const COMMAND: &str = "columns";

#[derive(Debug, Clone, Args)]
pub struct ColumnsArgs {
    #[arg(long, value_enum)]
    pub domain: Domain,

    #[command(flatten)]
    pub schema: SchemaSourceArgs,
}

pub fn run(args: &ColumnsArgs, mirror: &MirrorPath) -> Result<()> {
    let (schema, source) = load_schema(COMMAND, args.domain, &args.schema, mirror)?;
    let (supported, unsupported) = args.domain.projector().partition(&schema);

    let envelope = QueryEnvelope::ok(
        COMMAND,
        json!({
            "domain": args.domain.key(),
            "table": args.domain.table_name(),
            "columns": schema.column_names().collect::<Vec<_>>(),
            "supported_fields": json_names(&supported),
            "unsupported_fields": json_names(&unsupported),
        }),
    )
    .with_meta("column_count", json!(schema.len()))
    .with_meta("supported_field_count", json!(supported.len()))
    .with_meta("unsupported_field_count", json!(unsupported.len()));

    print_envelope(&source.annotate(envelope))
}

fn json_names(fields: &[Field]) -> Vec<&'static str> {
    fields.iter().map(|field| field.json_name).collect()
}
