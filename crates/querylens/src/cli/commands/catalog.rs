use anyhow::Result;
use clap::Args;
use serde_json::json;

use super::print_envelope;
use crate::catalog::{CATALOG_SCHEMA_VERSION, Domain, catalog_entries, catalog_entry_json_schema};
use crate::models::QueryEnvelope;

const COMMAND: &str = "catalog";

#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {
    #[arg(long, value_enum)]
    pub domain: Domain,

    /// Print the JSON schema of a catalog entry instead of the entries.
    #[arg(long, default_value_t = false)]
    pub json_schema: bool,
}

pub fn run(args: &CatalogArgs) -> Result<()> {
    if args.json_schema {
        let envelope = QueryEnvelope::ok(COMMAND, catalog_entry_json_schema())
            .with_meta("catalog_schema_version", json!(CATALOG_SCHEMA_VERSION));
        return print_envelope(&envelope);
    }

    let domain = args.domain;
    let policy = domain.policy();
    let entries = catalog_entries(domain);
    let order_alias = policy.order_alias.map(|alias| {
        json!({
            "sort_key": alias.sort_key,
            "column": alias.column,
        })
    });

    let entry_count = entries.len();
    let envelope = QueryEnvelope::ok(
        COMMAND,
        json!({
            "schema_version": CATALOG_SCHEMA_VERSION,
            "domain": domain.key(),
            "table": domain.table_name(),
            "mandatory_fields": policy.mandatory_fields,
            "default_order_by": domain.default_order_by(),
            "order_alias": order_alias,
            "fields": entries,
        }),
    )
    .with_meta("field_count", json!(entry_count));

    print_envelope(&envelope)
}
