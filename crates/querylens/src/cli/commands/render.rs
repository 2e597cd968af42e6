use anyhow::Result;
use clap::Args;
use serde_json::json;
use tracing::debug;

use super::{SchemaSource, SchemaSourceArgs, load_schema, print_envelope};
use crate::catalog::Domain;
use crate::config::MirrorPath;
use crate::models::{CommandFailure, ListRequest, QueryEnvelope, RequestError};
use crate::projection::{PhysicalSchema, ProjectionError, ProjectionRequest, RenderedStatement};

const COMMAND: &str = "render";
pub const FIELDS_DROPPED_CODE: &str = "fields_dropped";

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    #[arg(long, value_enum)]
    pub domain: Domain,

    /// `*` or a comma-separated list of json field names.
    #[arg(long, default_value = "*")]
    pub fields: String,

    /// Json field name to sort by; defaults per domain.
    #[arg(long, value_name = "FIELD")]
    pub order_by: Option<String>,

    #[arg(long, default_value_t = false)]
    pub desc: bool,

    #[command(flatten)]
    pub schema: SchemaSourceArgs,
}

pub fn run(args: &RenderArgs, mirror: &MirrorPath) -> Result<()> {
    let request = ListRequest {
        fields: args.fields.clone(),
        order_by: args.order_by.clone(),
        desc: args.desc,
    }
    .into_projection_request(args.domain)
    .map_err(|error| {
        debug!(%error, "rejected malformed listing request");
        malformed_request(args.domain, &error, &args.fields)
    })?;

    let (schema, source) = load_schema(COMMAND, args.domain, &args.schema, mirror)?;

    let statement = args
        .domain
        .projector()
        .render(&schema, &request)
        .map_err(|error| {
            debug!(%error, domain = args.domain.key(), "listing request is not renderable");
            unrenderable_request(args.domain, &error, &request, &schema, source)
        })?;

    print_envelope(&rendered_envelope(
        args.domain,
        &statement,
        &request,
        &schema,
        source,
    ))
}

/// Success envelope for a rendered listing. Requested fields the schema
/// could not represent are reported in a `fields_dropped` warning.
#[must_use]
pub fn rendered_envelope(
    domain: Domain,
    statement: &RenderedStatement,
    request: &ProjectionRequest,
    schema: &PhysicalSchema,
    source: SchemaSource,
) -> QueryEnvelope {
    let field_names = statement
        .fields
        .iter()
        .map(|field| field.json_name)
        .collect::<Vec<_>>();
    let mut envelope = QueryEnvelope::ok(
        COMMAND,
        json!({
            "domain": domain.key(),
            "table": domain.table_name(),
            "select_clause": statement.select_clause,
            "order_clause": statement.order_clause,
            "fields": field_names,
        }),
    )
    .with_meta("field_count", json!(statement.fields.len()))
    .with_meta("physical_column_count", json!(schema.len()))
    .with_meta("descending", json!(request.descending));

    if !statement.dropped_fields.is_empty() {
        envelope = envelope.with_warning(
            FIELDS_DROPPED_CODE,
            "some requested fields are not available on the current schema",
            json!({ "fields": statement.dropped_fields }),
        );
    }

    source.annotate(envelope)
}

/// Failure for a request whose field names or sort key are malformed.
#[must_use]
pub fn malformed_request(
    domain: Domain,
    error: &RequestError,
    raw_fields: &str,
) -> CommandFailure {
    CommandFailure::rejected(
        QueryEnvelope::failed(
            COMMAND,
            error.code(),
            error.to_string(),
            json!({ "fields": raw_fields }),
        )
        .with_meta("domain", json!(domain.key())),
    )
}

/// Failure for a well-formed request the live schema cannot serve.
#[must_use]
pub fn unrenderable_request(
    domain: Domain,
    error: &ProjectionError,
    request: &ProjectionRequest,
    schema: &PhysicalSchema,
    source: SchemaSource,
) -> CommandFailure {
    let envelope = source.annotate(
        QueryEnvelope::failed(
            COMMAND,
            error.code(),
            error.to_string(),
            json!({
                "requested_fields": request.fields.requested_names(),
                "order_by": request.order_by,
                "physical_columns": schema.column_names().collect::<Vec<_>>(),
            }),
        )
        .with_meta("domain", json!(domain.key())),
    );

    if error.is_client_error() {
        CommandFailure::rejected(envelope)
    } else {
        CommandFailure::runtime(envelope)
    }
}
