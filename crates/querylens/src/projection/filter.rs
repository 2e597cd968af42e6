use tracing::debug;

use super::error::ProjectionError;
use super::field::Field;
use super::policy::{ComputedFieldPolicy, DomainPolicy};
use super::snapshot::PhysicalSchema;

pub const WILDCARD: &str = "*";

/// The logical fields a caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSelection {
    All,
    Only(Vec<String>),
}

impl FieldSelection {
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Only(names.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn includes(&self, json_name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(names) => names.iter().any(|name| name == json_name),
        }
    }

    #[must_use]
    pub fn requested_names(&self) -> Vec<&str> {
        match self {
            Self::All => vec![WILDCARD],
            Self::Only(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

#[must_use]
pub fn is_representable(
    field: &Field,
    policy: ComputedFieldPolicy,
    schema: &PhysicalSchema,
) -> bool {
    match policy {
        ComputedFieldPolicy::AlwaysRenderable => field.is_computed() || field.is_backed_by(schema),
        ComputedFieldPolicy::RequireDependencies => field.is_backed_by(schema),
    }
}

/// Narrows `catalog` to the requested fields (plus mandatory ones) that the
/// live schema can represent, in catalog order.
pub fn filter_fields(
    catalog: &[Field],
    policy: &DomainPolicy,
    schema: &PhysicalSchema,
    selection: &FieldSelection,
) -> Result<Vec<Field>, ProjectionError> {
    let fields = catalog
        .iter()
        .filter(|field| {
            selection.includes(field.json_name) || policy.is_mandatory(field.json_name)
        })
        .filter(|field| is_representable(field, policy.computed_fields, schema))
        .copied()
        .collect::<Vec<_>>();

    if fields.is_empty() {
        debug!(
            requested = ?selection.requested_names(),
            physical_columns = schema.len(),
            "no requested field is representable on the current schema"
        );
        return Err(ProjectionError::unknown_column(format!(
            "all columns are not included in the current schema, columns: {:?}, available: {:?}",
            selection.requested_names(),
            schema.column_names().collect::<Vec<_>>()
        )));
    }

    debug!(
        selected = fields.len(),
        catalog = catalog.len(),
        "narrowed field catalog to the current schema"
    );
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::{FieldSelection, filter_fields, is_representable};
    use crate::projection::{
        ComputedFieldPolicy, DomainPolicy, Field, PhysicalSchema, ProjectionError,
    };

    const CATALOG: &[Field] = &[
        Field::column("digest", "Digest"),
        Field::column("connection_id", "Conn_ID"),
        Field::column("timestamp", "Time"),
        Field::column("query", "Query").with_related(&["Query"]),
        Field::computed("plan", "Plan", "tidb_decode_plan(Plan)"),
    ];

    const POLICY: DomainPolicy = DomainPolicy {
        mandatory_fields: &["digest", "connection_id", "timestamp"],
        order_alias: None,
        computed_fields: ComputedFieldPolicy::AlwaysRenderable,
    };

    fn json_names(fields: &[Field]) -> Vec<&'static str> {
        fields.iter().map(|field| field.json_name).collect()
    }

    #[test]
    fn wildcard_keeps_every_representable_field_in_catalog_order() {
        let schema = PhysicalSchema::new(["Query", "Time", "Digest"]);
        let fields = filter_fields(CATALOG, &POLICY, &schema, &FieldSelection::All)
            .expect("wildcard should resolve");
        assert_eq!(json_names(&fields), ["digest", "timestamp", "query", "plan"]);
    }

    #[test]
    fn request_order_does_not_affect_output_order() {
        let schema = PhysicalSchema::new(["Digest", "Conn_ID", "Time", "Query"]);
        let forward = filter_fields(
            CATALOG,
            &POLICY,
            &schema,
            &FieldSelection::only(["query", "plan"]),
        )
        .expect("fields should resolve");
        let backward = filter_fields(
            CATALOG,
            &POLICY,
            &schema,
            &FieldSelection::only(["plan", "query"]),
        )
        .expect("fields should resolve");
        assert_eq!(forward, backward);
        assert_eq!(
            json_names(&forward),
            ["digest", "connection_id", "timestamp", "query", "plan"]
        );
    }

    #[test]
    fn unknown_requested_names_are_ignored_when_mandatory_fields_survive() {
        let schema = PhysicalSchema::new(["Digest"]);
        let fields = filter_fields(
            CATALOG,
            &POLICY,
            &schema,
            &FieldSelection::only(["no_such_field"]),
        )
        .expect("mandatory digest should survive");
        assert_eq!(json_names(&fields), ["digest"]);
    }

    #[test]
    fn computed_fields_survive_an_empty_schema_by_default() {
        let fields = filter_fields(
            CATALOG,
            &POLICY,
            &PhysicalSchema::default(),
            &FieldSelection::only(["plan"]),
        )
        .expect("computed field should be representable");
        assert_eq!(json_names(&fields), ["plan"]);
    }

    #[test]
    fn dependency_policy_drops_computed_fields_without_columns() {
        let strict = DomainPolicy {
            computed_fields: ComputedFieldPolicy::RequireDependencies,
            ..POLICY
        };
        let err = filter_fields(
            CATALOG,
            &strict,
            &PhysicalSchema::default(),
            &FieldSelection::only(["plan"]),
        )
        .expect_err("nothing is representable");
        let ProjectionError::UnknownColumn { message } = err;
        assert!(message.contains("[\"plan\"]"), "unexpected message: {message}");
    }

    #[test]
    fn representability_follows_policy() {
        let computed = CATALOG[4];
        let empty = PhysicalSchema::default();
        assert!(is_representable(
            &computed,
            ComputedFieldPolicy::AlwaysRenderable,
            &empty
        ));
        assert!(!is_representable(
            &computed,
            ComputedFieldPolicy::RequireDependencies,
            &empty
        ));
        assert!(is_representable(
            &computed,
            ComputedFieldPolicy::RequireDependencies,
            &PhysicalSchema::new(["plan"])
        ));
    }
}
