//! Schema-adaptive projection: turns a version-spanning field catalog into
//! SELECT and ORDER BY fragments that are valid for the columns a live table
//! actually has.
//!
//! The engine is pure. Catalogs are `'static` tables, schema snapshots are
//! borrowed, and nothing here touches a database.

mod error;
mod field;
mod filter;
mod policy;
mod render;
mod snapshot;

pub use error::{ProjectionError, UNKNOWN_COLUMN_CODE};
pub use field::Field;
pub use filter::{FieldSelection, WILDCARD, filter_fields, is_representable};
pub use policy::{ComputedFieldPolicy, DomainPolicy, OrderAlias};
pub use render::{render_order, render_select};
pub use snapshot::PhysicalSchema;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionRequest {
    pub fields: FieldSelection,
    pub order_by: String,
    pub descending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedStatement {
    pub select_clause: String,
    pub order_clause: String,
    pub fields: Vec<Field>,
    /// Requested names that did not make it into `fields`.
    pub dropped_fields: Vec<String>,
}

/// A catalog bound to the policy of the domain it describes.
#[derive(Debug, Clone, Copy)]
pub struct Projector<'a> {
    catalog: &'a [Field],
    policy: &'a DomainPolicy,
}

impl<'a> Projector<'a> {
    #[must_use]
    pub const fn new(catalog: &'a [Field], policy: &'a DomainPolicy) -> Self {
        Self { catalog, policy }
    }

    /// Splits the catalog into fields the schema can and cannot represent,
    /// each half in catalog order.
    #[must_use]
    pub fn partition(&self, schema: &PhysicalSchema) -> (Vec<Field>, Vec<Field>) {
        self.catalog
            .iter()
            .copied()
            .partition(|field| is_representable(field, self.policy.computed_fields, schema))
    }

    pub fn filter(
        &self,
        schema: &PhysicalSchema,
        selection: &FieldSelection,
    ) -> Result<Vec<Field>, ProjectionError> {
        filter_fields(self.catalog, self.policy, schema, selection)
    }

    pub fn render_order(
        &self,
        schema: &PhysicalSchema,
        sort_key: &str,
        descending: bool,
    ) -> Result<String, ProjectionError> {
        render_order(self.catalog, self.policy, schema, sort_key, descending)
    }

    pub fn render(
        &self,
        schema: &PhysicalSchema,
        request: &ProjectionRequest,
    ) -> Result<RenderedStatement, ProjectionError> {
        let fields = self.filter(schema, &request.fields)?;
        let order_clause = self.render_order(schema, &request.order_by, request.descending)?;

        let dropped_fields = match &request.fields {
            FieldSelection::All => Vec::new(),
            FieldSelection::Only(names) => names
                .iter()
                .filter(|name| !fields.iter().any(|field| field.json_name == name.as_str()))
                .cloned()
                .collect(),
        };

        Ok(RenderedStatement {
            select_clause: render_select(&fields),
            order_clause,
            fields,
            dropped_fields,
        })
    }
}
