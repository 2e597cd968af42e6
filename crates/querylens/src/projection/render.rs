use tracing::debug;

use super::error::ProjectionError;
use super::field::Field;
use super::policy::DomainPolicy;
use super::snapshot::PhysicalSchema;

/// Renders the SELECT list for an already-filtered, non-empty field list.
#[must_use]
pub fn render_select(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::select_item)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolves `sort_key` to an ORDER BY term.
///
/// The domain's order alias wins outright and names its column directly;
/// ordering by the column keeps the sort index-friendly where the
/// projected expression would not be. Every other key must name a catalog
/// field whose backing columns exist, whether or not it was selected.
/// Ordering is always column-backed: the computed-field policy does not
/// apply, since a sort over a missing column fails even for expressions.
pub fn render_order(
    catalog: &[Field],
    policy: &DomainPolicy,
    schema: &PhysicalSchema,
    sort_key: &str,
    descending: bool,
) -> Result<String, ProjectionError> {
    let column = match policy.order_alias {
        Some(alias) if alias.sort_key == sort_key => alias.column,
        _ => {
            catalog
                .iter()
                .filter(|field| field.is_backed_by(schema))
                .find(|field| field.json_name == sort_key)
                .ok_or_else(|| {
                    debug!(sort_key, "sort key is not orderable on the current schema");
                    ProjectionError::unknown_column(format!("unknown order by {sort_key}"))
                })?
                .column_name
        }
    };

    let direction = if descending { "DESC" } else { "ASC" };
    Ok(format!("{column} {direction}"))
}
