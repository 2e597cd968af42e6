use super::snapshot::PhysicalSchema;

/// One logical column a caller may request.
///
/// `expression` holds the projection (slow query) or aggregation
/// (statement summary) emitted in place of the bare column. `related` lists
/// the physical columns the field reads when that differs from
/// `column_name`; an empty list means the field depends on `column_name`
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    pub json_name: &'static str,
    pub column_name: &'static str,
    pub expression: Option<&'static str>,
    pub related: &'static [&'static str],
}

impl Field {
    #[must_use]
    pub const fn column(json_name: &'static str, column_name: &'static str) -> Self {
        Self {
            json_name,
            column_name,
            expression: None,
            related: &[],
        }
    }

    #[must_use]
    pub const fn computed(
        json_name: &'static str,
        column_name: &'static str,
        expression: &'static str,
    ) -> Self {
        Self {
            json_name,
            column_name,
            expression: Some(expression),
            related: &[],
        }
    }

    /// Aggregated field whose output alias is its json name.
    #[must_use]
    pub const fn aggregated(
        json_name: &'static str,
        expression: &'static str,
        related: &'static [&'static str],
    ) -> Self {
        Self {
            json_name,
            column_name: json_name,
            expression: Some(expression),
            related,
        }
    }

    #[must_use]
    pub const fn with_related(mut self, related: &'static [&'static str]) -> Self {
        self.related = related;
        self
    }

    #[must_use]
    pub fn is_computed(&self) -> bool {
        self.expression.is_some_and(|expression| !expression.is_empty())
    }

    #[must_use]
    pub fn dependencies(&self) -> &[&'static str] {
        if self.related.is_empty() {
            std::slice::from_ref(&self.column_name)
        } else {
            self.related
        }
    }

    /// True when every physical column this field reads exists in `schema`.
    #[must_use]
    pub fn is_backed_by(&self, schema: &PhysicalSchema) -> bool {
        self.dependencies()
            .iter()
            .all(|column| schema.contains(column))
    }

    #[must_use]
    pub fn select_item(&self) -> String {
        match self.expression {
            Some(expression) if !expression.is_empty() => {
                format!("{expression} AS {}", self.column_name)
            }
            _ => self.column_name.to_string(),
        }
    }
}
