/// How fields carrying an expression are checked against the live schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComputedFieldPolicy {
    /// A computed field is renderable whatever columns exist.
    #[default]
    AlwaysRenderable,
    /// A computed field still needs every column it reads.
    RequireDependencies,
}

/// A sort key that resolves to a fixed column without consulting the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderAlias {
    pub sort_key: &'static str,
    pub column: &'static str,
}

/// Per-domain knobs for the shared projection engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainPolicy {
    /// Always selected unless the schema cannot represent them.
    pub mandatory_fields: &'static [&'static str],
    pub order_alias: Option<OrderAlias>,
    pub computed_fields: ComputedFieldPolicy,
}

impl DomainPolicy {
    #[must_use]
    pub fn is_mandatory(&self, json_name: &str) -> bool {
        self.mandatory_fields.contains(&json_name)
    }
}
