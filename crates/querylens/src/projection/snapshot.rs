use std::collections::BTreeMap;

/// Column names present in a live table, matched ASCII case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhysicalSchema {
    // lower-cased name -> name as reported by introspection
    columns: BTreeMap<String, String>,
}

impl PhysicalSchema {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        columns.into_iter().collect()
    }

    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(&column.to_ascii_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Reported column names, sorted case-insensitively.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.values().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for PhysicalSchema {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut columns = BTreeMap::new();
        for column in iter {
            let reported = column.as_ref().trim();
            if reported.is_empty() {
                continue;
            }
            columns
                .entry(reported.to_ascii_lowercase())
                .or_insert_with(|| reported.to_string());
        }
        Self { columns }
    }
}
