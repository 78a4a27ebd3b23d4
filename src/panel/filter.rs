use super::entity::EntityField;

/// One optional search key plus the text to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter<F> {
    field: Option<F>,
    query: String,
}

impl<F> Default for SearchFilter<F> {
    fn default() -> Self {
        Self {
            field: None,
            query: String::new(),
        }
    }
}

impl<F: EntityField> SearchFilter<F> {
    pub fn field(&self) -> Option<F> {
        self.field
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn select(&mut self, field: Option<F>) {
        self.field = field;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The pair to send, present only when a field is selected and the query is
    /// not blank. The query goes out as typed.
    pub fn active(&self) -> Option<(F, &str)> {
        match self.field {
            Some(field) if !self.query.trim().is_empty() => Some((field, self.query.as_str())),
            _ => None,
        }
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.active()
            .map(|(field, query)| vec![(field.to_string(), query.to_owned())])
            .unwrap_or_default()
    }
}
