use super::entity::Entity;
use crate::model::record_id::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

/// The modal create/edit form. The draft's id decides the mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState<E> {
    open: bool,
    draft: E,
}

impl<E: Entity> FormState<E> {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &E {
        &self.draft
    }

    pub fn mode(&self) -> FormMode {
        let id = self.draft.id();
        if id.is_new() {
            FormMode::Create
        } else {
            FormMode::Edit(id)
        }
    }

    pub fn open_blank(&mut self) {
        self.draft = E::default();
        self.open = true;
    }

    pub fn open_with(&mut self, record: E) {
        self.draft = record;
        self.open = true;
    }

    /// Closing always discards the draft.
    pub fn close(&mut self) {
        self.open = false;
        self.draft = E::default();
    }

    pub fn set(&mut self, field: E::Field, value: String) {
        self.draft.set(field, value);
    }
}
