//! Generic entity CRUD panel: list, search, create/edit form and delete.

mod crud;
mod entity;
mod error;
mod filter;
mod form;

pub use crud::{CrudPanel, DeleteOutcome};
pub use entity::{Entity, EntityField};
pub use error::PanelError;
pub use form::FormMode;

use crate::model::employee::EmployeeRecord;

pub type EmployeePanel = CrudPanel<EmployeeRecord>;
