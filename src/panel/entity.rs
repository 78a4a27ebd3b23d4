use std::fmt::{Debug, Display};
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::{EnumMessage, IntoEnumIterator};

use crate::model::record_id::RecordId;

/// A closed set of named attributes: form fields or search keys.
///
/// `Display`/`FromStr` use the wire name; the strum message is the label.
pub trait EntityField:
    Copy + Eq + Debug + Display + FromStr<Err = strum::ParseError> + IntoEnumIterator + EnumMessage
{
    fn label(&self) -> &'static str {
        self.get_message().unwrap_or("")
    }

    fn wire_names() -> Vec<String> {
        Self::iter().map(|field| field.to_string()).collect()
    }
}

impl<T> EntityField for T where
    T: Copy
        + Eq
        + Debug
        + Display
        + FromStr<Err = strum::ParseError>
        + IntoEnumIterator
        + EnumMessage
{
}

/// Shape of a record managed by a [`CrudPanel`](super::CrudPanel).
pub trait Entity:
    Clone + Default + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Field: EntityField;
    type Filter: EntityField;

    /// Collection path below the API base URL.
    const RESOURCE: &'static str;
    const TITLE: &'static str;
    const SINGULAR: &'static str;

    fn id(&self) -> RecordId;
    fn get(&self, field: Self::Field) -> &str;
    fn set(&mut self, field: Self::Field, value: String);

    fn item_path(id: RecordId) -> String {
        format!("{}/{}", Self::RESOURCE, id)
    }
}
