use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Server-assigned identifier. Zero marks a record that has not been created yet.
#[derive(
    Debug, Display, From, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    pub const NEW: RecordId = RecordId(0);

    pub fn is_new(self) -> bool {
        self == Self::NEW
    }
}
