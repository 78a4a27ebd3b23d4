use serde::{Deserialize, Serialize};

/// List envelope returned by `GET /{resource}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
}
