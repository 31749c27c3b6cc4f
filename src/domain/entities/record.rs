use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored document together with the identifier the store assigned to it.
///
/// The identifier is exposed as `_id` so that existing front ends keyed on
/// document ids keep working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Record<T> {
    pub fn new(id: Uuid, data: T) -> Self {
        Record { id, data }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse { message: message.into() }
    }
}
