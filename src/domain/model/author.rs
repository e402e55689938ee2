use super::{Entity, EntityId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A person who writes books.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Author {
    /// Assigned by the server; ignored on create and update.
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    /// Date of birth. Free-form, not validated.
    pub dob: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pen_name: Option<String>,
}

impl Author {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        dob: impl Into<String>,
        pen_name: Option<&str>,
    ) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            dob: dob.into(),
            pen_name: pen_name.map(str::to_string),
        }
    }
}

impl Entity for Author {
    const KIND: &'static str = "author";

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}
