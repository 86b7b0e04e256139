use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

impl From<u32> for CategoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "category_{}", self.0)
    }
}

/// A food category. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub image_url: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
        }
    }
}
