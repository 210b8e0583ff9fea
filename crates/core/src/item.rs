//! The system record embedded in every content type.
//!
//! Content types flatten an [`Item`] into their own serialized form, which
//! gives the editor the `slug`, `timestamp` and `updated` values it renders as
//! default fields.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// System-managed identity and timestamps for a content object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Numeric id within the content type. `-1` marks an unsaved item.
    pub id: i64,

    pub uuid: Uuid,

    /// URL slug, assigned by the system on first save.
    #[serde(default)]
    pub slug: String,

    /// Creation time in unix milliseconds.
    pub timestamp: i64,

    /// Last update time in unix milliseconds.
    pub updated: i64,
}

impl Item {
    /// Id carried by items that have never been saved.
    pub const UNSAVED_ID: i64 = -1;

    /// A fresh, unsaved item stamped with the current time.
    pub fn new() -> Self {
        let now = Utc::now().timestamp_millis();
        Self {
            id: Self::UNSAVED_ID,
            uuid: Uuid::new_v4(),
            slug: String::new(),
            timestamp: now,
            updated: now,
        }
    }

    /// An item with fixed identity and timestamps.
    pub fn with_id(id: i64, slug: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id,
            uuid: Uuid::new_v4(),
            slug: slug.into(),
            timestamp,
            updated: timestamp,
        }
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new()
    }
}

/// Publication state of a content object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Public,
    /// Externally submitted, awaiting approval.
    Pending,
}

impl ItemStatus {
    /// Value of the `status` query parameter for this state, if any.
    pub fn as_query(&self) -> Option<&'static str> {
        match self {
            Self::Public => None,
            Self::Pending => Some("pending"),
        }
    }

    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("pending") => Self::Pending,
            _ => Self::Public,
        }
    }
}
