//! Center Model

use serde::{Deserialize, Serialize};

/// Tuition center (filter and selection option)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Center {
    /// Backend id; populated references may omit it
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
}

/// Center reference on a tutor
///
/// The backend returns either the populated center document or the bare id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CenterRef {
    Populated(Center),
    Id(String),
}

impl CenterRef {
    /// Center name if the reference was populated
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Populated(center) => Some(center.name.as_str()),
            Self::Id(_) => None,
        }
    }

    /// Center id, when known
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Populated(center) if !center.id.is_empty() => Some(center.id.as_str()),
            Self::Populated(_) => None,
            Self::Id(id) => Some(id.as_str()),
        }
    }

    /// Display text: the name, or `ID: <id>` for an unpopulated reference
    pub fn display(&self) -> String {
        match self {
            Self::Populated(center) => center.name.clone(),
            Self::Id(id) => format!("ID: {}", id),
        }
    }
}
