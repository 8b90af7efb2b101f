use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned task identifier.
///
/// The storage service assigns ids and the client never invents one. The
/// wire format may carry integers or strings depending on the backend, so
/// both decode transparently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Int(i64),
    Str(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Int(n) => write!(f, "{}", n),
            TaskId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for TaskId {
    fn from(n: i64) -> Self {
        TaskId::Int(n)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId::Str(s.to_string())
    }
}

/// A task record as stored server-side.
///
/// The server is the source of truth for every field; the client only ever
/// holds the last value the server returned for a given id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Optional free text; the server defaults a missing description to "".
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    /// Server-assigned creation timestamp, kept verbatim as received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Task {
    /// Whether there is any description text to show.
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}
