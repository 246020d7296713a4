//! Task model
//!
//! The attributes of a task that scoring reads. Priority and status are
//! closed enums with an `Other` arm so unrecognized values flow through and
//! score as neutral instead of failing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task as seen by the scorer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Optional identifier, used only for display and lookup
    pub id: Option<String>,

    /// Optional title, used only for display
    pub title: Option<String>,

    /// Priority level
    pub priority: Priority,

    /// Deadline; `None` means no deadline
    pub due_date: Option<DateTime<Utc>>,

    /// Current status
    pub status: TaskStatus,

    /// Free-form tags (case-sensitive, duplicates allowed)
    pub tags: Vec<String>,

    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// Task status
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    /// Being worked on
    #[default]
    Active,
    /// Waiting on review
    Review,
    /// Completed
    Done,
    /// Any status this crate does not assign a weight to
    Other(String),
}

impl TaskStatus {
    /// Whether this is one of the named statuses
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Review => write!(f, "review"),
            Self::Done => write!(f, "done"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for TaskStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "active" => Self::Active,
            "review" | "in_review" => Self::Review,
            "done" | "complete" | "completed" => Self::Done,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.to_string()
    }
}

/// Task priority
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    /// Low priority
    Low,
    /// Medium priority (default)
    #[default]
    Medium,
    /// High priority
    High,
    /// Must be done immediately
    Urgent,
    /// Any value outside the known levels; weighs nothing
    Other(String),
}

impl Priority {
    /// Whether this is one of the named levels
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Urgent => write!(f, "urgent"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Priority {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "medium" | "med" => Self::Medium,
            "high" => Self::High,
            "urgent" => Self::Urgent,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.to_string()
    }
}

impl Task {
    /// Create a task with no deadline and no tags
    #[must_use]
    pub const fn new(priority: Priority, status: TaskStatus, updated_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            title: None,
            priority,
            due_date: None,
            status,
            tags: Vec::new(),
            updated_at,
        }
    }

    /// Set the identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the deadline
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replace the tags
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Whether any tag equals `tag` exactly
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
