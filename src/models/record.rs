//! Loosely typed task records
//!
//! Records are what task files contain: every field may be missing. Turning a
//! record into a [`Task`] is where missing attributes are reported.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::models::{Priority, Task, TaskStatus};

/// Task entry as read from a file (serialization format)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskRecord {
    /// Identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Priority: low, medium, high, urgent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Deadline (RFC3339, naive datetime, or date; quoted or TOML-native)
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "timestamp_text")]
    pub due_date: Option<String>,
    /// Status: active, review, done, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Last modification time (RFC3339, naive datetime, or date; quoted or TOML-native)
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "timestamp_text")]
    pub updated_at: Option<String>,
}

/// Read a timestamp field as text, whether it was written as a string or as a
/// TOML datetime literal
fn timestamp_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<toml::Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(toml::Value::String(text)) => Ok(Some(text)),
        Some(toml::Value::Datetime(datetime)) => Ok(Some(datetime.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a timestamp string or datetime, found {}",
            other.type_str()
        ))),
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = Error;

    fn try_from(record: TaskRecord) -> Result<Self> {
        let priority: Priority = record.priority.ok_or(Error::MissingAttribute("priority"))?.into();
        let status: TaskStatus = record.status.ok_or(Error::MissingAttribute("status"))?.into();
        let tags = record.tags.ok_or(Error::MissingAttribute("tags"))?;
        let updated_at = record.updated_at.ok_or(Error::MissingAttribute("updated_at"))?;
        let updated_at = parse_timestamp("updated_at", &updated_at)?;
        let due_date = record
            .due_date
            .map(|raw| parse_timestamp("due_date", &raw))
            .transpose()?;

        if !priority.is_recognized() {
            log::warn!("unrecognized priority {priority:?}; it carries no weight");
        }
        if !status.is_recognized() {
            log::debug!("status {status:?} has no adjustment");
        }

        Ok(Self {
            id: record.id,
            title: record.title,
            priority,
            due_date,
            status,
            tags,
            updated_at,
        })
    }
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            priority: Some(task.priority.to_string()),
            due_date: task.due_date.map(|d| d.to_rfc3339()),
            status: Some(task.status.to_string()),
            tags: Some(task.tags.clone()),
            updated_at: Some(task.updated_at.to_rfc3339()),
        }
    }
}

/// Parse a timestamp field.
///
/// Accepts RFC3339, a naive `YYYY-MM-DDTHH:MM:SS` (taken as UTC), or a bare
/// `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::InvalidTimestamp {
            field,
            value: value.to_string(),
        })
}
