//! Task file loading
//!
//! Task files are TOML (`[[task]]` tables) or JSON (an array of records, or
//! an object with a `tasks` array). The extension picks the format: `.json`
//! is JSON, anything else is TOML.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{Task, TaskRecord};

/// Task file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFormat {
    /// `[[task]]` tables
    Toml,
    /// Array of objects, or `{"tasks": [...]}`
    Json,
}

impl TaskFormat {
    /// Pick the format from a file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TomlTaskFile {
    #[serde(default, rename = "task")]
    tasks: Vec<TaskRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonTaskFile {
    List(Vec<TaskRecord>),
    Wrapped { tasks: Vec<TaskRecord> },
}

/// Parse raw records from file contents
pub fn parse_records(content: &str, format: TaskFormat) -> Result<Vec<TaskRecord>> {
    let records = match format {
        TaskFormat::Toml => toml::from_str::<TomlTaskFile>(content)?.tasks,
        TaskFormat::Json => match serde_json::from_str::<JsonTaskFile>(content)? {
            JsonTaskFile::List(tasks) | JsonTaskFile::Wrapped { tasks } => tasks,
        },
    };
    Ok(records)
}

/// Convert records into tasks, failing on the first invalid record
pub fn records_to_tasks(records: Vec<TaskRecord>) -> Result<Vec<Task>> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            Task::try_from(record).map_err(|e| Error::Record {
                index: i + 1,
                source: Box::new(e),
            })
        })
        .collect()
}

/// Parse tasks from file contents
pub fn parse_tasks(content: &str, format: TaskFormat) -> Result<Vec<Task>> {
    records_to_tasks(parse_records(content, format)?)
}

/// Read and parse a task file
pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tasks = parse_tasks(&content, TaskFormat::from_path(path))?;
    log::debug!("loaded {} task(s) from {}", tasks.len(), path.display());
    Ok(tasks)
}

/// Display label for the task at `index` (0-based) in its file
#[must_use]
pub fn task_label(task: &Task, index: usize) -> String {
    task.id.clone().unwrap_or_else(|| format!("#{}", index + 1))
}

/// Find a task by id, or by `#N` position label
pub fn find_task<'a>(tasks: &'a [Task], id: &str) -> Result<&'a Task> {
    tasks
        .iter()
        .enumerate()
        .find(|(i, task)| task_label(task, *i) == id)
        .map(|(_, task)| task)
        .ok_or_else(|| Error::TaskNotFound(id.to_string()))
}
