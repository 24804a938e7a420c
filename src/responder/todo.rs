//! JSON-file backed to-do list.
//!
//! Tasks survive restarts; everything else in the assistant is stateless.
//! All operations answer with the user-facing message text.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Done,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub status: TaskStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Task list persisted as pretty-printed JSON at a fixed path.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Opens the store, starting empty if the file does not exist or does
    /// not parse.
    pub fn open(path: PathBuf) -> Self {
        let tasks = fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();
        Self { path, tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Adds a task, rejecting blank and duplicate titles.
    pub fn add(&mut self, title: &str) -> Result<String> {
        let title = title.trim();
        if title.is_empty() {
            return Ok("Task cannot be empty".to_string());
        }
        if self
            .tasks
            .iter()
            .any(|t| t.title.eq_ignore_ascii_case(title))
        {
            return Ok("Task already exists".to_string());
        }

        let id = self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        self.tasks.push(Task {
            id,
            title: title.to_string(),
            status: TaskStatus::Pending,
            created_at: OffsetDateTime::now_utc(),
        });
        self.save()?;
        Ok(format!("Task added: {title}"))
    }

    /// Formats the full list for display, one task per line.
    pub fn format_list(&self) -> String {
        if self.tasks.is_empty() {
            return "No tasks found.".to_string();
        }
        self.tasks
            .iter()
            .map(|t| {
                let status = match t.status {
                    TaskStatus::Pending => "Pending",
                    TaskStatus::Done => "Done",
                };
                format!("{}. [{status}] {}", t.id, t.title)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn remove(&mut self, id: u64) -> Result<String> {
        let Some(position) = self.tasks.iter().position(|t| t.id == id) else {
            return Ok("Task not found".to_string());
        };
        let removed = self.tasks.remove(position);
        self.save()?;
        Ok(format!("Removed task: {}", removed.title))
    }

    pub fn mark_done(&mut self, id: u64) -> Result<String> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok("Task not found".to_string());
        };
        task.status = TaskStatus::Done;
        let message = format!("Marked done: {}", task.title);
        self.save()?;
        Ok(message)
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory: {}", parent.display())
            })?;
        }
        let contents =
            serde_json::to_string_pretty(&self.tasks).context("Failed to serialize tasks")?;
        crate::fs::atomic_write(&self.path, &contents)
            .with_context(|| format!("Failed to write task file: {}", self.path.display()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> TaskStore {
        TaskStore::open(dir.path().join("tasks.json"))
    }

    #[test]
    fn test_add_and_list() {
        let dir = TempDir::new().unwrap();
        let mut tasks = store(&dir);

        assert_eq!(tasks.add("Buy milk").unwrap(), "Task added: Buy milk");
        assert_eq!(tasks.add("Walk dog").unwrap(), "Task added: Walk dog");
        assert_eq!(tasks.format_list(), "1. [Pending] Buy milk\n2. [Pending] Walk dog");
    }

    #[test]
    fn test_empty_list_message() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store(&dir).format_list(), "No tasks found.");
    }

    #[test]
    fn test_add_blank_rejected() {
        let dir = TempDir::new().unwrap();
        let mut tasks = store(&dir);
        assert_eq!(tasks.add("   ").unwrap(), "Task cannot be empty");
        assert!(tasks.tasks().is_empty());
    }

    #[test]
    fn test_duplicate_title_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let mut tasks = store(&dir);
        tasks.add("Buy milk").unwrap();
        assert_eq!(tasks.add("buy MILK").unwrap(), "Task already exists");
        assert_eq!(tasks.tasks().len(), 1);
    }

    #[test]
    fn test_remove_and_unknown_id() {
        let dir = TempDir::new().unwrap();
        let mut tasks = store(&dir);
        tasks.add("Buy milk").unwrap();

        assert_eq!(tasks.remove(1).unwrap(), "Removed task: Buy milk");
        assert_eq!(tasks.remove(1).unwrap(), "Task not found");
    }

    #[test]
    fn test_mark_done_changes_listing() {
        let dir = TempDir::new().unwrap();
        let mut tasks = store(&dir);
        tasks.add("Buy milk").unwrap();

        assert_eq!(tasks.mark_done(1).unwrap(), "Marked done: Buy milk");
        assert_eq!(tasks.format_list(), "1. [Done] Buy milk");
        assert_eq!(tasks.mark_done(9).unwrap(), "Task not found");
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let dir = TempDir::new().unwrap();
        let mut tasks = store(&dir);
        tasks.add("one").unwrap();
        tasks.add("two").unwrap();
        tasks.remove(1).unwrap();
        tasks.add("three").unwrap();

        let ids: Vec<u64> = tasks.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        {
            let mut tasks = store(&dir);
            tasks.add("Buy milk").unwrap();
            tasks.mark_done(1).unwrap();
        }

        let reloaded = store(&dir);
        assert_eq!(reloaded.tasks().len(), 1);
        assert_eq!(reloaded.tasks()[0].status, TaskStatus::Done);
        assert_eq!(reloaded.format_list(), "1. [Done] Buy milk");
    }
}
