// src/history.rs
// Conversation store: display name -> ordered turn list, rewritten wholesale
// to a flat JSON file after every assistant turn.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::chat::Category;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in a conversation. Assistant turns carry category and zone so
/// the UI can re-derive table/chart/tips from the record alone; `content` is
/// display text only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
}

impl Turn {
    pub fn new_user(content: String, time: String) -> Self {
        Self {
            role: Role::User,
            content,
            time,
            category: None,
            zone: None,
        }
    }

    pub fn new_assistant(
        content: String,
        time: String,
        category: Option<Category>,
        zone: Option<String>,
    ) -> Self {
        Self {
            role: Role::Assistant,
            content,
            time,
            category,
            zone,
        }
    }

    /// Wall-clock label shown next to a turn ("04:23 PM").
    pub fn clock_now() -> String {
        Local::now().format("%I:%M %p").to_string()
    }
}

/// All users' conversations plus the backing file path.
#[derive(Debug)]
pub struct ConversationStore {
    path: PathBuf,
    histories: HashMap<String, Vec<Turn>>,
}

impl ConversationStore {
    /// Load the store from disk. A missing file, malformed JSON, or a
    /// list-shaped legacy file all yield an empty store; recovery is silent
    /// apart from a warn-level log line.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let histories = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, Vec<Turn>>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "resetting unreadable conversation store");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self { path, histories }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// User names, sorted for stable sidebar rendering.
    pub fn users(&self) -> Vec<String> {
        let mut users: Vec<String> = self.histories.keys().cloned().collect();
        users.sort();
        users
    }

    pub fn turns(&self, user: &str) -> Option<&[Turn]> {
        self.histories.get(user).map(|turns| turns.as_slice())
    }

    pub fn append_turn(&mut self, user: &str, turn: Turn) {
        self.histories.entry(user.to_string()).or_default().push(turn);
    }

    /// Rewrite the whole backing file. Last writer wins across processes.
    pub fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.histories)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
