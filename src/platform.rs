//! Supported AI coding platforms
//!
//! A platform selects only where the root rule file lands; everything else
//! in the install layout is platform-independent.

use std::fmt;
use std::path::PathBuf;

use crate::error::{GroundworkError, Result};

/// Closed set of platforms the installer can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Cursor,
    Claude,
    Codex,
    Copilot,
}

impl Platform {
    /// All supported platforms, in help/display order
    pub const ALL: &'static [Platform] = &[
        Platform::Cursor,
        Platform::Claude,
        Platform::Codex,
        Platform::Copilot,
    ];

    /// Stable identifier used on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Cursor => "cursor",
            Platform::Claude => "claude",
            Platform::Codex => "codex",
            Platform::Copilot => "copilot",
        }
    }

    /// Parse a platform identifier, rejecting anything outside the closed set
    pub fn from_id(id: &str) -> Result<Platform> {
        Platform::ALL
            .iter()
            .copied()
            .find(|p| p.id() == id)
            .ok_or_else(|| GroundworkError::PlatformNotSupported {
                platform: id.to_string(),
            })
    }

    /// Rule file location relative to the project root
    pub fn rules_path(&self) -> PathBuf {
        match self {
            Platform::Cursor => PathBuf::from(".cursorrules"),
            Platform::Claude => PathBuf::from("CLAUDE.md"),
            Platform::Codex => PathBuf::from("AGENTS.md"),
            Platform::Copilot => PathBuf::from(".github/copilot-instructions.md"),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
