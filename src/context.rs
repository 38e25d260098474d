use crate::catalog;
use crate::command::{self, CommandRegistry};
use crate::config::CliConfig;
use crate::render::Renderable;
use crate::vfs::VirtualFileSystem;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryOrigin {
    /// pushed by the session itself (the welcome banner)
    System,
    User,
}

/// One block of scrollback: what was typed and what came back.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub origin: EntryOrigin,
    pub input: String,
    pub output: Option<Renderable>,
    pub created_at: DateTime<Local>,
}

/// Keys the input line reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Tab,
    ArrowUp,
    ArrowDown,
    Backspace,
    Char(char),
}

impl Key {
    /// Maps DOM `KeyboardEvent.key` names. Anything else (Shift, F5...) is ignored.
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            "Enter" => Some(Key::Enter),
            "Tab" => Some(Key::Tab),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "Backspace" => Some(Key::Backspace),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Char(c)),
                    _ => None,
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitOutcome {
    pub history_appended: bool,
    pub rendered: Option<Renderable>,
}

impl SubmitOutcome {
    fn noop() -> Self {
        Self { history_appended: false, rendered: None }
    }
}

/// Everything one terminal session owns.
pub struct TerminalContext {
    pub vfs: Arc<VirtualFileSystem>,
    pub config: CliConfig,
    pub cwd: String,
    /// rendered scrollback, oldest first
    pub history: Vec<HistoryEntry>,
    /// raw submitted lines for ArrowUp/ArrowDown. `clear` leaves these alone.
    pub inputs: Vec<String>,
    /// steps back from the newest input; None when not recalling
    pub recall: Option<usize>,
    pub input: String,
    pub suggestions: Vec<String>,
    pub registry: Arc<CommandRegistry>,
    /// bumped on every `clear`, even of an already empty scrollback
    pub clears: u64,
}

impl TerminalContext {
    pub fn new(config: CliConfig) -> Self {
        Self::new_with_vfs(config, Arc::new(VirtualFileSystem::portfolio()))
    }

    pub fn new_with_vfs(config: CliConfig, vfs: Arc<VirtualFileSystem>) -> Self {
        let mut ctx = Self {
            vfs,
            cwd: config.cwd.clone(),
            history: Vec::new(),
            inputs: Vec::new(),
            recall: None,
            input: String::new(),
            suggestions: Vec::new(),
            registry: Arc::new(CommandRegistry::default_commands()),
            clears: 0,
            config,
        };
        if ctx.config.banner {
            let banner = crate::commands::about::banner();
            ctx.push_entry(EntryOrigin::System, "system", Some(banner));
        }
        log::info!("session started for {}@{}", ctx.config.user, ctx.config.host);
        ctx
    }

    pub fn prompt(&self) -> String {
        format!("{}@{}:~{}", self.config.user, self.config.host, self.cwd)
    }

    fn push_entry(&mut self, origin: EntryOrigin, input: &str, output: Option<Renderable>) {
        self.history.push(HistoryEntry {
            id: Uuid::new_v4(),
            origin,
            input: input.to_string(),
            output,
            created_at: Local::now(),
        });
    }

    pub fn clear_history(&mut self) {
        log::info!("clearing {} scrollback entries", self.history.len());
        self.history.clear();
        self.clears += 1;
    }

    /// Runs one line. Blank lines do nothing at all; anything else is
    /// remembered for recall, and shows up in scrollback unless the command
    /// had no output.
    pub fn submit(&mut self, line: &str) -> SubmitOutcome {
        let line = line.trim();
        if line.is_empty() {
            return SubmitOutcome::noop();
        }
        self.inputs.push(line.to_string());
        self.recall = None;

        let registry = Arc::clone(&self.registry);
        let rendered = command::run_command(line, self, &registry);

        let history_appended = rendered.is_some();
        if history_appended {
            self.push_entry(EntryOrigin::User, line, rendered.clone());
        }
        SubmitOutcome { history_appended, rendered }
    }

    /// Feeds one keystroke. Returns the outcome when Enter submitted a line.
    pub fn on_key(&mut self, key: Key) -> Option<SubmitOutcome> {
        match key {
            Key::Enter => {
                let line = std::mem::take(&mut self.input);
                self.suggestions.clear();
                if line.trim().is_empty() {
                    return None;
                }
                return Some(self.submit(&line));
            }
            Key::Tab => {
                // first suggestion, no cycling
                if let Some(first) = self.suggestions.first().cloned() {
                    self.input = first;
                    self.suggestions.clear();
                }
            }
            Key::ArrowUp => {
                self.recall_prev();
            }
            Key::ArrowDown => {
                self.recall_next();
            }
            Key::Backspace => {
                self.input.pop();
                self.refresh_suggestions();
            }
            Key::Char(c) => {
                self.input.push(c);
                self.refresh_suggestions();
            }
        }
        None
    }

    /// Replaces the whole input line, as a paste or a controlled input would.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.refresh_suggestions();
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions = catalog::autocomplete(&self.input);
    }

    /// One step further into the past. Returns false at the oldest entry.
    pub fn recall_prev(&mut self) -> bool {
        let next = self.recall.map_or(0, |c| c + 1);
        if next >= self.inputs.len() {
            return false;
        }
        self.recall = Some(next);
        self.input = self.inputs[self.inputs.len() - 1 - next].clone();
        self.refresh_suggestions();
        true
    }

    /// One step back toward the present; stepping past the newest entry
    /// leaves recall mode with an empty line.
    pub fn recall_next(&mut self) -> bool {
        match self.recall {
            None => false,
            Some(0) => {
                self.recall = None;
                self.input.clear();
                self.suggestions.clear();
                true
            }
            Some(c) => {
                let prev = c - 1;
                self.recall = Some(prev);
                self.input = self.inputs[self.inputs.len() - 1 - prev].clone();
                self.refresh_suggestions();
                true
            }
        }
    }
}

impl Default for TerminalContext {
    fn default() -> Self {
        Self::new(CliConfig::default())
    }
}
