// portfolio terminal widget compiled to wasm
// a fake multi-suite cli: parse a line, look it up, hand back something to draw
pub mod catalog;
pub mod command;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod logging;
pub mod parser;
pub mod render;
pub mod vfs;

use config::CliConfig;
use context::{Key, TerminalContext};
use events::{emit_session_event, to_js};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// main terminal struct - keeps session state between calls
#[wasm_bindgen]
pub struct Terminal {
    ctx: TerminalContext,
}

// what the input line looks like after a keystroke
#[derive(Serialize)]
struct InputState<'a> {
    input: &'a str,
    suggestions: &'a [String],
    recalling: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    submitted: Option<context::SubmitOutcome>,
}

#[wasm_bindgen]
impl Terminal {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Terminal {
        Terminal::from_config(CliConfig::default())
    }

    /// Builds a terminal from a JSON config. Bad JSON is logged and the
    /// defaults are used instead.
    #[wasm_bindgen]
    pub fn with_config(json: &str) -> Terminal {
        match CliConfig::from_json(json) {
            Ok(config) => Terminal::from_config(config),
            Err(e) => {
                logging::init(log::LevelFilter::Info);
                log::error!("{}; falling back to defaults", e);
                Terminal::from_config(CliConfig::default())
            }
        }
    }

    // main entry point - run a line and return the outcome
    #[wasm_bindgen]
    pub fn execute_command(&mut self, input: &str) -> JsValue {
        let clears = self.ctx.clears;
        let outcome = self.ctx.submit(input);
        self.notify(clears, outcome.history_appended);
        to_js(&outcome)
    }

    /// Feeds a `KeyboardEvent.key` name. Unknown keys leave state alone.
    #[wasm_bindgen]
    pub fn handle_key(&mut self, key: &str) -> JsValue {
        let clears = self.ctx.clears;
        let submitted = Key::from_name(key).and_then(|k| self.ctx.on_key(k));
        if let Some(outcome) = &submitted {
            self.notify(clears, outcome.history_appended);
        }
        to_js(&InputState {
            input: &self.ctx.input,
            suggestions: &self.ctx.suggestions,
            recalling: self.ctx.recall.is_some(),
            submitted,
        })
    }

    // for controlled inputs that hand over the whole value
    #[wasm_bindgen]
    pub fn set_input(&mut self, text: &str) -> JsValue {
        self.ctx.set_input(text);
        to_js(&self.ctx.suggestions)
    }

    #[wasm_bindgen]
    pub fn get_suggestions(&self) -> JsValue {
        to_js(&self.ctx.suggestions)
    }

    #[wasm_bindgen]
    pub fn get_history(&self) -> JsValue {
        to_js(&self.ctx.history)
    }

    #[wasm_bindgen]
    pub fn get_prompt(&self) -> String {
        self.ctx.prompt()
    }

    // get current working directory
    #[wasm_bindgen]
    pub fn get_current_directory(&self) -> String {
        self.ctx.cwd.clone()
    }

    // list files in a directory, defaults to cwd
    #[wasm_bindgen]
    pub fn list_files(&self, path: Option<String>) -> JsValue {
        let target = path.unwrap_or_else(|| self.ctx.cwd.clone());
        match self.ctx.vfs.list_dir(&target) {
            Ok(files) => to_js(&serde_json::json!({ "success": true, "files": files })),
            Err(e) => to_js(&serde_json::json!({ "success": false, "error": e.to_string() })),
        }
    }

    #[wasm_bindgen]
    pub fn read_file(&self, path: &str) -> JsValue {
        match self.ctx.vfs.read_file(path) {
            Ok(content) => to_js(&serde_json::json!({ "success": true, "content": content })),
            Err(e) => to_js(&serde_json::json!({ "success": false, "error": e.to_string() })),
        }
    }

    // every complete command string, catalog order
    #[wasm_bindgen]
    pub fn get_command_list(&self) -> JsValue {
        to_js(catalog::CATALOG)
    }
}

impl Terminal {
    pub fn from_config(config: CliConfig) -> Terminal {
        logging::init(config.level_filter());
        Terminal { ctx: TerminalContext::new(config) }
    }

    pub fn context(&self) -> &TerminalContext {
        &self.ctx
    }

    fn notify(&self, clears_before: u64, appended: bool) {
        if self.ctx.clears != clears_before {
            emit_session_event(events::HISTORY_CLEARED, &serde_json::json!({}));
        }
        if appended {
            if let Some(entry) = self.ctx.history.last() {
                emit_session_event(events::HISTORY_APPENDED, entry);
            }
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}
