use crate::context::TerminalContext;
use crate::error::CommandError;
use crate::parser::{self, ParsedCommand};
use crate::render::Renderable;
use std::collections::HashMap;

/// `Ok(None)` means the command ran but has nothing to show (only `clear`).
pub type CommandResult = Result<Option<Renderable>, CommandError>;

pub trait Command {
    fn execute(&self, cmd: &ParsedCommand, ctx: &mut TerminalContext) -> CommandResult;
}

/// Leaf handler inside a verb's subcommand table. Leaves only read the
/// session; nothing below the verb level mutates it.
pub type Handler = fn(&ParsedCommand, &TerminalContext) -> CommandResult;

/// One level of the command tree: a keyword -> handler map plus the text
/// shown when the keyword is missing.
pub struct SubcommandTable {
    pub scope: &'static str,
    pub usage: &'static str,
    pub entries: &'static [(&'static str, Handler)],
}

impl SubcommandTable {
    pub fn get(&self, name: &str) -> Option<Handler> {
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, h)| *h)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    pub fn dispatch(&self, key: Option<&str>, cmd: &ParsedCommand, ctx: &TerminalContext) -> CommandResult {
        let key = key.ok_or(CommandError::MissingSubcommand { usage: self.usage })?;
        match self.get(key) {
            Some(handler) => handler(cmd, ctx),
            None => Err(CommandError::unknown(self.scope, key)),
        }
    }
}

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command + Send + Sync>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: HashMap::new() }
    }
    pub fn register_command(&mut self, name: &str, cmd: Box<dyn Command + Send + Sync>) {
        self.commands.insert(name.to_string(), cmd);
    }
    pub fn get(&self, name: &str) -> Option<&(dyn Command + Send + Sync)> {
        self.commands.get(name).map(|c| c.as_ref())
    }
    pub fn default_commands() -> Self {
        let mut reg = Self::new();
        reg.register_command("help", Box::new(crate::commands::help::HelpCommand));
        reg.register_command("clear", Box::new(crate::commands::clear::ClearCommand));
        reg.register_command("about", Box::new(crate::commands::about::AboutCommand));
        reg.register_command("neofetch", Box::new(crate::commands::neofetch::NeofetchCommand));
        reg.register_command("ssg", Box::new(crate::commands::ssg::SsgCommand));
        reg.register_command("ca", Box::new(crate::commands::ca::CaCommand));
        reg.register_command("fs", Box::new(crate::commands::fs::FsCommand));
        reg.register_command("project", Box::new(crate::commands::project::ProjectCommand));
        reg
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::default_commands()
    }
}

/// Runs an already parsed command. Never fails: errors come back as an
/// error-toned renderable.
pub fn dispatch(cmd: &ParsedCommand, ctx: &mut TerminalContext, registry: &CommandRegistry) -> Option<Renderable> {
    log::debug!("dispatch verb={:?} subcommand={:?} args={:?}", cmd.verb, cmd.subcommand, cmd.args);

    let result = match registry.get(&cmd.verb) {
        Some(command) => command.execute(cmd, ctx),
        None => Err(CommandError::UnknownVerb(cmd.verb.clone())),
    };

    match result {
        Ok(output) => output,
        Err(e) => {
            if let CommandError::UnknownVerb(verb) = &e {
                log::warn!("unknown verb {:?}", verb);
            }
            Some(Renderable::error(e.to_string()))
        }
    }
}

pub fn run_command(input: &str, ctx: &mut TerminalContext, registry: &CommandRegistry) -> Option<Renderable> {
    let input = input.trim();
    // empty input = no-op
    if input.is_empty() {
        return None;
    }
    dispatch(&parser::parse(input), ctx, registry)
}

/// Parses `s` as a number, falling back to `default` when absent or garbage.
pub fn number_or<T: std::str::FromStr>(s: Option<&str>, default: T) -> T {
    s.and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use crate::config::CliConfig;

    fn ctx() -> TerminalContext {
        TerminalContext::new(CliConfig { banner: false, ..CliConfig::default() })
    }

    #[test]
    fn unknown_verb_is_rendered_not_raised() {
        let mut ctx = ctx();
        let reg = CommandRegistry::default_commands();
        let out = run_command("sudo make me a sandwich", &mut ctx, &reg).unwrap();
        assert!(out.is_error());
        assert_eq!(out.to_string(), "Command not found: sudo. Type 'help' for available commands.");
    }

    #[test]
    fn blank_input_is_noop() {
        let mut ctx = ctx();
        let reg = CommandRegistry::default_commands();
        assert_eq!(run_command("   ", &mut ctx, &reg), None);
    }

    #[test]
    fn every_catalog_entry_dispatches() {
        let reg = CommandRegistry::default_commands();
        for entry in CATALOG {
            let mut ctx = ctx();
            let out = run_command(entry, &mut ctx, &reg);
            if *entry == "clear" {
                assert_eq!(out, None);
                continue;
            }
            let out = out.unwrap_or_else(|| panic!("{} produced nothing", entry));
            let text = out.to_string();
            assert!(!text.starts_with("Unknown"), "{} -> {}", entry, text);
            assert!(!text.starts_with("Command not found"), "{} -> {}", entry, text);
        }
    }

    #[test]
    fn every_subcommand_keyword_is_allow_listed() {
        use crate::commands::{ca, fs, project, ssg};
        for table in [&ssg::TABLE, &ca::TABLE, &fs::TABLE, &project::TABLE] {
            for name in table.names() {
                assert!(parser::SUBCOMMANDS.contains(&name), "{} missing from allow-list", name);
            }
        }
    }

    #[test]
    fn totality_over_odd_inputs() {
        let reg = CommandRegistry::default_commands();
        let inputs = [
            "", " ", "\t\n", "-", "--", "---", "-x -y --z", "ca", "ca grid", "ca grid nope",
            "ca rule", "ca cell", "ca region", "ca query", "ca query nope", "fs", "fs cat",
            "fs ls nowhere", "fs cat config", "fs cat config/site.yaml/deeper", "project",
            "project nope", "ssg", "ssg step", "ca grid init abc def", "ca inject x y z",
            "ca grid step --count -1", "ca simulate --fps", "help me please", "ünïcödé ✓",
        ];
        for input in inputs {
            let mut ctx = ctx();
            let _ = dispatch(&parser::parse(input), &mut ctx, &reg);
        }
    }

    #[test]
    fn totality_over_extreme_numbers() {
        let reg = CommandRegistry::default_commands();
        let max = u64::MAX.to_string();
        for n in [max.as_str(), "4294967296", "1000000000", "0", "99999999999999999999999", "1e308", "NaN"] {
            let inputs = [
                format!("ca grid init {n} {n}"),
                format!("ca grid query {n} {n}"),
                format!("ca grid step --count {n}"),
                format!("ca inject {n} {n} {n} --radius {n}"),
                format!("ca region get {n} {n} {n} {n}"),
                format!("ca region assign-rule r {n} {n} {n} {n}"),
                format!("ca cell get {n} {n}"),
                format!("ca cell set {n} {n} stable"),
                format!("ca simulate --fps {n}"),
                format!("ca benchmark --steps {n}"),
                format!("ssg dev --port {n}"),
            ];
            for input in inputs {
                let mut ctx = ctx();
                let out = dispatch(&parser::parse(&input), &mut ctx, &reg);
                let out = out.unwrap_or_else(|| panic!("{} produced nothing", input));
                assert!(!out.is_error(), "{} -> {}", input, out);
            }
        }
    }

    #[test]
    fn number_or_falls_back() {
        assert_eq!(number_or(Some("12"), 1u32), 12);
        assert_eq!(number_or(Some("twelve"), 1u32), 1);
        assert_eq!(number_or(None, 0.8f64), 0.8);
    }
}
