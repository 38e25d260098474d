use serde::Serialize;
use std::collections::HashMap;

/// Bare tokens allowed to become a subcommand. Only the first one on a line
/// wins; later matches stay positional (`ca grid step init` keeps
/// `step`/`init` as args).
pub const SUBCOMMANDS: &[&str] = &[
    // ssg
    "init", "populate", "build", "dev", "deploy", "analyze",
    // ca
    "grid", "rule", "cell", "region", "inject", "step", "simulate", "benchmark", "profile", "debug", "query",
    // project
    "list", "show",
    // nested words some users type in first position
    "load", "export", "import", "get", "set", "info",
    // fs
    "ls", "cat", "tree",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FlagValue {
    Switch(bool),
    Value(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedCommand {
    pub verb: String,
    pub subcommand: Option<String>,
    pub args: Vec<String>,
    pub flags: HashMap<String, FlagValue>,
}

impl ParsedCommand {
    pub fn arg(&self, n: usize) -> Option<&str> {
        self.args.get(n).map(String::as_str)
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// String value of `--name value`; switches have none.
    pub fn flag_value(&self, name: &str) -> Option<&str> {
        match self.flags.get(name) {
            Some(FlagValue::Value(v)) => Some(v),
            _ => None,
        }
    }
}

pub fn parse(line: &str) -> ParsedCommand {
    let mut tokens = line.split_whitespace();
    let verb = tokens.next().unwrap_or_default().to_string();
    let rest: Vec<&str> = tokens.collect();

    let mut cmd = ParsedCommand { verb, ..Default::default() };

    let mut i = 0;
    while i < rest.len() {
        let tok = rest[i];
        if let Some(name) = tok.strip_prefix("--") {
            // long flag, grabs the next token unless it looks like a flag too
            match rest.get(i + 1) {
                Some(next) if !next.starts_with('-') => {
                    cmd.flags.insert(name.to_string(), FlagValue::Value(next.to_string()));
                    i += 1;
                }
                _ => {
                    cmd.flags.insert(name.to_string(), FlagValue::Switch(true));
                }
            }
        } else if let Some(name) = tok.strip_prefix('-') {
            cmd.flags.insert(name.to_string(), FlagValue::Switch(true));
        } else if cmd.subcommand.is_none() && SUBCOMMANDS.contains(&tok) {
            cmd.subcommand = Some(tok.to_string());
        } else {
            cmd.args.push(tok.to_string());
        }
        i += 1;
    }

    cmd
}
