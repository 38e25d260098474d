use crate::command::{Command, CommandResult, SubcommandTable};
use crate::commands::help;
use crate::context::TerminalContext;
use crate::parser::ParsedCommand;
use crate::render::Renderable;

pub struct ProjectCommand;

pub static TABLE: SubcommandTable = SubcommandTable {
    scope: "project",
    usage: "Usage: project list",
    entries: &[("list", list)],
};

const PROJECTS: &[(&str, &str)] = &[
    (
        "GitHub Repository Language Analysis",
        "1,200 repos • Interactive dashboard • Rust/TypeScript dominance",
    ),
    (
        "CONSIM - Consciousness Simulator",
        "GPU-accelerated • 20× speedup • PyTorch/JAX/Numba",
    ),
    (
        "WeGo Transit Performance Analysis",
        "338K records • 79.69% on-time • Route optimization",
    ),
];

impl Command for ProjectCommand {
    fn execute(&self, cmd: &ParsedCommand, ctx: &mut TerminalContext) -> CommandResult {
        if cmd.has_flag("help") {
            return Ok(help::suite_help("project"));
        }
        TABLE.dispatch(cmd.subcommand.as_deref(), cmd, ctx)
    }
}

fn list(_cmd: &ParsedCommand, _ctx: &TerminalContext) -> CommandResult {
    let mut items = vec![Renderable::heading("Portfolio Projects:")];
    items.extend(
        PROJECTS
            .iter()
            .map(|(name, blurb)| Renderable::section(*name, None, vec![Renderable::muted(*blurb)])),
    );
    Ok(Some(Renderable::group(items)))
}

#[cfg(test)]
mod tests {
    use crate::config::CliConfig;
    use crate::context::TerminalContext;

    fn run(line: &str) -> String {
        let mut ctx = TerminalContext::new(CliConfig { banner: false, ..CliConfig::default() });
        ctx.submit(line).rendered.map(|r| r.to_string()).unwrap_or_default()
    }

    #[test]
    fn lists_three_projects() {
        let out = run("project list");
        assert!(out.starts_with("Portfolio Projects:"));
        assert!(out.contains("CONSIM"));
        assert!(out.contains("WeGo Transit"));
    }

    #[test]
    fn project_without_list() {
        assert_eq!(run("project"), "Usage: project list");
        assert_eq!(run("project show consim"), "Unknown project command: show");
    }
}
