use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::parser::ParsedCommand;
use crate::render::Renderable;

/// help
/// Lists every command suite. Arguments are accepted and ignored; the output
/// never depends on session state.
pub struct HelpCommand;

const SSG_COMMANDS: &[(&str, &str)] = &[
    ("init", "Initialize new project"),
    ("populate", "Load content from sources"),
    ("build [--minify] [--optimize]", "Build static site"),
    ("dev [--port <n>]", "Start development server"),
    ("deploy [--platform <name>]", "Deploy to platform"),
    ("analyze", "Performance analysis"),
];

const CA_COMMANDS: &[(&str, &str)] = &[
    ("grid init [width] [height]", "Create grid"),
    ("grid step [--count <n>]", "Run simulation steps"),
    ("grid info", "Display grid statistics"),
    ("grid export [file]", "Snapshot grid state"),
    ("grid import [file]", "Restore grid state"),
    ("grid query [x] [y]", "Inspect one cell through the grid"),
    ("rule load [file]", "Load rule configuration"),
    ("rule validate [file]", "Validate rules"),
    ("rule compile [file]", "Compile rules to a compute kernel"),
    ("rule list", "List known rule sets"),
    ("cell get [x] [y]", "Read a cell"),
    ("cell set [x] [y] [state]", "Write a cell"),
    ("region get [x] [y] [w] [h]", "Summarize a rectangular region"),
    ("region assign-rule [rule] [x] [y] [w] [h]", "Bind a rule set to a region"),
    ("inject [x] [y] [energy] [--radius <r>]", "Inject energy"),
    ("simulate [--fps <n>]", "Start real-time sim"),
    ("benchmark [--steps <n>]", "Measure step throughput"),
    ("profile", "Per-stage pipeline timings"),
    ("debug", "Dump compute pipeline state"),
    ("query <stability|entropy|performance>", "Query live metrics"),
];

const FS_COMMANDS: &[(&str, &str)] = &[
    ("fs ls [path]", "List directory"),
    ("fs cat <file>", "Display file contents"),
    ("fs tree [path]", "Show directory tree"),
    ("project list", "List all projects"),
    ("about", "About this CLI"),
    ("neofetch", "System information"),
    ("clear", "Clear the screen"),
];

fn suite(title: &str, subtitle: Option<&str>, commands: &[(&str, &str)]) -> Renderable {
    Renderable::section(
        title,
        subtitle,
        vec![Renderable::key_values(None, commands.iter().copied())],
    )
}

/// Help for a single suite, used by `<verb> --help`.
pub fn suite_help(verb: &str) -> Option<Renderable> {
    match verb {
        "ssg" => Some(suite("ssg", Some("Static Site Generator"), SSG_COMMANDS)),
        "ca" => Some(suite("ca", Some("Cellular Automata Engine"), CA_COMMANDS)),
        "fs" | "project" => Some(suite("File System & Utilities", None, FS_COMMANDS)),
        _ => None,
    }
}

pub fn full_help() -> Renderable {
    let mut items = vec![Renderable::heading("Available Command Suites:")];
    items.extend(["ssg", "ca", "fs"].into_iter().filter_map(suite_help));
    Renderable::group(items)
}

impl Command for HelpCommand {
    fn execute(&self, _cmd: &ParsedCommand, _ctx: &mut TerminalContext) -> CommandResult {
        Ok(Some(full_help()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;

    #[test]
    fn help_is_independent_of_session() {
        let mut fresh = TerminalContext::new(CliConfig::default());
        let baseline = fresh.submit("help").rendered;

        let mut busy = TerminalContext::new(CliConfig::default());
        for line in ["ssg build", "ca grid init 10 10", "clear", "fs ls config", "nope"] {
            busy.submit(line);
        }
        busy.on_key(crate::context::Key::ArrowUp);
        assert_eq!(busy.submit("help").rendered, baseline);
        assert_eq!(busy.submit("help ssg --verbose").rendered, baseline);
    }

    #[test]
    fn lists_all_three_suites() {
        let text = full_help().to_string();
        assert!(text.starts_with("Available Command Suites:"));
        assert!(text.contains("ssg - Static Site Generator"));
        assert!(text.contains("ca - Cellular Automata Engine"));
        assert!(text.contains("File System & Utilities"));
        assert!(text.contains("region assign-rule"));
    }

    #[test]
    fn unknown_suite_has_no_help() {
        assert_eq!(suite_help("neofetch"), None);
    }
}
