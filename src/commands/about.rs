use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::parser::ParsedCommand;
use crate::render::Renderable;

pub struct AboutCommand;

impl Command for AboutCommand {
    fn execute(&self, _cmd: &ParsedCommand, _ctx: &mut TerminalContext) -> CommandResult {
        Ok(Some(Renderable::group(vec![
            Renderable::heading("Jacob C. Smith - Systems Portfolio"),
            Renderable::plain("This CLI demonstrates two sophisticated systems:"),
            Renderable::section(
                "1. Static Site Generator (Python)",
                None,
                vec![
                    Renderable::muted("7-command suite: init, populate, build, dev, deploy, analyze"),
                    Renderable::muted("Rich terminal UI • Async architecture • Type-safe config"),
                ],
            ),
            Renderable::section(
                "2. Cellular Automata Engine (Rust/WASM)",
                None,
                vec![
                    Renderable::muted("2M cells @ 60fps • WebGPU compute shaders • Rule engine"),
                    Renderable::muted("Real-time physics • Emergent behavior substrate"),
                ],
            ),
        ])))
    }
}

/// Welcome block the session opens with.
pub fn banner() -> Renderable {
    Renderable::group(vec![
        Renderable::heading("╔═══════════════════════════════════════════════════════════╗"),
        Renderable::heading("║   JACOB C. SMITH — PORTFOLIO COMMAND CENTER               ║"),
        Renderable::heading("╚═══════════════════════════════════════════════════════════╝"),
        Renderable::plain("Systems Online: [Static Site Generator] [Cellular Automata Engine]"),
        Renderable::muted("Type help for available commands"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;

    #[test]
    fn about_names_both_systems() {
        let mut ctx = TerminalContext::new(CliConfig { banner: false, ..CliConfig::default() });
        let text = ctx.submit("about").rendered.map(|r| r.to_string()).unwrap_or_default();
        assert!(text.starts_with("Jacob C. Smith - Systems Portfolio"), "{}", text);
        assert!(text.contains("1. Static Site Generator (Python)"));
        assert!(text.contains("2. Cellular Automata Engine (Rust/WASM)"));
    }

    #[test]
    fn banner_headline() {
        let text = banner().to_string();
        assert!(text.contains("PORTFOLIO COMMAND CENTER"));
        assert!(text.contains("Systems Online: [Static Site Generator] [Cellular Automata Engine]"));
        assert!(text.ends_with("Type help for available commands"));
    }

    #[test]
    fn session_opens_with_banner() {
        let ctx = TerminalContext::default();
        assert_eq!(ctx.history[0].output, Some(banner()));
    }
}
