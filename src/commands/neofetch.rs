use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::parser::ParsedCommand;
use crate::render::Renderable;

pub struct NeofetchCommand;

const LOGO: &str = "     ▄▄▄▄▄▄▄
    ███████████
   ▐████████████
  ▐█████▀▀██████▌
 ▐█████    ██████▌
▐██████▄▄███████▌
 ████████████████
  ▀█████████████▀";

impl Command for NeofetchCommand {
    fn execute(&self, _cmd: &ParsedCommand, ctx: &mut TerminalContext) -> CommandResult {
        let identity = format!("{}@{}", ctx.config.user, ctx.config.host);
        Ok(Some(Renderable::group(vec![
            Renderable::code(LOGO),
            Renderable::key_values(
                Some(identity.as_str()),
                [
                    ("OS", "Portfolio OS v3.0"),
                    ("Kernel", "React + TypeScript + Rust/WASM"),
                    ("Shell", "Advanced Multi-Suite CLI"),
                    ("Packages", "ssg, ca-engine, project-indexer"),
                    ("Theme", "Cyberpunk [Crimson/Violet]"),
                    ("CPU", "Data Analysis + Software Dev Unit"),
                    ("GPU", "WebGPU + PyTorch Compute"),
                ],
            ),
        ])))
    }
}
