use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use crate::parser::ParsedCommand;

/// Wipes scrollback. Produces no output, so the `clear` line itself never
/// shows up in history either.
pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(&self, _cmd: &ParsedCommand, ctx: &mut TerminalContext) -> CommandResult {
        ctx.clear_history();
        Ok(None)
    }
}
