use crate::command::{Command, CommandResult, SubcommandTable};
use crate::commands::help;
use crate::context::TerminalContext;
use crate::error::{CommandError, VfsError};
use crate::parser::ParsedCommand;
use crate::render::Renderable;
use crate::vfs;

/// fs <ls|cat|tree> [path]
/// Read-only browsing of the session filesystem.
pub struct FsCommand;

pub static TABLE: SubcommandTable = SubcommandTable {
    scope: "fs",
    usage: "Usage: fs <ls|cat|tree> [path]",
    entries: &[("ls", ls), ("cat", cat), ("tree", tree)],
};

const CAT_USAGE: &str = "Usage: fs cat <file>";

impl Command for FsCommand {
    fn execute(&self, cmd: &ParsedCommand, ctx: &mut TerminalContext) -> CommandResult {
        if cmd.has_flag("help") {
            return Ok(help::suite_help("fs"));
        }
        TABLE.dispatch(cmd.subcommand.as_deref(), cmd, ctx)
    }
}

// default to cwd if no path given
fn ls(cmd: &ParsedCommand, ctx: &TerminalContext) -> CommandResult {
    let path = cmd.arg(0).unwrap_or(ctx.cwd.as_str());
    let node = ctx.vfs.resolve(path)?;
    let entries = vfs::list_directory(node, path)?;
    Ok(Some(Renderable::Listing { entries }))
}

fn cat(cmd: &ParsedCommand, ctx: &TerminalContext) -> CommandResult {
    let path = cmd.arg(0).ok_or(CommandError::MissingArgument { usage: CAT_USAGE })?;
    let node = ctx.vfs.resolve(path).map_err(|e| match e {
        VfsError::PathNotFound(p) => CommandError::Invalid(format!("File not found: {}", p)),
        other => other.into(),
    })?;
    Ok(Some(Renderable::code(vfs::read_file(node, path)?)))
}

fn tree(cmd: &ParsedCommand, ctx: &TerminalContext) -> CommandResult {
    let node = ctx.vfs.resolve(cmd.arg(0).unwrap_or(""))?;
    Ok(Some(Renderable::Tree { root: node.to_tree() }))
}
