use crate::command::{Command, CommandResult};
use crate::session::Session;

/// Prefetched capture when available, synthesized report otherwise.
pub struct NeofetchCommand;

impl Command for NeofetchCommand {
    fn execute(&self, _args: &[String], ctx: &mut Session) -> CommandResult {
        Ok(ctx.system.fetch())
    }
}
