use crate::command::{Command, CommandResult};
use crate::session::Session;

pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(&self, _args: &[String], ctx: &mut Session) -> CommandResult {
        Ok(ctx.cwd().to_string())
    }
}
