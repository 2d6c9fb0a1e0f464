use crate::command::{Command, CommandResult};
use crate::session::Session;

pub struct UnameCommand;

impl Command for UnameCommand {
    fn execute(&self, _args: &[String], ctx: &mut Session) -> CommandResult {
        Ok(ctx.system.uname())
    }
}
