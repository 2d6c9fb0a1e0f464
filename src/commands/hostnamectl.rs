use crate::command::{Command, CommandResult};
use crate::session::Session;

pub struct HostnamectlCommand;

impl Command for HostnamectlCommand {
    fn execute(&self, _args: &[String], ctx: &mut Session) -> CommandResult {
        Ok(ctx.hostnamectl())
    }
}
