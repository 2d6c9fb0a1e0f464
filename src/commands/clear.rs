use crate::command::{Command, CommandResult};
use crate::session::{Action, Session};

pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(&self, _args: &[String], ctx: &mut Session) -> CommandResult {
        ctx.request(Action::ClearScreen);
        Ok(String::new())
    }
}
