use crate::command::{Command, CommandResult};
use crate::session::Session;

/// Nothing to terminate, the front end decides what a farewell means.
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _args: &[String], _ctx: &mut Session) -> CommandResult {
        Ok("Goodbye!".to_string())
    }
}
