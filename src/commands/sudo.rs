use crate::command::{Command, CommandResult};
use crate::session::{InputMode, Session};

/// Asks for a password that is never accepted. The denial is printed by the
/// input handler once the masked line is submitted.
pub struct SudoCommand;

impl Command for SudoCommand {
    fn execute(&self, _args: &[String], ctx: &mut Session) -> CommandResult {
        ctx.set_mode(InputMode::PasswordMasked);
        Ok(format!("[sudo] password for {}: ", ctx.system.username))
    }
}
