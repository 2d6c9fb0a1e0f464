use crate::command::{Command, CommandResult};
use crate::session::Session;

/// Lists every registered command in registration order.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, _args: &[String], ctx: &mut Session) -> CommandResult {
        let entries = ctx.registry().entries();
        let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);

        let mut out = String::from("Available commands:\n");
        for entry in entries {
            out.push_str(&format!("\n{:<width$}  - {}", entry.name, entry.description, width = width));
        }
        Ok(out)
    }
}
