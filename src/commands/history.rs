use crate::command::{Command, CommandResult};
use crate::session::Session;

pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn execute(&self, _args: &[String], ctx: &mut Session) -> CommandResult {
        if ctx.history().is_empty() {
            return Ok("No command history".to_string());
        }
        let lines: Vec<String> = ctx
            .history()
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{}  {}", i + 1, line))
            .collect();
        Ok(lines.join("\n"))
    }
}
