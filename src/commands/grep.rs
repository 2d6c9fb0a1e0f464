use regex::RegexBuilder;

use crate::command::{Command, CommandResult};
use crate::path;
use crate::session::Session;

/// grep PATTERN FILE
/// Case-insensitive regex match, one file, matching lines only.
pub struct GrepCommand;

impl Command for GrepCommand {
    fn execute(&self, args: &[String], ctx: &mut Session) -> CommandResult {
        let (pattern, target) = match args {
            [pattern, target, ..] => (pattern, target),
            _ => return Err("grep: usage: grep pattern file".to_string()),
        };

        let file = path::resolve(target, ctx.cwd());
        let content = ctx
            .vfs
            .read_file(&file)
            .map_err(|e| format!("grep: {}: {}", target, e))?;

        let re = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|_| format!("grep: {}: invalid pattern", pattern))?;

        let hits: Vec<&str> = content.lines().filter(|line| re.is_match(line)).collect();
        Ok(hits.join("\n"))
    }
}
