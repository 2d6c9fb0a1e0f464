use crate::command::{Command, CommandResult};
use crate::session::{InputMode, Session};

/// Also registered as `btop`. Enters the live view when the front end can
/// repaint, prints a single snapshot otherwise.
pub struct HtopCommand;

impl Command for HtopCommand {
    fn execute(&self, _args: &[String], ctx: &mut Session) -> CommandResult {
        if !ctx.config().live_monitor {
            return Ok(ctx.processes.snapshot());
        }
        ctx.set_mode(InputMode::ProcessLive);
        Ok(ctx.live_frame())
    }
}
