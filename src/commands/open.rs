use log::info;

use crate::command::{Command, CommandResult};
use crate::path;
use crate::session::{Action, Session};

/// Also registered as `xdg-open`. Only files carrying a URL can be opened;
/// the front end does the actual opening.
pub struct OpenCommand;

impl Command for OpenCommand {
    fn execute(&self, args: &[String], ctx: &mut Session) -> CommandResult {
        let target = match args.first() {
            Some(t) => t,
            None => return Err("open: missing operand".to_string()),
        };
        let file = path::resolve(target, ctx.cwd());

        let url = match ctx.vfs.file_url(&file) {
            Ok(Some(url)) => url.to_string(),
            Ok(None) => return Err(format!("open: {}: No URL associated with this file", target)),
            Err(e) => return Err(format!("open: {}: {}", target, e)),
        };
        info!("open {} -> {}", file, url);
        ctx.request(Action::OpenUrl(url));
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixture::{args, session};

    #[test]
    fn test_open_queues_url() {
        let mut ctx = session();
        assert_eq!(OpenCommand.execute(&args(&["test.txt"]), &mut ctx), Ok(String::new()));
        assert_eq!(
            ctx.take_actions(),
            vec![Action::OpenUrl("https://example.com/test".to_string())]
        );
    }

    #[test]
    fn test_open_follows_symlink() {
        let mut ctx = session();
        assert_eq!(ctx.execute("xdg-open /cv.pdf"), "");
        assert_eq!(
            ctx.take_actions(),
            vec![Action::OpenUrl("https://example.com/test".to_string())]
        );
    }

    #[test]
    fn test_open_errors_queue_nothing() {
        let mut ctx = session();
        assert_eq!(ctx.execute("open"), "open: missing operand");
        assert_eq!(ctx.execute("open nope"), "open: nope: No such file or directory");
        assert_eq!(ctx.execute("open home"), "open: home: Is a directory");
        assert_eq!(
            ctx.execute("open about/bio.txt"),
            "open: about/bio.txt: No URL associated with this file"
        );
        assert!(ctx.take_actions().is_empty());
    }
}
