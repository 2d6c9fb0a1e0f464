use crate::command::{Command, CommandResult};
use crate::path;
use crate::session::Session;
use crate::vfs::VfsNode;

pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut Session) -> CommandResult {
        // bare `cd` stays put
        let target = match args.first() {
            Some(t) => t,
            None => return Ok(String::new()),
        };
        let wanted = path::resolve(target, ctx.cwd());

        let next = match ctx.vfs.follow(&wanted) {
            Some((dir, VfsNode::Directory { .. })) => dir.to_string(),
            Some(_) => return Err(format!("cd: {}: Not a directory", target)),
            None => return Err(format!("cd: {}: No such file or directory", target)),
        };
        ctx.set_cwd(next);
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixture::{args, session};

    #[test]
    fn test_cd_relative_and_back() {
        let mut ctx = session();
        assert_eq!(CdCommand.execute(&args(&["home/user"]), &mut ctx), Ok(String::new()));
        assert_eq!(ctx.cwd(), "/home/user");
        CdCommand.execute(&args(&[".."]), &mut ctx).unwrap();
        assert_eq!(ctx.cwd(), "/home");
        CdCommand.execute(&args(&["/about"]), &mut ctx).unwrap();
        assert_eq!(ctx.cwd(), "/about");
    }

    #[test]
    fn test_cd_no_args_is_noop() {
        let mut ctx = session();
        ctx.execute("cd home");
        assert_eq!(CdCommand.execute(&[], &mut ctx), Ok(String::new()));
        assert_eq!(ctx.cwd(), "/home");
    }

    #[test]
    fn test_cd_nonexistent_keeps_cwd() {
        let mut ctx = session();
        assert_eq!(
            CdCommand.execute(&args(&["nonexistent"]), &mut ctx),
            Err("cd: nonexistent: No such file or directory".to_string())
        );
        assert_eq!(ctx.cwd(), "/");
    }

    #[test]
    fn test_cd_into_file() {
        let mut ctx = session();
        assert_eq!(
            CdCommand.execute(&args(&["test.txt"]), &mut ctx),
            Err("cd: test.txt: Not a directory".to_string())
        );
        assert_eq!(ctx.cwd(), "/");
    }

    #[test]
    fn test_cd_through_symlink_commits_target() {
        let mut ctx = session();
        ctx.vfs.add_symlink("/me", "/about");
        CdCommand.execute(&args(&["me"]), &mut ctx).unwrap();
        assert_eq!(ctx.cwd(), "/about");
    }
}
