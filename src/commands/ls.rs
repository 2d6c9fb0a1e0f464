use crate::command::{Command, CommandResult};
use crate::path;
use crate::session::Session;
use crate::vfs::VfsError;

pub struct LsCommand;

impl Command for LsCommand {
    fn execute(&self, args: &[String], ctx: &mut Session) -> CommandResult {
        let target = args.first().map(String::as_str).unwrap_or("");
        let dir = path::resolve(target, ctx.cwd());

        match ctx.vfs.list_dir(&dir) {
            Ok(names) => Ok(names.join("\n")),
            Err(VfsError::NotFound) => Err(format!("ls: {}: No such file or directory", target)),
            Err(_) => Err(format!("ls: {}: is a regular file", target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixture::{args, session};

    #[test]
    fn test_ls_root_marks_directories() {
        let mut ctx = session();
        ctx.vfs.add_dir("/", &["home", "about", "test.txt"]);
        let result = LsCommand.execute(&[], &mut ctx);
        assert_eq!(result, Ok("home/\nabout/\ntest.txt".to_string()));
    }

    #[test]
    fn test_ls_relative_path() {
        let mut ctx = session();
        ctx.execute("cd home");
        assert_eq!(LsCommand.execute(&args(&["user"]), &mut ctx), Ok("doc.txt".to_string()));
        assert_eq!(LsCommand.execute(&args(&[".."]), &mut ctx).unwrap().lines().count(), 4);
    }

    #[test]
    fn test_ls_on_file() {
        let mut ctx = session();
        assert_eq!(
            LsCommand.execute(&args(&["test.txt"]), &mut ctx),
            Err("ls: test.txt: is a regular file".to_string())
        );
    }

    #[test]
    fn test_ls_missing() {
        let mut ctx = session();
        assert_eq!(
            LsCommand.execute(&args(&["nope"]), &mut ctx),
            Err("ls: nope: No such file or directory".to_string())
        );
    }
}
