use crate::command::{Command, CommandResult};
use crate::path;
use crate::session::Session;

/// Also registered as `less`, there is no pager.
pub struct CatCommand;

impl Command for CatCommand {
    fn execute(&self, args: &[String], ctx: &mut Session) -> CommandResult {
        let target = match args.first() {
            Some(t) => t,
            None => return Err("cat: missing operand".to_string()),
        };
        let file = path::resolve(target, ctx.cwd());

        ctx.vfs
            .read_file(&file)
            .map(str::to_string)
            .map_err(|e| format!("cat: {}: {}", target, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixture::{args, session};

    #[test]
    fn test_cat_file() {
        let mut ctx = session();
        assert_eq!(
            CatCommand.execute(&args(&["about/bio.txt"]), &mut ctx),
            Ok("Bio content here".to_string())
        );
    }

    #[test]
    fn test_cat_missing_operand() {
        let mut ctx = session();
        assert_eq!(ctx.execute("cat"), "cat: missing operand");
    }

    #[test]
    fn test_cat_directory() {
        let mut ctx = session();
        assert_eq!(
            CatCommand.execute(&args(&["home"]), &mut ctx),
            Err("cat: home: Is a directory".to_string())
        );
    }

    #[test]
    fn test_cat_nonexistent() {
        let mut ctx = session();
        assert_eq!(
            CatCommand.execute(&args(&["nope.txt"]), &mut ctx),
            Err("cat: nope.txt: No such file or directory".to_string())
        );
    }

    #[test]
    fn test_cat_follows_symlink() {
        let mut ctx = session();
        assert_eq!(
            CatCommand.execute(&args(&["/cv.pdf"]), &mut ctx),
            Ok("Root file content".to_string())
        );
    }

    #[test]
    fn test_less_is_cat() {
        let mut ctx = session();
        assert_eq!(ctx.execute("less test.txt"), ctx.execute("cat test.txt"));
    }
}
