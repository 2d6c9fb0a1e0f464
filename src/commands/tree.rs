use crate::command::{Command, CommandResult};
use crate::format::render_tree;
use crate::session::Session;

/// Always draws from `/`, arguments are ignored.
pub struct TreeCommand;

impl Command for TreeCommand {
    fn execute(&self, _args: &[String], ctx: &mut Session) -> CommandResult {
        let mut out = render_tree(&ctx.vfs, "/");
        out.pop();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixture::session;

    #[test]
    fn test_tree_from_root() {
        let mut ctx = session();
        let expected = "\
├── home/
│   └── user/
│       └── doc.txt
├── about/
│   └── bio.txt
├── test.txt
└── cv.pdf";
        assert_eq!(TreeCommand.execute(&[], &mut ctx), Ok(expected.to_string()));
    }

    #[test]
    fn test_tree_ignores_cwd() {
        let mut ctx = session();
        let from_root = TreeCommand.execute(&[], &mut ctx);
        ctx.execute("cd home/user");
        assert_eq!(TreeCommand.execute(&[], &mut ctx), from_root);
    }
}
