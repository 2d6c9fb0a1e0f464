use crate::command::{Command, CommandResult};
use crate::content::WHOAMI;
use crate::session::Session;

pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn execute(&self, _args: &[String], _ctx: &mut Session) -> CommandResult {
        Ok(WHOAMI.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixture::session;

    #[test]
    fn test_whoami_is_not_file_backed() {
        let mut ctx = session();
        let out = WhoamiCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(out, WHOAMI);
        assert_eq!(out.lines().count(), 1);
    }
}
