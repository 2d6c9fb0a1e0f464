// resume rendered as a fake shell
// the interpreter is plain rust, `web` glues it to xterm.js in the browser
pub mod command;
pub mod commands;
pub mod completion;
pub mod config;
pub mod content;
pub mod format;
pub mod input;
pub mod logging;
pub mod path;
pub mod process;
pub mod session;
pub mod system;
pub mod vfs;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use command::{Command, CommandRegistry, CommandResult};
pub use config::{ConfigError, TerminalConfig};
pub use input::{Key, KeyOutcome};
pub use session::{Action, InputMode, Session};
pub use vfs::{VfsError, VfsNode, VirtualFileSystem};

#[cfg(test)]
mod tests {
    use super::*;

    // walk through a visitor's typical first minute
    #[test]
    fn test_first_visit() {
        let mut s = Session::new(TerminalConfig { seed: Some(1), ..TerminalConfig::default() });
        assert!(s.execute("help").starts_with("Available commands:"));
        assert!(s.execute("ls").contains("experience/"));
        assert_eq!(s.execute("cd experience"), "");
        assert_eq!(s.cwd(), "/experience");
        assert!(s.execute("cat highlights").contains("Virtualization"));
        assert_eq!(s.execute("cd .."), "");
        assert!(s.execute("grep veeam experience/full").lines().count() >= 1);
        assert_eq!(s.execute("open cv.pdf"), "");
        assert_eq!(
            s.take_actions(),
            vec![Action::OpenUrl("/assets/cv_SRichter2026.pdf".to_string())]
        );
        assert_eq!(s.execute("history").lines().count(), 8);
    }

    #[test]
    fn test_keys_drive_a_whole_line() {
        let mut s = Session::new(TerminalConfig { seed: Some(2), ..TerminalConfig::default() });
        let mut outputs = Vec::new();
        for key in Key::parse("whoam\t\r") {
            if let KeyOutcome::Output(out) = s.handle_key(key) {
                outputs.push(out);
            }
        }
        assert_eq!(outputs, vec![content::WHOAMI.to_string()]);
    }
}
