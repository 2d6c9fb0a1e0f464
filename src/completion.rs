// tab completion: first match wins, no cycling, no listing

use crate::command::CommandRegistry;
use crate::path;
use crate::session::Session;
use crate::vfs::VirtualFileSystem;

/// Commands whose arguments complete against the filesystem.
pub const PATH_COMMANDS: [&str; 7] = ["cat", "less", "cd", "ls", "grep", "open", "xdg-open"];

/// Completed buffer, or `None` when nothing matches.
pub fn complete(
    buffer: &str,
    cwd: &str,
    vfs: &VirtualFileSystem,
    registry: &CommandRegistry,
) -> Option<String> {
    let tokens: Vec<&str> = buffer.split_whitespace().collect();

    match tokens.as_slice() {
        [] => registry.get_command_names().into_iter().next(),
        [partial] if !buffer.ends_with(char::is_whitespace) => {
            let partial = partial.to_lowercase();
            registry
                .get_command_names()
                .into_iter()
                .find(|name| name.starts_with(&partial))
        }
        [cmd, ..] if PATH_COMMANDS.contains(&cmd.to_lowercase().as_str()) => {
            // trailing space means a fresh, empty argument
            let last = if buffer.ends_with(char::is_whitespace) {
                ""
            } else {
                tokens[tokens.len() - 1]
            };
            let (dir_part, prefix) = match last.rfind('/') {
                Some(i) => (&last[..=i], &last[i + 1..]),
                None => ("", last),
            };
            // "../" has to reach resolve as ".."
            let dir = if dir_part.len() > 1 {
                path::resolve(dir_part.trim_end_matches('/'), cwd)
            } else {
                path::resolve(dir_part, cwd)
            };
            let candidate = vfs
                .list_dir(&dir)
                .ok()?
                .into_iter()
                .find(|name| name.starts_with(prefix))?;

            let head = &buffer[..buffer.len() - last.len()];
            Some(format!("{}{}{}", head, dir_part, candidate))
        }
        _ => None,
    }
}

impl Session {
    /// Apply tab completion to the line buffer. Returns whether it changed.
    pub fn complete(&mut self) -> bool {
        let completed = match complete(&self.buffer, &self.cwd, &self.vfs, self.registry()) {
            Some(c) if c != self.buffer => c,
            _ => return false,
        };
        self.cursor = completed.chars().count();
        self.buffer = completed;
        true
    }
}
