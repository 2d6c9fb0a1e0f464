use crate::session::Session;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

/// Both arms are user-facing text, `Err` only marks the line as failed.
pub type CommandResult = Result<String, String>;

pub trait Command {
    fn execute(&self, args: &[String], ctx: &mut Session) -> CommandResult;
}

pub type Handler = Arc<dyn Command + Send + Sync>;

pub struct CommandEntry {
    pub name: String,
    pub description: String,
    pub handler: Handler,
}

/// Name -> handler table. Registration order is kept, it is what `help`
/// prints and what tab completion tries first.
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
    index: HashMap<String, usize>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::default_commands()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { entries: Vec::new(), index: HashMap::new() }
    }

    pub fn register_command(&mut self, name: &str, description: &str, handler: Handler) {
        let name = name.to_lowercase();
        let entry = CommandEntry {
            name: name.clone(),
            description: description.to_string(),
            handler,
        };
        match self.index.get(&name) {
            Some(&i) => self.entries[i] = entry,
            None => {
                self.index.insert(name, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Register `alias` against the handler already bound to `target`.
    pub fn register_alias(&mut self, alias: &str, target: &str, description: &str) {
        if let Some(handler) = self.get(target).map(|e| Arc::clone(&e.handler)) {
            self.register_command(alias, description, handler);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn get_command_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn default_commands() -> Self {
        use crate::commands::*;

        let mut reg = Self::new();
        reg.register_command("help", "Show available commands", Arc::new(help::HelpCommand));
        reg.register_command("ls", "List directory contents", Arc::new(ls::LsCommand));
        reg.register_command("cd", "Change directory", Arc::new(cd::CdCommand));
        reg.register_command("pwd", "Print working directory", Arc::new(pwd::PwdCommand));
        reg.register_command("cat", "Display file contents", Arc::new(cat::CatCommand));
        reg.register_alias("less", "cat", "Display file contents (pageable)");
        reg.register_command("tree", "Show file system tree", Arc::new(tree::TreeCommand));
        reg.register_command("grep", "Search file contents", Arc::new(grep::GrepCommand));
        reg.register_command("whoami", "Display brief bio", Arc::new(whoami::WhoamiCommand));
        reg.register_command("open", "Open file (PDF, etc) in browser", Arc::new(open::OpenCommand));
        reg.register_alias("xdg-open", "open", "Open file (alias to open)");
        reg.register_command("history", "Show command history", Arc::new(history::HistoryCommand));
        reg.register_command(
            "hostnamectl",
            "Show system hostname info",
            Arc::new(hostnamectl::HostnamectlCommand),
        );
        reg.register_command("uname", "Show system information", Arc::new(uname::UnameCommand));
        reg.register_command(
            "neofetch",
            "Show system info with ASCII art",
            Arc::new(neofetch::NeofetchCommand),
        );
        reg.register_command("htop", "Simulated process monitor", Arc::new(htop::HtopCommand));
        reg.register_alias("btop", "htop", "Simulated process monitor (alias to htop)");
        reg.register_command("sudo", "Run a command as root", Arc::new(sudo::SudoCommand));
        reg.register_command("clear", "Clear terminal", Arc::new(clear::ClearCommand));
        reg.register_command("exit", "Exit terminal", Arc::new(exit::ExitCommand));
        reg
    }
}

/// Lowercased command token of a submitted line, `None` for blank lines.
pub fn command_name(input: &str) -> Option<String> {
    input.split_whitespace().next().map(str::to_lowercase)
}

/// Parse one submitted line and dispatch it. Blank lines are a silent no-op
/// and are not recorded.
pub fn run_command(input: &str, ctx: &mut Session, registry: &CommandRegistry) -> CommandResult {
    let input = input.trim();
    if input.is_empty() {
        return Ok(String::new());
    }
    ctx.record_history(input);

    let mut parts = input.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => return Ok(String::new()),
    };
    let args: Vec<String> = parts.map(|s| s.to_string()).collect();

    match command_name(cmd).and_then(|name| registry.get(&name)) {
        Some(entry) => {
            debug!("dispatch {} {:?}", entry.name, args);
            entry.handler.execute(&args, ctx)
        }
        None => Err(format!("{}: command not found", cmd)),
    }
}
