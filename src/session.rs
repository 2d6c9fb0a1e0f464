use log::info;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use std::sync::Arc;

use crate::command::{self, CommandRegistry, CommandResult};
use crate::config::TerminalConfig;
use crate::content;
use crate::process::ProcessTable;
use crate::system::{SystemInfo, ORANGE, RESET, TEAL};
use crate::vfs::VirtualFileSystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// typed characters go to a hidden buffer, one line only
    PasswordMasked,
    /// line editing suspended, the monitor repaints until quit
    ProcessLive,
}

/// Effects a command asks the front end to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ClearScreen,
    OpenUrl(String),
}

/// Everything that changes while someone is typing at the terminal.
pub struct Session {
    pub vfs: VirtualFileSystem,
    pub system: SystemInfo,
    pub processes: ProcessTable,
    pub(crate) cwd: String,
    pub(crate) history: Vec<String>,
    // None = not browsing history, Some(0) = newest entry
    pub(crate) history_index: Option<usize>,
    pub(crate) buffer: String,
    // insertion point, counted in chars
    pub(crate) cursor: usize,
    pub(crate) mode: InputMode,
    pub(crate) password: String,
    rng: Box<dyn RngCore>,
    registry: Arc<CommandRegistry>,
    config: TerminalConfig,
    actions: Vec<Action>,
}

impl Session {
    pub fn new(config: TerminalConfig) -> Self {
        let rng: Box<dyn RngCore> = match config.seed {
            Some(seed) => Box::new(SmallRng::seed_from_u64(seed)),
            None => Box::new(SmallRng::from_entropy()),
        };
        Self::with_parts(content::build_filesystem(), config, rng)
    }

    pub fn new_with_vfs(vfs: VirtualFileSystem) -> Self {
        let config = TerminalConfig::default();
        let rng: Box<dyn RngCore> = Box::new(SmallRng::from_entropy());
        Self::with_parts(vfs, config, rng)
    }

    /// Full control over the pieces, used to inject a deterministic generator.
    pub fn with_parts(vfs: VirtualFileSystem, config: TerminalConfig, mut rng: Box<dyn RngCore>) -> Self {
        let system = SystemInfo::new(&config, rng.as_mut());
        let processes = ProcessTable::new(&config.username, rng.as_mut());
        Self {
            vfs,
            system,
            processes,
            cwd: "/".to_string(),
            history: Vec::new(),
            history_index: None,
            buffer: String::new(),
            cursor: 0,
            mode: InputMode::Normal,
            password: String::new(),
            rng,
            registry: Arc::new(CommandRegistry::default_commands()),
            config,
            actions: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self::with_parts(
            content::build_filesystem(),
            TerminalConfig::default(),
            Box::new(SmallRng::seed_from_u64(0)),
        )
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_index(&self) -> Option<usize> {
        self.history_index
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Submit one line and keep the success flag. Outside normal mode the
    /// line is not a command: it is the sudo password, or a quit request for
    /// the live monitor.
    pub fn run(&mut self, line: &str) -> CommandResult {
        match self.mode {
            InputMode::Normal => {
                let registry = Arc::clone(&self.registry);
                command::run_command(line, self, &registry)
            }
            InputMode::PasswordMasked => {
                self.password = line.to_string();
                Err(self.reject_password())
            }
            InputMode::ProcessLive => {
                if line.trim().eq_ignore_ascii_case("q") {
                    self.leave_mode();
                }
                Ok(String::new())
            }
        }
    }

    /// Run one line. Failures come back as text like everything else.
    pub fn execute(&mut self, line: &str) -> String {
        self.run(line).unwrap_or_else(|e| e)
    }

    pub(crate) fn record_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    pub(crate) fn set_cwd(&mut self, dir: String) {
        self.cwd = dir;
    }

    pub(crate) fn set_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            info!("input mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    // any password is wrong
    pub(crate) fn reject_password(&mut self) -> String {
        self.password.clear();
        self.set_mode(InputMode::Normal);
        format!(
            "{} is not in the sudoers file. This incident will be reported.",
            self.system.username
        )
    }

    pub(crate) fn leave_mode(&mut self) {
        self.password.clear();
        self.set_mode(InputMode::Normal);
    }

    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Drain the side effects queued since the last call.
    pub fn take_actions(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.actions)
    }

    pub fn hostnamectl(&mut self) -> String {
        self.system.hostnamectl(self.rng.as_mut())
    }

    /// Current monitor frame with the quit hint.
    pub fn live_frame(&mut self) -> String {
        format!("{}\n\nPress q to quit", self.processes.snapshot())
    }

    /// Advance the simulated processes one step. Only produces a frame while
    /// the live view is active.
    pub fn tick_monitor(&mut self) -> Option<String> {
        if self.mode != InputMode::ProcessLive {
            return None;
        }
        self.processes.tick(self.rng.as_mut());
        Some(self.live_frame())
    }

    pub fn set_raw_system_info(&mut self, blob: &str) {
        self.system.set_raw_fetch(blob);
        info!("raw system info loaded ({} bytes)", blob.len());
    }

    pub fn prompt(&self) -> String {
        format!(
            "{o}{user}{r}@{o}{host}{r}:{t}~{path}{r}$ ",
            o = ORANGE,
            t = TEAL,
            r = RESET,
            user = self.system.username,
            host = self.system.hostname,
            path = self.cwd,
        )
    }

    pub fn banner(&self) -> String {
        format!(
            "{t}┌─────────────────────────────┐{r}\n\
             {t}│{r}  Welcome to Terminal CV     {t}│{r}\n\
             {t}│{r}  Type \"help\" for commands   {t}│{r}\n\
             {t}└─────────────────────────────┘{r}\n\n{summary}\n",
            t = TEAL,
            r = RESET,
            summary = self.system.summary(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_root_in_normal_mode() {
        let s = Session::for_tests();
        assert_eq!(s.cwd(), "/");
        assert_eq!(s.mode(), InputMode::Normal);
        assert_eq!(s.history_index(), None);
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_execute_flattens_errors() {
        let mut s = Session::for_tests();
        assert_eq!(s.execute("nope"), "nope: command not found");
        assert!(s.run("nope").is_err());
        assert_eq!(s.execute("pwd"), "/");
    }

    #[test]
    fn test_whitespace_only_line() {
        let mut s = Session::for_tests();
        assert_eq!(s.execute("   "), "");
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_tick_only_while_live() {
        let mut s = Session::for_tests();
        assert_eq!(s.tick_monitor(), None);
        s.set_mode(InputMode::ProcessLive);
        let frame = s.tick_monitor().unwrap();
        assert!(frame.starts_with("Tasks: 15 total"));
        assert!(frame.ends_with("Press q to quit"));
    }

    #[test]
    fn test_prompt_shows_cwd() {
        let mut s = Session::for_tests();
        s.execute("cd about");
        let prompt = s.prompt();
        assert!(prompt.contains("srgls"));
        assert!(prompt.contains("~/about"));
        assert!(prompt.ends_with("$ "));
    }

    #[test]
    fn test_banner_includes_summary() {
        let s = Session::for_tests();
        let banner = s.banner();
        assert!(banner.contains("Welcome to Terminal CV"));
        assert!(banner.contains("srgls@blog"));
    }

    #[test]
    fn test_submitted_password_is_rejected_and_not_recorded() {
        let mut s = Session::for_tests();
        s.execute("sudo");
        assert_eq!(
            s.run("hunter2"),
            Err("srgls is not in the sudoers file. This incident will be reported.".to_string())
        );
        assert_eq!(s.mode(), InputMode::Normal);
        assert_eq!(s.history(), &["sudo".to_string()]);
        // back to normal, the next line is a command again
        assert_eq!(s.execute("pwd"), "/");
    }

    #[test]
    fn test_live_monitor_quits_on_submitted_q() {
        let mut s = Session::for_tests();
        assert!(s.execute("htop").ends_with("Press q to quit"));
        assert_eq!(s.execute("ls"), "");
        assert_eq!(s.mode(), InputMode::ProcessLive);
        assert_eq!(s.execute(" Q "), "");
        assert_eq!(s.mode(), InputMode::Normal);
        assert_eq!(s.history(), &["htop".to_string()]);
    }

    #[test]
    fn test_take_actions_drains() {
        let mut s = Session::for_tests();
        s.execute("clear");
        assert_eq!(s.take_actions(), vec![Action::ClearScreen]);
        assert!(s.take_actions().is_empty());
    }
}
