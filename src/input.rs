// keystroke handling for key-driven front ends
// arrows, tab and history only apply in normal mode

use log::debug;

use crate::session::{InputMode, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Left,
    Right,
    Up,
    Down,
    Tab,
    /// Ctrl-C
    Interrupt,
    Other,
}

impl Key {
    /// Decode a chunk of terminal input, e.g. what xterm.js hands to
    /// `onData`. A paste arrives as many keys at once.
    pub fn parse(data: &str) -> Vec<Key> {
        let mut keys = Vec::new();
        let mut chars = data.chars().peekable();
        while let Some(c) = chars.next() {
            let key = match c {
                '\x1b' => {
                    match chars.peek() {
                        Some(&'[') => {
                            chars.next();
                        }
                        // application cursor mode: ESC O A..D
                        Some(&'O') => {
                            chars.next();
                            keys.push(match chars.next() {
                                Some('A') => Key::Up,
                                Some('B') => Key::Down,
                                Some('C') => Key::Right,
                                Some('D') => Key::Left,
                                _ => Key::Other,
                            });
                            continue;
                        }
                        _ => {
                            keys.push(Key::Other);
                            continue;
                        }
                    }
                    let mut params = false;
                    while let Some(&p) = chars.peek() {
                        if p.is_ascii_digit() || p == ';' {
                            params = true;
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    match (params, chars.next()) {
                        (false, Some('A')) => Key::Up,
                        (false, Some('B')) => Key::Down,
                        (false, Some('C')) => Key::Right,
                        (false, Some('D')) => Key::Left,
                        _ => Key::Other,
                    }
                }
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    Key::Enter
                }
                '\n' => Key::Enter,
                '\x7f' | '\x08' => Key::Backspace,
                '\t' => Key::Tab,
                '\x03' => Key::Interrupt,
                c if !c.is_control() => Key::Char(c),
                _ => Key::Other,
            };
            keys.push(key);
        }
        keys
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// buffer or cursor moved, repaint the input line
    Redraw,
    /// a line was submitted or a mode was left, show this (possibly empty)
    Output(String),
    Ignored,
}

impl Session {
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        debug!("key {:?} in {:?}", key, self.mode);
        match self.mode {
            InputMode::Normal => self.normal_key(key),
            InputMode::PasswordMasked => self.password_key(key),
            InputMode::ProcessLive => self.live_key(key),
        }
    }

    /// What to echo while a password is typed.
    pub fn masked_input(&self) -> String {
        "*".repeat(self.password.chars().count())
    }

    fn normal_key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.buffer.insert(at, c);
                self.cursor += 1;
                KeyOutcome::Redraw
            }
            Key::Backspace => {
                if self.cursor == 0 {
                    return KeyOutcome::Ignored;
                }
                let at = self.byte_offset(self.cursor - 1);
                self.buffer.remove(at);
                self.cursor -= 1;
                KeyOutcome::Redraw
            }
            Key::Left => {
                if self.cursor == 0 {
                    return KeyOutcome::Ignored;
                }
                self.cursor -= 1;
                KeyOutcome::Redraw
            }
            Key::Right => {
                if self.cursor >= self.buffer.chars().count() {
                    return KeyOutcome::Ignored;
                }
                self.cursor += 1;
                KeyOutcome::Redraw
            }
            Key::Up => self.history_up(),
            Key::Down => self.history_down(),
            Key::Tab => {
                if self.complete() {
                    KeyOutcome::Redraw
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Enter => {
                let line = std::mem::take(&mut self.buffer);
                self.cursor = 0;
                self.history_index = None;
                KeyOutcome::Output(self.execute(&line))
            }
            Key::Interrupt => {
                self.buffer.clear();
                self.cursor = 0;
                self.history_index = None;
                KeyOutcome::Output("^C".to_string())
            }
            Key::Other => KeyOutcome::Ignored,
        }
    }

    fn password_key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Char(c) => {
                self.password.push(c);
                KeyOutcome::Redraw
            }
            Key::Backspace => {
                if self.password.pop().is_some() {
                    KeyOutcome::Redraw
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Enter => KeyOutcome::Output(self.reject_password()),
            Key::Interrupt => {
                self.leave_mode();
                KeyOutcome::Output(String::new())
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn live_key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Char('q') | Key::Char('Q') | Key::Interrupt => {
                self.leave_mode();
                KeyOutcome::Output(String::new())
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn history_up(&mut self) -> KeyOutcome {
        let next = self.history_index.map_or(0, |i| i + 1);
        if next >= self.history.len() {
            return KeyOutcome::Ignored;
        }
        self.history_index = Some(next);
        self.load_history_entry(next);
        KeyOutcome::Redraw
    }

    fn history_down(&mut self) -> KeyOutcome {
        match self.history_index {
            None => KeyOutcome::Ignored,
            Some(0) => {
                self.history_index = None;
                self.buffer.clear();
                self.cursor = 0;
                KeyOutcome::Redraw
            }
            Some(i) => {
                self.history_index = Some(i - 1);
                self.load_history_entry(i - 1);
                KeyOutcome::Redraw
            }
        }
    }

    // index 0 is the newest line
    fn load_history_entry(&mut self, index: usize) {
        let entry = self.history[self.history.len() - 1 - index].clone();
        self.cursor = entry.chars().count();
        self.buffer = entry;
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }
}
