// line-based front end for trying the shell outside the browser
// usage: cv-terminal [config.json]

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use cv_terminal::command::command_name;
    use cv_terminal::{Action, InputMode, Session, TerminalConfig};
    use log::{info, warn};
    use std::io::{self, BufRead, Write};

    env_logger::init();

    let mut config = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| TerminalConfig::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(cfg) => {
                info!("loaded config from {}", path);
                cfg
            }
            Err(e) => {
                warn!("{}: {}, using defaults", path, e);
                TerminalConfig::default()
            }
        },
        None => TerminalConfig::default(),
    };
    // no repaint loop on a line terminal
    config.live_monitor = false;

    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", session.banner());
    loop {
        if session.mode() == InputMode::Normal {
            print!("\n{}", session.prompt());
        }
        if stdout.flush().is_err() {
            break;
        }

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = input.trim_end_matches(['\r', '\n']);

        // only a dispatched `exit` ends the loop, not a password that spells it
        let quits = session.mode() == InputMode::Normal
            && command_name(line).as_deref() == Some("exit");
        let output = session.execute(line);

        for action in session.take_actions() {
            match action {
                Action::ClearScreen => print!("\x1b[2J\x1b[H"),
                Action::OpenUrl(url) => println!("Opening {}", url),
            }
        }

        // the sudo prompt keeps the cursor on its own line
        if session.mode() == InputMode::PasswordMasked {
            print!("{}", output);
        } else if !output.is_empty() {
            println!("{}", output);
        }

        if quits {
            break;
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
