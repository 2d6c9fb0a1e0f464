// browser adapter: owns the session, performs the actions it queues,
// drives the live monitor timer and the neofetch prefetch

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{info, warn, LevelFilter};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::input::{Key, KeyOutcome};
use crate::logging;
use crate::session::{Action, InputMode, Session};
use crate::TerminalConfig;

/// Result of `execute_command`, handed to js as a plain object.
#[derive(Serialize)]
pub struct CommandResponse {
    pub success: bool,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Result of `handle_input`: what to print and how to repaint the line.
#[derive(Serialize)]
pub struct InputResponse {
    pub outputs: Vec<String>,
    pub redraw: bool,
    pub buffer: String,
    pub cursor: usize,
    pub mode: &'static str,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[wasm_bindgen]
pub struct Terminal {
    session: Rc<RefCell<Session>>,
    frame_callback: Option<js_sys::Function>,
    // dropping the interval cancels it
    monitor: Option<Interval>,
}

#[wasm_bindgen]
impl Terminal {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Terminal {
        Self::from_config(TerminalConfig::default())
    }

    /// Build from a JSON config, see `TerminalConfig` for the fields.
    pub fn with_config(json: &str) -> Result<Terminal, JsValue> {
        let config = TerminalConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_config(config))
    }

    pub fn execute_command(&mut self, input: &str) -> JsValue {
        let result = self.session.borrow_mut().run(input);
        let (special_action, url) = self.perform_actions();
        self.sync_monitor();

        let response = match result {
            Ok(output) => CommandResponse { success: true, output, special_action, url },
            Err(output) => CommandResponse { success: false, output, special_action, url },
        };
        serde_wasm_bindgen::to_value(&response).unwrap_or(JsValue::NULL)
    }

    /// Feed raw terminal data (xterm `onData`).
    pub fn handle_input(&mut self, data: &str) -> JsValue {
        let mut outputs = Vec::new();
        let mut redraw = false;
        for key in Key::parse(data) {
            match self.session.borrow_mut().handle_key(key) {
                KeyOutcome::Output(out) => outputs.push(out),
                KeyOutcome::Redraw => redraw = true,
                KeyOutcome::Ignored => {}
            }
        }
        let (special_action, url) = self.perform_actions();
        self.sync_monitor();

        let session = self.session.borrow();
        let (buffer, cursor) = match session.mode() {
            InputMode::PasswordMasked => {
                let masked = session.masked_input();
                let len = masked.len();
                (masked, len)
            }
            _ => (session.buffer().to_string(), session.cursor()),
        };
        let response = InputResponse {
            outputs,
            redraw,
            buffer,
            cursor,
            mode: mode_name(session.mode()),
            prompt: session.prompt(),
            special_action,
            url,
        };
        serde_wasm_bindgen::to_value(&response).unwrap_or(JsValue::NULL)
    }

    /// Called with each live monitor frame while `htop` is running.
    pub fn set_frame_callback(&mut self, callback: js_sys::Function) {
        self.frame_callback = Some(callback);
        self.sync_monitor();
    }

    /// Leave the live view from the js side, e.g. when the tab is hidden.
    pub fn stop_monitor(&mut self) {
        self.session.borrow_mut().set_mode(InputMode::Normal);
        self.sync_monitor();
    }

    pub fn prompt(&self) -> String {
        self.session.borrow().prompt()
    }

    pub fn banner(&self) -> String {
        self.session.borrow().banner()
    }

    pub fn get_command_list(&self) -> JsValue {
        let names = self.session.borrow().registry().get_command_names();
        serde_wasm_bindgen::to_value(&names).unwrap_or(JsValue::NULL)
    }

    pub fn get_current_directory(&self) -> String {
        self.session.borrow().cwd().to_string()
    }

    pub fn is_live_mode(&self) -> bool {
        self.session.borrow().mode() == InputMode::ProcessLive
    }

    /// Load a neofetch capture in the background. `neofetch` keeps using
    /// the synthesized report until it arrives.
    pub fn prefetch_system_info(&self, url: &str) {
        let session = Rc::clone(&self.session);
        let url = url.to_string();
        spawn_local(async move {
            match fetch_text(&url).await {
                Ok(text) => session.borrow_mut().set_raw_system_info(&text),
                Err(e) => warn!("system info prefetch from {} failed: {:?}", url, e),
            }
        });
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal {
    fn from_config(config: TerminalConfig) -> Terminal {
        logging::init(LevelFilter::Info);
        let prefetch = config.system_info_url.clone();
        let terminal = Terminal {
            session: Rc::new(RefCell::new(Session::new(config))),
            frame_callback: None,
            monitor: None,
        };
        if let Some(url) = prefetch {
            terminal.prefetch_system_info(&url);
        }
        terminal
    }

    // open urls here, report the last action back to js
    fn perform_actions(&mut self) -> (Option<String>, Option<String>) {
        let actions = self.session.borrow_mut().take_actions();
        let mut reported = (None, None);
        for action in actions {
            reported = match action {
                Action::ClearScreen => (Some("clear_screen".to_string()), None),
                Action::OpenUrl(url) => {
                    open_url(&url);
                    (Some("open_url".to_string()), Some(url))
                }
            };
        }
        reported
    }

    // timer runs exactly while the session is in live mode
    fn sync_monitor(&mut self) {
        let live = self.session.borrow().mode() == InputMode::ProcessLive;
        if !live {
            if self.monitor.take().is_some() {
                info!("live monitor stopped");
            }
            return;
        }
        if self.monitor.is_some() {
            return;
        }
        let callback = match &self.frame_callback {
            Some(cb) => cb.clone(),
            None => return,
        };
        let session = Rc::clone(&self.session);
        let period = session.borrow().config().refresh_interval_ms;
        self.monitor = Some(Interval::new(period, move || {
            let frame = session.borrow_mut().tick_monitor();
            if let Some(frame) = frame {
                if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(&frame)) {
                    warn!("frame callback failed: {:?}", e);
                }
            }
        }));
        info!("live monitor started, {}ms", period);
    }
}

fn mode_name(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Normal => "normal",
        InputMode::PasswordMasked => "password",
        InputMode::ProcessLive => "live",
    }
}

fn open_url(url: &str) {
    let opened = web_sys::window().map(|w| w.open_with_url_and_target(url, "_blank"));
    match opened {
        Some(Ok(_)) => info!("opened {}", url),
        Some(Err(e)) => warn!("could not open {}: {:?}", url, e),
        None => warn!("no window to open {}", url),
    }
}

async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp: Response = JsFuture::from(window.fetch_with_request(&request)).await?.dyn_into()?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", resp.status())));
    }
    let body = JsFuture::from(resp.text()?).await?;
    body.as_string().ok_or_else(|| JsValue::from_str("body is not text"))
}
