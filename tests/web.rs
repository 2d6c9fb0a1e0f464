//! Browser smoke tests for the js-facing adapter. Run with
//! `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use cv_terminal::web::Terminal;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn field(value: &JsValue, name: &str) -> JsValue {
    js_sys::Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn execute_command_reports_success() {
    let mut term = Terminal::new();
    let resp = term.execute_command("pwd");
    assert_eq!(field(&resp, "success").as_bool(), Some(true));
    assert_eq!(field(&resp, "output").as_string().as_deref(), Some("/"));
}

#[wasm_bindgen_test]
fn unknown_command_is_a_failure() {
    let mut term = Terminal::new();
    let resp = term.execute_command("frobnicate");
    assert_eq!(field(&resp, "success").as_bool(), Some(false));
    assert_eq!(
        field(&resp, "output").as_string().as_deref(),
        Some("frobnicate: command not found")
    );
}

#[wasm_bindgen_test]
fn clear_sets_special_action() {
    let mut term = Terminal::new();
    let resp = term.execute_command("clear");
    assert_eq!(field(&resp, "special_action").as_string().as_deref(), Some("clear_screen"));
}

#[wasm_bindgen_test]
fn handle_input_edits_and_submits() {
    let mut term = Terminal::new();
    let resp = term.handle_input("cd ab\t");
    assert_eq!(field(&resp, "buffer").as_string().as_deref(), Some("cd about/"));
    term.handle_input("\r");
    assert_eq!(term.get_current_directory(), "/about");
}

#[wasm_bindgen_test]
fn htop_toggles_live_mode() {
    let mut term = Terminal::new();
    term.handle_input("htop\r");
    assert!(term.is_live_mode());
    term.handle_input("q");
    assert!(!term.is_live_mode());
}

#[wasm_bindgen_test]
fn with_config_rejects_bad_json() {
    assert!(Terminal::with_config("{not json").is_err());
    let term = Terminal::with_config(r#"{"hostname":"lab"}"#).unwrap();
    assert!(term.prompt().contains("lab"));
}

#[wasm_bindgen_test]
fn execute_command_consumes_sudo_password() {
    let mut term = Terminal::new();
    term.execute_command("sudo");
    let resp = term.execute_command("hunter2");
    assert_eq!(field(&resp, "success").as_bool(), Some(false));
    assert_eq!(
        field(&resp, "output").as_string().as_deref(),
        Some("srgls is not in the sudoers file. This incident will be reported.")
    );
    let hist = term.execute_command("history");
    assert_eq!(field(&hist, "output").as_string().as_deref(), Some("1  sudo\n2  history"));
}
