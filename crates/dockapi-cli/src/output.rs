//! Terminal output for the `dockapi` binary.
//!
//! Startup notices and the `--help-api` usage examples, with colourised
//! JSON request bodies.

use std::fmt::Write as _;

use dockapi_common::config::Settings;
use serde_json::Value;

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Usage examples: description, endpoint, request body.
const EXAMPLES: &[(&str, &str, &str)] = &[
    ("Restart a container", "/container", r#"{"operation":"restart","container":"my-container"}"#),
    ("Stop a container", "/container", r#"{"operation":"stop","container":"my-container"}"#),
    ("Start a container", "/container", r#"{"operation":"start","container":"my-container"}"#),
    ("Remove a container", "/container", r#"{"operation":"remove","container":"my-container"}"#),
    ("Pull an image", "/image", r#"{"operation":"pull","image":"nginx:latest"}"#),
    (
        "Docker Compose - Pull images for a service",
        "/compose",
        r#"{"operation":"pull","service":"web","profile":"development"}"#,
    ),
    (
        "Docker Compose - Create and start a service",
        "/compose",
        r#"{"operation":"up","service":"web","profile":"development"}"#,
    ),
    (
        "Docker Compose - Stop and remove a service",
        "/compose",
        r#"{"operation":"down","service":"web","profile":"development"}"#,
    ),
    (
        "Docker Compose - Restart a service",
        "/compose",
        r#"{"operation":"restart","service":"web","profile":"development"}"#,
    ),
    (
        "Docker Compose - Stop a service",
        "/compose",
        r#"{"operation":"stop","service":"web","profile":"development"}"#,
    ),
    (
        "Docker Compose - Start a service",
        "/compose",
        r#"{"operation":"start","service":"web","profile":"development"}"#,
    ),
];

/// Prints the token generated at startup.
#[allow(clippy::print_stdout)]
pub fn print_generated_token(token: &str) {
    println!(
        "{YELLOW}Generated random auth token{RESET} {DIM}(WARNING: this will change each time you run the app!){RESET}: {BOLD}{token}{RESET}"
    );
}

/// Prints which operations the allow flags permit.
#[allow(clippy::print_stdout)]
pub fn print_allowed_operations(settings: &Settings) {
    println!("{}", settings.allowed_operations_summary());
}

/// Prints the `--help-api` usage examples.
#[allow(clippy::print_stdout)]
pub fn print_api_usage(settings: &Settings) {
    print!("{}", api_usage(settings));
}

/// Renders curl examples for every endpoint against the configured
/// token and port.
#[must_use]
pub fn api_usage(settings: &Settings) -> String {
    let token = if settings.is_open() {
        "<token>"
    } else {
        settings.auth_token.as_str()
    };
    let mut out = String::new();
    let _ = writeln!(out, "{BOLD}dockapi API Usage Examples:{RESET}");
    let _ = writeln!(out, "-----------------------------------");
    for (description, endpoint, body) in EXAMPLES {
        let _ = writeln!(out);
        let _ = writeln!(out, "{CYAN}{description}:{RESET}");
        let _ = writeln!(
            out,
            "curl -X POST -H \"Content-Type: application/json\" -H \"Authorization: Bearer {token}\" \\"
        );
        let _ = writeln!(out, " -d '\n{}\n' \\", colourise_json(body));
        let _ = writeln!(out, " http://localhost:{}{endpoint}", settings.port);
        let _ = writeln!(out);
        let _ = writeln!(out, "For pretty-printed output, add ?format=pretty to the URL:");
        let _ = writeln!(out, " http://localhost:{}{endpoint}?format=pretty", settings.port);
    }
    out
}

/// Pretty-prints a JSON document with ANSI colours, two-space indented.
///
/// Input that is not valid JSON is returned unchanged.
#[must_use]
pub fn colourise_json(json: &str) -> String {
    serde_json::from_str::<Value>(json)
        .map_or_else(|_| json.to_string(), |value| colourise(&value, 0))
}

fn colourise(value: &Value, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    let inner = "  ".repeat(depth + 1);
    match value {
        Value::Null => format!("{RED}null{RESET}"),
        Value::Bool(b) => format!("{CYAN}{b}{RESET}"),
        Value::Number(n) => format!("{YELLOW}{n}{RESET}"),
        Value::String(s) => format!("{GREEN}{}{RESET}", quoted(s)),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => {
            let elements: Vec<String> = items
                .iter()
                .map(|item| colourise(item, depth + 1))
                .collect();
            format!("[\n{inner}{}\n{indent}]", elements.join(&format!(",\n{inner}")))
        }
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let pairs: Vec<String> = map
                .iter()
                .map(|(key, value)| {
                    format!("{BLUE}{}{RESET}: {}", quoted(key), colourise(value, depth + 1))
                })
                .collect();
            format!("{{\n{inner}{}\n{indent}}}", pairs.join(&format!(",\n{inner}")))
        }
    }
}

fn quoted(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}
