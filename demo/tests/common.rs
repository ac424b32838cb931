use patterns_demo::{App, Command, Outcome};
use std::str::FromStr;
use tracing::Level;

// Initialize tracing for tests
#[ctor::ctor]
fn init_tracing() {
    // if LOG_LEVEL env var is set, use it
    let level = std::env::var("LOG_LEVEL").ok().and_then(|level| Level::from_str(&level).ok()).unwrap_or(Level::INFO);
    let _ = tracing_subscriber::fmt().with_max_level(level).with_test_writer().try_init();
}

/// Runs one command line and returns the printed lines
#[allow(unused)]
pub fn run(app: &mut App, line: &str) -> Vec<String> {
    match app.execute(line.parse::<Command>().unwrap()).unwrap() {
        Outcome::Continue(lines) => lines,
        Outcome::Quit => panic!("unexpected quit for {line:?}"),
    }
}
