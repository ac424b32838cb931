use std::io::BufRead;

use anyhow::Result;
use patterns_demo::{App, Command, Outcome, config};
use tracing::{info, warn};

fn main() -> Result<()> {
    // initialize tracing
    let level = config::log_level(std::env::var(config::LOG_LEVEL_VAR).ok().as_deref());
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

    let subject_config = config::subject_config(std::env::var(config::CONFIG_VAR).ok().as_deref())?;
    info!("starting with {:?}", subject_config);
    let mut app = App::new(subject_config);

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>().and_then(|command| app.execute(command)) {
            Ok(Outcome::Continue(lines)) => {
                for line in lines {
                    println!("{line}");
                }
            }
            Ok(Outcome::Quit) => break,
            Err(e) => {
                warn!("{line:?} failed: {e}");
                println!("error: {e}");
            }
        }
    }

    Ok(())
}
