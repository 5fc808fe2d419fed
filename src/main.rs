// SPDX-License-Identifier: GPL-3.0-only

//! Radboard headless runner
//!
//! Replays a JSON-lines event script against a headless keyboard surface and
//! prints the resulting element tree as JSON.
//!
//! ```text
//! radboard                 # run the built-in demo session
//! radboard events.jsonl    # replay a script file
//! radboard -               # replay a script from stdin
//! ```

use std::path::PathBuf;
use std::rc::Rc;

use radboard::app::AppModel;
use radboard::app_settings;
use radboard::channel::{ScriptBackend, demo_script};
use radboard::config::Config;
use radboard::renderer::Surface;
use radboard::scheduler::TokioScheduler;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("{}=info", app_settings::APP_NAME).parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::var_os(app_settings::CONFIG_ENV).map(PathBuf::from);
    let config = Config::load_or_default(config_path.as_deref());

    let mut backend = match std::env::args().nth(1).as_deref() {
        None => demo_script(),
        Some("-") => ScriptBackend::from_reader(std::io::stdin().lock())?,
        Some(path) => ScriptBackend::from_path(path)?,
    };
    if backend.skipped() > 0 {
        tracing::warn!("{} script lines were skipped", backend.skipped());
    }

    // Element handles are single-threaded, so everything runs on one LocalSet.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let local = Rc::new(tokio::task::LocalSet::new());
    let scheduler = TokioScheduler::new(Rc::clone(&local));
    let surface = Surface::new();

    let handled = local.block_on(&runtime, async {
        let mut app = AppModel::new(&surface, &config, Rc::new(scheduler));
        let handled = app.start(&mut backend).await;
        // Let pending flashes and toasts settle before capturing the tree.
        tokio::time::sleep(config.longest_effect()).await;
        handled
    });
    tracing::info!("Dispatched {} events", handled);

    println!("{}", serde_json::to_string_pretty(&surface.snapshot())?);
    Ok(())
}
