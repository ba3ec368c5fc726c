//! Dynshort Sim - drive the shortcut manager from the command line.
//!
//! Registers the demo shortcut set, plays a cold start and optional resumes,
//! and prints a JSON report of the resulting shortcuts and triggers.

mod demo;

use anyhow::{bail, Context, Result};
use clap::Parser;
use dynshort::{
    BackendKind, InMemoryShortcutService, LaunchSignal, ShortcutManager, ShortcutTrigger,
    SimulationConfig, TriggerKind,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "dynshort-sim")]
#[command(about = "Exercise dynamic shortcuts without a device")]
struct Args {
    /// Backend: simulated, memory or disabled
    #[arg(short, long, default_value = "memory")]
    backend: String,

    /// Simulation settings file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Shortcut ID pending at startup (cold start)
    #[arg(long)]
    launch_id: Option<String>,

    /// Shortcut IDs tapped while in the background, one resume each
    #[arg(long)]
    resume_id: Vec<String>,

    /// Shortcut ID to remove after the triggers played
    #[arg(long)]
    remove: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// How the launch marker gets set for the chosen backend.
enum Driver {
    Signal(Arc<LaunchSignal>),
    Simulation,
    None,
}

#[derive(Debug, Serialize)]
struct Report {
    backend: BackendKind,
    count: u32,
    ids: Vec<String>,
    /// IDs the simulated backend recorded instead of creating.
    requested: Vec<String>,
    triggers: Vec<ShortcutTrigger>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    let report = run(&args)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run(args: &Args) -> Result<Report> {
    let simulation = match &args.config {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("Failed to load simulation config {}", path.display()))?,
        None => SimulationConfig::default(),
    };

    let (manager, driver) = build_manager(&args.backend, simulation, args.launch_id.as_deref())?;
    info!("Using {} backend", manager.backend_kind());

    let triggers = Arc::new(Mutex::new(Vec::new()));
    let sink = triggers.clone();
    manager.subscribe(Arc::new(move |id: &str, kind: TriggerKind| {
        info!("Shortcut triggered: {} ({})", id, kind);
        if let Ok(mut triggers) = sink.lock() {
            triggers.push(ShortcutTrigger::new(id, kind));
        }
    }));

    for request in demo::demo_requests() {
        let outcome = manager
            .create(&request)
            .with_context(|| format!("Failed to create shortcut {}", request.id))?;
        info!("{}: {:?}", request.id, outcome);
    }

    manager.on_cold_start();

    for id in &args.resume_id {
        manager.on_pause_changed(true);
        match &driver {
            Driver::Signal(signal) => {
                signal.set(id.as_str());
                manager.on_pause_changed(false);
            }
            Driver::Simulation => {
                manager.simulate(id, TriggerKind::ResumedFromBackground);
            }
            Driver::None => {
                warn!("Backend cannot deliver resume triggers; ignoring {}", id);
                manager.on_pause_changed(false);
            }
        }
    }

    if let Some(id) = &args.remove {
        manager.remove(id)?;
    }

    let triggers = triggers
        .lock()
        .map(|triggers| triggers.clone())
        .unwrap_or_default();

    Ok(Report {
        backend: manager.backend_kind(),
        count: manager.count()?,
        ids: manager.list_ids()?,
        requested: manager
            .simulated_requests()
            .into_iter()
            .map(|(id, _)| id)
            .collect(),
        triggers,
    })
}

fn build_manager(
    backend: &str,
    mut simulation: SimulationConfig,
    launch_id: Option<&str>,
) -> Result<(ShortcutManager, Driver)> {
    match backend {
        "memory" => {
            let signal = Arc::new(match launch_id {
                Some(id) => LaunchSignal::with_pending(id),
                None => LaunchSignal::new(),
            });
            let manager = ShortcutManager::builder()
                .native(
                    Arc::new(InMemoryShortcutService::new()),
                    "com.example.gamename.MainActivity",
                )
                .launch_source(signal.clone())
                .build()?;
            Ok((manager, Driver::Signal(signal)))
        }
        other => match BackendKind::from_str(other) {
            Some(BackendKind::Simulated) => {
                if let Some(id) = launch_id {
                    simulation.simulate_cold_start = true;
                    simulation.simulation_shortcut_id = id.to_string();
                }
                let manager = ShortcutManager::builder()
                    .simulated()
                    .simulation_config(simulation)
                    .build()?;
                Ok((manager, Driver::Simulation))
            }
            Some(BackendKind::Disabled) => {
                if launch_id.is_some() {
                    warn!("The disabled backend ignores launch IDs");
                }
                Ok((ShortcutManager::builder().disabled().build()?, Driver::None))
            }
            Some(BackendKind::Native) => {
                bail!("The native backend needs a host; use \"memory\" for an in-process stand-in")
            }
            None => bail!("Unknown backend: {}", other),
        },
    }
}
