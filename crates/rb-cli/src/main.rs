//! ReelBox demo session runner
//!
//! Usage:
//!   rb-cli --spins 5 --profile turbo      - roll five times, then cash out
//!   rb-cli --seed 42 --profile studio     - reproducible instant session
//!   RUST_LOG=debug rb-cli ...             - show machine transition logs

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use crossbeam_channel::bounded;
use rb_machine::{
    MachineConfig, MachineEvent, MachineSnapshot, RevealTiming, SlotMachine, ThreadScheduler,
    TimingProfile,
};

#[derive(Parser)]
#[command(name = "rb-cli", about = "ReelBox slot widget demo session")]
struct Cli {
    /// Number of rolls to perform
    #[arg(short, long, default_value_t = 5)]
    spins: u32,

    /// RNG seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Timing profile (normal, turbo, studio)
    #[arg(short, long, default_value = "turbo")]
    profile: String,

    /// Skip the final cash-out
    #[arg(long)]
    keep: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = MachineConfig::standard();
    config.timing = RevealTiming::from_profile(parse_profile(&cli.profile)?);

    let machine = SlotMachine::with_config(config, Arc::new(ThreadScheduler))?;
    if let Some(seed) = cli.seed {
        machine.seed(seed);
    }

    // Reveals arrive from the scheduler thread; a channel hands them back here.
    let (tx, rx) = bounded::<MachineEvent>(16);
    machine.subscribe(Box::new(move |event, snapshot| {
        print_transition(event, snapshot);
        let _ = tx.send(event.clone());
    }));

    for _ in 0..cli.spins {
        match machine.roll() {
            Ok(()) => {
                // Block until this spin's reveal has been published
                while let Ok(event) = rx.recv() {
                    if matches!(event, MachineEvent::RevealCompleted { .. }) {
                        break;
                    }
                }
            }
            Err(err) => {
                eprintln!("roll refused: {err}");
                break;
            }
        }
    }

    if !cli.keep {
        let collected = machine.cash_out();
        println!("collected {collected} credit(s)");
    }

    println!("{}", serde_json::to_string_pretty(&machine.snapshot())?);
    Ok(())
}

fn parse_profile(name: &str) -> Result<TimingProfile> {
    match name.to_ascii_lowercase().as_str() {
        "normal" => Ok(TimingProfile::Normal),
        "turbo" => Ok(TimingProfile::Turbo),
        "studio" => Ok(TimingProfile::Studio),
        other => bail!("unknown timing profile '{other}' (expected normal, turbo, or studio)"),
    }
}

fn print_transition(event: &MachineEvent, snapshot: &MachineSnapshot) {
    let icons: Vec<&str> = snapshot.results.iter().map(|s| s.icon.as_str()).collect();
    println!(
        "[{}] credits={} spinning={} results=[{}]",
        event.name(),
        snapshot.credits,
        snapshot.spinning,
        icons.join(" ")
    );
}
