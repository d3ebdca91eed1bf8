#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plays Hallways levels from a line script.
//!
//! Lines are read from a script file or standard input, translated into world
//! commands, and every resulting event is rendered as plain text.

mod config;
mod console;
mod script;

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use hallways_core::{Command, Event, TransitionId};
use hallways_presentation::Presenter;
use hallways_world::{apply, query, World};
use log::LevelFilter;

use config::Config;
use console::Console;
use script::{parse_line, Directive};

#[derive(Debug, Parser)]
#[command(
    name = "hallways",
    about = "Walk the hallways puzzle levels from a text script"
)]
struct Args {
    /// TOML file with session settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Script to run instead of reading standard input.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Level entered at boot.
    #[arg(long)]
    level: Option<u8>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long)]
    log_level: Option<LevelFilter>,

    /// Simulated milliseconds that pass after every line.
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Leave walker animations pending until an `arrive` line.
    #[arg(long)]
    no_auto_arrive: bool,
}

/// Effective settings after merging the config file with the flags.
#[derive(Clone, Copy, Debug)]
struct Session {
    tick: Duration,
    auto_arrive: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(level) = args.level {
        config.start_level = level;
    }
    if let Some(tick_ms) = args.tick_ms {
        config.tick_ms = tick_ms;
    }
    if args.no_auto_arrive {
        config.auto_arrive = false;
    }
    let filter = match args.log_level {
        Some(filter) => filter,
        None => config.log_filter()?,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter.as_str()))
        .init();

    let session = Session {
        tick: config.tick(),
        auto_arrive: config.auto_arrive,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            run(BufReader::new(file), &mut out, &config, session)
        }
        None => run(io::stdin().lock(), &mut out, &config, session),
    }
}

fn run(input: impl BufRead, out: &mut impl Write, config: &Config, session: Session) -> Result<()> {
    let mut world = World::new();
    let mut presenter = Presenter::new();
    let mut console = Console::new();
    let mut events = Vec::new();

    log::info!("booting at level {}", config.start_level);
    step(
        &mut world,
        Command::ChangeLevel {
            level: config.start_level(),
        },
        &mut events,
        &mut presenter,
        &mut console,
        session,
    );
    flush(&mut console, out)?;

    for (number, line) in input.lines().enumerate() {
        let line = line.context("failed to read script line")?;
        match parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(Directive::Quit)) => break,
            Ok(Some(Directive::Show)) => {
                let arrows: Vec<TransitionId> = TransitionId::ALL
                    .into_iter()
                    .filter(|id| query::edge_enabled(&world, *id))
                    .collect();
                console.show_snapshot(&query::snapshot(&world), &arrows);
            }
            Ok(Some(Directive::Levels)) => {
                console.show_levels(query::catalog(&world), query::active_level(&world));
            }
            Ok(Some(Directive::Command(command))) => step(
                &mut world,
                command,
                &mut events,
                &mut presenter,
                &mut console,
                session,
            ),
            Err(error) => log::warn!("line {}: {error}", number + 1),
        }
        if !session.tick.is_zero() {
            step(
                &mut world,
                Command::Tick { dt: session.tick },
                &mut events,
                &mut presenter,
                &mut console,
                session,
            );
        }
        flush(&mut console, out)?;
    }

    Ok(())
}

fn step(
    world: &mut World,
    command: Command,
    events: &mut Vec<Event>,
    presenter: &mut Presenter,
    console: &mut Console,
    session: Session,
) {
    log::debug!("applying {command:?}");
    apply(world, command, events);
    console.present(presenter, events);
    events.clear();

    while session.auto_arrive && console.take_arrival() {
        apply(world, Command::WalkerArrived, events);
        console.present(presenter, events);
        events.clear();
    }
}

fn flush(console: &mut Console, out: &mut impl Write) -> Result<()> {
    for line in console.take_lines() {
        writeln!(out, "{line}").context("failed to write to stdout")?;
    }
    out.flush().context("failed to flush stdout")
}
