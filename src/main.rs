use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::thread;

use bouncing_arena::engine::game_loop::TickClock;
use bouncing_arena::engine::input::{CommandQueue, ConsoleInput, KeyBindings};
use bouncing_arena::game::{Arena, CommandOutcome};
use bouncing_arena::ArenaConfig;

fn main() -> Result<()> {
    // Initialize logger, RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Bouncing Arena...");

    let config = ArenaConfig::parse();
    config.validate().context("invalid arena configuration")?;
    info!(
        "Arena {}x{} at {} ticks/s",
        config.width, config.height, config.tick_rate
    );

    let mut arena = Arena::from_config(&config).context("failed to spawn initial population")?;
    info!("{} ({} bodies)", arena.status(), arena.len());

    let mut console = if config.interactive {
        info!("Keys: g = toggle gravity, a = add body, r = remove body, p = pause, q = quit");
        Some(ConsoleInput::spawn(KeyBindings::default()).context("failed to start console input")?)
    } else {
        None
    };

    let mut clock = TickClock::new(config.tick_rate);
    let mut commands = CommandQueue::new();

    'running: loop {
        // Structural changes only happen here, between ticks
        if let Some(console) = console.as_mut() {
            console.poll_into(&mut commands);
        }
        for command in commands.drain() {
            match arena.apply(command)? {
                CommandOutcome::Continue => {}
                CommandOutcome::TogglePause => clock.toggle_pause(),
                CommandOutcome::Quit => {
                    info!("Quit requested, shutting down...");
                    break 'running;
                }
            }
        }

        for _ in 0..clock.begin_frame() {
            let step = arena.tick();
            log::debug!(
                "tick {}: {} collisions over {} pairs",
                arena.ticks(),
                step.collisions,
                step.pairs_checked
            );

            if config.report_interval > 0 && arena.ticks() % config.report_interval == 0 {
                let stats = arena.stats();
                info!(
                    "tick {} | {} | bodies {} | kinetic energy {:.1}",
                    arena.ticks(),
                    arena.status(),
                    stats.population,
                    stats.kinetic_energy
                );
            }

            if config.max_ticks.is_some_and(|max| arena.ticks() >= max) {
                info!("Reached tick limit");
                break 'running;
            }
        }

        thread::sleep(clock.until_next_tick());
    }

    let stats = arena.stats();
    info!(
        "Stopped after {} ticks ({:.1}s): {} bodies, {}",
        arena.ticks(),
        clock.elapsed().as_secs_f64(),
        stats.population,
        arena.status()
    );

    Ok(())
}
