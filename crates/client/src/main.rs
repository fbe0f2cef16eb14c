//! Board simulator binary.
//!
//! Loads a track from the data directory and replays a sequence of dice
//! rolls for one player, logging every move and stat change.
//!
//! # Examples
//!
//! ```bash
//! # Walk the snake track with three rolls
//! cargo run -p board-sim -- 3 4 2
//!
//! # Second seat's depth convention, skipping the animation
//! BOARD_DEPTH_SIGN=positive cargo run -p board-sim -- --instant 6 6
//!
//! # Lose a battle after every move
//! RUST_LOG=debug cargo run -p board-sim -- --battle-damage 8 5 5 5 5 5
//! ```

use anyhow::Result;
use board_content::ContentFactory;
use board_core::{Player, PlayerId};
use board_sim::{LogFlow, LogPresentation, Session, SimConfig, TurnReport, WalkMode};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Replay dice rolls on a board track
#[derive(Parser, Debug)]
#[command(name = "board-sim")]
#[command(about = "Replay dice rolls on a board track", long_about = None)]
#[command(version)]
struct Cli {
    /// Dice rolls, one per turn
    #[arg(required = true)]
    rolls: Vec<u32>,

    /// Track name under `<data-dir>/tracks`
    #[arg(short, long, default_value = "snake")]
    track: String,

    /// Content directory (overrides BOARD_DATA_DIR)
    #[arg(long)]
    data_dir: Option<std::path::PathBuf>,

    /// Jump to each destination instead of animating the walk
    #[arg(long)]
    instant: bool,

    /// Damage taken from a lost battle after every move
    #[arg(long)]
    battle_damage: Option<i32>,

    /// Fame lost with each lost battle
    #[arg(long, default_value_t = 30)]
    fame_penalty: i32,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    setup_logging();

    let mut sim_config = SimConfig::from_env();
    if let Some(dir) = cli.data_dir.clone() {
        sim_config.data_dir = dir;
    }

    let factory = ContentFactory::new(&sim_config.data_dir);
    let mut config = factory.load_config()?;
    if let Some(sign) = sim_config.depth_sign {
        config = config.with_depth_sign(sign);
    }
    let layout = factory.load_track(&cli.track)?;
    let hand = factory.load_items()?;

    tracing::info!(
        track = %cli.track,
        depth_sign = %config.movement.depth_sign,
        frame_dt = sim_config.frame_dt,
        "starting simulation"
    );

    let player = Player::with_hand(
        PlayerId::FIRST,
        &config,
        layout.start,
        layout.heading,
        hand,
    );
    let mut session = Session::new(player, layout, sim_config.frame_dt);
    let mut presentation = LogPresentation::default();
    let mut flow = LogFlow::default();
    let mode = if cli.instant {
        WalkMode::Instant
    } else {
        WalkMode::Animated
    };

    for (turn, &roll) in cli.rolls.iter().enumerate() {
        let report = session.take_turn(roll, mode, &mut presentation, &mut flow)?;
        match report {
            TurnReport::Moved {
                position, heading, ..
            } => {
                println!(
                    "turn {:>2}: rolled {} -> {} facing {}",
                    turn + 1,
                    roll,
                    position,
                    heading
                );
                if let Some(damage) = cli.battle_damage
                    && session.lose_battle(damage, cli.fame_penalty, &mut flow)
                {
                    println!("         lost battle and died");
                }
            }
            TurnReport::Recovering { turn_skip_count } => {
                println!("turn {:>2}: recovering ({})", turn + 1, turn_skip_count);
            }
            TurnReport::Revived { health } => {
                println!("turn {:>2}: revived with {} health", turn + 1, health);
            }
        }

        if flow.is_over() {
            break;
        }
    }

    let stats = &session.player().stats;
    println!(
        "final: health {}/{} fame {} gold {} items {}",
        stats.health,
        stats.max_health,
        stats.fame,
        stats.gold,
        stats.item_count()
    );
    if let Some(fame) = flow.final_fame {
        println!("game over at fame {}", fame);
    }

    Ok(())
}

/// Install a stderr subscriber filtered by `RUST_LOG`, `info` by default.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
