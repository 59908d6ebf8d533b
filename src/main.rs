// Draft simulator entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to stderr; stdout carries the report)
// 2. Load config
// 3. Load team and player data
// 4. Build the simulation and fast-forward to the end of the draft
// 5. Print every roster and the end-of-draft summary

use std::path::Path;

use anyhow::Context;
use draft_sim::config;
use draft_sim::data;
use draft_sim::draft::simulator::{DraftPhase, DraftSim};
use draft_sim::draft::summary::draft_summary;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        teams_file = %config.data.teams,
        players_file = %config.data.players,
        "config loaded"
    );

    let teams = data::load_teams(Path::new(&config.data.teams))
        .context("failed to load team data")?;
    let players = data::load_players(Path::new(&config.data.players))
        .context("failed to load player data")?;

    let seed = config.sim.seed.unwrap_or_else(rand::random);
    let mut sim = DraftSim::new(teams, players, seed);

    if let Some(name) = &config.sim.followed_team {
        if !sim.select_team(name) {
            warn!(team = %name, "followed team not found in the team list");
        }
    }

    sim.complete_draft();

    print_report(&sim, &config);
    Ok(())
}

/// Print every team's roster and the end-of-draft summary to stdout.
fn print_report(sim: &DraftSim, config: &config::Config) {
    let followed = sim.followed_team().map(|t| t.name.clone());

    for (team, roster) in sim.rosters() {
        let marker = if followed.as_deref() == Some(team.name.as_str()) {
            " *"
        } else {
            ""
        };
        println!("{}{}", team.name, marker);
        for player in roster.sorted_players(config.sim.roster_sort) {
            println!(
                "  {:>3}. {} ({}) {}  [Round {}, Pick {}]",
                player.draft_number,
                player.name,
                player.position,
                player.rating,
                player.round,
                player.pick,
            );
        }
        let counts = roster.counts();
        println!(
            "  Total: {} | GK: {}, DEF: {}, MID: {}, ATT: {}",
            roster.len(),
            counts.gk,
            counts.def,
            counts.mid,
            counts.att
        );
        println!();
    }

    println!("Draft Summary");
    if let DraftPhase::Completed { stalled: true } = sim.phase() {
        println!("(draft stalled before every slot was filled)");
    }
    for entry in draft_summary(sim) {
        let warnings = if entry.warnings.is_empty() {
            "None".to_string()
        } else {
            entry.warnings.join(", ")
        };
        println!("{}: {}", entry.team_name, warnings);
    }
}

/// Initialize tracing to stderr so the printed report stays clean.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("draft_sim=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
