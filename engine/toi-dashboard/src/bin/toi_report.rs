use anyhow::{Context, Result};
use clap::Parser;
use roster_reconciler::FinalGame;
use std::fs;
use toi_dashboard::{count_by_team, zero_toi_frequency, zero_toi_players, DashboardFilter};

/// Zero time-on-ice report over the reconciled game dataset
#[derive(Parser, Debug)]
#[command(name = "toi_report")]
struct Args {
    /// Reconciled games JSON produced by build_final_games
    #[arg(long, default_value = "final_games.json")]
    input: String,

    /// Exclude goaltenders (GK) from the report
    #[arg(long)]
    exclude_goaltenders: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let json_content = fs::read_to_string(&args.input)
        .with_context(|| format!("Missing input file: {}", args.input))?;
    let games: Vec<FinalGame> = serde_json::from_str(&json_content)
        .with_context(|| format!("Invalid games JSON in {}", args.input))?;

    let filter = DashboardFilter { exclude_goaltenders: args.exclude_goaltenders };
    let entries = zero_toi_players(&games, &filter);

    if args.exclude_goaltenders {
        println!("Players with 00:00 time on ice (excluding goaltenders):");
    } else {
        println!("Players with 00:00 time on ice:");
    }

    if entries.is_empty() {
        println!("No data available.");
        return Ok(());
    }

    println!(
        "{:<12} {:<22} {:<5} {:<24} {:<5} {:<9} {:<5}",
        "Date", "Team", "#", "Name", "Pos", "Source", "Both"
    );
    println!("{}", "-".repeat(88));
    for entry in &entries {
        println!(
            "{:<12} {:<22} {:<5} {:<24} {:<5} {:<9} {:<5}",
            entry.date,
            entry.team,
            entry.number,
            entry.name,
            entry.position,
            entry.source,
            entry.present_in_both,
        );
    }

    println!("\nNumber of players per team with 00:00 time on ice:");
    for team_count in count_by_team(&entries) {
        println!("{:<22} {}", team_count.team, team_count.count);
    }

    println!("\nFrequency of 00:00 time on ice by player per team:");
    let mut current_team = String::new();
    for frequency in zero_toi_frequency(&entries) {
        if frequency.team != current_team {
            println!("\n{}", frequency.team);
            current_team = frequency.team.clone();
        }
        println!("  {:<24} {}", frequency.name, frequency.count);
    }

    Ok(())
}
