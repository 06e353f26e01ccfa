use anyhow::{Context, Result};
use clap::Parser;
use huddle::{make_groups, GroupOptions};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Split a roster of people into groups, avoiding repeat pairings from
/// past sessions.
#[derive(Parser, Debug)]
#[command(version, about)]
struct HuddleArgs {
    /// JSON roster: {"list": [...], "past_groups": [[...], ...]}
    roster: PathBuf,
    /// Desired members per group (default 4)
    #[arg(short, long)]
    target_size: Option<usize>,
    /// Disperse the last group if group sizes differ by more than this
    #[arg(short, long)]
    max_difference: Option<usize>,
    /// Seed for the shuffle; random if omitted
    #[arg(short, long)]
    seed: Option<u64>,
    /// Print the full grouping as JSON instead of a numbered listing
    #[arg(long)]
    json: bool,
}

#[derive(Deserialize)]
struct Roster {
    list: Vec<String>,
    past_groups: Option<Vec<Vec<String>>>,
}

fn main() -> Result<()> {
    let args = HuddleArgs::parse();

    let roster_text = fs::read_to_string(&args.roster)
        .with_context(|| format!("unable to read roster {}", args.roster.display()))?;
    let roster: Roster = serde_json::from_str(&roster_text)
        .with_context(|| format!("unable to parse roster {}", args.roster.display()))?;

    let options = GroupOptions {
        past_groups: roster.past_groups,
        target_size: args.target_size,
        max_difference: args.max_difference,
    };
    let seed = args.seed.unwrap_or_else(rand::random);

    let grouping = make_groups(&roster.list, &options, seed)?;
    if args.json {
        println!("{}", grouping.to_json()?);
    } else {
        println!("{}", grouping.render_text());
    }
    Ok(())
}
