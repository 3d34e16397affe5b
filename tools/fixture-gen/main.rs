use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use serde_json::{Value, json};
use std::fs;

const PROJECTS: [&str; 5] = [
    "electricity-amr-prod",
    "electricity-ami-prod",
    "electricity-amr-dev",
    "gas-billing-prod",
    "water-metering-dev",
];

const FLOW_NAMES: [&str; 8] = [
    "ingest-readings",
    "validate-readings",
    "estimate-gaps",
    "publish-usage",
    "sync-meters",
    "archive-events",
    "refresh-tariffs",
    "export-billing",
];

const CRONS: [&str; 8] = [
    "0 9 * * *",
    "*/15 * * * *",
    "30 2 * * 1-5",
    "0 */6 * * *",
    "0 0 1 * *",
    "45 23 * * 0",
    "0 6,18 * * *",
    "0 12 15 * 1",
];

const REGIONS: [&str; 4] = ["east", "west", "north", "south"];

/// A CLI tool to generate recorded flow group responses for replay
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "flow_groups.json")]
    output: String,

    /// The number of flow groups to generate
    #[arg(short, long, default_value_t = 24)]
    count: usize,

    /// The maximum number of flow versions per flow group
    #[arg(long, default_value_t = 4)]
    max_versions: u32,

    /// The maximum number of clocks per flow group
    #[arg(long, default_value_t = 3)]
    max_clocks: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.max_versions == 0 {
        eprintln!("Error: --max-versions must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating {} flow groups (up to {} versions and {} clocks each)...",
        cli.count, cli.max_versions, cli.max_clocks
    );

    let flow_groups: Vec<Value> = (0..cli.count)
        .map(|i| generate_flow_group(&mut rng, i, &cli))
        .collect();

    let response = json!({ "data": { "flow_group": flow_groups } });
    fs::write(&cli.output, serde_json::to_string_pretty(&response)?)?;

    println!(
        "Successfully generated and saved {} flow groups to '{}'",
        cli.count, cli.output
    );

    Ok(())
}

fn pick<'a>(rng: &mut ThreadRng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// One flow group with its versions and a random schedule.
fn generate_flow_group(rng: &mut ThreadRng, index: usize, cli: &Cli) -> Value {
    let project = pick(rng, &PROJECTS);
    let name = format!("{}-{}", pick(rng, &FLOW_NAMES), index);
    let versions = rng.random_range(1..=cli.max_versions);
    let active = rng.random_bool(0.6);

    // Versions come back unordered from the API
    let mut numbers: Vec<u32> = (1..=versions).collect();
    numbers.shuffle(rng);

    let flows: Vec<Value> = numbers
        .into_iter()
        .map(|version| {
            json!({
                "id": format!("flow-{}-{}", index, version),
                "name": name,
                "version": version,
                "is_schedule_active": active && version == versions,
                "project": { "id": format!("project-{}", project), "name": project },
            })
        })
        .collect();

    json!({
        "id": format!("flow-group-{}", index),
        "name": name,
        "labels": [project],
        "schedule": generate_schedule(rng, cli.max_clocks),
        "flows": flows,
    })
}

/// A schedule with zero, one or several clocks, or no schedule at all.
fn generate_schedule(rng: &mut ThreadRng, max_clocks: usize) -> Value {
    if rng.random_bool(0.15) {
        return Value::Null;
    }

    let count = rng.random_range(0..=max_clocks);
    let with_parameters = count > 1 || rng.random_bool(0.2);
    let clocks: Vec<Value> = (0..count)
        .map(|_| {
            if rng.random_bool(0.1) {
                return json!({ "type": "IntervalClock", "interval": 3_600_000_000u64 });
            }
            let mut clock = json!({ "type": "CronClock", "cron": pick(rng, &CRONS) });
            if with_parameters {
                clock["parameter_defaults"] = json!({ "region": pick(rng, &REGIONS) });
            }
            clock
        })
        .collect();

    json!({ "type": "Schedule", "clocks": clocks })
}
