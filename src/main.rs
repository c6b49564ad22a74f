use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lunchbox_planner_rs::cli::{Cli, Command, PlannerArgs};
use lunchbox_planner_rs::error::Result;
use lunchbox_planner_rs::interface::{
    collect_roster, display_catalog, display_lunchbox_plan, format_lunchbox_plan, prompt_yes_no,
};
use lunchbox_planner_rs::persistence::{load_request, save_plan, save_request, write_grocery_csv};
use lunchbox_planner_rs::planner::meals_for_age;
use lunchbox_planner_rs::service::LunchboxService;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so plan JSON on stdout stays clean.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            request,
            output,
            grocery_csv,
            text,
            planner,
        } => cmd_plan(&request, output, grocery_csv, text, &planner),
        Command::Roster { planner } => cmd_roster(&planner),
        Command::Catalog { age } => {
            display_catalog(age, &meals_for_age(age));
            Ok(())
        }
    }
}

/// Generate a plan from a request file.
fn cmd_plan(
    request_path: &Path,
    output: Option<PathBuf>,
    grocery_csv: Option<PathBuf>,
    text: bool,
    planner: &PlannerArgs,
) -> Result<()> {
    let request = load_request(request_path)?;
    let service = LunchboxService::from_config(planner.to_config())?;
    let generated = service.generate(&request)?;

    if let Some(path) = &grocery_csv {
        write_grocery_csv(path, &generated.plan.grocery_list)?;
        eprintln!("Grocery list written to {}", path.display());
    }

    match output {
        Some(path) => {
            save_plan(&path, &generated.plan)?;
            eprintln!("Plan written to {}", path.display());
        }
        None if text => print!("{}", format_lunchbox_plan(&generated.plan)),
        None => println!("{}", serde_json::to_string_pretty(&generated.plan)?),
    }

    Ok(())
}

/// Collect a roster interactively, then plan and display it.
fn cmd_roster(planner: &PlannerArgs) -> Result<()> {
    let request = collect_roster()?;
    if request.children.is_empty() {
        println!("No children entered.");
        return Ok(());
    }

    let service = LunchboxService::from_config(planner.to_config())?;
    let generated = service.generate(&request)?;
    display_lunchbox_plan(&generated.plan, generated.source);

    if prompt_yes_no("Save the roster as a request file?", false)? {
        save_request("lunchbox_request.json", &request)?;
        println!("Roster saved to lunchbox_request.json");
    }

    if prompt_yes_no("Save the plan as JSON?", false)? {
        save_plan("lunchbox_plan.json", &generated.plan)?;
        println!("Plan saved to lunchbox_plan.json");
    }

    if prompt_yes_no("Export the grocery list as CSV?", false)? {
        write_grocery_csv("grocery_list.csv", &generated.plan.grocery_list)?;
        println!("Grocery list saved to grocery_list.csv");
    }

    Ok(())
}
