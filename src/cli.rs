use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{PlannerConfig, RemoteConfig, StarvationPolicy, DEFAULT_REMOTE_TIMEOUT_SECS};
use crate::planner::constants::MAX_MAIN_REDRAWS;

/// Lunchbox planner: allergen-safe, age-appropriate school lunches and shopping lists.
#[derive(Parser, Debug)]
#[command(name = "lunchbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a plan from a JSON request file.
    Plan {
        /// Path to the request JSON ({"children": [...], "days": n}).
        #[arg(short, long)]
        request: PathBuf,

        /// Write the plan JSON here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also export the grocery list as CSV.
        #[arg(long)]
        grocery_csv: Option<PathBuf>,

        /// Print a human-readable plan to stdout instead of JSON.
        #[arg(long, conflicts_with = "output")]
        text: bool,

        #[command(flatten)]
        planner: PlannerArgs,
    },

    /// Enter a roster interactively and generate a plan.
    Roster {
        #[command(flatten)]
        planner: PlannerArgs,
    },

    /// Show the catalog for an age.
    Catalog {
        /// Child's age in years.
        #[arg(long)]
        age: u32,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Roster {
            planner: PlannerArgs::default(),
        }
    }
}

/// Options shared by every command that generates a plan.
#[derive(Args, Debug, Clone)]
pub struct PlannerArgs {
    /// Seed for reproducible plans.
    #[arg(long, env = "LUNCHBOX_SEED")]
    pub seed: Option<u64>,

    /// Remote meal planner endpoint; the rule-based engine is the fallback.
    #[arg(long, env = "LUNCHBOX_REMOTE_URL")]
    pub remote_url: Option<String>,

    /// Remote planner timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_REMOTE_TIMEOUT_SECS)]
    pub remote_timeout_secs: u64,

    /// What to do when allergies and preferences rule out every item in a food group.
    #[arg(long, value_enum, default_value_t = StarvationPolicy::Staple)]
    pub on_starvation: StarvationPolicy,

    /// Redraws allowed to avoid repeating yesterday's main dish.
    #[arg(long, default_value_t = MAX_MAIN_REDRAWS)]
    pub max_main_redraws: u32,
}

impl Default for PlannerArgs {
    fn default() -> Self {
        Self {
            seed: None,
            remote_url: None,
            remote_timeout_secs: DEFAULT_REMOTE_TIMEOUT_SECS,
            on_starvation: StarvationPolicy::default(),
            max_main_redraws: MAX_MAIN_REDRAWS,
        }
    }
}

impl PlannerArgs {
    pub fn to_config(&self) -> PlannerConfig {
        PlannerConfig {
            starvation: self.on_starvation,
            max_main_redraws: self.max_main_redraws,
            seed: self.seed,
            remote: self.remote_url.as_ref().map(|endpoint| RemoteConfig {
                endpoint: endpoint.clone(),
                timeout_secs: self.remote_timeout_secs,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_command() {
        let cli = Cli::try_parse_from([
            "lunchbox",
            "plan",
            "--request",
            "req.json",
            "--seed",
            "7",
            "--on-starvation",
            "fail",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Plan {
                request, planner, ..
            }) => {
                assert_eq!(request, PathBuf::from("req.json"));
                let config = planner.to_config();
                assert_eq!(config.seed, Some(7));
                assert_eq!(config.starvation, StarvationPolicy::Fail);
                assert_eq!(config.max_main_redraws, MAX_MAIN_REDRAWS);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_text_conflicts_with_output() {
        let result = Cli::try_parse_from([
            "lunchbox",
            "plan",
            "--request",
            "req.json",
            "--output",
            "plan.json",
            "--text",
        ]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        let cli =
            Cli::try_parse_from(["lunchbox", "plan", "--request", "req.json", "--text"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Plan { text: true, .. })));
    }

    #[test]
    fn test_remote_args_build_remote_config() {
        let args = PlannerArgs {
            remote_url: Some("http://localhost:8000/plan".to_string()),
            remote_timeout_secs: 5,
            ..Default::default()
        };
        let remote = args.to_config().remote.unwrap();
        assert_eq!(remote.endpoint, "http://localhost:8000/plan");
        assert_eq!(remote.timeout_secs, 5);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
