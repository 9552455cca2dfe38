//! CLI definition using clap

use clap::{Parser, Subcommand};
use haulplan_domain::PlanStrategy;
use haulplan_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "haulplan")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Freight load planning with per-state permit and escort cost estimates")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Truck catalog file (JSON or TOML). Overrides config.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// State permit table (JSON or TOML). Overrides config.
    #[arg(long, global = true)]
    pub permits: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Route given either as a file or as `--states` plus `--distance`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RouteArgs {
    /// Route file (JSON or TOML) with `states` and `distances`
    #[arg(long, conflicts_with = "states")]
    pub route: Option<PathBuf>,

    /// States on the route in travel order (e.g., TX,OK,KS)
    #[arg(long, value_delimiter = ',')]
    pub states: Vec<String>,

    /// Miles within a state (e.g., TX=310). Repeatable.
    #[arg(long = "distance", value_parser = parse_distance)]
    pub distances: Vec<(String, f64)>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plan truck loads for a cargo manifest
    Plan {
        /// Cargo manifest (CSV or JSON)
        cargo: PathBuf,

        #[command(flatten)]
        route: RouteArgs,

        /// Run one strategy (recommended, legal-only, fastest, max-safety, best-placement)
        #[arg(long, short = 's')]
        strategy: Option<PlanStrategy>,

        /// Pack loads that share a truck type onto as few trucks as possible
        #[arg(long)]
        pack: bool,
    },

    /// Estimate permit and escort costs for one load along a route
    Permits {
        /// Cargo length (ft)
        #[arg(long)]
        length: f64,

        /// Cargo width (ft)
        #[arg(long)]
        width: f64,

        /// Overall transport height including the deck (ft)
        #[arg(long)]
        height: f64,

        /// Gross vehicle weight (lbs)
        #[arg(long)]
        weight: f64,

        /// Width was measured including chains and binders
        #[arg(long)]
        securement_included: bool,

        #[command(flatten)]
        route: RouteArgs,
    },

    /// Score every cargo unit against every truck
    Fit {
        /// Cargo manifest (CSV or JSON)
        cargo: PathBuf,
    },

    /// List the active truck catalog, or show one truck
    Trucks {
        /// Truck id or name
        id: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set truck catalog file
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Set permit table file
        #[arg(long)]
        set_permits: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set miles assumed for a state without a distance
        #[arg(long)]
        set_state_distance: Option<f64>,

        /// Set tractor weight (lbs)
        #[arg(long)]
        set_tractor_weight: Option<f64>,

        /// Enable/disable packing by default
        #[arg(long)]
        set_pack: Option<bool>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Parse `CODE=MILES`
fn parse_distance(value: &str) -> Result<(String, f64), String> {
    let (code, miles) = value
        .split_once('=')
        .ok_or_else(|| format!("expected STATE=MILES, got '{}'", value))?;
    let miles: f64 = miles
        .trim()
        .parse()
        .map_err(|_| format!("invalid miles '{}'", miles))?;
    if !miles.is_finite() || miles < 0.0 {
        return Err(format!("miles must be non-negative, got {}", miles));
    }
    Ok((code.trim().to_uppercase(), miles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_distance() {
        assert_eq!(parse_distance("tx=310").unwrap(), ("TX".to_string(), 310.0));
        assert!(parse_distance("TX").is_err());
        assert!(parse_distance("TX=-4").is_err());
        assert!(parse_distance("TX=far").is_err());
    }

    #[test]
    fn test_plan_args() {
        let cli = Cli::try_parse_from([
            "haulplan", "plan", "cargo.csv", "--states", "TX,OK", "--distance", "TX=310",
            "--strategy", "legal-only", "--pack", "-f", "json",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Plan {
                route,
                strategy,
                pack,
                ..
            } => {
                assert_eq!(route.states, vec!["TX", "OK"]);
                assert_eq!(route.distances, vec![("TX".to_string(), 310.0)]);
                assert_eq!(strategy, Some(PlanStrategy::LegalOnly));
                assert!(pack);
            }
            _ => panic!("expected plan command"),
        }
    }

    #[test]
    fn test_trucks_takes_optional_id() {
        let cli = Cli::try_parse_from(["haulplan", "trucks"]).unwrap();
        assert!(matches!(cli.command, Commands::Trucks { id: None }));

        let cli = Cli::try_parse_from(["haulplan", "trucks", "rgn"]).unwrap();
        match cli.command {
            Commands::Trucks { id } => assert_eq!(id.as_deref(), Some("rgn")),
            _ => panic!("expected trucks command"),
        }
    }

    #[test]
    fn test_route_file_conflicts_with_states() {
        let result = Cli::try_parse_from([
            "haulplan", "plan", "cargo.csv", "--route", "r.json", "--states", "TX",
        ]);
        assert!(result.is_err());
    }
}
