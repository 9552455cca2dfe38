//! Command handlers

use std::path::Path;

use haulplan_app::{Config, PlanOptions, PlanningService, PlanningServiceError};
use haulplan_domain::{CargoSpecs, RouteInput};
use haulplan_infra::{load_cargo_items, load_route};
use haulplan_types::{Error, OutputFormat};
use thiserror::Error;
use tracing::{debug, warn};

use crate::cli::{Cli, Commands, RouteArgs};
use crate::output;

/// Anything a command can fail with
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Core(#[from] Error),

    #[error(transparent)]
    Planning(#[from] PlanningServiceError),
}

pub type Result<T> = std::result::Result<T, CommandError>;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if cli.catalog.is_some() {
        config.truck_catalog = cli.catalog.clone();
    }
    if cli.permits.is_some() {
        config.permit_table = cli.permits.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Plan {
            cargo,
            route,
            strategy,
            pack,
        } => {
            let mut options = PlanOptions::new().with_pack(pack);
            if let Some(route) = resolve_route(&route)? {
                options = options.with_route(route);
            }
            if let Some(strategy) = strategy {
                options = options.with_strategy(strategy);
            }
            cmd_plan(config, &cargo, &options, output_format)
        }

        Commands::Permits {
            length,
            width,
            height,
            weight,
            securement_included,
            route,
        } => {
            let cargo = CargoSpecs {
                width_includes_securement: securement_included,
                ..CargoSpecs::new(length, width, height, weight)
            };
            let route = resolve_route(&route)?.ok_or_else(|| {
                Error::InvalidInput("a route is required: use --states or --route".to_string())
            })?;
            cmd_permits(config, &cargo, &route, output_format)
        }

        Commands::Fit { cargo } => cmd_fit(config, &cargo, output_format),

        Commands::Trucks { id } => cmd_trucks(config, id.as_deref(), output_format),

        Commands::Config {
            show,
            set_catalog,
            set_permits,
            set_output,
            set_state_distance,
            set_tractor_weight,
            set_pack,
            reset,
        } => cmd_config(
            show,
            ConfigUpdate {
                catalog: set_catalog,
                permits: set_permits,
                output: set_output,
                state_distance: set_state_distance,
                tractor_weight: set_tractor_weight,
                pack: set_pack,
            },
            reset,
        ),
    }
}

/// Build a route from a file or from `--states`/`--distance`; `None` when
/// neither was given
fn resolve_route(args: &RouteArgs) -> Result<Option<RouteInput>> {
    let mut route = match &args.route {
        Some(path) => load_route(path)?,
        None if args.states.is_empty() => {
            if !args.distances.is_empty() {
                return Err(Error::InvalidInput(
                    "--distance needs a route: use --states or --route".to_string(),
                )
                .into());
            }
            return Ok(None);
        }
        None => RouteInput::new(&args.states),
    };
    for (code, miles) in &args.distances {
        route = route.with_distance(code, *miles);
    }
    debug!(states = ?route.states, "route resolved");
    Ok(Some(route))
}

fn cmd_plan(
    config: Config,
    cargo: &Path,
    options: &PlanOptions,
    output_format: OutputFormat,
) -> Result<()> {
    let items = load_cargo_items(cargo)?;
    let service = PlanningService::from_config(config)?;
    let report = service.plan(&items, options)?;
    output::output_plan(output_format, &report)?;
    Ok(())
}

fn cmd_permits(
    config: Config,
    cargo: &CargoSpecs,
    route: &RouteInput,
    output_format: OutputFormat,
) -> Result<()> {
    let service = PlanningService::from_config(config)?;
    if service.permit_table().is_empty() {
        warn!("no permit table configured; every state uses the federal estimate");
    }
    let summary = service.estimate_permits(cargo, route);
    output::output_permits(output_format, &summary)?;
    Ok(())
}

fn cmd_fit(config: Config, cargo: &Path, output_format: OutputFormat) -> Result<()> {
    let items = load_cargo_items(cargo)?;
    let service = PlanningService::from_config(config)?;
    let report = service.fit_report(&items)?;
    output::output_fit(output_format, &report)?;
    Ok(())
}

fn cmd_trucks(config: Config, id: Option<&str>, output_format: OutputFormat) -> Result<()> {
    let service = PlanningService::from_config(config)?;
    match id {
        Some(id) => output::output_truck(output_format, service.truck(id)?)?,
        None => output::output_trucks(output_format, service.catalog())?,
    }
    Ok(())
}

/// Requested config changes
struct ConfigUpdate {
    catalog: Option<std::path::PathBuf>,
    permits: Option<std::path::PathBuf>,
    output: Option<OutputFormat>,
    state_distance: Option<f64>,
    tractor_weight: Option<f64>,
    pack: Option<bool>,
}

fn cmd_config(show: bool, update: ConfigUpdate, reset: bool) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(path) = update.catalog {
        config.truck_catalog = Some(path);
        modified = true;
    }

    if let Some(path) = update.permits {
        config.permit_table = Some(path);
        modified = true;
    }

    if let Some(output_format) = update.output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(miles) = update.state_distance {
        if !miles.is_finite() || miles < 0.0 {
            return Err(Error::InvalidInput(format!(
                "state distance must be non-negative, got {}",
                miles
            ))
            .into());
        }
        config.default_state_distance_miles = miles;
        modified = true;
    }

    if let Some(lbs) = update.tractor_weight {
        if !lbs.is_finite() || lbs < 0.0 {
            return Err(Error::InvalidInput(format!(
                "tractor weight must be non-negative, got {}",
                lbs
            ))
            .into());
        }
        config.tractor_weight_lbs = lbs;
        modified = true;
    }

    if let Some(pack) = update.pack {
        config.pack_loads = pack;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
