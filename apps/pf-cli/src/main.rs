use clap::{Parser, Subcommand};
use pf_app::{AppResult, CalculationOutcome, calculate, case_service};
use pf_core::UnitSystem;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "PipeFlow CLI - steady pipe-flow head loss and velocity calculator", long_about = None)]
struct Cli {
    /// Log solver details (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a case file
    Validate {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Run the calculation described by a case file
    Calc {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the head loss versus velocity chart series
    Chart {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List pipe materials and their roughness
    Materials {
        /// Unit system for the roughness column
        #[arg(long, default_value = "SI")]
        system: UnitSystem,
    },
    /// List fittings and their loss coefficients
    Accessories,
    /// List tabulated pipe sizes
    Schedules {
        /// Unit system for the diameter column
        #[arg(long, default_value = "SI")]
        system: UnitSystem,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    run(cli.command)
}

fn run(command: Commands) -> AppResult<()> {
    match command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Calc { case_path, json } => cmd_calc(&case_path, json),
        Commands::Chart { case_path, output } => cmd_chart(&case_path, output.as_deref()),
        Commands::Materials { system } => cmd_materials(system),
        Commands::Accessories => cmd_accessories(),
        Commands::Schedules { system } => cmd_schedules(system),
    }
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    info!(case = %case_path.display(), "validate");
    println!("Validating case: {}", case_path.display());
    let case = case_service::load_case(case_path)?;
    case_service::validate_case(&case)?;
    println!("✓ Case is valid");
    Ok(())
}

fn cmd_calc(case_path: &Path, json: bool) -> AppResult<()> {
    info!(case = %case_path.display(), json, "calc");
    let case = case_service::load_case(case_path)?;
    let outcome = calculate(&case)?;
    debug!(solved = outcome.result.is_some(), "calculation finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }
    Ok(())
}

fn print_outcome(outcome: &CalculationOutcome) {
    println!("Case: {} ({})", outcome.name, outcome.system);

    match &outcome.result {
        Some(r) => {
            println!("\nResults:");
            println!("  Velocity V:         {}", r.velocity);
            println!("  Flow rate Q:        {}", r.flow_rate);
            println!("  Reynolds Re:        {} ({})", r.reynolds, r.regime);
            println!("  Friction factor f:  {} ({})", r.friction_factor, r.friction_method);
            println!("  Head loss hL:       {}", r.head_loss);
            println!("  Pressure drop ΔP:   {}", r.pressure_drop);
            println!("  Power:              {}", r.power);
        }
        None => println!("\nNo result."),
    }

    for message in outcome.messages() {
        println!("⚠ {}", message);
    }

    println!(
        "\nChart: {} points, V [{}] vs hL [{}]",
        outcome.chart.len(),
        outcome.chart.velocity_unit,
        outcome.chart.head_loss_unit
    );
}

fn cmd_chart(case_path: &Path, output: Option<&Path>) -> AppResult<()> {
    info!(case = %case_path.display(), output = ?output, "chart");
    let case = case_service::load_case(case_path)?;
    let outcome = calculate(&case)?;
    let csv = outcome.chart.to_csv();

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} chart points to {}",
            outcome.chart.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_materials(system: UnitSystem) -> AppResult<()> {
    debug!(%system, "listing materials");
    let unit = system.labels().length;
    println!("Pipe materials (roughness in {}):", unit);
    for m in pf_tables::materials() {
        println!(
            "  {:<36} {:.3e}",
            m.display_name,
            system.length_from_meters(m.roughness_m)
        );
    }
    println!(
        "Unknown materials use {:.1e} m (commercial steel).",
        pf_tables::DEFAULT_ROUGHNESS_M
    );
    Ok(())
}

fn cmd_accessories() -> AppResult<()> {
    debug!("listing accessories");
    println!("Fittings (loss coefficient K):");
    for a in pf_tables::accessories() {
        println!("  {:<30} {:.2}", a.display_name, a.k);
    }
    println!("Unknown fittings contribute K = 0.");
    Ok(())
}

fn cmd_schedules(system: UnitSystem) -> AppResult<()> {
    debug!(%system, "listing schedules");
    let unit = system.labels().length;
    println!("Tabulated pipe sizes (internal diameter in {}):", unit);
    for p in pf_tables::schedules() {
        println!(
            "  {:>6}\" SCH {:<3} {:.4}",
            p.nominal_in,
            p.schedule,
            system.length_from_meters(p.diameter_m)
        );
    }
    println!("Other nominal values are read as the internal diameter in {}.", unit);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../demos")
            .join(name)
    }

    #[test]
    fn dispatches_case_commands() {
        let case_path = demo("01_water_head_loss_si.yaml");
        run(Commands::Validate {
            case_path: case_path.clone(),
        })
        .unwrap();
        run(Commands::Calc {
            case_path: case_path.clone(),
            json: true,
        })
        .unwrap();

        let out = std::env::temp_dir().join("pf_cli_chart.csv");
        run(Commands::Chart {
            case_path,
            output: Some(out.clone()),
        })
        .unwrap();
        let csv = std::fs::read_to_string(&out).unwrap();
        assert_eq!(csv.lines().count(), 21);
    }

    #[test]
    fn dispatches_listings() {
        run(Commands::Materials {
            system: UnitSystem::Imperial,
        })
        .unwrap();
        run(Commands::Accessories).unwrap();
        run(Commands::Schedules {
            system: UnitSystem::Si,
        })
        .unwrap();
    }

    #[test]
    fn missing_case_is_an_error() {
        let err = run(Commands::Validate {
            case_path: demo("does_not_exist.yaml"),
        })
        .unwrap_err();
        assert!(err.to_string().contains("does_not_exist.yaml"));
    }

    #[test]
    fn parses_global_verbose_flag() {
        let cli = Cli::try_parse_from(["pf-cli", "schedules", "--system", "INGLES", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Schedules {
                system: UnitSystem::Imperial
            }
        ));
    }
}
