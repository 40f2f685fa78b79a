use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use vp_app::{AppResult, CurveRequest, compound_service, curve_service};

#[derive(Parser)]
#[command(name = "vp-cli")]
#[command(about = "vaporpoint CLI - boiling-point curve estimation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a compound table
    Validate {
        /// Path to the compound CSV table
        data_path: PathBuf,
    },
    /// List compounds in a table, in source order
    List {
        /// Path to the compound CSV table
        data_path: PathBuf,
    },
    /// Show the reference data for one compound
    Show {
        /// Path to the compound CSV table
        data_path: PathBuf,
        /// Compound name (exact, case-sensitive)
        name: String,
    },
    /// Generate a boiling-point curve over a pressure interval
    Curve {
        /// Path to the compound CSV table
        data_path: PathBuf,
        /// Compound name (exact, case-sensitive)
        name: String,
        /// Lower pressure bound in torr
        #[arg(long, default_value_t = 1.0)]
        min: f64,
        /// Upper pressure bound in torr
        #[arg(long, default_value_t = 760.0)]
        max: f64,
        /// Number of evenly spaced samples
        #[arg(long, default_value_t = 1000)]
        samples: usize,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { data_path } => cmd_validate(&data_path),
        Commands::List { data_path } => cmd_list(&data_path),
        Commands::Show { data_path, name } => cmd_show(&data_path, &name),
        Commands::Curve {
            data_path,
            name,
            min,
            max,
            samples,
            output,
            format,
        } => cmd_curve(&data_path, &name, min, max, samples, output.as_deref(), format),
    }
}

fn cmd_validate(data_path: &Path) -> AppResult<()> {
    println!("Validating compound table: {}", data_path.display());
    let repo = compound_service::load_repository(data_path)?;
    println!("✓ Table is valid ({} compounds)", repo.len());
    Ok(())
}

fn cmd_list(data_path: &Path) -> AppResult<()> {
    let repo = compound_service::load_repository(data_path)?;
    let names = compound_service::list_compounds(&repo);

    if names.is_empty() {
        println!("No compounds found in table");
    } else {
        println!("Compounds in table:");
        for name in names {
            println!("  {}", name);
        }
    }
    Ok(())
}

fn cmd_show(data_path: &Path, name: &str) -> AppResult<()> {
    let repo = compound_service::load_repository(data_path)?;
    let summary = compound_service::get_compound(&repo, name)?;

    println!(
        "At {:.1} torr, {} boils at {:.2} °C (vaporization enthalpy {:.3} kJ/mol)",
        summary.reference_pressure_torr,
        summary.name,
        summary.reference_boiling_point_c,
        summary.vapor_enthalpy_kj_mol
    );
    Ok(())
}

fn cmd_curve(
    data_path: &Path,
    name: &str,
    min: f64,
    max: f64,
    samples: usize,
    output: Option<&Path>,
    format: ExportFormat,
) -> AppResult<()> {
    let repo = compound_service::load_repository(data_path)?;
    let curve = curve_service::generate(
        &repo,
        &CurveRequest {
            name,
            min_torr: min,
            max_torr: max,
            samples,
        },
    )?;

    let rendered = match format {
        ExportFormat::Csv => curve_service::to_csv(&curve),
        ExportFormat::Json => curve_service::to_json(&curve)?,
    };

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, rendered)?;
        println!(
            "✓ Exported {} curve points for {} to {}",
            curve.len(),
            curve.compound(),
            path.display()
        );
    } else {
        print!("{}", rendered);
    }

    Ok(())
}
