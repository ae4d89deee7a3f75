use clap::{Parser, Subcommand};
use si_units::output;
use si_units::units::{self, table, ConversionError};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "si-units")]
#[command(about = "Convert compound unit expressions to SI units", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a unit expression to its SI name and multiplication factor
    Convert {
        /// Unit expression (e.g., "(second*ha)/(litre*tonne*h)"); omitted means empty
        units: Option<String>,

        /// TOML config file with an [output] table
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Decimal places for the multiplication factor (overrides config)
        #[arg(long)]
        precision: Option<u32>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List every known unit with its factor and SI symbol
    Table {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            units,
            config,
            precision,
            pretty,
        } => match convert_units(units.as_deref(), config, precision, pretty) {
            Ok(_) => {}
            Err(e) => {
                match e
                    .downcast_ref::<ConversionError>()
                    .and_then(ConversionError::bad_request_message)
                {
                    Some(message) => eprintln!("{}", message),
                    None => eprintln!("Error: {}", e),
                }
                std::process::exit(1);
            }
        },
        Commands::Table { pretty } => match list_units(pretty) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

fn convert_units(
    expression: Option<&str>,
    config_path: Option<PathBuf>,
    precision: Option<u32>,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => {
            tracing::info!("Loading config file: {}", path.display());
            output::Config::load_from_file(&path)?
        }
        None => output::Config::empty(),
    };

    let mut output_config = config.output;
    if let Some(precision) = precision {
        output_config.precision = precision;
    }
    output_config.pretty |= pretty;

    let result = units::convert(expression)?;
    let json = output::format_conversion(&result, &output_config)?;
    println!("{}", json);

    Ok(())
}

fn list_units(pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let json = output::format_table(table::entries(), pretty)?;
    println!("{}", json);

    Ok(())
}
