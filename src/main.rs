//! fitunits
//!
//! Converts heights and weights given on the command line and prints both
//! representations as JSON, one line per argument.
//!
//! Usage: fitunits [--system metric|imperial] <measurement>...
//!        fitunits --version

use fitunits::build_info;
use fitunits::conversion::{UnitConverter, UnitSystem};
use fitunits::models::parse_measurement_with;
use fitunits::DomainLimits;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: fitunits [--system metric|imperial] <measurement>...\n\
                     Examples: fitunits 170cm \"5'7\\\"\" 70kg \"154 lbs\"";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays machine-readable; RUST_LOG wins when set
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fitunits=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let mut system: Option<UnitSystem> = None;
    let mut inputs = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-V" | "--version" => {
                eprintln!("{}", build_info::banner());
                println!("{}", serde_json::to_string(&build_info::BuildInfo::current())?);
                return Ok(());
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            "-s" | "--system" => {
                let value = args.next().ok_or("--system requires a value")?;
                system = Some(
                    UnitSystem::from_str(&value)
                        .ok_or_else(|| format!("Unknown unit system '{}'", value))?,
                );
            }
            _ => inputs.push(arg),
        }
    }

    if inputs.is_empty() {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }

    let limits = DomainLimits::from_env()?;
    let converter = UnitConverter::new(limits);

    let mut failed = false;
    for input in &inputs {
        match parse_measurement_with(&converter, input) {
            Ok(measurement) => match system {
                Some(system) => println!("{}", measurement.display(system)),
                None => println!("{}", serde_json::to_string(&measurement)?),
            },
            Err(e) => {
                tracing::error!("Could not convert '{}': {}", input, e);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }

    Ok(())
}
