use anyhow::Context;
use clap::{Parser, Subcommand};
use scaliger_core::{mean_obliquity, nutation, true_obliquity};
use scaliger_time::{
    date_string_to_julian, julian_to_date_string, julian_to_sidereal, now_julian,
    parse_julian_day, SiderealOptions,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scaliger")]
#[command(about = "Julian Day, nutation, obliquity and sidereal time calculator")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a UTC date (y-mm-ddThh:mm:ssZ) to a Julian Day
    Cal2jd {
        /// Date to convert; defaults to the current time
        date: Option<String>,
    },
    /// Convert a Julian Day to a UTC date string
    Jd2cal {
        /// Julian Day number
        #[arg(allow_hyphen_values = true)]
        jd: String,
    },
    /// Nutation in longitude and obliquity, in degrees
    Nutation {
        /// Julian Day number or UTC date string
        #[arg(allow_hyphen_values = true)]
        moment: String,
    },
    /// Obliquity of the ecliptic, in degrees
    Obliquity {
        /// Julian Day number or UTC date string
        #[arg(allow_hyphen_values = true)]
        moment: String,
        /// Include nutation in obliquity
        #[arg(long = "true")]
        true_obliquity: bool,
    },
    /// Sidereal time, in hours
    Sidereal {
        /// Julian Day number or UTC date string
        #[arg(allow_hyphen_values = true)]
        moment: String,
        /// Observer longitude in degrees, negative westwards
        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<f64>,
        /// Apply the equation of the equinoxes
        #[arg(long)]
        apparent: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Cal2jd { date } => {
            let jd = match date {
                Some(text) => date_string_to_julian(&text).with_context(|| {
                    format!(
                        "Invalid date: {}. Please, use format: y-mm-ddThh:mm:ssZ",
                        text
                    )
                })?,
                None => now_julian(),
            };
            tracing::debug!(jd, "converted date");
            println!("{:.8}", jd);
        }
        Commands::Jd2cal { jd } => {
            let jd = parse_julian_day(&jd)?;
            println!("{}", julian_to_date_string(jd));
        }
        Commands::Nutation { moment } => {
            let jd = parse_moment(&moment)?;
            let n = nutation(jd);
            println!("dpsi: {:.8}", n.delta_psi);
            println!("deps: {:.8}", n.delta_eps);
        }
        Commands::Obliquity {
            moment,
            true_obliquity: with_nutation,
        } => {
            let jd = parse_moment(&moment)?;
            let eps = if with_nutation {
                true_obliquity(jd, nutation(jd).delta_eps)
            } else {
                mean_obliquity(jd)
            };
            println!("{:.8}", eps);
        }
        Commands::Sidereal {
            moment,
            longitude,
            apparent,
        } => {
            let jd = parse_moment(&moment)?;
            let mut options = SiderealOptions::new();
            if apparent {
                options = options.apparent_at(jd);
            }
            if let Some(lng) = longitude {
                options = options.with_longitude(lng);
            }
            tracing::debug!(jd, ?options, "computing sidereal time");
            println!("{} {:.8}", options.kind(), julian_to_sidereal(jd, &options));
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Accepts either a Julian Day number or a date string.
fn parse_moment(text: &str) -> anyhow::Result<f64> {
    if let Ok(jd) = parse_julian_day(text) {
        return Ok(jd);
    }
    date_string_to_julian(text)
        .with_context(|| format!("'{}' is neither a Julian Day nor a date", text))
}
