use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for geoclock
/// CLI application to record geofenced clock in/out events with SQLite
#[derive(Parser)]
#[command(
    name = "geoclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A geofenced time clock CLI: clock in/out inside a work zone and rebuild shifts using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file and the work zone perimeter
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for invalid values")]
        check: bool,

        #[arg(
            long = "set-center",
            num_args = 2,
            value_names = ["LAT", "LON"],
            allow_negative_numbers = true,
            help = "Move the work zone center to the given coordinates"
        )]
        set_center: Option<Vec<f64>>,

        #[arg(
            long = "set-radius",
            value_name = "KM",
            help = "Resize the work zone radius, in kilometers (> 0)"
        )]
        set_radius: Option<f64>,

        #[arg(long = "worker-id", help = "Set the worker id the ledger is scoped to")]
        worker_id: Option<String>,

        #[arg(long = "worker-name", help = "Set the worker display name")]
        worker_name: Option<String>,
    },

    /// Clock in (only permitted inside the work zone)
    In {
        /// Latitude of the current position fix
        #[arg(long, allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,

        /// Longitude of the current position fix
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,

        /// Optional note attached to the event
        #[arg(long)]
        note: Option<String>,
    },

    /// Clock out (a position fix is required, being inside the zone is not)
    Out {
        /// Latitude of the current position fix
        #[arg(long, allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,

        /// Longitude of the current position fix
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,

        /// Optional note attached to the event
        #[arg(long)]
        note: Option<String>,
    },

    /// Show the current clock session state
    Status {
        /// Latitude of the current position fix (to preview the gate)
        #[arg(long, allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,

        /// Longitude of the current position fix
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,
    },

    /// List reconstructed shifts, most recent first
    Shifts {
        #[arg(long, value_name = "N", help = "Show at most N shifts")]
        limit: Option<usize>,

        #[arg(long, help = "Dump the raw event ledger instead of shifts")]
        events: bool,
    },

    /// Export reconstructed shifts
    Export {
        #[arg(long, value_enum, default_value = "csv", help = "Output format")]
        format: ExportFormat,

        #[arg(long = "output", value_name = "PATH", help = "Output file (stdout when omitted)")]
        output: Option<String>,
    },

    /// Print or manage the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
