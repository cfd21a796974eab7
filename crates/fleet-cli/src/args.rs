use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fleet_core::alerts::DEFAULT_THRESHOLD_KM;

use crate::cli::commands::{
    AlertCommands, DriverCommands, MaintenanceCommands, TireCommands, TrailerCommands,
    TripCommands, UserCommands, VehicleCommands,
};

/// Back-office tool for a road-freight fleet
///
/// Keeps track of vehicles, trailers and drivers, schedules trips without
/// double-booking any of them, and raises tire and maintenance alerts from
/// odometer readings. Every command works on a local SQLite database; `serve`
/// exposes the same operations over MCP (Model Context Protocol) on stdio.
#[derive(Parser)]
#[command(version, about, name = "fleet")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/fleet/fleet.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Distance in km before a tire check at which alerts start
    #[arg(long, global = true, default_value_t = DEFAULT_THRESHOLD_KM)]
    pub tire_threshold_km: u64,

    /// Distance in km before a service at which alerts start
    #[arg(long, global = true, default_value_t = DEFAULT_THRESHOLD_KM)]
    pub maintenance_threshold_km: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level command groups. Without a command the vehicle list is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage vehicles
    #[command(alias = "v")]
    Vehicle {
        #[command(subcommand)]
        command: VehicleCommands,
    },
    /// Manage trailers
    #[command(alias = "tr")]
    Trailer {
        #[command(subcommand)]
        command: TrailerCommands,
    },
    /// Manage user accounts (admins and chauffeurs)
    #[command(alias = "u")]
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Look up chauffeurs
    #[command(alias = "d")]
    Driver {
        #[command(subcommand)]
        command: DriverCommands,
    },
    /// Schedule trips and move them through their lifecycle
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Record tires and their inspection mileage
    Tire {
        #[command(subcommand)]
        command: TireCommands,
    },
    /// Record services and their next due mileage
    #[command(alias = "m")]
    Maintenance {
        #[command(subcommand)]
        command: MaintenanceCommands,
    },
    /// Run mileage checks and manage notifications
    #[command(alias = "a")]
    Alert {
        #[command(subcommand)]
        command: AlertCommands,
    },
    /// Start the MCP server
    Serve,
}
