//! Fleet CLI Application
//!
//! Command-line interface and MCP server for the fleet back office.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use fleet_core::{alerts::AlertThresholds, params::ListVehicles, FleetBuilder};
use log::info;
use mcp::{run_stdio_server, FleetMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        tire_threshold_km,
        maintenance_threshold_km,
        command,
    } = Args::parse();

    let fleet = FleetBuilder::new()
        .with_database_path(database_file)
        .with_alert_thresholds(AlertThresholds {
            tire_km: tire_threshold_km,
            maintenance_km: maintenance_threshold_km,
        })
        .build()
        .await
        .context("Failed to initialize fleet database")?;

    info!("Fleet started with database {}", fleet.database_path().display());

    let cli = Cli::new(fleet, TerminalRenderer::new(!no_color));

    match command {
        Some(Vehicle { command }) => cli.handle_vehicle_command(command).await,
        Some(Trailer { command }) => cli.handle_trailer_command(command).await,
        Some(User { command }) => cli.handle_user_command(command).await,
        Some(Driver { command }) => cli.handle_driver_command(command).await,
        Some(Trip { command }) => cli.handle_trip_command(command).await,
        Some(Tire { command }) => cli.handle_tire_command(command).await,
        Some(Maintenance { command }) => cli.handle_maintenance_command(command).await,
        Some(Alert { command }) => cli.handle_alert_command(command).await,
        Some(Serve) => {
            info!("Starting fleet MCP server");
            run_stdio_server(FleetMcpServer::new(cli.into_fleet()))
                .await
                .context("MCP server failed")
        }
        None => cli.list_vehicles(&ListVehicles::default()).await,
    }
}
