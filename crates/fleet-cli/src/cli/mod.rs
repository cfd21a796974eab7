//! Command handlers for the terminal interface.
//!
//! [`Cli`] turns parsed arguments into core parameters, calls the matching
//! [`Fleet`] operation and renders the markdown result.

use std::fmt::Display;

use anyhow::{anyhow, bail, Context, Result};
use fleet_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    models::{EntityClass, TripStatus, UserRole},
    params::{Availability, Id, ListUsers, ListVehicles, UpdateTripStatus},
    Fleet,
};
use log::debug;

use crate::renderer::TerminalRenderer;

pub mod commands;

use commands::{
    AlertCommands, DeleteArgs, DriverCommands, MaintenanceCommands, TireCommands,
    TrailerCommands, TripCommands, UserCommands, VehicleCommands, WindowArgs,
};

/// Runs one command against the fleet and prints the outcome.
pub struct Cli {
    fleet: Fleet,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(fleet: Fleet, renderer: TerminalRenderer) -> Self {
        Self { fleet, renderer }
    }

    /// Hands the fleet over to another front end.
    pub fn into_fleet(self) -> Fleet {
        self.fleet
    }

    fn render(&self, output: impl Display) -> Result<()> {
        self.renderer.render(&output.to_string())
    }

    fn require_confirmation(kind: &str, args: &DeleteArgs) -> Result<()> {
        if !args.confirm {
            bail!(
                "Refusing to delete {kind} {} without --confirm; this cannot be undone",
                args.id
            );
        }
        Ok(())
    }

    async fn render_available(&self, class: EntityClass, args: WindowArgs) -> Result<()> {
        let params = Availability::from(args);
        debug!("available {class}: {params:?}");

        let available = self
            .fleet
            .find_available(class, &params)
            .await
            .with_context(|| format!("Failed to look up available {class}s"))?;

        let heading = match class {
            EntityClass::Vehicle => "Available vehicles",
            EntityClass::Trailer => "Available trailers",
            EntityClass::Driver => "Available drivers",
        };
        self.render(format!("# {heading} ({})\n\n{available}", available.len()))
    }

    /// Default view when no command is given.
    pub async fn list_vehicles(&self, params: &ListVehicles) -> Result<()> {
        let vehicles = self
            .fleet
            .list_vehicles(params)
            .await
            .context("Failed to list vehicles")?;
        self.render(vehicles)
    }

    pub async fn handle_vehicle_command(&self, command: VehicleCommands) -> Result<()> {
        match command {
            VehicleCommands::Create(args) => {
                let vehicle = self
                    .fleet
                    .create_vehicle(&args.into())
                    .await
                    .context("Failed to create vehicle")?;
                self.render(CreateResult::new(vehicle))
            }
            VehicleCommands::List(args) => self.list_vehicles(&args.into()).await,
            VehicleCommands::Show(args) => {
                let id = args.id;
                let vehicle = self
                    .fleet
                    .get_vehicle(&args.into())
                    .await
                    .context("Failed to get vehicle")?
                    .ok_or_else(|| anyhow!("Vehicle with ID {id} not found"))?;
                self.render(vehicle)
            }
            VehicleCommands::Update(args) => {
                let id = args.id;
                let vehicle = self
                    .fleet
                    .update_vehicle(&args.into())
                    .await
                    .context("Failed to update vehicle")?
                    .ok_or_else(|| anyhow!("Vehicle with ID {id} not found"))?;
                self.render(UpdateResult::new(vehicle))
            }
            VehicleCommands::Delete(args) => {
                Self::require_confirmation("vehicle", &args)?;
                let id = args.id;
                let vehicle = self
                    .fleet
                    .delete_vehicle(&Id { id })
                    .await
                    .context("Failed to delete vehicle")?
                    .ok_or_else(|| anyhow!("Vehicle with ID {id} not found"))?;
                self.render(DeleteResult::new(vehicle))
            }
            VehicleCommands::Available(args) => {
                self.render_available(EntityClass::Vehicle, args).await
            }
        }
    }

    pub async fn handle_trailer_command(&self, command: TrailerCommands) -> Result<()> {
        match command {
            TrailerCommands::Create(args) => {
                let trailer = self
                    .fleet
                    .create_trailer(&args.into())
                    .await
                    .context("Failed to create trailer")?;
                self.render(CreateResult::new(trailer))
            }
            TrailerCommands::List(args) => {
                let trailers = self
                    .fleet
                    .list_trailers(&args.into())
                    .await
                    .context("Failed to list trailers")?;
                self.render(trailers)
            }
            TrailerCommands::Show(args) => {
                let id = args.id;
                let trailer = self
                    .fleet
                    .get_trailer(&args.into())
                    .await
                    .context("Failed to get trailer")?
                    .ok_or_else(|| anyhow!("Trailer with ID {id} not found"))?;
                self.render(trailer)
            }
            TrailerCommands::Update(args) => {
                let id = args.id;
                let trailer = self
                    .fleet
                    .update_trailer(&args.into())
                    .await
                    .context("Failed to update trailer")?
                    .ok_or_else(|| anyhow!("Trailer with ID {id} not found"))?;
                self.render(UpdateResult::new(trailer))
            }
            TrailerCommands::Delete(args) => {
                Self::require_confirmation("trailer", &args)?;
                let id = args.id;
                let trailer = self
                    .fleet
                    .delete_trailer(&Id { id })
                    .await
                    .context("Failed to delete trailer")?
                    .ok_or_else(|| anyhow!("Trailer with ID {id} not found"))?;
                self.render(DeleteResult::new(trailer))
            }
            TrailerCommands::Available(args) => {
                self.render_available(EntityClass::Trailer, args).await
            }
        }
    }

    pub async fn handle_user_command(&self, command: UserCommands) -> Result<()> {
        match command {
            UserCommands::Create(args) => {
                let user = self
                    .fleet
                    .create_user(&args.into())
                    .await
                    .context("Failed to create user")?;
                self.render(CreateResult::new(user))
            }
            UserCommands::List(args) => {
                let users = self
                    .fleet
                    .list_users(&args.into())
                    .await
                    .context("Failed to list users")?;
                self.render(users)
            }
            UserCommands::Show(args) => {
                let id = args.id;
                let user = self
                    .fleet
                    .get_user(&args.into())
                    .await
                    .context("Failed to get user")?
                    .ok_or_else(|| anyhow!("User with ID {id} not found"))?;
                self.render(user)
            }
            UserCommands::Delete(args) => {
                Self::require_confirmation("user", &args)?;
                let id = args.id;
                let user = self
                    .fleet
                    .delete_user(&Id { id })
                    .await
                    .context("Failed to delete user")?
                    .ok_or_else(|| anyhow!("User with ID {id} not found"))?;
                self.render(DeleteResult::new(user))
            }
        }
    }

    pub async fn handle_driver_command(&self, command: DriverCommands) -> Result<()> {
        match command {
            DriverCommands::List => {
                let drivers = self
                    .fleet
                    .list_users(&ListUsers {
                        role: Some(UserRole::Chauffeur),
                    })
                    .await
                    .context("Failed to list drivers")?;
                self.render(drivers)
            }
            DriverCommands::Available(args) => {
                self.render_available(EntityClass::Driver, args).await
            }
        }
    }

    async fn transition(&self, params: UpdateTripStatus) -> Result<()> {
        debug!("trip transition: {params:?}");
        let trip = self
            .fleet
            .update_trip_status(&params)
            .await
            .with_context(|| format!("Failed to update trip {}", params.id))?;

        let mut changes = vec![format!("status: {}", trip.status)];
        if let Some(distance) = params.distance_km {
            changes.push(format!("vehicle {} mileage: +{distance} km", trip.vehicle_id));
        }
        self.render(UpdateResult::with_changes(trip, changes))
    }

    pub async fn handle_trip_command(&self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::Create(args) => {
                let trip = self
                    .fleet
                    .schedule_trip(&args.into())
                    .await
                    .context("Failed to schedule trip")?;
                self.render(CreateResult::new(trip))
            }
            TripCommands::List(args) => {
                let trips = self
                    .fleet
                    .list_trips(&args.into())
                    .await
                    .context("Failed to list trips")?;
                self.render(trips)
            }
            TripCommands::Show(args) => {
                let id = args.id;
                let trip = self
                    .fleet
                    .get_trip(&args.into())
                    .await
                    .context("Failed to get trip")?
                    .ok_or_else(|| anyhow!("Trip with ID {id} not found"))?;
                self.render(trip)
            }
            TripCommands::Start(args) => {
                self.transition(UpdateTripStatus {
                    id: args.id,
                    status: TripStatus::InProgress,
                    distance_km: None,
                })
                .await
            }
            TripCommands::Complete(args) => self.transition(args.into()).await,
            TripCommands::Cancel(args) => {
                self.transition(UpdateTripStatus {
                    id: args.id,
                    status: TripStatus::Cancelled,
                    distance_km: None,
                })
                .await
            }
            TripCommands::Delete(args) => {
                Self::require_confirmation("trip", &args)?;
                let id = args.id;
                let trip = self
                    .fleet
                    .delete_trip(&Id { id })
                    .await
                    .context("Failed to delete trip")?
                    .ok_or_else(|| anyhow!("Trip with ID {id} not found"))?;
                self.render(DeleteResult::new(trip))
            }
        }
    }

    pub async fn handle_tire_command(&self, command: TireCommands) -> Result<()> {
        match command {
            TireCommands::Add(args) => {
                let tire = self
                    .fleet
                    .add_tire(&args.into())
                    .await
                    .context("Failed to add tire")?;
                self.render(CreateResult::new(tire))
            }
            TireCommands::List(args) => {
                let tires = self
                    .fleet
                    .list_tires(&args.into())
                    .await
                    .context("Failed to list tires")?;
                self.render(tires)
            }
            TireCommands::Delete(args) => {
                Self::require_confirmation("tire", &args)?;
                let id = args.id;
                self.fleet
                    .delete_tire(&Id { id })
                    .await
                    .context("Failed to delete tire")?;
                self.render(OperationStatus::success(format!("Deleted tire {id}")))
            }
        }
    }

    pub async fn handle_maintenance_command(&self, command: MaintenanceCommands) -> Result<()> {
        match command {
            MaintenanceCommands::Record(args) => {
                let record = self
                    .fleet
                    .record_maintenance(&args.into())
                    .await
                    .context("Failed to record maintenance")?;
                self.render(CreateResult::new(record))
            }
            MaintenanceCommands::List(args) => {
                let log = self
                    .fleet
                    .list_maintenance(&args.into())
                    .await
                    .context("Failed to list maintenance")?;
                self.render(log)
            }
        }
    }

    pub async fn handle_alert_command(&self, command: AlertCommands) -> Result<()> {
        match command {
            AlertCommands::Check { tires, maintenance } => {
                let report = match (tires, maintenance) {
                    (true, false) => self.fleet.check_tire_alerts().await,
                    (false, true) => self.fleet.check_maintenance_alerts().await,
                    _ => self.fleet.check_alerts().await,
                }
                .context("Failed to check alerts")?;
                self.render(report)
            }
            AlertCommands::List(args) => {
                let notifications = self
                    .fleet
                    .list_notifications(&args.into())
                    .await
                    .context("Failed to list notifications")?;
                self.render(notifications)
            }
            AlertCommands::Resolve(args) => {
                let id = args.id;
                let resolved = self
                    .fleet
                    .resolve_notification(&args.into())
                    .await
                    .context("Failed to resolve notification")?;
                let status = if resolved {
                    OperationStatus::success(format!("Resolved notification {id}"))
                } else {
                    OperationStatus::failure(format!("Notification {id} was already resolved"))
                };
                self.render(status)
            }
        }
    }
}
