//! Trip scheduling and lifecycle operations for the Fleet.

use super::Fleet;
use crate::{
    display::Trips,
    error::Result,
    models::{Trip, TripFilter},
    params::{CreateTrip, Id, ListTrips, UpdateTripStatus},
};

impl Fleet {
    /// Schedules a trip in the `planned` state.
    ///
    /// # Errors
    ///
    /// * `FleetError::InvalidInput` - When the window is missing or reversed,
    ///   or the driver is not a chauffeur
    /// * `FleetError::NotFound` - When a referenced resource doesn't exist
    /// * `FleetError::Unavailable` - When a resource's status forbids it
    /// * `FleetError::Conflict` - When a resource is already bound to an
    ///   overlapping trip
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use fleet_core::{params::CreateTrip, FleetBuilder};
    /// # async {
    /// let fleet = FleetBuilder::new().build().await?;
    /// let trip = fleet
    ///     .schedule_trip(&CreateTrip {
    ///         vehicle_id: 1,
    ///         trailer_id: None,
    ///         driver_id: 2,
    ///         origin: "Lyon".to_string(),
    ///         destination: "Marseille".to_string(),
    ///         start_at: Some("2024-01-15T08:00:00Z".to_string()),
    ///         end_at: Some("2024-01-15T18:00:00Z".to_string()),
    ///     })
    ///     .await?;
    /// # Result::<(), fleet_core::FleetError>::Ok(())
    /// # };
    /// ```
    pub async fn schedule_trip(&self, params: &CreateTrip) -> Result<Trip> {
        let new_trip = params.validate()?;
        self.with_db(move |db| db.create_trip(new_trip)).await
    }

    /// Retrieves a trip by its ID.
    pub async fn get_trip(&self, params: &Id) -> Result<Option<Trip>> {
        let id = params.id;
        self.with_db(move |db| db.get_trip(id)).await
    }

    /// Lists trips matching the filter, earliest departure first.
    pub async fn list_trips(&self, params: &ListTrips) -> Result<Trips> {
        let filter = TripFilter::from(params);
        let trips = self.with_db(move |db| db.list_trips(&filter)).await?;
        Ok(Trips(trips))
    }

    /// Moves a trip to a new status.
    ///
    /// Only `planned → in_progress`, `in_progress → completed` and
    /// cancellation of a non-terminal trip are allowed; anything else fails
    /// with `FleetError::InvalidTransition`.
    pub async fn update_trip_status(&self, params: &UpdateTripStatus) -> Result<Trip> {
        let (id, status, distance_km) = (params.id, params.status, params.distance_km);
        self.with_db(move |db| db.transition_trip(id, status, distance_km))
            .await
    }

    /// Deletes a trip, returning it. Returns `None` if it doesn't exist.
    pub async fn delete_trip(&self, params: &Id) -> Result<Option<Trip>> {
        let id = params.id;
        self.with_db(move |db| {
            let Some(trip) = db.get_trip(id)? else {
                return Ok(None);
            };
            db.delete_trip(id)?;
            Ok(Some(trip))
        })
        .await
    }
}
