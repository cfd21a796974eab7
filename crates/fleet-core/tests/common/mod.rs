#![allow(dead_code)]

use fleet_core::{
    models::{Trailer, User, UserRole, Vehicle},
    params::{Availability, CreateTrailer, CreateTrip, CreateUser, CreateVehicle},
    AlertThresholds, Fleet, FleetBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test fleet backed by a fresh database
pub async fn create_test_fleet() -> (TempDir, Fleet) {
    create_test_fleet_with(AlertThresholds::default()).await
}

pub async fn create_test_fleet_with(thresholds: AlertThresholds) -> (TempDir, Fleet) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let fleet = FleetBuilder::new()
        .with_database_path(Some(&db_path))
        .with_alert_thresholds(thresholds)
        .build()
        .await
        .expect("Failed to create fleet");
    (temp_dir, fleet)
}

pub async fn add_vehicle(fleet: &Fleet, registration: &str, mileage_km: u64) -> Vehicle {
    fleet
        .create_vehicle(&CreateVehicle {
            registration: registration.to_string(),
            brand: "Renault".to_string(),
            model: "T480".to_string(),
            mileage_km,
            status: None,
        })
        .await
        .expect("Failed to create vehicle")
}

pub async fn add_trailer(fleet: &Fleet, registration: &str) -> Trailer {
    fleet
        .create_trailer(&CreateTrailer {
            registration: registration.to_string(),
            kind: "flatbed".to_string(),
            capacity_kg: Some(24_000),
            status: None,
        })
        .await
        .expect("Failed to create trailer")
}

pub async fn add_user(fleet: &Fleet, name: &str, role: UserRole) -> User {
    fleet
        .create_user(&CreateUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: None,
            role,
        })
        .await
        .expect("Failed to create user")
}

pub fn window(start: &str, end: Option<&str>) -> Availability {
    Availability {
        start_at: Some(start.to_string()),
        end_at: end.map(String::from),
    }
}

pub fn trip(
    vehicle_id: u64,
    trailer_id: Option<u64>,
    driver_id: u64,
    start: &str,
    end: Option<&str>,
) -> CreateTrip {
    CreateTrip {
        vehicle_id,
        trailer_id,
        driver_id,
        origin: "Lyon".to_string(),
        destination: "Marseille".to_string(),
        start_at: Some(start.to_string()),
        end_at: end.map(String::from),
    }
}
