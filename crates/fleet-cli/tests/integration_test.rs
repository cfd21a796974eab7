//! Integration tests comparing CLI output with the core Display
//! implementations the MCP server also returns.

use std::process::Command;

use fleet_core::{
    models::UserRole,
    params::{Availability, CreateTrip, CreateUser, CreateVehicle, Id, ListTrips, ListVehicles},
    Fleet, FleetBuilder,
};
use tempfile::TempDir;

async fn create_test_fleet() -> (Fleet, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let fleet = FleetBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .await
        .expect("Failed to create fleet");
    (fleet, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(fleet: &Fleet, args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_fleet"))
        .arg("--no-color")
        .arg("--database-file")
        .arg(fleet.database_path())
        .args(args)
        .output()
        .expect("Failed to run fleet");
    assert!(
        output.status.success(),
        "fleet {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Invalid UTF-8")
}

async fn seed(fleet: &Fleet) {
    for registration in ["AB-123-CD", "EF-456-GH"] {
        fleet
            .create_vehicle(&CreateVehicle {
                registration: registration.to_string(),
                brand: "Renault".to_string(),
                model: "T480".to_string(),
                ..Default::default()
            })
            .await
            .expect("vehicle");
    }
    fleet
        .create_user(&CreateUser {
            name: "Ana Lopes".to_string(),
            email: "ana@example.com".to_string(),
            phone: Some("+33 6 00 00 00 00".to_string()),
            role: UserRole::Chauffeur,
        })
        .await
        .expect("driver");
    fleet
        .schedule_trip(&CreateTrip {
            vehicle_id: 1,
            trailer_id: None,
            driver_id: 1,
            origin: "Lyon".to_string(),
            destination: "Marseille".to_string(),
            start_at: Some("2024-01-15T08:00:00Z".to_string()),
            end_at: Some("2024-01-15T18:00:00Z".to_string()),
        })
        .await
        .expect("trip");
}

#[tokio::test]
async fn test_vehicle_list_consistency() {
    let (fleet, _dir) = create_test_fleet().await;
    seed(&fleet).await;

    let expected = fleet
        .list_vehicles(&ListVehicles::default())
        .await
        .expect("list")
        .to_string();

    assert_eq!(run_cli_command(&fleet, &["vehicle", "list"]), expected);
    assert_eq!(run_cli_command(&fleet, &[]), expected);
}

#[tokio::test]
async fn test_trip_show_consistency() {
    let (fleet, _dir) = create_test_fleet().await;
    seed(&fleet).await;

    let trip = fleet
        .get_trip(&Id { id: 1 })
        .await
        .expect("get")
        .expect("trip exists");

    let output = run_cli_command(&fleet, &["trip", "show", "1"]);
    assert_eq!(output, trip.to_string());
    assert!(output.starts_with("## Trip 1: Lyon → Marseille (planned)"));
}

#[tokio::test]
async fn test_trip_list_consistency() {
    let (fleet, _dir) = create_test_fleet().await;
    seed(&fleet).await;

    let trips = fleet
        .list_trips(&ListTrips::default())
        .await
        .expect("list");
    assert_eq!(trips.len(), 1);
    assert_eq!(run_cli_command(&fleet, &["trip", "list"]), trips.to_string());
}

#[tokio::test]
async fn test_availability_consistency() {
    let (fleet, _dir) = create_test_fleet().await;
    seed(&fleet).await;

    let window = Availability {
        start_at: Some("2024-01-15T10:00:00Z".to_string()),
        end_at: Some("2024-01-15T12:00:00Z".to_string()),
    };
    let free = fleet.available_vehicles(&window).await.expect("available");
    assert_eq!(free.len(), 1);
    assert_eq!(free[0].registration, "EF-456-GH");

    let output = run_cli_command(
        &fleet,
        &[
            "vehicle",
            "available",
            "--start-at",
            "2024-01-15T10:00:00Z",
            "--end-at",
            "2024-01-15T12:00:00Z",
        ],
    );
    assert_eq!(output, format!("# Available vehicles (1)\n\n{free}"));
}

#[tokio::test]
async fn test_user_show_consistency() {
    let (fleet, _dir) = create_test_fleet().await;
    seed(&fleet).await;

    let user = fleet
        .get_user(&Id { id: 1 })
        .await
        .expect("get")
        .expect("user exists");
    let output = run_cli_command(&fleet, &["user", "show", "1"]);
    assert_eq!(output, user.to_string());
    assert!(output.contains("- **Phone**: +33 6 00 00 00 00"));
}
