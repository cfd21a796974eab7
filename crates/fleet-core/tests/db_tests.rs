use fleet_core::{
    models::{
        Interval, NewTrip, TripFilter, TripStatus, UpdateVehicleRequest, UserRole, VehicleStatus,
    },
    Database, FleetError, TrailerStatus,
};
use jiff::Timestamp;
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn at(s: &str) -> Timestamp {
    s.parse().expect("valid timestamp")
}

fn window(start: &str, end: &str) -> Interval {
    Interval::new(at(start), Some(at(end))).expect("valid window")
}

fn new_trip(vehicle_id: u64, driver_id: u64, start: &str, end: Option<&str>) -> NewTrip {
    NewTrip {
        vehicle_id,
        trailer_id: None,
        driver_id,
        origin: "Lille".to_string(),
        destination: "Paris".to_string(),
        start_at: at(start),
        end_at: end.map(at),
    }
}

#[test]
fn test_database_initialization_is_idempotent() {
    let (temp_file, _db) = create_test_db();
    let _again = Database::new(temp_file.path()).expect("Reopening should succeed");
}

#[test]
fn test_create_and_get_vehicle() {
    let (_temp_file, mut db) = create_test_db();

    let vehicle = db
        .create_vehicle("AB-123-CD", "Volvo", "FH16", 42_000, VehicleStatus::Active)
        .expect("Failed to create vehicle");
    assert!(vehicle.id > 0);

    let fetched = db
        .get_vehicle(vehicle.id)
        .expect("Failed to get vehicle")
        .expect("Vehicle should exist");
    assert_eq!(fetched, vehicle);
    assert!(db.get_vehicle(999).unwrap().is_none());
}

#[test]
fn test_duplicate_registration_is_invalid_input() {
    let (_temp_file, mut db) = create_test_db();

    db.create_vehicle("AB-123-CD", "Volvo", "FH16", 0, VehicleStatus::Active)
        .unwrap();
    let err = db
        .create_vehicle("AB-123-CD", "DAF", "XF", 0, VehicleStatus::Active)
        .unwrap_err();

    match err {
        FleetError::InvalidInput { field, .. } => assert_eq!(field, "registration"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_list_vehicles_by_status() {
    let (_temp_file, mut db) = create_test_db();

    db.create_vehicle("V-1", "Volvo", "FH", 0, VehicleStatus::Active).unwrap();
    db.create_vehicle("V-2", "Volvo", "FH", 0, VehicleStatus::Maintenance).unwrap();
    db.create_vehicle("V-3", "Volvo", "FH", 0, VehicleStatus::InUse).unwrap();

    assert_eq!(db.list_vehicles(&[]).unwrap().len(), 3);

    let eligible = db.list_vehicles(&VehicleStatus::ELIGIBLE).unwrap();
    let registrations: Vec<_> = eligible.iter().map(|v| v.registration.as_str()).collect();
    assert_eq!(registrations, vec!["V-1", "V-3"]);
}

#[test]
fn test_update_vehicle_partial() {
    let (_temp_file, mut db) = create_test_db();
    let vehicle = db
        .create_vehicle("V-1", "Volvo", "FH", 1_000, VehicleStatus::Active)
        .unwrap();

    let updated = db
        .update_vehicle(
            vehicle.id,
            UpdateVehicleRequest {
                status: Some(VehicleStatus::Maintenance),
                ..Default::default()
            },
        )
        .unwrap()
        .expect("Vehicle should exist");

    assert_eq!(updated.status, VehicleStatus::Maintenance);
    assert_eq!(updated.mileage_km, 1_000);
    assert_eq!(updated.registration, "V-1");
    assert_eq!(db.get_vehicle(vehicle.id).unwrap(), Some(updated));

    assert!(db
        .update_vehicle(999, UpdateVehicleRequest::default())
        .unwrap()
        .is_none());
}

#[test]
fn test_create_trip_checks_references() {
    let (_temp_file, mut db) = create_test_db();
    let vehicle = db.create_vehicle("V-1", "Volvo", "FH", 0, VehicleStatus::Active).unwrap();
    let admin = db.create_user("Boss", "boss@example.com", None, UserRole::Admin).unwrap();

    let err = db
        .create_trip(new_trip(999, admin.id, "2024-01-15T08:00:00Z", None))
        .unwrap_err();
    assert!(matches!(err, FleetError::NotFound { entity: "Vehicle", id: 999 }));

    let err = db
        .create_trip(new_trip(vehicle.id, admin.id, "2024-01-15T08:00:00Z", None))
        .unwrap_err();
    assert!(matches!(err, FleetError::InvalidInput { ref field, .. } if field == "driverId"));
}

#[test]
fn test_create_trip_rejects_vehicle_in_maintenance() {
    let (_temp_file, mut db) = create_test_db();
    let vehicle = db
        .create_vehicle("V-1", "Volvo", "FH", 0, VehicleStatus::Maintenance)
        .unwrap();
    let driver = db.create_user("Ana", "ana@example.com", None, UserRole::Chauffeur).unwrap();

    let err = db
        .create_trip(new_trip(vehicle.id, driver.id, "2024-01-15T08:00:00Z", None))
        .unwrap_err();
    assert!(matches!(err, FleetError::Unavailable { id, .. } if id == vehicle.id));
}

#[test]
fn test_trip_bounds_round_trip_as_millis() {
    let (_temp_file, mut db) = create_test_db();
    let vehicle = db.create_vehicle("V-1", "Volvo", "FH", 0, VehicleStatus::Active).unwrap();
    let driver = db.create_user("Ana", "ana@example.com", None, UserRole::Chauffeur).unwrap();

    let trip = db
        .create_trip(new_trip(
            vehicle.id,
            driver.id,
            "2024-01-15T08:00:00.250Z",
            Some("2024-01-15T18:00:00Z"),
        ))
        .unwrap();

    let fetched = db.get_trip(trip.id).unwrap().expect("Trip should exist");
    assert_eq!(fetched.start_at, at("2024-01-15T08:00:00.250Z"));
    assert_eq!(fetched.end_at, Some(at("2024-01-15T18:00:00Z")));
    assert_eq!(fetched.status, TripStatus::Planned);
}

#[test]
fn test_overlapping_trip_conflicts_until_cancelled() {
    let (_temp_file, mut db) = create_test_db();
    let vehicle = db.create_vehicle("V-1", "Volvo", "FH", 0, VehicleStatus::Active).unwrap();
    let ana = db.create_user("Ana", "ana@example.com", None, UserRole::Chauffeur).unwrap();
    let bruno = db.create_user("Bruno", "bruno@example.com", None, UserRole::Chauffeur).unwrap();

    let first = db
        .create_trip(new_trip(vehicle.id, ana.id, "2024-01-15T08:00:00Z", Some("2024-01-15T18:00:00Z")))
        .unwrap();

    // touching the end of the first trip is an overlap
    let err = db
        .create_trip(new_trip(vehicle.id, bruno.id, "2024-01-15T18:00:00Z", Some("2024-01-15T20:00:00Z")))
        .unwrap_err();
    match err {
        FleetError::Conflict { id, trip_id, .. } => {
            assert_eq!(id, vehicle.id);
            assert_eq!(trip_id, first.id);
        }
        other => panic!("Expected Conflict, got {other:?}"),
    }

    db.transition_trip(first.id, TripStatus::Cancelled, None).unwrap();
    db.create_trip(new_trip(vehicle.id, bruno.id, "2024-01-15T18:00:00Z", Some("2024-01-15T20:00:00Z")))
        .expect("Cancelled trip should not block");
}

#[test]
fn test_transition_rules_and_mileage() {
    let (_temp_file, mut db) = create_test_db();
    let vehicle = db
        .create_vehicle("V-1", "Volvo", "FH", 10_000, VehicleStatus::Active)
        .unwrap();
    let driver = db.create_user("Ana", "ana@example.com", None, UserRole::Chauffeur).unwrap();
    let trip = db
        .create_trip(new_trip(vehicle.id, driver.id, "2024-01-15T08:00:00Z", None))
        .unwrap();

    let err = db
        .transition_trip(trip.id, TripStatus::Completed, Some(300))
        .unwrap_err();
    assert!(matches!(
        err,
        FleetError::InvalidTransition {
            from: TripStatus::Planned,
            to: TripStatus::Completed,
            ..
        }
    ));

    let err = db
        .transition_trip(trip.id, TripStatus::InProgress, Some(300))
        .unwrap_err();
    assert!(matches!(err, FleetError::InvalidInput { ref field, .. } if field == "distanceKm"));

    db.transition_trip(trip.id, TripStatus::InProgress, None).unwrap();
    let done = db
        .transition_trip(trip.id, TripStatus::Completed, Some(300))
        .unwrap();
    assert_eq!(done.status, TripStatus::Completed);
    assert_eq!(done.distance_km, Some(300));

    let vehicle = db.get_vehicle(vehicle.id).unwrap().unwrap();
    assert_eq!(vehicle.mileage_km, 10_300);

    assert!(db.transition_trip(trip.id, TripStatus::Cancelled, None).is_err());
}

#[test]
fn test_mileage_overflow_is_rejected_and_rolled_back() {
    let (_temp_file, mut db) = create_test_db();
    let vehicle = db.create_vehicle("V-1", "Volvo", "FH", 100, VehicleStatus::Active).unwrap();
    let driver = db.create_user("Ana", "ana@example.com", None, UserRole::Chauffeur).unwrap();
    let trip = db
        .create_trip(new_trip(vehicle.id, driver.id, "2024-01-15T08:00:00Z", None))
        .unwrap();
    db.transition_trip(trip.id, TripStatus::InProgress, None).unwrap();

    for distance in [i64::MAX as u64, u64::MAX] {
        let err = db
            .transition_trip(trip.id, TripStatus::Completed, Some(distance))
            .unwrap_err();
        assert!(
            matches!(err, FleetError::InvalidInput { ref field, .. } if field == "distanceKm"),
            "unexpected error for {distance}: {err:?}"
        );
    }

    // Nothing was written: the trip is still running and the odometer is intact.
    let trip = db.get_trip(trip.id).unwrap().unwrap();
    assert_eq!(trip.status, TripStatus::InProgress);
    assert_eq!(trip.distance_km, None);

    let vehicles = db.list_vehicles(&[]).unwrap();
    assert_eq!(vehicles[0].mileage_km, 100);
    let free = db
        .available_vehicles(&window("2024-01-16T08:00:00Z", "2024-01-16T18:00:00Z"))
        .unwrap();
    assert_eq!(free.len(), 1);

    db.transition_trip(trip.id, TripStatus::Completed, Some(250)).unwrap();
    assert_eq!(db.get_vehicle(vehicle.id).unwrap().unwrap().mileage_km, 350);
}

#[test]
fn test_out_of_range_values_are_invalid_input() {
    let (_temp_file, mut db) = create_test_db();

    let err = db
        .create_vehicle("V-1", "Volvo", "FH", u64::MAX, VehicleStatus::Active)
        .unwrap_err();
    assert!(matches!(err, FleetError::InvalidInput { ref field, .. } if field == "mileage_km"));
    assert!(db.list_vehicles(&[]).unwrap().is_empty());

    let vehicle = db.create_vehicle("V-1", "Volvo", "FH", 0, VehicleStatus::Active).unwrap();
    let err = db
        .update_vehicle(
            vehicle.id,
            UpdateVehicleRequest {
                mileage_km: Some(u64::MAX),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, FleetError::InvalidInput { ref field, .. } if field == "mileage_km"));

    let err = db.get_vehicle(u64::MAX).unwrap_err();
    assert!(matches!(err, FleetError::InvalidInput { ref field, .. } if field == "id"));
    assert!(matches!(
        db.delete_trip(i64::MAX as u64 + 1),
        Err(FleetError::InvalidInput { .. })
    ));
}

#[test]
fn test_list_trips_filters() {
    let (_temp_file, mut db) = create_test_db();
    let v1 = db.create_vehicle("V-1", "Volvo", "FH", 0, VehicleStatus::Active).unwrap();
    let v2 = db.create_vehicle("V-2", "Volvo", "FH", 0, VehicleStatus::Active).unwrap();
    let ana = db.create_user("Ana", "ana@example.com", None, UserRole::Chauffeur).unwrap();
    let bruno = db.create_user("Bruno", "bruno@example.com", None, UserRole::Chauffeur).unwrap();

    let later = db.create_trip(new_trip(v1.id, ana.id, "2024-02-01T08:00:00Z", None)).unwrap();
    let earlier = db.create_trip(new_trip(v2.id, bruno.id, "2024-01-01T08:00:00Z", None)).unwrap();
    db.transition_trip(earlier.id, TripStatus::Cancelled, None).unwrap();

    let all = db.list_trips(&TripFilter::default()).unwrap();
    let ids: Vec<u64> = all.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);

    let planned = db
        .list_trips(&TripFilter {
            status: Some(TripStatus::Planned),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(planned.len(), 1);
    assert_eq!(planned[0].id, later.id);

    let bruno_trips = db
        .list_trips(&TripFilter {
            driver_id: Some(bruno.id),
            vehicle_id: Some(v2.id),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(bruno_trips.len(), 1);
}

#[test]
fn test_delete_vehicle_with_trips_is_refused() {
    let (_temp_file, mut db) = create_test_db();
    let vehicle = db.create_vehicle("V-1", "Volvo", "FH", 0, VehicleStatus::Active).unwrap();
    let spare = db.create_vehicle("V-2", "Volvo", "FH", 0, VehicleStatus::Active).unwrap();
    let driver = db.create_user("Ana", "ana@example.com", None, UserRole::Chauffeur).unwrap();
    let trip = db
        .create_trip(new_trip(vehicle.id, driver.id, "2024-01-15T08:00:00Z", None))
        .unwrap();

    assert!(matches!(
        db.delete_vehicle(vehicle.id),
        Err(FleetError::InvalidInput { .. })
    ));
    assert!(matches!(
        db.delete_user(driver.id),
        Err(FleetError::InvalidInput { .. })
    ));

    db.delete_trip(trip.id).unwrap();
    db.delete_vehicle(vehicle.id).unwrap();
    db.delete_vehicle(spare.id).unwrap();
    assert!(matches!(
        db.delete_vehicle(spare.id),
        Err(FleetError::NotFound { .. })
    ));
}

#[test]
fn test_deleted_trip_frees_its_resources() {
    let (_temp_file, mut db) = create_test_db();
    let vehicle = db.create_vehicle("V-1", "Volvo", "FH", 0, VehicleStatus::Active).unwrap();
    let trailer = db
        .create_trailer("T-1", "reefer", None, TrailerStatus::Available)
        .unwrap();
    let driver = db.create_user("Ana", "ana@example.com", None, UserRole::Chauffeur).unwrap();

    let mut trip = new_trip(vehicle.id, driver.id, "2024-01-15T08:00:00Z", Some("2024-01-15T18:00:00Z"));
    trip.trailer_id = Some(trailer.id);
    let trip = db.create_trip(trip).unwrap();

    let during = window("2024-01-15T10:00:00Z", "2024-01-15T12:00:00Z");
    assert!(db.available_vehicles(&during).unwrap().is_empty());
    assert!(db.available_trailers(&during).unwrap().is_empty());
    assert!(db.available_drivers(&during).unwrap().is_empty());

    db.delete_trip(trip.id).unwrap();
    assert!(db.get_trip(trip.id).unwrap().is_none());

    let vehicles: Vec<u64> = db.available_vehicles(&during).unwrap().iter().map(|v| v.id).collect();
    let trailers: Vec<u64> = db.available_trailers(&during).unwrap().iter().map(|t| t.id).collect();
    let drivers: Vec<u64> = db.available_drivers(&during).unwrap().iter().map(|u| u.id).collect();
    assert_eq!(vehicles, vec![vehicle.id]);
    assert_eq!(trailers, vec![trailer.id]);
    assert_eq!(drivers, vec![driver.id]);
}

#[test]
fn test_available_trailers_respects_status_and_trips() {
    let (_temp_file, mut db) = create_test_db();
    let vehicle = db.create_vehicle("V-1", "Volvo", "FH", 0, VehicleStatus::Active).unwrap();
    let driver = db.create_user("Ana", "ana@example.com", None, UserRole::Chauffeur).unwrap();
    let hitched = db
        .create_trailer("T-1", "reefer", None, TrailerStatus::Available)
        .unwrap();
    let free = db
        .create_trailer("T-2", "reefer", Some(20_000), TrailerStatus::InUse)
        .unwrap();
    db.create_trailer("T-3", "reefer", None, TrailerStatus::Maintenance)
        .unwrap();

    let mut trip = new_trip(vehicle.id, driver.id, "2024-01-15T08:00:00Z", Some("2024-01-15T18:00:00Z"));
    trip.trailer_id = Some(hitched.id);
    db.create_trip(trip).unwrap();

    let available = db
        .available_trailers(&window("2024-01-15T10:00:00Z", "2024-01-15T12:00:00Z"))
        .unwrap();
    let ids: Vec<u64> = available.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![free.id]);
}

#[test]
fn test_upkeep_records_require_vehicle() {
    let (_temp_file, mut db) = create_test_db();
    let vehicle = db.create_vehicle("V-1", "Volvo", "FH", 0, VehicleStatus::Active).unwrap();

    assert!(matches!(
        db.add_tire(999, "front-left", 0, 40_000),
        Err(FleetError::NotFound { entity: "Vehicle", .. })
    ));

    let tire = db.add_tire(vehicle.id, "front-left", 0, 40_000).unwrap();
    db.record_maintenance(vehicle.id, "oil change", 0, 30_000, Some("5W30"))
        .unwrap();

    assert_eq!(db.list_tires(Some(vehicle.id)).unwrap().len(), 1);
    assert_eq!(db.list_maintenance(None).unwrap()[0].notes.as_deref(), Some("5W30"));

    db.delete_tire(tire.id).unwrap();
    assert!(db.list_tires(None).unwrap().is_empty());
}
