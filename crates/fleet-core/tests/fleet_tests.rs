mod common;

use common::{add_trailer, add_user, add_vehicle, create_test_fleet, create_test_fleet_with, trip, window};
use fleet_core::{
    models::{AlertSeverity, AlertType, EntityClass, TripStatus, UserRole, VehicleStatus},
    params::{
        AddTire, Availability, Id, ListNotifications, ListTrips, RecordMaintenance,
        UpdateTripStatus, UpdateVehicle,
    },
    AlertThresholds, FleetError,
};

#[tokio::test]
async fn test_vehicle_busy_during_overlapping_trip() {
    let (_temp_dir, fleet) = create_test_fleet().await;
    let busy = add_vehicle(&fleet, "AB-123-CD", 0).await;
    let free = add_vehicle(&fleet, "EF-456-GH", 0).await;
    let driver = add_user(&fleet, "Ana", UserRole::Chauffeur).await;

    fleet
        .schedule_trip(&trip(busy.id, None, driver.id, "2024-01-15T08:00:00Z", Some("2024-01-15T18:00:00Z")))
        .await
        .expect("Failed to schedule trip");

    let available = fleet
        .available_vehicles(&window("2024-01-15T10:00:00Z", Some("2024-01-15T12:00:00Z")))
        .await
        .unwrap();
    let ids: Vec<u64> = available.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![free.id]);

    let next_day = fleet
        .available_vehicles(&window("2024-01-16T08:00:00Z", Some("2024-01-16T18:00:00Z")))
        .await
        .unwrap();
    assert_eq!(next_day.len(), 2);
}

#[tokio::test]
async fn test_missing_start_is_rejected() {
    let (_temp_dir, fleet) = create_test_fleet().await;

    let err = fleet
        .available_drivers(&Availability {
            start_at: None,
            end_at: Some("2024-01-15T12:00:00Z".to_string()),
        })
        .await
        .unwrap_err();

    match err {
        FleetError::InvalidInput { field, reason } => {
            assert_eq!(field, "startAt");
            assert_eq!(reason, "startAt est obligatoire");
        }
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[tokio::test]
async fn test_omitted_end_equals_point_window() {
    let (_temp_dir, fleet) = create_test_fleet().await;
    let vehicle = add_vehicle(&fleet, "AB-123-CD", 0).await;
    let driver = add_user(&fleet, "Ana", UserRole::Chauffeur).await;
    fleet
        .schedule_trip(&trip(vehicle.id, None, driver.id, "2024-01-15T08:00:00Z", Some("2024-01-15T18:00:00Z")))
        .await
        .unwrap();

    for at in ["2024-01-15T07:59:59Z", "2024-01-15T08:00:00Z", "2024-01-15T18:00:00Z", "2024-01-15T18:00:01Z"] {
        let open = fleet.available_vehicles(&window(at, None)).await.unwrap();
        let point = fleet.available_vehicles(&window(at, Some(at))).await.unwrap();
        assert_eq!(open.len(), point.len(), "at {at}");
    }

    assert!(fleet
        .available_vehicles(&window("2024-01-15T18:00:00Z", None))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_maintenance_vehicle_never_available() {
    let (_temp_dir, fleet) = create_test_fleet().await;
    let vehicle = add_vehicle(&fleet, "AB-123-CD", 0).await;

    fleet
        .update_vehicle(&UpdateVehicle {
            id: vehicle.id,
            status: Some(VehicleStatus::Maintenance),
            ..Default::default()
        })
        .await
        .unwrap()
        .expect("Vehicle should exist");

    let available = fleet
        .available_vehicles(&window("2030-01-01", Some("2030-12-31")))
        .await
        .unwrap();
    assert!(available.is_empty());
}

#[tokio::test]
async fn test_cancelled_trip_frees_resources() {
    let (_temp_dir, fleet) = create_test_fleet().await;
    let vehicle = add_vehicle(&fleet, "AB-123-CD", 0).await;
    let trailer = add_trailer(&fleet, "TR-001").await;
    let driver = add_user(&fleet, "Ana", UserRole::Chauffeur).await;

    let scheduled = fleet
        .schedule_trip(&trip(vehicle.id, Some(trailer.id), driver.id, "2024-01-15T08:00:00Z", Some("2024-01-15T18:00:00Z")))
        .await
        .unwrap();

    let during = window("2024-01-15T09:00:00Z", Some("2024-01-15T10:00:00Z"));
    for class in [EntityClass::Vehicle, EntityClass::Trailer, EntityClass::Driver] {
        assert!(fleet.find_available(class, &during).await.unwrap().is_empty());
    }

    fleet
        .update_trip_status(&UpdateTripStatus {
            id: scheduled.id,
            status: TripStatus::Cancelled,
            distance_km: None,
        })
        .await
        .unwrap();

    for class in [EntityClass::Vehicle, EntityClass::Trailer, EntityClass::Driver] {
        assert_eq!(fleet.find_available(class, &during).await.unwrap().len(), 1);
    }
}

#[tokio::test]
async fn test_admins_are_never_available_drivers() {
    let (_temp_dir, fleet) = create_test_fleet().await;
    add_user(&fleet, "Boss", UserRole::Admin).await;
    let driver = add_user(&fleet, "Ana", UserRole::Chauffeur).await;

    let drivers = fleet
        .available_drivers(&window("2024-01-15", None))
        .await
        .unwrap();
    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].id, driver.id);
}

#[tokio::test]
async fn test_driver_double_booking_conflicts() {
    let (_temp_dir, fleet) = create_test_fleet().await;
    let first = add_vehicle(&fleet, "AB-123-CD", 0).await;
    let second = add_vehicle(&fleet, "EF-456-GH", 0).await;
    let driver = add_user(&fleet, "Ana", UserRole::Chauffeur).await;

    fleet
        .schedule_trip(&trip(first.id, None, driver.id, "2024-01-15T08:00:00Z", Some("2024-01-15T18:00:00Z")))
        .await
        .unwrap();

    let err = fleet
        .schedule_trip(&trip(second.id, None, driver.id, "2024-01-15T12:00:00Z", None))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        FleetError::Conflict {
            class: EntityClass::Driver,
            ..
        }
    ));
    assert!(err.is_client_error());
}

#[tokio::test]
async fn test_concurrent_scheduling_admits_one_trip() {
    let (_temp_dir, fleet) = create_test_fleet().await;
    let vehicle = add_vehicle(&fleet, "AB-123-CD", 0).await;
    let ana = add_user(&fleet, "Ana", UserRole::Chauffeur).await;
    let bruno = add_user(&fleet, "Bruno", UserRole::Chauffeur).await;

    let a = trip(vehicle.id, None, ana.id, "2024-01-15T08:00:00Z", Some("2024-01-15T18:00:00Z"));
    let b = trip(vehicle.id, None, bruno.id, "2024-01-15T10:00:00Z", Some("2024-01-15T20:00:00Z"));
    let (first, second) = tokio::join!(fleet.schedule_trip(&a), fleet.schedule_trip(&b));

    assert_eq!(
        [first.is_ok(), second.is_ok()].iter().filter(|ok| **ok).count(),
        1
    );
    let trips = fleet.list_trips(&ListTrips::default()).await.unwrap();
    assert_eq!(trips.len(), 1);
}

#[tokio::test]
async fn test_trip_lifecycle() {
    let (_temp_dir, fleet) = create_test_fleet().await;
    let vehicle = add_vehicle(&fleet, "AB-123-CD", 50_000).await;
    let driver = add_user(&fleet, "Ana", UserRole::Chauffeur).await;
    let scheduled = fleet
        .schedule_trip(&trip(vehicle.id, None, driver.id, "2024-01-15T08:00:00Z", None))
        .await
        .unwrap();
    assert_eq!(scheduled.status, TripStatus::Planned);

    let move_to = |status, distance_km| UpdateTripStatus {
        id: scheduled.id,
        status,
        distance_km,
    };

    let err = fleet
        .update_trip_status(&move_to(TripStatus::Completed, None))
        .await
        .unwrap_err();
    assert!(matches!(err, FleetError::InvalidTransition { .. }));

    fleet
        .update_trip_status(&move_to(TripStatus::InProgress, None))
        .await
        .unwrap();
    let done = fleet
        .update_trip_status(&move_to(TripStatus::Completed, Some(420)))
        .await
        .unwrap();
    assert_eq!(done.status, TripStatus::Completed);

    let vehicle = fleet
        .get_vehicle(&Id { id: vehicle.id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(vehicle.mileage_km, 50_420);

    for next in [TripStatus::Planned, TripStatus::InProgress, TripStatus::Cancelled] {
        assert!(fleet.update_trip_status(&move_to(next, None)).await.is_err());
    }
}

#[tokio::test]
async fn test_alert_dedup_and_reraise() {
    let (_temp_dir, fleet) = create_test_fleet().await;
    let vehicle = add_vehicle(&fleet, "AB-123-CD", 10_000).await;
    add_user(&fleet, "Boss", UserRole::Admin).await;
    add_user(&fleet, "Deputy", UserRole::Admin).await;
    add_user(&fleet, "Ana", UserRole::Chauffeur).await;

    fleet
        .add_tire(&AddTire {
            vehicle_id: vehicle.id,
            position: "front-left".to_string(),
            installed_at_km: 0,
            next_check_km: 10_400,
        })
        .await
        .unwrap();

    let report = fleet.check_tire_alerts().await.unwrap();
    assert_eq!(report.candidates.len(), 1);
    assert_eq!(report.candidates[0].severity, AlertSeverity::Critical);
    assert_eq!(report.created, 2);

    let again = fleet.check_tire_alerts().await.unwrap();
    assert_eq!(again.candidates.len(), 1);
    assert_eq!(again.created, 0);

    let open = fleet
        .list_notifications(&ListNotifications::default())
        .await
        .unwrap();
    assert_eq!(open.len(), 2);
    assert!(open.iter().all(|n| n.alert_type == AlertType::TireCheck));

    assert!(fleet.resolve_notification(&Id { id: open[0].id }).await.unwrap());
    assert!(!fleet.resolve_notification(&Id { id: open[0].id }).await.unwrap());

    let reraised = fleet.check_tire_alerts().await.unwrap();
    assert_eq!(reraised.created, 1);

    let everything = fleet
        .list_notifications(&ListNotifications {
            user_id: None,
            include_resolved: true,
        })
        .await
        .unwrap();
    assert_eq!(everything.len(), 3);
}

#[tokio::test]
async fn test_maintenance_alert_bands() {
    let (_temp_dir, fleet) = create_test_fleet_with(AlertThresholds {
        tire_km: 1000,
        maintenance_km: 1000,
    })
    .await;
    add_user(&fleet, "Boss", UserRole::Admin).await;

    let warning = add_vehicle(&fleet, "W-1", 20_000).await;
    let quiet = add_vehicle(&fleet, "Q-1", 20_000).await;
    for (vehicle_id, next_service_km) in [(warning.id, 20_800), (quiet.id, 21_500)] {
        fleet
            .record_maintenance(&RecordMaintenance {
                vehicle_id,
                kind: "oil change".to_string(),
                performed_at_km: 0,
                next_service_km,
                notes: None,
            })
            .await
            .unwrap();
    }

    let report = fleet.check_alerts().await.unwrap();
    assert_eq!(report.candidates.len(), 1);
    assert_eq!(report.candidates[0].vehicle_id, warning.id);
    assert_eq!(report.candidates[0].severity, AlertSeverity::Warning);
    assert_eq!(report.candidates[0].alert_type, AlertType::MaintenanceDue);
    assert_eq!(report.created, 1);
}

#[tokio::test]
async fn test_alerts_without_admins_create_nothing() {
    let (_temp_dir, fleet) = create_test_fleet().await;
    let vehicle = add_vehicle(&fleet, "AB-123-CD", 10_000).await;
    fleet
        .add_tire(&AddTire {
            vehicle_id: vehicle.id,
            position: "rear-right".to_string(),
            installed_at_km: 0,
            next_check_km: 9_000,
        })
        .await
        .unwrap();

    let report = fleet.check_alerts().await.unwrap();
    assert_eq!(report.candidates.len(), 1);
    assert_eq!(report.created, 0);
}
