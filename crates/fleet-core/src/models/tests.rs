use std::str::FromStr;

use jiff::Timestamp;

use crate::models::{
    AlertSeverity, EntityClass, Interval, Trip, TripInterval, TripStatus, UserRole,
    VehicleStatus, TrailerStatus,
};

fn trip(end_at: Option<&str>) -> Trip {
    Trip {
        id: 5,
        vehicle_id: 1,
        trailer_id: Some(2),
        driver_id: 3,
        origin: "Lyon".to_string(),
        destination: "Marseille".to_string(),
        start_at: "2024-01-15T08:00:00Z".parse().unwrap(),
        end_at: end_at.map(|s| s.parse().unwrap()),
        status: TripStatus::Planned,
        distance_km: None,
        created_at: Timestamp::from_second(1704067200).unwrap(),
        updated_at: Timestamp::from_second(1704067200).unwrap(),
    }
}

#[test]
fn test_status_round_trip_through_storage_strings() {
    for status in VehicleStatus::ALL {
        assert_eq!(VehicleStatus::from_str(status.as_str()), Ok(status));
    }
    for status in TrailerStatus::ALL {
        assert_eq!(TrailerStatus::from_str(status.as_str()), Ok(status));
    }
}

#[test]
fn test_status_parsing_aliases() {
    assert_eq!(TripStatus::from_str("canceled"), Ok(TripStatus::Cancelled));
    assert_eq!(TripStatus::from_str("IN_PROGRESS"), Ok(TripStatus::InProgress));
    assert_eq!(UserRole::from_str("driver"), Ok(UserRole::Chauffeur));
    assert!(VehicleStatus::from_str("broken").is_err());
}

#[test]
fn test_eligible_sets() {
    assert!(VehicleStatus::Active.is_eligible());
    assert!(VehicleStatus::InUse.is_eligible());
    assert!(!VehicleStatus::Maintenance.is_eligible());
    assert!(!VehicleStatus::Inactive.is_eligible());

    assert!(TrailerStatus::Available.is_eligible());
    assert!(!TrailerStatus::Maintenance.is_eligible());
}

#[test]
fn test_trip_transition_table() {
    use TripStatus::*;

    let allowed = [
        (Planned, InProgress),
        (Planned, Cancelled),
        (InProgress, Completed),
        (InProgress, Cancelled),
    ];
    for from in [Planned, InProgress, Completed, Cancelled] {
        for to in [Planned, InProgress, Completed, Cancelled] {
            assert_eq!(
                from.can_transition_to(to),
                allowed.contains(&(from, to)),
                "{from} -> {to}"
            );
        }
    }
}

#[test]
fn test_terminal_statuses_do_not_occupy() {
    assert!(TripStatus::Completed.is_terminal());
    assert!(TripStatus::Cancelled.is_terminal());
    assert!(!TripStatus::Completed.is_occupying());
    assert!(TripStatus::InProgress.is_occupying());
}

#[test]
fn test_trip_without_end_is_point_interval() {
    let point = trip(None).interval();
    assert_eq!(point.start, point.end);

    let span = trip(Some("2024-01-15T18:00:00Z")).interval();
    assert!(span.overlaps(&Interval::instant("2024-01-15T18:00:00Z".parse().unwrap())));
}

#[test]
fn test_trip_interval_projection() {
    let projected = TripInterval::from(&trip(None));
    assert_eq!(projected.entity_id(EntityClass::Vehicle), Some(1));
    assert_eq!(projected.entity_id(EntityClass::Trailer), Some(2));
    assert_eq!(projected.entity_id(EntityClass::Driver), Some(3));
}

#[test]
fn test_trip_serialization_skips_empty_fields() {
    let json = serde_json::to_value(trip(None)).unwrap();
    assert_eq!(json["status"], "planned");
    assert!(json.get("end_at").is_none());
    assert!(json.get("distance_km").is_none());
}

#[test]
fn test_display_uses_storage_strings() {
    assert_eq!(VehicleStatus::InUse.to_string(), "in_use");
    assert_eq!(EntityClass::Driver.to_string(), "driver");
    assert_eq!(AlertSeverity::Critical.with_icon(), "✖ Critical");
    assert!(AlertSeverity::Critical > AlertSeverity::Warning);
}
