//! Mileage alert classification.
//!
//! Tires and services are due at a given odometer reading. The distance left
//! before that reading is compared to a threshold:
//!
//! | remaining                          | severity   |
//! |------------------------------------|------------|
//! | `<= threshold / 2` (or overdue)    | `critical` |
//! | `<= threshold`                     | `warning`  |
//! | otherwise                          | none       |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{AlertSeverity, AlertType, Maintenance, Tire, Vehicle};

/// Default distance, in kilometres, under which an alert is raised.
pub const DEFAULT_THRESHOLD_KM: u64 = 1000;

/// Per-source alert thresholds, in kilometres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertThresholds {
    pub tire_km: u64,
    pub maintenance_km: u64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            tire_km: DEFAULT_THRESHOLD_KM,
            maintenance_km: DEFAULT_THRESHOLD_KM,
        }
    }
}

/// Classifies the distance left before a due mileage.
///
/// # Examples
///
/// ```rust
/// use fleet_core::alerts::classify;
/// use fleet_core::models::AlertSeverity;
///
/// assert_eq!(classify(400, 1000), Some(AlertSeverity::Critical));
/// assert_eq!(classify(800, 1000), Some(AlertSeverity::Warning));
/// assert_eq!(classify(1500, 1000), None);
/// ```
pub fn classify(remaining_km: i64, threshold_km: u64) -> Option<AlertSeverity> {
    let threshold = i128::from(threshold_km);
    let remaining = i128::from(remaining_km);
    // remaining <= threshold / 2 without losing the odd half kilometre
    if remaining * 2 <= threshold {
        Some(AlertSeverity::Critical)
    } else if remaining <= threshold {
        Some(AlertSeverity::Warning)
    } else {
        None
    }
}

/// An alert worth raising, before it is addressed to anyone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertCandidate {
    pub vehicle_id: u64,
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub remaining_km: i64,
    pub message: String,
}

/// Outcome of an alert check.
#[derive(Debug, Clone, Default)]
pub struct AlertReport {
    /// Every alert currently due, already-notified ones included
    pub candidates: Vec<AlertCandidate>,

    /// Notifications created by this run
    pub created: usize,
}

fn remaining(due_km: u64, mileage_km: u64) -> i64 {
    let due = i128::from(due_km) - i128::from(mileage_km);
    due.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Collapses `(vehicle, remaining)` readings to the most urgent one per
/// vehicle and classifies it.
fn most_urgent<I>(readings: I, threshold_km: u64) -> BTreeMap<u64, (i64, AlertSeverity)>
where
    I: IntoIterator<Item = (u64, i64)>,
{
    let mut lowest: BTreeMap<u64, i64> = BTreeMap::new();
    for (vehicle_id, left) in readings {
        lowest
            .entry(vehicle_id)
            .and_modify(|current| *current = (*current).min(left))
            .or_insert(left);
    }
    lowest
        .into_iter()
        .filter_map(|(vehicle_id, left)| {
            classify(left, threshold_km).map(|severity| (vehicle_id, (left, severity)))
        })
        .collect()
}

fn describe(vehicle: &Vehicle, what: &str, left: i64) -> String {
    if left < 0 {
        format!(
            "{} ({} {}): {what} overdue by {} km",
            vehicle.registration,
            vehicle.brand,
            vehicle.model,
            -left
        )
    } else {
        format!(
            "{} ({} {}): {what} due in {left} km",
            vehicle.registration, vehicle.brand, vehicle.model
        )
    }
}

/// One candidate per vehicle whose closest tire check is within the
/// threshold. Tires on unknown vehicles are ignored.
pub fn tire_alerts(vehicles: &[Vehicle], tires: &[Tire], threshold_km: u64) -> Vec<AlertCandidate> {
    let by_id: BTreeMap<u64, &Vehicle> = vehicles.iter().map(|v| (v.id, v)).collect();
    let readings = tires.iter().filter_map(|tire| {
        by_id
            .get(&tire.vehicle_id)
            .map(|v| (v.id, remaining(tire.next_check_km, v.mileage_km)))
    });

    most_urgent(readings, threshold_km)
        .into_iter()
        .filter_map(|(vehicle_id, (left, severity))| {
            by_id.get(&vehicle_id).map(|vehicle| AlertCandidate {
                vehicle_id,
                alert_type: AlertType::TireCheck,
                severity,
                remaining_km: left,
                message: describe(vehicle, "tire check", left),
            })
        })
        .collect()
}

/// One candidate per vehicle whose next service is within the threshold.
///
/// Only the latest record of each kind counts: an oil change done at
/// 50 000 km supersedes the one done at 20 000 km.
pub fn maintenance_alerts(
    vehicles: &[Vehicle],
    records: &[Maintenance],
    threshold_km: u64,
) -> Vec<AlertCandidate> {
    let by_id: BTreeMap<u64, &Vehicle> = vehicles.iter().map(|v| (v.id, v)).collect();

    let mut latest: BTreeMap<(u64, &str), &Maintenance> = BTreeMap::new();
    for record in records {
        latest
            .entry((record.vehicle_id, record.kind.as_str()))
            .and_modify(|current| {
                if record.performed_at_km >= current.performed_at_km {
                    *current = record;
                }
            })
            .or_insert(record);
    }

    let readings = latest.values().filter_map(|record| {
        by_id
            .get(&record.vehicle_id)
            .map(|v| (v.id, remaining(record.next_service_km, v.mileage_km)))
    });

    most_urgent(readings, threshold_km)
        .into_iter()
        .filter_map(|(vehicle_id, (left, severity))| {
            by_id.get(&vehicle_id).map(|vehicle| AlertCandidate {
                vehicle_id,
                alert_type: AlertType::MaintenanceDue,
                severity,
                remaining_km: left,
                message: describe(vehicle, "service", left),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::VehicleStatus;

    fn vehicle(id: u64, mileage_km: u64) -> Vehicle {
        Vehicle {
            id,
            registration: format!("AB-{id:03}-CD"),
            brand: "Renault".into(),
            model: "T480".into(),
            mileage_km,
            status: VehicleStatus::Active,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn tire(id: u64, vehicle_id: u64, next_check_km: u64) -> Tire {
        Tire {
            id,
            vehicle_id,
            position: "front-left".into(),
            installed_at_km: 0,
            next_check_km,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn service(id: u64, vehicle_id: u64, kind: &str, done: u64, next: u64) -> Maintenance {
        Maintenance {
            id,
            vehicle_id,
            kind: kind.into(),
            performed_at_km: done,
            next_service_km: next,
            notes: None,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_classify_bands() {
        assert_eq!(classify(0, 1000), Some(AlertSeverity::Critical));
        assert_eq!(classify(500, 1000), Some(AlertSeverity::Critical));
        assert_eq!(classify(501, 1000), Some(AlertSeverity::Warning));
        assert_eq!(classify(1000, 1000), Some(AlertSeverity::Warning));
        assert_eq!(classify(1001, 1000), None);
        assert_eq!(classify(-250, 1000), Some(AlertSeverity::Critical));
    }

    #[test]
    fn test_classify_odd_threshold() {
        // half of 999 is 499.5
        assert_eq!(classify(499, 999), Some(AlertSeverity::Critical));
        assert_eq!(classify(500, 999), Some(AlertSeverity::Warning));
    }

    #[test]
    fn test_tire_alerts_keep_closest_tire() {
        let vehicles = [vehicle(1, 10_000), vehicle(2, 10_000)];
        let tires = [
            tire(1, 1, 10_900),
            tire(2, 1, 10_300),
            tire(3, 2, 20_000),
            tire(4, 99, 10_000),
        ];

        let alerts = tire_alerts(&vehicles, &tires, 1000);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].vehicle_id, 1);
        assert_eq!(alerts[0].remaining_km, 300);
        assert_eq!(alerts[0].severity, AlertSeverity::Critical);
        assert_eq!(alerts[0].alert_type, AlertType::TireCheck);
        assert!(alerts[0].message.contains("due in 300 km"));
    }

    #[test]
    fn test_maintenance_latest_record_wins() {
        let vehicles = [vehicle(1, 50_200)];
        let records = [
            service(1, 1, "oil change", 20_000, 50_000),
            service(2, 1, "oil change", 50_000, 80_000),
        ];
        assert!(maintenance_alerts(&vehicles, &records, 1000).is_empty());
    }

    #[test]
    fn test_maintenance_overdue_message() {
        let vehicles = [vehicle(1, 61_000)];
        let records = [service(1, 1, "brakes", 30_000, 60_000)];

        let alerts = maintenance_alerts(&vehicles, &records, 1000);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Critical);
        assert!(alerts[0].message.contains("overdue by 1000 km"));
    }
}
