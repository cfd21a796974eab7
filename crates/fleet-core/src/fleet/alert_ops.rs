//! Mileage alert checks and notifications for the Fleet.

use log::{debug, info};

use super::Fleet;
use crate::{
    alerts::{self, AlertCandidate, AlertReport},
    db::Database,
    display::Notifications,
    error::Result,
    models::AlertType,
    params::{Id, ListNotifications},
};

fn collect(db: &Database, kind: AlertType, threshold_km: u64) -> Result<Vec<AlertCandidate>> {
    let vehicles = db.list_vehicles(&[])?;
    let candidates = match kind {
        AlertType::TireCheck => alerts::tire_alerts(&vehicles, &db.list_tires(None)?, threshold_km),
        AlertType::MaintenanceDue => {
            alerts::maintenance_alerts(&vehicles, &db.list_maintenance(None)?, threshold_km)
        }
    };
    debug!("{} {} alert(s) due", candidates.len(), kind.as_str());
    Ok(candidates)
}

fn raise(db: &mut Database, candidates: Vec<AlertCandidate>) -> Result<AlertReport> {
    let created = db.raise_alerts(&candidates)?;
    if created > 0 {
        info!("Raised {created} new notification(s)");
    }
    Ok(AlertReport {
        candidates,
        created,
    })
}

impl Fleet {
    /// Raises `tire_check` alerts for vehicles whose closest tire inspection
    /// is within the tire threshold.
    ///
    /// Each alert goes to every admin; an admin who already has an open alert
    /// of this type for the vehicle is skipped.
    pub async fn check_tire_alerts(&self) -> Result<AlertReport> {
        let threshold = self.thresholds.tire_km;
        self.with_db(move |db| {
            let candidates = collect(db, AlertType::TireCheck, threshold)?;
            raise(db, candidates)
        })
        .await
    }

    /// Raises `maintenance_due` alerts for vehicles whose next service is
    /// within the maintenance threshold.
    pub async fn check_maintenance_alerts(&self) -> Result<AlertReport> {
        let threshold = self.thresholds.maintenance_km;
        self.with_db(move |db| {
            let candidates = collect(db, AlertType::MaintenanceDue, threshold)?;
            raise(db, candidates)
        })
        .await
    }

    /// Runs both checks on one connection.
    pub async fn check_alerts(&self) -> Result<AlertReport> {
        let thresholds = self.thresholds;
        self.with_db(move |db| {
            let mut candidates = collect(db, AlertType::TireCheck, thresholds.tire_km)?;
            candidates.extend(collect(
                db,
                AlertType::MaintenanceDue,
                thresholds.maintenance_km,
            )?);
            raise(db, candidates)
        })
        .await
    }

    /// Lists notifications, newest first. Resolved ones are hidden unless
    /// asked for.
    pub async fn list_notifications(&self, params: &ListNotifications) -> Result<Notifications> {
        let (user_id, unresolved_only) = (params.user_id, !params.include_resolved);
        let notifications = self
            .with_db(move |db| db.list_notifications(user_id, unresolved_only))
            .await?;
        Ok(Notifications(notifications))
    }

    /// Marks a notification resolved. Returns `false` if it already was.
    pub async fn resolve_notification(&self, params: &Id) -> Result<bool> {
        let id = params.id;
        let resolved = self
            .with_db(move |db| db.resolve_notification(id))
            .await?;
        if resolved {
            info!("Notification {id} resolved");
        }
        Ok(resolved)
    }
}
