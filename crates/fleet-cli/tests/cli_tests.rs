use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A fresh database in its own temporary directory.
struct TestDb {
    _dir: TempDir,
    path: String,
}

impl TestDb {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temporary directory");
        let path = dir
            .path()
            .join("cli_test.db")
            .to_str()
            .expect("utf-8 path")
            .to_string();
        Self { _dir: dir, path }
    }

    /// `fleet --no-color --database-file <db>` ready for more arguments.
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("fleet").expect("Failed to find fleet binary");
        cmd.args(["--no-color", "--database-file", &self.path]);
        cmd
    }

    fn run(&self, args: &[&str]) {
        self.cmd().args(args).assert().success();
    }
}

/// One truck, one chauffeur, and a trip on 2024-01-15 from 08:00 to 18:00.
fn seeded() -> TestDb {
    let db = TestDb::new();
    db.run(&[
        "vehicle",
        "create",
        "AB-123-CD",
        "--brand",
        "Renault",
        "--model",
        "T480",
    ]);
    db.run(&["user", "create", "Ana Lopes", "--email", "ana@example.com"]);
    db.run(&[
        "trip",
        "create",
        "--vehicle-id",
        "1",
        "--driver-id",
        "1",
        "--origin",
        "Lyon",
        "--destination",
        "Marseille",
        "--start-at",
        "2024-01-15T08:00:00Z",
        "--end-at",
        "2024-01-15T18:00:00Z",
    ]);
    db
}

#[test]
fn test_cli_create_vehicle() {
    let db = TestDb::new();
    db.cmd()
        .args([
            "vehicle",
            "create",
            "AB-123-CD",
            "--brand",
            "Renault",
            "--model",
            "T480",
            "--mileage-km",
            "120000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created vehicle with ID: 1"))
        .stdout(predicate::str::contains("120000 km"));
}

#[test]
fn test_cli_default_lists_vehicles() {
    let db = TestDb::new();
    db.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("No vehicles found."));
}

#[test]
fn test_cli_rejects_unknown_status() {
    let db = TestDb::new();
    db.cmd()
        .args(["vehicle", "list", "--status", "broken"])
        .assert()
        .failure();
}

#[test]
fn test_cli_available_requires_start() {
    let db = TestDb::new();
    db.cmd()
        .args(["vehicle", "available", "--end-at", "2024-01-15T12:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("startAt est obligatoire"));
}

#[test]
fn test_cli_overlapping_trip_hides_vehicle() {
    let db = seeded();

    db.cmd()
        .args([
            "vehicle",
            "available",
            "--start-at",
            "2024-01-15T10:00:00Z",
            "--end-at",
            "2024-01-15T12:00:00Z",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Available vehicles (0)"))
        .stdout(predicate::str::contains("AB-123-CD").not());

    db.cmd()
        .args(["driver", "available", "--start-at", "2024-01-15T18:00:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No drivers found."));
}

#[test]
fn test_cli_next_day_is_free() {
    let db = seeded();

    db.cmd()
        .args([
            "vehicle",
            "available",
            "--start-at",
            "2024-01-16T08:00:00Z",
            "--end-at",
            "2024-01-16T18:00:00Z",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Available vehicles (1)"))
        .stdout(predicate::str::contains("AB-123-CD"));
}

#[test]
fn test_cli_double_booking_fails() {
    let db = seeded();
    db.run(&["user", "create", "Marc Petit", "--email", "marc@example.com"]);

    db.cmd()
        .args([
            "trip",
            "create",
            "--vehicle-id",
            "1",
            "--driver-id",
            "2",
            "--origin",
            "Lyon",
            "--destination",
            "Paris",
            "--start-at",
            "2024-01-15T17:00:00Z",
            "--end-at",
            "2024-01-15T22:00:00Z",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("vehicle 1 is already assigned to trip 1"));
}

#[test]
fn test_cli_admin_cannot_drive() {
    let db = TestDb::new();
    db.run(&["vehicle", "create", "AB-123-CD", "--brand", "Volvo", "--model", "FH16"]);
    db.run(&[
        "user",
        "create",
        "Office",
        "--email",
        "office@example.com",
        "--role",
        "admin",
    ]);

    db.cmd()
        .args([
            "trip",
            "create",
            "--vehicle-id",
            "1",
            "--driver-id",
            "1",
            "--origin",
            "Lyon",
            "--destination",
            "Paris",
            "--start-at",
            "2024-01-15",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("driverId"));
}

#[test]
fn test_cli_cancel_frees_vehicle() {
    let db = seeded();

    db.cmd()
        .args(["trip", "cancel", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status: cancelled"));

    db.cmd()
        .args(["vehicle", "available", "--start-at", "2024-01-15T12:00:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AB-123-CD"));

    db.cmd()
        .args(["trip", "start", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot move from 'cancelled'"));
}

#[test]
fn test_cli_complete_adds_mileage() {
    let db = seeded();
    db.run(&["trip", "start", "1"]);

    db.cmd()
        .args(["trip", "complete", "1", "--distance-km", "315"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vehicle 1 mileage: +315 km"));

    db.cmd()
        .args(["vehicle", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Mileage**: 315 km"));
}

#[test]
fn test_cli_delete_requires_confirm() {
    let db = TestDb::new();
    db.run(&["trailer", "create", "TR-001", "--kind", "flatbed"]);

    db.cmd()
        .args(["trailer", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--confirm"));

    db.cmd()
        .args(["trailer", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted trailer 'TR-001' (ID: 1)"));
}

#[test]
fn test_cli_alert_check_is_idempotent() {
    let db = TestDb::new();
    db.run(&[
        "vehicle",
        "create",
        "AB-123-CD",
        "--brand",
        "Renault",
        "--model",
        "T480",
        "--mileage-km",
        "10000",
    ]);
    db.run(&[
        "user",
        "create",
        "Office",
        "--email",
        "office@example.com",
        "--role",
        "admin",
    ]);
    db.run(&[
        "tire",
        "add",
        "--vehicle-id",
        "1",
        "--position",
        "front-left",
        "--installed-at-km",
        "0",
        "--next-check-km",
        "10300",
    ]);

    db.cmd()
        .args(["alert", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 alert(s) due, 1 new notification(s) sent."))
        .stdout(predicate::str::contains("due in 300 km"));

    db.cmd()
        .args(["alert", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 alert(s) due, 0 new notification(s) sent."));

    db.cmd()
        .args(["alert", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tire_check (vehicle 1)"));

    db.cmd()
        .args(["alert", "resolve", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolved notification 1"));

    db.cmd()
        .args(["alert", "resolve", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Notification 1 was already resolved",
        ));
}

#[test]
fn test_cli_tire_threshold_flag() {
    let db = TestDb::new();
    db.run(&[
        "vehicle",
        "create",
        "AB-123-CD",
        "--brand",
        "Renault",
        "--model",
        "T480",
        "--mileage-km",
        "10000",
    ]);
    db.run(&[
        "tire",
        "add",
        "--vehicle-id",
        "1",
        "--position",
        "rear-left",
        "--installed-at-km",
        "0",
        "--next-check-km",
        "10300",
    ]);

    db.cmd()
        .args(["--tire-threshold-km", "200", "alert", "check", "--tires"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No vehicle is due"));
}
