mod common;

use chrono::{Duration, NaiveDate};
use common::{ADMIN, WORKER, at, init_with_users, memory_pool, rtc, setup_test_db, temp_out};
use predicates::str::contains;
use rtimeclock::core::add::AddLogic;
use rtimeclock::core::clock::ClockLogic;
use rtimeclock::core::track::{TrackLogic, TrackRequest};
use rtimeclock::db::pool::DbPool;
use rtimeclock::export::{ExportFormat, ExportKind, ExportLogic, ExportRequest};
use rtimeclock::export::range::parse_range;
use rtimeclock::models::employee::NewEmployee;
use rtimeclock::models::event_type::ClockType;
use rtimeclock::models::shift::Window;
use serde_json::Value;
use std::fs;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Clock in and straight out again through the CLI: one (short) shift today.
fn work_a_shift(db_path: &str, who: &str) {
    rtc()
        .args(["--db", db_path, "--as", who, "clock", "in"])
        .assert()
        .success();
    rtc()
        .args(["--db", db_path, "--as", who, "clock", "out"])
        .assert()
        .success();
}

#[test]
fn test_parse_range_forms() {
    assert_eq!(parse_range("2025").unwrap(), (d(2025, 1, 1), d(2025, 12, 31)));
    assert_eq!(parse_range("2024-02").unwrap(), (d(2024, 2, 1), d(2024, 2, 29)));
    assert_eq!(parse_range("2025-03-10").unwrap(), (d(2025, 3, 10), d(2025, 3, 10)));
    assert_eq!(
        parse_range("2025-01:2025-03").unwrap(),
        (d(2025, 1, 1), d(2025, 3, 31))
    );
}

#[test]
fn test_parse_range_rejects_garbage() {
    assert!(parse_range("yesterday").is_err());
    assert!(parse_range("2025-13").is_err());
    assert!(parse_range("2025:2025-03").is_err());
    assert!(parse_range("2025-03:2025-01").is_err());
}

#[test]
fn test_collect_shifts_per_employee() {
    let mut pool = memory_pool();
    ClockLogic::apply(&mut pool, WORKER, ClockType::In, at(9, 0)).unwrap();
    ClockLogic::apply(&mut pool, WORKER, ClockType::Out, at(17, 0)).unwrap();

    let all = ExportLogic::collect_shifts(&pool.conn, &Window::unbounded(), None).unwrap();
    // ordered by name: Anna, James
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].employee, "Anna");
    assert!(all[0].shifts.is_empty());
    assert_eq!(all[1].employee, "James");
    assert_eq!(all[1].shifts[0].hours(), 8.0);

    let other_day = Window::new(at(0, 0) + Duration::days(1), at(0, 0) + Duration::days(2));
    let none = ExportLogic::collect_shifts(&pool.conn, &other_day, Some(WORKER)).unwrap();
    assert_eq!(none.len(), 1);
    assert!(none[0].shifts.is_empty());
}

#[test]
fn test_collect_tasks_resolves_projects() {
    let mut pool = memory_pool();
    let cfg = common::test_config("unused.sqlite");
    AddLogic::add_project(&mut pool, Some(ADMIN), "Acme website", "ACME").unwrap();

    TrackLogic::apply(
        &mut pool,
        &cfg,
        WORKER,
        TrackRequest {
            project_code: Some("ACME".into()),
            description: Some("Fix login form".into()),
            time: Some("02:00".into()),
            ..Default::default()
        },
        at(12, 0),
    )
    .unwrap();

    let data = ExportLogic::collect_tasks(&pool.conn, &Window::unbounded(), Some(WORKER)).unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].tasks[0].project, "Acme website");
    assert_eq!(data[0].tasks[0].task.hours, 2.0);
}

#[test]
fn test_export_shifts_json() {
    let db_path = setup_test_db("export_shifts_json");
    init_with_users(&db_path);
    work_a_shift(&db_path, WORKER);

    let out = temp_out("export_shifts_json", "json");
    rtc()
        .args([
            "--db", &db_path, "--as", ADMIN, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of shifts");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["employee"], "James");
}

#[test]
fn test_export_shifts_csv() {
    let db_path = setup_test_db("export_shifts_csv");
    init_with_users(&db_path);
    work_a_shift(&db_path, WORKER);
    work_a_shift(&db_path, ADMIN);

    let out = temp_out("export_shifts_csv", "csv");
    rtc()
        .args([
            "--db", &db_path, "--as", ADMIN, "export", "--shifts", "--format", "csv", "--file",
            &out, "--user", WORKER,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("employee,date,from,to,hours"));
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].starts_with("James,"));
}

#[test]
fn test_export_shifts_xlsx() {
    let db_path = setup_test_db("export_shifts_xlsx");
    init_with_users(&db_path);
    work_a_shift(&db_path, WORKER);

    let out = temp_out("export_shifts_xlsx", "xlsx");
    rtc()
        .args(["--db", &db_path, "--as", ADMIN, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("read exported xlsx");
    // xlsx files are zip archives
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_tasks_csv() {
    let db_path = setup_test_db("export_tasks_csv");
    init_with_users(&db_path);

    rtc()
        .args([
            "--db", &db_path, "--as", ADMIN, "add", "project", "--name", "Acme website", "--code",
            "acme",
        ])
        .assert()
        .success();
    rtc()
        .args([
            "--db", &db_path, "--as", WORKER, "track", "ACME", "-d", "Fix login form", "-t",
            "01:15", "--ticket", "ACME-7",
        ])
        .assert()
        .success();

    let out = temp_out("export_tasks_csv", "csv");
    rtc()
        .args([
            "--db", &db_path, "--as", ADMIN, "export", "--tasks", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("employee,date,project,ticket,time_spent,hours,description"));
    assert!(content.contains("Acme website,ACME-7,1h 15m,1.25,Fix login form"));
}

#[test]
fn test_export_empty_range_writes_empty_list() {
    let db_path = setup_test_db("export_empty_range");
    init_with_users(&db_path);
    work_a_shift(&db_path, WORKER);

    let out = temp_out("export_empty_range", "json");
    rtc()
        .args([
            "--db", &db_path, "--as", ADMIN, "export", "--format", "json", "--file", &out,
            "--range", "2001",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(rows.as_array().map(Vec::len), Some(0));
}

#[test]
fn test_export_requires_admin() {
    let db_path = setup_test_db("export_requires_admin");
    init_with_users(&db_path);

    let out = temp_out("export_requires_admin", "csv");
    rtc()
        .args([
            "--db", &db_path, "--as", WORKER, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .failure()
        .stderr(contains("don't have permission"));

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_export_non_absolute_path_fails() {
    let db_path = setup_test_db("export_non_abs");
    init_with_users(&db_path);

    rtc()
        .args([
            "--db", &db_path, "--as", ADMIN, "export", "--format", "csv", "--file",
            "relative_out.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("Output file path must be absolute"));
}

#[test]
fn test_export_invalid_range_fails() {
    let db_path = setup_test_db("export_invalid_range");
    init_with_users(&db_path);

    let out = temp_out("export_invalid_range", "csv");
    rtc()
        .args([
            "--db", &db_path, "--as", ADMIN, "export", "--format", "csv", "--file", &out,
            "--range", "2025-99",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}

#[test]
fn test_export_force_overwrite() {
    let db_path = setup_test_db("export_force_overwrite");
    init_with_users(&db_path);
    work_a_shift(&db_path, WORKER);

    let out = temp_out("export_force_overwrite", "csv");
    fs::write(&out, "OLD_CONTENT").expect("create file");

    rtc()
        .args([
            "--db", &db_path, "--as", ADMIN, "export", "--format", "csv", "--file", &out,
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(!content.contains("OLD_CONTENT"));
    assert!(content.contains("James"));
}

#[test]
fn test_export_existing_file_declined() {
    let db_path = setup_test_db("export_declined");
    init_with_users(&db_path);

    let out = temp_out("export_declined", "csv");
    fs::write(&out, "OLD_CONTENT").expect("create file");

    rtc()
        .args([
            "--db", &db_path, "--as", ADMIN, "export", "--format", "csv", "--file", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "OLD_CONTENT");
}

fn add_and_work(pool: &mut DbPool, slack_id: &str, name: &str) {
    AddLogic::add_user(
        pool,
        Some(ADMIN),
        NewEmployee {
            name: name.into(),
            slack_id: slack_id.into(),
            admin: false,
        },
    )
    .unwrap();
    ClockLogic::apply(pool, slack_id, ClockType::In, at(9, 0)).unwrap();
    ClockLogic::apply(pool, slack_id, ClockType::Out, at(17, 0)).unwrap();
}

fn export_xlsx(pool: &mut DbPool, name: &str) -> String {
    let out = temp_out(name, "xlsx");
    let req = ExportRequest {
        kind: ExportKind::Shifts,
        format: ExportFormat::Xlsx,
        file: out.clone(),
        range: None,
        user: None,
        force: true,
    };
    ExportLogic::export(pool, &common::test_config("unused.sqlite"), Some(ADMIN), &req)
        .expect("xlsx export succeeds");
    out
}

#[test]
fn test_export_xlsx_with_thirty_char_name() {
    let mut pool = memory_pool();
    // "<name>'s shifts" cut to 31 chars ends right after the apostrophe
    add_and_work(&mut pool, "U_LONG", "Maximiliano Fernandez Gonzalez");

    let out = export_xlsx(&mut pool, "export_xlsx_thirty_chars");
    assert!(fs::read(&out).unwrap().starts_with(b"PK"));
}

#[test]
fn test_export_xlsx_with_duplicate_long_names() {
    let mut pool = memory_pool();
    // same name twice: the numbered sheet is cut right after the apostrophe
    add_and_work(&mut pool, "U_TWIN_1", "Maximiliano Fernandez Gonz");
    add_and_work(&mut pool, "U_TWIN_2", "Maximiliano Fernandez Gonz");

    let out = export_xlsx(&mut pool, "export_xlsx_duplicate_names");
    assert!(fs::read(&out).unwrap().starts_with(b"PK"));
}

