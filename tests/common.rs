#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use rtimeclock::config::Config;
use rtimeclock::core::add::AddLogic;
use rtimeclock::db::initialize::init_db;
use rtimeclock::db::pool::DbPool;
use rtimeclock::models::employee::NewEmployee;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ADMIN: &str = "U_ADMIN";
pub const WORKER: &str = "U_WORKER";

pub fn rtc() -> Command {
    cargo_bin_cmd!("rtimeclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeclock_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `init` the DB through the CLI and register an admin (Anna) and a worker (James)
pub fn init_with_users(db_path: &str) {
    rtc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rtc()
        .args([
            "--db", db_path, "add", "user", "--slack-id", ADMIN, "--name", "Anna", "--admin",
        ])
        .assert()
        .success();

    rtc()
        .args([
            "--db", db_path, "--as", ADMIN, "add", "user", "--slack-id", WORKER, "--name",
            "James",
        ])
        .assert()
        .success();
}

/// In-memory DB with the schema and the same two users as `init_with_users`
pub fn memory_pool() -> DbPool {
    let mut pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    add_users(&mut pool);
    pool
}

/// File-backed DB with the schema and both users, for tests needing several connections
pub fn file_pool(db_path: &str) -> DbPool {
    let mut pool = DbPool::new(db_path).expect("open db");
    init_db(&pool.conn).expect("init db");
    add_users(&mut pool);
    pool
}

fn add_users(pool: &mut DbPool) {
    AddLogic::add_user(
        pool,
        None,
        NewEmployee {
            name: "Anna".into(),
            slack_id: ADMIN.into(),
            admin: true,
        },
    )
    .expect("add admin");

    AddLogic::add_user(
        pool,
        Some(ADMIN),
        NewEmployee {
            name: "James".into(),
            slack_id: WORKER.into(),
            admin: false,
        },
    )
    .expect("add worker");
}

/// Config pointing at `db_path`, without reporting
pub fn test_config(db_path: &str) -> Config {
    Config::from_yaml(&format!("database: {db_path}\n")).expect("parse config")
}

/// 2025-03-10 at `h:m` UTC
pub fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, h, m, 0).unwrap()
}
