//! Fire-and-forget forwarding of tracked tasks to the external reporting form.

mod client;

use crate::config::ReportingConfig;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use serde::Serialize;
use serde_json::{Value, json};
use std::thread::{self, JoinHandle};

const ADD_RECORD_MUTATION: &str = "mutation addRecord($form: ID!, $data: JSON!) {\n  addRecord(form: $form, data: $data) {\n    id\n    createdAt\n  }\n}";

/// Record sent for every tracked task.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaskReport {
    pub ticket: Option<String>,
    pub description: String,
    pub date: String,
    pub hours: f64,
    pub project: String,
    pub employee: String,
}

/// GraphQL request body for the `addRecord` mutation.
pub fn build_request_body(form_id: &str, report: &TaskReport) -> Value {
    json!({
        "operationName": "addRecord",
        "variables": {
            "form": form_id,
            "data": report,
        },
        "query": ADD_RECORD_MUTATION,
    })
}

/// Post one report and wait for the answer.
pub fn send_report(cfg: &ReportingConfig, report: &TaskReport) -> AppResult<()> {
    let client = client::create_blocking_client()?;

    let mut request = client
        .post(&cfg.url)
        .json(&build_request_body(&cfg.form_id, report));
    if !cfg.token.is_empty() {
        request = request.bearer_auth(&cfg.token);
    }

    let response = request
        .send()
        .map_err(|e| AppError::Reporting(e.to_string()))?;

    if !response.status().is_success() {
        return Err(AppError::Reporting(format!(
            "reporting endpoint answered {}",
            response.status()
        )));
    }
    Ok(())
}

/// Send `report` on a detached thread.
///
/// Failures never reach the caller and are not retried: they are written to
/// the internal log of `db_path` (see `log --print`). The handle is returned
/// so that the process can wait for the request before exiting.
pub fn forward_task(cfg: ReportingConfig, report: TaskReport, db_path: String) -> JoinHandle<()> {
    thread::spawn(move || {
        let Err(e) = send_report(&cfg, &report) else {
            return;
        };

        match DbPool::new(&db_path) {
            Ok(pool) => ttlog_quiet(
                &pool.conn,
                "report_failed",
                &report.project,
                &format!("Error trying to save task to the reporting system: {e}"),
            ),
            Err(db_err) => warning(format!("Failed to write internal log: {db_err}")),
        }
    })
}

/// Wait for a forwarding thread. A panic inside it is reported as a warning
/// and never propagated; returns whether the thread finished normally.
pub fn wait_for_forward(handle: JoinHandle<()>) -> bool {
    if handle.join().is_ok() {
        return true;
    }
    warning("Forwarding the task to the reporting system stopped unexpectedly");
    false
}
