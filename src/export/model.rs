// src/export/model.rs

use crate::models::shift::Shift;
use crate::models::task::Task;
use crate::utils::time::format_hours_minutes;
use chrono::Local;
use serde::Serialize;

/// Shifts of one employee, in chronological order.
#[derive(Debug, Clone)]
pub struct EmployeeShifts {
    pub employee: String,
    pub shifts: Vec<Shift>,
}

/// A task resolved with its project name.
#[derive(Debug, Clone)]
pub struct TaskLine {
    pub project: String,
    pub task: Task,
}

/// Tracked tasks of one employee.
#[derive(Debug, Clone)]
pub struct EmployeeTasks {
    pub employee: String,
    pub tasks: Vec<TaskLine>,
}

/// Local date/time patterns used when rendering timestamps.
#[derive(Debug, Clone)]
pub struct Formats {
    pub date: String,
    pub time: String,
}

/// Flat shift row for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct ShiftExport {
    pub employee: String,
    pub date: String,
    pub from: String,
    pub to: String,
    pub hours: f64,
}

/// Flat task row for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct TaskExport {
    pub employee: String,
    pub date: String,
    pub project: String,
    pub ticket: String,
    pub time_spent: String,
    pub hours: f64,
    pub description: String,
}

pub(crate) const SHIFT_HEADERS: [&str; 3] = ["Date", "From", "To"];
pub(crate) const TASK_HEADERS: [&str; 4] = ["Project", "Ticket", "Time spent", "Description"];

/// `Date, From, To` in local time.
pub(crate) fn shift_to_row(s: &Shift, fmt: &Formats) -> Vec<String> {
    let start = s.start.with_timezone(&Local);
    let end = s.end.with_timezone(&Local);
    vec![
        start.format(&fmt.date).to_string(),
        start.format(&fmt.time).to_string(),
        end.format(&fmt.time).to_string(),
    ]
}

pub(crate) fn task_to_row(t: &TaskLine) -> Vec<String> {
    vec![
        t.project.clone(),
        t.task.ticket.clone().unwrap_or_default(),
        format_hours_minutes(t.task.hours),
        t.task.description.clone(),
    ]
}

pub(crate) fn flatten_shifts(data: &[EmployeeShifts], fmt: &Formats) -> Vec<ShiftExport> {
    data.iter()
        .flat_map(|e| {
            e.shifts.iter().map(move |s| {
                let row = shift_to_row(s, fmt);
                ShiftExport {
                    employee: e.employee.clone(),
                    date: row[0].clone(),
                    from: row[1].clone(),
                    to: row[2].clone(),
                    hours: round2(s.hours()),
                }
            })
        })
        .collect()
}

pub(crate) fn flatten_tasks(data: &[EmployeeTasks], fmt: &Formats) -> Vec<TaskExport> {
    data.iter()
        .flat_map(|e| {
            e.tasks.iter().map(move |t| TaskExport {
                employee: e.employee.clone(),
                date: t.task.date.with_timezone(&Local).format(&fmt.date).to_string(),
                project: t.project.clone(),
                ticket: t.task.ticket.clone().unwrap_or_default(),
                time_spent: format_hours_minutes(t.task.hours),
                hours: round2(t.task.hours),
                description: t.task.description.clone(),
            })
        })
        .collect()
}

/// Worksheet title: `Anna's shifts`, `James' shifts`.
pub(crate) fn possessive_title(name: &str, suffix: &str) -> String {
    let apostrophe = if name.ends_with('s') { "'" } else { "'s" };
    format!("{name}{apostrophe} {suffix}")
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
