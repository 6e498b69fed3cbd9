pub mod db_utils;
pub mod employees;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod projects;
pub mod queries;
pub mod stats;
pub mod tasks;
