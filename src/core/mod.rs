pub mod access;
pub mod add;
pub mod clock;
pub mod config;
pub mod employee;
pub mod log;
pub mod shifts;
pub mod track;
