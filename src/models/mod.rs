pub mod clock_event;
pub mod employee;
pub mod event_type;
pub mod project;
pub mod shift;
pub mod task;
