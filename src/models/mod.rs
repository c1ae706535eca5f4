pub mod event;
pub mod shift;
pub mod shift_summary;
pub mod status;
pub mod time_of_day;
pub mod timesheet;
pub mod user_state;
