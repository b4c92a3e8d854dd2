pub mod form;
pub mod uploads;
