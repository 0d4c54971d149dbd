pub mod planning;
pub mod slot;
pub mod time_of_day;
