pub mod planning;
pub mod slots;
