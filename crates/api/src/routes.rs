pub mod health;
pub mod planning;
pub mod slots;
