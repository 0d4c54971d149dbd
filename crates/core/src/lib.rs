//! # ExamPlan Core
//!
//! Domain types shared by the storage and HTTP crates: exam slots, planning
//! requests, the slot-store seam, and the slot generator that expands a
//! planning request into concrete slots.

pub mod errors;
pub mod models;
pub mod planner;
pub mod store;
