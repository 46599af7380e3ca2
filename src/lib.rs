//! Arcade shooter core: entity model, per-tick simulation, and the seams a
//! host plugs into (input snapshot, drawing surface, best-score slot).

pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod log;
pub mod score_store;
pub mod surface;
