//! Core systems

pub mod logging;
