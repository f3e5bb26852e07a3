//! Terminal dashboard for daily screen time exports. Point it at the csv log
//! your phone produces and it shows where a day went, together with rule
//! based advice on cutting it down.
//!

pub mod analysis;
pub mod cli;
pub mod dataset;
pub mod utils;
