//! Track configuration and selection core for the family genome-browser
//! panel of a variant review UI.

pub mod catalog;
pub mod genotype;
pub mod input;
pub mod logging;
pub mod model;
pub mod panel;
pub mod report;
pub mod tracks;
