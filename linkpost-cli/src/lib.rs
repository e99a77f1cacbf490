//! Command-line front-end for `linkpost-content` and `linkpost-validator`.

pub mod cli;
pub mod inputs;
pub mod logging;
