//! Command-line front end for the restq hosted queue service.

pub mod cli;
pub mod dispatch;
pub mod stdin;

pub use dispatch::{DispatchOptions, Operation, Outcome, dispatch};
