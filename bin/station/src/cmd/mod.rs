//! Command implementations.

pub mod check;
pub mod links;
pub mod show;
pub mod title;
