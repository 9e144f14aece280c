//! Command implementations for wayfind

pub mod dispatch;
mod path;
mod solve;
