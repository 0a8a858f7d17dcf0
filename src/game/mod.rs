//! Demo applications built on the shell.

pub mod pulse;

pub use pulse::Pulse;
