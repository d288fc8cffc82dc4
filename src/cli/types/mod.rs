//! Type-safe wrappers and enums shared by the CLI and the projection core.

pub mod position;
pub mod time;

pub use position::Position;
pub use time::GameWeek;
