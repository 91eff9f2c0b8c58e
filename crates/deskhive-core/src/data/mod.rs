//! Data models shared between the editor and its embedders.

pub mod floor;

pub use floor::{Floor, FloorId, FloorPlan};
