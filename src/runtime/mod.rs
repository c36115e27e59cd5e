//! Real-time boundary helpers.
//!
//! The device callback, its buffering and underflow policy stay with the
//! caller. [`Player`] only turns "give me the next N samples" into graph
//! pulls at increasing ticks.

mod player;

pub use player::Player;
