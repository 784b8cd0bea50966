//! Change highlighting: when a displayed value changes it shows the signed
//! delta for a fixed dwell time, then settles back to neutral.

pub mod board;
pub mod cell;
pub mod timer;

pub use board::FlashBoard;
pub use cell::{DisplayedValue, Tone};
