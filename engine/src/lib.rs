pub mod action;
pub mod features;
pub mod simulator;
pub mod step;

pub use crate::action::*;
pub use crate::features::*;
pub use crate::simulator::*;
pub use crate::step::*;
