//! The four capabilities a computer is assembled from.
//!
//! Each capability is a single-operation trait. Implementations do no real work;
//! they narrate a fixed sequence of steps into the [`Transcript`] they are handed.
//! A [`Chassis`](crate::computer::Chassis) holds one boxed implementation per
//! capability and never looks at which concrete type is installed.

use crate::transcript::Transcript;

pub mod input;
pub mod memory;
pub mod output;
pub mod processor;

pub use input::{Keyboard, Mouse, TouchScreen};
pub use memory::{InternalMemory, Ssd};
pub use output::{Monitor, Projector};
pub use processor::{Amd, Intel, Nvidia};

/// Accepts input.
pub trait InputDevice {
    fn input(&self, data: &str, out: &mut Transcript);
}

/// Processes data.
pub trait ProcessorChip {
    fn process(&self, data: &str, out: &mut Transcript);
}

/// Stores data.
pub trait Memory {
    fn store(&self, data: &str, out: &mut Transcript);
}

/// Produces output.
pub trait OutputDevice {
    fn output(&self, data: &str, out: &mut Transcript);
}
