//! Composite device.
//!
//! A [`Chassis`] owns one implementation per capability, an optional session
//! handle and the transcript the components narrate into. Each slot can be
//! swapped at runtime without touching the others; nothing remembers what was
//! installed before.
//!
//! [`Computer`] is the interface shared by the catalog variants
//! ([`Desktop`], [`Laptop`], [`Walltop`]) and the feature decorators wrapping them.
//! Pass-through operations are provided methods that route to the chassis, so a
//! decorator only has to say how it changes the name and the price.

use std::any::type_name;

use tracing::debug;

use crate::capability::{InputDevice, Memory, OutputDevice, ProcessorChip};
use crate::session::Session;
use crate::transcript::Transcript;

mod variants;

pub use variants::{Desktop, Laptop, Walltop, DESKTOP_PRICE, LAPTOP_PRICE, WALLTOP_PRICE};

fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

// ============================================================================
// Chassis: the four capability slots plus the session association
// ============================================================================

pub struct Chassis {
    input: Box<dyn InputDevice>,
    processor: Box<dyn ProcessorChip>,
    memory: Box<dyn Memory>,
    output: Box<dyn OutputDevice>,
    user: Option<Session>,
    transcript: Transcript,
}

impl Chassis {
    pub fn new(
        input: impl InputDevice + 'static,
        processor: impl ProcessorChip + 'static,
        memory: impl Memory + 'static,
        output: impl OutputDevice + 'static,
        user: Session,
    ) -> Self {
        Self {
            input: Box::new(input),
            processor: Box::new(processor),
            memory: Box::new(memory),
            output: Box::new(output),
            user: Some(user),
            transcript: Transcript::default(),
        }
    }

    pub fn with_transcript(mut self, transcript: Transcript) -> Self {
        self.transcript = transcript;
        self
    }

    pub fn set_input<I: InputDevice + 'static>(&mut self, device: I) {
        debug!(device = short_type_name::<I>(), "input device swapped");
        self.input = Box::new(device);
    }

    pub fn set_processor_chip<P: ProcessorChip + 'static>(&mut self, chip: P) {
        debug!(chip = short_type_name::<P>(), "processor chip swapped");
        self.processor = Box::new(chip);
    }

    pub fn set_memory<M: Memory + 'static>(&mut self, memory: M) {
        debug!(memory = short_type_name::<M>(), "memory swapped");
        self.memory = Box::new(memory);
    }

    pub fn set_output_device<O: OutputDevice + 'static>(&mut self, device: O) {
        debug!(device = short_type_name::<O>(), "output device swapped");
        self.output = Box::new(device);
    }

    pub fn input_device(&self) -> &dyn InputDevice {
        self.input.as_ref()
    }

    pub fn processor_chip(&self) -> &dyn ProcessorChip {
        self.processor.as_ref()
    }

    pub fn memory(&self) -> &dyn Memory {
        self.memory.as_ref()
    }

    pub fn output_device(&self) -> &dyn OutputDevice {
        self.output.as_ref()
    }

    pub fn input(&mut self, data: &str) {
        self.input.input(data, &mut self.transcript);
    }

    pub fn process(&mut self, data: &str) {
        self.processor.process(data, &mut self.transcript);
    }

    pub fn store(&mut self, data: &str) {
        self.memory.store(data, &mut self.transcript);
    }

    pub fn output(&mut self, data: &str) {
        self.output.output(data, &mut self.transcript);
    }

    /// The associated session. The chassis never logs it in or out.
    pub fn user(&self) -> Option<&Session> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: Session) {
        debug!(user = ?user, "user rebound");
        self.user = Some(user);
    }

    pub fn clear_user(&mut self) {
        self.user = None;
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }
}

// ============================================================================
// Computer: shared interface of variants and decorators
// ============================================================================

pub trait Computer {
    fn chassis(&self) -> &Chassis;
    fn chassis_mut(&mut self) -> &mut Chassis;

    fn name(&self) -> String;
    fn price(&self) -> u64;
    fn set_price(&mut self, price: u64);

    /// The value last written by [`Computer::set_price`], 0 if never set.
    /// `price()` does not read it.
    fn stored_price(&self) -> u64;

    fn input(&mut self, data: &str) {
        self.chassis_mut().input(data);
    }

    fn process(&mut self, data: &str) {
        self.chassis_mut().process(data);
    }

    fn store(&mut self, data: &str) {
        self.chassis_mut().store(data);
    }

    fn output(&mut self, data: &str) {
        self.chassis_mut().output(data);
    }

    fn user(&self) -> Option<&Session> {
        self.chassis().user()
    }

    fn set_user(&mut self, user: Session) {
        self.chassis_mut().set_user(user);
    }

    fn set_input(&mut self, device: impl InputDevice + 'static)
    where
        Self: Sized,
    {
        self.chassis_mut().set_input(device);
    }

    fn set_processor_chip(&mut self, chip: impl ProcessorChip + 'static)
    where
        Self: Sized,
    {
        self.chassis_mut().set_processor_chip(chip);
    }

    fn set_memory(&mut self, memory: impl Memory + 'static)
    where
        Self: Sized,
    {
        self.chassis_mut().set_memory(memory);
    }

    fn set_output_device(&mut self, device: impl OutputDevice + 'static)
    where
        Self: Sized,
    {
        self.chassis_mut().set_output_device(device);
    }
}

impl<C: Computer + ?Sized> Computer for Box<C> {
    fn chassis(&self) -> &Chassis {
        (**self).chassis()
    }

    fn chassis_mut(&mut self) -> &mut Chassis {
        (**self).chassis_mut()
    }

    fn name(&self) -> String {
        (**self).name()
    }

    fn price(&self) -> u64 {
        (**self).price()
    }

    fn set_price(&mut self, price: u64) {
        (**self).set_price(price);
    }

    fn stored_price(&self) -> u64 {
        (**self).stored_price()
    }
}
