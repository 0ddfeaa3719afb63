// Storage: SSD and internal memory.

use tracing::trace;

use super::Memory;
use crate::transcript::Transcript;

#[derive(Debug, Clone, Copy, Default)]
pub struct Ssd;

impl Memory for Ssd {
    fn store(&self, data: &str, out: &mut Transcript) {
        trace!(data, "ssd store");
        out.narrate("Storing data on SSD", &[]);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InternalMemory;

impl Memory for InternalMemory {
    fn store(&self, data: &str, out: &mut Transcript) {
        trace!(data, "internal memory store");
        out.narrate(
            "Storage process",
            &[
                "Receive data to be stored",
                "Open internal memory where data is to be stored",
                "Prepare for data storage operation",
                "Launch storage operation",
                "Send back signal representing the state of the storage operation",
            ],
        );
    }
}
