// Processor chips. Their narration is a heading only.

use tracing::trace;

use super::ProcessorChip;
use crate::transcript::Transcript;

#[derive(Debug, Clone, Copy, Default)]
pub struct Intel;

impl ProcessorChip for Intel {
    fn process(&self, data: &str, out: &mut Transcript) {
        trace!(data, "intel process");
        out.narrate("Processing using Intel chip", &[]);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Amd;

impl ProcessorChip for Amd {
    fn process(&self, data: &str, out: &mut Transcript) {
        trace!(data, "amd process");
        out.narrate("Processing using AMD chip", &[]);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Nvidia;

impl ProcessorChip for Nvidia {
    fn process(&self, data: &str, out: &mut Transcript) {
        trace!(data, "nvidia process");
        out.narrate("Processing using Nvidia", &[]);
    }
}
