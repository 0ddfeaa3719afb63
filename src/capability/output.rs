// Output devices: monitor and projector.

use tracing::trace;

use super::OutputDevice;
use crate::transcript::Transcript;

fn narrate_output(target: &str, out: &mut Transcript) {
    let open = format!("Open {target} where data is to be displayed");
    out.narrate(
        &format!("Outputting to {target}"),
        &[
            "Receive data to be output",
            open.as_str(),
            "Prepare for data output operation",
            "Launch output operation",
            "Send back signal representing the state of the output operation",
        ],
    );
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Monitor;

impl OutputDevice for Monitor {
    fn output(&self, data: &str, out: &mut Transcript) {
        trace!(data, "monitor output");
        narrate_output("monitor", out);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Projector;

impl OutputDevice for Projector {
    fn output(&self, data: &str, out: &mut Transcript) {
        trace!(data, "projector output");
        narrate_output("projector", out);
    }
}
