// Input devices: keyboard, mouse and touch screen.

use tracing::trace;

use super::InputDevice;
use crate::transcript::Transcript;

#[derive(Debug, Clone, Copy, Default)]
pub struct Keyboard;

impl InputDevice for Keyboard {
    fn input(&self, data: &str, out: &mut Transcript) {
        trace!(data, "keyboard input");
        out.narrate(
            "Inputting data from keyboard",
            &[
                "Listen to data from keyboard",
                "Pick data from keyboard",
                "Locate current cursor position",
                "Place data in the current cursor position",
                "Start listening to data from keyboard",
            ],
        );
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Mouse;

impl InputDevice for Mouse {
    fn input(&self, data: &str, out: &mut Transcript) {
        trace!(data, "mouse input");
        out.narrate(
            "Inputting data from mouse",
            &[
                "Listen to data from mouse",
                "Pick data from mouse",
                "Locate current cursor position",
                "Place data in the current cursor position",
                "Start listening to data from mouse",
            ],
        );
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TouchScreen;

impl InputDevice for TouchScreen {
    fn input(&self, data: &str, out: &mut Transcript) {
        trace!(data, "touch input");
        out.narrate(
            "Input process using screen touch",
            &[
                "Listen to data from screen",
                "Pick data from screen",
                "Locate current touch position",
                "Place data in the current touch position",
                "Start listening to data from screen",
            ],
        );
    }
}
