mod axes;
mod controller;

pub use axes::{AXIS_DEADZONE, AXIS_X, AXIS_Y, StickInput};
pub use controller::{Buttons, Connection, ControllerState, GamepadInfo, Hand};
