//! Per-controller state: connection lifecycle, stick sampling, button edges.

use bitflags::bitflags;

use super::axes::StickInput;

bitflags! {
    /// Buttons the core cares about.  `SELECT` is the XR "select" source
    /// (trigger); `SQUEEZE` the grip.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Buttons: u8 {
        const SELECT  = 1 << 0;
        const SQUEEZE = 1 << 1;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

/// Device identity delivered by the XR runtime's "connected" event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GamepadInfo {
    pub id: String,
}

/// Explicit lifecycle replacing ad hoc connected-listener closures.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Connection {
    #[default]
    Disconnected,
    Connected(GamepadInfo),
}

/// One physical motion controller as the core sees it.
///
/// Sampling policy: a frame with no gamepad data holds the last normalized
/// stick value; a disconnect resets the stick to neutral.
#[derive(Clone, Debug)]
pub struct ControllerState {
    pub hand: Hand,
    connection: Connection,
    stick: StickInput,
    held: Buttons,
    pressed: Buttons,
}

impl ControllerState {
    pub fn new(hand: Hand) -> Self {
        Self {
            hand,
            connection: Connection::Disconnected,
            stick: StickInput::default(),
            held: Buttons::empty(),
            pressed: Buttons::empty(),
        }
    }

    /// `Disconnected -> Connected(info)`.  Re-connecting replaces the info.
    pub fn connect(&mut self, info: GamepadInfo) {
        self.connection = Connection::Connected(info);
    }

    /// `Connected -> Disconnected`; stick and buttons reset to neutral.
    pub fn disconnect(&mut self) {
        self.connection = Connection::Disconnected;
        self.stick = StickInput::default();
        self.held = Buttons::empty();
        self.pressed = Buttons::empty();
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        matches!(self.connection, Connection::Connected(_))
    }

    #[inline]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Last normalized thumbstick pair.
    #[inline]
    pub fn stick(&self) -> StickInput {
        self.stick
    }

    /// Buttons that went down this frame (edge, not level).
    #[inline]
    pub fn just_pressed(&self, buttons: Buttons) -> bool {
        self.pressed.contains(buttons)
    }

    /// Feed one frame of raw device data.  `axes: None` (or an array too
    /// short for the thumbstick) is a no-input frame: the previous
    /// normalized pair is held.  Ignored entirely while disconnected.
    pub fn sample(&mut self, axes: Option<&[f32]>, held: Buttons) {
        if !self.is_connected() {
            return;
        }
        if let Some(stick) = axes.and_then(StickInput::from_axes) {
            self.stick = stick;
        }
        self.pressed = held - self.held;
        self.held = held;
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
