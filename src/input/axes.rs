//! Analog-stick normalization.
//!
//! WebXR gamepads report the primary thumbstick on axis indices 2 (X) and
//! 3 (Y), each in −1 … +1.  Raw samples pass through a symmetric deadzone
//! and a vertical sign flip so that pushing the stick forward yields a
//! positive Y.

/// Raw magnitudes at or below this clamp to exactly zero (drift suppression).
pub const AXIS_DEADZONE: f32 = 0.1;

/// Gamepad axis index of the thumbstick's horizontal deflection.
pub const AXIS_X: usize = 2;
/// Gamepad axis index of the thumbstick's vertical deflection.
pub const AXIS_Y: usize = 3;

/// Deadzone-filtered, axis-corrected thumbstick pair.
///
/// * `x`: + right, − left (passed through unchanged outside the deadzone)
/// * `y`: + forward, − back (sign-inverted from the raw axis)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StickInput {
    pub x: f32,
    pub y: f32,
}

/// Clamp a raw axis value inside the deadzone band to exactly 0.
///
/// NaN is *not* absorbed here; it fails the band test and flows through so
/// the consuming stage can guard and report it.
#[inline]
fn deadzone(v: f32) -> f32 {
    if (-AXIS_DEADZONE..=AXIS_DEADZONE).contains(&v) {
        0.0
    } else {
        v
    }
}

impl StickInput {
    /// Normalize a gamepad axis array.  Returns `None` when the array is
    /// too short to carry the thumbstick (treated by the caller as a
    /// no-input frame).
    pub fn from_axes(axes: &[f32]) -> Option<Self> {
        let &x = axes.get(AXIS_X)?;
        let &y = axes.get(AXIS_Y)?;
        Some(Self {
            x: deadzone(x),
            y: -deadzone(y),
        })
    }

    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn axes(x: f32, y: f32) -> [f32; 4] {
        [0.0, 0.0, x, y]
    }

    #[test]
    fn deadzone_clamps_to_exact_zero() {
        for v in [-0.1, -0.05, 0.0, 0.03, 0.1] {
            let s = StickInput::from_axes(&axes(v, v)).unwrap();
            assert_eq!(s.x, 0.0);
            assert_eq!(s.y, 0.0);
        }
    }

    #[test]
    fn vertical_axis_is_sign_inverted() {
        let s = StickInput::from_axes(&axes(0.0, -0.8)).unwrap();
        assert_eq!(s.y, 0.8); // stick pushed forward => positive
        let s = StickInput::from_axes(&axes(0.0, 0.5)).unwrap();
        assert_eq!(s.y, -0.5);
    }

    #[test]
    fn horizontal_axis_passes_through() {
        let s = StickInput::from_axes(&axes(0.73, 0.0)).unwrap();
        assert_eq!(s.x, 0.73);
        let s = StickInput::from_axes(&axes(-0.4, 0.0)).unwrap();
        assert_eq!(s.x, -0.4);
    }

    #[test]
    fn short_axis_array_is_no_input() {
        assert_eq!(StickInput::from_axes(&[0.0, 0.0]), None);
        assert_eq!(StickInput::from_axes(&[]), None);
    }

    #[test]
    fn nan_flows_through_for_downstream_guards() {
        let s = StickInput::from_axes(&axes(f32::NAN, 0.5)).unwrap();
        assert!(s.x.is_nan());
        assert_eq!(s.y, -0.5);
    }
}
