//! Snap-turn state machine.
//!
//! Sustained right-stick deflection yields exactly one discrete ±45° yaw
//! step; the latch only re-arms once the stick returns to the deadzone
//! band.  Inputs here are already deadzone-normalized, so "inside the
//! band" reads as exactly 0.

use tracing::warn;

/// Discrete yaw step per deflection gesture (radians).
pub const SNAP_TURN_ANGLE: f32 = std::f32::consts::FRAC_PI_4; // 45°

/// `Idle`/`Turning` latch plus the last observed right-stick X.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TurnState {
    turning: bool,
    last_x: f32,
}

impl TurnState {
    /// Feed this frame's normalized right-stick X.  Returns the yaw delta
    /// to apply, if a new gesture started: −45° for a push right, +45°
    /// for a push left (fixed steps, never proportional to magnitude).
    ///
    /// NaN aborts the transition and leaves the latch untouched.
    pub fn step(&mut self, x: f32) -> Option<f32> {
        if x.is_nan() {
            warn!(x, "non-numeric turn input, ignoring");
            return None;
        }
        self.last_x = x;

        if x == 0.0 {
            // stick back in the deadzone: re-arm
            self.turning = false;
            None
        } else if self.turning {
            // still deflected from the current gesture
            None
        } else {
            self.turning = true;
            Some(if x > 0.0 {
                -SNAP_TURN_ANGLE
            } else {
                SNAP_TURN_ANGLE
            })
        }
    }

    #[inline]
    pub fn in_progress(&self) -> bool {
        self.turning
    }

    /// Last observed (non-NaN) stick X.
    #[inline]
    pub fn last_deflection(&self) -> f32 {
        self.last_x
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
