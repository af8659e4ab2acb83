//! Locomotion resolver: normalized left-stick pair → world displacement.

use glam::{Quat, Vec3};
use tracing::warn;

use super::agent::AgentPose;
use crate::input::StickInput;

/// Which orientation the stick vector is interpreted against.
///
/// The source application's variants disagree (capsule-relative vs
/// head-relative movement, which diverge while the user turns their
/// head); the choice is an explicit config rather than a silent pick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MovementFrame {
    /// Relative to the capsule's own orientation.
    #[default]
    Capsule,
    /// Relative to the XR camera's world orientation, when the frame
    /// input carries one (falls back to the capsule otherwise).
    Head,
}

#[derive(Clone, Copy, Debug)]
pub struct LocomotionConfig {
    /// Displacement per frame at full stick deflection (world units).
    pub speed: f32,
    pub frame: MovementFrame,
    /// Project the displacement onto the horizontal plane (y = 0).
    pub lock_to_ground: bool,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            speed: 0.05,
            frame: MovementFrame::default(),
            lock_to_ground: true,
        }
    }
}

/// Resolve this frame's displacement.  `None` means "no position update":
/// either the NaN guard tripped (diagnosed, never fatal) or the stick is
/// at rest.
pub fn resolve(
    cfg: &LocomotionConfig,
    stick: StickInput,
    agent: &AgentPose,
    head: Option<Quat>,
) -> Option<Vec3> {
    if stick.x.is_nan() || stick.y.is_nan() || cfg.speed.is_nan() {
        warn!(
            x = stick.x,
            y = stick.y,
            speed = cfg.speed,
            "non-numeric locomotion input, skipping frame"
        );
        return None;
    }
    if stick.is_neutral() {
        return None;
    }

    let basis = match cfg.frame {
        MovementFrame::Capsule => agent.orientation,
        MovementFrame::Head => head.unwrap_or(agent.orientation),
    };
    let forward = basis * Vec3::NEG_Z;
    let right = basis * Vec3::X;

    let mut delta = (forward * stick.y + right * stick.x) * cfg.speed;
    if cfg.lock_to_ground {
        delta.y = 0.0;
    }

    if !delta.is_finite() {
        warn!(?delta, "non-finite displacement, skipping frame");
        return None;
    }
    Some(delta)
}

/// Resolve and apply in one step; the agent is untouched when the guard
/// trips.
pub fn apply(cfg: &LocomotionConfig, stick: StickInput, agent: &mut AgentPose, head: Option<Quat>) {
    if let Some(delta) = resolve(cfg, stick, agent, head) {
        agent.translate(delta);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
