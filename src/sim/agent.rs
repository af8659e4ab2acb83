//! Avatar root transform ("capsule"/"dolly") the camera rig hangs off.

use glam::{Quat, Vec3};

/// Avatar position + orientation in world space.
///
/// The locomotion resolver and the snap-turn machine are the only writers;
/// the render collaborator reads it each frame to place the camera rig.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentPose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Default for AgentPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

impl AgentPose {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit vector the capsule faces: local −Z in world space.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Unit vector to the capsule's right: local +X in world space.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    #[inline]
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Rotate about the world +Y axis (positive = turn left).
    pub fn turn(&mut self, yaw_delta: f32) {
        self.orientation = (Quat::from_rotation_y(yaw_delta) * self.orientation).normalize();
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn forward_and_right_are_orthonormal() {
        let mut pose = AgentPose::default();
        pose.turn(0.37);
        let f = pose.forward();
        let r = pose.right();
        assert!((f.length() - 1.0).abs() < 1e-5);
        assert!((r.length() - 1.0).abs() < 1e-5);
        assert!(f.dot(r).abs() < 1e-5);
    }

    #[test]
    fn identity_faces_negative_z() {
        let pose = AgentPose::default();
        assert!((pose.forward() - Vec3::NEG_Z).length() < 1e-6);
        assert!((pose.right() - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn quarter_turn_left_faces_negative_x() {
        let mut pose = AgentPose::default();
        pose.turn(FRAC_PI_2);
        assert!((pose.forward() - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn turns_compose_about_world_up() {
        let mut pose = AgentPose::default();
        for _ in 0..8 {
            pose.turn(FRAC_PI_2 / 2.0); // eight 22.5° steps = 180°
        }
        assert!((pose.forward() - Vec3::Z).length() < 1e-4);
    }
}
