//! Per-session context and the fixed-order frame pipeline.
//!
//! [`Session`] owns everything the core mutates — controller states, the
//! avatar pose, the turn latch, the hover tracker and the prop registry —
//! replacing the module-level globals of the source application.  One
//! call to [`Session::update`] runs the whole per-frame chain:
//! normalize inputs → resolve locomotion → resolve snap turn → resolve
//! hover.

use glam::{Mat4, Quat};
use hecs::World;
use tracing::debug;

use super::agent::AgentPose;
use super::hover::HoverState;
use super::locomotion::{self, LocomotionConfig};
use super::turn::TurnState;
use crate::input::{Buttons, ControllerState, Hand};
use crate::scene::manifest::PropEntry;
use crate::scene::props::{self, Label};
use crate::scene::{Aabb, Ray};

/// Raw data one controller contributes to a frame.
#[derive(Clone, Debug, Default)]
pub struct ControllerFrame {
    /// Gamepad axis array as reported by the device; `None` = no sample
    /// this frame.
    pub axes: Option<Vec<f32>>,
    /// Buttons currently held.
    pub held: Buttons,
    /// Controller world transform (aim space).
    pub transform: Mat4,
}

/// Everything the XR/render collaborator supplies for one frame.
#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    /// XR presentation active.  A non-presenting frame is a no-op.
    pub presenting: bool,
    /// Elapsed seconds since the previous frame.
    pub dt: f32,
    pub left: ControllerFrame,
    pub right: ControllerFrame,
    /// Head (XR camera) world orientation, when the runtime exposes it.
    pub head: Option<Quat>,
}

/// What the core hands back after a frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameEvents {
    /// Prop whose annotation cue should start playing, at most one per
    /// frame and only on hover transitions.
    pub annotation: Option<Label>,
}

#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    pub locomotion: LocomotionConfig,
    /// Pointer reach in world units.
    pub ray_reach: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            locomotion: LocomotionConfig::default(),
            ray_reach: Ray::DEFAULT_REACH,
        }
    }
}

/// Owns all per-session state and drives the per-frame systems.
pub struct Session {
    config: SessionConfig,
    agent: AgentPose,
    left: ControllerState,
    right: ControllerState,
    turn: TurnState,
    hover: HoverState,
    props: World,
    ray_active: bool,
    frame: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            agent: AgentPose::default(),
            left: ControllerState::new(Hand::Left),
            right: ControllerState::new(Hand::Right),
            turn: TurnState::default(),
            hover: HoverState::default(),
            props: World::new(),
            ray_active: false,
            frame: 0,
        }
    }

    /*──────────────────────── accessors ─────────────────────────────*/

    #[inline]
    pub fn agent(&self) -> &AgentPose {
        &self.agent
    }

    #[inline]
    pub fn left(&self) -> &ControllerState {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &ControllerState {
        &self.right
    }

    /// Connection events arrive outside the frame loop.
    #[inline]
    pub fn left_mut(&mut self) -> &mut ControllerState {
        &mut self.left
    }

    #[inline]
    pub fn right_mut(&mut self) -> &mut ControllerState {
        &mut self.right
    }

    #[inline]
    pub fn ray_active(&self) -> bool {
        self.ray_active
    }

    /// Prop currently under the pointer.
    #[inline]
    pub fn hovered(&self) -> Option<&Label> {
        self.hover.current()
    }

    #[inline]
    pub fn turn_in_progress(&self) -> bool {
        self.turn.in_progress()
    }

    /*──────────────────────── scene management ──────────────────────*/

    /// Register one interactive prop (label + collider boxes).  Props can
    /// arrive at any time; hover simply finds no candidates before the
    /// model finishes loading.
    pub fn add_prop(&mut self, label: &str, boxes: &[Aabb]) {
        props::spawn_prop(&mut self.props, label, boxes);
    }

    /// Register everything a parsed manifest describes.
    pub fn load_props(&mut self, entries: &[PropEntry]) {
        for entry in entries {
            self.add_prop(&entry.label, &[entry.bounds]);
        }
    }

    #[inline]
    pub fn props(&self) -> &World {
        &self.props
    }

    /// Put the capsule back at the origin (XR session end).
    pub fn reset_pose(&mut self) {
        self.agent = AgentPose::default();
        self.turn = TurnState::default();
        self.hover.clear();
        self.ray_active = false;
    }

    /*──────────────────────── frame pipeline ────────────────────────*/

    /// Run one frame.  Single-threaded, never blocks; every stage guards
    /// its own inputs, so no error here is fatal to the session.
    pub fn update(&mut self, frame: &FrameInput) -> FrameEvents {
        self.frame += 1;
        if !frame.presenting {
            return FrameEvents::default();
        }

        /* 1. normalize inputs */
        self.left.sample(frame.left.axes.as_deref(), frame.left.held);
        self.right.sample(frame.right.axes.as_deref(), frame.right.held);

        // select on the pointing controller toggles the pointer ray
        if self.right.just_pressed(Buttons::SELECT) {
            self.ray_active = !self.ray_active;
            debug!(active = self.ray_active, "pointer ray toggled");
        }

        /* 2. locomotion */
        locomotion::apply(
            &self.config.locomotion,
            self.left.stick(),
            &mut self.agent,
            frame.head,
        );

        /* 3. snap turn */
        if let Some(step) = self.turn.step(self.right.stick().x) {
            self.agent.turn(step);
            debug!(
                frame = self.frame,
                yaw_step = step,
                dt = frame.dt,
                "snap turn"
            );
        }

        /* 4. hover */
        let annotation = if self.ray_active {
            let ray = Ray::from_transform(&frame.right.transform, self.config.ray_reach);
            self.hover.update(&self.props, &ray)
        } else {
            None
        };
        if let Some(label) = &annotation {
            debug!(frame = self.frame, %label, "annotation trigger");
        }

        FrameEvents { annotation }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::GamepadInfo;
    use glam::{Vec3, vec3};

    fn session_with_controllers() -> Session {
        let mut s = Session::default();
        s.left_mut().connect(GamepadInfo { id: "left".into() });
        s.right_mut().connect(GamepadInfo { id: "right".into() });
        s
    }

    fn frame() -> FrameInput {
        FrameInput {
            presenting: true,
            dt: 1.0 / 72.0,
            ..Default::default()
        }
    }

    fn stick(x: f32, y: f32) -> Option<Vec<f32>> {
        // raw vertical is inverted by normalization, pre-invert here
        Some(vec![0.0, 0.0, x, -y])
    }

    #[test]
    fn non_presenting_frame_is_a_no_op() {
        let mut s = session_with_controllers();
        let mut f = frame();
        f.presenting = false;
        f.left.axes = stick(0.0, 1.0);
        let before = *s.agent();
        assert_eq!(s.update(&f), FrameEvents::default());
        assert_eq!(*s.agent(), before);
    }

    #[test]
    fn forward_stick_walks_the_capsule() {
        let mut s = session_with_controllers();
        let mut f = frame();
        f.left.axes = stick(0.0, 1.0);
        for _ in 0..10 {
            s.update(&f);
        }
        assert!((s.agent().position - vec3(0.0, 0.0, -0.5)).length() < 1e-5);
    }

    #[test]
    fn snap_turn_changes_heading_once_per_gesture() {
        let mut s = session_with_controllers();
        let mut f = frame();
        f.right.axes = stick(1.0, 0.0);
        for _ in 0..5 {
            s.update(&f); // held deflection: one step only
        }
        let heading = s.agent().forward();
        // one −45° step from −Z: now halfway toward +X (a right turn)
        let expected = vec3(
            std::f32::consts::FRAC_PI_4.sin(),
            0.0,
            -std::f32::consts::FRAC_PI_4.cos(),
        );
        assert!((heading - expected).length() < 1e-4);
    }

    #[test]
    fn select_toggles_ray_and_hover_fires_on_entry() {
        let mut s = session_with_controllers();
        s.add_prop(
            "Purger",
            &[Aabb::from_center_half(vec3(0.0, 0.0, -2.0), Vec3::splat(0.5))],
        );

        // ray off: pointing at the prop does nothing
        let mut f = frame();
        assert_eq!(s.update(&f).annotation, None);

        // press select on the pointing controller
        f.right.held = Buttons::SELECT;
        let events = s.update(&f);
        assert!(s.ray_active());
        assert_eq!(events.annotation.unwrap().as_str(), "Purger");

        // steady hover: no further events
        assert_eq!(s.update(&f).annotation, None);
        assert_eq!(s.hovered().unwrap().as_str(), "Purger");
    }

    #[test]
    fn nan_axes_never_move_or_panic() {
        let mut s = session_with_controllers();
        let mut f = frame();
        f.left.axes = Some(vec![0.0, 0.0, f32::NAN, -1.0]);
        f.right.axes = Some(vec![0.0, 0.0, f32::NAN, 0.0]);
        let before = *s.agent();
        s.update(&f);
        assert_eq!(*s.agent(), before);
        assert!(!s.turn_in_progress());
    }

    #[test]
    fn reset_pose_returns_to_origin() {
        let mut s = session_with_controllers();
        let mut f = frame();
        f.left.axes = stick(1.0, 1.0);
        f.right.axes = stick(-1.0, 0.0);
        s.update(&f);
        s.reset_pose();
        assert_eq!(*s.agent(), AgentPose::default());
        assert!(!s.ray_active());
        assert_eq!(s.hovered(), None);
    }
}
