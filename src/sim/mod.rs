mod agent;
mod hover;
mod locomotion;
mod session;
mod turn;

pub use agent::AgentPose;
pub use hover::HoverState;
pub use locomotion::{LocomotionConfig, MovementFrame};
pub use session::{ControllerFrame, FrameEvents, FrameInput, Session, SessionConfig};
pub use turn::{SNAP_TURN_ANGLE, TurnState};
