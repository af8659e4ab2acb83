//! Locomotion-and-interaction core of a VR facility walkthrough.
//!
//! Once per rendered frame a [`sim::Session`] consumes controller axis
//! samples and world transforms from the XR collaborator, moves the avatar
//! capsule, resolves snap turns and pointer hover, and hands back at most
//! one annotation event for the audio collaborator to voice.

pub mod audio;
pub mod input;
pub mod scene;
pub mod sim;
