//! Annotation cue plumbing.
//!
//! The core never touches audio hardware; it maps a hovered prop label to
//! a media asset and drives the external collaborator through [`CueSink`]
//! with a fixed contract: stop whatever is playing, then play the new cue
//! once, non-looping, at a fixed volume.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::scene::props::Label;

/// Fixed playback volume for annotation cues.
pub const CUE_VOLUME: f32 = 0.6;

/// Narrated equipment of the stock oxygenation-plant model.
static FACILITY_CUES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("Oil_Absorber", "assets/Audio/Oil_Absorber.mp3"),
        ("Moisture_Absorber", "assets/Audio/Moisture_Absorber.mp3"),
        ("Purger", "assets/Audio/Purger.mp3"),
        (
            "Carbon_Dioxide_Drying_Unit",
            "assets/Audio/Carbon_Dioxide_Drying_Unit.mp3",
        ),
        ("After_Cooler", "assets/Audio/After_Cooler.mp3"),
        ("Nitrogen_Cooler", "assets/Audio/Nitrogen_Cooler.mp3"),
        ("Freon_Cooler", "assets/Audio/Freon_Cooler.mp3"),
        ("Cold_Box", "assets/Audio/Cold_Box.mp3"),
        ("Air_Expander", "assets/Audio/Air_Expander.mp3"),
        ("Air_Filter", "assets/Audio/Air_Filter.mp3"),
        ("Air_Compressor", "assets/Audio/Air_Compressor.mp3"),
        (
            "Cylinder_Filling_Ramp",
            "assets/Audio/Cylinder_Filling_Ramp.mp3",
        ),
        ("Liquid_Oxygen_Pump", "assets/Audio/Liquid_Oxygen_Pump.mp3"),
        (
            "Regeneration_Heater",
            "assets/Audio/Regeneration_Heater.mp3",
        ),
    ]
    .into_iter()
    .collect()
});

/// Data-driven label → asset lookup (replaces per-name branching).
#[derive(Clone, Debug, Default)]
pub struct CueTable {
    cues: HashMap<String, String>,
}

impl CueTable {
    /// Table covering the stock facility model.
    pub fn facility_default() -> Self {
        Self {
            cues: FACILITY_CUES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn insert(&mut self, label: impl Into<String>, asset: impl Into<String>) {
        self.cues.insert(label.into(), asset.into());
    }

    pub fn get(&self, label: &Label) -> Option<&str> {
        self.cues.get(label.as_str()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}

/// External audio collaborator seam.
pub trait CueSink {
    /// Stop the currently playing cue immediately.
    fn stop(&mut self);
    /// Start `asset` once, non-looping, at `volume`.
    fn play(&mut self, asset: &str, volume: f32);
    fn is_playing(&self) -> bool;
}

/// Drives a [`CueSink`] with the stop-before-play, play-once contract.
pub struct CuePlayer<S> {
    table: CueTable,
    sink: S,
}

impl<S: CueSink> CuePlayer<S> {
    pub fn new(table: CueTable, sink: S) -> Self {
        Self { table, sink }
    }

    /// Request the annotation cue for `label`.  A label with no mapped
    /// asset is diagnosed and ignored (an unfinished model is not an
    /// error).
    pub fn trigger(&mut self, label: &Label) {
        match self.table.get(label) {
            Some(asset) => {
                if self.sink.is_playing() {
                    self.sink.stop();
                }
                self.sink.play(asset, CUE_VOLUME);
            }
            None => debug!(%label, "no annotation cue mapped"),
        }
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
