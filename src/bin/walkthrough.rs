//! Headless walkthrough demo.
//!
//! Replays a scripted motion-controller session against a prop manifest
//! and logs movement, snap turns and annotation cues.
//!
//! ```bash
//! cargo run -- --manifest plant.props --frames 90
//! ```

use anyhow::Context;
use clap::Parser;
use glam::{Mat4, Vec3, vec3};
use tracing::info;

use vrwalk_rs::audio::{CuePlayer, CueSink, CueTable};
use vrwalk_rs::input::{Buttons, GamepadInfo};
use vrwalk_rs::scene::{Aabb, manifest};
use vrwalk_rs::sim::{ControllerFrame, FrameInput, Session, SessionConfig};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Prop manifest (label + AABB extents per line); omit for the
    /// built-in demo layout
    #[arg(long, value_name = "FILE")]
    manifest: Option<std::path::PathBuf>,

    /// Frames to simulate per script phase
    #[arg(long, default_value_t = 90)]
    frames: u32,
}

/// Audio collaborator stand-in: logs the cue requests it receives.
#[derive(Default)]
struct LogSink {
    playing: Option<String>,
}

impl CueSink for LogSink {
    fn stop(&mut self) {
        if let Some(asset) = self.playing.take() {
            info!(%asset, "cue stopped");
        }
    }

    fn play(&mut self, asset: &str, volume: f32) {
        info!(%asset, volume, "cue playing");
        self.playing = Some(asset.to_string());
    }

    fn is_playing(&self) -> bool {
        self.playing.is_some()
    }
}

fn init_telemetry() {
    use tracing_subscriber::{EnvFilter, fmt};
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();
}

/// A slice of the oxygenation plant, straight down the walk path.
fn demo_props(session: &mut Session) {
    session.add_prop(
        "Purger",
        &[Aabb::from_center_half(vec3(0.0, 1.4, -8.0), Vec3::splat(0.5))],
    );
    session.add_prop(
        "Cold_Box",
        &[Aabb::from_center_half(vec3(-8.0, 1.4, -4.5), Vec3::splat(0.6))],
    );
}

/// World transform of the pointing controller: held at chest height,
/// aimed where the capsule faces.
fn pointing_controller(session: &Session) -> Mat4 {
    Mat4::from_rotation_translation(
        session.agent().orientation,
        session.agent().position + vec3(0.0, 1.4, 0.0),
    )
}

fn main() -> anyhow::Result<()> {
    init_telemetry();
    let opts = Opts::parse();

    let mut session = Session::new(SessionConfig::default());
    session
        .left_mut()
        .connect(GamepadInfo { id: "left-touch".into() });
    session
        .right_mut()
        .connect(GamepadInfo { id: "right-touch".into() });

    match &opts.manifest {
        Some(path) => {
            let entries = manifest::from_file(path)
                .with_context(|| format!("loading prop manifest {}", path.display()))?;
            info!(props = entries.len(), "manifest loaded");
            session.load_props(&entries);
        }
        None => demo_props(&mut session),
    }

    let mut player = CuePlayer::new(CueTable::facility_default(), LogSink::default());
    let dt = 1.0 / 72.0;

    let mut run_phase = |session: &mut Session,
                         name: &str,
                         frames: u32,
                         left: (f32, f32),
                         right: (f32, f32),
                         held: Buttons| {
        for _ in 0..frames {
            let input = FrameInput {
                presenting: true,
                dt,
                left: ControllerFrame {
                    // raw vertical axis is inverted by normalization
                    axes: Some(vec![0.0, 0.0, left.0, -left.1]),
                    held: Buttons::empty(),
                    transform: Mat4::IDENTITY,
                },
                right: ControllerFrame {
                    axes: Some(vec![0.0, 0.0, right.0, -right.1]),
                    held,
                    transform: pointing_controller(session),
                },
                head: None,
            };
            let events = session.update(&input);
            if let Some(label) = events.annotation {
                player.trigger(&label);
            }
        }
        let pos = session.agent().position;
        info!(
            phase = name,
            x = pos.x,
            z = pos.z,
            hovered = session.hovered().map(|l| l.as_str()).unwrap_or("-"),
            "phase done"
        );
    };

    // aim the pointer, walk up to the purger, listen
    run_phase(&mut session, "raise pointer", 1, (0.0, 0.0), (0.0, 0.0), Buttons::SELECT);
    run_phase(
        &mut session,
        "walk to purger",
        opts.frames,
        (0.0, 1.0),
        (0.0, 0.0),
        Buttons::SELECT,
    );

    // snap 90° left in two gestures, then walk toward the cold box
    for _ in 0..2 {
        run_phase(&mut session, "snap left", 1, (0.0, 0.0), (-1.0, 0.0), Buttons::SELECT);
        run_phase(&mut session, "release stick", 1, (0.0, 0.0), (0.0, 0.0), Buttons::SELECT);
    }
    run_phase(
        &mut session,
        "walk to cold box",
        opts.frames,
        (0.0, 1.0),
        (0.0, 0.0),
        Buttons::SELECT,
    );

    info!("session end, resetting pose");
    session.reset_pose();
    Ok(())
}
