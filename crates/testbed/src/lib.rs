//! Headless pursuit testbed
//!
//! Plays the role of the scene adapter without any rendering: it feeds the
//! simulation a per-frame time delta, reads state back each frame, and owns
//! the settings used to (re)build simulations. Settings edits never touch the
//! running instance; they apply on the next [`PursuitScene::replace_simulation`].

use std::path::Path;

use skychase_steering::{Settings, Simulation};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from loading a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings file could not be read
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid TOML for [`Settings`]
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load settings from a TOML file
///
/// Missing fields fall back to their defaults, so a partial file is fine.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let text = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}

/// Outcome of a bounded testbed run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunOutcome {
    /// The pursuer caught the target
    Caught {
        /// Simulated seconds until the catch
        time: f32,
        /// Frames advanced until the catch
        frames: u64,
    },
    /// The frame budget ran out first
    TimedOut {
        /// Frames advanced
        frames: u64,
    },
}

/// Owning context for the current simulation and its settings
pub struct PursuitScene {
    /// Settings used for the next rebuild
    pub settings: Settings,
    /// The running simulation
    pub simulation: Simulation,
    frame: u64,
}

impl PursuitScene {
    /// Build a scene and its first simulation from the given settings
    pub fn new(settings: Settings) -> Self {
        let simulation = Simulation::new(&settings);
        Self {
            settings,
            simulation,
            frame: 0,
        }
    }

    /// Frames advanced since the last (re)build
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Discard the current simulation and build a fresh one from the current
    /// settings
    pub fn replace_simulation(&mut self) {
        self.simulation = Simulation::new(&self.settings);
        self.frame = 0;
        info!("simulation restarted");
    }

    /// Flip the finished flag, pausing or resuming the run
    pub fn toggle_pause(&mut self) {
        self.simulation.finished = !self.simulation.finished;
    }

    /// Advance one frame
    pub fn step(&mut self, dt: f32) {
        self.simulation.update(dt);
        self.frame += 1;

        let pursuer = self.simulation.pursuer.position();
        let target = self.simulation.target.position;
        debug!(
            frame = self.frame,
            time = self.simulation.time,
            pursuer = ?pursuer,
            target = ?target,
            "frame advanced"
        );
    }

    /// Run at a fixed timestep until the target is caught or the frame
    /// budget runs out
    pub fn run(&mut self, dt: f32, max_frames: u64) -> RunOutcome {
        while self.frame < max_frames {
            self.step(dt);
            if self.simulation.finished {
                info!(
                    time = self.simulation.time,
                    frames = self.frame,
                    "target caught"
                );
                return RunOutcome::Caught {
                    time: self.simulation.time,
                    frames: self.frame,
                };
            }
        }
        RunOutcome::TimedOut { frames: self.frame }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::io::Write;

    fn catchable_settings() -> Settings {
        Settings {
            target_velocity: Vec3::new(10.0, 0.0, 0.0),
            pursuer_position: Vec3::new(-30.0, 0.0, 0.0),
            pursuer_velocity: Vec3::ZERO,
            max_speed: 30.0,
            max_steer_force: 20.0,
            vision_distance: 10.0,
            vision_angle: 60.0,
        }
    }

    #[test]
    fn test_run_reports_catch() {
        let mut scene = PursuitScene::new(catchable_settings());

        match scene.run(1.0 / 60.0, 3600) {
            RunOutcome::Caught { time, frames } => {
                assert!(time > 0.0);
                assert!(frames > 0);
            }
            RunOutcome::TimedOut { frames } => {
                panic!("timed out after {} frames", frames);
            }
        }
    }

    #[test]
    fn test_replace_simulation_resets_run() {
        let mut scene = PursuitScene::new(catchable_settings());
        scene.run(1.0 / 60.0, 3600);
        assert!(scene.simulation.finished);

        scene.replace_simulation();

        assert_eq!(scene.frame(), 0);
        assert_eq!(scene.simulation.time, 0.0);
        assert!(!scene.simulation.finished);
        assert_eq!(scene.simulation.target.position, Vec3::ZERO);
    }

    #[test]
    fn test_settings_edits_apply_on_rebuild_only() {
        let mut scene = PursuitScene::new(catchable_settings());
        scene.step(1.0 / 60.0);

        scene.settings.pursuer_position = Vec3::new(99.0, 0.0, 0.0);
        assert_ne!(scene.simulation.pursuer.position(), Vec3::new(99.0, 0.0, 0.0));

        scene.replace_simulation();
        assert_eq!(scene.simulation.pursuer.position(), Vec3::new(99.0, 0.0, 0.0));
    }

    #[test]
    fn test_toggle_pause_stops_time() {
        let mut scene = PursuitScene::new(catchable_settings());

        scene.toggle_pause();
        scene.step(1.0 / 60.0);
        assert_eq!(scene.simulation.time, 0.0);

        scene.toggle_pause();
        scene.step(1.0 / 60.0);
        assert!(scene.simulation.time > 0.0);
    }

    #[test]
    fn test_load_settings_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "max_speed = 25.0\nvision_angle = 45.0\ntarget_velocity = [1.0, 0.0, -2.0]"
        )
        .unwrap();

        let settings = load_settings(file.path()).unwrap();

        assert_eq!(settings.max_speed, 25.0);
        assert_eq!(settings.vision_angle, 45.0);
        assert_eq!(settings.target_velocity, Vec3::new(1.0, 0.0, -2.0));
        // Unlisted fields keep their defaults
        assert_eq!(settings.vision_distance, Settings::default().vision_distance);
    }

    #[test]
    fn test_load_settings_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_speed = \"fast\"").unwrap();

        assert!(matches!(
            load_settings(file.path()),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_load_settings_missing_file() {
        assert!(matches!(
            load_settings(Path::new("/nonexistent/settings.toml")),
            Err(SettingsError::Io(_))
        ));
    }
}
