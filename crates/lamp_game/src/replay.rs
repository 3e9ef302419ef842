use lamp_core::input::Intent;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::world::{FrameOutcome, GameState};

/// Scripted intent timeline. Each frame's intents are applied as one drained
/// batch, then the world steps by `fixed_dt`, `repeat` times.
#[derive(Debug, Deserialize, Clone)]
pub struct ReplaySequence {
    #[serde(default = "default_dt")]
    pub fixed_dt: f32,
    #[serde(default = "default_aspect")]
    pub aspect_ratio: f32,
    pub frames: Vec<ReplayFrame>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReplayFrame {
    #[serde(default)]
    pub intents: Vec<Intent>,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

impl ReplaySequence {
    /// Intents only land on the first of a frame's repeats.
    pub fn expanded_batches(&self) -> Vec<&[Intent]> {
        let mut out = Vec::new();
        for frame in &self.frames {
            out.push(frame.intents.as_slice());
            for _ in 1..frame.repeat.max(1) {
                out.push(&[][..]);
            }
        }
        out
    }

    pub fn run(&self) -> (GameState, usize) {
        let mut state = GameState::new(self.aspect_ratio);
        let mut frames = 0;
        for batch in self.expanded_batches() {
            frames += 1;
            if state.advance(batch, self.fixed_dt) == FrameOutcome::Quit {
                break;
            }
        }
        (state, frames)
    }
}

pub fn load_replay_from_path(path: &Path) -> Result<ReplaySequence, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let replay: ReplaySequence = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse replay JSON {}: {e}", path.display()))?;
    validate_replay(&replay)?;
    Ok(replay)
}

fn validate_replay(replay: &ReplaySequence) -> Result<(), String> {
    if replay.fixed_dt <= 0.0 {
        return Err("Replay validation failed: fixed_dt must be > 0".to_string());
    }
    if replay.aspect_ratio <= 0.0 {
        return Err("Replay validation failed: aspect_ratio must be > 0".to_string());
    }
    if replay.frames.is_empty() {
        return Err("Replay validation failed: frames list is empty".to_string());
    }
    Ok(())
}

const fn default_dt() -> f32 {
    1.0 / 60.0
}

fn default_aspect() -> f32 {
    1200.0 / 700.0
}

const fn default_repeat() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player;
    use lamp_core::input::{AbilityMode, KeyState};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file_path(name_hint: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "lamp_replay_test_{}_{}_{}.json",
            name_hint,
            std::process::id(),
            nanos
        ))
    }

    fn write_and_load(name_hint: &str, json: &str) -> ReplaySequence {
        let path = temp_file_path(name_hint);
        fs::write(&path, json).expect("write replay file");
        let replay = load_replay_from_path(&path).expect("replay should load");
        let _ = fs::remove_file(path);
        replay
    }

    #[test]
    fn replay_file_parses_and_expands() {
        let replay = write_and_load(
            "parse",
            r#"{
              "fixed_dt": 0.016666667,
              "frames": [
                { "intents": [{ "move_right": "pressed" }], "repeat": 3 },
                { "intents": ["jump", { "set_ability_mode": "shoot" }] }
              ]
            }"#,
        );
        let batches = replay.expanded_batches();
        assert_eq!(batches.len(), 4);
        assert_eq!(batches[0], &[Intent::MoveRight(KeyState::Pressed)]);
        assert!(batches[1].is_empty());
        assert_eq!(
            batches[3],
            &[Intent::Jump, Intent::SetAbilityMode(AbilityMode::Shoot)]
        );
    }

    #[test]
    fn invalid_replays_are_rejected() {
        let path = temp_file_path("invalid");
        fs::write(&path, r#"{ "fixed_dt": 0.0, "frames": [{}] }"#).expect("write replay file");
        assert!(load_replay_from_path(&path).is_err());
        fs::write(&path, r#"{ "frames": [] }"#).expect("write replay file");
        assert!(load_replay_from_path(&path).is_err());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn replay_run_is_deterministic() {
        let replay = write_and_load(
            "deterministic",
            r#"{
              "fixed_dt": 0.016666667,
              "frames": [
                { "intents": [{ "move_right": "pressed" }], "repeat": 60 },
                { "intents": ["jump", { "run": "pressed" }], "repeat": 120 },
                { "intents": [{ "pointer_moved": { "x": 0.5, "y": 0.25 } }] },
                { "intents": [{ "move_left": "pressed" }], "repeat": 45 }
              ]
            }"#,
        );
        let (run_a, frames_a) = replay.run();
        let (run_b, frames_b) = replay.run();
        assert_eq!(frames_a, frames_b);
        assert_eq!(run_a, run_b);
        assert_eq!(run_a.pointer.pos, glam::Vec2::new(0.5, 0.25));
    }

    #[test]
    fn quit_ends_the_replay_without_stepping() {
        let replay = write_and_load(
            "quit",
            r#"{
              "frames": [
                { "intents": [{ "move_right": "pressed" }], "repeat": 10 },
                { "intents": ["quit"] },
                { "repeat": 100 }
              ]
            }"#,
        );
        let (state, frames) = replay.run();
        assert_eq!(frames, 11);
        let expected = player::MIN_X + 10.0 * replay.fixed_dt;
        assert!((state.player.pos.x - expected).abs() < 1e-4);
    }
}
