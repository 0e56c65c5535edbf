use std::time::Duration;

use crate::geometry::{Direction, Grid, Vec2};

/// Mixer parameters and the volume every effect is played at.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioConfig {
    pub sample_rate: u32,
    pub channels: u16,
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: 22_050,
            channels: 1,
            volume: 0.1,
        }
    }
}

/// Everything tunable about a game. There is no config file; `Default` is the game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub screen_width: i32,
    /// Playfield height in pixels
    pub screen_height: i32,
    pub cell_size: i32,

    pub start_position: Vec2,
    pub start_direction: Direction,
    pub start_health: i32,
    /// Health lost per self-collision
    pub collision_penalty: i32,
    /// Experience gained per food eaten
    pub food_reward: u32,

    /// Render and input polling rate
    pub frame_rate: u32,
    /// Frames between two simulation ticks
    pub frames_per_tick: u32,
    /// Most simulation ticks run in a single frame after a stall
    pub max_catch_up_ticks: u32,

    pub audio: AudioConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            cell_size: 20,
            start_position: Vec2::new(100, 100),
            start_direction: Direction::Up,
            start_health: 100,
            collision_penalty: 10,
            food_reward: 10,
            frame_rate: 60,
            frames_per_tick: 15,
            max_catch_up_ticks: 1,
            audio: AudioConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn grid(&self) -> Grid {
        Grid {
            width: self.screen_width,
            height: self.screen_height,
            cell_size: self.cell_size,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }

    pub fn tick_interval(&self) -> Duration {
        self.frame_interval() * self.frames_per_tick.max(1)
    }
}
