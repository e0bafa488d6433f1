//! `wasm_bindgen` surface for the host page
//!
//! The page owns `setInterval`/`requestAnimationFrame` and calls in here.
//! After `countdown` returns true it must clear all three timers before the
//! next callback fires.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::difficulty::Difficulty;
use crate::session::GameSession;
use crate::settings::Preferences;
use crate::sim::Bounds;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

#[wasm_bindgen]
pub struct WebGame {
    prefs: Preferences,
    session: GameSession,
}

#[wasm_bindgen]
impl WebGame {
    /// Restore saved preferences and prepare an idle round
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let prefs = Preferences::load();
        let session = GameSession::new(&prefs, seed());
        WebGame { prefs, session }
    }

    pub fn username(&self) -> String {
        self.prefs.username.clone()
    }

    pub fn difficulty(&self) -> String {
        self.prefs.difficulty.as_str().to_string()
    }

    /// Store the player's choices; unknown tiers are rejected
    pub fn choose(&mut self, username: &str, difficulty: &str) -> Result<(), JsValue> {
        let difficulty: Difficulty = difficulty
            .parse()
            .map_err(|e: crate::Error| JsValue::from_str(&e.to_string()))?;
        self.prefs.set_username(username);
        self.prefs.set_difficulty(difficulty);
        self.prefs.save();
        self.session = GameSession::new(&self.prefs, seed());
        Ok(())
    }

    /// Milliseconds between `spawn_tick` calls for the chosen tier
    pub fn spawn_interval_ms(&self) -> u32 {
        self.session.difficulty().profile().spawn_interval_ms
    }

    pub fn start(&mut self, width: f32, height: f32) {
        self.session.start(Bounds::new(width, height));
    }

    pub fn spawn_tick(&mut self) {
        self.session.spawn_tick();
    }

    pub fn advance(&mut self, width: f32, height: f32) {
        self.session.advance(Bounds::new(width, height));
    }

    /// Points earned by a click (0 on a miss)
    pub fn click(&mut self, x: f32, y: f32) -> i32 {
        self.session
            .click(Vec2::new(x, y))
            .map(|s| s.points as i32)
            .unwrap_or(0)
    }

    /// One-second tick; true when the round just ended
    pub fn countdown(&mut self) -> bool {
        self.session.countdown()
    }

    pub fn score(&self) -> i32 {
        self.session.score() as i32
    }

    pub fn time_left(&self) -> u32 {
        self.session.time_left()
    }

    /// Live creatures as JSON for rendering
    pub fn creatures_json(&self) -> String {
        serde_json::to_string(self.session.engine().creatures()).unwrap_or_else(|e| {
            log::warn!("Failed to encode creatures: {e}");
            "[]".to_string()
        })
    }

    /// `POST /ranking` body for the finished round, or undefined
    pub fn submission_json(&self) -> Option<String> {
        let req = self.session.submission()?;
        serde_json::to_string(&req).ok()
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}

fn seed() -> u64 {
    js_sys::Date::now() as u64
}
