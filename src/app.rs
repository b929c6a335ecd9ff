//! Application state and the scene state machine
//!
//! `App` is owned by the frame driver and borrowed by every scene method;
//! there is no global singleton. Scene swaps go through the pending slot,
//! so a transition requested mid-update is only performed at the top of
//! the next frame, never synchronously inside a collision or render pass.

use crate::assets::Assets;
use crate::tuning::Tuning;

/// The scene to build next, parked until the next frame top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRequest {
    Title,
    Game,
    /// Carries the score captured at the moment of death
    GameOver { score: u32 },
}

/// Process-wide application state
pub struct App {
    /// The loop exits after the current frame once this goes false
    pub running: bool,
    /// While set, scene render and update are suspended
    pub paused: bool,
    pub tuning: Tuning,
    pending: Option<SceneRequest>,
}

impl App {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            running: true,
            paused: false,
            tuning,
            pending: None,
        }
    }

    /// Park a scene swap for the next frame. A later request in the same
    /// frame wins.
    pub fn request_scene(&mut self, request: SceneRequest) {
        self.pending = Some(request);
    }

    /// True while a swap is parked
    pub fn scene_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Claim the parked swap, if any
    pub fn take_pending(&mut self) -> Option<SceneRequest> {
        self.pending.take()
    }
}

/// Capability contract every scene fulfils.
///
/// `initialize` runs exactly once per transition and must fully rebuild
/// the scene's owned entities; no state leaks from a prior occupancy of
/// the same scene type. The driver calls the rest every frame, skipping
/// `render` and `update` while paused.
pub trait Scene {
    fn initialize(&mut self);
    fn handle_input(&mut self, app: &mut App);
    fn update(&mut self, app: &mut App, assets: &Assets);
    fn render(&self, assets: &Assets);
}
