//! Scenes: one module per state-machine variant
//!
//! Construction goes through [`build`], so the frame driver performs swaps
//! without knowing scene internals.

mod game;
mod game_over;
mod title;

pub use game::GameScene;
pub use game_over::GameOverScene;
pub use title::TitleScene;

use crate::app::{App, Scene, SceneRequest};

/// Build the scene a request names. Game scenes get a fresh RNG seed so
/// every run plays its own wave sequence.
pub fn build(request: SceneRequest, app: &App, seed: u64) -> Box<dyn Scene> {
    match request {
        SceneRequest::Title => Box::new(TitleScene::new()),
        SceneRequest::Game => Box::new(GameScene::new(seed, app.tuning.clone())),
        SceneRequest::GameOver { score } => Box::new(GameOverScene::new(score)),
    }
}
