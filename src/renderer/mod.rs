//! Presentation boundary
//!
//! A renderer receives one read-only [`MatchSnapshot`] per frame. Failing to
//! draw is fatal: the error propagates out of the session loop.

pub mod headless;

pub use headless::HeadlessRenderer;

use crate::error::Result;
use crate::sim::MatchSnapshot;

pub trait Renderer {
    fn draw(&mut self, snapshot: &MatchSnapshot) -> Result<()>;
}
