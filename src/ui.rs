//! Menu layout and pointer hit-testing
//!
//! Buttons are plain rectangles in field coordinates. Which ones are live
//! depends on the current phase.

use glam::Vec2;
use serde::Serialize;

use crate::sim::MatchPhase;
use crate::sim::geometry::Aabb;

/// What a menu button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MenuAction {
    Start,
    Replay,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Button {
    pub action: MenuAction,
    pub label: &'static str,
    pub rect: Aabb,
}

/// Button size in field units
pub const BUTTON_SIZE: Vec2 = Vec2::new(200.0, 60.0);
/// Vertical distance between stacked buttons
const BUTTON_SPACING: f32 = 80.0;

/// Where the Home and GameOver buttons sit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuLayout {
    pub start: Button,
    pub replay: Button,
    pub quit: Button,
}

impl MenuLayout {
    /// Buttons centered horizontally, stacked below the field center
    pub fn for_field(size: Vec2) -> Self {
        let half = BUTTON_SIZE / 2.0;
        let center = size / 2.0;
        let button = |action, label, offset: f32| Button {
            action,
            label,
            rect: Aabb::from_center(center + Vec2::new(0.0, offset), half),
        };
        Self {
            start: button(MenuAction::Start, "Start", 0.0),
            replay: button(MenuAction::Replay, "Replay", BUTTON_SPACING),
            quit: button(MenuAction::Quit, "Quit", BUTTON_SPACING * 2.0),
        }
    }

    /// Buttons shown in the given phase
    pub fn buttons(&self, phase: MatchPhase) -> Vec<Button> {
        match phase {
            MatchPhase::Home => vec![self.start],
            MatchPhase::GameOver => vec![self.replay, self.quit],
            MatchPhase::Playing | MatchPhase::Paused => Vec::new(),
        }
    }

    /// Action under `point`, if a live button covers it
    pub fn action_at(&self, phase: MatchPhase, point: Vec2) -> Option<MenuAction> {
        self.buttons(phase)
            .into_iter()
            .find(|b| b.rect.contains_point(point))
            .map(|b| b.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> MenuLayout {
        MenuLayout::for_field(Vec2::new(1000.0, 600.0))
    }

    #[test]
    fn test_start_only_on_home() {
        let menu = layout();
        let start = menu.start.rect.center();
        assert_eq!(menu.action_at(MatchPhase::Home, start), Some(MenuAction::Start));
        assert_eq!(menu.action_at(MatchPhase::Playing, start), None);
        assert_eq!(menu.action_at(MatchPhase::GameOver, start), None);
    }

    #[test]
    fn test_game_over_buttons() {
        let menu = layout();
        assert_eq!(
            menu.action_at(MatchPhase::GameOver, menu.replay.rect.center()),
            Some(MenuAction::Replay)
        );
        assert_eq!(
            menu.action_at(MatchPhase::GameOver, menu.quit.rect.center()),
            Some(MenuAction::Quit)
        );
        assert_eq!(menu.action_at(MatchPhase::GameOver, Vec2::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        let menu = layout();
        assert!(!menu.start.rect.overlaps(&menu.replay.rect));
        assert!(!menu.replay.rect.overlaps(&menu.quit.rect));
        let field = Aabb::field(Vec2::new(1000.0, 600.0));
        assert!(field.contains(&menu.quit.rect));
    }
}
