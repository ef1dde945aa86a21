//! Follow-up dialog after the CPU wins a match

use game_core::MatchLoop;

pub const PROMPT: &str = "The CPU won the match. Play again?";

/// Shown once per lost match; play resumes whatever the answer
pub trait MatchOverHandler {
    fn match_lost(&mut self);
}

/// Check the last tick's events and show the dialog if a lost match was
/// just restarted. Returns true if it was shown.
pub fn notify_match_over(game: &mut MatchLoop, handler: &mut impl MatchOverHandler) -> bool {
    if !std::mem::take(&mut game.events.match_lost) {
        return false;
    }
    handler.match_lost();
    true
}

/// Modal `window.confirm`
#[cfg(target_arch = "wasm32")]
pub struct BrowserDialog;

#[cfg(target_arch = "wasm32")]
impl MatchOverHandler for BrowserDialog {
    fn match_lost(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.confirm_with_message(PROMPT) {
            Ok(answer) => log::info!("Play again answered {}", answer),
            Err(e) => log::warn!("Dialog failed: {:?}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Config, DisplayList, InputEvent, Side};
    use glam::Vec2;

    #[derive(Default)]
    struct Counting {
        shown: u32,
    }

    impl MatchOverHandler for Counting {
        fn match_lost(&mut self) {
            self.shown += 1;
        }
    }

    /// Play `side` to a match win and click to restart
    fn finish_match(game: &mut MatchLoop, list: &mut DisplayList, side: Side) {
        let (x, vx) = match side {
            Side::Opponent => (2.0, -4.0),
            Side::Player => (580.0, 4.0),
        };
        match side {
            Side::Opponent => game.state.score.opponent = game.config.win_score - 1,
            Side::Player => game.state.score.player = game.config.win_score - 1,
        }
        game.push_event(InputEvent::PointerDown);
        game.tick(list);
        game.place_ball(Vec2::new(x, 150.0), Vec2::new(vx, 0.0));
        for _ in 0..5 {
            game.tick(list);
        }
        assert!(!game.state.ball_in_play, "point should be over");
        game.push_event(InputEvent::PointerDown);
        game.tick(list);
    }

    #[test]
    fn test_no_dialog_without_finished_match() {
        let mut game = MatchLoop::new(Config::new(), 1);
        let mut list = DisplayList::new();
        game.tick(&mut list);

        let mut handler = Counting::default();
        assert!(!notify_match_over(&mut game, &mut handler));
        assert_eq!(handler.shown, 0);
    }

    #[test]
    fn test_lost_match_shows_dialog_once_and_play_continues() {
        let mut game = MatchLoop::new(Config::new(), 2);
        let mut list = DisplayList::new();
        finish_match(&mut game, &mut list, Side::Opponent);

        let mut handler = Counting::default();
        assert!(notify_match_over(&mut game, &mut handler));
        assert!(!notify_match_over(&mut game, &mut handler));
        assert_eq!(handler.shown, 1);

        assert!(game.tick(&mut list));
        assert!(game.state.ball_in_play);
    }

    #[test]
    fn test_won_match_shows_no_dialog() {
        let mut game = MatchLoop::new(Config::new(), 3);
        let mut list = DisplayList::new();
        finish_match(&mut game, &mut list, Side::Player);
        assert_eq!(game.state.score.player, 0, "winning score reset by the click");

        let mut handler = Counting::default();
        assert!(!notify_match_over(&mut game, &mut handler));
        assert_eq!(handler.shown, 0);
    }
}
