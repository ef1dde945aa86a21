use crate::{Ball, Config, Events, MatchState, Side};
use hecs::World;

/// Side that won the point if the ball left the play area this tick
pub fn check_boundaries(world: &World, config: &Config) -> Option<Side> {
    let mut query = world.query::<&Ball>();
    let (_entity, ball) = query.iter().next()?;
    let rect = ball.rect(config);

    if rect.left() < 0.0 {
        // Got past the player
        Some(Side::Opponent)
    } else if rect.right() > config.screen_width {
        Some(Side::Player)
    } else {
        None
    }
}

/// Stop play and credit the point to `side`
pub fn award_point(state: &mut MatchState, side: Side, config: &Config, events: &mut Events) {
    state.ball_in_play = false;
    state.winner = Some(side);
    state.score.increment(side);
    state.serve_offset = config.next_serve_offset(state.serve_offset);

    match side {
        Side::Player => events.player_scored = true,
        Side::Opponent => events.opponent_scored = true,
    }

    log::info!(
        "{:?} scored, P1 {} - CPU {}",
        side,
        state.score.player,
        state.score.opponent
    );
    if state.score.get(side) >= config.win_score {
        log::info!("{:?} won the match", side);
    }
}
