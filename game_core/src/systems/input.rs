use hecs::World;

use crate::components::*;
use crate::params::Config;
use crate::resources::*;

/// Copy the currently held keys onto keyboard-driven paddles
pub fn apply_keys(world: &mut World, keys: PaddleIntent) {
    for (_entity, intent) in world.query_mut::<&mut PaddleIntent>() {
        *intent = keys;
    }
}

/// Handle queued quit and pointer events
pub fn process_input(
    world: &mut World,
    config: &Config,
    state: &mut MatchState,
    input: &mut InputQueue,
    events: &mut Events,
) {
    for event in input.drain() {
        match event {
            InputEvent::Quit => {
                state.running = false;
                log::info!("quit requested after {} frames", state.frame);
            }
            // Clicks only count while the ball is idle
            InputEvent::PointerDown if !state.ball_in_play => {
                serve(world, config, state, events);
            }
            InputEvent::PointerDown => {}
        }
    }
}

/// Start the next point, first clearing any score that reached the threshold
pub fn serve(world: &mut World, config: &Config, state: &mut MatchState, events: &mut Events) {
    while let Some(side) = state.score.has_winner(config.win_score) {
        state.score.reset(side);
        // Only a lost match gets the follow-up dialog
        events.match_lost |= side == Side::Opponent;
        log::info!("{:?} match win acknowledged, starting a new match", side);
    }

    state.winner = None;
    state.ball_in_play = true;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config, state.serve_offset);
    }

    log::info!("serve with offset {}", state.serve_offset);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup() -> (World, Config, MatchState, InputQueue, Events) {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Player, config.paddle_start(Side::Player));
        create_ball(&mut world, Vec2::new(-10.0, 100.0), Vec2::new(-6.5, 2.0));
        let state = MatchState::new(&config);
        (world, config, state, InputQueue::new(), Events::new())
    }

    fn ball_of(world: &World) -> Ball {
        let mut query = world.query::<&Ball>();
        let ball = *query.iter().next().expect("ball exists").1;
        ball
    }

    #[test]
    fn test_apply_keys_sets_intent() {
        let (mut world, _config, _state, _input, _events) = setup();
        apply_keys(&mut world, PaddleIntent { up: true, down: false });

        for (_e, intent) in world.query::<&PaddleIntent>().iter() {
            assert!(intent.up);
            assert!(!intent.down);
        }
    }

    #[test]
    fn test_click_serves_idle_ball() {
        let (mut world, config, mut state, mut input, mut events) = setup();
        input.push(InputEvent::PointerDown);

        process_input(&mut world, &config, &mut state, &mut input, &mut events);

        assert!(state.ball_in_play);
        let ball = ball_of(&world);
        assert_eq!(ball.pos, Vec2::new(540.0, 250.0), "Start position shifted by -50");
        assert_eq!(ball.vel, Vec2::new(-4.0, 4.0));
    }

    #[test]
    fn test_click_ignored_while_ball_in_play() {
        let (mut world, config, mut state, mut input, mut events) = setup();
        state.ball_in_play = true;
        input.push(InputEvent::PointerDown);

        process_input(&mut world, &config, &mut state, &mut input, &mut events);

        assert!(state.ball_in_play);
        assert_eq!(ball_of(&world).pos, Vec2::new(-10.0, 100.0));
    }

    #[test]
    fn test_second_click_in_same_tick_is_ignored() {
        let (mut world, config, mut state, mut input, mut events) = setup();
        state.winner = Some(Side::Player);
        state.score.player = 3;
        input.push(InputEvent::PointerDown);
        input.push(InputEvent::PointerDown);

        process_input(&mut world, &config, &mut state, &mut input, &mut events);

        assert!(state.ball_in_play);
        assert_eq!(state.winner, None, "Winner flag cleared by the serve");
        assert_eq!(state.score.player, 3, "Below threshold, score kept");
    }

    #[test]
    fn test_click_after_match_resets_winning_score() {
        let (mut world, config, mut state, mut input, mut events) = setup();
        state.winner = Some(Side::Opponent);
        state.score.opponent = 7;
        state.score.player = 4;
        input.push(InputEvent::PointerDown);

        process_input(&mut world, &config, &mut state, &mut input, &mut events);

        assert_eq!(state.score.opponent, 0);
        assert_eq!(state.score.player, 4, "Only the winning score resets");
        assert!(events.match_lost);
        assert!(state.ball_in_play);
    }

    #[test]
    fn test_player_match_win_resets_without_dialog() {
        let (mut world, config, mut state, mut input, mut events) = setup();
        state.winner = Some(Side::Player);
        state.score.player = 7;
        state.score.opponent = 5;
        input.push(InputEvent::PointerDown);

        process_input(&mut world, &config, &mut state, &mut input, &mut events);

        assert_eq!(state.score.player, 0);
        assert_eq!(state.score.opponent, 5);
        assert!(!events.match_lost);
        assert!(state.ball_in_play);
    }

    #[test]
    fn test_quit_stops_running() {
        let (mut world, config, mut state, mut input, mut events) = setup();
        input.push(InputEvent::Quit);

        process_input(&mut world, &config, &mut state, &mut input, &mut events);

        assert!(!state.running);
        assert!(input.events.is_empty());
    }
}
