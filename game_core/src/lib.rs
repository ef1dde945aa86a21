pub mod components;
pub mod map;
pub mod match_loop;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use map::*;
pub use match_loop::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong match: draw, simulate, then handle input
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    config: &Config,
    state: &mut MatchState,
    input: &mut InputQueue,
    events: &mut Events,
    rng: &mut GameRng,
    surface: &mut impl Surface,
) {
    if !state.running {
        return;
    }

    // Clear events at start of tick
    events.clear();

    // 1. Board and scores
    let ball_speed_x = first_ball(world).map(|b| b.vel.x).unwrap_or_default();
    draw_board(surface, config, state, ball_speed_x);

    // 2. Paddles
    let paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();
    draw_paddles(surface, config, &paddles);

    // 3. Ball in play: walls, paddles, boundaries, then movement
    if state.ball_in_play {
        bounce_walls(world, config);
        check_paddle_hits(world, config, events, rng);

        match check_boundaries(world, config) {
            None => {
                move_ball(world);
                apply_keys(world, input.keys);
                move_player_paddle(world, config);
                track_opponent(world, config);
                if let Some(ball) = first_ball(world) {
                    draw_ball(surface, config, &ball);
                }
            }
            Some(side) => award_point(state, side, config, events),
        }
    }

    // 4. Idle ball: instructions
    if !state.ball_in_play {
        draw_instructions(surface, config, state);
    }

    // 5. Quit and click events
    process_input(world, config, state, input, events);

    state.frame += 1;
}

/// Helper to create a paddle entity; the player paddle reads the keyboard,
/// the opponent paddle follows the tracking rule
pub fn create_paddle(world: &mut World, side: Side, pos: glam::Vec2) -> hecs::Entity {
    let paddle = Paddle::new(side, pos);
    match side {
        Side::Player => world.spawn((paddle, PaddleIntent::new())),
        Side::Opponent => world.spawn((paddle, Tracker)),
    }
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

pub(crate) fn first_ball(world: &World) -> Option<Ball> {
    let mut query = world.query::<&Ball>();
    let ball = query.iter().next().map(|(_e, b)| *b);
    ball
}
