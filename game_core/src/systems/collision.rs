use crate::{Ball, Config, Events, GameRng, Paddle, Side};
use hecs::World;

/// Reverse vertical speed when the ball reaches the top margin or the bottom
/// of the play area.
///
/// By default the bottom check compares the ball's *top* edge with the screen
/// height, so the ball sinks out of view before it turns. `symmetric_walls`
/// compares its bottom edge instead and only flips when moving into a wall.
pub fn bounce_walls(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let rect = ball.rect(config);

        let hit_top = if config.symmetric_walls {
            rect.top() < config.margin && ball.vel.y < 0.0
        } else {
            rect.top() < config.margin
        };
        if hit_top {
            ball.vel.y = -ball.vel.y;
        }

        let hit_bottom = if config.symmetric_walls {
            rect.bottom() > config.screen_height && ball.vel.y > 0.0
        } else {
            rect.top() > config.screen_height
        };
        if hit_bottom {
            ball.vel.y = -ball.vel.y;
        }
    }
}

/// Deflect the ball off the first paddle it overlaps (player paddle first)
pub fn check_paddle_hits(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let mut paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();
    paddles.sort_by_key(|p| p.side != Side::Player);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let ball_rect = ball.rect(config);

        if let Some(paddle) = paddles
            .iter()
            .find(|p| p.rect(config).intersects(&ball_rect))
        {
            deflect(ball, config, rng);
            events.ball_hit_paddle = true;
            log::debug!(
                "ball hit {:?} paddle, velocity now ({}, {})",
                paddle.side,
                ball.vel.x,
                ball.vel.y
            );
        }
    }
}

/// Perturb vy, speed up and reverse vx
fn deflect(ball: &mut Ball, config: &Config, rng: &mut GameRng) {
    ball.vel.y += rng.perturbation(config.ball_perturbation);
    let faster = ball.vel.x + config.ball_speed_increment * ball.vel.x.signum();
    ball.vel.x = -faster;
}
