use crate::{Ball, Config, Paddle, PaddleIntent, Tracker};
use hecs::World;

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

/// Apply held keys to keyboard-driven paddles. Up and down held together
/// cancel out; the paddle is not clamped to the play area.
pub fn move_player_paddle(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.up {
            paddle.pos.y -= config.paddle_speed;
        }
        if intent.down {
            paddle.pos.y += config.paddle_speed;
        }
    }
}

/// Move tracking paddles toward the ball at a fixed speed.
///
/// A paddle moves down while the ball lies wholly below its centre and up
/// while the ball lies wholly above it, never past the bottom of the screen
/// or above the top margin.
pub fn track_opponent(world: &mut World, config: &Config) {
    let ball_rect = {
        let mut query = world.query::<&Ball>();
        match query.iter().next() {
            Some((_e, ball)) => ball.rect(config),
            None => return,
        }
    };

    for (_entity, (paddle, _tracker)) in world.query_mut::<(&mut Paddle, &Tracker)>() {
        let rect = paddle.rect(config);
        let center_y = rect.center().y;

        if center_y < ball_rect.top() && rect.bottom() < config.screen_height {
            let room = config.screen_height - rect.bottom();
            paddle.pos.y += config.tracking_speed.min(room);
        } else if center_y > ball_rect.bottom() && rect.top() > config.margin {
            let room = rect.top() - config.margin;
            paddle.pos.y -= config.tracking_speed.min(room);
        }
    }
}
