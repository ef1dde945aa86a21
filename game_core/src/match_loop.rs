use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, GameRng, InputEvent, InputQueue,
    MatchState, Paddle, PaddleIntent, Side, Surface,
};
use hecs::World;

/// A complete match: world, state and input, built once at startup
pub struct MatchLoop {
    pub world: World,
    pub config: Config,
    pub state: MatchState,
    pub input: InputQueue,
    pub events: Events,
    pub rng: GameRng,
}

impl MatchLoop {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();

        create_paddle(&mut world, Side::Player, config.paddle_start(Side::Player));
        create_paddle(&mut world, Side::Opponent, config.paddle_start(Side::Opponent));
        create_ball(&mut world, config.ball_start(), config.ball_velocity);

        Self {
            state: MatchState::new(&config),
            world,
            config,
            input: InputQueue::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Advance one tick; returns false once a quit event has been handled
    pub fn tick(&mut self, surface: &mut impl Surface) -> bool {
        step(
            &mut self.world,
            &self.config,
            &mut self.state,
            &mut self.input,
            &mut self.events,
            &mut self.rng,
            surface,
        );
        self.state.running
    }

    pub fn push_event(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    pub fn set_keys(&mut self, keys: PaddleIntent) {
        self.input.set_keys(keys);
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn ball(&self) -> Option<Ball> {
        crate::first_ball(&self.world)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let mut query = self.world.query::<&Paddle>();
        let paddle = query
            .iter()
            .map(|(_e, p)| *p)
            .find(|p| p.side == side);
        paddle
    }

    /// Overwrite the ball's position and velocity
    pub fn place_ball(&mut self, pos: glam::Vec2, vel: glam::Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }
}
