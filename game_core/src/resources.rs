use crate::components::{PaddleIntent, Side};
use crate::params::{Config, Params};

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub opponent: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn reset(&mut self, side: Side) {
        match side {
            Side::Player => self.player = 0,
            Side::Opponent => self.opponent = 0,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.opponent >= win_score {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

/// Match lifecycle state shared by all systems
#[derive(Debug, Clone)]
pub struct MatchState {
    pub score: Score,
    /// Side that won the last point; cleared on the next serve
    pub winner: Option<Side>,
    pub ball_in_play: bool,
    /// Vertical shift applied to the ball's start position on the next serve
    pub serve_offset: f32,
    pub frame: u64,
    pub running: bool,
}

impl MatchState {
    pub fn new(config: &Config) -> Self {
        Self {
            score: Score::new(),
            winner: None,
            ball_in_play: false,
            serve_offset: config.serve_offset_start,
            frame: 0,
            running: true,
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform draw from {-limit, ..., limit} in hundredths
    pub fn perturbation(&mut self, limit: f32) -> f32 {
        use rand::Rng;
        let steps = (limit * 100.0).round() as i32;
        self.0.gen_range(-steps..=steps) as f32 / 100.0
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    /// Set on the click that restarts a match the opponent won
    pub match_lost: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Discrete input events delivered by the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close / page hide
    Quit,
    /// Primary pointer button pressed anywhere on the canvas
    PointerDown,
}

/// Input queued between ticks
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub events: Vec<InputEvent>,
    pub keys: PaddleIntent,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn set_keys(&mut self, keys: PaddleIntent) {
        self.keys = keys;
    }

    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}

/// One tick in accumulator units (1 / (FPS * 1_000_000) s)
const TICK_UNITS: u64 = 1_000_000;

/// Converts wall-clock time into whole fixed ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    /// Elapsed microseconds scaled by FPS, so a tick is exactly `TICK_UNITS`
    accumulator: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add elapsed seconds and return how many ticks are due
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        let micros = (elapsed.clamp(0.0, Params::MAX_DT) as f64 * 1e6).round() as u64;
        self.accumulator += micros * Params::FPS as u64;

        let ticks = self.accumulator / TICK_UNITS;
        self.accumulator %= TICK_UNITS;
        ticks as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Player);
        score.increment(Side::Player);
        score.increment(Side::Opponent);
        assert_eq!(score.player, 2);
        assert_eq!(score.opponent, 1);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..6 {
            score.increment(Side::Opponent);
        }
        assert_eq!(score.has_winner(7), None, "No winner below threshold");
        score.increment(Side::Opponent);
        assert_eq!(score.has_winner(7), Some(Side::Opponent));
        score.reset(Side::Opponent);
        assert_eq!(score.opponent, 0);
    }

    #[test]
    fn test_perturbation_within_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let p = rng.perturbation(1.0);
            assert!((-1.0..=1.0).contains(&p), "perturbation {} out of range", p);
        }
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.player_scored = true;
        events.ball_hit_paddle = true;
        events.match_lost = true;

        events.clear();

        assert!(!events.player_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.match_lost);
    }

    #[test]
    fn test_input_queue_drain() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::PointerDown);
        queue.push(InputEvent::Quit);

        let drained = queue.drain();
        assert_eq!(drained, vec![InputEvent::PointerDown, InputEvent::Quit]);
        assert!(queue.events.is_empty());
    }

    #[test]
    fn test_frame_clock_steady() {
        let mut clock = FrameClock::new();
        let mut ticks = 0;
        for _ in 0..100 {
            ticks += clock.advance(0.01);
        }
        assert_eq!(ticks, 60, "1.0s of 10ms steps");
    }

    #[test]
    fn test_frame_clock_tick_sized_steps() {
        let mut clock = FrameClock::new();
        let ticks: u32 = (0..60).map(|_| clock.advance(Params::FIXED_DT)).sum();
        assert_eq!(ticks, 60);
    }

    #[test]
    fn test_frame_clock_carries_remainder() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(0.01), 0);
        assert_eq!(clock.advance(0.01), 1);
        assert_eq!(clock.advance(0.01), 0);
        assert_eq!(clock.advance(0.01), 1);
    }

    #[test]
    fn test_frame_clock_clamps_long_gap() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(5.0), 6, "Gap clamped to 0.1s");
        assert_eq!(clock.advance(-1.0), 0);
    }
}
