//! Backend-independent drawing
//!
//! The match loop describes each frame through [`Surface`]; front-ends
//! decide how shapes and text reach the screen.

use glam::Vec2;

use crate::components::{Ball, Paddle, Side};
use crate::map::Rect;
use crate::params::Config;
use crate::resources::MatchState;

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BACKGROUND: Color = Color::rgb(50, 25, 50);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalised RGBA for GPU tints
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }

    /// CSS colour string for canvas 2D contexts
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Drawing target for one frame
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn rect(&mut self, rect: Rect, color: Color);
    fn circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// `pos` is the top-left corner of the text box
    fn text(&mut self, text: &str, pos: Vec2, color: Color);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(Color),
    Line { from: Vec2, to: Vec2, color: Color },
    Rect { rect: Rect, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    Text { text: String, pos: Vec2, color: Color },
}

/// Recorded draw commands for one frame
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    pub commands: Vec<DrawCmd>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Circle { .. }))
            .count()
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCmd::Clear(color));
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.commands.push(DrawCmd::Line { from, to, color });
    }

    fn rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCmd::Rect { rect, color });
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCmd::Circle {
            center,
            radius,
            color,
        });
    }

    fn text(&mut self, text: &str, pos: Vec2, color: Color) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            pos,
            color,
        });
    }
}

/// Background, margin line, scores and the ball speed readout
pub fn draw_board(surface: &mut impl Surface, config: &Config, state: &MatchState, ball_speed_x: f32) {
    surface.clear(Color::BACKGROUND);
    surface.line(
        Vec2::new(0.0, config.margin),
        Vec2::new(config.screen_width, config.margin),
        Color::WHITE,
    );

    surface.text(
        &format!("P1: {}", state.score.player),
        Vec2::new(20.0, 15.0),
        Color::WHITE,
    );
    surface.text(
        &format!("CPU: {}", state.score.opponent),
        Vec2::new(config.screen_width - 100.0, 15.0),
        Color::WHITE,
    );
    surface.text(
        &format!("BALL SPEED:{}", ball_speed_x.abs()),
        Vec2::new((config.screen_width / 2.0).floor() - 100.0, 15.0),
        Color::WHITE,
    );
}

pub fn draw_paddles<'a>(
    surface: &mut impl Surface,
    config: &Config,
    paddles: impl IntoIterator<Item = &'a Paddle>,
) {
    for paddle in paddles {
        surface.rect(paddle.rect(config), Color::WHITE);
    }
}

pub fn draw_ball(surface: &mut impl Surface, config: &Config, ball: &Ball) {
    surface.circle(ball.center(config), config.ball_radius, Color::WHITE);
}

/// Instruction text shown while the ball is idle, with x offset and row
pub fn instruction_lines(config: &Config, state: &MatchState) -> Vec<(String, f32, u8)> {
    let Some(side) = state.winner else {
        return vec![
            ("CLICK ANYWHERE TO START".to_string(), 100.0, 0),
            (format!("GET {} POINTS TO WIN", config.win_score), 140.0, 1),
        ];
    };

    let who = match side {
        Side::Player => "YOU",
        Side::Opponent => "CPU",
    };

    if state.score.get(side) >= config.win_score {
        vec![
            (format!("{} WIN!", who), 220.0, 0),
            ("CLICK ANYWHERE TO ".to_string(), 140.0, 1),
            ("RESTART THE GAME".to_string(), 150.0, 2),
        ]
    } else {
        vec![
            (format!("{} SCORED!", who), 220.0, 0),
            ("CLICK ANYWHERE TO CONTINUE".to_string(), 60.0, 1),
        ]
    }
}

pub fn draw_instructions(surface: &mut impl Surface, config: &Config, state: &MatchState) {
    let top = (config.screen_height / 2.0).floor() - 100.0;
    for (text, x, row) in instruction_lines(config, state) {
        surface.text(&text, Vec2::new(x, top + row as f32 * 50.0), Color::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_draws_scores_and_speed() {
        let config = Config::new();
        let mut state = MatchState::new(&config);
        state.score.player = 3;
        state.score.opponent = 5;
        let mut list = DisplayList::new();

        draw_board(&mut list, &config, &state, -4.5);

        assert_eq!(list.commands[0], DrawCmd::Clear(Color::BACKGROUND));
        let texts: Vec<&str> = list.texts().collect();
        assert_eq!(texts, vec!["P1: 3", "CPU: 5", "BALL SPEED:4.5"]);
    }

    #[test]
    fn test_instructions_before_first_point() {
        let config = Config::new();
        let state = MatchState::new(&config);
        let lines: Vec<String> = instruction_lines(&config, &state)
            .into_iter()
            .map(|(text, _, _)| text)
            .collect();
        assert_eq!(lines, vec!["CLICK ANYWHERE TO START", "GET 7 POINTS TO WIN"]);
    }

    #[test]
    fn test_instructions_after_point_and_match() {
        let config = Config::new();
        let mut state = MatchState::new(&config);
        state.winner = Some(Side::Opponent);
        state.score.opponent = 3;
        let first = instruction_lines(&config, &state).remove(0).0;
        assert_eq!(first, "CPU SCORED!");

        state.winner = Some(Side::Player);
        state.score.player = 7;
        let lines: Vec<String> = instruction_lines(&config, &state)
            .into_iter()
            .map(|(text, _, _)| text)
            .collect();
        assert_eq!(lines, vec!["YOU WIN!", "CLICK ANYWHERE TO ", "RESTART THE GAME"]);
    }

    #[test]
    fn test_instruction_rows_are_stacked() {
        let config = Config::new();
        let state = MatchState::new(&config);
        let mut list = DisplayList::new();
        draw_instructions(&mut list, &config, &state);

        let positions: Vec<Vec2> = list
            .commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Text { pos, .. } => Some(*pos),
                _ => None,
            })
            .collect();
        assert_eq!(
            positions,
            vec![Vec2::new(100.0, 150.0), Vec2::new(140.0, 200.0)]
        );
    }

    #[test]
    fn test_color_conversions() {
        assert_eq!(Color::WHITE.to_rgba(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Color::BACKGROUND.to_css(), "rgb(50, 25, 50)");
    }
}
