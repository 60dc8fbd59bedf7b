//! Terminal rendering: labels, animations and the stats chart.
//!
//! Builders return strings so the game loop decides where they go; only the
//! animations write to the terminal directly.

use crate::theme::{Palette, Rgb};
use colored::{ColoredString, Colorize};
use rps_core::{MatchPhase, MatchState, Move, RoundResolution, StatsSnapshot};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Width of the animation lane, in columns
const LANE_WIDTH: usize = 44;
const ANIMATION_FRAMES: u32 = 20;

const ROCK_OUT_CYCLES: u32 = 10;
const ROCK_OUT_FRAME: Duration = Duration::from_millis(200);

/// Gold used for the logo in every theme
const LOGO: Rgb = Rgb(0xE0, 0xCE, 0x57);

const CHART_WIDTH: usize = 24;

pub struct Renderer {
    palette: Palette,
    animation: Duration,
}

fn paint(text: &str, color: Rgb) -> ColoredString {
    text.truecolor(color.0, color.1, color.2)
}

impl Renderer {
    pub fn new(palette: Palette, animation: Duration) -> Self {
        Self { palette, animation }
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn title(&self, text: &str) -> String {
        let bg = self.palette.background;
        paint(text, self.palette.title)
            .bold()
            .on_truecolor(bg.0, bg.1, bg.2)
            .to_string()
    }

    pub fn text(&self, text: &str) -> String {
        paint(text, self.palette.text).to_string()
    }

    pub fn error(&self, text: &str) -> String {
        paint(text, self.palette.error).bold().to_string()
    }

    pub fn banner(&self) -> String {
        let bg = self.palette.background;
        ["         ROCK!         ", "   PAPER! SCISSORS!    "]
            .iter()
            .map(|line| {
                paint(line, LOGO)
                    .bold()
                    .on_truecolor(bg.0, bg.1, bg.2)
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn welcome(&self, name: &str) -> String {
        self.title(&format!("Select an icon below, {name}."))
    }

    /// Round label, or GAME OVER once the match is finished
    pub fn round(&self, state: &MatchState, phase: MatchPhase) -> String {
        match phase {
            MatchPhase::Finished => self.error("GAME OVER"),
            _ => self.title(&format!("ROUND {}", state.current_round())),
        }
    }

    pub fn scoreboard(&self, state: &MatchState) -> String {
        format!(
            "{}   {}   {}",
            self.title(&format!("WINS {}", state.wins())),
            self.title(&format!("LOSSES {}", state.losses())),
            self.title(&format!("TIES {}", state.ties())),
        )
    }

    pub fn outcome(&self, resolution: &RoundResolution) -> String {
        format!(
            "{}  {}",
            self.text(&format!(
                "You: {}  Computer: {}",
                resolution.player, resolution.computer
            )),
            self.error(resolution.outcome.as_str()),
        )
    }

    /// "Current Stats" chart with one bar per slice
    pub fn chart(&self, stats: &StatsSnapshot) -> String {
        let mut lines = vec![self.title("Current Stats")];
        if stats.is_empty() {
            lines.push(self.text("No rounds played yet."));
            return lines.join("\n");
        }
        for slice in &stats.slices {
            lines.push(format!(
                "{} {} {}",
                self.text(&format!("{:<7}", slice.label)),
                paint(&chart_bar(slice.share, CHART_WIDTH), self.palette.title),
                self.text(&format!("{:>5.1}% ({})", slice.share * 100.0, slice.count)),
            ));
        }
        lines.join("\n")
    }

    /// Slide both moves toward the middle of the lane
    pub fn animate(&self, player: Move, computer: Move) -> io::Result<()> {
        if self.animation.is_zero() {
            return Ok(());
        }
        let frame_time = self.animation / ANIMATION_FRAMES;
        let left = glyph(player);
        let right = glyph(computer);
        let mut stdout = io::stdout();

        for step in 0..=ANIMATION_FRAMES {
            let frame = slide_frame(LANE_WIDTH, step, ANIMATION_FRAMES, &left, &right);
            write!(stdout, "\r{}", self.text(&frame))?;
            stdout.flush()?;
            thread::sleep(frame_time);
        }
        writeln!(stdout)
    }

    /// Tilt the rock back and forth under a "ROCK OUT!" banner
    pub fn rock_out(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", self.title("ROCK OUT!"))?;
        for cycle in 0..ROCK_OUT_CYCLES {
            write!(stdout, "\r{}", self.title(rock_out_frame(cycle)))?;
            stdout.flush()?;
            thread::sleep(ROCK_OUT_FRAME);
        }
        writeln!(stdout)
    }
}

fn glyph(m: Move) -> String {
    format!("[{}]", m.as_str().to_uppercase())
}

/// One animation frame: `left` enters from the left edge, `right` from the
/// right edge, and they meet in the middle on the last step.
pub fn slide_frame(width: usize, step: u32, steps: u32, left: &str, right: &str) -> String {
    let left_len = left.chars().count();
    let right_len = right.chars().count();
    let half = width / 2;

    let travel_left = half.saturating_sub(left_len);
    let travel_right = (width - half).saturating_sub(right_len);
    let progress = |travel: usize| travel * step.min(steps) as usize / steps.max(1) as usize;

    let left_pad = progress(travel_left);
    let right_pad = progress(travel_right);
    let gap = width.saturating_sub(left_pad + left_len + right_len + right_pad);

    format!(
        "{}{}{}{}{}",
        " ".repeat(left_pad),
        left,
        " ".repeat(gap),
        right,
        " ".repeat(right_pad)
    )
}

pub fn rock_out_frame(cycle: u32) -> &'static str {
    if cycle % 2 == 0 {
        "  (ROCK) /  "
    } else {
        "  \\ (ROCK)  "
    }
}

/// Horizontal bar filled in proportion to `share`
pub fn chart_bar(share: f64, width: usize) -> String {
    let filled = ((share.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use rps_core::{Difficulty, MatchSession, MatchSetup, ScriptedDraws};

    fn renderer() -> Renderer {
        colored::control::set_override(false);
        Renderer::new(Theme::Bright.palette().unwrap(), Duration::ZERO)
    }

    #[test]
    fn test_slide_frame_starts_at_edges() {
        let frame = slide_frame(20, 0, 10, "[A]", "[B]");
        assert_eq!(frame.chars().count(), 20);
        assert!(frame.starts_with("[A]"));
        assert!(frame.ends_with("[B]"));
    }

    #[test]
    fn test_slide_frame_meets_in_middle() {
        let frame = slide_frame(20, 10, 10, "[A]", "[B]");
        assert_eq!(frame.chars().count(), 20);
        assert_eq!(frame, format!("{}[A][B]{}", " ".repeat(7), " ".repeat(7)));
    }

    #[test]
    fn test_slide_frame_keeps_width_midway() {
        for step in 0..=10 {
            let frame = slide_frame(44, step, 10, "[SCISSORS]", "[ROCK]");
            assert_eq!(frame.chars().count(), 44, "step {step}");
        }
    }

    #[test]
    fn test_rock_out_frames_alternate() {
        assert_ne!(rock_out_frame(0), rock_out_frame(1));
        assert_eq!(rock_out_frame(0), rock_out_frame(2));
    }

    #[test]
    fn test_chart_bar() {
        assert_eq!(chart_bar(0.5, 4), "██░░");
        assert_eq!(chart_bar(0.0, 3), "░░░");
        assert_eq!(chart_bar(1.0, 3), "███");
        assert_eq!(chart_bar(1.7, 3), "███");
    }

    #[test]
    fn test_chart_lists_slices() {
        let renderer = renderer();
        let draws = ScriptedDraws::new(Move::Scissors, 0.5).then(Move::Paper, 0.5);
        let mut session = MatchSession::with_draws(draws);
        session
            .start(MatchSetup::new("Ada", 2, Difficulty::Normal).unwrap())
            .unwrap();
        session.play(Move::Rock).unwrap();
        session.play(Move::Rock).unwrap();

        let chart = renderer.chart(&session.stats());
        assert!(chart.starts_with("Current Stats"));
        assert!(chart.contains("Wins"));
        assert!(chart.contains("50.0% (1)"));
        assert!(chart.contains("Ties"));
        assert!(chart.contains("0.0% (0)"));
    }

    #[test]
    fn test_empty_chart() {
        let renderer = renderer();
        let session = MatchSession::seeded(1);
        let chart = renderer.chart(&session.stats());
        assert!(chart.contains("No rounds played yet."));
    }

    #[test]
    fn test_round_label_switches_to_game_over() {
        let renderer = renderer();
        let state = MatchState::new();
        assert_eq!(renderer.round(&state, MatchPhase::InProgress), "ROUND 1");
        assert_eq!(renderer.round(&state, MatchPhase::Finished), "GAME OVER");
    }

    #[test]
    fn test_zero_duration_animation_is_skipped() {
        let renderer = renderer();
        assert!(renderer.animate(Move::Rock, Move::Paper).is_ok());
    }
}
