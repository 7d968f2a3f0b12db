//! Status screen composition
//!
//! Builds the short text screens handed to the [`Presenter`].
//!
//! The status display fits four centered lines of 21 characters.
//! Lines longer than that are cut; lines past the fourth are dropped.
//!
//! [`Presenter`]: crate::traits::Presenter

use core::fmt::Write;

use heapless::{String, Vec};

use super::difficulty::Difficulty;
use super::round::RoundOutcome;
use super::session::GameSession;
use crate::motion::Gesture;
use crate::traits::{SCREEN_COLS, SCREEN_LINES};

/// A screen buffer that can be sent to the presenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    lines: [String<SCREEN_COLS>; SCREEN_LINES],
    used: usize,
}

impl Screen {
    /// Create a new empty screen
    pub const fn new() -> Self {
        Self {
            lines: [String::new(), String::new(), String::new(), String::new()],
            used: 0,
        }
    }

    /// Build a screen from plain lines
    pub fn from_lines(lines: &[&str]) -> Self {
        let mut screen = Self::new();
        for line in lines {
            screen.push_line(line);
        }
        screen
    }

    /// Clear the screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.used = 0;
    }

    /// Append a line, cut to the display width
    pub fn push_line(&mut self, text: &str) {
        let Some(line) = self.next_line() else {
            return;
        };
        for c in text.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
    }

    /// Append a formatted line, cut to the display width
    pub fn push_fmt(&mut self, args: core::fmt::Arguments<'_>) {
        let Some(line) = self.next_line() else {
            return;
        };
        // Overflow leaves the text written so far
        let _ = line.write_fmt(args);
    }

    fn next_line(&mut self) -> Option<&mut String<SCREEN_COLS>> {
        if self.used >= SCREEN_LINES {
            return None;
        }
        let line = &mut self.lines[self.used];
        line.clear();
        self.used += 1;
        Some(line)
    }

    /// Get a line of text
    pub fn line(&self, row: usize) -> &str {
        if row < self.used {
            self.lines[row].as_str()
        } else {
            ""
        }
    }

    /// Number of lines in use
    pub fn len(&self) -> usize {
        self.used
    }

    /// Check if the screen has no lines
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Lines in use, ready for [`Presenter::show`]
    ///
    /// [`Presenter::show`]: crate::traits::Presenter::show
    pub fn lines(&self) -> Vec<&str, SCREEN_LINES> {
        self.lines[..self.used].iter().map(|l| l.as_str()).collect()
    }

    /// Difficulty selection prompt
    pub fn select_prompt() -> Self {
        Self::from_lines(&["Select Difficulty", "Rotate + Press"])
    }

    /// Highlighted difficulty
    pub fn difficulty(difficulty: Difficulty) -> Self {
        Self::from_lines(&["Difficulty:", difficulty.label()])
    }

    /// Shown before the countdown starts
    pub fn get_ready() -> Self {
        Self::from_lines(&["Get Ready!"])
    }

    /// One countdown step
    pub fn countdown(step: u8) -> Self {
        let mut screen = Self::new();
        screen.push_fmt(format_args!("{}", step));
        screen
    }

    /// Round prompt: status line, lives, and the target
    pub fn round_prompt(session: &GameSession, target: Gesture) -> Self {
        let mut screen = Self::new();
        screen.push_fmt(format_args!(
            "D{} L{}",
            session.difficulty().number(),
            session.level()
        ));
        screen.push_fmt(format_args!("Lives:{}", session.lives()));
        screen.push_line(target.label());
        screen
    }

    /// Round result
    pub fn outcome(outcome: RoundOutcome) -> Self {
        Self::from_lines(&[outcome.message()])
    }

    /// Shown between levels
    pub fn next_level() -> Self {
        Self::from_lines(&["Next Level!"])
    }

    /// Session end
    pub fn game_over() -> Self {
        Self::from_lines(&["GAME OVER", "Press Button"])
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
