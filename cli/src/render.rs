//! Console renderer: a stand-in display surface for the LED matrix.
//!
//! Repaints a single stdout line in place. The primary countdown flashes its
//! separator each half second (unless disabled in config); the secondary,
//! when present, renders steady and parenthesized, mirroring the matrix
//! layout where it sits dimmer on the bottom row.

use std::io::Write;

use tickboard_core::{format_remaining, DisplayConfig, Renderer};

const LINE_WIDTH: usize = 24;

pub struct ConsoleRenderer {
    flash_colon_disabled: bool,
}

impl ConsoleRenderer {
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            flash_colon_disabled: !display.flash_colon,
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render(&self, primary_remaining: f64, secondary_remaining: Option<f64>) {
        let primary = format_remaining(primary_remaining, self.flash_colon_disabled);
        let line = match secondary_remaining {
            Some(secondary) => format!("{primary}  ({})", format_remaining(secondary, true)),
            None => primary,
        };

        let mut out = std::io::stdout().lock();
        let _ = write!(out, "\r{line:<LINE_WIDTH$}");
        let _ = out.flush();
    }

    fn clear(&self) {
        let mut out = std::io::stdout().lock();
        let _ = write!(out, "\r{:<LINE_WIDTH$}\r", "");
        let _ = out.flush();
    }
}
