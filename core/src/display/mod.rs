//! Display-facing contracts: countdown formatting and the rendering surface.

mod format;

pub use format::format_remaining;

/// Rendering surface driven by the refresh scheduler.
///
/// Implementations draw one or two countdowns (LED matrix, console, ...).
/// Calls must be fast and non-blocking; the scheduler never retries a
/// failed draw.
pub trait Renderer: Send + Sync {
    /// Draw the remaining seconds for the primary and, if present, the
    /// secondary timer.
    fn render(&self, primary_remaining: f64, secondary_remaining: Option<f64>);

    /// Blank the display.
    fn clear(&self);
}
