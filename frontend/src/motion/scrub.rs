//! Scroll-linked path drawing with a lagging "scrub".

/// Vertical extent of a section in document coordinates.
///
/// Progress is 0 when the section's top reaches the viewport top and 1 when
/// its bottom reaches the viewport bottom, linear in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWindow {
    pub top: f64,
    pub height: f64,
}

impl ScrollWindow {
    pub fn progress(&self, scroll_y: f64, viewport_height: f64) -> f64 {
        let start = self.top;
        let end = self.top + self.height - viewport_height;
        if end <= start {
            // section no taller than the viewport
            return if scroll_y >= start { 1.0 } else { 0.0 };
        }
        ((scroll_y - start) / (end - start)).clamp(0.0, 1.0)
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// A value that chases its target over a fixed catch-up window.
///
/// Every new target restarts the window from wherever the value currently is,
/// so fast scrolling never makes the value jump. After `lag` seconds without a
/// new target the value equals the target exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Scrub {
    lag: f64,
    from: f64,
    to: f64,
    elapsed: f64,
    value: f64,
}

impl Scrub {
    pub fn new(lag: f64, initial: f64) -> Self {
        Self {
            lag,
            from: initial,
            to: initial,
            elapsed: 0.0,
            value: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.to
    }

    pub fn set_target(&mut self, target: f64) {
        if target == self.to {
            return;
        }
        self.from = self.value;
        self.to = target;
        self.elapsed = 0.0;
        if self.lag <= 0.0 {
            self.value = target;
        }
    }

    /// Moves the value `dt` seconds further along its catch-up window.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if self.is_settled() {
            return self.value;
        }
        self.elapsed += dt.max(0.0);
        let t = self.elapsed / self.lag;
        self.value = if t >= 1.0 {
            self.to
        } else {
            self.from + (self.to - self.from) * ease_out_cubic(t)
        };
        self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashStyle {
    pub array: f64,
    pub offset: f64,
}

impl DashStyle {
    pub fn to_css(&self) -> String {
        format!(
            "stroke-dasharray: {:.2}; stroke-dashoffset: {:.2};",
            self.array, self.offset
        )
    }
}

/// Draws a path of known length in proportion to scroll progress.
#[derive(Debug, Clone, PartialEq)]
pub struct PathReveal {
    length: f64,
    scrub: Scrub,
}

impl PathReveal {
    /// Starts fully hidden.
    pub fn new(length: f64, lag: f64) -> Self {
        Self {
            length,
            scrub: Scrub::new(lag, 0.0),
        }
    }

    pub fn set_progress(&mut self, progress: f64) {
        self.scrub.set_target(progress.clamp(0.0, 1.0) * self.length);
    }

    /// Visible length the scrub is heading for.
    pub fn target_visible(&self) -> f64 {
        self.scrub.target()
    }

    pub fn visible(&self) -> f64 {
        self.scrub.value()
    }

    pub fn advance(&mut self, dt: f64) -> f64 {
        self.scrub.advance(dt)
    }

    pub fn is_settled(&self) -> bool {
        self.scrub.is_settled()
    }

    pub fn dash(&self) -> DashStyle {
        DashStyle {
            array: self.length,
            offset: self.length - self.visible(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_runs_from_top_top_to_bottom_bottom() {
        let window = ScrollWindow { top: 500.0, height: 2000.0 };
        let viewport = 1000.0;
        assert_eq!(window.progress(0.0, viewport), 0.0);
        assert_eq!(window.progress(500.0, viewport), 0.0);
        assert_eq!(window.progress(1000.0, viewport), 0.5);
        assert_eq!(window.progress(1500.0, viewport), 1.0);
        assert_eq!(window.progress(9000.0, viewport), 1.0);
    }

    #[test]
    fn short_section_jumps_to_done_once_reached() {
        let window = ScrollWindow { top: 100.0, height: 600.0 };
        assert_eq!(window.progress(99.0, 800.0), 0.0);
        assert_eq!(window.progress(100.0, 800.0), 1.0);
    }

    #[test]
    fn resizing_the_viewport_moves_progress_without_scrolling() {
        let window = ScrollWindow { top: 0.0, height: 2000.0 };
        let before = window.progress(500.0, 1000.0);
        let after = window.progress(500.0, 1500.0);
        assert_eq!(before, 0.5);
        assert_eq!(after, 1.0);
    }

    #[test]
    fn settled_reveal_wakes_only_when_the_target_moves() {
        let mut reveal = PathReveal::new(1000.0, 1.5);
        reveal.set_progress(0.4);
        reveal.advance(1.5);
        assert!(reveal.is_settled());

        let before = reveal.target_visible();
        reveal.set_progress(0.4);
        assert_eq!(reveal.target_visible(), before);
        assert!(reveal.is_settled());

        reveal.set_progress(0.6);
        assert_ne!(reveal.target_visible(), before);
        assert!(!reveal.is_settled());
    }

    #[test]
    fn path_starts_hidden() {
        let reveal = PathReveal::new(1000.0, 1.5);
        assert_eq!(reveal.dash(), DashStyle { array: 1000.0, offset: 1000.0 });
    }

    #[test]
    fn half_progress_converges_to_half_length_after_the_lag() {
        let mut reveal = PathReveal::new(1000.0, 1.5);
        reveal.set_progress(0.5);
        assert_eq!(reveal.target_visible(), 500.0);
        assert_eq!(reveal.visible(), 0.0);

        let midway = reveal.advance(0.75);
        assert!(midway > 0.0 && midway < 500.0, "midway = {midway}");
        assert!(!reveal.is_settled());

        assert_eq!(reveal.advance(0.75), 500.0);
        assert!(reveal.is_settled());
        assert_eq!(reveal.dash().offset, 500.0);
    }

    #[test]
    fn frames_at_sixty_hertz_settle_within_the_window() {
        let mut reveal = PathReveal::new(1000.0, 1.5);
        reveal.set_progress(0.5);
        let mut last = 0.0;
        for _ in 0..91 {
            let visible = reveal.advance(1.0 / 60.0);
            assert!(visible >= last);
            last = visible;
        }
        assert_eq!(reveal.visible(), 500.0);
    }

    #[test]
    fn retargeting_continues_from_the_current_value() {
        let mut scrub = Scrub::new(1.0, 0.0);
        scrub.set_target(100.0);
        let before = scrub.advance(0.5);
        scrub.set_target(0.0);
        assert_eq!(scrub.value(), before);
        assert_eq!(scrub.advance(1.0), 0.0);
    }

    #[test]
    fn zero_lag_snaps() {
        let mut reveal = PathReveal::new(800.0, 0.0);
        reveal.set_progress(0.25);
        assert_eq!(reveal.visible(), 200.0);
        assert!(reveal.is_settled());
    }

    #[test]
    fn progress_outside_unit_range_is_clamped() {
        let mut reveal = PathReveal::new(1000.0, 0.0);
        reveal.set_progress(1.7);
        assert_eq!(reveal.visible(), 1000.0);
        reveal.set_progress(-0.3);
        assert_eq!(reveal.visible(), 0.0);
    }
}
