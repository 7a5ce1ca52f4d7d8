use std::time::Duration;

use crate::config;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntranceState {
    #[default]
    NotTriggered,
    Triggered,
}

/// One-shot reveal trigger. `Triggered` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Entrance {
    state: EntranceState,
}

impl Entrance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EntranceState {
        self.state
    }

    pub fn is_triggered(&self) -> bool {
        self.state == EntranceState::Triggered
    }

    /// Feeds one intersection report. Returns `true` only for the report that
    /// fires the transition.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (self.state, intersecting) {
            (EntranceState::NotTriggered, true) => {
                self.state = EntranceState::Triggered;
                true
            }
            _ => false,
        }
    }
}

/// How a freshly mounted item begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMode {
    /// Wait for the viewport to reach it.
    Observe,
    /// Nothing can report intersection, so show it straight away.
    ShowNow,
}

pub fn start_mode(observer_available: bool, reduced_motion: bool, element_mounted: bool) -> StartMode {
    if observer_available && !reduced_motion && element_mounted {
        StartMode::Observe
    } else {
        StartMode::ShowNow
    }
}

pub fn stagger_delay(index: usize) -> Duration {
    Duration::from_millis(index as u64 * u64::from(config::ENTRANCE_STAGGER_MS))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceFrame {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl EntranceFrame {
    pub const HIDDEN: EntranceFrame = EntranceFrame {
        opacity: 0.0,
        translate_y: 80.0,
        scale: 0.9,
    };

    pub const SHOWN: EntranceFrame = EntranceFrame {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    pub fn for_state(state: EntranceState) -> Self {
        match state {
            EntranceState::NotTriggered => Self::HIDDEN,
            EntranceState::Triggered => Self::SHOWN,
        }
    }
}

/// Inline style for an item at `index` in the given state.
pub fn entrance_style(state: EntranceState, index: usize) -> String {
    let frame = EntranceFrame::for_state(state);
    format!(
        "opacity: {}; transform: translateY({}px) scale({}); \
         transition: opacity {ms}ms, transform {ms}ms; \
         transition-delay: {delay}ms; \
         transition-timing-function: cubic-bezier(0.25, 0.46, 0.45, 0.94);",
        frame.opacity,
        frame.translate_y,
        frame.scale,
        ms = config::ENTRANCE_DURATION_MS,
        delay = stagger_delay(index).as_millis(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_on_first_intersection() {
        let mut entrance = Entrance::new();
        assert!(!entrance.observe(false));
        assert_eq!(entrance.state(), EntranceState::NotTriggered);
        assert!(entrance.observe(true));
        assert!(!entrance.observe(true));
        assert!(entrance.is_triggered());
    }

    #[test]
    fn leaving_the_viewport_does_not_reverse() {
        let mut entrance = Entrance::new();
        entrance.observe(true);
        for intersecting in [false, true, false, false] {
            assert!(!entrance.observe(intersecting));
            assert_eq!(entrance.state(), EntranceState::Triggered);
        }
    }

    #[test]
    fn items_that_cannot_be_observed_show_immediately() {
        assert_eq!(start_mode(true, false, true), StartMode::Observe);
        assert_eq!(start_mode(false, false, true), StartMode::ShowNow);
        assert_eq!(start_mode(true, true, true), StartMode::ShowNow);
        // observer present but the wrapper never got a DOM node
        assert_eq!(start_mode(true, false, false), StartMode::ShowNow);
    }

    #[test]
    fn stagger_is_a_function_of_index() {
        assert_eq!(stagger_delay(0), Duration::ZERO);
        assert_eq!(stagger_delay(1), Duration::from_millis(100));
        assert_eq!(stagger_delay(7), Duration::from_millis(700));
    }

    #[test]
    fn items_entering_together_start_in_index_order() {
        let mut cards = vec![Entrance::new(); 8];
        let fired: Vec<usize> = cards
            .iter_mut()
            .enumerate()
            .filter_map(|(index, card)| card.observe(true).then_some(index))
            .collect();
        assert_eq!(fired.len(), 8);

        let starts: Vec<Duration> = fired.into_iter().map(stagger_delay).collect();
        assert!(starts.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn style_moves_from_hidden_to_shown() {
        let hidden = entrance_style(EntranceState::NotTriggered, 2);
        assert!(hidden.starts_with("opacity: 0; transform: translateY(80px) scale(0.9);"));
        assert!(hidden.contains("transition-delay: 200ms;"));

        let shown = entrance_style(EntranceState::Triggered, 2);
        assert!(shown.starts_with("opacity: 1; transform: translateY(0px) scale(1);"));
    }
}
