use std::rc::Rc;

use yew::Reducible;

use crate::content::games::{find_game, EventRecord};

/// Which game, if any, is open in the detail modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    Select(u32),
    Dismiss,
}

impl Selection {
    pub fn selected_id(&self) -> Option<u32> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn record(&self) -> Option<&'static EventRecord> {
        let id = self.selected?;
        match find_game(id) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("selection points at a missing record: {}", err);
                None
            }
        }
    }

    pub fn apply(self, action: SelectionAction) -> Self {
        match action {
            SelectionAction::Select(id) => Selection { selected: Some(id) },
            SelectionAction::Dismiss => Selection { selected: None },
        }
    }
}

impl Reducible for Selection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            // unchanged state keeps the same Rc so nothing re-renders
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Client-space rectangle of the modal's content panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContentBox {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackdropOutcome {
    Dismiss,
    Ignore,
}

pub fn backdrop_click(x: f64, y: f64, content: &ContentBox) -> BackdropOutcome {
    if content.contains(x, y) {
        BackdropOutcome::Ignore
    } else {
        BackdropOutcome::Dismiss
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::games::GAMES;

    fn reduce(state: Rc<Selection>, action: SelectionAction) -> Rc<Selection> {
        state.reduce(action)
    }

    #[test]
    fn starts_with_nothing_selected() {
        let selection = Selection::default();
        assert!(!selection.is_open());
        assert!(selection.record().is_none());
    }

    #[test]
    fn select_then_read_yields_the_record() {
        let game = &GAMES[4];
        let state = reduce(Rc::new(Selection::default()), SelectionAction::Select(game.id));
        let record = state.record().unwrap();
        assert!(std::ptr::eq(record, game));

        let state = reduce(state, SelectionAction::Dismiss);
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn dismiss_when_closed_is_a_no_op() {
        let closed = Rc::new(Selection::default());
        let after = reduce(closed.clone(), SelectionAction::Dismiss);
        assert!(Rc::ptr_eq(&closed, &after));
    }

    #[test]
    fn selecting_another_game_replaces_the_selection() {
        let state = reduce(Rc::new(Selection::default()), SelectionAction::Select(1));
        let state = reduce(state, SelectionAction::Select(8));
        assert_eq!(state.record().map(|g| g.title), Some("Witch's Banquet"));
    }

    #[test]
    fn unknown_id_resolves_to_no_record() {
        let state = Selection::default().apply(SelectionAction::Select(99));
        assert!(state.is_open());
        assert!(state.record().is_none());
    }

    #[test]
    fn backdrop_click_outside_content_dismisses() {
        let content = ContentBox { left: 200.0, top: 100.0, width: 600.0, height: 400.0 };
        assert_eq!(backdrop_click(50.0, 50.0, &content), BackdropOutcome::Dismiss);
        assert_eq!(backdrop_click(500.0, 700.0, &content), BackdropOutcome::Dismiss);
        assert_eq!(backdrop_click(500.0, 300.0, &content), BackdropOutcome::Ignore);
        assert_eq!(backdrop_click(200.0, 100.0, &content), BackdropOutcome::Ignore);
    }
}
