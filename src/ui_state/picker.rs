use crate::{domain::Routine, key_handler::Director};
use ratatui::widgets::ListState;

pub struct RoutinePicker {
    pub(crate) routines: Vec<Routine>,
    pub(crate) list_pos: ListState,
}

impl RoutinePicker {
    pub fn new() -> Self {
        RoutinePicker {
            routines: Vec::new(),
            list_pos: ListState::default(),
        }
    }

    /// Swaps in a fresh routine list, keeping the selection on the same
    /// routine when it still exists.
    pub fn sync(&mut self, routines: Vec<Routine>) {
        let selected_id = self.selected().map(|r| r.get_id());
        self.routines = routines;

        let idx = match selected_id {
            Some(id) => self.routines.iter().position(|r| r.get_id() == id),
            None => None,
        };

        self.list_pos.select(match self.routines.is_empty() {
            true => None,
            false => Some(idx.unwrap_or(0)),
        });
    }

    pub fn selected(&self) -> Option<&Routine> {
        self.list_pos.selected().and_then(|i| self.routines.get(i))
    }

    pub fn scroll(&mut self, director: Director) {
        let len = self.routines.len();
        if len == 0 {
            return;
        }

        let current = self.list_pos.selected().unwrap_or(0);
        let new_pos = match director {
            Director::Up(x) => current.saturating_sub(x),
            Director::Down(x) => (current + x).min(len - 1),
            Director::Top => 0,
            Director::Bottom => len - 1,
        };
        self.list_pos.select(Some(new_pos));
    }

    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }
}
