use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct ConsoleLayout {
    pub card: Rect,
    pub countdown: Rect,
    pub progress: Rect,
    pub status_line: Rect,
}

impl ConsoleLayout {
    pub fn new(area: Rect) -> Self {
        let card_height = match area.height > 24 {
            true => 8,
            false => 5,
        };

        let [card, countdown, progress, status_line] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(card_height),
                Constraint::Min(3),
                Constraint::Length(4),
                Constraint::Length(1),
            ])
            .areas(area);

        ConsoleLayout {
            card,
            countdown,
            progress,
            status_line,
        }
    }

    /// Presentation mode: countdown and a single status row.
    pub fn fullscreen(area: Rect) -> [Rect; 2] {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(99), Constraint::Length(1)])
            .areas::<2>(area)
    }
}

pub struct PickerLayout {
    pub routines: Rect,
    pub detail: Rect,
    pub status_line: Rect,
}

impl PickerLayout {
    pub fn new(area: Rect) -> Self {
        let [upper_block, status_line] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(1)])
            .areas(area);

        let [routines, _, detail] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(upper_block);

        PickerLayout {
            routines,
            detail,
            status_line,
        }
    }
}
