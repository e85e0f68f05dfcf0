use super::{
    ConsoleLayout, Countdown, ErrorMsg, ExerciseCard, PickerLayout, RoutineDetail, RoutineList,
    SessionProgress, StatusLine, ToastStack, theme::DARK_GRAY,
};
use crate::ui_state::{Mode, UiState};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    widgets::{Block, Clear, StatefulWidget, Widget},
};

const TOAST_WIDTH: u16 = 44;

pub fn render(f: &mut Frame, state: &mut UiState) {
    Block::new().bg(DARK_GRAY).render(f.area(), f.buffer_mut());

    if state.is_presenting() {
        let [countdown, status_line] = ConsoleLayout::fullscreen(f.area());

        Countdown.render(countdown, f.buffer_mut(), state);
        StatusLine.render(status_line, f.buffer_mut(), state);
    } else {
        match state.get_mode() {
            Mode::Console => {
                let layout = ConsoleLayout::new(f.area());

                ExerciseCard.render(layout.card, f.buffer_mut(), state);
                Countdown.render(layout.countdown, f.buffer_mut(), state);
                SessionProgress.render(layout.progress, f.buffer_mut(), state);
                StatusLine.render(layout.status_line, f.buffer_mut(), state);
            }
            _ => {
                let layout = PickerLayout::new(f.area());

                RoutineList.render(layout.routines, f.buffer_mut(), state);
                RoutineDetail.render(layout.detail, f.buffer_mut(), state);
                StatusLine.render(layout.status_line, f.buffer_mut(), state);
            }
        }
    }

    if !state.toasts.is_empty() {
        let area = toast_rect(f.area(), state.toasts.len() as u16);
        Clear.render(area, f.buffer_mut());
        ToastStack.render(area, f.buffer_mut(), state);
    }

    if state.popup.is_open() {
        let popup_rect = centered_rect(40, 30, f.area());

        Clear.render(popup_rect, f.buffer_mut());
        ErrorMsg.render(popup_rect, f.buffer_mut(), state);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// Top-right corner, one bordered row per toast.
fn toast_rect(area: Rect, count: u16) -> Rect {
    let width = TOAST_WIDTH.min(area.width);
    let height = (count + 2).min(area.height);
    Rect::new(area.x + area.width - width, area.y, width, height)
}
