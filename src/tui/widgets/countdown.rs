use crate::{
    format_countdown,
    player::PlaybackStatus,
    tui::theme::{GOLD, GOOD_RED, MID_GRAY, MINT},
    ui_state::UiState,
};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Stylize,
    text::{Line, Text},
    widgets::{Paragraph, StatefulWidget, Widget},
};

const GLYPH_HEIGHT: u16 = 5;
const FINAL_SECONDS: u32 = 5;

// 3x5 block font for 0-9 and ':'
const GLYPHS: [[&str; 5]; 11] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    ["  █", "  █", "  █", "  █", "  █"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
    [" ", "█", " ", "█", " "],
];

/// Renders `01:05` as five rows of block glyphs.
pub(crate) fn big_text(s: &str) -> Vec<String> {
    let mut rows = vec![String::new(); GLYPH_HEIGHT as usize];

    for ch in s.chars() {
        let glyph = match ch {
            ':' => &GLYPHS[10],
            d => match d.to_digit(10) {
                Some(n) => &GLYPHS[n as usize],
                None => continue,
            },
        };

        for (row, part) in rows.iter_mut().zip(glyph) {
            if !row.is_empty() {
                row.push(' ');
            }
            row.push_str(part);
        }
    }
    rows
}

pub struct Countdown;
impl StatefulWidget for Countdown {
    type State = UiState;

    fn render(self, area: Rect, buf: &mut ratatui::prelude::Buffer, state: &mut Self::State) {
        let playback = &state.playback;
        let remaining = playback.time_remaining();
        let readout = format_countdown(remaining);

        let color = match playback.status() {
            PlaybackStatus::Completed => MINT,
            PlaybackStatus::Paused | PlaybackStatus::NotStarted => MID_GRAY,
            PlaybackStatus::Running if remaining <= FINAL_SECONDS => GOOD_RED,
            PlaybackStatus::Running => GOLD,
        };

        let rows = big_text(&readout);
        let glyph_width = rows.first().map(|r| r.chars().count()).unwrap_or(0) as u16;

        let text = match area.height >= GLYPH_HEIGHT && area.width >= glyph_width {
            true => Text::from_iter(rows.into_iter().map(Line::from)),
            false => Text::from(readout),
        };

        let [centered] = Layout::vertical([Constraint::Length(text.height() as u16)])
            .flex(Flex::Center)
            .areas(area);

        Paragraph::new(text)
            .centered()
            .fg(color)
            .bold()
            .render(centered, buf);
    }
}
