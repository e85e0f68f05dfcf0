use crate::{
    tui::theme::{DARK_GRAY_FADED, GOLD, GOLD_FADED, MID_GRAY},
    ui_state::UiState,
};
use ratatui::{
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    widgets::{Block, Gauge, LineGauge, Padding, StatefulWidget, Widget},
};

pub struct SessionProgress;
impl StatefulWidget for SessionProgress {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let playback = &state.playback;
        if playback.is_empty() {
            return;
        }

        let [step_area, session_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).areas(area);

        let step = playback.current_step().map(|s| s.duration_secs()).unwrap_or(1).max(1);
        let elapsed = step.saturating_sub(playback.time_remaining());
        let step_ratio = (elapsed as f64 / step as f64).clamp(0.0, 1.0);

        LineGauge::default()
            .filled_style(Style::new().fg(GOLD_FADED))
            .unfilled_style(Style::new().fg(DARK_GRAY_FADED))
            .ratio(step_ratio)
            .label("")
            .block(Block::new().padding(Padding::horizontal(2)))
            .render(step_area, buf);

        let label = format!(
            "Step {}/{}  ·  {}%",
            playback.current_index() + 1,
            playback.len(),
            playback.progress_percent()
        );

        Gauge::default()
            .gauge_style(Style::new().fg(GOLD).bg(DARK_GRAY_FADED))
            .percent(playback.progress_percent().min(100) as u16)
            .label(label.fg(MID_GRAY))
            .block(Block::new().padding(Padding::new(2, 2, 1, 1)))
            .render(session_area, buf);
    }
}
