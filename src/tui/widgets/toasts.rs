use crate::{
    tui::theme::{DARK_GRAY_FADED, DARK_WHITE, GOLD_FADED},
    ui_state::UiState,
};
use ratatui::{
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget},
};

pub struct ToastStack;
impl StatefulWidget for ToastStack {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let lines = state
            .toasts
            .iter()
            .map(|t| Line::from(t.message.clone()).fg(DARK_WHITE))
            .collect::<Vec<_>>();

        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::new().fg(GOLD_FADED)),
            )
            .bg(DARK_GRAY_FADED)
            .render(area, buf);
    }
}
