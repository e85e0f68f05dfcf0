use crate::{
    tui::theme::{DARK_GRAY_FADED, DARK_WHITE, GOOD_RED, MID_GRAY},
    ui_state::UiState,
};
use ratatui::{
    layout::Alignment,
    style::{Style, Stylize},
    text::{Line, Text},
    widgets::{Block, BorderType, Padding, Paragraph, StatefulWidget, Widget, Wrap},
};

static PADDING: Padding = Padding {
    left: 4,
    right: 4,
    top: 1,
    bottom: 1,
};

pub struct ErrorMsg;
impl StatefulWidget for ErrorMsg {
    type State = UiState;
    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let Some(message) = state.get_error() else {
            return;
        };

        let mut text = Text::from(Line::from(message.to_string()).fg(DARK_WHITE));
        if state.popup.repeats() > 0 {
            text.push_line(Line::default());
            text.push_line(
                Line::from(format!("(repeated {} more times)", state.popup.repeats()))
                    .fg(MID_GRAY)
                    .italic(),
            );
        }

        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Thick)
                    .border_style(Style::new().fg(GOOD_RED))
                    .title(" Error ".fg(GOOD_RED).bold())
                    .title_bottom(" any key to dismiss ".fg(MID_GRAY))
                    .title_alignment(Alignment::Center)
                    .padding(PADDING),
            )
            .bg(DARK_GRAY_FADED)
            .render(area, buf);
    }
}
