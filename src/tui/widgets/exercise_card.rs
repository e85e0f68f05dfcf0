use crate::{
    tui::theme::{DARK_WHITE, GOLD_FADED, MID_GRAY},
    truncate_at_last_space,
    ui_state::UiState,
};
use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget},
};

use super::PANEL_PADDING;

pub struct ExerciseCard;
impl StatefulWidget for ExerciseCard {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let Some(step) = state.playback.current_step() else {
            return;
        };

        // Borders and padding take six columns
        let text_width = area.width.saturating_sub(6) as usize;

        let mut lines = vec![Line::from(step.get_name().to_string()).fg(DARK_WHITE).bold()];

        let volume = step.volume_display();
        if !volume.is_empty() {
            lines.push(Line::from(volume).fg(GOLD_FADED));
        }

        if !step.get_description().is_empty() {
            lines.push(
                Line::from(truncate_at_last_space(step.get_description(), text_width))
                    .fg(MID_GRAY)
                    .italic(),
            );
        }

        let up_next = match state.playback.upcoming_step() {
            Some(next) => Line::from_iter([
                Span::from("Up next: ").fg(MID_GRAY),
                Span::from(next.get_name().to_string()).fg(GOLD_FADED),
                Span::from(format!(" ({})", next.get_duration_str())).fg(MID_GRAY),
            ]),
            None => Line::from("Last exercise").fg(MID_GRAY),
        };

        Paragraph::new(Text::from(lines))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::new().fg(MID_GRAY))
                    .title(format!(" {} ", state.active_routine_name()))
                    .title_bottom(up_next.right_aligned())
                    .padding(PANEL_PADDING),
            )
            .render(area, buf);
    }
}
