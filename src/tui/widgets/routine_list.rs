use crate::{
    DurationStyle, get_readable_duration,
    tui::theme::{DARK_WHITE, GOLD, MID_GRAY},
    ui_state::UiState,
};
use ratatui::{
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, StatefulWidget},
};

use super::PANEL_PADDING;

pub struct RoutineList;
impl StatefulWidget for RoutineList {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let routines = &state.picker.routines;
        let pane_title = format!(" ⟪ {} Routines ⟫ ", routines.len());

        let list_items = routines
            .iter()
            .map(|r| {
                let length = get_readable_duration(r.total_duration(), DurationStyle::Compact);
                ListItem::new(Line::from_iter([
                    Span::from(r.get_name().to_string()).fg(DARK_WHITE),
                    Span::from(format!("  {length}")).fg(MID_GRAY).italic(),
                ]))
            })
            .collect::<Vec<_>>();

        let list = List::new(list_items)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::new().fg(MID_GRAY))
                    .title(pane_title)
                    .padding(PANEL_PADDING),
            )
            .highlight_style(Style::new().fg(GOLD).add_modifier(Modifier::BOLD))
            .highlight_symbol("» ");

        StatefulWidget::render(list, area, buf, &mut state.picker.list_pos);
    }
}
