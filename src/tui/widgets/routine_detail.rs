use crate::{
    DurationStyle, SETTINGS_FILENAME, get_readable_duration,
    settings::Settings,
    tui::theme::{DARK_WHITE, GOLD_FADED, MID_GRAY, MINT},
    ui_state::UiState,
};
use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget, Wrap},
};

use super::PANEL_PADDING;

pub struct RoutineDetail;
impl StatefulWidget for RoutineDetail {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(MID_GRAY))
            .padding(PANEL_PADDING);

        let text = match state.picker.selected() {
            Some(routine) => {
                let mut lines = vec![
                    Line::from(routine.get_name().to_string()).fg(GOLD_FADED).bold(),
                    Line::from(routine.get_description().to_string()).fg(MID_GRAY).italic(),
                    Line::default(),
                ];

                lines.extend(routine.get_steps().iter().enumerate().map(|(i, step)| {
                    Line::from_iter([
                        Span::from(format!("{:>2}. ", i + 1)).fg(MID_GRAY),
                        Span::from(step.get_name().to_string()).fg(DARK_WHITE),
                        Span::from(format!("  {}", step.get_duration_str())).fg(MID_GRAY),
                    ])
                }));

                lines.extend(recent_sessions(state));
                Text::from(lines)
            }
            None => empty_library_hint(),
        };

        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

fn recent_sessions(state: &UiState) -> Vec<Line<'static>> {
    if state.recent_sessions.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![Line::default(), Line::from("Recent sessions").fg(MID_GRAY).underlined()];
    lines.extend(state.recent_sessions.iter().map(|s| {
        let worked = get_readable_duration(
            std::time::Duration::from_secs(s.seconds_worked),
            DurationStyle::Clean,
        );
        Line::from_iter([
            Span::from("✓ ").fg(MINT),
            Span::from(s.routine_name.clone()).fg(DARK_WHITE),
            Span::from(format!("  {} steps, {worked}", s.steps_completed)).fg(MID_GRAY),
        ])
    }));
    lines
}

fn empty_library_hint() -> Text<'static> {
    let settings_path = Settings::config_dir()
        .map(|dir| dir.join(SETTINGS_FILENAME).display().to_string())
        .unwrap_or_else(|| String::from(SETTINGS_FILENAME));

    Text::from_iter([
        Line::from("No routines yet").fg(GOLD_FADED).bold(),
        Line::default(),
        Line::from("Point `routines_file` at a routine TOML file in").fg(MID_GRAY),
        Line::from(settings_path).fg(DARK_WHITE).italic(),
        Line::from("then press [r] to import it.").fg(MID_GRAY),
    ])
}
