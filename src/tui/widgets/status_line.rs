use crate::{
    player::PlaybackStatus,
    tui::theme::{DARK_WHITE, GOLD, MID_GRAY, MINT},
    ui_state::{Mode, UiState},
};
use ratatui::{
    layout::{Constraint, Layout},
    style::Stylize,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

use super::{PAUSE_ICON, PLAY_ICON};

const PICKER_HINTS: &str = "[⏎] start  [r] reload  [x] delete  [q] quit ";
const CONSOLE_HINTS: &str = "[␣] play  [←/→] step  [+] time  [s] stop  [f] present  [q] leave ";
const PRESENTING_HINTS: &str = "[esc] exit presentation ";

pub struct StatusLine;
impl StatefulWidget for StatusLine {
    type State = UiState;

    fn render(
        self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
    ) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        let hints = match (state.is_presenting(), state.get_mode()) {
            (true, _) => PRESENTING_HINTS,
            (false, Mode::Console) => CONSOLE_HINTS,
            _ => PICKER_HINTS,
        };

        session_summary(state).render(left, buf);
        Line::from(hints).fg(MID_GRAY).right_aligned().render(right, buf);
    }
}

fn session_summary(state: &UiState) -> Line<'static> {
    let playback = &state.playback;
    if playback.is_empty() {
        return Line::from(" coachdeck").fg(MID_GRAY);
    }

    let icon = match playback.status() {
        // Icons show what space will do next
        PlaybackStatus::Running => Span::from(format!(" {PAUSE_ICON} ")).fg(GOLD),
        PlaybackStatus::Paused | PlaybackStatus::NotStarted => {
            Span::from(format!(" {PLAY_ICON} ")).fg(MID_GRAY)
        }
        PlaybackStatus::Completed => Span::from(" ✓ ").fg(MINT),
    };

    Line::from_iter([
        icon,
        Span::from(state.active_routine_name().to_string()).fg(DARK_WHITE),
        Span::from(format!(
            "  {}/{}",
            playback.current_index() + 1,
            playback.len()
        ))
        .fg(MID_GRAY),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        WorkoutPlaybackController,
        app_core::TerminalDisplay,
        domain::{ExerciseStep, Routine},
        player::IntervalTicks,
        settings::PresentationSettings,
    };
    use crossbeam_channel::unbounded;
    use std::time::Duration;

    fn state() -> UiState {
        let (display_tx, _display_rx) = unbounded();
        let (notify_tx, _notify_rx) = unbounded();
        let playback = WorkoutPlaybackController::new(
            Box::new(IntervalTicks),
            Duration::from_secs(1),
            Box::new(TerminalDisplay::new(display_tx, PresentationSettings::default())),
            Box::new(notify_tx),
        );
        UiState::new(playback, 30)
    }

    fn icon(state: &UiState) -> String {
        session_summary(state).spans[0].content.to_string()
    }

    #[test]
    fn icon_shows_what_space_does_next() {
        let mut state = state();
        state.start_routine(Routine {
            id: 1,
            name: String::from("Core"),
            description: String::new(),
            steps: vec![ExerciseStep::new("plank", Some(30))],
        });
        assert!(icon(&state).contains(PLAY_ICON));

        state.playback.play();
        assert!(icon(&state).contains(PAUSE_ICON));

        state.playback.play();
        assert!(icon(&state).contains(PLAY_ICON));
    }
}
