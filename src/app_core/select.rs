use crate::{REFRESH_RATE, app_core::Coachdeck, ui_state::Mode};
use crossbeam_channel::{Receiver, select};
use ratatui::crossterm::event::Event;
use tracing::error;

impl Coachdeck {
    /// Waits for whichever comes first: input, a countdown tick, a display
    /// confirmation, a notification or the next frame.
    #[inline]
    pub(super) fn select_shortcut(&mut self, input: &Receiver<Event>) {
        let (generation, ticks) = self
            .ui
            .playback
            .timer_handle()
            .unwrap_or_else(|| (0, never()));
        let display_events = self.display_events.clone();
        let notifications = self.notifications.clone();

        select! {
            recv(input) -> event => match event {
                Ok(event) => self.handle_terminal_event(event),
                Err(_) => {
                    error!("input reader disconnected");
                    self.ui.set_mode(Mode::QUIT);
                }
            },

            recv(ticks) -> _ => {
                let outcome = self.ui.playback.on_timer_tick(generation);
                if let Err(e) = self.handle_tick_outcome(outcome) {
                    self.ui.set_error(e);
                }
            }

            recv(display_events) -> event => {
                if let Ok(event) = event {
                    self.handle_display_event(event);
                }
            }

            recv(notifications) -> note => {
                if let Ok(note) = note {
                    self.ui.toasts.push(&note);
                }
            }

            default(REFRESH_RATE) => {}
        }
    }
}

fn never<T>() -> Receiver<T> {
    crossbeam_channel::never()
}
