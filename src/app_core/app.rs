use crate::{
    Database, Settings, WorkoutPlaybackController,
    app_core::{DisplayEvent, TerminalDisplay},
    database::RoutineImport,
    key_handler::{self, Action},
    overwrite_line,
    player::{IntervalTicks, Notification, TickOutcome},
    tui,
    ui_state::{Mode, UiState},
};
use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, unbounded};
use ratatui::{
    DefaultTerminal,
    crossterm::event::{Event, KeyEventKind},
};
use std::time::Instant;
use tracing::info;

const RECENT_SESSIONS: usize = 5;

pub struct Coachdeck {
    db: Database,
    pub(super) ui: UiState,
    settings: Settings,
    pub(super) display_events: Receiver<DisplayEvent>,
    pub(super) notifications: Receiver<Notification>,
}

impl Coachdeck {
    pub fn new(settings: Settings) -> Result<Self> {
        let db = Database::open().context("Could not open routine database")?;
        Ok(Self::with_database(db, settings))
    }

    pub fn with_database(db: Database, settings: Settings) -> Self {
        let (display_tx, display_rx) = unbounded();
        let (notify_tx, notify_rx) = unbounded();

        let playback = WorkoutPlaybackController::new(
            Box::new(IntervalTicks),
            settings.tick_interval(),
            Box::new(TerminalDisplay::new(
                display_tx,
                settings.presentation.clone(),
            )),
            Box::new(notify_tx),
        );

        Coachdeck {
            db,
            ui: UiState::new(playback, settings.add_time_secs),
            settings,
            display_events: display_rx,
            notifications: notify_rx,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        if let Err(e) = self.initialize() {
            self.ui.set_error(e);
        }

        let input = key_handler::spawn_input_reader();
        let mut terminal = ratatui::init();

        // Restore the terminal even when drawing fails
        let result = self.main_loop(&mut terminal, &input);
        ratatui::restore();
        result?;

        info!("shutting down");
        overwrite_line("Thank you for using coachdeck!\n\n")?;

        Ok(())
    }

    fn main_loop(&mut self, terminal: &mut DefaultTerminal, input: &Receiver<Event>) -> Result<()> {
        terminal.clear()?;

        // MAIN ROUTINE
        loop {
            self.select_shortcut(input);
            self.ui.toasts.expire(Instant::now());

            terminal.draw(|f| tui::render(f, &mut self.ui))?;

            if self.ui.get_mode() == Mode::QUIT {
                break;
            }
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        self.import_routines_file()?;
        self.refresh_routines()
    }
}

impl Coachdeck {
    #[rustfmt::skip]
    pub(crate) fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            // Playback
            Action::TogglePlay       => self.ui.playback.play(),
            Action::Next             => self.ui.playback.next(),
            Action::Previous         => self.ui.playback.previous(),
            Action::AddTime(secs)    => self.ui.playback.add_time(secs),
            Action::Stop             => self.ui.stop_session(),
            Action::ToggleFullscreen => self.toggle_fullscreen(),
            Action::ExitFullscreen   => self.ui.playback.exit_fullscreen(),
            Action::LeaveSession     => self.ui.leave_session(),

            // Picker
            Action::Scroll(d)        => self.ui.picker.scroll(d),
            Action::LoadRoutine      => self.ui.start_selected_routine()?,
            Action::ReloadRoutines   => {
                self.import_routines_file()?;
                self.refresh_routines()?;
            }
            Action::DeleteRoutine    => self.delete_selected_routine()?,

            Action::ClosePopup       => self.ui.close_popup(),
            Action::QUIT             => self.ui.set_mode(Mode::QUIT),
        }
        Ok(())
    }

    pub(super) fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = key_handler::handle_key_event(key, &self.ui) {
                    if let Err(e) = self.handle_action(action) {
                        self.ui.set_error(e);
                    }
                }
            }
            Event::Resize(width, height) => self.check_presentation_fits(width, height),
            _ => (),
        }
    }

    pub(super) fn handle_display_event(&mut self, event: DisplayEvent) {
        match event {
            DisplayEvent::Fullscreen(active) => self.ui.playback.on_fullscreen_changed(active),
        }
    }

    pub(super) fn handle_tick_outcome(&mut self, outcome: TickOutcome) -> Result<()> {
        if outcome != TickOutcome::Finished {
            return Ok(());
        }

        self.ui.toasts.push(&Notification::SessionComplete {
            routine: self.ui.active_routine_name().to_string(),
        });

        if let Some(record) = self.ui.take_completed_session() {
            info!(
                routine = %record.routine_name,
                seconds = record.seconds_worked,
                "session complete"
            );
            self.db.log_session(&record)?;
            self.ui.recent_sessions = self.db.recent_sessions(RECENT_SESSIONS)?;
        }
        Ok(())
    }

    fn toggle_fullscreen(&mut self) {
        self.ui.playback.toggle_fullscreen();

        // A request the platform accepted stays pending until it confirms
        if !self.ui.playback.fullscreen_state().is_pending() {
            self.ui.toasts.push(&Notification::Info(String::from(
                "Presentation mode unavailable",
            )));
        }
    }

    /// The terminal leaves presentation mode on its own when shrunk too far.
    fn check_presentation_fits(&mut self, width: u16, height: u16) {
        if self.ui.is_presenting() && !self.settings.presentation.fits(width, height) {
            self.ui.playback.on_fullscreen_changed(false);
            self.ui.toasts.push(&Notification::Info(String::from(
                "Window too small, presentation closed",
            )));
        }
    }
}

impl Coachdeck {
    fn import_routines_file(&mut self) -> Result<()> {
        let Some(path) = &self.settings.routines_file else {
            return Ok(());
        };

        let import = RoutineImport::load_from_file(path)?;
        self.db.import_routines(&import)?;
        Ok(())
    }

    fn delete_selected_routine(&mut self) -> Result<()> {
        let Some(routine) = self.ui.picker.selected() else {
            return Ok(());
        };
        let (id, name) = (routine.get_id(), routine.get_name().to_string());

        self.db.delete_routine(id)?;
        info!(routine = %name, "routine deleted");
        self.ui
            .toasts
            .push(&Notification::Info(format!("Deleted \"{name}\"")));
        self.refresh_routines()
    }

    fn refresh_routines(&mut self) -> Result<()> {
        let routines = self.db.get_routines()?;
        info!(count = routines.len(), "routine library loaded");

        self.ui.picker.sync(routines);
        self.ui.recent_sessions = self.db.recent_sessions(RECENT_SESSIONS)?;
        Ok(())
    }
}
