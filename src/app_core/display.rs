use crate::{player::FullscreenPort, settings::PresentationSettings};
use anyhow::{Result, bail};
use crossbeam_channel::Sender;
use ratatui::crossterm::terminal;

/// Platform confirmations fed back into the event loop.
#[derive(Debug, PartialEq, Eq)]
pub enum DisplayEvent {
    Fullscreen(bool),
}

type SizeProbe = fn() -> std::io::Result<(u16, u16)>;

/// Presentation mode for a terminal: the console hides everything but the
/// countdown. Entering is refused while the window is too small to show it.
pub struct TerminalDisplay {
    events: Sender<DisplayEvent>,
    limits: PresentationSettings,
    probe: SizeProbe,
}

impl TerminalDisplay {
    pub fn new(events: Sender<DisplayEvent>, limits: PresentationSettings) -> Self {
        Self::with_size_probe(events, limits, terminal::size)
    }

    pub fn with_size_probe(
        events: Sender<DisplayEvent>,
        limits: PresentationSettings,
        probe: SizeProbe,
    ) -> Self {
        TerminalDisplay {
            events,
            limits,
            probe,
        }
    }
}

impl PresentationSettings {
    pub fn fits(&self, width: u16, height: u16) -> bool {
        width >= self.min_width && height >= self.min_height
    }
}

impl FullscreenPort for TerminalDisplay {
    fn request_enter(&mut self) -> Result<()> {
        let (width, height) = (self.probe)()?;

        if !self.limits.fits(width, height) {
            bail!(
                "Terminal too small for presentation ({width}x{height}, need {}x{})",
                self.limits.min_width,
                self.limits.min_height
            );
        }

        self.events.send(DisplayEvent::Fullscreen(true))?;
        Ok(())
    }

    fn request_exit(&mut self) -> Result<()> {
        self.events.send(DisplayEvent::Fullscreen(false))?;
        Ok(())
    }
}
