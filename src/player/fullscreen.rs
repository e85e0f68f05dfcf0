use anyhow::Result;

/// Platform side of presentation mode.
///
/// Requests are asynchronous: `Ok` only means the request was accepted. The
/// platform reports the real outcome later, which the owner of the
/// controller forwards to `WorkoutPlaybackController::on_fullscreen_changed`.
pub trait FullscreenPort {
    fn request_enter(&mut self) -> Result<()>;
    fn request_exit(&mut self) -> Result<()>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FullscreenState {
    pub requested: bool,
    pub confirmed: bool,
}

impl FullscreenState {
    pub fn is_pending(&self) -> bool {
        self.requested != self.confirmed
    }
}
