mod app;
mod display;
mod select;

pub use app::Coachdeck;
pub use display::{DisplayEvent, TerminalDisplay};
