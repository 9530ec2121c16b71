// Reusable UI widgets

pub mod logo;
pub mod terminal_frame;
pub mod text_input;

pub use logo::{DraftgenLogo, Size};
pub use terminal_frame::TerminalFrame;
pub use text_input::{TextInputWidget, TextInputWidgetExt};
