pub mod date;
pub mod path;
pub mod text_input;
pub mod timer;

pub use date::{format_date, today};
pub use path::{get_config_dir, get_config_path, get_log_dir};
pub use text_input::TextInput;
pub use timer::DelayedTrigger;
