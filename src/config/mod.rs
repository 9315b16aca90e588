pub mod files;
pub mod settings;

pub use files::{ensure_calma_dir, init_local_calma, log_dir, settings_file};
pub use settings::{load_settings, save_settings, Settings};
