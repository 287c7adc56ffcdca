mod main_config;

pub use main_config::{Config, data_file_path, get_config_manager};
