#![allow(dead_code)]

use std::io::Write;

pub use secini::adapters::file_config_adapter::FileConfigAdapter;
pub use secini::domain::error::ConfigError;
pub use secini::domain::store::ConfigStore;
pub use secini::ports::config_port::ConfigPort;

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn load(content: &str) -> FileConfigAdapter {
    let file = write_temp_ini(content);
    FileConfigAdapter::from_file(file.path()).unwrap()
}
