//! Well-known names used to locate the configuration file.

/// Environment variable naming the directory that holds `config.json`
pub const CONFIG_DIR_ENV: &str = "DOCKER_CONFIG";

/// Configuration directory under the user's home
pub const CONFIG_HOME_DIR: &str = ".docker";

/// Configuration file inside the configuration directory
pub const CONFIG_FILE_NAME: &str = "config.json";
