use std::path::PathBuf;

/// Returns the base directory for human's files.
///
/// Uses `$HUMAN_HOME` if set, otherwise defaults to `<config dir>/human`
/// (`~/.config/human` on Linux).
pub fn human_home() -> PathBuf {
    if let Ok(home) = std::env::var("HUMAN_HOME") {
        return PathBuf::from(home);
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("human")
}

/// Returns the path to the user configuration file.
pub fn config_path() -> PathBuf {
    human_home().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_home_env_and_default() {
        // Both cases in one test so they never race on the variable
        std::env::set_var("HUMAN_HOME", "/tmp/test-human");
        assert_eq!(human_home(), PathBuf::from("/tmp/test-human"));
        assert_eq!(config_path(), PathBuf::from("/tmp/test-human/config.toml"));

        std::env::remove_var("HUMAN_HOME");
        assert!(human_home().ends_with("human"));
    }
}
