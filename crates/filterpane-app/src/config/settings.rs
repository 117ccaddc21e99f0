//! Settings parser for .filterpane/config.toml

use super::types::Settings;
use filterpane_core::prelude::*;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.toml";
pub const CONFIG_DIR: &str = ".filterpane";

const DEFAULT_CONFIG: &str = r#"# filterpane configuration

[ui]
# Show the parameters object next to the panel
show_params = true
title = "Search filters"

[search]
# Panel shown on startup: "photo" or "video"
panel = "photo"

# Initial parameters handed to the panel
[search.params]
# orientation = "1"

# Label translations: source text = display text
[translations]
# "File name" = "Bestandsnaam"
"#;

/// Load settings from `<dir>/.filterpane/config.toml`.
///
/// Missing or unreadable files fall back to defaults.
pub fn load_settings(dir: &Path) -> Settings {
    let config_path = dir.join(CONFIG_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create `.filterpane/config.toml` with commented defaults if missing
pub fn init_config_dir(dir: &Path) -> Result<()> {
    let config_dir = dir.join(CONFIG_DIR);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)
            .map_err(|e| Error::config(format!("Failed to create {CONFIG_DIR} dir: {e}")))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write {CONFIG_FILENAME}: {e}")))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SearchDomain;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert!(settings.ui.show_params);
        assert_eq!(settings.search.panel, SearchDomain::Photo);
        assert!(settings.translations.is_empty());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let config_dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();

        let config = r#"
[ui]
show_params = false

[search]
panel = "video"

[search.params]
orientation = "3"

[translations]
"Orientation" = "Oriëntatie"
"#;
        std::fs::write(config_dir.join(CONFIG_FILENAME), config).unwrap();

        let settings = load_settings(temp.path());

        assert!(!settings.ui.show_params);
        assert_eq!(settings.search.panel, SearchDomain::Video);
        assert_eq!(
            settings.search.params.get("orientation").map(String::as_str),
            Some("3")
        );
        assert_eq!(
            settings.translations.get("Orientation").map(String::as_str),
            Some("Oriëntatie")
        );
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let config_dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();

        std::fs::write(config_dir.join(CONFIG_FILENAME), "not valid toml {{{{").unwrap();

        // Should return defaults
        let settings = load_settings(temp.path());
        assert_eq!(settings.search.panel, SearchDomain::Photo);
    }

    #[test]
    fn test_load_settings_unknown_panel_falls_back() {
        let temp = tempdir().unwrap();
        let config_dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();

        std::fs::write(
            config_dir.join(CONFIG_FILENAME),
            "[search]\npanel = \"audio\"\n",
        )
        .unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.search.panel, SearchDomain::Photo);
    }

    #[test]
    fn test_init_config_dir() {
        let temp = tempdir().unwrap();

        init_config_dir(temp.path()).unwrap();

        let path = temp.path().join(CONFIG_DIR).join(CONFIG_FILENAME);
        assert!(path.exists());

        // The generated file parses back to defaults
        let settings = load_settings(temp.path());
        assert!(settings.ui.show_params);
        assert_eq!(settings.search.panel, SearchDomain::Photo);
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let temp = tempdir().unwrap();
        let config_dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join(CONFIG_FILENAME), "[ui]\ntitle = \"Mine\"\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        assert_eq!(load_settings(temp.path()).ui.title, "Mine");
    }
}
