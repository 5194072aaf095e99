use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use snapsheet_config::Config;

/// Load the default config shipped in the repo
fn load_repo_default_config() -> anyhow::Result<Config> {
    let file = File::open("config.json")?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

fn config_root() -> anyhow::Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("snapsheet"))
        .ok_or_else(|| anyhow::anyhow!("no user config directory"))
}

fn profiles_dir() -> anyhow::Result<PathBuf> {
    Ok(config_root()?.join("profiles"))
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Initialize user config folders and main profile if missing
pub fn init_user_config() -> anyhow::Result<()> {
    let profiles = profiles_dir()?;
    fs::create_dir_all(&profiles)?;

    let main_profile = profiles.join("main.json");

    if !main_profile.exists() {
        // Use repo default as the initial main profile
        let default_config = load_repo_default_config()?;
        let profile = Profile {
            name: "main".into(),
            value: default_config,
        };
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Created main profile");
    }

    Ok(())
}

/// Load a user profile by name, falling back to the repo default
pub fn load_user_profile(name: &str) -> anyhow::Result<Config> {
    let profile_file = profiles_dir()?.join(format!("{name}.json"));

    if profile_file.exists() {
        let data = fs::read_to_string(profile_file)?;
        let profile: Profile = serde_json::from_str(&data)?;
        Ok(profile.value)
    } else {
        tracing::warn!("Profile {name} not found, falling back to repo default");
        load_repo_default_config()
    }
}

/// The config the process runs with: main profile when present,
/// otherwise environment-backed defaults.
pub fn load_config() -> Config {
    match load_user_profile("main") {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("no config profile ({e}), using environment defaults");
            Config::new()
        }
    }
}
