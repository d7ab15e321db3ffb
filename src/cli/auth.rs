use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::{self, ClientConfig, SessionConfig},
    error, info,
    management::{
        KeyringStore, LoginData, PasswordStorage, SecretError, SessionBridge, SettingsError,
        SettingsStore,
    },
    success,
    tidal::TidalClient,
    warning,
};

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

async fn load_settings() -> SettingsStore {
    match SettingsStore::load().await {
        Ok(settings) => settings,
        Err(e) => {
            warning!("Failed to load settings, starting fresh. Err: {}", e);
            SettingsStore::new(config::data_dir().join("settings.json"))
        }
    }
}

fn read_login_data(settings: &SettingsStore) -> LoginData {
    match settings.read_login_data(&KeyringStore::new()) {
        Ok(data) => data,
        Err(SettingsError::SecretError(SecretError::StorageUnavailable(reason))) => {
            warning!("Secure storage unavailable, password not loaded: {}", reason);
            LoginData::default()
        }
        Err(e) => {
            warning!("Failed to read login data. Err: {}", e);
            LoginData::default()
        }
    }
}

fn build_client() -> TidalClient {
    match ClientConfig::from_env() {
        Ok(config) => TidalClient::new(config),
        Err(e) => error!(
            "{}. Add it to {}",
            e,
            config::data_dir().join(".env").display()
        ),
    }
}

/// Returns a client with an accepted session, or exits with a hint to log in.
pub(crate) async fn connect() -> (TidalClient, SessionBridge) {
    let settings = load_settings().await;
    let session_config = SessionConfig::from(&read_login_data(&settings));
    let mut bridge = SessionBridge::new(session_config, settings);
    let mut client = build_client();

    let pb = spinner("Resuming TIDAL session...");
    let mut state = bridge.resume(&mut client).await;
    if !state.is_logged_in() {
        pb.set_message("Logging in with stored credentials...");
        state = bridge.start_fresh(&mut client).await;
    }
    pb.finish_and_clear();

    if !state.is_logged_in() {
        error!("Not logged in. Please run tidalplayer login");
    }

    (client, bridge)
}

pub async fn login(user: Option<String>, password: Option<String>) {
    let settings = load_settings().await;
    let stored = read_login_data(&settings);
    let login = user.unwrap_or_else(|| stored.login.clone());
    let password = password.unwrap_or_else(|| stored.password.clone());

    let mut bridge = SessionBridge::new(SessionConfig::from(&stored), settings);
    let mut client = build_client();

    let pb = spinner("Logging in to TIDAL...");
    let state = bridge.authenticate(&mut client, &login, &password).await;
    pb.finish_and_clear();

    if state.is_logged_in() {
        if let Some(e) = bridge.last_error() {
            warning!("{}", e);
        }
        success!("Logged in to TIDAL.");
    } else {
        error!(
            "Login failed: {}",
            bridge.last_error().unwrap_or("unknown error")
        );
    }
}

pub async fn logout() {
    let settings = load_settings().await;
    let mut bridge = SessionBridge::new(SessionConfig::default(), settings);
    match bridge.logout().await {
        Ok(()) => success!("Stored session removed."),
        Err(e) => error!("Failed to remove stored session. Err: {}", e),
    }
}

pub async fn credentials(
    user: String,
    password: String,
    save_login: bool,
    save_password: PasswordStorage,
) {
    let mut settings = load_settings().await;
    let secrets = KeyringStore::new();
    let current = read_login_data(&settings);

    let data = LoginData {
        login: user,
        password,
        save_login,
        save_password,
    };

    if let Err(e) = settings.set_login_data(&secrets, &data, &current.password) {
        error!("Failed to store login data. Err: {}", e);
    }

    if let Err(e) = settings.persist().await {
        error!("Failed to save settings. Err: {}", e);
    }

    if data.autologin() {
        success!("Credentials stored, autologin enabled.");
    } else {
        info!("Credentials stored, autologin disabled.");
    }
}
