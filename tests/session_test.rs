mod common;

use std::path::PathBuf;

use common::MockClient;
use tempfile::TempDir;
use tidalplayer::{
    config::SessionConfig,
    management::{SessionBridge, SettingsStore},
    types::LoginState,
};

fn settings_in(dir: &TempDir) -> PathBuf {
    dir.path().join("settings.json")
}

fn client_accepting(login: &str, password: &str, token: &str) -> MockClient {
    let mut client = MockClient::new();
    client.credentials = Some((login.to_string(), password.to_string()));
    client.issued_token = token.to_string();
    client
}

fn autologin_config() -> SessionConfig {
    SessionConfig {
        login: "me@example.com".to_string(),
        password: "secret".to_string(),
        autologin: true,
    }
}

#[tokio::test]
async fn test_stored_valid_session_is_adopted() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = SettingsStore::new(settings_in(&dir));
    settings.set_session("abc");

    let mut client = client_accepting("me@example.com", "secret", "fresh");
    client.valid_sessions.push("abc".to_string());

    let mut bridge = SessionBridge::new(SessionConfig::default(), settings);
    let state = bridge
        .authenticate(&mut client, "me@example.com", "secret")
        .await;

    assert_eq!(state, LoginState::LoggedIn);
    assert_eq!(bridge.session().unwrap().as_str(), "abc");
    assert_eq!(client.count("authenticate"), 0);
    assert_eq!(client.calls(), vec!["resume_session", "check_login"]);
}

#[tokio::test]
async fn test_fresh_login_persists_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = settings_in(&dir);
    let mut client = client_accepting("me@example.com", "secret", "tok");

    let mut bridge = SessionBridge::new(SessionConfig::default(), SettingsStore::new(path.clone()));
    let state = bridge
        .authenticate(&mut client, "me@example.com", "secret")
        .await;

    assert_eq!(state, LoginState::LoggedIn);
    assert!(bridge.last_error().is_none());
    // no stored token, so no validation round trip
    assert_eq!(client.calls(), vec!["authenticate"]);

    let reloaded = SettingsStore::load_from(path).await.unwrap();
    assert_eq!(reloaded.session().as_deref(), Some("tok"));
}

#[tokio::test]
async fn test_stale_session_falls_back_to_login() {
    let dir = tempfile::tempdir().unwrap();
    let path = settings_in(&dir);
    let mut settings = SettingsStore::new(path.clone());
    settings.set_session("old");

    let mut client = client_accepting("me@example.com", "secret", "new");
    let mut bridge = SessionBridge::new(SessionConfig::default(), settings);
    let state = bridge
        .authenticate(&mut client, "me@example.com", "secret")
        .await;

    assert_eq!(state, LoginState::LoggedIn);
    assert_eq!(client.calls(), vec!["resume_session", "authenticate"]);
    assert_eq!(bridge.settings().session().as_deref(), Some("new"));

    let reloaded = SettingsStore::load_from(path).await.unwrap();
    assert_eq!(reloaded.session().as_deref(), Some("new"));
}

#[tokio::test]
async fn test_failed_login_is_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let mut client = client_accepting("me@example.com", "secret", "tok");

    let mut bridge = SessionBridge::new(SessionConfig::default(), SettingsStore::new(settings_in(&dir)));
    let state = bridge.authenticate(&mut client, "me@example.com", "wrong").await;

    assert_eq!(state, LoginState::LoggedOut);
    assert!(bridge.session().is_none());
    assert!(bridge.last_error().unwrap().starts_with("Login failed"));
    assert!(!settings_in(&dir).exists());
}

#[tokio::test]
async fn test_empty_token_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut client = client_accepting("me@example.com", "secret", "");

    let mut bridge = SessionBridge::new(SessionConfig::default(), SettingsStore::new(settings_in(&dir)));
    let state = bridge
        .authenticate(&mut client, "me@example.com", "secret")
        .await;

    assert_eq!(state, LoginState::LoggedOut);
    assert!(bridge.settings().session().is_none());
    assert!(bridge.last_error().is_some());
}

#[tokio::test]
async fn test_validate_empty_session_makes_no_remote_call() {
    let mut client = MockClient::new();
    client.valid_sessions.push(String::new());

    assert!(!SessionBridge::validate_session(&mut client, "").await);
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_validate_unknown_session() {
    let mut client = MockClient::new();

    assert!(!SessionBridge::validate_session(&mut client, "nope").await);
    // check_login is skipped once resuming fails
    assert_eq!(client.calls(), vec!["resume_session"]);
}

#[tokio::test]
async fn test_start_without_autologin_does_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut client = client_accepting("me@example.com", "secret", "tok");
    let config = SessionConfig {
        autologin: false,
        ..autologin_config()
    };

    let mut bridge = SessionBridge::new(config, SettingsStore::new(settings_in(&dir)));
    let state = bridge.start(&mut client).await;

    assert_eq!(state, LoginState::LoggedOut);
    assert!(client.calls().is_empty());
    assert!(bridge.config().password.is_empty());
}

#[tokio::test]
async fn test_start_with_autologin_logs_in() {
    let dir = tempfile::tempdir().unwrap();
    let mut client = client_accepting("me@example.com", "secret", "tok");

    let mut bridge = SessionBridge::new(autologin_config(), SettingsStore::new(settings_in(&dir)));
    let state = bridge.start(&mut client).await;

    assert_eq!(state, LoginState::LoggedIn);
    assert!(state.is_logged_in());
    assert_eq!(client.count("authenticate"), 1);
    assert!(bridge.config().password.is_empty());
}

#[tokio::test]
async fn test_resume_uses_only_stored_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut client = client_accepting("me@example.com", "secret", "tok");

    let mut bridge = SessionBridge::new(autologin_config(), SettingsStore::new(settings_in(&dir)));
    assert_eq!(bridge.resume(&mut client).await, LoginState::LoggedOut);
    assert!(client.calls().is_empty());

    let mut settings = SettingsStore::new(settings_in(&dir));
    settings.set_session("abc");
    client.valid_sessions.push("abc".to_string());
    let mut bridge = SessionBridge::new(autologin_config(), settings);
    assert_eq!(bridge.resume(&mut client).await, LoginState::LoggedIn);
    assert_eq!(client.count("authenticate"), 0);
}

#[tokio::test]
async fn test_logout_forgets_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = settings_in(&dir);
    let mut client = client_accepting("me@example.com", "secret", "tok");

    let mut bridge = SessionBridge::new(SessionConfig::default(), SettingsStore::new(path.clone()));
    bridge
        .authenticate(&mut client, "me@example.com", "secret")
        .await;
    bridge.logout().await.unwrap();

    assert_eq!(bridge.state(), LoginState::LoggedOut);
    assert!(bridge.session().is_none());

    let reloaded = SettingsStore::load_from(path).await.unwrap();
    assert!(reloaded.session().is_none());
}

#[tokio::test]
async fn test_resume_then_start_fresh_checks_stored_session_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = settings_in(&dir);
    let mut settings = SettingsStore::new(path.clone());
    settings.set_session("old");

    let mut client = client_accepting("me@example.com", "secret", "new");
    let mut bridge = SessionBridge::new(autologin_config(), settings);

    assert_eq!(bridge.resume(&mut client).await, LoginState::LoggedOut);
    assert_eq!(bridge.start_fresh(&mut client).await, LoginState::LoggedIn);

    assert_eq!(client.calls(), vec!["resume_session", "authenticate"]);
    assert!(bridge.config().password.is_empty());

    let reloaded = SettingsStore::load_from(path).await.unwrap();
    assert_eq!(reloaded.session().as_deref(), Some("new"));
}

#[tokio::test]
async fn test_start_fresh_without_autologin_does_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = SettingsStore::new(settings_in(&dir));
    settings.set_session("abc");

    let mut client = client_accepting("me@example.com", "secret", "tok");
    client.valid_sessions.push("abc".to_string());
    let config = SessionConfig {
        autologin: false,
        ..autologin_config()
    };

    let mut bridge = SessionBridge::new(config, settings);
    assert_eq!(bridge.start_fresh(&mut client).await, LoginState::LoggedOut);
    assert!(client.calls().is_empty());
    assert!(bridge.config().password.is_empty());
}

#[tokio::test]
async fn test_login_skips_stored_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = SettingsStore::new(settings_in(&dir));
    settings.set_session("abc");

    let mut client = client_accepting("me@example.com", "secret", "tok");
    client.valid_sessions.push("abc".to_string());

    let mut bridge = SessionBridge::new(SessionConfig::default(), settings);
    let state = bridge.login(&mut client, "me@example.com", "secret").await;

    assert_eq!(state, LoginState::LoggedIn);
    assert_eq!(client.calls(), vec!["authenticate"]);
    assert_eq!(bridge.session().unwrap().as_str(), "tok");
}
