use std::{collections::BTreeMap, fmt, io::Error, path::PathBuf};

use serde_json::Value;

use crate::{
    config,
    management::secrets::{SecretError, SecretStore},
};

pub const LOGIN_GROUP: &str = "LoginGroup";
pub const STORED_LOGIN: &str = "stored_login";
pub const STORED_PASSWORT: &str = "stored_passwort";
pub const STORE_LOGIN: &str = "store_login";
pub const STORE_PASSWORT: &str = "store_passwort";
pub const SESSION: &str = "SESSION";

#[derive(Debug)]
pub enum SettingsError {
    IoError(Error),
    SerdeError(serde_json::Error),
    SecretError(SecretError),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(e) => write!(f, "settings file error: {}", e),
            SettingsError::SerdeError(e) => write!(f, "settings format error: {}", e),
            SettingsError::SecretError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<Error> for SettingsError {
    fn from(err: Error) -> Self {
        SettingsError::IoError(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::SerdeError(err)
    }
}

impl From<SecretError> for SettingsError {
    fn from(err: SecretError) -> Self {
        SettingsError::SecretError(err)
    }
}

/// Where the password is kept between runs. Stored as `0`, `1` or `2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordStorage {
    #[default]
    None = 0,
    Secure = 1,
    Plain = 2,
}

impl PasswordStorage {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => PasswordStorage::Secure,
            2 => PasswordStorage::Plain,
            _ => PasswordStorage::None,
        }
    }

    pub fn code(&self) -> i64 {
        *self as i64
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginData {
    pub login: String,
    pub password: String,
    pub save_login: bool,
    pub save_password: PasswordStorage,
}

impl LoginData {
    pub fn autologin(&self) -> bool {
        self.save_login && self.save_password != PasswordStorage::None
    }
}

type Group = BTreeMap<String, Value>;

/// Grouped key/value settings persisted as one JSON document.
pub struct SettingsStore {
    path: PathBuf,
    groups: BTreeMap<String, Group>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            groups: BTreeMap::new(),
        }
    }

    /// Loads the settings document from the data directory, empty if absent.
    pub async fn load() -> Result<Self, SettingsError> {
        Self::load_from(Self::settings_path()).await
    }

    pub async fn load_from(path: PathBuf) -> Result<Self, SettingsError> {
        if !path.is_file() {
            return Ok(Self::new(path));
        }

        let content = async_fs::read_to_string(&path).await?;
        let groups = serde_json::from_str(&content)?;
        Ok(Self { path, groups })
    }

    pub async fn persist(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.groups)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    pub fn value(&self, group: &str, key: &str) -> Option<&Value> {
        self.groups.get(group).and_then(|g| g.get(key))
    }

    pub fn set_value(&mut self, group: &str, key: &str, value: impl Into<Value>) {
        self.groups
            .entry(group.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
    }

    pub fn remove(&mut self, group: &str, key: &str) {
        if let Some(g) = self.groups.get_mut(group) {
            g.remove(key);
        }
    }

    pub fn string(&self, group: &str, key: &str) -> String {
        self.value(group, key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    pub fn bool(&self, group: &str, key: &str) -> bool {
        match self.value(group, key) {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
            _ => false,
        }
    }

    pub fn int(&self, group: &str, key: &str) -> i64 {
        match self.value(group, key) {
            Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
            Some(Value::Bool(flag)) => i64::from(*flag),
            _ => 0,
        }
    }

    pub fn session(&self) -> Option<String> {
        let session = self.string(LOGIN_GROUP, SESSION);
        (!session.is_empty()).then_some(session)
    }

    pub fn set_session(&mut self, session: &str) {
        self.set_value(LOGIN_GROUP, SESSION, session);
    }

    pub fn clear_session(&mut self) {
        self.remove(LOGIN_GROUP, SESSION);
    }

    /// Stores login name and password according to the chosen storage modes.
    ///
    /// `current_password` is the password the application already knows; the
    /// secret store is only written when it changes.
    pub fn set_login_data<S: SecretStore>(
        &mut self,
        secrets: &S,
        data: &LoginData,
        current_password: &str,
    ) -> Result<(), SettingsError> {
        let previously_saved = self.bool(LOGIN_GROUP, STORE_PASSWORT);

        match data.save_password {
            PasswordStorage::Secure => {
                if data.password != current_password {
                    secrets.set(STORED_PASSWORT, &data.password)?;
                    self.set_value(LOGIN_GROUP, STORED_PASSWORT, "");
                }
            }
            PasswordStorage::Plain => {
                self.set_value(LOGIN_GROUP, STORED_PASSWORT, data.password.as_str());
            }
            PasswordStorage::None => {
                if previously_saved {
                    secrets.unset(STORED_PASSWORT)?;
                    self.set_value(LOGIN_GROUP, STORED_PASSWORT, "");
                }
            }
        }

        let login = if data.save_login { data.login.as_str() } else { "" };
        self.set_value(LOGIN_GROUP, STORED_LOGIN, login);
        self.set_value(LOGIN_GROUP, STORE_LOGIN, data.save_login);
        self.set_value(LOGIN_GROUP, STORE_PASSWORT, data.save_password.code());
        Ok(())
    }

    pub fn read_login_data<S: SecretStore>(&self, secrets: &S) -> Result<LoginData, SettingsError> {
        let save_login = self.bool(LOGIN_GROUP, STORE_LOGIN);
        let save_password = PasswordStorage::from_code(self.int(LOGIN_GROUP, STORE_PASSWORT));

        let login = if save_login {
            self.string(LOGIN_GROUP, STORED_LOGIN)
        } else {
            String::new()
        };

        let password = match save_password {
            PasswordStorage::Secure => secrets.get(STORED_PASSWORT)?.unwrap_or_default(),
            PasswordStorage::Plain => self.string(LOGIN_GROUP, STORED_PASSWORT),
            PasswordStorage::None => String::new(),
        };

        Ok(LoginData {
            login,
            password,
            save_login,
            save_password,
        })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn settings_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("settings.json");
        path
    }
}
