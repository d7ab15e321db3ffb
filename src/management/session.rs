use crate::{
    catalog::CatalogClient,
    config::SessionConfig,
    debug,
    management::settings::{SettingsError, SettingsStore},
    types::{LoginState, SessionToken},
};

/// Decides when a stored session is reused and when a fresh login is needed.
pub struct SessionBridge {
    config: SessionConfig,
    settings: SettingsStore,
    state: LoginState,
    session: Option<SessionToken>,
    last_error: Option<String>,
}

impl SessionBridge {
    pub fn new(config: SessionConfig, settings: SettingsStore) -> Self {
        Self {
            config,
            settings,
            state: LoginState::LoggedOut,
            session: None,
            last_error: None,
        }
    }

    /// Logs in with the configured credentials when autologin is enabled.
    ///
    /// The in-memory password is dropped afterwards either way.
    pub async fn start<C: CatalogClient>(&mut self, client: &mut C) -> LoginState {
        match self.take_credentials() {
            Some((login, password)) => self.authenticate(client, &login, &password).await,
            None => self.state,
        }
    }

    /// Same as [`start`](Self::start) but skips the stored session, for callers
    /// that just ran [`resume`](Self::resume).
    pub async fn start_fresh<C: CatalogClient>(&mut self, client: &mut C) -> LoginState {
        match self.take_credentials() {
            Some((login, password)) => self.login(client, &login, &password).await,
            None => self.state,
        }
    }

    pub async fn authenticate<C: CatalogClient>(
        &mut self,
        client: &mut C,
        login: &str,
        password: &str,
    ) -> LoginState {
        if let Some(stored) = self.settings.session() {
            if Self::validate_session(client, &stored).await {
                debug!("adopting stored session");
                self.session = Some(SessionToken(stored));
                self.state = LoginState::LoggedIn;
                return self.state;
            }
        }

        self.login(client, login, password).await
    }

    /// Performs a credential login and persists the new session token.
    pub async fn login<C: CatalogClient>(
        &mut self,
        client: &mut C,
        login: &str,
        password: &str,
    ) -> LoginState {
        self.state = match client.authenticate(login, password).await {
            Ok(token) if !token.is_empty() => {
                self.settings.set_session(token.as_str());
                if let Err(e) = self.settings.persist().await {
                    self.last_error = Some(format!("Could not persist session: {}", e));
                }
                self.session = Some(token);
                LoginState::LoggedIn
            }
            Ok(_) => {
                self.last_error = Some("Login returned an empty session".to_string());
                self.session = None;
                LoginState::LoggedOut
            }
            Err(e) => {
                self.last_error = Some(format!("Login failed: {}", e));
                self.session = None;
                LoginState::LoggedOut
            }
        };

        self.state
    }

    /// `true` only when the service accepts `token` and confirms the login.
    pub async fn validate_session<C: CatalogClient>(client: &mut C, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }

        client.resume_session(token).await && client.check_login().await
    }

    /// Adopts the stored session without attempting a fresh login.
    pub async fn resume<C: CatalogClient>(&mut self, client: &mut C) -> LoginState {
        let stored = self.settings.session().unwrap_or_default();
        if Self::validate_session(client, &stored).await {
            self.session = Some(SessionToken(stored));
            self.state = LoginState::LoggedIn;
        } else {
            self.session = None;
            self.state = LoginState::LoggedOut;
        }
        self.state
    }

    pub async fn logout(&mut self) -> Result<(), SettingsError> {
        self.settings.clear_session();
        self.session = None;
        self.state = LoginState::LoggedOut;
        self.settings.persist().await
    }

    fn take_credentials(&mut self) -> Option<(String, String)> {
        let password = std::mem::take(&mut self.config.password);
        self.config
            .autologin
            .then(|| (self.config.login.clone(), password))
    }

    pub fn state(&self) -> LoginState {
        self.state
    }

    pub fn session(&self) -> Option<&SessionToken> {
        self.session.as_ref()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
