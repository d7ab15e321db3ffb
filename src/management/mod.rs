mod cache;
mod playlist;
mod secrets;
mod session;
mod settings;

pub use cache::CatalogCache;
pub use playlist::InsertLookup;
pub use playlist::PlaylistEvent;
pub use playlist::PlaylistSequencer;
pub use secrets::KeyringStore;
pub use secrets::SECRET_COLLECTION;
pub use secrets::SecretError;
pub use secrets::SecretStore;
pub use session::SessionBridge;
pub use settings::LOGIN_GROUP;
pub use settings::LoginData;
pub use settings::PasswordStorage;
pub use settings::SESSION;
pub use settings::STORE_LOGIN;
pub use settings::STORE_PASSWORT;
pub use settings::STORED_LOGIN;
pub use settings::STORED_PASSWORT;
pub use settings::SettingsError;
pub use settings::SettingsStore;
