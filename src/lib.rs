//! TIDAL Player Library
//!
//! This library provides the core of a command-line TIDAL player: a playlist
//! sequencer that decides which track plays next, a catalog cache that turns
//! remote TIDAL records into compact JSON documents, and a session bridge that
//! establishes and persists an authenticated TIDAL session.
//!
//! # Modules
//!
//! - `catalog` - The remote catalog capability and its record type
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Playlist, cache, session, settings and secret management
//! - `tidal` - TIDAL web API client implementation
//! - `types` - Data structures and wire shapes
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use tidalplayer::management::PlaylistSequencer;
//!
//! let mut playlist = PlaylistSequencer::new();
//! playlist.append(58990486);
//! assert_eq!(playlist.advance(), Some(58990486));
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod management;
pub mod tidal;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Example
///
/// ```
/// use tidalplayer::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Now playing {}", track_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Logged in as {}", login);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used by the CLI layer for errors where recovery is not possible. The
/// library core never calls it.
///
/// # Example
///
/// ```
/// error!("Not logged in. Run tidalplayer login");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Could not persist session: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a dimmed diagnostic line when `TIDALPLAYER_DEBUG` is set.
///
/// Used for tracing playlist movement and remote requests without cluttering
/// regular output. The environment variable is read on every call so it can
/// be toggled from a `.env` file.
///
/// # Example
///
/// ```
/// debug!("tracks in playlist: {}", playlist.len());
/// ```
#[macro_export]
macro_rules! debug {
  ($($arg:tt)*) => ({
    if std::env::var_os("TIDALPLAYER_DEBUG").is_some() {
      use colored::Colorize;
      eprintln!("[{}] {}", "~".dimmed(), format!($($arg)*).as_str().dimmed());
    }
  })
}
