//! # CLI Module
//!
//! This module provides the command-line interface layer for the TIDAL player. It
//! implements all user-facing commands and coordinates between the TIDAL client,
//! the player core and user interaction.
//!
//! ## Command Categories
//!
//! ### Session
//!
//! - [`login`] - Establishes a TIDAL session, reusing a stored one when it is still valid
//! - [`logout`] - Forgets the stored session
//! - [`credentials`] - Stores login name and password for autologin
//!
//! ### Catalog
//!
//! - [`info`] - Prints track, album or artist documents
//! - [`url`] - Prints the stream URL of a track
//! - [`search`] - Searches one catalog bucket
//!
//! ### Playback
//!
//! - [`player`] - Interactive prompt driving the playlist sequencer
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Sequencer, Cache Facade, Session Bridge, Settings)
//!     ↓
//! Catalog Layer (TIDAL client)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Error Handling Philosophy
//!
//! - **Graceful Degradation**: Missing metadata prints best-effort documents with a warning
//! - **Helpful Messages**: A missing session or API token ends with a hint on how to fix it
//! - **Fatal Only at the Edge**: Only this layer exits the process; the core never does
//!
//! ## Usage Patterns
//!
//! ```bash
//! tidalplayer credentials --user me@example.com --password secret --save-login --save-password secure
//! tidalplayer login
//! tidalplayer search "daft punk" --type albums
//! tidalplayer play --album 79914998
//! ```

mod auth;
mod info;
mod player;
mod search;

pub use auth::credentials;
pub use auth::login;
pub use auth::logout;
pub use info::InfoKind;
pub use info::info;
pub use info::url;
pub use player::PlayerSource;
pub use player::player;
pub use search::search;
