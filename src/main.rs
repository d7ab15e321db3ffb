use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tidalplayer::{
    cli::{self, InfoKind, PlayerSource},
    config, error,
    management::PasswordStorage,
    types::{SearchKind, TrackId},
    utils,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Log in to TIDAL
    Login(LoginOptions),

    /// Forget the stored TIDAL session
    Logout,

    /// Store login name and password for autologin
    Credentials(CredentialsOptions),

    /// Show track information
    Track(ItemOptions),

    /// Show album information
    Album(AlbumOptions),

    /// Show artist information
    Artist(ArtistOptions),

    /// Print the stream url of a track
    Url(ItemOptions),

    /// Search the TIDAL catalog
    Search(SearchOptions),

    /// Start the interactive player
    Play(PlayOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct LoginOptions {
    /// Login name, defaults to the stored one
    #[clap(long)]
    pub user: Option<String>,

    /// Password, defaults to the stored one
    #[clap(long)]
    pub password: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CredentialsOptions {
    #[clap(long)]
    pub user: String,

    #[clap(long)]
    pub password: String,

    /// Remember the login name
    #[clap(long)]
    pub save_login: bool,

    /// Where to keep the password: none, secure (OS keyring) or plain
    #[clap(long, default_value = "none", value_parser = utils::parse_password_storage)]
    pub save_password: PasswordStorage,
}

#[derive(Parser, Debug, Clone)]
pub struct ItemOptions {
    pub id: TrackId,
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumOptions {
    pub id: TrackId,

    /// Also list the album's tracks
    #[clap(long)]
    pub tracks: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistOptions {
    pub id: TrackId,

    /// Also list this many top tracks
    #[clap(long, default_value_t = 0)]
    pub top: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    pub query: String,

    /// Bucket to search: artists, albums, playlists or tracks
    #[clap(long = "type", default_value = "tracks", value_parser = utils::parse_search_kind)]
    pub kind: SearchKind,

    #[clap(long, default_value_t = 50)]
    pub limit: u32,

    /// Print the raw JSON result list
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PlayOptions {
    /// Track ids to queue, comma separated
    #[clap(long, value_delimiter = ',')]
    pub tracks: Vec<TrackId>,

    /// Queue all tracks of an album
    #[clap(long)]
    pub album: Option<TrackId>,

    /// Queue all tracks of a playlist (UUID)
    #[clap(long)]
    pub playlist: Option<String>,

    /// Resolve `insert` by playlist index instead of by track id
    #[clap(long)]
    pub insert_by_index: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Login(opt) => cli::login(opt.user, opt.password).await,
        Command::Logout => cli::logout().await,
        Command::Credentials(opt) => {
            cli::credentials(opt.user, opt.password, opt.save_login, opt.save_password).await
        }
        Command::Track(opt) => cli::info(InfoKind::Track, opt.id, false, 0).await,
        Command::Album(opt) => cli::info(InfoKind::Album, opt.id, opt.tracks, 0).await,
        Command::Artist(opt) => cli::info(InfoKind::Artist, opt.id, false, opt.top).await,
        Command::Url(opt) => cli::url(opt.id).await,
        Command::Search(opt) => cli::search(opt.kind, opt.query, opt.limit, opt.json).await,
        Command::Play(opt) => {
            let source = PlayerSource {
                tracks: opt.tracks,
                album: opt.album,
                playlist: opt.playlist,
            };
            cli::player(source, opt.insert_by_index).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
