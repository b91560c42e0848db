//! Reel CLI - Command-line interface for the video bookmark store
//!
//! Save, list, and organize video bookmarks from the terminal against the
//! same synced database the mobile app uses.

mod auth;

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::aot::Generator;
use clap_complete::{generate, shells};
use reel_core::config::ClientConfig;
use reel_core::store::BookmarkStore;
use reel_core::{ListId, NewVideo, Platform, Video, VideoId, VideoList};
use serde::Serialize;
use thiserror::Error;

use crate::auth::{
    clear_stored_session, load_stored_session, AuthError, AuthSession, SignUpOutcome,
    SupabaseAuthService,
};

#[derive(Parser)]
#[command(name = "reel")]
#[command(about = "Save and organize video bookmarks from the command line")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Optional path to local database file
    #[arg(long, value_name = "PATH")]
    db_path: Option<PathBuf>,

    /// Act as this user ID (defaults to the signed-in session user)
    #[arg(long, global = true, value_name = "USER_ID")]
    user: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Authenticate with Supabase
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Save a new video bookmark
    #[command(alias = "new")]
    Add {
        /// Video title
        #[arg(long)]
        title: String,
        /// Video description
        #[arg(long)]
        description: String,
        /// Video URL
        #[arg(long)]
        url: String,
        /// Source platform
        #[arg(long, value_enum, default_value_t = PlatformArg::Youtube)]
        platform: PlatformArg,
    },
    /// List saved videos
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a saved video
    Delete {
        /// Video ID or unique ID prefix
        id: String,
    },
    /// Manage named video lists
    Lists {
        #[command(subcommand)]
        command: Option<ListCommands>,
    },
    /// Sync local replica with remote Turso database
    Sync,
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum AuthCommands {
    /// Login with Supabase email/password and store session in keychain
    Login {
        /// Supabase account email
        #[arg(long, value_name = "EMAIL")]
        email: String,
        /// Supabase account password
        #[arg(long, value_name = "PASSWORD")]
        password: String,
    },
    /// Create a Supabase account
    Signup {
        /// Supabase account email
        #[arg(long, value_name = "EMAIL")]
        email: String,
        /// Supabase account password
        #[arg(long, value_name = "PASSWORD")]
        password: String,
    },
    /// Show current auth status
    Status,
    /// Logout and clear stored session
    Logout,
}

#[derive(Subcommand)]
enum ListCommands {
    /// Create a list from saved videos
    Create {
        /// List title
        #[arg(long)]
        title: String,
        /// IDs (or unique prefixes) of saved videos to include
        #[arg(required = true, value_name = "VIDEO_ID")]
        video_ids: Vec<String>,
    },
    /// Show the videos in a list
    Show {
        /// List ID or unique ID prefix
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a list (its videos stay saved)
    Delete {
        /// List ID or unique ID prefix
        id: String,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum PlatformArg {
    Youtube,
    Instagram,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Youtube => Self::YouTube,
            PlatformArg::Instagram => Self::Instagram,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Core(#[from] reel_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("Not signed in. Run `reel auth login` or pass --user / set REEL_USER_ID.")]
    MissingUser,
    #[error("Auth is not configured. Set SUPABASE_URL and SUPABASE_ANON_KEY.")]
    AuthNotConfigured,
    #[error("Video not found for id/prefix: {0}")]
    VideoNotFound(String),
    #[error("List not found for id/prefix: {0}")]
    ListNotFound(String),
    #[error("{0}")]
    AmbiguousId(String),
    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),
    #[error(
        "Sync is not configured. Set TURSO_DATABASE_URL and TURSO_AUTH_TOKEN to enable `reel sync`."
    )]
    SyncNotConfigured,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reel=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let db_path = resolve_db_path(cli.db_path);

    match cli.command {
        Commands::Auth { command } => run_auth(command).await?,
        Commands::Add {
            title,
            description,
            url,
            platform,
        } => {
            let user_id = resolve_user(cli.user)?;
            let fields = NewVideo {
                title,
                description,
                url,
                platform: platform.into(),
            };
            run_add(&user_id, fields, &db_path).await?;
        }
        Commands::List { json } => {
            let user_id = resolve_user(cli.user)?;
            run_list(&user_id, json, &db_path).await?;
        }
        Commands::Delete { id } => {
            let user_id = resolve_user(cli.user)?;
            run_delete(&user_id, &id, &db_path).await?;
        }
        Commands::Lists { command } => {
            let user_id = resolve_user(cli.user)?;
            match command {
                None => run_lists_overview(&user_id, &db_path).await?,
                Some(ListCommands::Create { title, video_ids }) => {
                    run_lists_create(&user_id, &title, &video_ids, &db_path).await?;
                }
                Some(ListCommands::Show { id, json }) => {
                    run_lists_show(&user_id, &id, json, &db_path).await?;
                }
                Some(ListCommands::Delete { id }) => {
                    run_lists_delete(&user_id, &id, &db_path).await?;
                }
            }
        }
        Commands::Sync => run_sync(&db_path).await?,
        Commands::Completions { shell, output } => {
            run_completions(shell, output.as_deref())?;
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Auth commands
// ---------------------------------------------------------------------------

async fn run_auth(command: AuthCommands) -> Result<(), CliError> {
    match command {
        AuthCommands::Login { email, password } => {
            let service = auth_service()?;
            let session = service.sign_in(email.trim(), &password).await?;
            println!("Signed in as {}", describe_session_user(&session));
        }
        AuthCommands::Signup { email, password } => {
            let service = auth_service()?;
            match service.sign_up(email.trim(), &password).await? {
                SignUpOutcome::SignedIn(session) => {
                    println!("Signed in as {}", describe_session_user(&session));
                }
                SignUpOutcome::ConfirmationRequired => {
                    println!("Check your inbox to confirm your email, then run `reel auth login`");
                }
            }
        }
        AuthCommands::Status => match load_stored_session()? {
            Some(session) => {
                let state = if session.is_expired() {
                    "expired"
                } else {
                    "active"
                };
                println!(
                    "Signed in as {} (session {state})",
                    describe_session_user(&session)
                );
            }
            None => println!("Not signed in"),
        },
        AuthCommands::Logout => {
            if let Some(session) = load_stored_session()? {
                if let Ok(service) = auth_service() {
                    if let Err(error) = service.sign_out(&session.access_token).await {
                        tracing::warn!("Remote sign out failed: {}", error);
                    }
                }
            }
            clear_stored_session()?;
            println!("Signed out");
        }
    }

    Ok(())
}

fn auth_service() -> Result<SupabaseAuthService, CliError> {
    let config = ClientConfig::from_env();
    SupabaseAuthService::new_from_config(&config)?.ok_or(CliError::AuthNotConfigured)
}

fn describe_session_user(session: &AuthSession) -> String {
    session
        .user
        .email
        .clone()
        .unwrap_or_else(|| format!("user {}", session.user.id))
}

fn resolve_user(cli_user: Option<String>) -> Result<String, CliError> {
    let session_user = load_stored_session()
        .ok()
        .flatten()
        .map(|session| session.user.id);
    pick_user_id(cli_user, env::var("REEL_USER_ID").ok(), session_user)
}

fn pick_user_id(
    flag: Option<String>,
    env_value: Option<String>,
    session_user: Option<String>,
) -> Result<String, CliError> {
    flag.or(env_value)
        .or(session_user)
        .map(|user| user.trim().to_string())
        .filter(|user| !user.is_empty())
        .ok_or(CliError::MissingUser)
}

// ---------------------------------------------------------------------------
// Video commands
// ---------------------------------------------------------------------------

async fn run_add(user_id: &str, fields: NewVideo, db_path: &Path) -> Result<(), CliError> {
    let store = open_store(db_path).await?;
    let video = store.add_video(user_id, fields).await?;
    println!("{}", video.id);
    Ok(())
}

#[derive(Debug, Serialize)]
struct VideoListItem {
    id: String,
    title: String,
    description: String,
    url: String,
    platform: String,
    thumbnail: String,
    created_at: String,
    relative_time: String,
}

async fn run_list(user_id: &str, as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let store = open_store(db_path).await?;
    let videos = store.list_videos(user_id).await?;

    if as_json {
        let items = videos
            .iter()
            .map(video_to_list_item)
            .collect::<Vec<VideoListItem>>();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for line in format_video_lines(&videos) {
            println!("{line}");
        }
    }

    Ok(())
}

async fn run_delete(user_id: &str, id: &str, db_path: &Path) -> Result<(), CliError> {
    let store = open_store(db_path).await?;
    let video_id = resolve_video_id(&store, user_id, id).await?;
    store.delete_video(user_id, &video_id).await?;
    println!("{video_id}");
    Ok(())
}

// ---------------------------------------------------------------------------
// List commands
// ---------------------------------------------------------------------------

async fn run_lists_overview(user_id: &str, db_path: &Path) -> Result<(), CliError> {
    let store = open_store(db_path).await?;
    let lists = store.list_lists(user_id).await?;

    for list in lists {
        let short_id = short_id(&list.id.to_string());
        let count = list.videos.len();
        let created = format_relative_time(&list.created_at);
        println!(
            "{short_id:<13}  {:<32}  {count:>3} videos  {created}",
            truncate_text(&list.title, 32)
        );
    }

    Ok(())
}

async fn run_lists_create(
    user_id: &str,
    title: &str,
    video_queries: &[String],
    db_path: &Path,
) -> Result<(), CliError> {
    let store = open_store(db_path).await?;
    let saved = store.list_videos(user_id).await?;

    let mut selected = Vec::with_capacity(video_queries.len());
    for query in video_queries {
        let video_id = resolve_video_id_in(&saved, query)?;
        let video = saved
            .iter()
            .find(|video| video.id == video_id)
            .cloned()
            .ok_or_else(|| CliError::VideoNotFound(query.clone()))?;
        if !selected.iter().any(|existing: &Video| existing.id == video.id) {
            selected.push(video);
        }
    }

    let list = store.create_list(user_id, title, selected).await?;
    println!("{}", list.id);
    Ok(())
}

async fn run_lists_show(
    user_id: &str,
    id: &str,
    as_json: bool,
    db_path: &Path,
) -> Result<(), CliError> {
    let store = open_store(db_path).await?;
    let list_id = resolve_list_id(&store, user_id, id).await?;
    let list = store.get_list(user_id, &list_id).await?;
    let videos = store.list_detail_videos(user_id, &list_id).await?;

    if as_json {
        let items = videos
            .iter()
            .map(video_to_list_item)
            .collect::<Vec<VideoListItem>>();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        println!("{} ({} videos)", list.title, videos.len());
        for line in format_video_lines(&videos) {
            println!("{line}");
        }
    }

    Ok(())
}

async fn run_lists_delete(user_id: &str, id: &str, db_path: &Path) -> Result<(), CliError> {
    let store = open_store(db_path).await?;
    let list_id = resolve_list_id(&store, user_id, id).await?;
    store.delete_list(user_id, &list_id).await?;
    println!("{list_id}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Sync and completions
// ---------------------------------------------------------------------------

async fn run_sync(db_path: &Path) -> Result<(), CliError> {
    let store = open_store(db_path).await?;
    if !store.is_sync_enabled().await {
        return Err(CliError::SyncNotConfigured);
    }

    store.sync().await?;
    println!("Sync completed");
    Ok(())
}

fn run_completions(shell: CompletionShell, output_path: Option<&Path>) -> Result<(), CliError> {
    let mut command = Cli::command();
    let mut buffer = Vec::new();

    match shell {
        CompletionShell::Bash => generate_for_shell(shells::Bash, &mut command, &mut buffer),
        CompletionShell::Zsh => generate_for_shell(shells::Zsh, &mut command, &mut buffer),
        CompletionShell::Fish => generate_for_shell(shells::Fish, &mut command, &mut buffer),
    }

    if let Some(path) = output_path {
        std::fs::write(path, &buffer)?;
        println!("{}", path.display());
    } else {
        io::stdout().write_all(&buffer)?;
    }

    Ok(())
}

fn generate_for_shell<G: Generator>(
    generator: G,
    command: &mut clap::Command,
    buffer: &mut Vec<u8>,
) {
    generate(generator, command, "reel", buffer);
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn resolve_video_id(
    store: &BookmarkStore,
    user_id: &str,
    query: &str,
) -> Result<VideoId, CliError> {
    let videos = store.list_videos(user_id).await?;
    resolve_video_id_in(&videos, query)
}

fn resolve_video_id_in(videos: &[Video], query: &str) -> Result<VideoId, CliError> {
    let query = query.trim();
    if let Ok(video_id) = query.parse::<VideoId>() {
        if videos.iter().any(|video| video.id == video_id) {
            return Ok(video_id);
        }
    }

    let matches = videos
        .iter()
        .filter(|video| video.id.to_string().starts_with(query))
        .map(|video| video.id)
        .collect::<Vec<_>>();

    match matches.len() {
        0 => Err(CliError::VideoNotFound(query.to_string())),
        1 => Ok(matches[0]),
        _ => Err(CliError::AmbiguousId(format!(
            "ID prefix '{query}' is ambiguous; matches: {}",
            render_id_options(&matches.iter().map(ToString::to_string).collect::<Vec<_>>())
        ))),
    }
}

async fn resolve_list_id(
    store: &BookmarkStore,
    user_id: &str,
    query: &str,
) -> Result<ListId, CliError> {
    let lists = store.list_lists(user_id).await?;
    resolve_list_id_in(&lists, query)
}

fn resolve_list_id_in(lists: &[VideoList], query: &str) -> Result<ListId, CliError> {
    let query = query.trim();
    if let Ok(list_id) = query.parse::<ListId>() {
        if lists.iter().any(|list| list.id == list_id) {
            return Ok(list_id);
        }
    }

    let matches = lists
        .iter()
        .filter(|list| list.id.to_string().starts_with(query))
        .map(|list| list.id)
        .collect::<Vec<_>>();

    match matches.len() {
        0 => Err(CliError::ListNotFound(query.to_string())),
        1 => Ok(matches[0]),
        _ => Err(CliError::AmbiguousId(format!(
            "ID prefix '{query}' is ambiguous; matches: {}",
            render_id_options(&matches.iter().map(ToString::to_string).collect::<Vec<_>>())
        ))),
    }
}

fn render_id_options(ids: &[String]) -> String {
    ids.iter()
        .take(3)
        .map(|id| short_id(id))
        .collect::<Vec<_>>()
        .join(", ")
}

fn short_id(id: &str) -> String {
    id.chars().take(13).collect()
}

fn format_video_lines(videos: &[Video]) -> Vec<String> {
    videos
        .iter()
        .map(|video| {
            let id = video.id.to_string();
            let title = truncate_text(&video.title, 32);
            let platform = video.platform.as_str();
            let saved = format_relative_time(&video.created_at);
            format!("{:<13}  {title:<32}  {platform:<9}  {saved}", short_id(&id))
        })
        .collect()
}

fn video_to_list_item(video: &Video) -> VideoListItem {
    VideoListItem {
        id: video.id.to_string(),
        title: video.title.clone(),
        description: video.description.clone(),
        url: video.url.clone(),
        platform: video.platform.as_str().to_string(),
        thumbnail: video.thumbnail.clone(),
        created_at: video.created_at.clone(),
        relative_time: format_relative_time(&video.created_at),
    }
}

fn truncate_text(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

fn format_relative_time(created_at: &str) -> String {
    let Ok(created) = chrono::DateTime::parse_from_rfc3339(created_at) else {
        return created_at.to_string();
    };

    let diff = Utc::now()
        .signed_duration_since(created)
        .num_milliseconds()
        .max(0);
    let minute = 60_000;
    let hour = 60 * minute;
    let day = 24 * hour;
    let week = 7 * day;
    let month = 30 * day;
    let year = 365 * day;

    if diff < minute {
        "just now".to_string()
    } else if diff < hour {
        format!("{}m ago", diff / minute)
    } else if diff < day {
        format!("{}h ago", diff / hour)
    } else if diff < week {
        format!("{}d ago", diff / day)
    } else if diff < month {
        format!("{}w ago", diff / week)
    } else if diff < year {
        format!("{}mo ago", diff / month)
    } else {
        format!("{}y ago", diff / year)
    }
}

fn resolve_db_path(cli_db_path: Option<PathBuf>) -> PathBuf {
    cli_db_path
        .or_else(|| env::var_os("REEL_DB_PATH").map(PathBuf::from))
        .unwrap_or_else(default_db_path)
}

fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reel")
        .join("reel.db")
}

async fn open_store(path: &Path) -> Result<BookmarkStore, CliError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let config = ClientConfig::from_env();
    if let Some(sync_config) = config.sync_config() {
        tracing::info!("Sync enabled with Turso");
        // The replica bootstrap needs more stack than the default runtime
        // worker provides
        let path_buf = path.to_path_buf();
        let store = std::thread::Builder::new()
            .stack_size(8 * 1024 * 1024)
            .spawn(move || {
                let runtime = tokio::runtime::Builder::new_multi_thread()
                    .enable_all()
                    .build()
                    .map_err(|error| reel_core::Error::Database(error.to_string()))?;
                runtime.block_on(BookmarkStore::open_with_sync(&path_buf, sync_config))
            })
            .map_err(|error| CliError::DatabaseInit(error.to_string()))?
            .join()
            .map_err(|_| CliError::DatabaseInit("sync initialization thread panicked".into()))??;

        Ok(store)
    } else {
        Ok(BookmarkStore::open(path).await?)
    }
}
