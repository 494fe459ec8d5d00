//! `drive`: command-line client for the Drive file service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Uses the same API client, route guard, and dashboard state machine as the
//! web client. The session token persists in a file so consecutive
//! invocations share one login. Commands that mirror the dashboard refuse to
//! run without a session, matching the guarded `/dashboard` route.
//!
//! ERROR HANDLING
//! ==============
//! Every failure surfaces as a [`CliError`], printed once on stderr with a
//! non-zero exit code. Rejected input never reaches the network.

mod output;
mod prompt;
mod session;
mod transport;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use drive::api::{ApiClient, REGISTERED};
use drive::config::{ApiConfig, ConfigError, DEFAULT_API_BASE_URL};
use drive::dashboard::{Dashboard, FileAction, ListKind, Section};
use drive::error::{ApiError, InputError};
use drive::request::UploadFile;
use drive::router::{Navigation, Route, RouteGuard};
use drive::session::{SessionError, SessionStore};
use drive::transport::Transport;
use drive::types::Credentials;
use tracing_subscriber::EnvFilter;

use crate::output::{render_notice, render_section};
use crate::session::FileSessionStore;
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("{}", .0.user_message())]
    Api(#[from] ApiError),
    #[error("{0}")]
    Input(#[from] InputError),
    /// A list fetch failed; carries the user-facing message.
    #[error("{0}")]
    Load(String),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("not logged in; run `drive login <email>` first")]
    NotLoggedIn,
    #[error("cannot read {}: {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Parser, Debug)]
#[command(name = "drive", about = "Drive file storage CLI")]
struct Cli {
    /// Backend API origin.
    #[arg(long, env = "DRIVE_API_URL", default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    /// Where the session token is kept between runs.
    #[arg(long, env = "DRIVE_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Log requests at debug level.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account. Does not log in.
    Register {
        email: String,
        #[arg(long, env = "DRIVE_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Exchange credentials for a session token.
    Login {
        email: String,
        #[arg(long, env = "DRIVE_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Forget the stored session token.
    Logout,
    /// Show whether a session is stored.
    Status,
    /// List your files.
    Ls,
    /// List files shared with you.
    Shared,
    /// Upload a local file.
    Upload {
        path: PathBuf,
        /// MIME type sent with the file part.
        #[arg(long)]
        content_type: Option<String>,
    },
    /// Delete a file by id.
    Rm {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(short, long, default_value_t = false)]
        yes: bool,
    },
    /// Rename a file by id.
    Rename { id: String, new_name: String },
    /// Share a file with one or more emails (space or comma separated).
    Share {
        id: String,
        #[arg(required = true)]
        emails: Vec<String>,
    },
}

impl Command {
    /// Route whose guard decides whether the command may run.
    fn route(&self) -> Route {
        match self {
            Self::Register { .. } => Route::Register,
            Self::Login { .. } | Self::Logout | Self::Status => Route::Login,
            Self::Ls
            | Self::Shared
            | Self::Upload { .. }
            | Self::Rm { .. }
            | Self::Rename { .. }
            | Self::Share { .. } => Route::Dashboard,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    match run(cli, &mut input, &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run(cli: Cli, input: &mut impl BufRead, out: &mut impl Write) -> Result<(), CliError> {
    let config = ApiConfig::new(&cli.api_url)?;
    let session_path = cli.session_file.unwrap_or_else(session::default_path);
    tracing::debug!(api = %config.base_url, session = %session_path.display(), "starting");

    let session: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(session_path));
    let transport = ReqwestTransport::new(reqwest::Client::builder().build()?);
    let api = Arc::new(ApiClient::new(&config, transport, Arc::clone(&session)));
    let guard = RouteGuard::new(session);
    execute(cli.command, api, &guard, input, out).await
}

async fn execute<T: Transport>(
    command: Command,
    api: Arc<ApiClient<T>>,
    guard: &RouteGuard,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if let Navigation::Redirect(_) = guard.check(command.route()) {
        return Err(CliError::NotLoggedIn);
    }

    match command {
        Command::Register { email, password } => {
            let password = password_or_prompt(password, input, out)?;
            api.register(&Credentials::new(&email, &password)?).await?;
            writeln!(out, "{REGISTERED}")?;
        }
        Command::Login { email, password } => {
            let password = password_or_prompt(password, input, out)?;
            let credentials = Credentials::new(&email, &password)?;
            api.login(&credentials).await?;
            writeln!(out, "Logged in as {}", credentials.email)?;
        }
        Command::Logout => {
            api.logout()?;
            writeln!(out, "Logged out")?;
        }
        Command::Status => {
            let state = if guard.check(Route::Dashboard).is_redirect() { "Not logged in" } else { "Logged in" };
            writeln!(out, "{state} ({})", api.base_url())?;
        }
        Command::Ls => list(api, ListKind::Owned, out).await?,
        Command::Shared => list(api, ListKind::Shared, out).await?,
        Command::Upload { path, content_type } => {
            let file = read_upload(path, content_type).await?;
            let mut dashboard = Dashboard::new(api);
            dashboard.state_mut().select_file(Some(file));
            let action = dashboard.state().upload_action()?;
            run_action(&mut dashboard, action, out).await?;
        }
        Command::Rm { id, yes } => {
            if !yes && !prompt::confirm(input, out, &format!("Delete file {id}?"))? {
                writeln!(out, "Cancelled")?;
                return Ok(());
            }
            run_action(&mut Dashboard::new(api), FileAction::delete(id), out).await?;
        }
        Command::Rename { id, new_name } => {
            let action = FileAction::rename(id, &new_name)?;
            run_action(&mut Dashboard::new(api), action, out).await?;
        }
        Command::Share { id, emails } => {
            let action = FileAction::share(id, &emails.join(","))?;
            run_action(&mut Dashboard::new(api), action, out).await?;
        }
    }
    Ok(())
}

fn password_or_prompt(
    password: Option<String>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<String> {
    match password {
        Some(password) => Ok(password),
        None => prompt::read_line(input, out, "Password: "),
    }
}

async fn read_upload(path: PathBuf, content_type: Option<String>) -> Result<UploadFile, CliError> {
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(source) => return Err(CliError::ReadFile { path, source }),
    };
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
    let file = UploadFile::new(name, bytes);
    Ok(match content_type {
        Some(content_type) => file.with_content_type(content_type),
        None => file,
    })
}

async fn list<T: Transport>(api: Arc<ApiClient<T>>, kind: ListKind, out: &mut impl Write) -> Result<(), CliError> {
    let mut dashboard = Dashboard::new(api);
    dashboard.refresh(kind).await;
    if let Some(error) = dashboard.state().load_error(kind) {
        return Err(CliError::Load(error.to_owned()));
    }
    let section = match kind {
        ListKind::Owned => Section::MyDrive,
        ListKind::Shared => Section::SharedWithMe,
    };
    write!(out, "{}", render_section(dashboard.state(), section))?;
    Ok(())
}

/// Run one action; on success print its notice and the re-fetched list.
async fn run_action<T: Transport>(
    dashboard: &mut Dashboard<T>,
    action: FileAction,
    out: &mut impl Write,
) -> Result<(), CliError> {
    dashboard.run(action).await?;
    if let Some(notice) = dashboard.state_mut().notice.take() {
        writeln!(out, "{}", render_notice(&notice))?;
    }
    write!(out, "{}", render_section(dashboard.state(), Section::MyDrive))?;
    Ok(())
}
