use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cite_core::CslCatalog;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, CiteFormatService, CslStyleSearch};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_PATH: &str = "citations.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    DbDir { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::DbDir { path, source } => {
                write!(f, "cannot create database directory {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::DbDir { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn cite_formats(&self) -> Arc<CiteFormatService> {
        self.services.cite_formats()
    }

    fn csl_catalog(&self) -> CslCatalog {
        self.services.csl_catalog()
    }

    fn csl_search(&self) -> Arc<dyn CslStyleSearch> {
        self.services.csl_search()
    }
}

struct Args {
    db_url: String,
    csl_catalog: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--db <sqlite_url>] [--csl-catalog <path>]");
    eprintln!("  cargo run -p app -- export [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite://./{DEFAULT_DB_PATH}");
    eprintln!("  --csl-catalog <built-in style list>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CITE_DB_URL, CITE_CSL_CATALOG, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Export,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "export" => Some(Self::Export),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = normalize_sqlite_url(
            std::env::var("CITE_DB_URL").unwrap_or_else(|_| DEFAULT_DB_PATH.into()),
        );
        let mut csl_catalog = std::env::var("CITE_CSL_CATALOG")
            .ok()
            .filter(|path| !path.trim().is_empty());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--csl-catalog" => {
                    csl_catalog = Some(require_value(args, "--csl-catalog")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            csl_catalog,
        })
    }
}

/// Turn a bare path or `sqlite:` URL into an absolute `sqlite://` URL.
fn normalize_sqlite_url(raw: String) -> String {
    let raw = raw.trim();
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") || raw.starts_with("sqlite:file:")
    {
        return raw.to_string();
    }

    let path = PathBuf::from(raw.strip_prefix("sqlite:").unwrap_or(raw));
    let path = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", path.display())
}

/// Filesystem path behind a file-backed `sqlite://` URL.
fn sqlite_file_path(db_url: &str) -> Option<&Path> {
    let rest = db_url.strip_prefix("sqlite://")?;
    let path = rest.split('?').next().unwrap_or(rest);
    (!path.is_empty()).then(|| Path::new(path))
}

/// The pool creates the database file, but not its directory.
fn ensure_db_dir(db_url: &str) -> Result<(), ArgsError> {
    if db_url == "sqlite::memory:" || db_url.starts_with("sqlite:file:") {
        return Ok(());
    }
    let path = sqlite_file_path(db_url).ok_or_else(|| ArgsError::InvalidDbUrl {
        raw: db_url.to_string(),
    })?;
    if let Some(parent) = path.parent().filter(|parent| !parent.exists()) {
        std::fs::create_dir_all(parent).map_err(|source| ArgsError::DbDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

fn load_catalog(path: Option<&str>) -> Result<CslCatalog, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(CslCatalog::builtin());
    };
    let json = std::fs::read_to_string(path)?;
    let catalog = CslCatalog::from_json(&json)?;
    tracing::info!(path, styles = catalog.len(), "loaded csl catalog");
    Ok(catalog)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    ensure_db_dir(&parsed.db_url)?;
    let catalog = load_catalog(parsed.csl_catalog.as_deref())?;
    let services = AppServices::new_sqlite(&parsed.db_url, catalog).await?;
    tracing::debug!(db_url = %parsed.db_url, ?cmd, "storage ready");

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Citation Settings")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Export => {
            let json = services.cite_formats().export_json().await?;
            println!("{json}");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        tracing::error!(%err, "fatal");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
