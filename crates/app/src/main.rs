mod config;

use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, CompletionNotice, ProgressTracker};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

use crate::config::{Cli, Command, Config, ConfigError};

struct DesktopApp {
    tracker: Arc<ProgressTracker>,
}

impl UiApp for DesktopApp {
    fn tracker(&self) -> Arc<ProgressTracker> {
        Arc::clone(&self.tracker)
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ConfigError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ConfigError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

async fn open_services(config: &Config) -> Result<AppServices, Box<dyn std::error::Error>> {
    prepare_sqlite_file(&config.db_url)?;
    let services = AppServices::new_sqlite(
        &config.db_url,
        &config.scope,
        Clock::default_clock(),
        config.course.clone(),
        config.options.clone(),
    )
    .await?;
    Ok(services)
}

async fn print_status(tracker: &ProgressTracker) {
    let snapshot = tracker.snapshot().await;
    let record = &snapshot.record;
    let course = tracker.course();

    println!("{} progress: {:.1}%", course.name(), snapshot.percentage);
    println!(
        "modules: {}/{}  labs: {} (estimated {})",
        record.completed_module_count(),
        course.total_modules(),
        record.lab_count(),
        course.estimated_labs()
    );
    println!("started: {}  last update: {}", record.start_date(), record.last_update());
    for spec in course.modules() {
        let entry = record
            .modules()
            .iter()
            .find(|(id, _)| id.as_str() == spec.id)
            .map(|(_, entry)| entry);
        match entry {
            Some(done) if done.completed => println!(
                "  [x] {:<22} {} ({}s)",
                spec.id, done.completed_date, done.time_spent
            ),
            _ => println!("  [ ] {}", spec.id),
        }
    }
    for (id, done) in record.modules() {
        if !course.is_known(id) {
            println!(
                "  [x] {:<22} {} ({}s, not in course)",
                id.as_str(),
                done.completed_date,
                done.time_spent
            );
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (command, config) = Cli::parse().into_parts()?;

    init_logging();

    // The desktop launcher runs its own event loop, so the setup runtime stays
    // alive next to it rather than wrapping it.
    let runtime = tokio::runtime::Runtime::new()?;
    let services = runtime.block_on(open_services(&config))?;
    let tracker = services.tracker();

    match command {
        Command::Ui => {
            info!(db = %config.db_url, scope = %config.scope, "launching progress tracker");
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { tracker });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Course Progress")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Status => {
            runtime.block_on(print_status(&tracker));
            Ok(())
        }
        Command::Complete { module_id } => runtime.block_on(async {
            let done = tracker.mark_module_complete(&module_id).await?;
            // No window to show a toast in; the notice always goes to the log here.
            CompletionNotice::for_module(&done, tracker.course(), config.options.notice_ttl).log();
            println!("overall progress: {:.1}%", done.percentage);
            Ok::<_, Box<dyn std::error::Error>>(())
        }),
        Command::Reset => {
            runtime.block_on(tracker.reset())?;
            info!(scope = %config.scope, key = %config.options.storage_key, "stored progress cleared");
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
