use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use photodeck::api::{CmdMessage, CmdResult, ConfigAction, DeckApi, ListedPhoto, MessageLevel};
use photodeck::capture::{CaptureInput, CaptureKind};
use photodeck::config::CONFIG_KEYS;
use photodeck::error::{DeckError, Result};
use photodeck::logging;
use photodeck::nav::Page;
use photodeck::store::fs::FsFileStore;
use photodeck::store::prefs::JsonPreferenceStore;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

const HOME_ENV: &str = "PHOTODECK_HOME";
const FAVORITE_MARKER: &str = "★";

type Api = DeckApi<FsFileStore, JsonPreferenceStore>;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.home.clone())?;
    let mut api = DeckApi::open(data_dir)?;

    let result = match cli.command {
        Some(Commands::Add { files, camera }) => handle_add(&mut api, files, camera).await?,
        Some(Commands::List { page }) => api.list(page.parse()?).await?,
        Some(Commands::Fav { photos }) => api.toggle_favorites(&photos).await?,
        Some(Commands::Delete { photos }) => api.delete_photos(&photos).await?,
        Some(Commands::Rename { photo, new_name }) => api.rename_photo(&photo, &new_name).await?,
        Some(Commands::Upload { photos }) => api.upload_photos(&photos).await?,
        Some(Commands::Sync) => api.sync().await?,
        Some(Commands::ClearFavorites) => api.clear_favorites().await?,
        Some(Commands::ClearGallery) => api.clear_gallery().await?,
        Some(Commands::Clear { yes }) => api.clear_all(yes).await?,
        Some(Commands::Config { key, value }) => handle_config(&api, key, value)?,
        None => api.list(Page::Camera).await?,
    };

    print_result(&result);
    if result.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "photodeck", "photodeck")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DeckError::Config("Could not determine data dir".to_string()))
}

async fn handle_add(api: &mut Api, files: Vec<PathBuf>, camera: bool) -> Result<CmdResult> {
    let kind = if camera {
        CaptureKind::Camera
    } else {
        CaptureKind::FileSelection
    };
    let inputs = files
        .into_iter()
        .map(|path| CaptureInput::Reference { kind, path })
        .collect();
    api.capture(inputs).await
}

fn handle_config(api: &Api, key: Option<String>, value: Option<String>) -> Result<CmdResult> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    api.config(action)
}

fn print_result(result: &CmdResult) {
    if let Some(page) = result.page {
        print_photos(page, &result.listed_photos);
    }
    if let Some(config) = &result.config {
        for key in CONFIG_KEYS {
            if let Some(value) = config.get(key) {
                println!("{} = {}", key, value);
            }
        }
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_photos(page: Page, photos: &[ListedPhoto]) {
    if page == Page::Home {
        return;
    }
    if photos.is_empty() {
        println!("No photos on the {} page.", page);
        return;
    }

    for photo in photos {
        let marker = if photo.is_favorite {
            format!("{} ", FAVORITE_MARKER).yellow()
        } else {
            "  ".normal()
        };
        let location = photo
            .record
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not saved)".to_string());
        let size = photo
            .record
            .data_uri()
            .map(|uri| format!("{} KiB", (uri.len() * 3 / 4).div_ceil(1024)))
            .unwrap_or_default();

        println!(
            "{}{:>3}. {:<20} {:>8}  {}",
            marker,
            photo.index,
            photo.record.name.bold(),
            size,
            location.dimmed()
        );
    }
}
