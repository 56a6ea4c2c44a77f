use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::Path;

mod emoji;
mod rename;
mod utils;

use emoji::EmojipediaSite;
use rename::RenameMode;

/// Simple program to fetch Apple emoji icons from emojipedia
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download every icon on the emoji listing page
    Fetch {
        /// Path where to save the icons
        #[arg(short, long, default_value = "emoji")]
        path: String,
    },
    /// Copy downloaded icons under transformed names
    Rename {
        /// Directory holding the downloaded icons
        #[arg(short, long, default_value = "emoji")]
        input: String,

        /// Path where to copy the renamed icons
        #[arg(short, long, default_value = "emoji_unicode")]
        output: String,

        /// Which part of the file name to keep
        #[arg(short, long, value_enum, default_value = "unicode")]
        mode: RenameMode,
    },
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Fetch { path } => {
            fetch_icons(Path::new(&path)).await?;
        }
        Commands::Rename {
            input,
            output,
            mode,
        } => {
            let copied = rename::rename_icons(Path::new(&input), Path::new(&output), mode)?;
            println!("Copied {} renamed icons to {}", copied, output);
        }
    }

    Ok(())
}

/// Fetch the listing page, then download each discovered icon in turn,
/// skipping names already present in `save_dir`.
async fn fetch_icons(save_dir: &Path) -> io::Result<()> {
    let client = reqwest::Client::new();

    println!("Fetching {}...", EmojipediaSite::get_listing_url());
    let html = utils::http::fetch_page_text(&client, EmojipediaSite::get_listing_url()).await?;

    let icons = emoji::page::extract_icons(&html)?;
    println!("Found {} icons on the listing page", icons.len());

    utils::files::ensure_directory(save_dir)?;

    let file_names: Vec<String> = icons.iter().map(|icon| icon.file_name.clone()).collect();
    let existing = utils::files::batch_check_existing(save_dir, &file_names);

    let to_download = emoji::filter_new_icons(icons, &existing);

    let skipped = file_names.len() - to_download.len();
    if skipped > 0 {
        println!("Skipping {} icons (already exist or duplicate names)", skipped);
    }
    if to_download.is_empty() {
        println!("Nothing new to download");
        return Ok(());
    }

    println!("Downloading {} new icons", to_download.len());

    let pb = ProgressBar::new(to_download.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )
            .unwrap()
            .progress_chars("#>-"),
    );

    // Strictly one icon at a time; there is no concurrent fan-out.
    for icon in to_download {
        let file_path = save_dir.join(&icon.file_name);
        utils::http::download_icon(&client, &icon.url, &file_path).await?;
        pb.println(format!("Got {}...", icon.file_name));
        pb.inc(1);
    }

    pb.finish_with_message("Download complete!");
    Ok(())
}
