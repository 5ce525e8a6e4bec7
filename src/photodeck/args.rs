use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "photodeck")]
#[command(version, long_version = env!("PHOTODECK_LONG_VERSION"))]
#[command(about = "On-device photo catalog with favorites and uploads", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $PHOTODECK_HOME, then the platform data dir)
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store one or more photos
    #[command(alias = "a")]
    Add {
        /// Image files to store
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        /// Record the photos as camera captures rather than picked files
        #[arg(long)]
        camera: bool,
    },

    /// List the photos shown on a page (camera, gallery, favorites, home)
    #[command(alias = "ls")]
    List {
        #[arg(default_value = "camera")]
        page: String,
    },

    /// Toggle favorite state of one or more photos
    #[command(alias = "f")]
    Fav {
        /// Photo names or positions (e.g. 1 3 1700000000000)
        #[arg(required = true, num_args = 1..)]
        photos: Vec<String>,
    },

    /// Delete one or more photos
    #[command(alias = "rm")]
    Delete {
        /// Photo names or positions
        #[arg(required = true, num_args = 1..)]
        photos: Vec<String>,
    },

    /// Rename a photo
    #[command(alias = "mv")]
    Rename { photo: String, new_name: String },

    /// Upload one or more photos to the configured endpoint
    #[command(alias = "up")]
    Upload {
        /// Photo names or positions
        #[arg(required = true, num_args = 1..)]
        photos: Vec<String>,
    },

    /// Reload from disk and prune favorites without photos
    Sync,

    /// Remove every favorite (photos are kept)
    ClearFavorites,

    /// Forget the shared gallery list (photos are kept)
    ClearGallery,

    /// Delete every photo and favorite
    Clear {
        /// Skip the confirmation
        #[arg(long, short)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g. upload-endpoint)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
