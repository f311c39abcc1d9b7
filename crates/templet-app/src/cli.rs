//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use templet_core::{Arrangement, Orientation, ScalingStyle};

#[derive(Parser, Debug)]
#[command(name = "templet", about = "Inspect and re-layout signage templates", version)]
pub struct Cli {
    /// Editor config (JSON). Defaults apply when omitted.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty template file.
    New {
        file: PathBuf,
        #[arg(long, default_value = "Untitled")]
        name: String,
        #[arg(long, default_value = "landscape")]
        orientation: Orientation,
    },
    /// Print the objects of a template at editor resolution.
    Inspect { file: PathBuf },
    /// Change orientation and object policies, then save.
    Relayout {
        file: PathBuf,
        /// Stacking index of the object to re-layout.
        #[arg(long)]
        object: Option<usize>,
        #[arg(long)]
        arrangement: Option<Arrangement>,
        #[arg(long)]
        style: Option<ScalingStyle>,
        #[arg(long)]
        orientation: Option<Orientation>,
        /// Write here instead of overwriting `file`.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Insert a local image, sized from its header.
    AddImage { file: PathBuf, image: PathBuf },
    /// Copy a template file into the configured template store.
    Store {
        file: PathBuf,
        /// Store id; defaults to the file stem.
        #[arg(long)]
        id: Option<String>,
    },
    /// Export a stored template to a file.
    Export { id: String, file: PathBuf },
    /// List the ids in the template store.
    List,
    /// Insert a text object.
    AddText {
        file: PathBuf,
        #[arg(long)]
        text: Option<String>,
    },
}
