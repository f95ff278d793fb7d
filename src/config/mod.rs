pub mod cli;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "gallery-doc")]
#[command(about = "Edit an image-gallery document stored as JSON")]
pub struct CliConfig {
    /// Path of the gallery document to open (created on first save).
    #[arg(long, default_value = "./gallery.json")]
    pub document: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the gallery entries in display order.
    Show,
    /// Insert an image entry. Without --ratio the locator must point at a
    /// readable local image so the ratio can be measured from its pixels.
    Add {
        url: String,
        #[arg(long)]
        ratio: Option<f32>,
        #[arg(long, help = "Insertion index; clamps into range, defaults to the end")]
        at: Option<isize>,
    },
    /// Remove the entry at an index.
    Remove { index: usize },
    /// Reorder: remove `from`, reinsert at the raw `to` index.
    Move { from: usize, to: usize },
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn document_path(&self) -> &str {
        &self.document
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("document", &self.document)?;

        if let Command::Add { url, ratio, .. } = &self.command {
            validation::validate_locator("url", url)?;
            if let Some(ratio) = ratio {
                validation::validate_ratio("ratio", *ratio)?;
            }
        }

        Ok(())
    }
}
