use clap::Parser;
use gallery_doc::config::Command;
use gallery_doc::utils::{logger, ratio, validation::Validate};
use gallery_doc::{
    CliConfig, GalleryEditor, ImageEntry, ImageFetcher, LocalFetcher, LocalStorage, Result,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting gallery-doc CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".".to_string());
    let mut editor = match GalleryEditor::open(storage, config.document.clone()).await {
        Ok(editor) => editor,
        Err(e) => {
            tracing::error!("Failed to open document {}: {}", config.document, e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    match run(&mut editor, &config).await {
        Ok(summary) => {
            tracing::info!("{}", summary);
            println!("✅ {}", summary);
        }
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run(editor: &mut GalleryEditor<LocalStorage>, config: &CliConfig) -> Result<String> {
    match &config.command {
        Command::Show => {
            for (index, entry) in editor.gallery().iter().enumerate() {
                println!("{:>4}  {:<8.4}  {}", index, entry.ratio, entry.url);
            }
            Ok(format!("{} entries in {}", editor.gallery().len(), config.document))
        }
        Command::Add { url, ratio: given, at } => {
            let ratio = match given {
                Some(ratio) => *ratio,
                None => {
                    // No ratio supplied: measure it from the image bytes,
                    // the way a drop handler would.
                    let bytes = LocalFetcher::new().fetch(url).await?;
                    ratio::from_bytes(&bytes)?
                }
            };
            let index = (*at).unwrap_or(editor.gallery().len() as isize);
            editor.insert_signed(ImageEntry::new(url.clone(), ratio), index);
            editor.save().await?;
            Ok(format!(
                "Added {} (ratio {:.4}), {} entries total",
                url,
                ratio,
                editor.gallery().len()
            ))
        }
        Command::Remove { index } => {
            let removed = editor.remove(*index)?;
            editor.save().await?;
            Ok(format!(
                "Removed {}, {} entries left",
                removed.url,
                editor.gallery().len()
            ))
        }
        Command::Move { from, to } => {
            editor.move_entry(*from, *to)?;
            editor.save().await?;
            Ok(format!("Moved entry {} to {}", from, to))
        }
    }
}
