use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use deck_to_pdf::cli::{parse_slide_range, Args};
use deck_to_pdf::config::Settings;
use deck_to_pdf::deck::build_deck;
use deck_to_pdf::model::DeckSpec;
use deck_to_pdf::render::{compress_pdf, render_pdf};

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new().filter_level(log_level).init();

    let mut deck = match &args.input {
        Some(path) => DeckSpec::load(path)
            .with_context(|| format!("Failed to load deck from {}", path.display()))?,
        None => DeckSpec::builtin().context("Failed to parse the built-in deck")?,
    };

    if let Some(range) = &args.slides {
        let wanted = parse_slide_range(range)
            .map_err(|e| anyhow::anyhow!("Invalid --slides value: {e}"))?;
        let total = deck.slides.len();
        deck.slides = deck
            .slides
            .into_iter()
            .enumerate()
            .filter(|(i, _)| wanted.contains(&(i + 1)))
            .map(|(_, s)| s)
            .collect();
        info!(
            "selected {} of {} slide(s) via --slides {}",
            deck.slides.len(),
            total,
            range
        );
        if deck.slides.is_empty() {
            bail!("--slides {range} selects no slides (deck has {total})");
        }
    }

    let settings = Settings::from_args(&args);
    let canvas = build_deck(&settings, deck.document_title(), &deck.slides)
        .context("Failed to build deck")?;
    let pdf_bytes = render_pdf(&canvas, &settings).context("Failed to render PDF")?;

    let pdf_bytes = if args.uncompressed {
        pdf_bytes
    } else {
        compress_pdf(&pdf_bytes).context("Failed to compress PDF")?
    };

    let output_path = args.output_path();
    std::fs::write(&output_path, &pdf_bytes)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!(
        "Wrote {} slide(s) to {}",
        canvas.slide_count(),
        output_path.display()
    );
    Ok(())
}
