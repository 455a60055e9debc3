use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use nanorand::WyRand;
use rust_wcloud_svg::color::random_palette;
use rust_wcloud_svg::svg::{MarkupSurface, Surface};
use rust_wcloud_svg::{
    BigramSegmenter, ChineseTokenizer, EnglishTokenizer, GridLayout, Language, WordCloud,
    WordCloudOptions,
};

mod cli;

use cli::{Cli, LayoutKind, SegmenterKind};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // fail on a bad selector before touching any input
    let language: Language = cli.language.parse()?;

    let cloud = build_cloud(&cli)?;
    let text = read_input(cli.input.as_deref())?;

    let layout = cloud.layout_words(&text, language);
    log::info!(
        "{} words drawn, {} dropped",
        layout.words.len(),
        layout.dropped.len()
    );
    let svg = MarkupSurface.draw(&layout);

    match &cli.output {
        Some(path) => fs::write(path, svg)
            .with_context(|| format!("Unable to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

fn build_cloud(cli: &Cli) -> Result<WordCloud> {
    let mut options = match &cli.config {
        Some(path) => WordCloudOptions::from_path(path)
            .with_context(|| format!("Unable to load config {}", path.display()))?,
        None => WordCloudOptions::default(),
    }
    .or(cli.overrides());

    if let Some(count) = cli.random_colors {
        let mut rng = match options.seed {
            Some(seed) => WyRand::new_seed(seed),
            None => WyRand::new(),
        };
        options.colors = Some(random_palette(count, &mut rng));
    }

    let exclude: Vec<&str> = cli.exclude.iter().map(String::as_str).collect();
    let chinese = match cli.segmenter {
        None => ChineseTokenizer::default(),
        Some(SegmenterKind::Bigram) => ChineseTokenizer::with_segmenter(BigramSegmenter),
        #[cfg(feature = "jieba")]
        Some(SegmenterKind::Jieba) => {
            ChineseTokenizer::with_segmenter(rust_wcloud_svg::JiebaSegmenter::default())
        }
        #[cfg(not(feature = "jieba"))]
        Some(SegmenterKind::Jieba) => anyhow::bail!("built without the `jieba` feature"),
    };

    let mut cloud = WordCloud::from_options(options)?
        .with_english_tokenizer(EnglishTokenizer::default().with_filter(&exclude))
        .with_chinese_tokenizer(chinese.with_filter(&exclude));

    if cli.layout == LayoutKind::Grid {
        cloud = cloud.with_layout(GridLayout);
    }
    if let Some(font) = &cli.font {
        cloud = cloud
            .with_font_from_path(font)
            .with_context(|| format!("Unable to load font {}", font.display()))?;
    }

    Ok(cloud)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Unable to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Unable to read stdin")?;
            Ok(text)
        }
    }
}
