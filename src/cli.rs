use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rust_wcloud_svg::WordCloudOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LayoutKind {
    /// Spiral packing without overlap.
    Spiral,
    /// One word per grid cell.
    Grid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SegmenterKind {
    /// Dictionary segmentation (needs the `jieba` feature).
    Jieba,
    /// Single characters and adjacent pairs.
    Bigram,
}

/// Render an SVG word cloud from English or Chinese text.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Text file to read. Reads stdin when absent or "-".
    pub input: Option<PathBuf>,

    /// Language of the text: english or chinese.
    #[arg(short, long, default_value = "english")]
    pub language: String,

    /// Where to write the SVG. Writes stdout when absent.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML file with word cloud options. Flags below override it.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    #[arg(long)]
    pub max_words: Option<usize>,

    #[arg(long)]
    pub font_family: Option<String>,

    #[arg(long)]
    pub padding: Option<f32>,

    #[arg(long)]
    pub min_font_size: Option<f32>,

    #[arg(long)]
    pub max_font_size: Option<f32>,

    /// Probability [0, 1] that a word is rotated.
    #[arg(long)]
    pub rotation_probability: Option<f32>,

    /// Makes the output reproducible.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = LayoutKind::Spiral)]
    pub layout: LayoutKind,

    /// Chinese segmentation strategy. Defaults to jieba when compiled in.
    #[arg(long, value_enum)]
    pub segmenter: Option<SegmenterKind>,

    /// Font file used to measure words instead of the built-in estimate.
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Replace the palette with N random hues.
    #[arg(long, value_name = "N")]
    pub random_colors: Option<usize>,

    /// Extra words to leave out. Repeatable.
    #[arg(long = "exclude", value_name = "WORD")]
    pub exclude: Vec<String>,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Options given on the command line.
    pub fn overrides(&self) -> WordCloudOptions {
        WordCloudOptions {
            width: self.width,
            height: self.height,
            font_family: self.font_family.clone(),
            max_words: self.max_words,
            padding: self.padding,
            min_font_size: self.min_font_size,
            max_font_size: self.max_font_size,
            rotation_probability: self.rotation_probability,
            seed: self.seed,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_become_overrides() {
        let cli = Cli::parse_from([
            "wcloud",
            "lyrics.txt",
            "--language",
            "chinese",
            "--width",
            "640",
            "--seed",
            "4",
            "--layout",
            "grid",
            "--exclude",
            "tom",
            "--exclude",
            "major",
        ]);

        assert_eq!(cli.input, Some(PathBuf::from("lyrics.txt")));
        assert_eq!(cli.language, "chinese");
        assert_eq!(cli.layout, LayoutKind::Grid);
        assert_eq!(cli.exclude, vec!["tom".to_string(), "major".to_string()]);

        let overrides = cli.overrides();
        assert_eq!(overrides.width, Some(640));
        assert_eq!(overrides.seed, Some(4));
        assert_eq!(overrides.height, None);
    }
}
