use std::cell::OnceCell;
use std::path::PathBuf;

use log::{debug, warn};
use nanorand::WyRand;

use crate::color::color_for;
use crate::config::{WordCloudConfig, WordCloudOptions};
use crate::layout::{Canvas, Layout, ScaledWord, SpiralLayout};
use crate::measure::{EstimatedMeasurer, GlyphMeasurer, TextMeasurer};
use crate::rotation::rotation_for;
use crate::scale::FontScale;
use crate::svg::{ElementSurface, MarkupSurface, Surface, SvgElement};
use crate::tokenizer::{ChineseTokenizer, EnglishTokenizer, Language, Tokenizer, WordCounts};
use crate::Result;

/// A placed word with its palette colour.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledWord {
    pub text: String,
    pub font_size: f32,
    pub rotation: f32,
    pub x: f32,
    pub y: f32,
    pub fill: String,
}

/// Everything a [`Surface`] needs to draw one cloud.
#[derive(Clone, Debug, PartialEq)]
pub struct CloudLayout {
    pub width: u32,
    pub height: u32,
    pub font_family: String,
    pub words: Vec<StyledWord>,
    /// Words the layout could not fit on the canvas. They are not drawn.
    pub dropped: Vec<ScaledWord>,
}

pub struct WordCloud {
    config: WordCloudConfig,
    english: EnglishTokenizer,
    // built on first use, loading the jieba dictionary is slow
    chinese: OnceCell<ChineseTokenizer>,
    layout: Box<dyn Layout>,
    measurer: Box<dyn TextMeasurer>,
}

impl WordCloud {
    /// Fails when `config` holds an out-of-range value.
    pub fn new(config: WordCloudConfig) -> Result<Self> {
        config.validate()?;

        Ok(WordCloud {
            config,
            english: EnglishTokenizer::default(),
            chinese: OnceCell::new(),
            layout: Box::new(SpiralLayout),
            measurer: Box::new(EstimatedMeasurer::default()),
        })
    }

    pub fn from_options(options: WordCloudOptions) -> Result<Self> {
        Self::new(WordCloudConfig::from_options(options)?)
    }

    pub fn config(&self) -> &WordCloudConfig {
        &self.config
    }

    pub fn with_english_tokenizer(mut self, value: EnglishTokenizer) -> Self {
        self.english = value;
        self
    }

    pub fn with_chinese_tokenizer(mut self, value: ChineseTokenizer) -> Self {
        self.chinese = OnceCell::from(value);
        self
    }

    pub fn with_layout(mut self, value: impl Layout + 'static) -> Self {
        self.layout = Box::new(value);
        self
    }

    pub fn with_measurer(mut self, value: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(value);
        self
    }

    /// Measures words with the glyph metrics of a font file.
    pub fn with_font_from_path(self, path: impl Into<PathBuf>) -> Result<Self> {
        let measurer = GlyphMeasurer::from_path(path.into())?;
        Ok(self.with_measurer(measurer))
    }

    pub fn tokenizer(&self, language: Language) -> &dyn Tokenizer {
        match language {
            Language::English => &self.english,
            Language::Chinese => self.chinese.get_or_init(ChineseTokenizer::default),
        }
    }

    pub fn frequencies(&self, text: &str, language: Language) -> WordCounts {
        self.tokenizer(language).tokenize(text)
    }

    fn rng(&self) -> WyRand {
        match self.config.seed {
            Some(seed) => WyRand::new_seed(seed),
            None => WyRand::new(),
        }
    }

    /// Most frequent words first, ties in first-seen order, cut to
    /// `max_words`, then sized and rotated.
    pub fn scaled_words(&self, frequencies: WordCounts, rng: &mut WyRand) -> Vec<ScaledWord> {
        let distinct = frequencies.len();
        let mut words: Vec<(String, usize)> = frequencies.into_iter().collect();
        // stable, so equal counts keep insertion order
        words.sort_by(|a, b| b.1.cmp(&a.1));
        words.truncate(self.config.max_words);
        debug!("{distinct} distinct words, keeping {}", words.len());

        let scale = FontScale::from_counts(
            words.iter().map(|(_, count)| *count),
            self.config.min_font_size,
            self.config.max_font_size,
        );

        words
            .into_iter()
            .map(|(text, count)| ScaledWord {
                text,
                font_size: scale.font_size(count),
                rotation: rotation_for(
                    rng,
                    &self.config.rotation_angles,
                    self.config.rotation_probability,
                ),
            })
            .collect()
    }

    /// Runs the whole pipeline short of drawing.
    ///
    /// Words that do not fit are left out and listed in
    /// [`CloudLayout::dropped`].
    pub fn layout_words(&self, text: &str, language: Language) -> CloudLayout {
        let mut rng = self.rng();
        let words = self.scaled_words(self.frequencies(text, language), &mut rng);

        let canvas = Canvas {
            width: self.config.width,
            height: self.config.height,
            padding: self.config.padding,
        };
        let outcome = self
            .layout
            .place(words, &canvas, self.measurer.as_ref(), &mut rng);

        if !outcome.unplaced.is_empty() {
            warn!(
                "{} of {} words did not fit on the {}x{} canvas",
                outcome.unplaced.len(),
                outcome.unplaced.len() + outcome.placed.len(),
                self.config.width,
                self.config.height
            );
        }

        let words = outcome
            .placed
            .into_iter()
            .enumerate()
            .map(|(index, word)| StyledWord {
                fill: color_for(&self.config.colors, index).to_string(),
                text: word.text,
                font_size: word.font_size,
                rotation: word.rotation,
                x: word.x,
                y: word.y,
            })
            .collect();

        CloudLayout {
            width: self.config.width,
            height: self.config.height,
            font_family: self.config.font_family.clone(),
            words,
            dropped: outcome.unplaced,
        }
    }

    pub fn render<S: Surface>(&self, text: &str, language: Language, surface: &mut S) -> S::Output {
        surface.draw(&self.layout_words(text, language))
    }

    pub fn generate_svg(&self, text: &str, language: Language) -> String {
        self.render(text, language, &mut MarkupSurface)
    }

    /// Replaces the contents of `container` with the cloud.
    pub fn render_into(&self, text: &str, language: Language, container: &mut SvgElement) {
        self.render(text, language, &mut ElementSurface::new(container))
    }
}
