use std::{fs, path::Path};

use serde::Deserialize;

use crate::color;
use crate::{Result, WordCloudError};

/// Validated, immutable settings for one [`WordCloud`](crate::WordCloud).
#[derive(Clone, Debug, PartialEq)]
pub struct WordCloudConfig {
    pub width: u32,
    pub height: u32,
    pub font_family: String,
    pub max_words: usize,
    pub colors: Vec<String>,
    pub padding: f32,
    pub min_font_size: f32,
    pub max_font_size: f32,
    /// Degrees.
    pub rotation_angles: Vec<f32>,
    pub rotation_probability: f32,
    /// Fixes every random draw of a render when set.
    pub seed: Option<u64>,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        WordCloudConfig {
            width: 800,
            height: 600,
            font_family: "Arial, sans-serif".to_string(),
            max_words: 100,
            colors: color::category10(),
            padding: 5.0,
            min_font_size: 10.0,
            max_font_size: 60.0,
            rotation_angles: vec![0.0, 90.0],
            rotation_probability: 0.3,
            seed: None,
        }
    }
}

/// Caller overrides; every field left out keeps its default.
///
/// Can be read from TOML:
///
/// ```toml
/// width = 1024
/// colors = ["#000", "#555"]
/// rotation_angles = [0, 0, 90]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WordCloudOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub font_family: Option<String>,
    pub max_words: Option<usize>,
    pub colors: Option<Vec<String>>,
    pub padding: Option<f32>,
    pub min_font_size: Option<f32>,
    pub max_font_size: Option<f32>,
    pub rotation_angles: Option<Vec<f32>>,
    pub rotation_probability: Option<f32>,
    pub seed: Option<u64>,
}

impl WordCloudOptions {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Fields set in `other` win.
    pub fn or(self, other: WordCloudOptions) -> WordCloudOptions {
        WordCloudOptions {
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            font_family: other.font_family.or(self.font_family),
            max_words: other.max_words.or(self.max_words),
            colors: other.colors.or(self.colors),
            padding: other.padding.or(self.padding),
            min_font_size: other.min_font_size.or(self.min_font_size),
            max_font_size: other.max_font_size.or(self.max_font_size),
            rotation_angles: other.rotation_angles.or(self.rotation_angles),
            rotation_probability: other.rotation_probability.or(self.rotation_probability),
            seed: other.seed.or(self.seed),
        }
    }
}

impl WordCloudConfig {
    /// Applies `options` over the defaults and validates the result.
    pub fn from_options(options: WordCloudOptions) -> Result<Self> {
        let config = Self::default().merge(options);
        config.validate()?;
        Ok(config)
    }

    /// Shallow merge: a present option replaces the whole field.
    pub fn merge(self, options: WordCloudOptions) -> Self {
        WordCloudConfig {
            width: options.width.unwrap_or(self.width),
            height: options.height.unwrap_or(self.height),
            font_family: options.font_family.unwrap_or(self.font_family),
            max_words: options.max_words.unwrap_or(self.max_words),
            colors: options.colors.unwrap_or(self.colors),
            padding: options.padding.unwrap_or(self.padding),
            min_font_size: options.min_font_size.unwrap_or(self.min_font_size),
            max_font_size: options.max_font_size.unwrap_or(self.max_font_size),
            rotation_angles: options.rotation_angles.unwrap_or(self.rotation_angles),
            rotation_probability: options
                .rotation_probability
                .unwrap_or(self.rotation_probability),
            seed: options.seed.or(self.seed),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(WordCloudError::invalid("width", "must be positive"));
        }
        if self.height == 0 {
            return Err(WordCloudError::invalid("height", "must be positive"));
        }
        if self.font_family.trim().is_empty() {
            return Err(WordCloudError::invalid("font_family", "must not be empty"));
        }
        if self.max_words == 0 {
            return Err(WordCloudError::invalid("max_words", "must be at least 1"));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(WordCloudError::invalid(
                "padding",
                format!("{} is not a non-negative number", self.padding),
            ));
        }
        if !self.min_font_size.is_finite() || self.min_font_size <= 0.0 {
            return Err(WordCloudError::invalid(
                "min_font_size",
                format!("{} is not a positive number", self.min_font_size),
            ));
        }
        if !self.max_font_size.is_finite() || self.max_font_size < self.min_font_size {
            return Err(WordCloudError::invalid(
                "max_font_size",
                format!(
                    "{} is below min_font_size {}",
                    self.max_font_size, self.min_font_size
                ),
            ));
        }
        if !(0.0..=1.0).contains(&self.rotation_probability) {
            return Err(WordCloudError::invalid(
                "rotation_probability",
                format!("{} is outside [0, 1]", self.rotation_probability),
            ));
        }
        if self.rotation_angles.is_empty() {
            return Err(WordCloudError::invalid("rotation_angles", "must not be empty"));
        }
        if let Some(angle) = self.rotation_angles.iter().find(|a| !a.is_finite()) {
            return Err(WordCloudError::invalid(
                "rotation_angles",
                format!("{angle} is not a finite angle"),
            ));
        }
        color::validate_palette(&self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected_field(options: WordCloudOptions) -> &'static str {
        match WordCloudConfig::from_options(options) {
            Err(WordCloudError::InvalidConfig { field, .. }) => field,
            other => panic!("expected a configuration error, got {other:?}"),
        }
    }

    #[test]
    fn defaults_are_valid() {
        let config = WordCloudConfig::from_options(WordCloudOptions::default()).unwrap();
        assert_eq!(config, WordCloudConfig::default());
        assert_eq!(config.colors.len(), 10);
        assert_eq!(config.rotation_angles, vec![0.0, 90.0]);
    }

    #[test]
    fn overrides_replace_whole_fields() {
        let config = WordCloudConfig::from_options(WordCloudOptions {
            width: Some(300),
            colors: Some(vec!["#000".to_string()]),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(config.width, 300);
        assert_eq!(config.height, 600);
        assert_eq!(config.colors, vec!["#000".to_string()]);
    }

    #[test]
    fn out_of_range_values_name_the_field() {
        let bad = rejected_field;

        assert_eq!(bad(WordCloudOptions { width: Some(0), ..Default::default() }), "width");
        assert_eq!(bad(WordCloudOptions { max_words: Some(0), ..Default::default() }), "max_words");
        assert_eq!(
            bad(WordCloudOptions { min_font_size: Some(-1.0), ..Default::default() }),
            "min_font_size"
        );
        assert_eq!(
            bad(WordCloudOptions { max_font_size: Some(5.0), ..Default::default() }),
            "max_font_size"
        );
        assert_eq!(
            bad(WordCloudOptions { rotation_probability: Some(1.5), ..Default::default() }),
            "rotation_probability"
        );
        assert_eq!(
            bad(WordCloudOptions { rotation_angles: Some(vec![]), ..Default::default() }),
            "rotation_angles"
        );
        assert_eq!(bad(WordCloudOptions { padding: Some(f32::NAN), ..Default::default() }), "padding");
        assert_eq!(
            bad(WordCloudOptions { colors: Some(vec!["nope".into()]), ..Default::default() }),
            "colors"
        );
        assert_eq!(
            bad(WordCloudOptions { font_family: Some(" ".into()), ..Default::default() }),
            "font_family"
        );
    }

    #[test]
    fn options_from_toml() {
        let options = WordCloudOptions::from_toml_str(
            r##"
            width = 1024
            rotation_angles = [0, 0, 90]
            rotation_probability = 0.2
            colors = ["#111", "#222"]
            "##,
        )
        .unwrap();

        assert_eq!(options.width, Some(1024));
        assert_eq!(options.rotation_angles, Some(vec![0.0, 0.0, 90.0]));
        assert_eq!(options.height, None);

        let config = WordCloudConfig::from_options(options).unwrap();
        assert_eq!(config.rotation_probability, 0.2);
    }

    #[test]
    fn unknown_toml_keys_are_rejected() {
        assert!(matches!(
            WordCloudOptions::from_toml_str("colour = [\"#fff\"]"),
            Err(WordCloudError::ConfigFile(_))
        ));
    }

    #[test]
    fn later_options_win() {
        let file = WordCloudOptions {
            width: Some(100),
            height: Some(50),
            ..Default::default()
        };
        let cli = WordCloudOptions {
            width: Some(200),
            ..Default::default()
        };
        let merged = file.or(cli);
        assert_eq!(merged.width, Some(200));
        assert_eq!(merged.height, Some(50));
    }
}
