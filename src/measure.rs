//! Text measurement used by the layouts to size word boxes.

use std::{fs, path::Path};

use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont};

use crate::segment::is_cjk;
use crate::{Result, WordCloudError};

/// Extent of one line of text around its baseline, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    /// Distance from the baseline up to the top of the line.
    pub ascent: f32,
    /// Distance from the baseline down to the bottom of the line.
    pub descent: f32,
}

impl TextMetrics {
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics;
}

/// Font independent estimate: Latin glyphs take `char_width_factor` of the
/// font size, CJK and other wide glyphs take the full size.
#[derive(Clone, Copy, Debug)]
pub struct EstimatedMeasurer {
    pub char_width_factor: f32,
    pub ascent_factor: f32,
    pub descent_factor: f32,
}

impl Default for EstimatedMeasurer {
    fn default() -> Self {
        EstimatedMeasurer {
            char_width_factor: 0.6,
            ascent_factor: 0.8,
            descent_factor: 0.2,
        }
    }
}

fn is_wide(c: char) -> bool {
    is_cjk(c)
        || ('\u{3000}'..='\u{303f}').contains(&c)
        || ('\u{ff00}'..='\u{ffef}').contains(&c)
        || ('\u{3040}'..='\u{30ff}').contains(&c)
        || ('\u{ac00}'..='\u{d7af}').contains(&c)
}

impl TextMeasurer for EstimatedMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics {
        let ems: f32 = text
            .chars()
            .filter(|c| !c.is_control())
            .map(|c| if is_wide(c) { 1.0 } else { self.char_width_factor })
            .sum();

        TextMetrics {
            width: ems * font_size,
            ascent: self.ascent_factor * font_size,
            descent: self.descent_factor * font_size,
        }
    }
}

/// Measures with the real advances and kerning of a font.
pub struct GlyphMeasurer {
    font: FontVec,
}

impl GlyphMeasurer {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let font = FontVec::try_from_vec(data).map_err(|e| WordCloudError::Font(e.to_string()))?;
        Ok(GlyphMeasurer { font })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_bytes(fs::read(path)?)
    }
}

impl TextMeasurer for GlyphMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics {
        let scaled_font = self.font.as_scaled(PxScale::from(font_size));

        let mut caret = 0.0f32;
        let mut last_glyph: Option<GlyphId> = None;
        for c in text.chars().filter(|c| !c.is_control()) {
            let id = scaled_font.glyph_id(c);
            if let Some(previous) = last_glyph.take() {
                caret += scaled_font.kern(previous, id);
            }
            last_glyph = Some(id);
            caret += scaled_font.h_advance(id);
        }

        TextMetrics {
            width: caret.max(0.0),
            ascent: scaled_font.ascent(),
            descent: -scaled_font.descent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_scales_with_font_size() {
        let measurer = EstimatedMeasurer::default();
        let small = measurer.measure("cloud", 10.0);
        let large = measurer.measure("cloud", 20.0);
        assert!((small.width - 30.0).abs() < 1e-3);
        assert!((large.width - 60.0).abs() < 1e-3);
        assert!((small.height() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn estimate_treats_cjk_as_full_width() {
        let measurer = EstimatedMeasurer::default();
        assert_eq!(measurer.measure("快乐", 10.0).width, 20.0);
        assert_eq!(measurer.measure("", 10.0).width, 0.0);
    }

    #[test]
    fn invalid_font_data_is_rejected() {
        match GlyphMeasurer::from_bytes(vec![0, 1, 2, 3]) {
            Err(WordCloudError::Font(_)) => {}
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("garbage parsed as a font"),
        }
    }
}
