use nanorand::{Rng, WyRand};
use palette::{Hsl, IntoColor, Pixel, Srgb};

use crate::{Result, WordCloudError};

/// The d3 `schemeCategory10` palette.
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

pub fn category10() -> Vec<String> {
    CATEGORY10.iter().map(|c| c.to_string()).collect()
}

/// Rejects empty palettes and entries that are not CSS colours.
pub fn validate_palette(colors: &[String]) -> Result<()> {
    if colors.is_empty() {
        return Err(WordCloudError::invalid("colors", "palette is empty"));
    }
    for color in colors {
        csscolorparser::parse(color)
            .map_err(|e| WordCloudError::invalid("colors", format!("{color:?}: {e}")))?;
    }
    Ok(())
}

/// Cycles through `palette` by output position.
pub fn color_for(palette: &[String], index: usize) -> &str {
    &palette[index % palette.len()]
}

/// `count` fully saturated colours with random hues.
pub fn random_palette(count: usize, rng: &mut WyRand) -> Vec<String> {
    (0..count)
        .map(|_| {
            let hue: u16 = rng.generate_range(0..360);

            let col = Hsl::new(hue as f32, 1.0, 0.5);
            let rgb: Srgb = col.into_color();

            let raw: [u8; 3] = rgb.into_format().into_raw();
            format!("#{:02x}{:02x}{:02x}", raw[0], raw[1], raw[2])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_is_valid() {
        assert!(validate_palette(&category10()).is_ok());
    }

    #[test]
    fn bad_palettes_are_rejected() {
        assert!(validate_palette(&[]).is_err());
        let err = validate_palette(&["#fff".to_string(), "not-a-colour".to_string()]).unwrap_err();
        assert!(matches!(err, WordCloudError::InvalidConfig { field: "colors", .. }));
        assert!(validate_palette(&["rebeccapurple".into(), "rgb(1, 2, 3)".into()]).is_ok());
    }

    #[test]
    fn colors_cycle() {
        let palette = vec!["red".to_string(), "blue".to_string()];
        let picked: Vec<&str> = (0..5).map(|i| color_for(&palette, i)).collect();
        assert_eq!(picked, ["red", "blue", "red", "blue", "red"]);
    }

    #[test]
    fn random_palette_is_valid_hex() {
        let palette = random_palette(8, &mut WyRand::new_seed(1));
        assert_eq!(palette.len(), 8);
        assert!(palette.iter().all(|c| c.len() == 7 && c.starts_with('#')));
        assert!(validate_palette(&palette).is_ok());
    }
}
