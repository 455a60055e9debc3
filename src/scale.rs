/// Linear mapping from word frequency to font size over one batch of words.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontScale {
    min_count: usize,
    max_count: usize,
    min_font_size: f32,
    max_font_size: f32,
}

impl FontScale {
    /// Bounds are taken from `counts`; an empty batch behaves like a batch of
    /// equal counts.
    pub fn from_counts(
        counts: impl IntoIterator<Item = usize>,
        min_font_size: f32,
        max_font_size: f32,
    ) -> Self {
        let (min_count, max_count) = counts
            .into_iter()
            .fold(None, |bounds, count| match bounds {
                None => Some((count, count)),
                Some((lo, hi)) => Some((usize::min(lo, count), usize::max(hi, count))),
            })
            .unwrap_or((0, 0));

        FontScale {
            min_count,
            max_count,
            min_font_size,
            max_font_size,
        }
    }

    pub fn font_size(&self, count: usize) -> f32 {
        scale(
            count,
            self.min_count,
            self.max_count,
            self.min_font_size,
            self.max_font_size,
        )
    }
}

/// Interpolates `count` between `min_count` and `max_count`.
///
/// When every word shares one count the result is `max_font_size`.
pub fn scale(
    count: usize,
    min_count: usize,
    max_count: usize,
    min_font_size: f32,
    max_font_size: f32,
) -> f32 {
    if min_count == max_count {
        return max_font_size;
    }

    let t = (count as f32 - min_count as f32) / (max_count as f32 - min_count as f32);
    min_font_size + t * (max_font_size - min_font_size)
}
