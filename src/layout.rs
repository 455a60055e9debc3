//! Word placement.
//!
//! A [`Layout`] receives sized, rotated words and returns the ones it could
//! position. Coordinates of placed words are the text anchor (horizontal
//! centre, baseline) relative to the canvas centre.

use log::{debug, trace};
use nanorand::{Rng, WyRand};

use crate::measure::{TextMeasurer, TextMetrics};
use crate::sat::{Occupancy, Rect};

// longest grid side, in cells
const MAX_GRID_CELLS: f32 = 1024.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ScaledWord {
    pub text: String,
    pub font_size: f32,
    pub rotation: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub font_size: f32,
    pub rotation: f32,
    pub x: f32,
    pub y: f32,
}

impl PlacedWord {
    fn at(word: ScaledWord, x: f32, y: f32) -> Self {
        PlacedWord {
            text: word.text,
            font_size: word.font_size,
            rotation: word.rotation,
            x,
            y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    /// Free space kept around every word, in pixels.
    pub padding: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutOutcome {
    /// In input order, minus the words that did not fit.
    pub placed: Vec<PlacedWord>,
    pub unplaced: Vec<ScaledWord>,
}

pub trait Layout {
    fn place(
        &self,
        words: Vec<ScaledWord>,
        canvas: &Canvas,
        measurer: &dyn TextMeasurer,
        rng: &mut WyRand,
    ) -> LayoutOutcome;
}

/// Axis aligned box relative to a word's anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn translate(&self, x: f32, y: f32) -> Bounds {
        Bounds {
            min_x: self.min_x + x,
            min_y: self.min_y + y,
            max_x: self.max_x + x,
            max_y: self.max_y + y,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }
}

/// Box of a middle-anchored line rotated by `rotation` degrees about its
/// anchor, grown by `padding` on every side.
pub fn word_bounds(metrics: &TextMetrics, rotation: f32, padding: f32) -> Bounds {
    let half = metrics.width / 2.0;
    let corners = [
        (-half, -metrics.ascent),
        (half, -metrics.ascent),
        (-half, metrics.descent),
        (half, metrics.descent),
    ];
    let (sin, cos) = rotation.to_radians().sin_cos();

    let mut bounds = Bounds {
        min_x: f32::INFINITY,
        min_y: f32::INFINITY,
        max_x: f32::NEG_INFINITY,
        max_y: f32::NEG_INFINITY,
    };
    for (x, y) in corners {
        let rx = x * cos - y * sin;
        let ry = x * sin + y * cos;
        bounds.min_x = bounds.min_x.min(rx);
        bounds.max_x = bounds.max_x.max(rx);
        bounds.min_y = bounds.min_y.min(ry);
        bounds.max_y = bounds.max_y.max(ry);
    }

    Bounds {
        min_x: bounds.min_x - padding,
        min_y: bounds.min_y - padding,
        max_x: bounds.max_x + padding,
        max_y: bounds.max_y + padding,
    }
}

/// Archimedean spiral packing.
///
/// Each word starts from a random point around the canvas centre and walks
/// outward along a spiral until its box fits in free space. The walk ends
/// once the spiral has left the canvas diagonal; such words are unplaced.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpiralLayout;

impl SpiralLayout {
    fn find_anchor(
        occupancy: &Occupancy,
        cell: f32,
        bounds: &Bounds,
        canvas: &Canvas,
        rng: &mut WyRand,
    ) -> Option<(f32, f32, Rect)> {
        let (width, height) = (canvas.width as f32, canvas.height as f32);
        let start_x = (width * (rng.generate::<f32>() + 0.5) / 2.0).floor();
        let start_y = (height * (rng.generate::<f32>() + 0.5) / 2.0).floor();
        let dt: i64 = if rng.generate::<f32>() < 0.5 { 1 } else { -1 };

        let ratio = width / height;
        let max_delta = (width * width + height * height).sqrt();
        // past s = sqrt(2) * height no offset lands back on the canvas
        let max_steps = ((height + 1.0) * std::f32::consts::SQRT_2 * 10.0).ceil() as i64;

        let mut step: i64 = 0;
        while step.abs() <= max_steps {
            let s = step as f32 * 0.1;
            let dx = ratio * s * s.cos();
            let dy = s * s.sin();
            if dx.abs().min(dy.abs()) >= max_delta {
                return None;
            }
            step += dt;

            let (x, y) = ((start_x + dx).round(), (start_y + dy).round());
            let placed = bounds.translate(x, y);
            if placed.min_x < 0.0 || placed.min_y < 0.0 || placed.max_x > width || placed.max_y > height
            {
                continue;
            }

            let x0 = (placed.min_x / cell).floor() as usize;
            let y0 = (placed.min_y / cell).floor() as usize;
            let x1 = (placed.max_x / cell).ceil() as usize;
            let y1 = (placed.max_y / cell).ceil() as usize;
            let rect = Rect {
                x: x0,
                y: y0,
                width: x1.saturating_sub(x0).max(1),
                height: y1.saturating_sub(y0).max(1),
            };

            if occupancy.contains(&rect) && occupancy.region_is_empty(&rect) {
                return Some((x, y, rect));
            }
        }

        None
    }
}

impl Layout for SpiralLayout {
    fn place(
        &self,
        words: Vec<ScaledWord>,
        canvas: &Canvas,
        measurer: &dyn TextMeasurer,
        rng: &mut WyRand,
    ) -> LayoutOutcome {
        let (width, height) = (canvas.width as f32, canvas.height as f32);
        let cell = (width.max(height) / MAX_GRID_CELLS).ceil().max(1.0);
        let mut occupancy = Occupancy::new(
            (width / cell).ceil() as usize,
            (height / cell).ceil() as usize,
        );

        let mut outcome = LayoutOutcome::default();
        for word in words {
            let metrics = measurer.measure(&word.text, word.font_size);
            let bounds = word_bounds(&metrics, word.rotation, canvas.padding);

            if bounds.width() > width || bounds.height() > height {
                debug!("{:?} is larger than the canvas", word.text);
                outcome.unplaced.push(word);
                continue;
            }

            match Self::find_anchor(&occupancy, cell, &bounds, canvas, rng) {
                Some((x, y, rect)) => {
                    trace!("placed {:?} at ({x}, {y})", word.text);
                    occupancy.fill(&rect);
                    outcome
                        .placed
                        .push(PlacedWord::at(word, x - width / 2.0, y - height / 2.0));
                }
                None => outcome.unplaced.push(word),
            }
        }

        outcome
    }
}

/// Puts words into the cells of a near-square grid, row by row.
///
/// Never drops a word and does not check for overlap.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridLayout;

impl Layout for GridLayout {
    fn place(
        &self,
        words: Vec<ScaledWord>,
        canvas: &Canvas,
        _measurer: &dyn TextMeasurer,
        _rng: &mut WyRand,
    ) -> LayoutOutcome {
        if words.is_empty() {
            return LayoutOutcome::default();
        }

        let (width, height) = (canvas.width as f32, canvas.height as f32);
        let cols = (words.len() as f32).sqrt().ceil() as usize;
        let rows = words.len().div_ceil(cols);
        let cell_width = width / cols as f32;
        let cell_height = height / rows as f32;

        let placed = words
            .into_iter()
            .enumerate()
            .map(|(index, word)| {
                let col = (index % cols) as f32;
                let row = (index / cols) as f32;
                let x = col * cell_width + cell_width / 2.0 - width / 2.0;
                let y = row * cell_height + cell_height / 2.0 - height / 2.0;
                PlacedWord::at(word, x, y)
            })
            .collect();

        LayoutOutcome {
            placed,
            unplaced: vec![],
        }
    }
}
