//! Word clouds for English and Chinese text, rendered as SVG.
//!
//! ```no_run
//! use rust_wcloud_svg::{Language, WordCloud, WordCloudConfig};
//!
//! let cloud = WordCloud::new(WordCloudConfig::default()).unwrap();
//! let svg = cloud.generate_svg("Ground Control to Major Tom", Language::English);
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod color;
pub mod config;
pub mod layout;
pub mod measure;
pub mod rotation;
pub mod scale;
pub mod segment;
pub mod stopwords;
pub mod svg;
pub mod tokenizer;

mod cloud;
mod error;
mod sat;

pub use cloud::{CloudLayout, StyledWord, WordCloud};
pub use config::{WordCloudConfig, WordCloudOptions};
pub use error::{Result, WordCloudError};
pub use layout::{GridLayout, Layout, PlacedWord, ScaledWord, SpiralLayout};
pub use segment::BigramSegmenter;
#[cfg(feature = "jieba")]
pub use segment::JiebaSegmenter;
pub use tokenizer::{ChineseTokenizer, EnglishTokenizer, Language, Tokenizer, WordCounts};
