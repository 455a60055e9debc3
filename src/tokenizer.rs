use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use regex::Regex;

#[cfg(feature = "jieba")]
use crate::segment::JiebaSegmenter;
use crate::segment::{BigramSegmenter, Segmenter};
use crate::stopwords;
use crate::WordCloudError;

/// Word frequencies in first-encountered order.
pub type WordCounts = IndexMap<String, usize>;

const WORD_PATTERN: &str = r"\w[\w']*";

pub trait Tokenizer {
    /// Counts every token of `text` that survives filtering.
    ///
    /// Never fails: empty or unrecognisable input yields an empty map.
    fn tokenize(&self, text: &str) -> WordCounts;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Chinese,
}

impl FromStr for Language {
    type Err = WordCloudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" => Ok(Language::English),
            "chinese" => Ok(Language::Chinese),
            _ => Err(WordCloudError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => f.write_str("english"),
            Language::Chinese => f.write_str("chinese"),
        }
    }
}

#[derive(Clone, Debug)]
struct TokenFilter {
    stopwords: &'static HashSet<&'static str>,
    extra: HashSet<String>,
    min_word_length: usize,
    exclude_numbers: bool,
}

impl TokenFilter {
    fn new(stopwords: &'static HashSet<&'static str>) -> Self {
        TokenFilter {
            stopwords,
            extra: HashSet::new(),
            min_word_length: 2,
            exclude_numbers: true,
        }
    }

    fn keeps(&self, word: &str) -> bool {
        if word.chars().count() < self.min_word_length {
            return false;
        }
        if self.exclude_numbers && word.chars().all(char::is_numeric) {
            return false;
        }
        let lower_case = word.to_lowercase();
        !self.stopwords.contains(lower_case.as_str()) && !self.extra.contains(&lower_case)
    }
}

fn word_regex() -> Regex {
    Regex::new(WORD_PATTERN).expect("Unable to compile tokenization regex")
}

fn count<'a>(tokens: impl IntoIterator<Item = &'a str>) -> WordCounts {
    let mut frequencies = WordCounts::new();
    for word in tokens {
        *frequencies.entry(word.to_string()).or_insert(0) += 1;
    }
    frequencies
}

macro_rules! filter_setters {
    () => {
        /// Extra words to drop, compared case-insensitively.
        pub fn with_filter(mut self, value: &[&str]) -> Self {
            self.filter.extra = value.iter().map(|el| el.to_lowercase()).collect();
            self
        }

        /// Tokens with fewer characters are dropped. Values below 2 are raised to 2.
        pub fn with_min_word_len(mut self, size: usize) -> Self {
            self.filter.min_word_length = size.max(2);
            self
        }

        pub fn with_exclude_numbers(mut self, value: bool) -> Self {
            self.filter.exclude_numbers = value;
            self
        }
    };
}

/// Lowercases its input and counts `\w[\w']*` runs.
#[derive(Clone, Debug)]
pub struct EnglishTokenizer {
    regex: Regex,
    filter: TokenFilter,
}

impl Default for EnglishTokenizer {
    fn default() -> Self {
        EnglishTokenizer {
            regex: word_regex(),
            filter: TokenFilter::new(stopwords::english()),
        }
    }
}

impl EnglishTokenizer {
    filter_setters!();
}

impl Tokenizer for EnglishTokenizer {
    fn tokenize(&self, text: &str) -> WordCounts {
        let lower_case = text.to_lowercase();
        count(
            self.regex
                .find_iter(&lower_case)
                .map(|mat| mat.as_str())
                .filter(|word| self.filter.keeps(word)),
        )
    }
}

pub struct ChineseTokenizer {
    //分词正则
    regex: Regex,
    segmenter: Box<dyn Segmenter>,
    filter: TokenFilter,
}

impl Default for ChineseTokenizer {
    /// Uses jieba when the `jieba` feature is enabled, bigrams otherwise.
    fn default() -> Self {
        #[cfg(feature = "jieba")]
        {
            Self::with_segmenter(JiebaSegmenter::default())
        }
        #[cfg(not(feature = "jieba"))]
        {
            Self::with_segmenter(BigramSegmenter)
        }
    }
}

impl fmt::Debug for ChineseTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChineseTokenizer")
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

impl ChineseTokenizer {
    pub fn with_segmenter(segmenter: impl Segmenter + 'static) -> Self {
        ChineseTokenizer {
            regex: word_regex(),
            segmenter: Box::new(segmenter),
            filter: TokenFilter::new(stopwords::chinese()),
        }
    }

    pub fn bigram() -> Self {
        Self::with_segmenter(BigramSegmenter)
    }

    filter_setters!();

    fn tokens<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.regex
            .find_iter(text)
            .map(|mat| mat.as_str())
            .flat_map(|run| self.segmenter.segment(run))
            .filter(|word| self.filter.keeps(word))
    }

    /// Latin words embedded in Chinese text keep their case; variants that
    /// only differ in case are merged under the most common spelling.
    fn keep_common_case(frequencies: WordCounts) -> WordCounts {
        let mut common_cases = IndexMap::<String, Vec<(String, usize)>>::new();
        for (key, val) in frequencies {
            common_cases
                .entry(key.to_lowercase())
                .or_default()
                .push((key, val));
        }

        common_cases
            .into_values()
            .map(|variants| {
                let occurrence_sum: usize = variants.iter().map(|(_, val)| val).sum();
                // first variant wins ties
                let mut most_common = &variants[0];
                for variant in &variants[1..] {
                    if variant.1 > most_common.1 {
                        most_common = variant;
                    }
                }
                (most_common.0.clone(), occurrence_sum)
            })
            .collect()
    }
}

impl Tokenizer for ChineseTokenizer {
    fn tokenize(&self, text: &str) -> WordCounts {
        Self::keep_common_case(count(self.tokens(text)))
    }
}
