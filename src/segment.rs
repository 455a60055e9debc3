//! Chinese word segmentation strategies.

#[cfg(feature = "jieba")]
use jieba_rs::Jieba;

/// Splits a run of word characters into candidate tokens.
///
/// Returned tokens borrow from `run`; filtering happens in the tokenizer.
pub trait Segmenter {
    fn segment<'a>(&self, run: &'a str) -> Vec<&'a str>;
}

/// Dictionary based segmentation backed by jieba.
#[cfg(feature = "jieba")]
pub struct JiebaSegmenter {
    jieba: Jieba,
    hmm: bool,
}

#[cfg(feature = "jieba")]
impl Default for JiebaSegmenter {
    fn default() -> Self {
        JiebaSegmenter {
            jieba: Jieba::new(),
            hmm: true,
        }
    }
}

#[cfg(feature = "jieba")]
impl JiebaSegmenter {
    /// Adds a word to the segmentation dictionary so it is never split.
    pub fn with_word(mut self, word: &str) -> Self {
        self.jieba.add_word(word, None, None);
        self
    }

    /// Lets jieba guess words missing from its dictionary. On by default.
    pub fn with_hmm(mut self, value: bool) -> Self {
        self.hmm = value;
        self
    }
}

#[cfg(feature = "jieba")]
impl Segmenter for JiebaSegmenter {
    fn segment<'a>(&self, run: &'a str) -> Vec<&'a str> {
        self.jieba.cut(run, self.hmm)
    }
}

/// Dictionary free fallback: every CJK ideograph on its own, plus every pair
/// of adjacent ideographs.
#[derive(Clone, Copy, Debug, Default)]
pub struct BigramSegmenter;

pub(crate) fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

impl Segmenter for BigramSegmenter {
    fn segment<'a>(&self, run: &'a str) -> Vec<&'a str> {
        let mut tokens = Vec::new();
        let mut chars = run.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            if !is_cjk(c) {
                continue;
            }
            let end = start + c.len_utf8();
            tokens.push(&run[start..end]);

            if let Some(&(_, next)) = chars.peek() {
                if is_cjk(next) {
                    tokens.push(&run[start..end + next.len_utf8()]);
                }
            }
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bigrams_cover_adjacent_pairs() {
        let tokens = BigramSegmenter.segment("快乐时光");
        assert_eq!(
            tokens,
            vec!["快", "快乐", "乐", "乐时", "时", "时光", "光"]
        );
    }

    #[test]
    fn bigrams_skip_latin_and_break_at_it() {
        let tokens = BigramSegmenter.segment("中abc文");
        assert_eq!(tokens, vec!["中", "文"]);
    }

    #[test]
    fn bigrams_of_empty_run() {
        assert!(BigramSegmenter.segment("").is_empty());
    }

    #[cfg(feature = "jieba")]
    #[test]
    fn jieba_guesses_unknown_words_by_default() {
        assert!(JiebaSegmenter::default().hmm);
        assert!(!JiebaSegmenter::default().with_hmm(false).hmm);
    }

    #[cfg(feature = "jieba")]
    #[test]
    fn jieba_keeps_custom_words_whole() {
        let segmenter = JiebaSegmenter::default().with_word("悟空传");
        let tokens = segmenter.segment("我爱悟空传");
        assert!(tokens.contains(&"悟空传"));
        assert_eq!(tokens.concat(), "我爱悟空传");
    }
}
