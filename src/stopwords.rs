//! Stopword tables shared by every tokenizer.
//!
//! Built lazily on first use and never mutated afterwards.

use std::collections::HashSet;
use std::sync::OnceLock;

const ENGLISH_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "because", "as", "what", "which", "this", "that",
    "these", "those", "then", "just", "so", "than", "such", "both", "through", "about", "for",
    "is", "of", "while", "during", "to", "from", "in", "on", "at", "by", "with", "without", "not",
    "no", "be", "am", "are", "was", "were", "being", "been", "have", "has", "had", "having", "do",
    "does", "did", "doing", "would", "should", "could", "can", "will", "shall", "may", "might",
    "must", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
    "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs",
];

// 繁体和简体都收录
const CHINESE_WORDS: &[&str] = &[
    "的", "了", "和", "是", "就", "都", "而", "及", "與", "与", "著", "着", "或", "一個", "一个",
    "沒有", "没有", "我們", "我们", "你們", "你们", "他們", "他们", "她們", "她们", "自己", "之",
    "在", "也", "因", "此", "但", "並", "并", "個", "个", "其", "已", "無", "无", "小", "大", "中",
    "上", "下", "不", "為", "为", "以", "於", "于", "對", "对", "她", "他", "你", "我", "們", "们",
    "可以", "這", "这", "那", "到", "由", "這個", "这个", "那個", "那个", "從", "从", "最", "所",
    "它",
];

pub fn english() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| ENGLISH_WORDS.iter().copied().collect())
}

pub fn chinese() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| CHINESE_WORDS.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_hold_common_words() {
        assert!(english().contains("the"));
        assert!(english().contains("on"));
        assert!(!english().contains("cat"));

        assert!(chinese().contains("的"));
        assert!(chinese().contains("我们"));
        assert!(chinese().contains("我們"));
        assert!(!chinese().contains("快乐"));
    }
}
