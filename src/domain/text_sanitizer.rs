//! 文本清洗器
//!
//! 发送到上游之前，按白名单过滤字符：
//! - 单词字符 (`\w`，Unicode 语义)
//! - 空白字符 (`\s`)
//! - CJK 统一表意文字 (U+4E00..=U+9FFF)
//! - 常用中文标点

use once_cell::sync::Lazy;
use regex::Regex;

/// 允许保留的标点（中文全角标点、ASCII 双引号、破折号）
///
/// 单引号（撇号）不在白名单中，`it's` 会变成 `its`。
pub const ALLOWED_PUNCTUATION: &[char] = &[
    '，', '。', '！', '？', '；', '：', '"', '—', '–', '（', '）', '【', '】', '《', '》',
];

/// 白名单之外的字符
static DISALLOWED: Lazy<Regex> = Lazy::new(|| {
    let punctuation: String = ALLOWED_PUNCTUATION
        .iter()
        .map(|c| regex::escape(&c.to_string()))
        .collect();
    Regex::new(&format!(r"[^\w\s\x{{4E00}}-\x{{9FFF}}{}]", punctuation)).unwrap()
});

/// 清洗文本，删除所有白名单之外的字符
///
/// 只做过滤，不做归一化：空白、大小写、全半角都原样保留。
pub fn sanitize_text(text: &str) -> String {
    DISALLOWED.replace_all(text, "").into_owned()
}

/// 文本长度（Unicode 标量值个数）
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// 清洗后是否还有可朗读的内容
#[inline]
pub fn has_speakable_content(text: &str) -> bool {
    text.chars().any(|c| !c.is_whitespace())
}
