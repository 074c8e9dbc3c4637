//! 字数统计
//!
//! 中日韩文字每字计一；其余连续的字母数字计为一个词，标点不计

/// 统计文本字数
pub fn count_words(text: &str) -> u32 {
    let mut count: u32 = 0;
    let mut in_word = false;

    for ch in text.chars() {
        if is_cjk(ch) {
            count += 1;
            in_word = false;
        } else if ch.is_alphanumeric() {
            if !in_word {
                count += 1;
                in_word = true;
            }
        } else if !(ch == '\'' || ch == '-') || !in_word {
            // 撇号和连字符留在词内（don't, well-known）
            in_word = false;
        }
    }

    count
}

#[inline]
fn is_cjk(ch: char) -> bool {
    matches!(ch as u32,
        0x4E00..=0x9FFF
        | 0x3400..=0x4DBF
        | 0x20000..=0x2A6DF
        | 0xF900..=0xFAFF
        | 0x3040..=0x30FF
        | 0xAC00..=0xD7AF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chinese_counts_characters() {
        assert_eq!(count_words("斗之力，三段！"), 5);
    }

    #[test]
    fn test_latin_counts_words() {
        assert_eq!(count_words("Hello, brave new world"), 4);
        assert_eq!(count_words("don't stop the well-known tune"), 5);
    }

    #[test]
    fn test_mixed_text() {
        assert_eq!(count_words("第001章 AI 觉醒"), 6);
    }

    #[test]
    fn test_punctuation_is_ignored() {
        assert_eq!(count_words("a,b"), 2);
        assert_eq!(count_words("!!!"), 0);
        assert_eq!(count_words("……，。"), 0);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("  \n\t "), 0);
    }
}
