//! 流式文本行切分器
//!
//! 网络读取的分块边界与行边界无关：一行可能跨越多次读取，
//! 一个多字节 UTF-8 字符也可能被拆开。切分器按字节缓存未完成的尾部，
//! 只在遇到 `\n` 时解码整行，因此两种拆分都不会损坏输出。

/// 按行切分字节流
#[derive(Debug, Default)]
pub struct LineSplitter {
    /// 尚未遇到换行符的尾部字节
    carry: Vec<u8>,
}

impl LineSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一次读取的字节，返回其中所有完整的非空行
    pub fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        self.carry.extend_from_slice(bytes);

        let mut lines = Vec::new();
        let mut start = 0;
        while let Some(pos) = self.carry[start..].iter().position(|&b| b == b'\n') {
            let end = start + pos;
            if let Some(line) = decode_line(&self.carry[start..end]) {
                lines.push(line);
            }
            start = end + 1;
        }
        self.carry.drain(..start);

        lines
    }

    /// 流结束时取出剩余的最后一行（如果非空）
    pub fn finish(&mut self) -> Option<String> {
        let rest = std::mem::take(&mut self.carry);
        decode_line(&rest)
    }

    /// 当前缓存的字节数
    pub fn pending_bytes(&self) -> usize {
        self.carry.len()
    }
}

fn decode_line(bytes: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(bytes);
    let text = text.strip_suffix('\r').unwrap_or(&text);
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_lines_in_one_read() {
        let mut splitter = LineSplitter::new();
        let lines = splitter.push(b"first\nsecond\n");
        assert_eq!(lines, vec!["first", "second"]);
        assert_eq!(splitter.pending_bytes(), 0);
        assert_eq!(splitter.finish(), None);
    }

    #[test]
    fn test_line_split_across_reads_is_reassembled() {
        let mut splitter = LineSplitter::new();
        assert_eq!(splitter.push(b"hel"), Vec::<String>::new());
        assert_eq!(splitter.push(b"lo wor"), Vec::<String>::new());
        assert_eq!(splitter.push(b"ld\nnext"), vec!["hello world"]);
        assert_eq!(splitter.finish().as_deref(), Some("next"));
    }

    #[test]
    fn test_multibyte_char_split_across_reads() {
        let bytes = "天才\n".as_bytes();
        let mut splitter = LineSplitter::new();
        // 在 "天" 的第二个字节处切开
        assert!(splitter.push(&bytes[..1]).is_empty());
        assert_eq!(splitter.push(&bytes[1..]), vec!["天才"]);
    }

    #[test]
    fn test_empty_lines_and_crlf_are_skipped() {
        let mut splitter = LineSplitter::new();
        let lines = splitter.push(b"a\r\n\n\r\nb\n");
        assert_eq!(lines, vec!["a", "b"]);
    }
}
