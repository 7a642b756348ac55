/// A maximal run of identifier characters found in the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    pub text: &'a str,
}

/// Characters that extend an identifier run. Non-ASCII alphanumerics are
/// included so they never split a name in two.
pub fn is_word_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Iterate over the identifier-like runs of `text`, left to right.
/// Runs starting with a digit are numeric literals and are skipped.
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens { text, pos: 0 }
}

pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let full = self.text;
        loop {
            let start = self.pos + full[self.pos..].find(is_word_char)?;
            let end = full[start..]
                .find(|c: char| !is_word_char(c))
                .map_or(full.len(), |len| start + len);
            self.pos = end;

            let text = &full[start..end];
            if text.starts_with(|c: char| c.is_ascii_digit()) {
                continue;
            }
            return Some(Token { start, end, text });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        tokens(input).map(|t| t.text).collect()
    }

    #[test]
    fn test_tokens_split_on_punctuation() {
        assert_eq!(
            texts("net::PacketBuffer *packetBuf = new net::PacketBuffer(memSize_);"),
            vec!["net", "PacketBuffer", "packetBuf", "new", "net", "PacketBuffer", "memSize_"]
        );
    }

    #[test]
    fn test_tokens_offsets() {
        let input = "  fooBar+x";
        let found: Vec<_> = tokens(input).collect();
        assert_eq!(found.len(), 2);
        assert_eq!((found[0].start, found[0].end), (2, 8));
        assert_eq!(&input[found[1].start..found[1].end], "x");
    }

    #[test]
    fn test_tokens_skip_numeric_literals() {
        assert_eq!(texts("x = 42u + 0x1Fa * 3.5e10;"), vec!["x"]);
    }

    #[test]
    fn test_tokens_keep_non_ascii_in_one_run() {
        assert_eq!(texts("größeWert=1"), vec!["größeWert"]);
    }

    #[test]
    fn test_tokens_empty_and_symbols_only() {
        assert!(texts("").is_empty());
        assert!(texts("(){};, \n\t").is_empty());
    }
}
