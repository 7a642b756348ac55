//! camelCase → snake_case rewriting of variable names in C/C++-like text.
//!
//! A single left-to-right scan finds identifier runs, keeps the ones shaped
//! like camelCase variables and replaces them; every other byte of the input
//! is copied through unchanged.

mod classify;
mod scan;
mod words;

use crate::rules::RuleSet;
use classify::Shape;
use scan::Token;

/// How `name(` tokens are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// `name(` is a call and is left alone.
    #[default]
    Plain,
    /// Inside a constructor initializer list, where `name(` may be a member.
    /// Positions are judged relative to the start of the text, so the text
    /// should be a single line.
    InitializerList,
}

/// One name rewritten by a conversion pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    /// Byte offset of the name in the input.
    pub offset: usize,
    pub original: String,
    /// Words the name was split into, before any rule was applied.
    pub words: Vec<String>,
    pub replacement: String,
}

/// Result of converting one piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub text: String,
    pub renames: Vec<Rename>,
}

/// Converts camelCase variable names to snake_case according to a [`RuleSet`].
#[derive(Debug, Clone, Default)]
pub struct CaseConverter {
    rules: RuleSet,
}

impl CaseConverter {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Convert every eligible name in `text`. Never fails.
    pub fn convert(&self, text: &str) -> String {
        self.convert_text(text, Mode::Plain).text
    }

    /// Convert `text` and report each rename.
    pub fn convert_text(&self, text: &str, mode: Mode) -> Conversion {
        let mut out = String::with_capacity(text.len() + text.len() / 8);
        let mut renames = Vec::new();
        let mut copied = 0;

        for token in scan::tokens(text) {
            if !classify::is_candidate(text, &token, mode, self.rules.constant_prefix) {
                continue;
            }
            let rename = self.rename(&token);
            out.push_str(&text[copied..token.start]);
            out.push_str(&rename.replacement);
            copied = token.end;
            renames.push(rename);
        }
        out.push_str(&text[copied..]);

        Conversion { text: out, renames }
    }

    fn rename(&self, token: &Token<'_>) -> Rename {
        let shape = Shape::of(token.text);
        let words = words::split(shape.body);

        let mut snake: Vec<String> = words.iter().map(|w| w.to_ascii_lowercase()).collect();
        self.rules.apply(&mut snake);

        let mut replacement = String::with_capacity(token.text.len() + snake.len());
        if shape.leading {
            replacement.push('_');
        }
        replacement.push_str(&snake.join("_"));
        if shape.trailing {
            replacement.push('_');
        }

        Rename {
            offset: token.start,
            original: token.text.to_string(),
            words: words.into_iter().map(str::to_string).collect(),
            replacement,
        }
    }
}

/// Convert `text` with the built-in rules.
pub fn convert(text: &str) -> String {
    CaseConverter::default().convert(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_already_snake_case() {
        assert_eq!(convert("packet_buffer"), "packet_buffer");
    }

    #[test]
    fn test_convert_constant_prefix() {
        assert_eq!(convert("kDefaultOption"), "kDefaultOption");
    }

    #[test]
    fn test_convert_acronym_with_trailing_underscore() {
        assert_eq!(convert("isHTTPOnly_"), "is_http_only_");
    }

    #[test]
    fn test_convert_digits() {
        assert_eq!(convert("data2"), "data_2");
        assert_eq!(convert("vec3Length"), "vector_3_length");
    }

    #[test]
    fn test_convert_leading_underscore() {
        assert_eq!(convert("_lastError"), "_last_error");
        assert_eq!(convert("__reservedName"), "__reservedName");
    }

    #[test]
    fn test_convert_leaves_other_styles() {
        let text = "MAX_SIZE PacketBuffer CookieData_t snake_case x i fooBar_baz";
        assert_eq!(convert(text), text);
    }

    #[test]
    fn test_convert_hungarian_prefixes() {
        assert_eq!(convert("pNextNode"), "next_node");
        assert_eq!(convert("mItemCnt"), "item_count");
        assert_eq!(convert("bVisible"), "is_visible");
        assert_eq!(convert("itBegin"), "iter_begin");
        assert_eq!(convert("pageNum"), "page_number");
    }

    #[test]
    fn test_convert_idempotent() {
        let inputs = [
            "CookieData_t data2 = buildCookie(dataPieces, isHTTPOnly_, kDefaultOption);",
            "bool bHasAnonymousUsers, authenticationNeeded, useHTTPSChannel;",
            "for (auto itBegin = vec3List.begin(); pNext != nullptr; ++pageNum) {}",
            "_lastError = x86Arch + userID2 * mFoo_;",
        ];
        for input in inputs {
            let once = convert(input);
            assert_eq!(convert(&once), once, "input: {input}");
        }
    }

    #[test]
    fn test_convert_preserves_non_identifier_text() {
        let input = "  if (fooBar >= 0x1F && \"quotedText\" != 'c') {\n\t// someComment\r\n}";
        let output = convert(input);
        assert_eq!(
            output,
            "  if (foo_bar >= 0x1F && \"quoted_text\" != 'c') {\n\t// some_comment\r\n}"
        );
        let strip = |s: &str| s.chars().filter(|c| !c.is_alphanumeric() && *c != '_').collect::<String>();
        assert_eq!(strip(&output), strip(input));
    }

    #[test]
    fn test_convert_text_reports_renames() {
        let conversion = CaseConverter::default().convert_text("x = packetBuf;", Mode::Plain);
        assert_eq!(conversion.text, "x = packet_buffer;");
        assert_eq!(
            conversion.renames,
            vec![Rename {
                offset: 4,
                original: "packetBuf".into(),
                words: vec!["packet".into(), "Buf".into()],
                replacement: "packet_buffer".into(),
            }]
        );
    }

    #[test]
    fn test_convert_with_custom_rules() {
        let mut rules = RuleSet::default();
        rules.abbreviations.insert("cfg".into(), "config".into());
        rules.constant_prefix = 'c';
        let converter = CaseConverter::new(rules);
        assert_eq!(converter.convert("userCfg cMaxUsers"), "user_config cMaxUsers");
        assert_eq!(converter.convert("kMaxUsers"), "k_max_users");
    }

    #[test]
    fn test_convert_empty() {
        assert_eq!(convert(""), "");
    }
}
