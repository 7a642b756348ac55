use super::scan::Token;
use super::Mode;

/// A name split into its optional leading underscore, its camelCase body and
/// its optional trailing underscore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape<'a> {
    pub leading: bool,
    pub body: &'a str,
    pub trailing: bool,
}

impl<'a> Shape<'a> {
    pub fn of(name: &'a str) -> Self {
        let (leading, rest) = match name.strip_prefix('_') {
            Some(rest) => (true, rest),
            None => (false, name),
        };
        let (trailing, body) = match rest.strip_suffix('_') {
            Some(body) => (true, body),
            None => (false, rest),
        };
        Self {
            leading,
            body,
            trailing,
        }
    }
}

/// Length of the lowercase head when `body` is a lowercase run followed by one
/// or more `[A-Z][a-z]*` / `[0-9]+` pieces. `None` for any other shape.
pub fn camel_head(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    let head = bytes.iter().take_while(|b| b.is_ascii_lowercase()).count();
    if head == 0 || head == bytes.len() {
        return None;
    }

    let mut i = head;
    while i < bytes.len() {
        if bytes[i].is_ascii_uppercase() {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_lowercase() {
                i += 1;
            }
        } else if bytes[i].is_ascii_digit() {
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        } else {
            return None;
        }
    }
    Some(head)
}

/// Decide whether `token`, found in `text`, is a variable name to rewrite.
pub fn is_candidate(text: &str, token: &Token<'_>, mode: Mode, constant_prefix: char) -> bool {
    if !token.text.is_ascii() {
        return false;
    }

    let shape = Shape::of(token.text);
    let Some(head) = camel_head(shape.body) else {
        return false;
    };
    let named_constant = head == 1 && shape.body.starts_with(constant_prefix);

    // `name(` reads as a call; `member_(` is a member initializer.
    let called = text[token.end..].starts_with('(');
    if !called || shape.trailing {
        return !named_constant;
    }

    mode == Mode::InitializerList && !shape.leading && opens_member_init(&text[..token.start])
}

/// Whether the text before a `name(` token looks like the position of a
/// member in a constructor initializer list.
fn opens_member_init(before: &str) -> bool {
    // Last four characters, nearest first.
    let tail: Vec<char> = before.chars().rev().take(4).collect();
    match tail.as_slice() {
        [] => true,
        [a, b, ..] if a.is_whitespace() && b.is_whitespace() => true,
        // `: name(` at the very start of the line
        [ws, ':'] => ws.is_whitespace(),
        // `) : name(`
        [ws1, ':', ws2, ')', ..] => ws1.is_whitespace() && ws2.is_whitespace(),
        // `x), name(`
        [ws, ',', ')', c] => ws.is_whitespace() && !c.is_whitespace(),
        _ => false,
    }
}
