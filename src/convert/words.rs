/// Split the body of a camelCase name into words.
///
/// - `[A-Z]?[a-z]+` is a word (`fooBar` → `foo`, `Bar`)
/// - an uppercase run is one acronym word; when a lowercase letter follows,
///   the run's last letter starts the next word (`HTTPOnly` → `HTTP`, `Only`)
/// - a digit run is a word of its own (`data2` → `data`, `2`)
pub fn split(body: &str) -> Vec<&str> {
    let bytes = body.as_bytes();
    let mut words = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        let b = bytes[i];
        if b.is_ascii_digit() {
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        } else if b.is_ascii_lowercase()
            || (b.is_ascii_uppercase() && bytes.get(i + 1).is_some_and(u8::is_ascii_lowercase))
        {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_lowercase() {
                i += 1;
            }
        } else if b.is_ascii_uppercase() {
            while i < bytes.len() && bytes[i].is_ascii_uppercase() {
                i += 1;
            }
            if i < bytes.len() && bytes[i].is_ascii_lowercase() {
                i -= 1;
            }
        } else {
            i += 1;
            continue;
        }
        words.push(&body[start..i]);
    }

    words
}
