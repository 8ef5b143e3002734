/// Remove markup tags, keeping the text between them.
///
/// A tag runs from `<` to the next `>` outside a quoted attribute value. A `<`
/// followed by whitespace is plain text. An unterminated tag drops the rest of
/// the input. Entities are left as-is.
pub fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut chars = html.chars().peekable();
    let mut in_tag = false;
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if !in_tag {
            match c {
                '<' if !chars.peek().is_some_and(|next| next.is_whitespace()) => in_tag = true,
                _ => text.push(c),
            }
            continue;
        }

        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => in_tag = false,
            (None, _) => {}
        }
    }

    text
}
