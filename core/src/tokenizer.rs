/// Unicode whitespace plus the ASCII separators U+001C..=U+001F.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Split text into terms on whitespace. No normalization is applied, so
/// `Cat` and `cat` are distinct terms.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(is_separator).filter(|t| !t.is_empty()).collect()
}
