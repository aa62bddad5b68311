/// Letters found in Burushaski romanization but not in plain English text
pub const SPECIAL_CHARS: [char; 10] = ['ć', 'ṣ', 'ṭ', 'ẓ', 'ś', 'ŋ', 'é', 'í', 'ó', 'ú'];

/// Characters trimmed from both ends of a token before a word lookup
pub const TOKEN_PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ';', ':'];

pub fn is_special_char(c: char) -> bool {
    SPECIAL_CHARS.contains(&c)
}

/// Expects lower-cased, NFC-composed text
pub fn has_special_chars(text: &str) -> bool {
    text.chars().any(is_special_char)
}

pub fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(&TOKEN_PUNCTUATION[..])
}
