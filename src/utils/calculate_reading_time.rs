use crate::types::ReadingTime;

pub const WORDS_PER_MINUTE: usize = 200;

// Same set as a JS `\s`: Unicode White_Space without NEL, plus the BOM
fn is_word_break(c: char) -> bool{
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

pub fn count_words(text: &str) -> usize{
    text.split(is_word_break).filter(|word| !word.is_empty()).count()
}

pub fn calculate_reading_time(text: &str) -> ReadingTime{
    let word_count = count_words(text);

    // Round up, an empty card still shows one minute
    let minutes = (word_count + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE;

    ReadingTime::from_minutes(u32::try_from(minutes).unwrap_or(u32::MAX))
}
