use super::EotConfig;

/// Decide whether a segment's text reads as a complete utterance.
///
/// An empty (or whitespace-only) segment is treated as a turn boundary
/// outright. Otherwise terminal punctuation is required, and each of
/// three incompleteness cues vetoes independently: trailing off on an
/// ellipsis, ending on an unfinished discourse connective, or reading
/// as a question that never got its question mark.
pub fn determine_end_of_turn(text: &str, config: &EotConfig) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return true;
    }

    let terminal = ends_with_terminal_punctuation(trimmed);
    let ellipsis = ends_with_ellipsis(trimmed);
    let continuation = ends_with_continuation_phrase(trimmed, &config.continuation_phrases);
    let unmarked_question = is_unmarked_question(trimmed, &config.question_starters);

    terminal && !ellipsis && !continuation && !unmarked_question
}

/// Text ends with `.`, `!`, or `?`, looking through trailing quotes and
/// whitespace.
fn ends_with_terminal_punctuation(text: &str) -> bool {
    text.trim_end_matches(|c: char| {
        c.is_whitespace() || matches!(c, '"' | '\'' | '\u{201d}' | '\u{2019}')
    })
    .ends_with(['.', '!', '?'])
}

/// Three consecutive periods or the single ellipsis glyph.
fn ends_with_ellipsis(text: &str) -> bool {
    text.ends_with("...") || text.ends_with('\u{2026}')
}

/// Text ends on a discourse marker, optionally followed by a comma
/// and/or whitespace. The marker must sit on a word boundary so that
/// e.g. "doctor" does not match "or".
fn ends_with_continuation_phrase(text: &str, phrases: &[String]) -> bool {
    let lower = text.to_lowercase();
    let tail = lower.trim_end();
    let tail = tail.strip_suffix(',').unwrap_or(tail).trim_end();

    phrases.iter().any(|phrase| {
        tail.ends_with(phrase.as_str())
            && tail[..tail.len() - phrase.len()]
                .chars()
                .next_back()
                .is_none_or(|c| !c.is_alphanumeric())
    })
}

/// Text opens with a question-starter word but contains no `?` anywhere.
fn is_unmarked_question(text: &str, starters: &[String]) -> bool {
    if text.contains('?') {
        return false;
    }

    let leading_word: String = text
        .chars()
        .take_while(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    !leading_word.is_empty() && starters.iter().any(|s| *s == leading_word)
}
