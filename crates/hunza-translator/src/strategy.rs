use hunza_core::dictionary::{LexiconField, LexiconStore};
use hunza_core::error::StoreError;
use hunza_core::language::Token;
use hunza_types::{Language, Suggestion, TranslationMetadata};

pub const NGRAM_NOTE: &str =
    "N-gram phrase-based translation. Grammar may be approximate. Unknown tokens in [brackets].";
pub const WORD_BY_WORD_NOTE: &str =
    "Word-by-word translation. Grammar may not be perfect. Words in [brackets] not found.";

/// Translation found by one strategy, before the cascade stamps method and confidence
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub translation: String,
    pub metadata: TranslationMetadata,
}

fn target_field(source: Language) -> LexiconField {
    LexiconField::from(source.opposite())
}

fn unknown(token: &str) -> String {
    format!("[{}]", token)
}

/// Whole input against the phrase table
pub fn phrase_lookup<S: LexiconStore + ?Sized>(
    store: &S,
    text: &str,
    source: Language,
) -> Result<Option<Match>, StoreError> {
    let Some(phrase) = store.find_phrase_exact(source.into(), text)? else {
        return Ok(None);
    };

    Ok(Some(Match {
        translation: target_field(source).of_phrase(&phrase).to_string(),
        metadata: TranslationMetadata {
            urdu: phrase.urdu,
            context: phrase.context,
            formality: phrase.formality,
            audio: phrase.audio_file,
            ..Default::default()
        },
    }))
}

/// Whole input against the word table
pub fn dictionary_lookup<S: LexiconStore + ?Sized>(
    store: &S,
    text: &str,
    source: Language,
) -> Result<Option<Match>, StoreError> {
    let Some(word) = store.find_word_exact(source.into(), text)? else {
        return Ok(None);
    };

    Ok(Some(Match {
        translation: target_field(source).of_word(&word).to_string(),
        metadata: TranslationMetadata {
            urdu: word.urdu,
            pronunciation: word.pronunciation_ipa,
            word_class: word.word_class,
            example: word.example_sentence,
            example_translation: word.example_translation,
            audio: word.audio_file,
            notes: word.notes,
            ..Default::default()
        },
    }))
}

/// Greedy longest-match segmentation over phrases, falling back to single words.
///
/// At each cursor position spans are tried from `max_ngram` (capped at the
/// token count) down to 1. Spans longer than one token only match phrases;
/// a single token tries the phrase table and then the word table. Tokens
/// nothing covers are emitted in brackets and skipped.
pub fn ngram_translate<S: LexiconStore + ?Sized>(
    store: &S,
    tokens: &[Token],
    source: Language,
    max_ngram: usize,
) -> Result<Option<Match>, StoreError> {
    let n_tokens = tokens.len();
    if n_tokens == 0 {
        return Ok(None);
    }

    let field = LexiconField::from(source);
    let target = target_field(source);
    let max_n = max_ngram.clamp(1, n_tokens);

    let mut pieces = Vec::with_capacity(n_tokens);
    let mut words_found = 0usize;
    let mut i = 0usize;

    while i < n_tokens {
        let mut matched = false;

        for n in (1..=max_n.min(n_tokens - i)).rev() {
            let chunk = tokens[i..i + n]
                .iter()
                .map(|t| t.surface.as_str())
                .collect::<Vec<_>>()
                .join(" ");

            if let Some(phrase) = store.find_phrase_exact(field, &chunk)? {
                pieces.push(target.of_phrase(&phrase).to_string());
                words_found += n;
                i += n;
                matched = true;
                break;
            }

            if n == 1 {
                if let Some(word) = store.find_word_exact(field, &chunk)? {
                    pieces.push(target.of_word(&word).to_string());
                    words_found += 1;
                    i += 1;
                    matched = true;
                    break;
                }
            }
        }

        if !matched {
            pieces.push(unknown(&tokens[i].surface));
            i += 1;
        }
    }

    if words_found == 0 {
        return Ok(None);
    }

    Ok(Some(Match {
        translation: pieces.join(" "),
        metadata: TranslationMetadata {
            words_found: Some(words_found),
            total_words: Some(n_tokens),
            note: Some(NGRAM_NOTE.to_string()),
            ..Default::default()
        },
    }))
}

/// Independent dictionary lookup per punctuation-stripped token.
///
/// Only applies to multi-token input, and only succeeds when at least half of
/// the tokens were found (exactly half counts).
pub fn word_by_word_translate<S: LexiconStore + ?Sized>(
    store: &S,
    tokens: &[Token],
    source: Language,
) -> Result<Option<Match>, StoreError> {
    let total = tokens.len();
    if total <= 1 {
        return Ok(None);
    }

    let mut pieces = Vec::with_capacity(total);
    let mut found = 0usize;

    for token in tokens {
        match dictionary_lookup(store, &token.normalized, source)? {
            Some(hit) => {
                pieces.push(hit.translation);
                found += 1;
            }
            None => pieces.push(unknown(&token.normalized)),
        }
    }

    // found >= total / 2 without leaving integers
    if found * 2 < total {
        tracing::debug!("Word-by-word found only {}/{} tokens", found, total);
        return Ok(None);
    }

    Ok(Some(Match {
        translation: pieces.join(" "),
        metadata: TranslationMetadata {
            words_found: Some(found),
            total_words: Some(total),
            note: Some(WORD_BY_WORD_NOTE.to_string()),
            ..Default::default()
        },
    }))
}

/// Words whose source-side form contains the text
pub fn fuzzy_search<S: LexiconStore + ?Sized>(
    store: &S,
    text: &str,
    source: Language,
    limit: usize,
) -> Result<Vec<Suggestion>, StoreError> {
    Ok(store
        .find_word_contains(source.into(), text, limit)?
        .into_iter()
        .map(|word| Suggestion {
            burushaski: word.burushaski,
            english: word.english,
            pronunciation: word.pronunciation_ipa,
        })
        .collect())
}
