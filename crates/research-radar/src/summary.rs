//! Local text enrichment: short summaries and term-frequency keywords.
//!
//! Everything here is computed from the fetched text before a snapshot is
//! written; there are no model calls and no extra network traffic.

use std::collections::HashMap;

use crate::models::{Paper, Repository};

/// Small English stopword set, enough to keep keyword lists useful.
const STOPWORDS: &[&str] = &[
    "the", "and", "of", "in", "to", "a", "is", "for", "we", "that", "this", "with", "on", "as",
    "are", "by", "an", "be", "from", "which",
];

/// Sentences taken for the short summary.
const SUMMARY_SENTENCES: usize = 2;

/// Keywords attached to each paper.
const KEYWORD_COUNT: usize = 6;

/// Abstract truncation for the fallback summary.
const SUMMARY_FALLBACK_CHARS: usize = 400;

/// Description truncation for repository summaries.
const DESCRIPTION_CHARS: usize = 300;

/// Split text into trimmed sentences on `.?!` followed by whitespace.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev_terminal = false;

    for (idx, ch) in text.char_indices() {
        if prev_terminal && ch.is_whitespace() {
            let sentence = text[start..idx].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = idx;
        }
        prev_terminal = matches!(ch, '.' | '?' | '!');
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

/// First `max_sentences` sentences of `text`, joined with single spaces.
#[must_use]
pub fn summarize_text(text: &str, max_sentences: usize) -> String {
    split_sentences(text).into_iter().take(max_sentences).collect::<Vec<_>>().join(" ")
}

/// Top `top_k` keywords by term frequency.
///
/// Words are lowercased, split on non-alphanumerics, and kept when longer
/// than two characters and not a stopword. Ties break by first
/// appearance, keeping the output deterministic.
#[must_use]
pub fn extract_keywords(text: &str, top_k: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut position = 0usize;

    for word in lowered.split(|c: char| !c.is_alphanumeric()) {
        if word.chars().count() <= 2 || STOPWORDS.contains(&word) {
            continue;
        }
        let entry = counts.entry(word).or_insert((0, position));
        entry.0 += 1;
        position += 1;
    }

    let mut ranked: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|(_, (count_a, pos_a)), (_, (count_b, pos_b))| {
        count_b.cmp(count_a).then(pos_a.cmp(pos_b))
    });
    ranked.into_iter().take(top_k).map(|(word, _)| word.to_string()).collect()
}

/// Truncate to at most `max_chars` characters without splitting one.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Attach the summary fields to a fetched paper.
///
/// `summary_short` is the leading sentences of the abstract;
/// `agent_summary` falls back to a truncated abstract when the abstract
/// yields no sentences.
pub fn enrich_paper(paper: &mut Paper) {
    let short = summarize_text(&paper.r#abstract, SUMMARY_SENTENCES);

    paper.keywords = extract_keywords(&paper.r#abstract, KEYWORD_COUNT);
    paper.agent_summary = Some(if short.is_empty() {
        truncate_chars(&paper.r#abstract, SUMMARY_FALLBACK_CHARS).to_string()
    } else {
        short.clone()
    });
    paper.summary_short = if short.is_empty() { None } else { Some(short) };
}

/// Attach a description-derived summary to a repository.
pub fn enrich_repository(repo: &mut Repository) {
    let summary = repo
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map_or_else(
            || "No description available".to_string(),
            |d| truncate_chars(d, DESCRIPTION_CHARS).to_string(),
        );

    repo.agent_summary = Some(summary);
}
