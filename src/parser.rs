//! Recovers a [`ParsedGuide`] from free-form generated text.
//!
//! Each section is located independently. A section that cannot be found is
//! replaced by its default, so parsing never fails.

use crate::prompt::{
    AVOID_LABEL, BOLD_LABEL, COPY_LABEL, COPY_SECTION_LABEL, CUTE_LABEL, PROFESSIONAL_LABEL,
    SUGGEST_LABEL, TONE_LABEL,
};
use crate::record::{CopyVariant, ParsedGuide, COPY_COUNT};
use crate::templates::{to_owned_words, DEFAULT_VOCAB_AVOID, DEFAULT_VOCAB_SUGGEST, PLACEHOLDER_COPY};
use regex::{escape, Captures, Regex};
use std::sync::OnceLock;
use tracing::debug;

/// Most vocabulary words kept from a generated list.
pub const MAX_VOCAB_WORDS: usize = 12;

fn heading(label: &str) -> String {
    escape(label.trim_end_matches(':'))
}

fn tone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"(?is){}\s*\n(.*?){}",
            escape(TONE_LABEL),
            escape(COPY_SECTION_LABEL)
        ))
        .expect("tone pattern is a valid regex")
    })
}

/// Header of one copy block, up to where the Bold text starts.
fn copy_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"(?is){} (\d+):\s*\n\s*{}\s*(.*?)\s*\n\s*{}\s*(.*?)\s*\n\s*{}\s*",
            escape(COPY_LABEL),
            escape(PROFESSIONAL_LABEL),
            escape(CUTE_LABEL),
            escape(BOLD_LABEL)
        ))
        .expect("copy block pattern is a valid regex")
    })
}

/// Where the Bold text of a copy block stops (end of text otherwise).
fn copy_end_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"(?i)\n\n{} \d+:|{}",
            escape(COPY_LABEL),
            heading(SUGGEST_LABEL)
        ))
        .expect("copy end pattern is a valid regex")
    })
}

fn suggest_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"(?is){}\s*\n(.*?)(?:{}|$)",
            escape(SUGGEST_LABEL),
            heading(AVOID_LABEL)
        ))
        .expect("suggest pattern is a valid regex")
    })
}

fn avoid_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"(?is){}\s*\n(.*)", escape(AVOID_LABEL)))
            .expect("avoid pattern is a valid regex")
    })
}

pub fn parse_text_response(text: &str) -> ParsedGuide {
    let tone_description = tone_re()
        .captures(text)
        .map(|caps| group(&caps, 1).trim().to_string())
        .unwrap_or_default();

    let mut copies = extract_copies(text);
    while copies.len() < COPY_COUNT {
        copies.push(CopyVariant {
            index: copies.len() + 1,
            professional: PLACEHOLDER_COPY.professional.to_string(),
            cute: PLACEHOLDER_COPY.cute.to_string(),
            aggressive: PLACEHOLDER_COPY.aggressive.to_string(),
        });
    }

    let vocab_suggest = vocab_list(suggest_re(), text, &DEFAULT_VOCAB_SUGGEST);
    let vocab_avoid = vocab_list(avoid_re(), text, &DEFAULT_VOCAB_AVOID);

    debug!(
        tone_len = tone_description.len(),
        copies = copies.len(),
        vocab_suggest = vocab_suggest.len(),
        vocab_avoid = vocab_avoid.len(),
        "parsed text response"
    );

    ParsedGuide {
        tone_description,
        copies,
        vocab_suggest,
        vocab_avoid,
    }
}

/// Collects at most [`COPY_COUNT`] blocks in order of appearance. The number
/// written after "Copy" is ignored; indices are assigned sequentially.
fn extract_copies(text: &str) -> Vec<CopyVariant> {
    let mut copies = Vec::with_capacity(COPY_COUNT);
    let mut pos = 0;

    while copies.len() < COPY_COUNT {
        let Some(caps) = copy_block_re().captures_at(text, pos) else {
            break;
        };
        let Some(header) = caps.get(0) else {
            break;
        };
        let bold_start = header.end();
        let bold_end = copy_end_re()
            .find_at(text, bold_start)
            .map_or(text.len(), |m| m.start());

        copies.push(CopyVariant {
            index: copies.len() + 1,
            professional: group(&caps, 2).trim().to_string(),
            cute: group(&caps, 3).trim().to_string(),
            aggressive: text[bold_start..bold_end].trim().to_string(),
        });
        pos = bold_end;
    }

    copies
}

/// Words under a vocabulary heading, or `defaults` when the heading is
/// missing or lists nothing.
fn vocab_list(re: &Regex, text: &str, defaults: &[&str]) -> Vec<String> {
    re.captures(text)
        .map(|caps| split_words(group(&caps, 1)))
        .filter(|words| !words.is_empty())
        .unwrap_or_else(|| to_owned_words(defaults))
}

fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

/// Comma-separated list, each word trimmed, blanks dropped.
fn split_words(block: &str) -> Vec<String> {
    block
        .trim()
        .split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .take(MAX_VOCAB_WORDS)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::build_prompt;
    use pretty_assertions::assert_eq;

    fn well_formed() -> String {
        let mut text = String::from(
            "TONE DESCRIPTION:\nWarm and direct.\nNever shouty.\n\nCOPY EXAMPLES (10 sets, each with 3 tones):\n\n",
        );
        for n in 1..=10 {
            text.push_str(&format!(
                "Copy {n}:\nProfessional: Pro line {n}.\nCute: Cute line {n}~\nBold: Bold line {n}!\n\n"
            ));
        }
        text.push_str("SUGGESTED VOCABULARY:\ncrafted, honest, bright\n\nAVOID VOCABULARY:\ncheap, hype\n");
        text
    }

    #[test]
    fn test_parses_well_formed_document() {
        let parsed = parse_text_response(&well_formed());

        assert_eq!(parsed.tone_description, "Warm and direct.\nNever shouty.");
        assert_eq!(parsed.copies.len(), 10);
        for (i, copy) in parsed.copies.iter().enumerate() {
            let n = i + 1;
            assert_eq!(copy.index, n);
            assert_eq!(copy.professional, format!("Pro line {n}."));
            assert_eq!(copy.cute, format!("Cute line {n}~"));
            assert_eq!(copy.aggressive, format!("Bold line {n}!"));
        }
        assert_eq!(parsed.vocab_suggest, vec!["crafted", "honest", "bright"]);
        assert_eq!(parsed.vocab_avoid, vec!["cheap", "hype"]);
    }

    #[test]
    fn test_text_without_markers_gets_defaults() {
        let parsed = parse_text_response("Sorry, I cannot help with that.");

        assert_eq!(parsed.tone_description, "");
        assert_eq!(parsed.copies.len(), 10);
        for (i, copy) in parsed.copies.iter().enumerate() {
            assert_eq!(copy.index, i + 1);
            assert_eq!(copy.professional, "Quality content for your brand.");
            assert_eq!(copy.cute, "Something fun and engaging~");
            assert_eq!(copy.aggressive, "Bold statement. Direct action.");
        }
        assert_eq!(parsed.vocab_suggest, to_owned_words(&DEFAULT_VOCAB_SUGGEST));
        assert_eq!(parsed.vocab_avoid, to_owned_words(&DEFAULT_VOCAB_AVOID));
    }

    #[test]
    fn test_partial_copies_are_padded() {
        let text = "Copy 1:\nProfessional: A.\nCute: B~\nBold: C!\n\n\
                    Copy 2:\nProfessional: D.\nCute: E~\nBold: F!\n\n\
                    SUGGESTED VOCABULARY:\nx, y";
        let parsed = parse_text_response(text);

        assert_eq!(parsed.copies[0].aggressive, "C!");
        assert_eq!(parsed.copies[1].professional, "D.");
        assert_eq!(parsed.copies[1].aggressive, "F!");
        assert_eq!(parsed.copies[2].index, 3);
        assert_eq!(parsed.copies[2].professional, "Quality content for your brand.");
        assert_eq!(parsed.copies[9].index, 10);
        assert_eq!(parsed.vocab_suggest, vec!["x", "y"]);
        assert_eq!(parsed.vocab_avoid, to_owned_words(&DEFAULT_VOCAB_AVOID));
    }

    #[test]
    fn test_stops_after_ten_copies() {
        let mut text = String::new();
        for n in 1..=12 {
            text.push_str(&format!("Copy {n}:\nProfessional: P{n}\nCute: C{n}\nBold: B{n}\n\n"));
        }
        let parsed = parse_text_response(&text);
        assert_eq!(parsed.copies.len(), 10);
        assert_eq!(parsed.copies[9].professional, "P10");
        assert_eq!(parsed.copies[9].aggressive, "B10");
    }

    #[test]
    fn test_copy_numbers_are_renumbered() {
        let text = "Copy 7:\nProfessional: P\nCute: C\nBold: B";
        let parsed = parse_text_response(text);
        assert_eq!(parsed.copies[0].index, 1);
        assert_eq!(parsed.copies[0].aggressive, "B");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let text = "tone description:\nCalm.\ncopy examples\n\
                    copy 1:\nprofessional: p\ncute: c\nbold: b\n\n\
                    suggested vocabulary:\none\navoid vocabulary:\ntwo";
        let parsed = parse_text_response(text);
        assert_eq!(parsed.tone_description, "Calm.");
        assert_eq!(parsed.copies[0].professional, "p");
        assert_eq!(parsed.copies[0].aggressive, "b");
        assert_eq!(parsed.vocab_suggest, vec!["one"]);
        assert_eq!(parsed.vocab_avoid, vec!["two"]);
    }

    #[test]
    fn test_bold_line_stops_at_vocabulary_marker() {
        let text = "Copy 1:\nProfessional: P\nCute: C\nBold: Loud.\nSUGGESTED VOCABULARY:\na, b";
        let parsed = parse_text_response(text);
        assert_eq!(parsed.copies[0].aggressive, "Loud.");
    }

    #[test]
    fn test_empty_vocabulary_blocks_get_defaults() {
        let parsed = parse_text_response("SUGGESTED VOCABULARY:\n\nAVOID VOCABULARY:\n");
        assert_eq!(parsed.vocab_suggest, to_owned_words(&DEFAULT_VOCAB_SUGGEST));
        assert_eq!(parsed.vocab_avoid, to_owned_words(&DEFAULT_VOCAB_AVOID));

        let parsed = parse_text_response("SUGGESTED VOCABULARY:\n , ,\nAVOID VOCABULARY:\nloud");
        assert_eq!(parsed.vocab_suggest, to_owned_words(&DEFAULT_VOCAB_SUGGEST));
        assert_eq!(parsed.vocab_avoid, vec!["loud"]);
    }

    #[test]
    fn test_split_words_trims_and_drops_blanks() {
        assert_eq!(split_words("quality, reliable , trust"), vec!["quality", "reliable", "trust"]);
        assert_eq!(split_words(" a,, ,b, "), vec!["a", "b"]);
    }

    #[test]
    fn test_vocabulary_is_capped() {
        let words: Vec<String> = (1..=15).map(|n| format!("w{n}")).collect();
        let text = format!("SUGGESTED VOCABULARY:\n{}", words.join(", "));
        let parsed = parse_text_response(&text);
        assert_eq!(parsed.vocab_suggest.len(), MAX_VOCAB_WORDS);
        assert_eq!(parsed.vocab_suggest[11], "w12");
    }

    #[test]
    fn test_prompt_template_is_parseable() {
        // The prompt itself follows the response format.
        let parsed = parse_text_response(&build_prompt("Acme"));
        assert_eq!(
            parsed.tone_description,
            "[Write 2-3 sentences describing the brand's tone and voice]"
        );
        assert!(parsed.copies.iter().all(|c| c.professional == "[1-2 sentences]"));
        assert_eq!(parsed.vocab_suggest, vec!["[List 10-12 words separated by commas]"]);
    }
}
