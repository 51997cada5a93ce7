//! Offline, deterministic tone guide generation.

use crate::hash::hash_code;
use crate::record::{resolve_brand, BrandToneRecord, CopyVariant, COPY_COUNT};
use crate::templates::{AVOID_POOLS, COPY_TEMPLATES, SUGGEST_POOLS, TONE_TEMPLATES};

const VOCAB_LIMIT: usize = 10;

/// Builds a complete record for `brand` from the template bank.
pub fn generate_fallback(brand: &str) -> BrandToneRecord {
    let name = resolve_brand(brand);
    let seed = hash_code(name) as usize;

    let copies = (0..COPY_COUNT)
        .map(|i| copy_variant(name, i))
        .collect();

    BrandToneRecord {
        brand: name.to_string(),
        tone_description: tone_description(name, seed),
        copies,
        vocab_suggest: pick_vocab(&SUGGEST_POOLS, seed),
        vocab_avoid: pick_vocab(&AVOID_POOLS, seed),
    }
}

fn tone_description(name: &str, seed: usize) -> String {
    TONE_TEMPLATES[seed % TONE_TEMPLATES.len()].replace("{brand}", name)
}

fn copy_variant(name: &str, i: usize) -> CopyVariant {
    let template = &COPY_TEMPLATES[i % COPY_TEMPLATES.len()];
    let prefix = if name.is_empty() {
        String::new()
    } else {
        format!("{} · ", name)
    };

    CopyVariant {
        index: i + 1,
        professional: format!("{}{}", prefix, template.professional),
        cute: format!("{}{}", prefix, template.cute),
        aggressive: format!("{}{}", prefix, template.aggressive),
    }
}

/// `pools[seed % n]` followed by `pools[(seed + 1) % n]`, first occurrence
/// kept, capped at [`VOCAB_LIMIT`].
fn pick_vocab(pools: &[&[&str]], seed: usize) -> Vec<String> {
    let first = pools[seed % pools.len()];
    let second = pools[(seed % pools.len() + 1) % pools.len()];

    let mut words: Vec<String> = Vec::with_capacity(VOCAB_LIMIT);
    for word in first.iter().chain(second.iter()) {
        if words.len() == VOCAB_LIMIT {
            break;
        }
        if !words.iter().any(|w| w == word) {
            words.push(word.to_string());
        }
    }
    words
}
