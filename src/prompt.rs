//! Instruction text sent to the generation service.
//!
//! The parser anchors on the same labels, so both sides read them from here.

use crate::record::{resolve_brand, COPY_COUNT};

pub const TONE_LABEL: &str = "TONE DESCRIPTION:";
pub const COPY_SECTION_LABEL: &str = "COPY EXAMPLES";
pub const COPY_LABEL: &str = "Copy";
pub const PROFESSIONAL_LABEL: &str = "Professional:";
pub const CUTE_LABEL: &str = "Cute:";
pub const BOLD_LABEL: &str = "Bold:";
pub const SUGGEST_LABEL: &str = "SUGGESTED VOCABULARY:";
pub const AVOID_LABEL: &str = "AVOID VOCABULARY:";

const SENTENCES: &str = "[1-2 sentences]";

pub fn build_prompt(brand: &str) -> String {
    let name = resolve_brand(brand);
    let mut prompt = format!(
        "You are a brand copywriter analyzing the brand \"{name}\".\n\n\
         Generate a brand tone guide with this EXACT format:\n\n\
         {TONE_LABEL}\n\
         [Write 2-3 sentences describing the brand's tone and voice]\n\n\
         {COPY_SECTION_LABEL} ({COPY_COUNT} sets, each with 3 tones):\n\n"
    );

    for n in 1..=COPY_COUNT {
        prompt.push_str(&format!(
            "{COPY_LABEL} {n}:\n\
             {PROFESSIONAL_LABEL} {SENTENCES}\n\
             {CUTE_LABEL} {SENTENCES}\n\
             {BOLD_LABEL} {SENTENCES}\n\n"
        ));
    }

    prompt.push_str(&format!(
        "{SUGGEST_LABEL}\n\
         [List 10-12 words separated by commas]\n\n\
         {AVOID_LABEL}\n\
         [List 10-12 words separated by commas]\n\n\
         Follow this format exactly. All content in English."
    ));
    prompt
}
