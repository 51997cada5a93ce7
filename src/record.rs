use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of copy variants every record carries.
pub const COPY_COUNT: usize = 10;

/// Brand name used when the caller supplies an empty one.
pub const DEFAULT_BRAND: &str = "My Brand";

/// One message rendered in the three style registers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyVariant {
    /// 1-based position in the record.
    pub index: usize,
    pub professional: String,
    pub cute: String,
    /// Rendered under the "Bold" label.
    pub aggressive: String,
}

/// Fields recovered from a generated response, before the brand is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGuide {
    pub tone_description: String,
    pub copies: Vec<CopyVariant>,
    pub vocab_suggest: Vec<String>,
    pub vocab_avoid: Vec<String>,
}

/// The tone guide for one brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandToneRecord {
    pub brand: String,
    pub tone_description: String,
    pub copies: Vec<CopyVariant>,
    pub vocab_suggest: Vec<String>,
    pub vocab_avoid: Vec<String>,
}

impl BrandToneRecord {
    pub fn from_parsed(brand: impl Into<String>, parsed: ParsedGuide) -> Self {
        Self {
            brand: brand.into(),
            tone_description: parsed.tone_description,
            copies: parsed.copies,
            vocab_suggest: parsed.vocab_suggest,
            vocab_avoid: parsed.vocab_avoid,
        }
    }
}

/// A record as stored in the saved-brands blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecord {
    #[serde(flatten)]
    pub record: BrandToneRecord,
    pub saved_at: DateTime<Utc>,
}

impl SavedRecord {
    pub fn new(record: BrandToneRecord) -> Self {
        Self {
            record,
            saved_at: Utc::now(),
        }
    }
}

/// Trims `brand`, substituting [`DEFAULT_BRAND`] when nothing is left.
pub fn resolve_brand(brand: &str) -> &str {
    match brand.trim() {
        "" => DEFAULT_BRAND,
        name => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> BrandToneRecord {
        BrandToneRecord {
            brand: "Acme".to_string(),
            tone_description: "Direct.".to_string(),
            copies: vec![CopyVariant {
                index: 1,
                professional: "p".to_string(),
                cute: "c".to_string(),
                aggressive: "b".to_string(),
            }],
            vocab_suggest: vec!["solid".to_string()],
            vocab_avoid: vec!["cheap".to_string()],
        }
    }

    #[test]
    fn test_resolve_brand() {
        assert_eq!(resolve_brand("  Acme "), "Acme");
        assert_eq!(resolve_brand(""), DEFAULT_BRAND);
        assert_eq!(resolve_brand("   "), DEFAULT_BRAND);
    }

    #[test]
    fn test_record_uses_camel_case_fields() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["toneDescription"], "Direct.");
        assert_eq!(value["vocabSuggest"], json!(["solid"]));
        assert_eq!(value["copies"][0]["aggressive"], "b");
    }

    #[test]
    fn test_saved_record_flattens_record() {
        let saved = SavedRecord::new(sample());
        let value = serde_json::to_value(&saved).unwrap();
        assert_eq!(value["brand"], "Acme");
        assert!(value["savedAt"].is_string());

        let back: SavedRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back.record, sample());
    }
}
