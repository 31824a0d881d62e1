//! Case folding for mixed English/Turkish result sheets
//!
//! `str::to_lowercase` maps `I` to `i`, but Turkish capitals pair dotless
//! `I` with `ı` and dotted `İ` with `i`. Sheets printed in capitals
//! (`SIRTÜSTÜ`, `KIZLAR`) only match the lowercase vocabulary under the
//! Turkish mapping, while English capitals (`GIRLS`) need the default one.
//! Matching therefore tries both.

/// Lowercase with the Turkish dotted/dotless I mapping
pub fn turkish_lowercase(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'I' => folded.push('ı'),
            'İ' => folded.push('i'),
            other => folded.extend(other.to_lowercase()),
        }
    }
    folded
}

/// Both lowercase forms of a text: default and Turkish
#[derive(Debug, Clone)]
pub struct FoldedText {
    lowered: String,
    turkish: String,
}

impl FoldedText {
    pub fn new(text: &str) -> Self {
        Self {
            lowered: text.to_lowercase(),
            turkish: turkish_lowercase(text),
        }
    }

    /// Case-insensitive substring test; `needle` must already be lowercase
    pub fn contains(&self, needle: &str) -> bool {
        self.lowered.contains(needle) || self.turkish.contains(needle)
    }

    /// Case-insensitive equality; `other` must already be lowercase
    pub fn equals(&self, other: &str) -> bool {
        self.lowered == other || self.turkish == other
    }
}

/// Case-insensitive substring test across both foldings
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    FoldedText::new(haystack).contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turkish_lowercase() {
        assert_eq!(turkish_lowercase("SIRTÜSTÜ"), "sırtüstü");
        assert_eq!(turkish_lowercase("KARIŞIK"), "karışık");
        assert_eq!(turkish_lowercase("İZMİR"), "izmir");
        assert_eq!(turkish_lowercase("Kelebek"), "kelebek");
    }

    #[test]
    fn test_contains_folded_tries_both_mappings() {
        assert!(contains_folded("Yarış 2 KIZLAR, 50m Serbest", "Kızlar"));
        assert!(contains_folded("RACE 2 GIRLS, 50m FREESTYLE", "Girls"));
        assert!(contains_folded("200m IM", "im"));
        assert!(!contains_folded("Race 2 Boys", "Girls"));
    }

    #[test]
    fn test_equals() {
        assert!(FoldedText::new("ERKEKLER").equals("erkekler"));
        assert!(FoldedText::new("KIZ").equals("kız"));
        assert!(FoldedText::new("GIRL").equals("girl"));
        assert!(!FoldedText::new("Mixed").equals("girls"));
    }
}
