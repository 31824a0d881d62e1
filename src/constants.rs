//! Application constants for swim result extraction
//!
//! This module contains the vocabulary tables the line classifier and the
//! category normalizer are driven by: race markers, gender terms, stroke
//! keywords and the denylist of non-data lines found in result sheets.

// =============================================================================
// Race Header Vocabulary
// =============================================================================

/// Tokens that open a race header line ("Race 4 Girls, ..." / "Yarış 4 Kızlar, ...")
pub const RACE_MARKERS: &[&str] = &["Race", "Yarış"];

/// Canonical race marker used when composing category keys
pub const CANONICAL_RACE_MARKER: &str = "Race";

/// Race number used when a title carries no `<marker> <digits>` token
pub const DEFAULT_RACE_NUMBER: &str = "1";

/// Age suffix printed after the age in headers and category keys
pub const AGE_SUFFIX: &str = "yaş";

/// Substrings marking a relay event; relay headers never open a race context
pub const RELAY_MARKERS: &[&str] = &["4 x", "4x"];

// =============================================================================
// Gender Terms
// =============================================================================

/// Gender terms searched in header lines, formal spellings first.
///
/// The informal forms are prefixes of the formal ones ("Kız" / "Kızlar"), so
/// the order of this table is load-bearing.
pub mod gender_terms {
    /// Formal spellings for the girls' field
    pub const GIRLS_FORMAL: &[&str] = &["Girls", "Kızlar"];

    /// Formal spellings for the boys' field
    pub const BOYS_FORMAL: &[&str] = &["Boys", "Erkekler"];

    /// Informal spellings for the girls' field, normalized to the formal form
    pub const GIRLS_INFORMAL: &[&str] = &["Girl", "Kız"];

    /// Informal spellings for the boys' field, normalized to the formal form
    pub const BOYS_INFORMAL: &[&str] = &["Boy", "Erkek"];

    /// Canonical token for the girls' field
    pub const GIRLS: &str = "Girls";

    /// Canonical token for the boys' field
    pub const BOYS: &str = "Boys";
}

// =============================================================================
// Stroke Keywords
// =============================================================================

/// Canonical stroke names used in category keys
pub mod strokes {
    pub const FREESTYLE: &str = "Freestyle";
    pub const BACKSTROKE: &str = "Backstroke";
    pub const BREASTSTROKE: &str = "Breaststroke";
    pub const BUTTERFLY: &str = "Butterfly";
    pub const MEDLEY: &str = "Medley";
}

/// Lowercase stroke keywords in priority order, first match wins.
///
/// Keywords are matched as substrings of the lowercased title. Turkish short
/// forms sit next to their long forms; English abbreviations (`Fly`, `IM`)
/// come last. ` im` carries its leading space so it cannot match inside a word.
pub const STROKE_KEYWORDS: &[(&str, &str)] = &[
    ("freestyle", strokes::FREESTYLE),
    ("serbest", strokes::FREESTYLE),
    ("backstroke", strokes::BACKSTROKE),
    ("sırtüstü", strokes::BACKSTROKE),
    ("sırt", strokes::BACKSTROKE),
    ("breaststroke", strokes::BREASTSTROKE),
    ("kurbağalama", strokes::BREASTSTROKE),
    ("kurbağa", strokes::BREASTSTROKE),
    ("butterfly", strokes::BUTTERFLY),
    ("kelebek", strokes::BUTTERFLY),
    ("medley", strokes::MEDLEY),
    ("karışık", strokes::MEDLEY),
    // English short forms, tried only once no long form matched
    ("free", strokes::FREESTYLE),
    ("back", strokes::BACKSTROKE),
    ("breast", strokes::BREASTSTROKE),
    ("fly", strokes::BUTTERFLY),
    (" im", strokes::MEDLEY),
];

// =============================================================================
// Line Denylist
// =============================================================================

/// Non-data line patterns, checked before any header or athlete detection
pub mod denylist {
    /// Lines starting with one of these are discarded
    pub const PREFIXES: &[&str] = &[
        "SW ",          // disqualification rule citations
        "Puanlar:",     // scoring legend
        "Points:",      // scoring legend
        "Splash Meet",  // meet-manager footer
        "Results",      // page heading
        "Referee",      // officials block
    ];

    /// Lines containing one of these are discarded
    pub const SUBSTRINGS: &[&str] = &[
        "KATILIM BARAJINI GEÇTİ",
        "BARAJLARI",
        "Sonuçlar",
        "BAŞHAKEM",
        "ETAP MÜSABAKASI",
        "YB Zaman Derece",
        "YB Time Place",
        "DSQ",
    ];
}

// =============================================================================
// Processing Defaults
// =============================================================================

/// Lines between two progress callback invocations
pub const DEFAULT_PROGRESS_INTERVAL: usize = 50;

/// File extensions picked up when walking an input directory
pub const DEFAULT_FILE_EXTENSIONS: &[&str] = &["txt"];

/// Rank at or below which a result counts as a podium finish
pub const PODIUM_RANK: u32 = 3;

/// Clubs with fewer records are left out of the club report when any club
/// reaches this count
pub const MIN_CLUB_RECORDS: usize = 2;

/// Number of clubs printed by the club report
pub const CLUB_REPORT_LIMIT: usize = 15;
