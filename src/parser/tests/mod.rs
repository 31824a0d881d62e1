//! Test utilities for result sheet parsing
//!
//! Shared fixtures used across the parser test modules.

mod time_tests;

/// A result sheet mixing English and Turkish headers, boilerplate, split
/// times, a relay and OCR-damaged athlete lines
pub fn sample_sheet() -> Vec<&'static str> {
    vec![
        "Splash Meet Manager, 11.0 Registered to Izmir Swimming",
        "Sonuçlar",
        "Race 1 Girls, 100m Freestyle, 10 yaş",
        "YB Zaman Derece",
        "Ayşe Yılmaz 12 CITY SC 1:05.32 450",
        "50m: 30.00",
        "Zeynep Kaya 12 BLUE WAVE SK 1:07.10 410",
        "",
        "Yarış 2 Erkekler, 50m Kelebek",
        "10 yaş",
        "Mehmet Demir 13 ANKARA SPOR KULÜB1ü: 31:45 512",
        "11 yaş",
        "Can Öztürk 12 BURSA YÜZME 0.00 0",
        "Emre Şahin 12 BURSA YÜZME 30,95 540",
        "SW 8.3 Kelebek vuruşu kurallara aykırı",
        "Yarış 3 Kızlar 4x50m Serbest Bayrak",
        "Puanlar: FINA 2024",
    ]
}

/// Records of the sample sheet under the given document id
pub fn sample_records(document_id: &str) -> Vec<crate::models::AthleteRecord> {
    super::extract_records(document_id, &sample_sheet())
}
