//! Practice-area classification via ordered keyword matching.
//!
//! The table below is walked top to bottom and the first group with any
//! substring hit wins, so the row order encodes precedence for ambiguous
//! text. The load-bearing orderings:
//!
//! - DUI/DWI before Criminal Law, so "arrested for DUI" lands on DUI/DWI.
//! - Traffic Law before Criminal Law, for the same reason.
//! - Bankruptcy before Real Estate, so a foreclosure-driven bankruptcy is
//!   not swallowed by the "foreclosure" keyword.
//!
//! Reordering rows changes observable behavior; treat the table as frozen.

use crate::models::PracticeArea;

/// Ordered keyword groups, highest precedence first.
const KEYWORD_GROUPS: &[(PracticeArea, &[&str])] = &[
    (PracticeArea::PersonalInjury, &["accident", "injury", "personal injury", "slip and fall"]),
    (PracticeArea::FamilyLaw, &["divorce", "custody", "child support", "alimony"]),
    (PracticeArea::DuiDwi, &["dui", "dwi", "drunk driving"]),
    (
        PracticeArea::TrafficLaw,
        &["traffic ticket", "speeding ticket", "reckless driving", "careless driving"],
    ),
    (PracticeArea::CriminalLaw, &["criminal", "arrest", "felony", "misdemeanor"]),
    (PracticeArea::EstatePlanning, &["estate", "will", "trust"]),
    (PracticeArea::Bankruptcy, &["bankruptcy", "chapter 7", "chapter 13"]),
    (PracticeArea::RealEstate, &["real estate", "mortgage", "foreclosure"]),
    (PracticeArea::BusinessLaw, &["business", "contract", "llc"]),
    (PracticeArea::Immigration, &["immigration", "visa", "green card"]),
    (PracticeArea::SocialSecurityDisability, &["disability", "ssdi", "ssi"]),
    (PracticeArea::WorkersCompensation, &["workers comp", "work injury"]),
    (PracticeArea::CivilRights, &["civil rights", "police brutality"]),
    (PracticeArea::TaxLaw, &["tax", "irs", "audit"]),
];

/// Classifies a free-text case description into a practice area.
///
/// Total function: empty or whitespace-only input maps to
/// [`PracticeArea::Other`], text matching no group maps to
/// [`PracticeArea::General`], everything else takes the label of the
/// first matching group. Matching is case-insensitive and unanchored.
pub fn classify(description: &str) -> PracticeArea {
    if description.trim().is_empty() {
        return PracticeArea::Other;
    }

    let text = description.to_lowercase();
    for (area, keywords) in KEYWORD_GROUPS {
        if keywords.iter().any(|k| text.contains(k)) {
            return *area;
        }
    }

    PracticeArea::General
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_description_is_other() {
        assert_eq!(classify(""), PracticeArea::Other);
        assert_eq!(classify("   "), PracticeArea::Other);
    }

    #[test]
    fn unmatched_text_is_general() {
        assert_eq!(classify("I have a question about my neighbor's fence"), PracticeArea::General);
    }

    #[test]
    fn car_accident_is_personal_injury() {
        assert_eq!(classify("I was in a car accident"), PracticeArea::PersonalInjury);
    }

    #[test]
    fn dui_wins_over_criminal_law() {
        // "arrested" would match the Criminal Law group, but DUI/DWI is
        // checked first.
        assert_eq!(classify("arrested for DUI last night"), PracticeArea::DuiDwi);
    }

    #[test]
    fn traffic_wins_over_criminal_law() {
        assert_eq!(classify("arrested after a reckless driving stop"), PracticeArea::TrafficLaw);
        assert_eq!(classify("got a speeding ticket"), PracticeArea::TrafficLaw);
    }

    #[test]
    fn bankruptcy_wins_over_real_estate() {
        assert_eq!(classify("filed chapter 7"), PracticeArea::Bankruptcy);
        assert_eq!(
            classify("facing foreclosure, considering bankruptcy"),
            PracticeArea::Bankruptcy
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("NEED HELP WITH A DIVORCE"), PracticeArea::FamilyLaw);
    }

    #[test]
    fn later_groups_are_reachable() {
        assert_eq!(classify("letter from the irs"), PracticeArea::TaxLaw);
        assert_eq!(classify("applying for a green card"), PracticeArea::Immigration);
        assert_eq!(classify("hurt on the job, workers comp"), PracticeArea::WorkersCompensation);
    }
}
