//! Static directory of tracked complaint cases.
//!
//! Stands in for the portal backend: the client only needs reference codes
//! and a few display fields to drive the tracking pages.

/// Processing state of a complaint, as shown on the tracking page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseStatus {
    Received,
    InReview,
    Resolved,
}

impl CaseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::Received => "Received",
            CaseStatus::InReview => "In review",
            CaseStatus::Resolved => "Resolved",
        }
    }

    /// Styling for the status chip.
    pub fn badge_class(&self) -> &'static str {
        match self {
            CaseStatus::Received => "bg-blue-100 text-blue-800",
            CaseStatus::InReview => "bg-yellow-100 text-yellow-800",
            CaseStatus::Resolved => "bg-green-100 text-green-800",
        }
    }
}

/// One tracked complaint.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseRecord {
    pub reference: &'static str,
    pub title: &'static str,
    pub status: CaseStatus,
    pub location: &'static str,
    pub filed: &'static str,
}

const CASES: &[CaseRecord] = &[
    CaseRecord {
        reference: "GOV-CMP-2026-000042",
        title: "Pothole near the central library",
        status: CaseStatus::Received,
        location: "Library Square",
        filed: "2026-07-18",
    },
    CaseRecord {
        reference: "GOV-CMP-2026-000017",
        title: "Streetlight outage on Elm Avenue",
        status: CaseStatus::InReview,
        location: "Elm Avenue, Ward 4",
        filed: "2026-06-02",
    },
    CaseRecord {
        reference: "GOV-CMP-2025-000913",
        title: "Missed garbage collection",
        status: CaseStatus::Resolved,
        location: "Harbor District",
        filed: "2025-11-30",
    },
];

/// Every tracked case, newest first.
pub fn all() -> &'static [CaseRecord] {
    CASES
}

/// Find a case by its reference code.
pub fn lookup(reference: &str) -> Option<&'static CaseRecord> {
    CASES.iter().find(|case| case.reference == reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_finds_a_known_reference() {
        let case = lookup("GOV-CMP-2026-000042").unwrap();
        assert_eq!(case.title, "Pothole near the central library");
    }

    #[test]
    fn lookup_misses_an_unknown_reference() {
        assert!(lookup("GOV-CMP-1999-000001").is_none());
    }

    #[test]
    fn references_are_unique() {
        let references: HashSet<_> = all().iter().map(|case| case.reference).collect();
        assert_eq!(references.len(), all().len());
    }
}
