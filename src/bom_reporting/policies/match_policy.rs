use crate::bom_reporting::domain::{MatchKind, PartDetails, PartNumber, PartSearchResult};
use strsim::jaro_winkler;

/// Default minimum confidence for accepting a non-exact keyword result
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.90;

/// MatchPolicy for picking a product out of a keyword search result
///
/// Priority order:
/// 1. An exact match whose manufacturer part number equals the request
/// 2. The first exact match the distributor reported
/// 3. A ranked product whose manufacturer part number equals the request
/// 4. The top ranked product, accepted only if its confidence reaches the
///    threshold (otherwise reported as ambiguous)
///
/// The distributor publishes no relevance score, so confidence is the
/// Jaro-Winkler similarity of the requested and returned part numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchPolicy {
    confidence_threshold: f64,
}

impl MatchPolicy {
    pub fn new(confidence_threshold: f64) -> Self {
        Self {
            confidence_threshold: confidence_threshold.clamp(0.0, 1.0),
        }
    }

    pub fn confidence_threshold(&self) -> f64 {
        self.confidence_threshold
    }

    /// Returns the chosen product and how it matched, or None when the
    /// search returned nothing.
    pub fn select(
        &self,
        requested: &PartNumber,
        result: PartSearchResult,
    ) -> Option<(PartDetails, MatchKind)> {
        let PartSearchResult {
            mut exact_matches,
            mut products,
        } = result;

        if !exact_matches.is_empty() {
            let index = Self::position_of(requested, &exact_matches).unwrap_or(0);
            return Some((exact_matches.swap_remove(index), MatchKind::Exact));
        }

        if let Some(index) = Self::position_of(requested, &products) {
            return Some((products.swap_remove(index), MatchKind::Exact));
        }

        if products.is_empty() {
            return None;
        }

        let top = products.swap_remove(0);
        let confidence = Self::confidence(requested, &top);
        let accepted = confidence >= self.confidence_threshold;
        Some((
            top,
            MatchKind::Fuzzy {
                confidence,
                accepted,
            },
        ))
    }

    /// Similarity in [0, 1] between the requested and returned part numbers
    pub fn confidence(requested: &PartNumber, candidate: &PartDetails) -> f64 {
        match candidate.manufacturer_part_number.as_deref() {
            Some(mpn) => jaro_winkler(
                &requested.as_str().to_ascii_uppercase(),
                &mpn.trim().to_ascii_uppercase(),
            ),
            None => 0.0,
        }
    }

    fn position_of(requested: &PartNumber, candidates: &[PartDetails]) -> Option<usize> {
        candidates.iter().position(|candidate| {
            candidate
                .manufacturer_part_number
                .as_deref()
                .is_some_and(|mpn| requested.matches(mpn))
        })
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIDENCE_THRESHOLD)
    }
}
