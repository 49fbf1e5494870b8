use crate::bom_reporting::domain::{LineItem, MatchKind, PartSearchResult, ResolvedPart, RunContext};
use crate::bom_reporting::policies::{MatchPolicy, PriceBreakPolicy, RetryPolicy};
use crate::ports::outbound::{PartSearchRepository, SearchError};
use std::thread;

/// PartResolver turns one line item into one ResolvedPart
///
/// Wraps the single search call in the retry policy, then applies the match
/// and price-break policies. Every failure ends up in the ResolvedPart as
/// `found = false` plus a note; nothing here can abort the run.
pub struct PartResolver<PS> {
    repository: PS,
    match_policy: MatchPolicy,
    retry_policy: RetryPolicy,
}

impl<PS: PartSearchRepository> PartResolver<PS> {
    pub fn new(repository: PS, match_policy: MatchPolicy, retry_policy: RetryPolicy) -> Self {
        Self {
            repository,
            match_policy,
            retry_policy,
        }
    }

    pub fn resolve(&self, context: &RunContext, item: LineItem) -> ResolvedPart {
        match self.search_with_retry(context, &item) {
            Ok(result) => self.build(item, result),
            Err(SearchError::NotFound) => {
                ResolvedPart::unresolved(item, "No matching product found at DigiKey")
            }
            Err(error @ SearchError::Rejected { .. }) => {
                ResolvedPart::unresolved(item, format!("Search failed: {}", error))
            }
            Err(error @ SearchError::Transient { .. }) => ResolvedPart::unresolved(
                item,
                format!(
                    "Search failed after {} attempts: {}",
                    self.retry_policy.max_attempts(),
                    error
                ),
            ),
        }
    }

    /// Issues the search, retrying transient failures only
    fn search_with_retry(
        &self,
        context: &RunContext,
        item: &LineItem,
    ) -> Result<PartSearchResult, SearchError> {
        let mut attempt = 1;
        loop {
            match self.repository.search(context, item.part_number()) {
                Err(error) if error.is_transient() && self.retry_policy.should_retry(attempt) => {
                    tracing::warn!(
                        part = %item.part_number(),
                        attempt,
                        max_attempts = self.retry_policy.max_attempts(),
                        error = %error,
                        "transient search failure, retrying"
                    );
                    if !self.retry_policy.delay().is_zero() {
                        thread::sleep(self.retry_policy.delay());
                    }
                    attempt += 1;
                }
                outcome => return outcome,
            }
        }
    }

    fn build(&self, item: LineItem, result: PartSearchResult) -> ResolvedPart {
        let Some((details, match_kind)) = self.match_policy.select(item.part_number(), result)
        else {
            return ResolvedPart::unresolved(item, "No matching product found at DigiKey");
        };

        let price = PriceBreakPolicy::price_for(&details.variations, item.quantity());
        let returned = details
            .manufacturer_part_number
            .clone()
            .unwrap_or_else(|| "unknown part".to_string());

        let mut notes = Vec::new();
        match match_kind {
            MatchKind::Fuzzy {
                confidence,
                accepted: false,
            } => notes.push(format!(
                "Ambiguous match: top result {} has confidence {:.2}, below {:.2}",
                returned,
                confidence,
                self.match_policy.confidence_threshold()
            )),
            MatchKind::Fuzzy {
                confidence,
                accepted: true,
            } => notes.push(format!(
                "Fuzzy match: {} (confidence {:.2})",
                returned, confidence
            )),
            MatchKind::Exact | MatchKind::None => {}
        }
        if price.is_none() {
            notes.push("No pricing available".to_string());
        }

        let note = (!notes.is_empty()).then(|| notes.join("; "));
        ResolvedPart::matched(item, match_kind, details, price, note)
    }
}
