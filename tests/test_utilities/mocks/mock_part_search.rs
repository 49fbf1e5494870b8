use digikey_bom_report::bom_reporting::domain::{
    PartSearchResult, PriceBreak, ProductVariation, RunContext,
};
use digikey_bom_report::prelude::*;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

type Outcome = std::result::Result<PartSearchResult, SearchError>;

/// Builds a product with one cut-tape variation priced at 1 and 10 pieces
pub fn product(mpn: &str) -> PartDetails {
    PartDetails {
        description: Some(format!("{} test product", mpn)),
        manufacturer: Some("Test Semiconductor".to_string()),
        manufacturer_part_number: Some(mpn.to_string()),
        product_url: Some(format!("https://www.digikey.com/en/products/detail/{}", mpn)),
        quantity_available: Some(1000),
        lifecycle_status: Some("Active".to_string()),
        end_of_life: Some(false),
        discontinued: Some(false),
        variations: vec![ProductVariation {
            digikey_part_number: Some(format!("{}-CT-ND", mpn)),
            package_type: "Cut Tape (CT)".to_string(),
            minimum_order_quantity: Some(1),
            quantity_available: Some(1000),
            price_breaks: vec![
                PriceBreak::new(1, 0.5, 0.5),
                PriceBreak::new(10, 0.4, 4.0),
            ],
        }],
        ..Default::default()
    }
}

/// Mock PartSearchRepository with per-part scripted outcomes
///
/// Scripted outcomes for a part number are consumed one per search; once
/// they run out (or when none were scripted) the search answers with an
/// exact match built by [`product`]. Every call is logged in order.
#[derive(Clone, Default)]
pub struct MockPartSearch {
    scripts: Arc<Mutex<HashMap<String, VecDeque<Outcome>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockPartSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(self, part_number: &str, outcome: Outcome) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .entry(part_number.to_string())
            .or_default()
            .push_back(outcome);
        self
    }

    pub fn with_transient_failures(mut self, part_number: &str, times: usize) -> Self {
        for _ in 0..times {
            self = self.with_outcome(
                part_number,
                Err(SearchError::Transient {
                    details: "HTTP 503: Service Unavailable".to_string(),
                }),
            );
        }
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_for(&self, part_number: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|pn| pn.as_str() == part_number)
            .count()
    }
}

impl PartSearchRepository for MockPartSearch {
    fn search(&self, _context: &RunContext, part_number: &PartNumber) -> Outcome {
        self.calls.lock().unwrap().push(part_number.to_string());

        let scripted = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(part_number.as_str())
            .and_then(VecDeque::pop_front);

        scripted.unwrap_or_else(|| {
            Ok(PartSearchResult {
                exact_matches: vec![product(part_number.as_str())],
                products: vec![],
            })
        })
    }
}
