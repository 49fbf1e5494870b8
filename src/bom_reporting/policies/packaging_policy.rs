use crate::bom_reporting::domain::ProductVariation;

/// Package type shown when cut tape and Digi-Reel are folded together
pub const MERGED_CUT_TAPE_LABEL: &str = "Cut Tape (CT) & Digi-Reel®";

/// PackagingPolicy for cleaning up a product's packaging variations
///
/// Digi-Reel is cut tape re-spooled on demand and shares its price breaks,
/// so when both are offered they are shown as one row: the cut tape
/// variation is relabelled and the Digi-Reel variation removed.
pub struct PackagingPolicy;

impl PackagingPolicy {
    pub fn merge_cut_tape_and_digi_reel(
        mut variations: Vec<ProductVariation>,
    ) -> Vec<ProductVariation> {
        let cut_tape = variations
            .iter()
            .position(|v| v.package_type.contains("Cut Tape"));
        let digi_reel = variations
            .iter()
            .position(|v| v.package_type.contains("Digi-Reel"));

        if let (Some(cut_tape), Some(digi_reel)) = (cut_tape, digi_reel) {
            if cut_tape != digi_reel {
                variations[cut_tape].package_type = MERGED_CUT_TAPE_LABEL.to_string();
                variations.remove(digi_reel);
            }
        }

        variations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variation(package_type: &str) -> ProductVariation {
        ProductVariation {
            digikey_part_number: None,
            package_type: package_type.to_string(),
            minimum_order_quantity: None,
            quantity_available: None,
            price_breaks: vec![],
        }
    }

    fn package_types(variations: &[ProductVariation]) -> Vec<&str> {
        variations.iter().map(|v| v.package_type.as_str()).collect()
    }

    #[test]
    fn test_merges_when_both_present() {
        let merged = PackagingPolicy::merge_cut_tape_and_digi_reel(vec![
            variation("Tape & Reel (TR)"),
            variation("Cut Tape (CT)"),
            variation("Digi-Reel®"),
        ]);
        assert_eq!(
            package_types(&merged),
            ["Tape & Reel (TR)", MERGED_CUT_TAPE_LABEL]
        );
    }

    #[test]
    fn test_digi_reel_listed_first() {
        let merged = PackagingPolicy::merge_cut_tape_and_digi_reel(vec![
            variation("Digi-Reel®"),
            variation("Cut Tape (CT)"),
        ]);
        assert_eq!(package_types(&merged), [MERGED_CUT_TAPE_LABEL]);
    }

    #[test]
    fn test_untouched_without_digi_reel() {
        let merged = PackagingPolicy::merge_cut_tape_and_digi_reel(vec![
            variation("Tube"),
            variation("Cut Tape (CT)"),
        ]);
        assert_eq!(package_types(&merged), ["Tube", "Cut Tape (CT)"]);
    }
}
