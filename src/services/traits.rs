use crate::core::scoring::interest_similarity;
use crate::models::UserRecord;

/// Pluggable source of psychological-trait similarity
///
/// Implementations return a similarity in [0, 1], or `None` when trait data
/// is unavailable for the pair. The engine treats `None` as the neutral
/// default of 0.0 and clamps anything out of range, so a misbehaving
/// provider can degrade a score but never abort a computation.
pub trait TraitProvider: Send + Sync {
    fn similarity(&self, a: &UserRecord, b: &UserRecord) -> Option<f64>;
}

/// Default provider: compares the trait labels attached to each record
///
/// Labels are compared as sets. A record without labels counts as missing
/// data rather than a zero-similarity match.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelTraitProvider;

impl TraitProvider for LabelTraitProvider {
    fn similarity(&self, a: &UserRecord, b: &UserRecord) -> Option<f64> {
        if a.traits.is_empty() || b.traits.is_empty() {
            return None;
        }
        Some(interest_similarity(&a.traits, &b.traits))
    }
}

/// Provider for deployments with no trait source wired in; never reports data
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTraitData;

impl TraitProvider for NoTraitData {
    fn similarity(&self, _a: &UserRecord, _b: &UserRecord) -> Option<f64> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_labels_score_one() {
        let a = UserRecord::new("u1", "Alice").with_traits(["open", "calm"]);
        let b = UserRecord::new("u2", "Bob").with_traits(["calm", "open"]);

        let provider = LabelTraitProvider;
        assert_eq!(provider.similarity(&a, &b), Some(1.0));
    }

    #[test]
    fn test_partial_overlap() {
        let a = UserRecord::new("u1", "Alice").with_traits(["open", "calm"]);
        let b = UserRecord::new("u2", "Bob").with_traits(["open", "bold", "curious"]);

        let provider = LabelTraitProvider;
        let score = provider.similarity(&a, &b).unwrap();
        assert!((score - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_missing_labels_is_no_data() {
        let a = UserRecord::new("u1", "Alice").with_traits(["open"]);
        let b = UserRecord::new("u2", "Bob");

        let provider = LabelTraitProvider;
        assert_eq!(provider.similarity(&a, &b), None);
    }

    #[test]
    fn test_no_trait_data_provider() {
        let a = UserRecord::new("u1", "Alice").with_traits(["open"]);
        let b = UserRecord::new("u2", "Bob").with_traits(["open"]);

        assert_eq!(NoTraitData.similarity(&a, &b), None);
    }
}
