//! Damage classification port
//!
//! A [`DamageClassifier`] turns a damage photo into a [`DamageAssessment`].
//! The only production implementation, [`RandomClassifier`], draws location
//! and severity uniformly at random; a model-backed classifier can replace it
//! without touching valuation or the claim service.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use thiserror::Error;

use crate::claim::ClaimImage;
use crate::damage::{DamageAssessment, DamageLocation, DamageSeverity};

/// Errors a classifier can report
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Image could not be read: {0}")]
    UnreadableImage(String),

    #[error("Classifier unavailable: {0}")]
    Unavailable(String),
}

/// Assesses damage from a photo and the claimant's description
#[async_trait]
pub trait DamageClassifier: Send + Sync {
    /// Classifies the damage shown in `image`
    async fn classify(
        &self,
        image: &ClaimImage,
        description: &str,
    ) -> Result<DamageAssessment, ClassifierError>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Picks a location and severity uniformly at random
///
/// Never reports `Unknown` on either axis.
#[derive(Debug)]
pub struct RandomClassifier {
    rng: Mutex<StdRng>,
}

impl RandomClassifier {
    /// Creates a classifier seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a reproducible classifier
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn draw(&self) -> Result<DamageAssessment, ClassifierError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| ClassifierError::Unavailable("random source poisoned".to_string()))?;

        let location = DamageLocation::ASSESSABLE[rng.gen_range(0..DamageLocation::ASSESSABLE.len())];
        let severity = DamageSeverity::ASSESSABLE[rng.gen_range(0..DamageSeverity::ASSESSABLE.len())];
        Ok(DamageAssessment::new(location, severity))
    }
}

impl Default for RandomClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DamageClassifier for RandomClassifier {
    async fn classify(
        &self,
        image: &ClaimImage,
        _description: &str,
    ) -> Result<DamageAssessment, ClassifierError> {
        if image.is_empty() {
            return Err(ClassifierError::UnreadableImage("empty image".to_string()));
        }
        self.draw()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Deterministic classifiers for tests
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;

    /// Always returns the same assessment
    #[derive(Debug, Clone, Copy)]
    pub struct FixedClassifier {
        assessment: DamageAssessment,
    }

    impl FixedClassifier {
        pub fn new(location: DamageLocation, severity: DamageSeverity) -> Self {
            Self {
                assessment: DamageAssessment::new(location, severity),
            }
        }
    }

    #[async_trait]
    impl DamageClassifier for FixedClassifier {
        async fn classify(
            &self,
            _image: &ClaimImage,
            _description: &str,
        ) -> Result<DamageAssessment, ClassifierError> {
            Ok(self.assessment)
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    /// Always fails, for exercising the processing-failure path
    #[derive(Debug, Clone, Copy, Default)]
    pub struct FailingClassifier;

    #[async_trait]
    impl DamageClassifier for FailingClassifier {
        async fn classify(
            &self,
            _image: &ClaimImage,
            _description: &str,
        ) -> Result<DamageAssessment, ClassifierError> {
            Err(ClassifierError::Unavailable("model offline".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn image() -> ClaimImage {
        ClaimImage::new("data:image/jpeg;base64,/9j/4AAQ")
    }

    #[tokio::test]
    async fn test_seeded_classifiers_agree() {
        let a = RandomClassifier::seeded(42);
        let b = RandomClassifier::seeded(42);

        for _ in 0..20 {
            assert_eq!(
                a.classify(&image(), "dent").await.unwrap(),
                b.classify(&image(), "dent").await.unwrap()
            );
        }
    }

    #[tokio::test]
    async fn test_random_classifier_covers_all_cells() {
        let classifier = RandomClassifier::seeded(7);
        let mut seen = HashSet::new();

        for _ in 0..500 {
            let assessment = classifier.classify(&image(), "dent").await.unwrap();
            assert!(!assessment.is_partial());
            seen.insert((assessment.location, assessment.severity));
        }

        assert_eq!(seen.len(), 9);
    }

    #[tokio::test]
    async fn test_empty_image_is_unreadable() {
        let classifier = RandomClassifier::seeded(1);
        let err = classifier.classify(&ClaimImage::new(""), "dent").await.unwrap_err();
        assert!(matches!(err, ClassifierError::UnreadableImage(_)));
    }
}
