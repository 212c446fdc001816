//! Tabletop Engine: Choice Evaluator
//!
//! The score delta depends only on the choice's quality and the active
//! scoring scale. Feedback and consequence texts are drawn from
//! quality-keyed pools.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::catalog::outcomes::{consequence_pool, feedback_pool};
use crate::domain::{Choice, Evaluation};
use crate::scoring::ScoringScale;

pub fn evaluate<R: Rng>(scale: ScoringScale, choice: &Choice, rng: &mut R) -> Evaluation {
    let feedback = feedback_pool(choice.quality).choose(rng).copied().unwrap_or_default();
    let consequence = consequence_pool(choice.quality).choose(rng).copied().unwrap_or_default();

    Evaluation {
        score_change: scale.delta(choice.quality),
        feedback: feedback.to_string(),
        consequence: consequence.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Quality;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn choice(quality: Quality) -> Choice {
        Choice {
            text: "Isolate affected hosts".to_string(),
            quality,
        }
    }

    #[test]
    fn test_standard_deltas() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(evaluate(ScoringScale::STANDARD, &choice(Quality::Good), &mut rng).score_change, 10);
            assert_eq!(evaluate(ScoringScale::STANDARD, &choice(Quality::Neutral), &mut rng).score_change, 7);
            assert_eq!(evaluate(ScoringScale::STANDARD, &choice(Quality::Bad), &mut rng).score_change, -5);
        }
    }

    #[test]
    fn test_texts_come_from_matching_pools() {
        let mut rng = StdRng::seed_from_u64(9);
        for q in Quality::ALL {
            let eval = evaluate(ScoringScale::STANDARD, &choice(q), &mut rng);
            assert!(feedback_pool(q).contains(&eval.feedback.as_str()));
            assert!(consequence_pool(q).contains(&eval.consequence.as_str()));
        }
    }

    #[test]
    fn test_pool_sizes() {
        for q in Quality::ALL {
            assert!((5..=6).contains(&feedback_pool(q).len()));
            assert!((5..=6).contains(&consequence_pool(q).len()));
        }
    }
}
