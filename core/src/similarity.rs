use crate::error::SimilarityError;
use crate::index::DocId;
use crate::vector::TermVector;
use serde::Serialize;

/// Angle in degrees between two vectors, in [0, 180]. Lower is more similar.
pub fn angle_degrees(query: &TermVector, doc: &TermVector) -> Result<f64, SimilarityError> {
    if query.len() != doc.len() {
        return Err(SimilarityError::DimensionMismatch { left: query.len(), right: doc.len() });
    }
    let q_norm = query.norm();
    let d_norm = doc.norm();
    if q_norm == 0.0 || d_norm == 0.0 {
        return Err(SimilarityError::ZeroMagnitude);
    }
    // rounding can push the ratio just past 1.0 for parallel vectors
    let cos_sim = (query.dot(doc) / (q_norm * d_norm)).clamp(-1.0, 1.0);
    Ok(cos_sim.acos().to_degrees())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDoc {
    pub doc_id: DocId,
    /// angle to the query in degrees
    pub angle: f64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Ranking {
    /// ascending by angle; equal angles keep candidate order
    pub ranked: Vec<ScoredDoc>,
    /// candidates whose angle is undefined
    pub unscored: Vec<DocId>,
}

/// Score every candidate against the query and sort by ascending angle.
pub fn rank<I>(query: &TermVector, candidates: I) -> Ranking
where
    I: IntoIterator<Item = (DocId, TermVector)>,
{
    let mut ranking = Ranking::default();
    for (doc_id, doc) in candidates {
        match angle_degrees(query, &doc) {
            Ok(angle) => ranking.ranked.push(ScoredDoc { doc_id, angle }),
            Err(err) => {
                tracing::debug!(doc_id, %err, "skipping unscorable candidate");
                ranking.unscored.push(doc_id);
            }
        }
    }
    // sort_by is stable
    ranking.ranked.sort_by(|a, b| a.angle.total_cmp(&b.angle));
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;
    use crate::vector::{vectorize, VectorMode};
    use crate::vocabulary::Vocabulary;

    fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

    #[test]
    fn parallel_vectors_have_zero_angle() {
        let vocab = Vocabulary::build(&["a a a", "a"]);
        let q = vectorize(tokenize("a"), &vocab, VectorMode::Presence);
        let d = vectorize(tokenize("a a a"), &vocab, VectorMode::Count);
        assert!(close(angle_degrees(&q, &d).unwrap(), 0.0));
    }

    #[test]
    fn orthogonal_and_half_overlap() {
        let vocab = Vocabulary::build(&["cat dog"]);
        let q = vectorize(tokenize("dog"), &vocab, VectorMode::Presence);
        let cat = vectorize(tokenize("cat"), &vocab, VectorMode::Count);
        let both = vectorize(tokenize("cat dog"), &vocab, VectorMode::Count);
        assert!(close(angle_degrees(&q, &cat).unwrap(), 90.0));
        assert!(close(angle_degrees(&q, &both).unwrap(), 45.0));
    }

    #[test]
    fn zero_vector_is_an_error_not_nan() {
        let vocab = Vocabulary::build(&["cat dog"]);
        let q = vectorize(tokenize(""), &vocab, VectorMode::Presence);
        let d = vectorize(tokenize("cat dog"), &vocab, VectorMode::Count);
        assert_eq!(angle_degrees(&q, &d), Err(SimilarityError::ZeroMagnitude));
        assert_eq!(angle_degrees(&d, &q), Err(SimilarityError::ZeroMagnitude));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = angle_degrees(&TermVector::zeros(2), &TermVector::zeros(3)).unwrap_err();
        assert_eq!(err, SimilarityError::DimensionMismatch { left: 2, right: 3 });
    }

    #[test]
    fn rank_sorts_ascending_and_keeps_tie_order() {
        let docs = ["x y", "x", "x y z w", "y x"];
        let vocab = Vocabulary::build(&docs);
        let q = vectorize(tokenize("x"), &vocab, VectorMode::Presence);
        let cands = docs.iter().enumerate().map(|(i, d)| {
            (i as DocId + 1, vectorize(tokenize(d), &vocab, VectorMode::Count))
        });
        let ranking = rank(&q, cands);
        let order: Vec<DocId> = ranking.ranked.iter().map(|s| s.doc_id).collect();
        assert_eq!(order, vec![2, 1, 4, 3]);
        assert!(ranking.unscored.is_empty());
        assert!(ranking.ranked.windows(2).all(|w| w[0].angle <= w[1].angle));
        for s in &ranking.ranked {
            assert!((0.0..=180.0).contains(&s.angle));
        }
    }

    #[test]
    fn rank_reports_unscorable_candidates() {
        let vocab = Vocabulary::build(&["cat dog"]);
        let q = vectorize(tokenize("dog"), &vocab, VectorMode::Presence);
        let ranking = rank(&q, vec![(1, TermVector::zeros(2)), (2, vectorize(tokenize("dog"), &vocab, VectorMode::Count))]);
        assert_eq!(ranking.unscored, vec![1]);
        assert_eq!(ranking.ranked.len(), 1);
        assert_eq!(ranking.ranked[0].doc_id, 2);
    }
}
