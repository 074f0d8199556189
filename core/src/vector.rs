use crate::vocabulary::Vocabulary;

/// How token occurrences are weighted when building a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorMode {
    /// 1 if the term occurs at all. Used for queries.
    Presence,
    /// Raw occurrence count. Used for documents.
    Count,
}

/// Dense term-frequency vector aligned to a vocabulary's positions.
#[derive(Debug, Clone, PartialEq)]
pub struct TermVector(Vec<f64>);

impl TermVector {
    pub fn zeros(len: usize) -> Self { Self(vec![0.0; len]) }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn as_slice(&self) -> &[f64] { &self.0 }

    /// Dot product. Callers must pass vectors of equal length.
    pub fn dot(&self, other: &TermVector) -> f64 {
        self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum()
    }

    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }
}

/// Build a vector over `vocabulary`; tokens outside it are skipped.
pub fn vectorize<'a, I>(tokens: I, vocabulary: &Vocabulary, mode: VectorMode) -> TermVector
where
    I: IntoIterator<Item = &'a str>,
{
    let mut v = TermVector::zeros(vocabulary.len());
    for token in tokens {
        if let Some(pos) = vocabulary.position(token) {
            let slot = &mut v.0[pos as usize];
            match mode {
                VectorMode::Presence => *slot = 1.0,
                VectorMode::Count => *slot += 1.0,
            }
        }
    }
    v
}
