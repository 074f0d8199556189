use crate::tokenizer::tokenize;
use crate::TermId;
use std::collections::HashMap;

/// Distinct terms across a document set and their vector positions.
///
/// Positions are assigned in first-occurrence order, so two builds over the
/// same documents always produce the same axes.
#[derive(Debug, Default, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    positions: HashMap<String, TermId>,
}

impl Vocabulary {
    pub fn new() -> Self { Self::default() }

    pub fn build<S: AsRef<str>>(documents: &[S]) -> Self {
        let mut vocab = Self::new();
        for doc in documents {
            for term in tokenize(doc.as_ref()) {
                if !vocab.positions.contains_key(term) {
                    vocab.positions.insert(term.to_string(), vocab.terms.len() as TermId);
                    vocab.terms.push(term.to_string());
                }
            }
        }
        tracing::debug!(num_terms = vocab.terms.len(), "built vocabulary");
        vocab
    }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    pub fn position(&self, term: &str) -> Option<TermId> {
        self.positions.get(term).copied()
    }

    /// Terms in position order.
    pub fn terms(&self) -> &[String] { &self.terms }
}
