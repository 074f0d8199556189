use crate::error::{Result, SearchError};
use crate::tokenizer::tokenize;
use crate::vocabulary::Vocabulary;
use std::collections::{BTreeSet, HashMap};

pub type TermId = u32;
/// 1-based document id, assigned by input order.
pub type DocId = u32;

/// Id of the document at 0-based input position `pos`, if it fits a `DocId`.
pub fn doc_id_for(pos: usize) -> Option<DocId> {
    DocId::try_from(pos).ok()?.checked_add(1)
}

#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    /// term -> doc ids in insertion order, one entry per occurrence
    postings: HashMap<String, Vec<DocId>>,
    num_docs: u32,
}

impl InvertedIndex {
    /// Fails with `TooManyDocuments` if the last document id would overflow `DocId`.
    pub fn build<S: AsRef<str>>(documents: &[S], vocabulary: &Vocabulary) -> Result<Self> {
        let num_docs = match documents.len().checked_sub(1) {
            Some(last) => doc_id_for(last).ok_or(SearchError::TooManyDocuments { count: documents.len() })?,
            None => 0,
        };
        let mut postings: HashMap<String, Vec<DocId>> = HashMap::with_capacity(vocabulary.len());
        for (doc_id, doc) in (1..=num_docs).zip(documents) {
            for term in tokenize(doc.as_ref()) {
                match postings.get_mut(term) {
                    Some(plist) => plist.push(doc_id),
                    None => { postings.insert(term.to_string(), vec![doc_id]); }
                }
            }
        }
        tracing::debug!(num_docs, num_terms = postings.len(), "built inverted index");
        Ok(Self { postings, num_docs })
    }

    /// Raw posting list; a doc id repeats once per occurrence of the term.
    pub fn postings(&self, term: &str) -> Option<&[DocId]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    /// Distinct doc ids containing the term, or `None` if it was never indexed.
    pub fn doc_ids(&self, term: &str) -> Option<BTreeSet<DocId>> {
        self.postings(term).map(|p| p.iter().copied().collect())
    }

    pub fn num_docs(&self) -> u32 { self.num_docs }
}
