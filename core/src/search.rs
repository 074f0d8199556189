use crate::error::Result;
use crate::filter::candidates;
use crate::index::{DocId, InvertedIndex};
use crate::similarity::{rank, ScoredDoc};
use crate::tokenizer::tokenize;
use crate::vector::{vectorize, VectorMode};
use crate::vocabulary::Vocabulary;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Keep only the first `limit` ranked documents
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub query: String,
    pub vocabulary_size: usize,
    pub candidate_ids: BTreeSet<DocId>,
    pub ranked: Vec<ScoredDoc>,
    /// candidates left out of `ranked` because their angle is undefined
    pub unscored: Vec<DocId>,
}

/// Read-only search state built once per document set.
pub struct SearchEngine<'a> {
    documents: &'a [String],
    vocabulary: Vocabulary,
    index: InvertedIndex,
    options: SearchOptions,
}

impl<'a> SearchEngine<'a> {
    pub fn new(documents: &'a [String]) -> Result<Self> {
        Self::with_options(documents, SearchOptions::default())
    }

    pub fn with_options(documents: &'a [String], options: SearchOptions) -> Result<Self> {
        let vocabulary = Vocabulary::build(documents);
        let index = InvertedIndex::build(documents, &vocabulary)?;
        if vocabulary.is_empty() {
            tracing::warn!(num_docs = documents.len(), "documents contain no terms; every query will be empty");
        }
        tracing::info!(num_docs = documents.len(), num_terms = vocabulary.len(), "index ready");
        Ok(Self { documents, vocabulary, index, options })
    }

    pub fn vocabulary(&self) -> &Vocabulary { &self.vocabulary }

    pub fn query(&self, text: &str) -> QueryResult {
        let q_tokens = tokenize(text);
        let q_vec = vectorize(q_tokens.iter().copied(), &self.vocabulary, VectorMode::Presence);
        let candidate_ids = candidates(q_tokens.iter().copied(), &self.index);

        let doc_vectors = candidate_ids.iter().map(|&doc_id| {
            let text = &self.documents[doc_id as usize - 1];
            (doc_id, vectorize(tokenize(text), &self.vocabulary, VectorMode::Count))
        });
        let mut ranking = rank(&q_vec, doc_vectors);
        if let Some(k) = self.options.limit {
            ranking.ranked.truncate(k);
        }
        tracing::debug!(query = text, candidates = candidate_ids.len(), ranked = ranking.ranked.len(), "query done");

        QueryResult {
            query: text.to_string(),
            vocabulary_size: self.vocabulary.len(),
            candidate_ids,
            ranked: ranking.ranked,
            unscored: ranking.unscored,
        }
    }
}

/// Run every query against the documents, in query order.
pub fn search(documents: &[String], queries: &[String]) -> Result<Vec<QueryResult>> {
    search_with_options(documents, queries, SearchOptions::default())
}

pub fn search_with_options(documents: &[String], queries: &[String], options: SearchOptions) -> Result<Vec<QueryResult>> {
    let engine = SearchEngine::with_options(documents, options)?;
    Ok(queries.iter().map(|q| engine.query(q)).collect())
}
