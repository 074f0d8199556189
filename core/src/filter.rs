use crate::index::{DocId, InvertedIndex};
use std::collections::BTreeSet;

/// Documents containing every query term (boolean AND).
///
/// Any term missing from the index empties the result immediately. A query
/// without terms matches nothing. Repeated doc ids in a posting list count
/// once.
pub fn candidates<'a, I>(query_tokens: I, index: &InvertedIndex) -> BTreeSet<DocId>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tokens = query_tokens.into_iter().peekable();
    if tokens.peek().is_none() {
        return BTreeSet::new();
    }
    let mut matches: BTreeSet<DocId> = (1..=index.num_docs()).collect();
    for term in tokens {
        match index.doc_ids(term) {
            Some(ids) => matches.retain(|id| ids.contains(id)),
            None => {
                tracing::trace!(term, "query term not indexed");
                return BTreeSet::new();
            }
        }
        if matches.is_empty() {
            break;
        }
    }
    matches
}
