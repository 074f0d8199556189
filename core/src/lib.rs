pub mod error;
pub mod filter;
pub mod index;
pub mod input;
pub mod search;
pub mod similarity;
pub mod tokenizer;
pub mod vector;
pub mod vocabulary;

pub use error::{SearchError, SimilarityError};
pub use index::{DocId, InvertedIndex, TermId};
pub use search::{search, search_with_options, QueryResult, SearchEngine, SearchOptions};
pub use similarity::{Ranking, ScoredDoc};
pub use vector::{TermVector, VectorMode};
pub use vocabulary::Vocabulary;
