//! Access to the controlled vocabulary that collections are made of

use crate::language::VocabularyError;

mod memory;

pub use memory::*;

/// Lookups the engine needs from a vocabulary store. Implementations must
/// tolerate concurrent readers; the engine itself holds no mutable state.
pub trait Vocabulary: Send + Sync {
    /// Whether some term of the collection accepts the token.
    fn term_exists_in_collection(
        &self,
        project_id: &str,
        collection_id: &str,
        token: &str,
    ) -> Result<bool, VocabularyError>;

    /// Every collection of the project with a term accepting the token, in
    /// a stable order.
    fn collections_matching(
        &self,
        project_id: &str,
        token: &str,
    ) -> Result<Vec<String>, VocabularyError>;
}
