//! Identifier generation for new records.

use uuid::Uuid;

/// Number of hex characters kept from a v4 UUID.
const ID_LEN: usize = 12;

/// Source of fresh record identifiers.
///
/// Uniqueness is probabilistic: collisions are neither detected nor retried.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Short random identifiers cut from a v4 UUID.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&self) -> String {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(ID_LEN);
        id
    }
}
