use std::result;
use thiserror::Error;

/// The error type for operations on the ordered sets in this crate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The operation needs at least one key, but the set is empty.
    #[error("the collection is empty")]
    EmptyCollection,
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        assert_eq!(Error::EmptyCollection.to_string(), "the collection is empty");
    }
}
