//! Error types for catalogue construction, input parsing, and solving.
//!
//! Infeasibility is not an error: a region that cannot be packed reports
//! `false`. Errors here are configuration problems for which no pack attempt
//! is meaningful, so they abort the whole run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A gift grid contained no filled cells, so no bounding box exists.
    #[error("gift {id} has no filled cells")]
    EmptyShape { id: usize },

    /// A region requires a gift id that is not in the catalogue.
    #[error("region {region} requires unknown gift {gift}")]
    UnknownGift { region: usize, gift: usize },

    /// A gift block did not match the `N:` header plus `#`/`.` rows format.
    #[error("malformed gift block: {0}")]
    MalformedGift(String),

    /// A region line did not match the `WxH: c0 c1 ...` format.
    #[error("malformed region line: {0}")]
    MalformedRegion(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
