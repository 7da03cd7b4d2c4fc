use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShamirError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShamirError {
    #[error("invalid input: {values} values supplied for {indices} indices")]
    InvalidInput { values: usize, indices: usize },
    #[error("share index at position {0} is zero")]
    ZeroIndex(usize),
    #[error("duplicate share index at positions {0} and {1}")]
    DuplicateIndex(usize, usize),
    #[error("polynomial must have at least one coefficient")]
    EmptyPolynomial,
    #[error("invalid sharing parameters: threshold {threshold}, share count {share_count}")]
    InvalidParameters { threshold: usize, share_count: usize },
    #[error("{supplied} shares supplied, {required} required")]
    InsufficientShares { supplied: usize, required: usize },
    #[error("value is not a canonical scalar modulo the group order")]
    NonCanonicalScalar,
    #[error("bytes do not encode a point on the curve")]
    InvalidPoint,
    #[error("the identity point has no affine coordinates")]
    IdentityPoint,
    #[error("private key must be non-zero")]
    ZeroSecretKey,
    #[error("signature verification failed")]
    InvalidSignature,
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ShamirError {
    fn from(e: serde_json::Error) -> Self {
        ShamirError::Config(e.to_string())
    }
}
