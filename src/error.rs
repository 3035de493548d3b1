use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("modulus must be positive")]
    ZeroModulus,

    #[error("modulus {modulus} is not prime")]
    CompositeModulus { modulus: u64 },

    #[error("modulus {modulus} must exceed the table bound {n}")]
    ModulusTooSmall { n: usize, modulus: u64 },

    #[error("{n} is outside the precomputed range 0..={bound}")]
    OutOfRange { n: u64, bound: usize },

    #[error("{value} has no inverse modulo {modulus}")]
    NotInvertible { value: u64, modulus: u64 },

    #[error("no available tokens left")]
    UnexpectedEof,

    #[error("failed to parse token {token:?}")]
    Parse { token: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
