use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{name} must be positive, got {value}")]
    InvalidArgument { name: &'static str, value: usize },
    #[error("probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("site ({row}, {col}) is outside of the {n}x{n} grid")]
    OutOfRange { row: usize, col: usize, n: usize },
    #[error("element {element} is outside of a forest of {capacity} elements")]
    ElementOutOfRange { element: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn ensure_positive(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(Error::InvalidArgument { name, value });
    }
    Ok(())
}
