use core::fmt;

/// Contract violations raised by grid construction and the automaton engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A dimension was zero or above [`MAX_WIDTH`](crate::grid::MAX_WIDTH) /
    /// [`MAX_HEIGHT`](crate::grid::MAX_HEIGHT).
    InvalidDimensions { width: usize, height: usize },
    /// Input and output grids of a step disagree in size.
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {}x{}", width, height)
            }
            Error::DimensionMismatch { expected, found } => write!(
                f,
                "grid dimension mismatch: expected {}x{}, found {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
        }
    }
}
