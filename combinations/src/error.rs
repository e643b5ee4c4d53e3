use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
	#[error("invalid argument: {0}")]
	InvalidArgument(&'static str),
	#[error("expected {expected} values, got {actual}")]
	SizeMismatch { expected: usize, actual: usize },
	#[error("overflow in {0}")]
	Overflow(&'static str),
	#[error("underflow in {0}")]
	Underflow(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
	if expected == actual { Ok(()) }
	else { Err(Error::SizeMismatch { expected, actual }) }
}
