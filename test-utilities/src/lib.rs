use thiserror::Error;


#[derive(Error, Clone, Debug)]
pub enum TestError {
    #[error("range error: {0}")]
    InvalidRange(#[from] range_list::error::InvalidRangeError),
}

pub type TestResult = Result<(), TestError>;
