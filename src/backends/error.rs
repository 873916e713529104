#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PointError {
    #[error("invalid input lenght: expected {expected}, received {received}")]
    InvalidInputLenght { expected: usize, received: usize },
    #[error("input is not canonical")]
    NonCanonicalInput,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ScalarError {
    #[error("invalid input lenght: expected {expected}, received {received}")]
    InvalidInputLenght { expected: usize, received: usize },
    #[error("input is not canonical")]
    NonCanonicalInput,
}
