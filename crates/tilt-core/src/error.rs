use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TiltError {
    #[error("can't initialize tilt because {0} is not an element")]
    NotAnElement(String),
    #[error("no window available")]
    MissingWindow,
    #[error("no document available")]
    MissingDocument,
}
