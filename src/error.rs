use thiserror::Error;

/// Failure to get hold of a browser primitive. The page keeps working
/// without the effect that needed it.
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("no window available")]
    NoWindow,
    #[error("intersection observer unavailable: {0}")]
    Observer(String),
    #[error("local storage unavailable: {0}")]
    Storage(String),
}
