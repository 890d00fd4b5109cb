use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    #[error("invalid format {given:?}; supported formats: {}", .accepted.join(", "))]
    InvalidFormat {
        given: String,
        accepted: Vec<&'static str>,
    },
}
