use std::fmt;

/// The lenient parser itself never fails; the only fallible path is writing
/// serialized output into a caller-provided sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairErrorKind {
    Io(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairError {
    pub kind: RepairErrorKind,
}

impl RepairError {
    pub(crate) fn io(err: std::io::Error) -> Self {
        Self {
            kind: RepairErrorKind::Io(err.to_string()),
        }
    }
}

impl fmt::Display for RepairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RepairErrorKind::Io(msg) => write!(f, "io write error: {}", msg),
        }
    }
}

impl std::error::Error for RepairError {}
