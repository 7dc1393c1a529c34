use serde::{Deserialize, Serialize};

/// whether an activity point contributes positively or negatively to the
/// desirable/undesirable activities criterion.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Desirable,
    Undesirable,
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityKind::Desirable => write!(f, "desirable"),
            ActivityKind::Undesirable => write!(f, "undesirable"),
        }
    }
}
