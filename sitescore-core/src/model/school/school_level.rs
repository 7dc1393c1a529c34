use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SchoolLevel {
    Elementary,
    Middle,
    High,
}

impl std::fmt::Display for SchoolLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchoolLevel::Elementary => write!(f, "elementary"),
            SchoolLevel::Middle => write!(f, "middle"),
            SchoolLevel::High => write!(f, "high"),
        }
    }
}
