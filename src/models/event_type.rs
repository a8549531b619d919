use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    In,
    Out,
}

impl EventType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventType::In => "in",
            EventType::Out => "out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(EventType::In),
            "out" => Some(EventType::Out),
            _ => None,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EventType::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, EventType::Out)
    }
}
