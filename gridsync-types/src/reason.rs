use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a layout changed.
///
/// Parsing never fails: any tag that is not recognised maps to
/// [`ChangeReason::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeReason {
    /// An item was dragged to a new position.
    Drag,
    /// An item was resized.
    Resize,
    /// Programmatic update made on the server side.
    ServerUpdate,
    /// Missing, unrecognised, or mixed reason.
    #[default]
    Unknown,
}

impl ChangeReason {
    /// Classifies a client-supplied reason tag, case-insensitively.
    pub fn parse(tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return Self::Unknown;
        };
        match tag.trim().to_ascii_uppercase().as_str() {
            "DRAG" => Self::Drag,
            "RESIZE" => Self::Resize,
            "SERVER_UPDATE" => Self::ServerUpdate,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drag => "DRAG",
            Self::Resize => "RESIZE",
            Self::ServerUpdate => "SERVER_UPDATE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ChangeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
