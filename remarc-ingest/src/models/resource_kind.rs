//! Resource kinds and their content collections

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of an uploaded file
///
/// Variants are declared in rank order, so the derived `Ord` is the
/// dominance order used when grouping: `Properties < Information < Image <
/// Audio < Video`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Directory-level `.properties` file
    Properties = 0,
    /// `.metadata` sidecar, inlined into the document
    Information = 1,
    Image = 2,
    Audio = 3,
    Video = 4,
}

impl ResourceKind {
    /// Numeric dominance rank
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Collection a group of this dominant kind is stored in
    pub fn collection(self) -> Option<Collection> {
        match self {
            Self::Image => Some(Collection::Images),
            Self::Audio => Some(Collection::Audio),
            Self::Video => Some(Collection::Video),
            Self::Properties | Self::Information => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Properties => "properties",
            Self::Information => "information",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document collection, one per content kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Images,
    Audio,
    Video,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Self::Images, Self::Audio, Self::Video];

    /// Collection (and table) name
    pub fn name(self) -> &'static str {
        match self {
            Self::Images => "images",
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }

    /// Content kind stored in this collection
    pub fn kind(self) -> ResourceKind {
        match self {
            Self::Images => ResourceKind::Image,
            Self::Audio => ResourceKind::Audio,
            Self::Video => ResourceKind::Video,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
