//! Origin of a resource as reported by group listings.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Where a group (or other resource) was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceType {
    /// Created directly on Greenfield.
    SourceTypeOrigin,
    /// Mirrored from BNB Smart Chain.
    SourceTypeBscCrossChain,
    /// Mirror request pending.
    SourceTypeMirrorPending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names() {
        assert_eq!(SourceType::SourceTypeOrigin.as_ref(), "SOURCE_TYPE_ORIGIN");
        assert_eq!(
            SourceType::SourceTypeBscCrossChain.to_string(),
            "SOURCE_TYPE_BSC_CROSS_CHAIN"
        );
        assert_eq!(
            serde_json::to_string(&SourceType::SourceTypeMirrorPending).unwrap(),
            "\"SOURCE_TYPE_MIRROR_PENDING\""
        );
    }
}
