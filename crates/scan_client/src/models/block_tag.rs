use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pre-defined block parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    Earliest,
    Pending,
    #[default]
    Latest,
}

impl BlockTag {
    /// Lowercase wire form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BlockTag::Earliest => "earliest",
            BlockTag::Pending => "pending",
            BlockTag::Latest => "latest",
        }
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "earliest" => Ok(BlockTag::Earliest),
            "pending" => Ok(BlockTag::Pending),
            "latest" => Ok(BlockTag::Latest),
            _ => Err(format!("Unknown block tag: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tag_is_latest() {
        assert_eq!(BlockTag::default(), BlockTag::Latest);
        assert_eq!(None::<BlockTag>.unwrap_or_default().to_string(), "latest");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Pending".parse::<BlockTag>().unwrap(), BlockTag::Pending);
        assert_eq!("EARLIEST".parse::<BlockTag>().unwrap(), BlockTag::Earliest);
        assert!("finalized".parse::<BlockTag>().is_err());
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&BlockTag::Pending).unwrap(), "\"pending\"");
        let tag: BlockTag = serde_json::from_str("\"earliest\"").unwrap();
        assert_eq!(tag, BlockTag::Earliest);
    }
}
