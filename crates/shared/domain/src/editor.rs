//! Fixed configuration handed verbatim to the rich-editor constructor.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Boolean editor options. The production widget runs with all of them off.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct EditorFlags: u32 {
        const AUTO_DOWNLOAD_FONT_AWESOME = 1 << 0;
        const SPELL_CHECKER = 1 << 1;
        const STATUS = 1 << 2;

        const ALL = Self::AUTO_DOWNLOAD_FONT_AWESOME.bits()
            | Self::SPELL_CHECKER.bits()
            | Self::STATUS.bits();
    }
}

impl From<&str> for EditorFlags {
    fn from(s: &str) -> Self {
        match s {
            "auto-download-font-awesome" => Self::AUTO_DOWNLOAD_FONT_AWESOME,
            "spell-checker" => Self::SPELL_CHECKER,
            "status" => Self::STATUS,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for EditorFlags {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for EditorFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for EditorFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bits(u32),
            Names(Vec<String>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Bits(bits) => Self::from(bits),
            Repr::Names(names) => {
                names.iter().fold(Self::empty(), |acc, name| acc | Self::from(name.as_str()))
            },
        })
    }
}

/// One toolbar entry. `|` is a visual separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolbarItem {
    Bold,
    Italic,
    Heading,
    #[serde(rename = "|")]
    Separator,
    UnorderedList,
    OrderedList,
    Link,
    Preview,
    Guide,
}

impl ToolbarItem {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Heading => "heading",
            Self::Separator => "|",
            Self::UnorderedList => "unordered-list",
            Self::OrderedList => "ordered-list",
            Self::Link => "link",
            Self::Preview => "preview",
            Self::Guide => "guide",
        }
    }
}

impl fmt::Display for ToolbarItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration supplied to every widget construction.
///
/// Opaque to the activation logic: it is cloned once into the gate and
/// passed by reference to the constructor without inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub toolbar: Vec<ToolbarItem>,
    pub flags: EditorFlags,
}

impl Default for EditorConfig {
    fn default() -> Self {
        use ToolbarItem::{
            Bold, Guide, Heading, Italic, Link, OrderedList, Preview, Separator, UnorderedList,
        };

        Self {
            toolbar: vec![
                Bold,
                Italic,
                Heading,
                Separator,
                UnorderedList,
                OrderedList,
                Separator,
                Link,
                Separator,
                Preview,
                Guide,
            ],
            flags: EditorFlags::empty(),
        }
    }
}
