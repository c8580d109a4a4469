//! Fixed style palette
//!
//! The writer never builds formatting itself. A stylesheet with four cell
//! formats is registered once when the document is created, and every cell
//! refers to one of them by index. [`StylePalette`] is the handle that maps
//! the semantic slots to those indices.

use std::fmt;

/// Semantic style slots available to cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaletteStyle {
    /// Plain cell
    Default,
    /// Bold white text on a blue fill
    Header,
    /// Thin border on all four edges
    Bordered,
    /// Thin border with a red fill
    Highlighted,
}

impl PaletteStyle {
    /// All slots, in registration order
    pub const ALL: [PaletteStyle; 4] = [
        PaletteStyle::Default,
        PaletteStyle::Header,
        PaletteStyle::Bordered,
        PaletteStyle::Highlighted,
    ];
}

/// Opaque index of a registered cell format
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleId(u32);

impl StyleId {
    /// Wrap a raw format index
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Raw format index as written into the `s` attribute
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mapping from palette slot to registered format index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StylePalette {
    ids: [StyleId; 4],
}

impl StylePalette {
    /// Create a palette from the indices the stylesheet assigned to each slot
    pub fn new(default: StyleId, header: StyleId, bordered: StyleId, highlighted: StyleId) -> Self {
        Self {
            ids: [default, header, bordered, highlighted],
        }
    }

    /// Get the format index for a slot
    pub fn get(&self, style: PaletteStyle) -> StyleId {
        self.ids[Self::slot(style)]
    }

    /// Plain cell format
    pub fn default_style(&self) -> StyleId {
        self.get(PaletteStyle::Default)
    }

    /// Header format
    pub fn header(&self) -> StyleId {
        self.get(PaletteStyle::Header)
    }

    /// Bordered format
    pub fn bordered(&self) -> StyleId {
        self.get(PaletteStyle::Bordered)
    }

    /// Bordered and highlighted format
    pub fn highlighted(&self) -> StyleId {
        self.get(PaletteStyle::Highlighted)
    }

    /// Iterate over all slots with their indices
    pub fn iter(&self) -> impl Iterator<Item = (PaletteStyle, StyleId)> + '_ {
        PaletteStyle::ALL.iter().map(move |&s| (s, self.get(s)))
    }

    fn slot(style: PaletteStyle) -> usize {
        match style {
            PaletteStyle::Default => 0,
            PaletteStyle::Header => 1,
            PaletteStyle::Bordered => 2,
            PaletteStyle::Highlighted => 3,
        }
    }
}
