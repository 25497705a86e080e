//! Media mask: a 64-bit bitfield, one bit per media type.
//!
//! Spec: §6 — "A 64-bit bitfield: one bit per CSS media type (screen, print,
//! aural, braille, …). A sheet's mask is ANDed with the query mask; non-zero
//! means applicable."

/// One bit per recognized CSS 2.1 media type. `Other` is a catch-all for
/// media types the parser didn't recognize by name but still needs to carry
/// a bit for (so an unknown-but-present media query doesn't silently vanish
/// from every mask it's ORed into).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum MediaType {
    Screen = 0,
    Print = 1,
    Aural = 2,
    Braille = 3,
    Embossed = 4,
    Handheld = 5,
    Projection = 6,
    Tty = 7,
    Tv = 8,
    Speech = 9,
    Other = 10,
}

/// A 64-bit bitfield, one bit per [`MediaType`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MediaMask(pub u64);

impl MediaMask {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(u64::MAX);

    #[must_use]
    pub const fn single(media_type: MediaType) -> Self {
        Self(1u64 << media_type as u32)
    }

    #[must_use]
    pub const fn with(self, media_type: MediaType) -> Self {
        Self(self.0 | (1u64 << media_type as u32))
    }

    /// A sheet's mask is ANDed with the query mask; non-zero means
    /// applicable (§6).
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }
}
