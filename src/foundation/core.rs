use std::fmt;

/// Pixel dimensions shared by the source and every rendered frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Dimensions of `img`.
    pub fn of(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self { width, height }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}

/// How often a player should repeat the animation.
///
/// GIF stores a repeat count in the NETSCAPE application extension where `0`
/// means forever and `n` means "play `n` more times after the first pass".
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    /// Stored value 0.
    Forever,
    /// Stored value 1: the first pass plus one extra, two playbacks in total.
    ExtraPass,
}

impl LoopMode {
    /// `true` maps to [`LoopMode::Forever`], `false` to [`LoopMode::ExtraPass`].
    pub fn from_loop_forever(loop_forever: bool) -> Self {
        if loop_forever {
            Self::Forever
        } else {
            Self::ExtraPass
        }
    }

    /// Whether the animation repeats without end.
    pub fn is_forever(self) -> bool {
        matches!(self, Self::Forever)
    }

    /// Finite repeat count, or `None` for an infinite loop.
    pub fn repeat_count(self) -> Option<u16> {
        match self {
            Self::Forever => None,
            Self::ExtraPass => Some(1),
        }
    }
}

impl fmt::Display for LoopMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forever => f.write_str("∞ loop"),
            Self::ExtraPass => f.write_str("play twice"),
        }
    }
}

/// Per-frame display time in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameDelay(pub u32);

impl FrameDelay {
    /// Largest delay GIF can store (u16 centiseconds).
    pub const MAX_MS: u32 = u16::MAX as u32 * 10;

    /// Requested delay in milliseconds.
    pub fn ms(self) -> u32 {
        self.0
    }

    /// Delay in GIF units, rounded to the nearest 10 ms and never 0.
    pub fn centiseconds(self) -> u16 {
        let cs = (self.0 + 5) / 10;
        cs.clamp(1, u32::from(u16::MAX)) as u16
    }

    /// Whether GIF can store this delay without rounding.
    pub fn is_exact_in_gif(self) -> bool {
        self.0.is_multiple_of(10)
    }
}
