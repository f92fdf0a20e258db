//! Animation encoding and output.

/// GIF encoder behind the [`AnimationEncoder`](gif::AnimationEncoder) capability.
pub mod gif;
/// All-or-nothing file output.
pub mod output;
