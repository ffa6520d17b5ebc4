//! Keyboard commands and scripted key presses

use crate::io::error::{SketchError, invalid_parameter};
use std::str::FromStr;

/// Action a key press requests from the sketch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchCommand {
    /// Flip the animation flag, reseeding trails when it turns on
    ToggleAnimation,
}

/// Command bound to `key`, if any
///
/// Only `a` and `A` are bound.
pub const fn command_for_key(key: char) -> Option<SketchCommand> {
    match key {
        'a' | 'A' => Some(SketchCommand::ToggleAnimation),
        _ => None,
    }
}

/// A key pressed just before the given frame is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// Zero-based frame index
    pub frame: usize,
    /// Key character
    pub key: char,
}

impl FromStr for KeyPress {
    type Err = SketchError;

    /// Parses `FRAME:KEY`, e.g. `30:a`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (frame, key) = s
            .split_once(':')
            .ok_or_else(|| invalid_parameter("key", &s, &"expected FRAME:KEY"))?;

        let frame = frame
            .trim()
            .parse::<usize>()
            .map_err(|e| invalid_parameter("key", &s, &format!("bad frame index: {e}")))?;

        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(pressed), None) => Ok(Self {
                frame,
                key: pressed,
            }),
            _ => Err(invalid_parameter(
                "key",
                &s,
                &"key must be a single character",
            )),
        }
    }
}

/// Key presses ordered by frame, replayed as frames are drawn
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyScript {
    presses: Vec<KeyPress>,
}

impl KeyScript {
    /// Script from unordered presses; presses on the same frame keep their order
    pub fn new(mut presses: Vec<KeyPress>) -> Self {
        presses.sort_by_key(|press| press.frame);
        Self { presses }
    }

    /// Keys pressed before `frame`, in press order
    pub fn keys_at(&self, frame: usize) -> impl Iterator<Item = char> + '_ {
        self.presses
            .iter()
            .filter(move |press| press.frame == frame)
            .map(|press| press.key)
    }

    /// Number of scripted presses
    pub const fn len(&self) -> usize {
        self.presses.len()
    }

    /// True when nothing is scripted
    pub const fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }
}
