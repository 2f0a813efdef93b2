//! One-shot gesture listener used to unlock audio under autoplay rules.

use serde::{Deserialize, Serialize};

/// Document-level gesture types that may unlock audio
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureKind {
    TouchStart,
    TouchEnd,
    Click,
    KeyDown,
}

impl GestureKind {
    pub const ALL: [GestureKind; 4] = [
        GestureKind::TouchStart,
        GestureKind::TouchEnd,
        GestureKind::Click,
        GestureKind::KeyDown,
    ];

    fn bit(self) -> u8 {
        match self {
            GestureKind::TouchStart => 1,
            GestureKind::TouchEnd => 1 << 1,
            GestureKind::Click => 1 << 2,
            GestureKind::KeyDown => 1 << 3,
        }
    }
}

/// Tracks which gesture types have already fired.
///
/// Each type fires once; different types fire independently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureLatch {
    fired: u8,
}

impl GestureLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time `kind` is seen.
    pub fn fire(&mut self, kind: GestureKind) -> bool {
        let bit = kind.bit();
        if self.fired & bit != 0 {
            return false;
        }
        self.fired |= bit;
        true
    }

    pub fn has_fired(&self, kind: GestureKind) -> bool {
        self.fired & kind.bit() != 0
    }

    /// Every listener has been consumed
    pub fn exhausted(&self) -> bool {
        GestureKind::ALL.iter().all(|k| self.has_fired(*k))
    }
}
