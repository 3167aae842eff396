//! Timed animation schedule for a finished run.
//!
//! The search itself runs to completion before anything is drawn. A
//! [`Playback`] turns its [`Outcome`] into a list of timestamped [`Frame`]s:
//! visited nodes light up one per `visit_delay`, then the path is traced one
//! node per `path_delay`. The caller owns the clock and decides when each
//! frame is shown.

use std::ops::Range;
use std::time::Duration;

use gridpath_core::Coord;

use crate::run::Outcome;

/// Per-step delays for playback.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaybackConfig {
    pub visit_delay: Duration,
    pub path_delay: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            visit_delay: Duration::from_millis(10),
            path_delay: Duration::from_millis(50),
        }
    }
}

/// What a frame paints.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameKind {
    Visited,
    Path,
}

/// A single timed visual update.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Offset from the start of playback.
    pub at: Duration,
    pub coord: Coord,
    pub kind: FrameKind,
}

/// Ordered frames for one [`Outcome`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Playback {
    frames: Vec<Frame>,
}

impl Playback {
    pub fn new(outcome: &Outcome, config: &PlaybackConfig) -> Self {
        let visited = outcome.visited.iter().enumerate().map(|(i, &coord)| Frame {
            at: config.visit_delay.saturating_mul(i as u32),
            coord,
            kind: FrameKind::Visited,
        });

        let path_start = config
            .visit_delay
            .saturating_mul(outcome.visited.len() as u32);
        let path = outcome.path.iter().enumerate().map(|(j, &coord)| Frame {
            at: path_start.saturating_add(config.path_delay.saturating_mul(j as u32)),
            coord,
            kind: FrameKind::Path,
        });

        Self {
            frames: visited.chain(path).collect(),
        }
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Timestamp of the last frame.
    pub fn total_duration(&self) -> Duration {
        self.frames.last().map_or(Duration::ZERO, |f| f.at)
    }

    /// Frames due at or before `t`.
    pub fn frames_until(&self, t: Duration) -> &[Frame] {
        let end = self.frames.partition_point(|f| f.at <= t);
        &self.frames[..end]
    }

    /// Frames due in the half-open window `[window.start, window.end)`.
    ///
    /// Polling with consecutive windows yields every frame exactly once.
    pub fn frames_in(&self, window: Range<Duration>) -> &[Frame] {
        let lo = self.frames.partition_point(|f| f.at < window.start);
        let hi = self.frames.partition_point(|f| f.at < window.end);
        &self.frames[lo..hi.max(lo)]
    }
}

impl<'a> IntoIterator for &'a Playback {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
