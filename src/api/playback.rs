use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ExplorerError, ExplorerResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    Stopped,
    Playing,
}

/// Year range written by one playback tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackFrame {
    pub year_min: i32,
    pub year_max: i32,
}

/// Cooperative repeating sweep of the year-range upper bound.
///
/// The host drives time through [`PlaybackController::advance`]; there is no
/// background timer, so stopping simply drops the schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackController {
    interval: Duration,
    schedule: Option<PlaybackSchedule>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PlaybackSchedule {
    start_year: i32,
    end_year: i32,
    upper_year: i32,
    pending: Duration,
}

impl PlaybackController {
    pub fn new(interval: Duration) -> ExplorerResult<Self> {
        if interval.is_zero() {
            return Err(ExplorerError::InvalidData(
                "playback interval must be > 0".to_owned(),
            ));
        }
        Ok(Self {
            interval,
            schedule: None,
        })
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        if self.schedule.is_some() {
            PlaybackState::Playing
        } else {
            PlaybackState::Stopped
        }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.schedule.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Starts a sweep from the current range; a running sweep is replaced.
    pub fn start(&mut self, year_min: i32, year_max: i32, upper_year: i32) {
        debug!(year_min, year_max, upper_year, "playback start");
        self.schedule = Some(PlaybackSchedule {
            start_year: year_min,
            end_year: year_max,
            upper_year,
            pending: Duration::ZERO,
        });
    }

    pub fn stop(&mut self) {
        if self.schedule.take().is_some() {
            debug!("playback stop");
        }
    }

    /// Play/pause button semantics. Returns the new state.
    pub fn toggle(&mut self, year_min: i32, year_max: i32, upper_year: i32) -> PlaybackState {
        if self.is_playing() {
            self.stop();
        } else {
            self.start(year_min, year_max, upper_year);
        }
        self.state()
    }

    /// Accumulates elapsed time and returns one frame per due tick.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<PlaybackFrame> {
        let interval = self.interval;
        let Some(schedule) = self.schedule.as_mut() else {
            return Vec::new();
        };

        schedule.pending = schedule.pending.saturating_add(elapsed);
        let mut frames = Vec::new();
        while schedule.pending >= interval {
            schedule.pending -= interval;
            frames.push(schedule.tick());
        }
        frames
    }

    /// Fires one tick immediately, ignoring accumulated time.
    pub fn tick(&mut self) -> Option<PlaybackFrame> {
        self.schedule.as_mut().map(PlaybackSchedule::tick)
    }
}

impl PlaybackSchedule {
    fn tick(&mut self) -> PlaybackFrame {
        self.end_year = self.end_year.saturating_add(1);
        if self.end_year > self.upper_year {
            self.end_year = self.start_year.saturating_add(1).min(self.upper_year);
        }
        // Never let the sweep invert the range when the start sits at the bound.
        self.end_year = self.end_year.max(self.start_year);
        trace!(
            start_year = self.start_year,
            end_year = self.end_year,
            "playback tick"
        );
        PlaybackFrame {
            year_min: self.start_year,
            year_max: self.end_year,
        }
    }
}
