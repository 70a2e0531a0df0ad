//! Time-windowed position history for each body
//!
//! Samples are stored oldest first. Timestamps and retention windows share
//! whatever unit the caller records in; the simulation driver uses seconds.

use std::collections::{BTreeMap, VecDeque};

use log::warn;
use nalgebra::Point3;

use crate::body::BodyId;

/// One recorded position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub position: Point3<f64>,
    pub timestamp: f64,
}

/// Ordered history of one body's positions
///
/// # Examples
///
/// ```
/// use orrery::trajectory::Trajectory;
/// use nalgebra::Point3;
///
/// let mut trajectory = Trajectory::new();
/// for day in 0..120 {
///     trajectory.record(Point3::new(day as f64, 0.0, 0.0), day as f64);
/// }
///
/// trajectory.prune(119.0, 90.0);
/// assert_eq!(trajectory.oldest().unwrap().timestamp, 29.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    samples: VecDeque<TrajectorySample>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sample at the newest end
    pub fn record(&mut self, position: Point3<f64>, timestamp: f64) {
        self.samples.push_back(TrajectorySample {
            position,
            timestamp,
        });
    }

    /// Drops every sample older than `retention` relative to `current_time`
    ///
    /// Keeps exactly the samples with `current_time - timestamp <= retention`,
    /// in their original order. If `current_time` is non-finite or earlier than
    /// the newest sample, time has gone backwards and the whole history is
    /// treated as stale.
    ///
    /// Returns the number of samples removed.
    pub fn prune(&mut self, current_time: f64, retention: f64) -> usize {
        let before = self.samples.len();

        if self.is_regression(current_time) {
            self.samples.clear();
            return before;
        }

        self.samples
            .retain(|sample| current_time - sample.timestamp <= retention);
        before - self.samples.len()
    }

    fn is_regression(&self, current_time: f64) -> bool {
        if !current_time.is_finite() {
            return true;
        }
        self.latest()
            .is_some_and(|newest| current_time < newest.timestamp)
    }

    pub fn samples(&self) -> impl ExactSizeIterator<Item = &TrajectorySample> + '_ {
        self.samples.iter()
    }

    /// Positions oldest first, e.g. for drawing a polyline
    pub fn positions(&self) -> impl Iterator<Item = Point3<f64>> + '_ {
        self.samples.iter().map(|s| s.position)
    }

    pub fn oldest(&self) -> Option<&TrajectorySample> {
        self.samples.front()
    }

    pub fn latest(&self) -> Option<&TrajectorySample> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Owned copy for consumers that outlive the borrow
    pub fn to_vec(&self) -> Vec<TrajectorySample> {
        self.samples.iter().copied().collect()
    }
}

/// Trajectories of every body, keyed by stable id
///
/// Iteration follows id order, which keeps output deterministic.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryTracker {
    histories: BTreeMap<BodyId, Trajectory>,
}

impl TrajectoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures `id` has a (possibly empty) history
    pub fn register(&mut self, id: BodyId) {
        self.histories.entry(id).or_default();
    }

    pub fn record(&mut self, id: BodyId, position: Point3<f64>, timestamp: f64) {
        self.histories
            .entry(id)
            .or_default()
            .record(position, timestamp);
    }

    /// Prunes one body's history; see [`Trajectory::prune`]
    ///
    /// Returns the number of samples removed, 0 for unknown ids.
    pub fn prune(&mut self, id: BodyId, current_time: f64, retention: f64) -> usize {
        let Some(trajectory) = self.histories.get_mut(&id) else {
            return 0;
        };

        let newest = trajectory.latest().map(|s| s.timestamp);
        let regressed = trajectory.is_regression(current_time);
        let removed = trajectory.prune(current_time, retention);
        if let (true, Some(newest)) = (regressed, newest) {
            warn!(
                "clock went from {newest} to {current_time} for body {id}; dropped {removed} stale trajectory samples"
            );
        }
        removed
    }

    /// Prunes every history against the same clock
    pub fn prune_all(&mut self, current_time: f64, retention: f64) -> usize {
        let ids: Vec<BodyId> = self.histories.keys().copied().collect();
        ids.into_iter()
            .map(|id| self.prune(id, current_time, retention))
            .sum()
    }

    pub fn get(&self, id: BodyId) -> Option<&Trajectory> {
        self.histories.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Trajectory)> + '_ {
        self.histories.iter().map(|(id, t)| (*id, t))
    }

    pub fn len(&self) -> usize {
        self.histories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histories.is_empty()
    }
}
