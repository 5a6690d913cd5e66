//! Windowed hour-of-day aggregation of measurement groups

use crate::{DailyProfile, DateWindow, HourlyGroup};
use airq_common::HOURS_PER_DAY;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of one aggregation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    /// Profiles in `[working days, weekend]` order
    pub profiles: [DailyProfile; 2],
    /// Number of input groups that held any record (0, 1 or 2)
    pub coverage: usize,
}

impl Aggregation {
    /// Both day types have data, so a comparison chart can be drawn
    pub fn is_sufficient(&self) -> bool {
        self.coverage == self.profiles.len()
    }
}

/// Computes average daily profiles over a date window.
///
/// Stateless: every call recomputes from the groups, and identical inputs
/// give identical profiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator;

impl Aggregator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate both groups over `window`
    #[instrument(skip(self, groups, window), fields(start = %window.start(), end = %window.end()))]
    pub fn aggregate(&self, groups: &[HourlyGroup; 2], window: &DateWindow) -> Aggregation {
        let mut coverage = 0;
        let profiles = groups.each_ref().map(|group| {
            if group.is_empty() {
                DailyProfile::empty()
            } else {
                coverage += 1;
                self.profile(group, window)
            }
        });

        debug!(coverage, "Aggregated daily profiles");
        Aggregation { profiles, coverage }
    }

    /// Mean value per hour for records dated inside `window`
    pub fn profile(&self, group: &HourlyGroup, window: &DateWindow) -> DailyProfile {
        let mut profile = DailyProfile::empty();

        for (hour, records) in group.iter() {
            let hour = usize::from(hour);
            if hour >= HOURS_PER_DAY {
                continue;
            }

            let (sum, count) = records
                .iter()
                .filter(|record| window.contains(record.date()))
                .fold((0.0, 0usize), |(sum, count), record| {
                    (sum + record.value(), count + 1)
                });

            if count > 0 {
                profile.set(hour, sum / count as f64);
            }
        }

        profile
    }
}
