//! Run result and export structure.

use serde::Serialize;
use tracing::info;

use crate::lifecycle::MatchPhase;
use crate::series::NetWorthSeries;

/// Everything a finished run learned about the match.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    /// Phase the match had reached when the stream ended.
    pub phase: MatchPhase,
    /// Winning team code, if the match ended.
    pub winner: Option<i32>,
    /// Match start time, if the match started.
    pub start_time: Option<f32>,
    /// Match end time, if the match ended.
    pub end_time: Option<f32>,
    /// Last observed elapsed game time, in whole seconds.
    pub final_game_time: i32,
    /// Sampled net worth per roster slot.
    pub net_worth: NetWorthSeries,
    /// Number of snapshots the dispatcher received.
    pub snapshots_seen: u64,
}

impl RunResult {
    /// `end_time - start_time`, if the match ended.
    pub fn duration(&self) -> Option<f32> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Borrow the structured export for serialization.
    pub const fn export(&self) -> TimeSeriesExport<'_> {
        TimeSeriesExport {
            time_series: TimeSeries {
                net_worth: &self.net_worth,
            },
        }
    }

    /// Log the human-readable match summary.
    pub fn log_summary(&self) {
        info!(
            phase = ?self.phase,
            winner = ?self.winner,
            start_time = ?self.start_time,
            end_time = ?self.end_time,
            duration = ?self.duration(),
            final_game_time = self.final_game_time,
            samples = self.net_worth.len(),
            final_net_worth = ?self.net_worth.latest(),
            snapshots = self.snapshots_seen,
            "parse complete"
        );
    }
}

/// Top-level export document: `{"TimeSeries": {"Net Worth": [...]}}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimeSeriesExport<'a> {
    /// All time series produced by the run.
    #[serde(rename = "TimeSeries")]
    pub time_series: TimeSeries<'a>,
}

/// The time series group of the export document.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimeSeries<'a> {
    /// Net worth per roster slot, in roster order.
    #[serde(rename = "Net Worth")]
    pub net_worth: &'a NetWorthSeries,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn finished() -> RunResult {
        let mut net_worth = NetWorthSeries::new();
        net_worth.push([600; 10]);
        net_worth.push([1200; 10]);
        RunResult {
            phase: MatchPhase::Ended,
            winner: Some(2),
            start_time: Some(10.0),
            end_time: Some(130.0),
            final_game_time: 60,
            net_worth,
            snapshots_seen: 6,
        }
    }

    #[test]
    fn duration_requires_both_ends() {
        let mut result = finished();
        assert_eq!(result.duration(), Some(120.0));
        result.end_time = None;
        assert_eq!(result.duration(), None);
    }

    #[test]
    fn last_sample_is_reported() {
        assert_eq!(finished().net_worth.latest(), Some([1200; 10]));
        let empty = RunResult {
            net_worth: NetWorthSeries::new(),
            ..finished()
        };
        assert_eq!(empty.net_worth.latest(), None);
        empty.log_summary();
    }

    #[test]
    fn export_shape() {
        let result = finished();
        let value = serde_json::to_value(result.export()).unwrap();
        let series = &value["TimeSeries"]["Net Worth"];
        assert_eq!(series.as_array().map(Vec::len), Some(10));
        assert_eq!(series[0], serde_json::json!([600, 1200]));
        assert_eq!(series[9], serde_json::json!([600, 1200]));
        assert_eq!(value.as_object().map(serde_json::Map::len), Some(1));
    }
}
