//! Read-only consumer of the reconciled game dataset: which players were
//! credited with no ice time, per team and over the season.

pub mod aggregation;

pub use aggregation::{
    count_by_team, zero_toi_frequency, zero_toi_players, DashboardFilter, FrequencyEntry,
    TeamCount, ZeroToiEntry,
};
