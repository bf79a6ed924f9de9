//! Roster reconciliation across the scraped and official sources.
//!
//! The scraped per-game player tables and the officially published
//! rosters disagree about who actually played. This crate resolves each
//! scraped game to its official match, unions the two player lists per
//! team keyed by jersey number, and assembles the final per-game dataset
//! with provenance tagging.
//!
//! Policy: the official roster is the authority on who was rostered; the
//! scraped source is the authority on actual ice time, but only when the
//! official roster corroborates the player. A player seen by one source
//! only is normalized to "00:00" ice time.

pub mod assemble;
pub mod matching;
pub mod report;
pub mod types;
pub mod union;

pub use assemble::{assemble_all, assemble_game};
pub use matching::{resolve_all, resolve_match_id};
pub use report::RunReport;
pub use types::{FinalGame, PlayerOrigin, ReconciledPlayer};
pub use union::union_players;
