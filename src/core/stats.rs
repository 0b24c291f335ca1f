//! Week stats aggregation - the single snapshot the admin view renders.
//!
//! Composes the week clock, the sign-in ledger, the drawing engine, and the
//! patron directory into one `WeekStats` value. The prize pool accumulates a
//! dollar per sign-in on top of the most recent drawing's unclaimed prize,
//! and resets the moment any drawing produces a winner.

use crate::{
    core::{drawing, patron, sign_in, week},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use tracing::warn;

/// Placeholder name when a drawn number no longer resolves to a patron.
const UNKNOWN_PATRON: &str = "Unknown";

/// Summary of the drawing already performed for the snapshot's week.
#[derive(Debug, Clone)]
pub struct LatestDrawingSummary {
    /// Assigned number that was drawn
    pub drawn_number: i32,
    /// Name of the drawn patron, or `"Unknown"` if the number resolves to
    /// nobody
    pub drawn_name: String,
    /// Whether the drawn patron had signed in and therefore won
    pub was_winner: bool,
}

/// The current-week snapshot consumed by the admin view.
#[derive(Debug, Clone)]
pub struct WeekStats {
    /// Calendar week number of the snapshot
    pub week_number: i32,
    /// Week new sign-ins count toward: one past `week_number` once this
    /// week's drawing is done
    pub effective_week: i32,
    /// Number of sign-ins recorded for the effective week
    pub sign_in_count: usize,
    /// Prize pool in whole dollars: a dollar per sign-in plus the previous
    /// drawing's prize if it went unclaimed
    pub prize_amount: i32,
    /// Whether this week's drawing has been performed
    pub is_drawing_done: bool,
    /// Details of this week's drawing, when done
    pub latest_drawing: Option<LatestDrawingSummary>,
}

/// Resolves a drawn number back to a patron name, best-effort.
///
/// The by-number lookup requires a row; only its specific not-found failure
/// degrades to the placeholder. Store errors still propagate.
async fn drawn_patron_name(db: &DatabaseConnection, drawn_number: i32) -> Result<String> {
    match patron::get_patron_by_number(db, drawn_number).await {
        Ok(drawn) => Ok(drawn.name),
        Err(Error::PatronNotFound { number }) => {
            warn!(number, "drawn number resolves to no patron");
            Ok(UNKNOWN_PATRON.to_string())
        }
        Err(e) => Err(e),
    }
}

/// Builds the stats snapshot for a given week number. This function:
///
/// 1. Looks up the week's drawing, if any
/// 2. Resolves the drawn number to a name for display (best-effort)
/// 3. Advances the effective week by one once the drawing is done, so new
///    sign-ins count toward next week
/// 4. Counts sign-ins for the effective week
/// 5. Carries forward the most recent drawing's prize iff it had no winner
///
/// The carry-forward consults only the single most recently created drawing:
/// a run of unclaimed weeks does not compound beyond that one hop.
pub async fn fetch_week_stats_for(db: &DatabaseConnection, week_number: i32) -> Result<WeekStats> {
    let this_week_drawing = drawing::get_drawing_for_week(db, week_number).await?;

    let latest_drawing = match &this_week_drawing {
        Some(drawn) => Some(LatestDrawingSummary {
            drawn_number: drawn.drawn_number,
            drawn_name: drawn_patron_name(db, drawn.drawn_number).await?,
            was_winner: drawn.winner_id.is_some(),
        }),
        None => None,
    };

    let effective_week = if this_week_drawing.is_some() {
        week_number + 1
    } else {
        week_number
    };

    let sign_in_count = sign_in::sign_ins_for_week(db, effective_week).await?.len();

    let previous_unclaimed = drawing::get_latest_drawing(db)
        .await?
        .filter(|d| d.winner_id.is_none())
        .map_or(0, |d| d.prize_amount);

    // Each sign-in contributes one dollar to the pot.
    let prize_amount = i32::try_from(sign_in_count)? + previous_unclaimed;

    Ok(WeekStats {
        week_number,
        effective_week,
        sign_in_count,
        prize_amount,
        is_drawing_done: this_week_drawing.is_some(),
        latest_drawing,
    })
}

/// Builds the stats snapshot for the current week.
pub async fn fetch_week_stats(db: &DatabaseConnection) -> Result<WeekStats> {
    fetch_week_stats_for(db, week::current_week()).await
}
