//! Drawing engine business logic - the weekly random selection and its
//! persisted outcome.
//!
//! Each week is in one of two states: Pending (no drawing row) or Drawn (a
//! row exists). [`perform_drawing`] moves Pending to Drawn;
//! [`reset_drawing`] reverts it for administrative correction. The draw is
//! uniform over the FULL patron directory, not the signed-in subset: every
//! registrant is equally likely to be drawn, and sign-in only gates whether
//! they can collect.

use crate::{
    entities::{Drawing, drawing, patron},
    errors::{Error, Result},
};
use chrono::Utc;
use rand::Rng;
use sea_orm::{QueryOrder, Set, prelude::*};
use std::collections::HashSet;
use tracing::info;

/// The outcome of one weekly drawing, for the caller to announce.
#[derive(Debug, Clone)]
pub struct DrawingResult {
    /// The randomly drawn patron
    pub selected_patron: patron::Model,
    /// Whether the drawn patron had signed in this week
    pub is_winner: bool,
    /// Whether nobody at all signed in this week
    pub no_sign_ins: bool,
    /// The prize pool that was at stake, in whole dollars
    pub prize_amount: i32,
}

/// Picks one patron uniformly at random, or None from an empty list.
///
/// Uniformity over the full candidate list is the fairness rule of the
/// raffle and must not be narrowed to the signed-in subset.
pub fn pick_uniform<'a, R: Rng + ?Sized>(
    patrons: &'a [patron::Model],
    rng: &mut R,
) -> Option<&'a patron::Model> {
    if patrons.is_empty() {
        return None;
    }
    Some(&patrons[rng.gen_range(0..patrons.len())])
}

/// Performs the weekly drawing with the thread-local RNG.
pub async fn perform_drawing(
    db: &DatabaseConnection,
    week_number: i32,
    prize_amount: i32,
    all_patrons: &[patron::Model],
    signed_in_ids: &HashSet<Uuid>,
) -> Result<DrawingResult> {
    perform_drawing_with_rng(
        db,
        week_number,
        prize_amount,
        all_patrons,
        signed_in_ids,
        &mut rand::thread_rng(),
    )
    .await
}

/// Performs the weekly drawing with a caller-supplied RNG. This function:
///
/// 1. Fails with [`Error::NoPatrons`] when the directory is empty
/// 2. Selects one patron uniformly at random from the full directory
/// 3. Checks the selected patron against this week's signed-in set
/// 4. Persists one drawing row, with a null winner when the drawn patron
///    had not signed in
/// 5. Returns the selection and flags for the caller to render
///
/// `no_sign_ins` is reported separately so the admin view can announce that
/// nobody was eligible at all, even though `is_winner` is already false in
/// that case.
pub async fn perform_drawing_with_rng<R: Rng>(
    db: &DatabaseConnection,
    week_number: i32,
    prize_amount: i32,
    all_patrons: &[patron::Model],
    signed_in_ids: &HashSet<Uuid>,
    rng: &mut R,
) -> Result<DrawingResult> {
    let selected = pick_uniform(all_patrons, rng).ok_or(Error::NoPatrons)?;

    let is_winner = signed_in_ids.contains(&selected.id);
    let no_sign_ins = signed_in_ids.is_empty();

    drawing::ActiveModel {
        created_at: Set(Utc::now()),
        week_number: Set(week_number),
        drawn_number: Set(selected.assigned_number),
        winner_id: Set(is_winner.then_some(selected.id)),
        prize_amount: Set(prize_amount),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(
        week_number,
        drawn_number = selected.assigned_number,
        is_winner,
        "recorded weekly drawing"
    );

    Ok(DrawingResult {
        selected_patron: selected.clone(),
        is_winner,
        no_sign_ins,
        prize_amount,
    })
}

/// Looks up the drawing for a week, if one has been performed.
/// Absence is the normal Pending state, not an error.
pub async fn get_drawing_for_week(
    db: &DatabaseConnection,
    week_number: i32,
) -> Result<Option<drawing::Model>> {
    Drawing::find()
        .filter(drawing::Column::WeekNumber.eq(week_number))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Fetches the most recently created drawing across all weeks, if any.
/// This single row is the only history the prize rollover consults.
pub async fn get_latest_drawing(db: &DatabaseConnection) -> Result<Option<drawing::Model>> {
    Drawing::find()
        .order_by_desc(drawing::Column::CreatedAt)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Deletes the drawing for a week, returning it to the Pending state so
/// sign-ins count toward the current week again instead of rolling to the
/// next. Fails with [`Error::DrawingNotFound`] when no drawing exists.
/// Intended for administrative correction, not normal operation.
pub async fn reset_drawing(db: &DatabaseConnection, week_number: i32) -> Result<()> {
    let existing = get_drawing_for_week(db, week_number)
        .await?
        .ok_or(Error::DrawingNotFound { week: week_number })?;

    Drawing::delete_by_id(existing.id).exec(db).await?;
    info!(week_number, "drawing reset");
    Ok(())
}

/// Runs the full weekly drawing flow the way the admin view does: take the
/// current week's stats snapshot, refuse if this week is already drawn,
/// gather the candidate pool and signed-in set, then perform the drawing
/// with the snapshot's prize pool.
pub async fn run_weekly_drawing(db: &DatabaseConnection) -> Result<DrawingResult> {
    let stats = crate::core::stats::fetch_week_stats(db).await?;
    if stats.is_drawing_done {
        return Err(Error::DrawingAlreadyDone {
            week: stats.week_number,
        });
    }

    let signed_in: HashSet<Uuid> =
        crate::core::sign_in::sign_in_ids_for_week(db, stats.week_number)
            .await?
            .into_iter()
            .collect();
    let all_patrons = crate::core::patron::get_all_patrons(db).await?;

    perform_drawing(
        db,
        stats.week_number,
        stats.prize_amount,
        &all_patrons,
        &signed_in,
    )
    .await
}

/// Formats a drawing result into the announcement shown to the admin.
///
/// The three cases are mutually exclusive: a winner was found, nobody signed
/// in at all, or the drawn patron had not signed in.
#[must_use]
pub fn format_drawing_result(result: &DrawingResult) -> String {
    let drawn = &result.selected_patron;
    if result.is_winner {
        format!("Winner: {} (Number: {})", drawn.name, drawn.assigned_number)
    } else if result.no_sign_ins {
        format!(
            "Drawn patron #{} ({}) would have won if they had signed in. The prize will roll over.",
            drawn.assigned_number, drawn.name
        )
    } else {
        format!(
            "Drawn patron #{} ({}) did not sign in this week. The prize will roll over.",
            drawn.assigned_number, drawn.name
        )
    }
}
