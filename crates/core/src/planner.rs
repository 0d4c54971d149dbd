//! # Slot Generator
//!
//! Expands a [`PlanningRequest`] into concrete exam slots.
//!
//! The expansion walks every date of the range in ascending order, skips
//! dates whose weekday is not allowed, and then lays slots end to end from
//! the start of the day window, inserting the pause after each one. A slot
//! that would end past the day window is dropped rather than shortened, so
//! the tail of a working day may stay unused.
//!
//! The number of slots is computed arithmetically before any slot is built,
//! and requests above a slot limit are refused with
//! [`InvalidRequest::TooManySlots`].
//!
//! Expansion is pure. [`generate`] adds the persistence step: each slot is
//! handed to a [`SlotStore`] in order, and a store failure for one slot is
//! recorded without stopping the others. Nothing is rolled back.

use chrono::{Datelike, NaiveDate, NaiveTime};
use tracing::{debug, info, warn};

use crate::errors::{InvalidRequest, PlanResult};
use crate::models::planning::{FailedSlot, PlanningPreview, PlanningRequest, PlanningResult};
use crate::models::slot::SlotDraft;
use crate::models::time_of_day::{from_minute_of_day, minute_of_day};
use crate::store::SlotStore;

/// Slot limit applied by [`expand`], [`preview`] and [`generate`].
pub const DEFAULT_MAX_SLOTS: u64 = 10_000;

/// Checks a request against every planning rule, first failure wins.
pub fn validate(request: &PlanningRequest) -> Result<(), InvalidRequest> {
    if request.range_start > request.range_end {
        return Err(InvalidRequest::InvertedRange {
            start: request.range_start,
            end: request.range_end,
        });
    }
    if request.slot_duration_minutes <= 0 {
        return Err(InvalidRequest::NonPositiveDuration(
            request.slot_duration_minutes,
        ));
    }
    if request.pause_minutes < 0 {
        return Err(InvalidRequest::NegativePause(request.pause_minutes));
    }
    if minute_of_day(request.day_window_start) >= minute_of_day(request.day_window_end) {
        return Err(InvalidRequest::EmptyDayWindow {
            start: request.day_window_start,
            end: request.day_window_end,
        });
    }
    if request.capacity_per_slot <= 0 {
        return Err(InvalidRequest::NonPositiveCapacity(request.capacity_per_slot));
    }
    if request.allowed_weekdays.is_empty() {
        return Err(InvalidRequest::NoWeekdays);
    }
    if let Some(&weekday) = request.allowed_weekdays.iter().find(|&&day| day > 6) {
        return Err(InvalidRequest::UnknownWeekday(weekday));
    }

    Ok(())
}

/// Number of slots the request would produce, without building them.
pub fn count_slots(request: &PlanningRequest) -> Result<u64, InvalidRequest> {
    validate(request)?;

    let window = i64::from(minute_of_day(request.day_window_end))
        - i64::from(minute_of_day(request.day_window_start));
    let duration = request.slot_duration_minutes;
    let per_day = if window < duration {
        0
    } else {
        1 + (window - duration) / duration.saturating_add(request.pause_minutes)
    };

    let total_days = (request.range_end - request.range_start).num_days() + 1;
    let full_weeks = total_days / 7;
    let remainder = request
        .range_start
        .iter_days()
        .take((total_days % 7) as usize)
        .filter(|date| is_allowed(request, *date))
        .count() as i64;
    let allowed_days = full_weeks * request.allowed_weekdays.len() as i64 + remainder;

    Ok((allowed_days as u64).saturating_mul(per_day as u64))
}

/// Computes the slots of a request in chronological order without storing
/// them, refusing requests above [`DEFAULT_MAX_SLOTS`].
pub fn expand(request: &PlanningRequest) -> Result<Vec<SlotDraft>, InvalidRequest> {
    expand_within(request, DEFAULT_MAX_SLOTS)
}

/// [`expand`] with an explicit slot limit.
pub fn expand_within(
    request: &PlanningRequest,
    max_slots: u64,
) -> Result<Vec<SlotDraft>, InvalidRequest> {
    let requested = count_slots(request)?;
    if requested > max_slots {
        return Err(InvalidRequest::TooManySlots {
            requested,
            limit: max_slots,
        });
    }

    let window_start = i64::from(minute_of_day(request.day_window_start));
    let window_end = i64::from(minute_of_day(request.day_window_end));

    let mut drafts = Vec::with_capacity(requested as usize);
    drafts.extend(
        request
            .range_start
            .iter_days()
            .take_while(|date| *date <= request.range_end)
            .filter(|date| is_allowed(request, *date))
            .flat_map(|date| day_slots(request, date, window_start, window_end)),
    );

    Ok(drafts)
}

/// Dry run of [`generate`].
pub fn preview(request: &PlanningRequest) -> Result<PlanningPreview, InvalidRequest> {
    preview_within(request, DEFAULT_MAX_SLOTS)
}

/// [`preview`] with an explicit slot limit.
pub fn preview_within(
    request: &PlanningRequest,
    max_slots: u64,
) -> Result<PlanningPreview, InvalidRequest> {
    let slots = expand_within(request, max_slots)?;
    let total_slot_count = slots.len();

    Ok(PlanningPreview {
        total_capacity: total_capacity(request, total_slot_count),
        total_slot_count,
        slots,
    })
}

/// Expands the request and stores every resulting slot.
///
/// An invalid request fails before the store is touched. Store errors are
/// collected per slot in [`PlanningResult::failed`]; the totals only count
/// the slots that were actually created.
pub async fn generate(
    store: &dyn SlotStore,
    request: &PlanningRequest,
) -> PlanResult<PlanningResult> {
    generate_within(store, request, DEFAULT_MAX_SLOTS).await
}

/// [`generate`] with an explicit slot limit.
pub async fn generate_within(
    store: &dyn SlotStore,
    request: &PlanningRequest,
    max_slots: u64,
) -> PlanResult<PlanningResult> {
    let drafts = match expand_within(request, max_slots) {
        Ok(drafts) => drafts,
        Err(err) => {
            debug!(
                activity_id = %request.target_activity_id,
                "Rejected planning request: {}", err
            );
            return Err(err.into());
        }
    };

    let mut slots_created = Vec::with_capacity(drafts.len());
    let mut failed = Vec::new();

    for draft in &drafts {
        match store.create_slot(draft).await {
            Ok(slot) => slots_created.push(slot),
            Err(err) => {
                warn!(
                    activity_id = %draft.activity_id,
                    date = %draft.date,
                    start_time = %draft.start_time,
                    "Failed to store slot: {}", err
                );
                failed.push(FailedSlot {
                    date: draft.date,
                    start_time: draft.start_time,
                    end_time: draft.end_time,
                    reason: err.to_string(),
                });
            }
        }
    }

    let total_slot_count = slots_created.len();
    info!(
        activity_id = %request.target_activity_id,
        computed = drafts.len(),
        created = total_slot_count,
        failed = failed.len(),
        "Slot generation finished"
    );

    Ok(PlanningResult {
        total_capacity: total_capacity(request, total_slot_count),
        total_slot_count,
        slots_created,
        failed,
    })
}

fn is_allowed(request: &PlanningRequest, date: NaiveDate) -> bool {
    // num_days_from_sunday is always below 7
    let weekday = date.weekday().num_days_from_sunday() as u8;
    request.allowed_weekdays.contains(&weekday)
}

fn day_slots(
    request: &PlanningRequest,
    date: NaiveDate,
    window_start: i64,
    window_end: i64,
) -> Vec<SlotDraft> {
    let mut slots = Vec::new();
    let mut cursor = window_start;

    loop {
        let slot_end = cursor.saturating_add(request.slot_duration_minutes);
        if slot_end > window_end {
            break;
        }
        let (Some(start_time), Some(end_time)) = (time_at(cursor), time_at(slot_end)) else {
            break;
        };

        slots.push(SlotDraft {
            activity_id: request.target_activity_id.clone(),
            date,
            start_time,
            end_time,
            capacity_max: request.capacity_per_slot,
        });

        cursor = slot_end.saturating_add(request.pause_minutes);
    }

    slots
}

fn time_at(minutes: i64) -> Option<NaiveTime> {
    u32::try_from(minutes).ok().and_then(from_minute_of_day)
}

fn total_capacity(request: &PlanningRequest, slot_count: usize) -> i64 {
    i64::from(request.capacity_per_slot) * slot_count as i64
}
