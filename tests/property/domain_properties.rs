//! Property-based tests for the task domain model.
//!
//! Uses proptest to verify:
//! 1. Any valid task collection survives a snapshot encode → decode
//!    round-trip with deep equality.
//! 2. `next_occurrence` is strictly later than its input and monthly
//!    advancement never widens the day-of-month.
//! 3. `roll_forward` never returns a date before `today` for a passed
//!    occurrence, and never moves a future occurrence.
//! 4. Arbitrary junk never causes a panic in `decode` (returns `Err`
//!    gracefully).

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use uuid::Uuid;

use termtask_core::recur::{next_occurrence, roll_forward};
use termtask_core::snapshot;
use termtask_core::task::{Frequency, Priority, Recurrence, Task, TaskId};

// --- Strategies for domain types ---

/// Strategy for generating arbitrary `TaskId` values.
fn arb_task_id() -> impl Strategy<Value = TaskId> {
    any::<u128>().prop_map(|n| TaskId::from_uuid(Uuid::from_u128(n)))
}

/// Strategy for dates within a few centuries of the epoch.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..100_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap_or(NaiveDate::MIN)
            .checked_add_days(Days::new(offset))
            .unwrap_or(NaiveDate::MAX)
    })
}

/// Strategy for generating arbitrary `Priority` values.
fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
    ]
}

/// Strategy for generating arbitrary `Frequency` values.
fn arb_frequency() -> impl Strategy<Value = Frequency> {
    prop_oneof![
        Just(Frequency::Daily),
        Just(Frequency::Weekly),
        Just(Frequency::Monthly),
    ]
}

/// Strategy for invariant-respecting `Recurrence` values.
fn arb_recurrence() -> impl Strategy<Value = Recurrence> {
    prop_oneof![
        Just(Recurrence::none()),
        (arb_frequency(), prop::option::of(arb_date()))
            .prop_map(|(f, next)| Recurrence::every(f, next)),
    ]
}

/// Strategy for generating arbitrary `Task` values.
fn arb_task() -> impl Strategy<Value = Task> {
    (
        arb_task_id(),
        "[^\x00]{1,128}",
        any::<bool>(),
        arb_priority(),
        prop::option::of(arb_date()),
        "[A-Za-z ]{1,24}",
        prop::collection::vec("[A-Za-z]{1,16}", 0..4),
        any::<u64>(),
        arb_recurrence(),
    )
        .prop_map(
            |(id, text, completed, priority, due_date, category, assignees, created_at, recurrence)| {
                Task {
                    id,
                    text,
                    completed,
                    priority,
                    due_date,
                    category,
                    assignees,
                    created_at,
                    recurrence,
                }
            },
        )
}

// --- Property tests ---

proptest! {
    /// Any valid collection survives a snapshot round-trip.
    #[test]
    fn snapshot_round_trip(tasks in prop::collection::vec(arb_task(), 0..16)) {
        let blob = snapshot::encode(&tasks).expect("encode should succeed");
        let decoded = snapshot::decode(&blob).expect("decode should succeed");
        prop_assert_eq!(tasks, decoded);
    }

    /// Generated recurrences always satisfy the descriptor invariant.
    #[test]
    fn generated_recurrence_is_valid(recurrence in arb_recurrence()) {
        prop_assert!(recurrence.validate().is_ok());
    }

    /// Advancing a date always moves strictly forward.
    #[test]
    fn next_occurrence_is_strictly_later(date in arb_date(), frequency in arb_frequency()) {
        let next = next_occurrence(date, frequency).expect("in-range date");
        prop_assert!(next > date);
    }

    /// Monthly advancement moves exactly one month forward (with year
    /// carry) and never widens the day-of-month.
    #[test]
    fn monthly_advancement_clamps_day(date in arb_date()) {
        use chrono::Datelike;
        let next = next_occurrence(date, Frequency::Monthly).expect("in-range date");
        prop_assert!(next.day() <= date.day());
        let months = (i64::from(next.year()) * 12 + i64::from(next.month0()))
            - (i64::from(date.year()) * 12 + i64::from(date.month0()));
        prop_assert_eq!(months, 1);
    }

    /// A passed occurrence rolls to `today` or later; a current or
    /// future one is untouched.
    #[test]
    fn roll_forward_reaches_today(
        date in arb_date(),
        frequency in arb_frequency(),
        today in arb_date(),
    ) {
        let rolled = roll_forward(date, frequency, today);
        if date < today {
            prop_assert!(rolled >= today);
        } else {
            prop_assert_eq!(rolled, date);
        }
    }

    /// Weekly rollover lands on the same weekday it started on.
    #[test]
    fn weekly_rollover_preserves_weekday(date in arb_date(), today in arb_date()) {
        use chrono::Datelike;
        let rolled = roll_forward(date, Frequency::Weekly, today);
        prop_assert_eq!(rolled.weekday(), date.weekday());
    }

    /// Random strings never cause a panic in decode.
    #[test]
    fn decode_junk_never_panics(junk in "\\PC{0,256}") {
        let _ = snapshot::decode(&junk);
    }
}
