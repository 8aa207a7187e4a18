//! Deterministic content selection.
//!
//! Dated overrides win; everything else is filled from the knowledge table
//! by a positional index derived from the date. Two different prime
//! multipliers decorrelate content selection from quote injection, so a
//! record without its own quote does not end up paired by the same index
//! across the whole year.

use crate::event::{AlmanacEvent, StaticEvent};
use crate::tables::{HISTORICAL_EVENTS, KNOWLEDGE_BASE, QUOTES};

/// Days per month for the almanac's non-leap 2026 year.
pub const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const TABLE_MULTIPLIER: u32 = 137;
const QUOTE_MULTIPLIER: u32 = 149;

/// Number of days in `month` (0-indexed). Months out of range get 31 so
/// callers iterating a clamped range never underrun.
pub fn days_in_month(month: u32) -> u32 {
    DAYS_PER_MONTH.get(month as usize).copied().unwrap_or(31)
}

/// Index seed for a date. Deliberately overcounts for short months
/// (`month * 31 + day` is not a true day-of-year); it only has to be
/// well distributed, not calendrically exact.
fn seed_day(month: u32, day: u32) -> u32 {
    month * 31 + day
}

fn lookup_override(month: u32, day: u32) -> Option<&'static StaticEvent> {
    HISTORICAL_EVENTS
        .iter()
        .find(|((m, d), _)| *m == month && *d == day)
        .map(|(_, entry)| entry)
}

/// Resolve the content for a `(month 0..=11, day 1..=31)` pair.
///
/// Total and deterministic: every in-range input yields a fully populated
/// record, with the override table taking precedence over the knowledge
/// table and quote/mood injected when the base record lacks them.
pub fn resolve(month: u32, day: u32) -> AlmanacEvent {
    let base = match lookup_override(month, day) {
        Some(entry) => entry,
        None => {
            let index = (seed_day(month, day) * TABLE_MULTIPLIER) as usize % KNOWLEDGE_BASE.len();
            &KNOWLEDGE_BASE[index]
        }
    };

    let quote = match base.quote {
        Some(quote) => quote,
        None => {
            let index = (seed_day(month, day) * QUOTE_MULTIPLIER) as usize % QUOTES.len();
            QUOTES[index]
        }
    };

    AlmanacEvent::from_static(base, quote, base.mood.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Mood;
    use crate::tables::{KNOWLEDGE_BASE, QUOTES};
    use pretty_assertions::assert_eq;

    #[test]
    fn total_over_the_whole_year() {
        for month in 0..12u32 {
            for day in 1..=days_in_month(month) {
                let event = resolve(month, day);
                assert!(!event.title.is_empty(), "{month}-{day} missing title");
                assert!(
                    !event.description.is_empty(),
                    "{month}-{day} missing description"
                );
                assert!(!event.quote.is_empty(), "{month}-{day} missing quote");
                assert!(matches!(
                    event.mood,
                    Mood::Glory | Mood::Crisis | Mood::Future
                ));
            }
        }
    }

    #[test]
    fn deterministic() {
        for (month, day) in [(0, 1), (1, 1), (4, 17), (11, 30), (6, 31)] {
            assert_eq!(resolve(month, day), resolve(month, day));
        }
    }

    #[test]
    fn override_takes_precedence() {
        for ((month, day), entry) in crate::tables::HISTORICAL_EVENTS {
            let event = resolve(*month, *day);
            assert_eq!(event.title, entry.title);
            assert_eq!(event.description, entry.description);
        }
    }

    #[test]
    fn fallback_uses_pinned_index_formula() {
        // (10, 31) has no override; neither does (1, 2).
        for (month, day) in [(10u32, 31u32), (1, 2), (3, 1)] {
            let expected =
                ((month * 31 + day) * 137) as usize % KNOWLEDGE_BASE.len();
            let event = resolve(month, day);
            assert_eq!(event.title, KNOWLEDGE_BASE[expected].title);
        }
    }

    #[test]
    fn quote_injection_uses_pinned_index_formula() {
        // Find a fallback day whose selected record has no intrinsic quote.
        let mut checked = 0;
        for month in 0..12u32 {
            for day in 1..=days_in_month(month) {
                if crate::tables::HISTORICAL_EVENTS
                    .iter()
                    .any(|((m, d), _)| *m == month && *d == day)
                {
                    continue;
                }
                let index = ((month * 31 + day) * 137) as usize % KNOWLEDGE_BASE.len();
                if KNOWLEDGE_BASE[index].quote.is_some() {
                    continue;
                }
                let quote_index = ((month * 31 + day) * 149) as usize % QUOTES.len();
                assert_eq!(resolve(month, day).quote, QUOTES[quote_index]);
                checked += 1;
            }
        }
        assert!(checked > 0, "no quote-less fallback day exercised");
    }

    #[test]
    fn mood_defaults_to_glory() {
        // (0, 12) is an override without an intrinsic mood.
        assert_eq!(resolve(0, 12).mood, Mood::Glory);
    }

    #[test]
    fn jan_first_is_the_opening_override() {
        let event = resolve(0, 1);
        assert_eq!(event.title, "光之启幕");
        assert_eq!(event.year_of_event, "2026");
        assert_eq!(event.mood, Mood::Glory);
        assert_eq!(event.quote, "让金钱像信息一样自由流动 (Freedom of Money)。");
    }

    #[test]
    fn feb_first_falls_through_with_its_own_quote() {
        // No override for (1, 1): index (32 * 137) % 55 == 39, a record
        // that carries its own quote, so injection must not kick in.
        let index = ((1u32 * 31 + 1) * 137) as usize % KNOWLEDGE_BASE.len();
        assert_eq!(index, 39);
        let entry = &KNOWLEDGE_BASE[index];
        let intrinsic = entry.quote.expect("entry 39 must carry its own quote");

        let event = resolve(1, 1);
        assert_eq!(event.title, entry.title);
        assert_eq!(event.quote, intrinsic);
    }

    #[test]
    fn days_in_month_matches_2026() {
        assert_eq!(days_in_month(0), 31);
        assert_eq!(days_in_month(1), 28);
        assert_eq!(days_in_month(8), 30);
        assert_eq!(days_in_month(11), 31);
    }
}
