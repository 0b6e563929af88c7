use chrono::{Datelike, Days, Months, NaiveDate};

/// Granularity of the dashboard date filter. Each granularity carries its
/// own legal set of presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Day,
    Month,
    Year,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Month => "month",
            Granularity::Year => "year",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "day" => Some(Granularity::Day),
            "month" => Some(Granularity::Month),
            "year" => Some(Granularity::Year),
            _ => None,
        }
    }

    /// Preset a granularity switch resets to.
    pub fn default_preset(&self) -> Preset {
        match self {
            Granularity::Day => Preset::Today,
            Granularity::Month => Preset::CurrentMonth,
            Granularity::Year => Preset::CurrentYear,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preset {
    Today,
    Yesterday,
    LastDays(u32),
    CurrentMonth,
    LastMonth,
    LastMonths(u32),
    CurrentYear,
    LastYear,
    Year(i32),
    /// Unrecognized combination: the explicit start/end inputs are left
    /// untouched and used as-is.
    Custom,
}

impl Preset {
    pub fn parse(granularity: Granularity, token: &str) -> Self {
        match (granularity, token) {
            (Granularity::Day, "today") => Preset::Today,
            (Granularity::Day, "yesterday") => Preset::Yesterday,
            (Granularity::Day, "last7") => Preset::LastDays(7),
            (Granularity::Day, "last15") => Preset::LastDays(15),
            (Granularity::Day, "last30") => Preset::LastDays(30),
            (Granularity::Month, "current") => Preset::CurrentMonth,
            (Granularity::Month, "last") => Preset::LastMonth,
            (Granularity::Month, "last3") => Preset::LastMonths(3),
            (Granularity::Month, "last6") => Preset::LastMonths(6),
            (Granularity::Month, "last12") => Preset::LastMonths(12),
            (Granularity::Year, "current") => Preset::CurrentYear,
            (Granularity::Year, "last") => Preset::LastYear,
            (Granularity::Year, token) if is_explicit_year(token) => {
                Preset::Year(token.parse().unwrap_or(0))
            }
            _ => Preset::Custom,
        }
    }

    /// Wire token sent as `filter_value`.
    pub fn token(&self) -> String {
        match self {
            Preset::Today => "today".into(),
            Preset::Yesterday => "yesterday".into(),
            Preset::LastDays(n) => format!("last{n}"),
            Preset::CurrentMonth | Preset::CurrentYear => "current".into(),
            Preset::LastMonth | Preset::LastYear => "last".into(),
            Preset::LastMonths(n) => format!("last{n}"),
            Preset::Year(y) => y.to_string(),
            Preset::Custom => "custom".into(),
        }
    }
}

fn is_explicit_year(token: &str) -> bool {
    token.len() == 4 && token.chars().all(|c| c.is_ascii_digit())
}

/// An inclusive calendar span. Construction guarantees start ≤ end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

pub fn month_bounds(day: NaiveDate) -> Option<DateSpan> {
    let start = day.with_day(1)?;
    let end = start
        .checked_add_months(Months::new(1))?
        .checked_sub_days(Days::new(1))?;
    Some(DateSpan { start, end })
}

fn year_bounds(year: i32) -> Option<DateSpan> {
    Some(DateSpan {
        start: NaiveDate::from_ymd_opt(year, 1, 1)?,
        end: NaiveDate::from_ymd_opt(year, 12, 31)?,
    })
}

/// Maps a preset to its calendar span, anchored to `today`. Returns `None`
/// for `Custom` (the caller falls back to the explicit inputs).
///
/// "last month" is calendar-bounded on both ends while "last3/6/12" end on
/// `today`; the asymmetry is deliberate and matched to the observed
/// behavior of the aggregation service.
pub fn resolve(preset: &Preset, today: NaiveDate) -> Option<DateSpan> {
    match preset {
        Preset::Today => Some(DateSpan {
            start: today,
            end: today,
        }),
        Preset::Yesterday => {
            let day = today.checked_sub_days(Days::new(1))?;
            Some(DateSpan {
                start: day,
                end: day,
            })
        }
        Preset::LastDays(n) => Some(DateSpan {
            start: today.checked_sub_days(Days::new(u64::from(*n)))?,
            end: today,
        }),
        Preset::CurrentMonth => month_bounds(today),
        Preset::LastMonth => month_bounds(today.with_day(1)?.checked_sub_days(Days::new(1))?),
        Preset::LastMonths(n) => Some(DateSpan {
            start: today.checked_sub_months(Months::new(*n))?.with_day(1)?,
            end: today,
        }),
        Preset::CurrentYear => year_bounds(today.year()),
        Preset::LastYear => year_bounds(today.year() - 1),
        Preset::Year(y) => year_bounds(*y),
        Preset::Custom => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn current_month_spans_calendar_month() {
        let span = resolve(&Preset::CurrentMonth, date(2024, 3, 15)).unwrap();
        assert_eq!(span.start, date(2024, 3, 1));
        assert_eq!(span.end, date(2024, 3, 31));
    }

    #[test]
    fn current_month_handles_leap_february() {
        let span = resolve(&Preset::CurrentMonth, date(2024, 2, 10)).unwrap();
        assert_eq!(span.end, date(2024, 2, 29));
        let span = resolve(&Preset::CurrentMonth, date(2023, 2, 10)).unwrap();
        assert_eq!(span.end, date(2023, 2, 28));
    }

    #[test]
    fn last7_ends_today() {
        let today = date(2024, 3, 15);
        let span = resolve(&Preset::LastDays(7), today).unwrap();
        assert_eq!(span.start, date(2024, 3, 8));
        assert_eq!(span.end, today);
    }

    #[test]
    fn yesterday_is_a_single_day() {
        let span = resolve(&Preset::Yesterday, date(2024, 3, 15)).unwrap();
        assert_eq!(span.start, date(2024, 3, 14));
        assert_eq!(span.end, date(2024, 3, 14));
    }

    #[test]
    fn yesterday_crosses_month_boundary() {
        let span = resolve(&Preset::Yesterday, date(2024, 3, 1)).unwrap();
        assert_eq!(span.start, date(2024, 2, 29));
    }

    #[test]
    fn last_month_is_calendar_bounded() {
        let span = resolve(&Preset::LastMonth, date(2024, 3, 15)).unwrap();
        assert_eq!(span.start, date(2024, 2, 1));
        assert_eq!(span.end, date(2024, 2, 29));
    }

    #[test]
    fn last_months_start_is_calendar_aligned_end_is_today() {
        let today = date(2024, 3, 15);
        let span = resolve(&Preset::LastMonths(3), today).unwrap();
        assert_eq!(span.start, date(2023, 12, 1));
        assert_eq!(span.end, today);
    }

    #[test]
    fn last_months_clamp_short_target_months() {
        // Jan 31 minus 3 months lands in October; start snaps to day 1.
        let span = resolve(&Preset::LastMonths(3), date(2024, 1, 31)).unwrap();
        assert_eq!(span.start, date(2023, 10, 1));
    }

    #[test]
    fn year_presets_cover_full_years() {
        let today = date(2024, 3, 15);
        let current = resolve(&Preset::CurrentYear, today).unwrap();
        assert_eq!(current.start, date(2024, 1, 1));
        assert_eq!(current.end, date(2024, 12, 31));

        let last = resolve(&Preset::LastYear, today).unwrap();
        assert_eq!(last.start, date(2023, 1, 1));
        assert_eq!(last.end, date(2023, 12, 31));

        let explicit = resolve(&Preset::Year(2021), today).unwrap();
        assert_eq!(explicit.start, date(2021, 1, 1));
        assert_eq!(explicit.end, date(2021, 12, 31));
    }

    #[test]
    fn parse_maps_tokens_per_granularity() {
        assert_eq!(Preset::parse(Granularity::Day, "last7"), Preset::LastDays(7));
        assert_eq!(
            Preset::parse(Granularity::Month, "last7"),
            Preset::Custom,
            "day token under month granularity is not legal"
        );
        assert_eq!(
            Preset::parse(Granularity::Month, "last3"),
            Preset::LastMonths(3)
        );
        assert_eq!(Preset::parse(Granularity::Year, "2021"), Preset::Year(2021));
        assert_eq!(Preset::parse(Granularity::Year, "21"), Preset::Custom);
        assert_eq!(Preset::parse(Granularity::Day, "bogus"), Preset::Custom);
    }

    #[test]
    fn unrecognized_preset_resolves_to_no_span() {
        assert_eq!(resolve(&Preset::Custom, date(2024, 3, 15)), None);
    }

    #[test]
    fn granularity_switch_defaults_recompute_range() {
        // Switching months -> years resets to the current calendar year.
        let today = date(2024, 3, 15);
        let preset = Granularity::Year.default_preset();
        assert_eq!(preset, Preset::CurrentYear);
        let span = resolve(&preset, today).unwrap();
        assert_eq!(span.start, date(2024, 1, 1));
        assert_eq!(span.end, date(2024, 12, 31));
    }

    #[test]
    fn spans_keep_start_before_end() {
        let today = date(2024, 1, 1);
        for preset in [
            Preset::Today,
            Preset::Yesterday,
            Preset::LastDays(30),
            Preset::CurrentMonth,
            Preset::LastMonth,
            Preset::LastMonths(12),
            Preset::CurrentYear,
            Preset::LastYear,
        ] {
            let span = resolve(&preset, today).unwrap();
            assert!(span.start <= span.end, "{preset:?}");
        }
    }

    #[test]
    fn tokens_round_trip_through_parse() {
        for (granularity, preset) in [
            (Granularity::Day, Preset::LastDays(15)),
            (Granularity::Month, Preset::LastMonths(6)),
            (Granularity::Year, Preset::Year(2022)),
        ] {
            let token = preset.token();
            assert_eq!(Preset::parse(granularity, &token), preset);
        }
    }
}
