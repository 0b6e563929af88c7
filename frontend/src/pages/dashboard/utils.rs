use chrono::NaiveDate;
use leptos::*;

use crate::api::{ApiError, TilesQuery};
use crate::pages::dashboard::range::{resolve, DateSpan, Granularity, Preset};

/// Signal-backed filter state of the dashboard. One instance per widget;
/// `to_query` snapshots it into the parameters of a fetch.
#[derive(Clone, Copy)]
pub struct FilterState {
    granularity: RwSignal<Granularity>,
    preset: RwSignal<String>,
    start_input: RwSignal<String>,
    end_input: RwSignal<String>,
    year_input: RwSignal<String>,
    assignee: RwSignal<String>,
    deadline: RwSignal<String>,
    status: RwSignal<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            granularity: create_rw_signal(Granularity::Month),
            preset: create_rw_signal(Granularity::Month.default_preset().token()),
            start_input: create_rw_signal(String::new()),
            end_input: create_rw_signal(String::new()),
            year_input: create_rw_signal(String::new()),
            assignee: create_rw_signal(String::new()),
            deadline: create_rw_signal(String::new()),
            status: create_rw_signal(String::new()),
        }
    }
}

impl FilterState {
    pub fn granularity_signal(&self) -> RwSignal<Granularity> {
        self.granularity
    }

    pub fn preset_signal(&self) -> RwSignal<String> {
        self.preset
    }

    pub fn start_signal(&self) -> RwSignal<String> {
        self.start_input
    }

    pub fn end_signal(&self) -> RwSignal<String> {
        self.end_input
    }

    pub fn year_signal(&self) -> RwSignal<String> {
        self.year_input
    }

    pub fn assignee_signal(&self) -> RwSignal<String> {
        self.assignee
    }

    pub fn deadline_signal(&self) -> RwSignal<String> {
        self.deadline
    }

    pub fn status_signal(&self) -> RwSignal<String> {
        self.status
    }

    /// Switching granularity resets the preset to that granularity's
    /// default so the range is always recomputed from a legal pair.
    pub fn set_granularity(&self, granularity: Granularity) {
        self.granularity.set(granularity);
        self.preset.set(granularity.default_preset().token());
        self.year_input.set(String::new());
    }

    pub fn current_preset(&self) -> Preset {
        let granularity = self.granularity.get();
        if granularity == Granularity::Year {
            let year = self.year_input.get();
            if !year.trim().is_empty() {
                return Preset::parse(granularity, year.trim());
            }
        }
        Preset::parse(granularity, &self.preset.get())
    }

    fn custom_span(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>), ApiError> {
        let start = parse_date_input(&self.start_input.get(), "Start date must be YYYY-MM-DD.")?;
        let end = parse_date_input(&self.end_input.get(), "End date must be YYYY-MM-DD.")?;
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(ApiError::validation(
                    "Start date must be on or before the end date.",
                ));
            }
        }
        Ok((start, end))
    }

    /// Snapshots the filter into fetch parameters. A custom range with an
    /// inverted or malformed date pair is a validation error and never
    /// reaches the wire.
    pub fn to_query(&self, today: NaiveDate) -> Result<TilesQuery, ApiError> {
        let granularity = self.granularity.get();
        let preset = self.current_preset();
        let (start_date, end_date) = match resolve(&preset, today) {
            Some(span) => (Some(span.start), Some(span.end)),
            None => self.custom_span()?,
        };
        Ok(TilesQuery {
            filter_type: granularity.as_str().into(),
            filter_value: preset.token(),
            start_date,
            end_date,
            filter_date: Some(today),
            assignee: parse_id_input(&self.assignee.get()),
            deadline: parse_date_input(&self.deadline.get(), "Deadline must be YYYY-MM-DD.")?,
            status: parse_id_input(&self.status.get()),
        })
    }

    /// Human label of the active period, shown next to the filter bar.
    pub fn period_label(&self, today: NaiveDate) -> String {
        match resolve(&self.current_preset(), today) {
            Some(DateSpan { start, end }) => format!("{start} to {end}"),
            None => match self.custom_span() {
                Ok((Some(start), Some(end))) => format!("{start} to {end}"),
                _ => "Custom range".into(),
            },
        }
    }
}

fn parse_date_input(value: &str, error: &str) -> Result<Option<NaiveDate>, ApiError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ApiError::validation(error.to_string()))
}

fn parse_id_input(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

pub fn format_hours(hours: Option<f64>) -> String {
    hours
        .map(|h| format!("{:.2} hrs", h))
        .unwrap_or_else(|| "-".into())
}

pub fn format_leave_days(days: Option<f64>) -> String {
    days.map(|d| format!("{:.1} days", d))
        .unwrap_or_else(|| "-".into())
}

pub fn format_count(count: Option<i64>) -> String {
    count.map(|c| c.to_string()).unwrap_or_else(|| "-".into())
}

pub fn display_or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".into(),
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_filter_queries_current_month() {
        with_runtime(|| {
            let filter = FilterState::default();
            let query = filter.to_query(date(2024, 3, 15)).unwrap();
            assert_eq!(query.filter_type, "month");
            assert_eq!(query.filter_value, "current");
            assert_eq!(query.start_date, Some(date(2024, 3, 1)));
            assert_eq!(query.end_date, Some(date(2024, 3, 31)));
            assert_eq!(query.filter_date, Some(date(2024, 3, 15)));
        });
    }

    #[test]
    fn granularity_switch_resets_preset() {
        with_runtime(|| {
            let filter = FilterState::default();
            filter.preset_signal().set("last3".into());
            filter.set_granularity(Granularity::Year);
            let query = filter.to_query(date(2024, 3, 15)).unwrap();
            assert_eq!(query.filter_type, "year");
            assert_eq!(query.filter_value, "current");
            assert_eq!(query.start_date, Some(date(2024, 1, 1)));
            assert_eq!(query.end_date, Some(date(2024, 12, 31)));
        });
    }

    #[test]
    fn explicit_year_overrides_year_preset() {
        with_runtime(|| {
            let filter = FilterState::default();
            filter.set_granularity(Granularity::Year);
            filter.year_signal().set("2021".into());
            let query = filter.to_query(date(2024, 3, 15)).unwrap();
            assert_eq!(query.filter_value, "2021");
            assert_eq!(query.start_date, Some(date(2021, 1, 1)));
        });
    }

    #[test]
    fn unknown_preset_falls_back_to_untouched_custom_range() {
        with_runtime(|| {
            let filter = FilterState::default();
            filter.preset_signal().set("fortnight".into());
            let query = filter.to_query(date(2024, 3, 15)).unwrap();
            assert_eq!(query.filter_value, "custom");
            assert_eq!(query.start_date, None);
            assert_eq!(query.end_date, None);
            assert_eq!(filter.period_label(date(2024, 3, 15)), "Custom range");
        });
    }

    #[test]
    fn inverted_custom_range_is_rejected() {
        with_runtime(|| {
            let filter = FilterState::default();
            filter.preset_signal().set("custom".into());
            filter.start_signal().set("2024-03-10".into());
            filter.end_signal().set("2024-03-01".into());
            let err = filter.to_query(date(2024, 3, 15)).unwrap_err();
            assert_eq!(err.code, "VALIDATION_ERROR");
        });
    }

    #[test]
    fn manager_selectors_ride_along() {
        with_runtime(|| {
            let filter = FilterState::default();
            filter.assignee_signal().set("3".into());
            filter.deadline_signal().set("2024-04-01".into());
            filter.status_signal().set("7".into());
            let query = filter.to_query(date(2024, 3, 15)).unwrap();
            assert_eq!(query.assignee, Some(3));
            assert_eq!(query.deadline, Some(date(2024, 4, 1)));
            assert_eq!(query.status, Some(7));
        });
    }

    #[test]
    fn formats_hours_with_two_decimals() {
        assert_eq!(format_hours(Some(12.3456)), "12.35 hrs");
        assert_eq!(format_hours(Some(0.0)), "0.00 hrs");
        assert_eq!(format_hours(None), "-");
    }

    #[test]
    fn formats_leave_days_with_one_decimal() {
        assert_eq!(format_leave_days(Some(2.5)), "2.5 days");
        assert_eq!(format_leave_days(None), "-");
    }

    #[test]
    fn counts_and_text_fall_back_to_dash() {
        assert_eq!(format_count(Some(4)), "4");
        assert_eq!(format_count(None), "-");
        assert_eq!(display_or_dash(Some("Design")), "Design");
        assert_eq!(display_or_dash(Some("  ")), "-");
        assert_eq!(display_or_dash(None), "-");
    }
}
