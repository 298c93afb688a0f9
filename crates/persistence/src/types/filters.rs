//! Song search filters.
//!
//! [`SearchFilters`] is the validated form of the query string accepted by the
//! song search endpoint. Every recognized option is a named field; unknown keys
//! are ignored and empty values count as absent.
//!
//! | Option | Effect |
//! |--------|--------|
//! | `stepstype` | exact match on the chart step style, case-insensitive |
//! | `meterMin` / `meterMax` | inclusive chart meter range, default 0..=99, always applied |
//! | `bpmMin` / `bpmMax` | inclusive tempo range, default 0..=999, always applied |
//! | `pack` | substring of the pack name, case-insensitive |
//! | `timeSignatureNumerator` / `timeSignatureDenominator` | exact match |
//! | `title` / `artist` | substring, case-insensitive |
//! | `chartDifficultyMeterMin` / `chartDifficultyMeterMax` | inclusive chart meter range, only when both are given |
//! | `chartCredit` | substring of the chart author, case-insensitive |
//! | `page` / `pageSize` | pagination, default 1 / 20, page size clamped to 1..=100 |

use std::collections::HashMap;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

use super::pagination::PageRequest;

/// Default lower bound of the chart meter range.
pub const DEFAULT_METER_MIN: i32 = 0;
/// Default upper bound of the chart meter range.
pub const DEFAULT_METER_MAX: i32 = 99;
/// Default lower bound of the tempo range.
pub const DEFAULT_BPM_MIN: f64 = 0.0;
/// Default upper bound of the tempo range.
pub const DEFAULT_BPM_MAX: f64 = 999.0;
/// Page size used when the request does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Largest page size a request may ask for.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Validated song search filters for a single request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchFilters {
    /// Step style, compared case-insensitively.
    pub steps_type: Option<String>,
    /// Lower bound of the chart meter.
    pub meter_min: i32,
    /// Upper bound of the chart meter.
    pub meter_max: i32,
    /// Lower bound of the tempo.
    pub bpm_min: f64,
    /// Upper bound of the tempo.
    pub bpm_max: f64,
    /// Pack name fragment.
    pub pack: Option<String>,
    /// Exact time signature numerator.
    pub time_signature_numerator: Option<i32>,
    /// Exact time signature denominator.
    pub time_signature_denominator: Option<i32>,
    /// Song title fragment.
    pub title: Option<String>,
    /// Song artist fragment.
    pub artist: Option<String>,
    /// Chart meter range, present only when both bounds were given.
    pub chart_difficulty_meter: Option<(i32, i32)>,
    /// Chart credit fragment.
    pub chart_credit: Option<String>,
    /// Requested page, already clamped.
    pub page: PageRequest,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            steps_type: None,
            meter_min: DEFAULT_METER_MIN,
            meter_max: DEFAULT_METER_MAX,
            bpm_min: DEFAULT_BPM_MIN,
            bpm_max: DEFAULT_BPM_MAX,
            pack: None,
            time_signature_numerator: None,
            time_signature_denominator: None,
            title: None,
            artist: None,
            chart_difficulty_meter: None,
            chart_credit: None,
            page: PageRequest::default(),
        }
    }
}

impl SearchFilters {
    /// Parses filters from raw query parameters using the default page limits.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ValidationError> {
        Self::from_params_with_limits(params, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE)
    }

    /// Parses filters from raw query parameters.
    ///
    /// `default_page_size` applies when `pageSize` is absent; any requested size
    /// is clamped to `1..=max_page_size`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidParameter`] when a numeric option holds
    /// a value that does not parse.
    pub fn from_params_with_limits(
        params: &HashMap<String, String>,
        default_page_size: u32,
        max_page_size: u32,
    ) -> Result<Self, ValidationError> {
        // Blank values count as absent; text values are otherwise kept as sent
        let lookup = |name: &str| {
            params
                .get(name)
                .map(String::as_str)
                .filter(|v| !v.trim().is_empty())
        };
        let text = |name: &str| lookup(name).map(str::to_string);

        let chart_meter_min: Option<i32> = parse_number(lookup, "chartDifficultyMeterMin")?;
        let chart_meter_max: Option<i32> = parse_number(lookup, "chartDifficultyMeterMax")?;

        let page: Option<i64> = parse_number(lookup, "page")?;
        let page_size: Option<i64> = parse_number(lookup, "pageSize")?;

        Ok(Self {
            steps_type: text("stepstype"),
            meter_min: parse_number(lookup, "meterMin")?.unwrap_or(DEFAULT_METER_MIN),
            meter_max: parse_number(lookup, "meterMax")?.unwrap_or(DEFAULT_METER_MAX),
            bpm_min: parse_number(lookup, "bpmMin")?.unwrap_or(DEFAULT_BPM_MIN),
            bpm_max: parse_number(lookup, "bpmMax")?.unwrap_or(DEFAULT_BPM_MAX),
            pack: text("pack"),
            time_signature_numerator: parse_number(lookup, "timeSignatureNumerator")?,
            time_signature_denominator: parse_number(lookup, "timeSignatureDenominator")?,
            title: text("title"),
            artist: text("artist"),
            chart_difficulty_meter: chart_meter_min.zip(chart_meter_max),
            chart_credit: text("chartCredit"),
            page: PageRequest::clamped(
                page.unwrap_or(1),
                page_size.unwrap_or(i64::from(default_page_size)),
                max_page_size,
            ),
        })
    }

    /// Renders the recognized filters back into a query string.
    ///
    /// Defaults are included so the string fully describes the filtered set.
    /// Pagination keys are left out.
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());

        if let Some(ref value) = self.title {
            serializer.append_pair("title", value);
        }
        if let Some(ref value) = self.artist {
            serializer.append_pair("artist", value);
        }
        if let Some(ref value) = self.chart_credit {
            serializer.append_pair("chartCredit", value);
        }
        if let Some(ref value) = self.pack {
            serializer.append_pair("pack", value);
        }
        if let Some(ref value) = self.steps_type {
            serializer.append_pair("stepstype", value);
        }
        if let Some(value) = self.time_signature_numerator {
            serializer.append_pair("timeSignatureNumerator", &value.to_string());
        }
        if let Some(value) = self.time_signature_denominator {
            serializer.append_pair("timeSignatureDenominator", &value.to_string());
        }
        serializer.append_pair("bpmMin", &self.bpm_min.to_string());
        serializer.append_pair("bpmMax", &self.bpm_max.to_string());
        serializer.append_pair("meterMin", &self.meter_min.to_string());
        serializer.append_pair("meterMax", &self.meter_max.to_string());
        if let Some((min, max)) = self.chart_difficulty_meter {
            serializer.append_pair("chartDifficultyMeterMin", &min.to_string());
            serializer.append_pair("chartDifficultyMeterMax", &max.to_string());
        }

        serializer.finish()
    }
}

fn parse_number<'a, T, F>(lookup: F, name: &str) -> Result<Option<T>, ValidationError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<&'a str>,
{
    lookup(name)
        .map(str::trim)
        .map(|raw| {
            raw.parse::<T>().map_err(|e| {
                ValidationError::invalid_parameter(name, format!("'{}' is not a number: {}", raw, e))
            })
        })
        .transpose()
}
