use chrono::{Datelike, Duration, NaiveDate};

use crate::catalog::FlagCatalog;
use crate::constant::*;
use crate::model::{FlagDefinition, FlagType};
use crate::pipeline::base::*;

/// A relative date offset, as accumulated from shorthand such as `-1y2m3d`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(super) struct DateDelta {
    years: i32,
    months: i32,
    days: i32,
}

impl DateDelta {
    /// Read the shorthand `expression`, or `None` if it contains no date markers (a literal date).
    ///
    /// Each marker (`y`, `m` or `d`) takes the signed integer written since the previous marker.
    /// A repeated marker overwrites the earlier occurrence.
    fn parse(expression: &str) -> Option<Result<Self, FlagError>> {
        if !expression.contains([YEAR_MARKER, MONTH_MARKER, DAY_MARKER]) {
            return None;
        }

        let mut delta = DateDelta::default();
        let mut start = 0;

        for (i, marker) in expression.char_indices() {
            let slot = match marker {
                YEAR_MARKER => &mut delta.years,
                MONTH_MARKER => &mut delta.months,
                DAY_MARKER => &mut delta.days,
                _ => continue,
            };

            match expression[start..i].parse::<i32>() {
                Ok(amount) => *slot = amount,
                Err(_) => {
                    return Some(Err(FlagError::UnknownDateInput(expression.to_string())));
                }
            }

            start = i + marker.len_utf8();
        }

        if start != expression.len() {
            return Some(Err(FlagError::UnknownDateInput(expression.to_string())));
        }

        Some(Ok(delta))
    }

    /// Shift `reference` by this delta.
    ///
    /// Years and months move the calendar month; the day of month then rolls over into the following months as needed.
    /// For example, 2022-01-31 plus one month is 2022-03-03.
    /// Dates outside of four digit years are `None`.
    fn apply(&self, reference: NaiveDate) -> Option<NaiveDate> {
        let months = i64::from(reference.year()) * 12
            + i64::from(reference.month0())
            + i64::from(self.years) * 12
            + i64::from(self.months);
        let year = i32::try_from(months.div_euclid(12)).ok()?;
        let month = u32::try_from(months.rem_euclid(12)).ok()? + 1;
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let offset = i64::from(reference.day0()) + i64::from(self.days);
        first
            .checked_add_signed(Duration::days(offset))
            .filter(four_digit_year)
    }
}

/// Resolve the value of every `DateTime` flag in `pass` into a `YYYY-MM-DD` literal (or a colon delimited pair of them).
pub(super) fn resolve_dates(
    catalog: &FlagCatalog,
    mut pass: ParsePass,
    positions: &[usize],
    today: NaiveDate,
) -> Result<ParsePass, FlagError> {
    for &position in positions {
        let Some(definition) = catalog.definition(&pass[position]) else {
            continue;
        };

        if definition.flag_type() != FlagType::DateTime {
            continue;
        }

        let Some(value) = pass.get(position + 1) else {
            continue;
        };

        let resolved = resolve_value(definition, value, today)?;
        pass[position + 1] = resolved;
    }

    Ok(pass)
}

fn resolve_value(
    definition: &FlagDefinition,
    value: &str,
    today: NaiveDate,
) -> Result<String, FlagError> {
    let normalized = value.to_lowercase().replace(' ', "");

    if !normalized.contains(RANGE_DELIMITER) {
        return match DateDelta::parse(&normalized) {
            None => Ok(value.to_string()),
            Some(delta) => shift(today, delta?, &normalized),
        };
    }

    if !definition.is_ranged() {
        return Err(FlagError::DateRangeNotAllowed(definition.name().to_string()));
    }

    let mut operands = normalized.split(RANGE_DELIMITER);

    match (operands.next(), operands.next(), operands.next()) {
        (Some(from), Some(to), None) if !from.is_empty() && !to.is_empty() => Ok(format!(
            "{}{RANGE_DELIMITER}{}",
            resolve_operand(from, today, &normalized)?,
            resolve_operand(to, today, &normalized)?,
        )),
        _ => Err(FlagError::MalformedDateRange(normalized)),
    }
}

/// Resolve one side of a date range, which must be shorthand or a literal date.
fn resolve_operand(operand: &str, today: NaiveDate, range: &str) -> Result<String, FlagError> {
    match DateDelta::parse(operand) {
        Some(delta) => shift(today, delta?, operand),
        None => NaiveDate::parse_from_str(operand, DATE_FORMAT)
            .ok()
            .filter(four_digit_year)
            .map(|date| date.format(DATE_FORMAT).to_string())
            .ok_or_else(|| FlagError::MalformedDateRange(range.to_string())),
    }
}

fn four_digit_year(date: &NaiveDate) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&date.year())
}

fn shift(today: NaiveDate, delta: DateDelta, expression: &str) -> Result<String, FlagError> {
    delta
        .apply(today)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .ok_or_else(|| FlagError::UnknownDateInput(expression.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{adding_catalog, getting_catalog, tokens};
    use rstest::rstest;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 3, 14).unwrap()
    }

    #[rstest]
    #[case("1y1m2d", DateDelta { years: 1, months: 1, days: 2 })]
    #[case("-4d-1m-3y", DateDelta { years: -3, months: -1, days: -4 })]
    #[case("+2d", DateDelta { years: 0, months: 0, days: 2 })]
    #[case("1d5d", DateDelta { years: 0, months: 0, days: 5 })]
    #[case("0d", DateDelta::default())]
    fn parse_shorthand(#[case] expression: &str, #[case] expected: DateDelta) {
        assert_eq!(DateDelta::parse(expression), Some(Ok(expected)));
    }

    #[rstest]
    #[case("2022-04-17")]
    #[case("")]
    #[case("12/04/2022")]
    fn parse_literal(#[case] expression: &str) {
        assert_eq!(DateDelta::parse(expression), None);
    }

    #[rstest]
    #[case("d")]
    #[case("today")]
    #[case("1x2d")]
    #[case("2d5")]
    #[case("99999999999d")]
    fn parse_unknown(#[case] expression: &str) {
        assert_matches!(
            DateDelta::parse(expression),
            Some(Err(FlagError::UnknownDateInput(_)))
        );
    }

    #[rstest]
    #[case(DateDelta { years: 1, months: 1, days: 2 }, "2023-04-16")]
    #[case(DateDelta { years: 0, months: 0, days: -4 }, "2022-03-10")]
    #[case(DateDelta { years: -3, months: -1, days: -4 }, "2019-02-10")]
    #[case(DateDelta { years: 0, months: -3, days: 0 }, "2021-12-14")]
    #[case(DateDelta { years: 0, months: 0, days: 20 }, "2022-04-03")]
    #[case(DateDelta { years: 0, months: 0, days: -14 }, "2022-02-28")]
    #[case(DateDelta { years: 0, months: 25, days: 0 }, "2024-04-14")]
    fn apply(#[case] delta: DateDelta, #[case] expected: &str) {
        assert_eq!(delta.apply(reference()).unwrap().to_string(), expected);
    }

    #[test]
    fn apply_rolls_over() {
        let end_of_january = NaiveDate::from_ymd_opt(2022, 1, 31).unwrap();
        let delta = DateDelta {
            months: 1,
            ..DateDelta::default()
        };

        assert_eq!(delta.apply(end_of_january).unwrap().to_string(), "2022-03-03");
    }

    #[rstest]
    #[case(DateDelta { years: i32::MAX, months: 0, days: 0 })]
    #[case(DateDelta { years: 8000, months: 0, days: 0 })]
    #[case(DateDelta { years: 7977, months: 9, days: 18 })]
    #[case(DateDelta { years: -2023, months: 0, days: 0 })]
    fn apply_out_of_range(#[case] delta: DateDelta) {
        assert_eq!(delta.apply(reference()), None);
    }

    #[test]
    fn apply_last_four_digit_year() {
        let delta = DateDelta {
            years: 7977,
            months: 9,
            days: 17,
        };

        assert_eq!(delta.apply(reference()).unwrap().to_string(), "9999-12-31");
    }

    #[test]
    fn resolve_five_digit_year() {
        let catalog = adding_catalog();
        let pass = tokens(&["-d", "8000y"]);
        let positions = catalog.flag_positions(&pass);

        let result = resolve_dates(&catalog, pass, &positions, reference());

        assert_eq!(
            result.unwrap_err(),
            FlagError::UnknownDateInput("8000y".to_string())
        );
    }

    #[rstest]
    #[case("1y1m2d", "2023-04-16")]
    #[case("1y 1m 2d", "2023-04-16")]
    #[case("-4 d -1 m - 3 y", "2019-02-10")]
    #[case("-1Y", "2021-03-14")]
    #[case("2d", "2022-03-16")]
    #[case("-2d", "2022-03-12")]
    #[case("2022-04-17", "2022-04-17")]
    #[case("2022-3-7", "2022-3-7")]
    fn resolve(#[case] value: &str, #[case] expected: &str) {
        let catalog = adding_catalog();
        let pass = tokens(&["-b", "body", "-d", value]);
        let positions = catalog.flag_positions(&pass);

        let result = resolve_dates(&catalog, pass, &positions, reference()).unwrap();

        assert_eq!(result, tokens(&["-b", "body", "-d", expected]));
    }

    #[test]
    fn resolve_every_date_flag() {
        let catalog = getting_catalog();
        let pass = tokens(&["-d", "2022-04-17", "-e", "-1m", "-t", "1d"]);
        let positions = catalog.flag_positions(&pass);

        let result = resolve_dates(&catalog, pass, &positions, reference()).unwrap();

        assert_eq!(
            result,
            tokens(&["-d", "2022-04-17", "-e", "2022-02-14", "-t", "1d"])
        );
    }

    #[rstest]
    #[case("-2m:-1m", "2022-01-14:2022-02-14")]
    #[case("-2m:-7d", "2022-01-14:2022-03-07")]
    #[case("-2y:-8d", "2020-03-14:2022-03-06")]
    #[case("2022-01-01:-1d", "2022-01-01:2022-03-13")]
    #[case("-1m : 0d", "2022-02-14:2022-03-14")]
    #[case("2022-01-01:2022-02-01", "2022-01-01:2022-02-01")]
    fn resolve_range(#[case] value: &str, #[case] expected: &str) {
        let catalog = getting_catalog();
        let pass = tokens(&["-d", value]);
        let positions = catalog.flag_positions(&pass);

        let result = resolve_dates(&catalog, pass, &positions, reference()).unwrap();

        assert_eq!(result, tokens(&["-d", expected]));
    }

    #[rstest]
    #[case("-2y:")]
    #[case(":-2y")]
    #[case("-1y:1")]
    #[case("-1y:-1m:-1d")]
    #[case("10000-01-01:0d")]
    #[case(":")]
    fn resolve_range_malformed(#[case] value: &str) {
        let catalog = getting_catalog();
        let pass = tokens(&["-d", value]);
        let positions = catalog.flag_positions(&pass);

        let result = resolve_dates(&catalog, pass, &positions, reference());

        assert_matches!(result, Err(FlagError::MalformedDateRange(_)));
    }

    #[test]
    fn resolve_range_unknown_input() {
        let catalog = getting_catalog();
        let pass = tokens(&["-d", "-1y:d"]);
        let positions = catalog.flag_positions(&pass);

        let result = resolve_dates(&catalog, pass, &positions, reference());

        assert_eq!(result.unwrap_err(), FlagError::UnknownDateInput("d".to_string()));
    }

    #[test]
    fn resolve_range_not_allowed() {
        let catalog = adding_catalog();
        let pass = tokens(&["-d", "-2m:-1m"]);
        let positions = catalog.flag_positions(&pass);

        let result = resolve_dates(&catalog, pass, &positions, reference());

        assert_eq!(
            result.unwrap_err(),
            FlagError::DateRangeNotAllowed("-d".to_string())
        );
    }
}
