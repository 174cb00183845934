//! `xsd:duration` literals.
//!
//! The lexical form is `[-]P[nY][nM][nD][T[nH][nM][n[.f]S]]`. Components are
//! kept as written, so formatting reproduces the input; conversion to a fixed
//! length assumes 365-day years and 30-day months, since `xsd:duration`
//! carries no calendar anchor.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde_json::Value;

use crate::error::Error;
use crate::schema::LiteralKind;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_MONTH: u64 = 30 * SECONDS_PER_DAY;
const SECONDS_PER_YEAR: u64 = 365 * SECONDS_PER_DAY;

/// An `xsd:duration` value in component form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct XsdDuration {
    /// Whether the duration is negative (`-P...`).
    pub negative: bool,
    /// `nY`.
    pub years: Option<u64>,
    /// `nM` before the `T`.
    pub months: Option<u64>,
    /// `nD`.
    pub days: Option<u64>,
    /// `nH`.
    pub hours: Option<u64>,
    /// `nM` after the `T`.
    pub minutes: Option<u64>,
    /// `nS`, possibly fractional.
    pub seconds: Option<f64>,
}

impl XsdDuration {
    /// Decomposes a fixed-length duration into years, months, days, hours,
    /// minutes and seconds, omitting zero components.
    #[must_use]
    pub fn from_std(duration: Duration) -> Self {
        let mut rest = duration.as_secs();
        let mut take = |unit: u64| {
            let n = rest / unit;
            rest %= unit;
            (n > 0).then_some(n)
        };
        let years = take(SECONDS_PER_YEAR);
        let months = take(SECONDS_PER_MONTH);
        let days = take(SECONDS_PER_DAY);
        let hours = take(SECONDS_PER_HOUR);
        let minutes = take(SECONDS_PER_MINUTE);
        #[allow(clippy::cast_precision_loss)]
        let secs = rest as f64 + f64::from(duration.subsec_nanos()) / 1e9;
        let mut out = Self {
            negative: false,
            years,
            months,
            days,
            hours,
            minutes,
            seconds: (secs > 0.0).then_some(secs),
        };
        if out.is_empty() {
            out.seconds = Some(0.0);
        }
        out
    }

    /// Converts to a fixed-length duration. Returns `None` for negative
    /// durations or on overflow.
    #[must_use]
    pub fn to_std(&self) -> Option<Duration> {
        if self.negative {
            return None;
        }
        let whole = [
            (self.years, SECONDS_PER_YEAR),
            (self.months, SECONDS_PER_MONTH),
            (self.days, SECONDS_PER_DAY),
            (self.hours, SECONDS_PER_HOUR),
            (self.minutes, SECONDS_PER_MINUTE),
        ]
        .into_iter()
        .try_fold(0u64, |acc, (n, unit)| {
            acc.checked_add(n.unwrap_or(0).checked_mul(unit)?)
        })?;
        let fractional = Duration::try_from_secs_f64(self.seconds.unwrap_or(0.0)).ok()?;
        Duration::from_secs(whole).checked_add(fractional)
    }

    fn is_empty(&self) -> bool {
        [self.years, self.months, self.days, self.hours, self.minutes]
            .iter()
            .all(Option::is_none)
            && self.seconds.is_none()
    }
}

impl FromStr for XsdDuration {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse(text).ok_or_else(|| Error::InvalidLiteral {
            kind: LiteralKind::Duration,
            input: text.to_owned(),
        })
    }
}

fn parse(text: &str) -> Option<XsdDuration> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let rest = rest.strip_prefix('P')?;
    let (date, time) = match rest.split_once('T') {
        Some((date, time)) if !time.is_empty() => (date, Some(time)),
        Some(_) => return None,
        None => (rest, None),
    };

    let mut out = XsdDuration {
        negative,
        ..XsdDuration::default()
    };

    let mut date_fields = [&mut out.years, &mut out.months, &mut out.days];
    parse_components(date, &['Y', 'M', 'D'], |slot, digits| {
        *date_fields[slot] = Some(digits.parse().ok()?);
        Some(())
    })?;

    if let Some(time) = time {
        let (mut hours, mut minutes, mut seconds): (Option<u64>, Option<u64>, Option<f64>) =
            (None, None, None);
        parse_components(time, &['H', 'M', 'S'], |slot, digits| {
            match slot {
                0 => hours = Some(digits.parse().ok()?),
                1 => minutes = Some(digits.parse().ok()?),
                _ => seconds = Some(parse_seconds(digits)?),
            }
            Some(())
        })?;
        out.hours = hours;
        out.minutes = minutes;
        out.seconds = seconds;
    }

    (!out.is_empty()).then_some(out)
}

/// Walks `<digits><designator>` pairs. Designators must appear in the given
/// order, each at most once.
fn parse_components(
    mut text: &str,
    designators: &[char],
    mut store: impl FnMut(usize, &str) -> Option<()>,
) -> Option<()> {
    let mut next = 0;
    while !text.is_empty() {
        let end = text.find(|c: char| !(c.is_ascii_digit() || c == '.'))?;
        let (digits, tail) = text.split_at(end);
        let designator = tail.chars().next()?;
        let slot = designators[next..].iter().position(|d| *d == designator)? + next;
        if digits.is_empty() {
            return None;
        }
        store(slot, digits)?;
        next = slot + 1;
        text = &tail[designator.len_utf8()..];
    }
    Some(())
}

fn parse_seconds(digits: &str) -> Option<f64> {
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "0"));
    if whole.is_empty() || fraction.is_empty() {
        return None;
    }
    digits.parse().ok().filter(|s: &f64| s.is_finite())
}

impl fmt::Display for XsdDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        for (n, designator) in [(self.years, 'Y'), (self.months, 'M'), (self.days, 'D')] {
            if let Some(n) = n {
                write!(f, "{n}{designator}")?;
            }
        }
        if self.hours.is_some() || self.minutes.is_some() || self.seconds.is_some() {
            f.write_str("T")?;
            if let Some(h) = self.hours {
                write!(f, "{h}H")?;
            }
            if let Some(m) = self.minutes {
                write!(f, "{m}M")?;
            }
            if let Some(s) = self.seconds {
                write!(f, "{s}S")?;
            }
        }
        Ok(())
    }
}

pub(crate) fn parse_duration(value: &Value) -> Option<XsdDuration> {
    parse(value.as_str()?)
}

pub(crate) fn format_duration(value: &XsdDuration) -> Value {
    Value::String(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(text: &str) -> Option<XsdDuration> {
        text.parse().ok()
    }

    #[test]
    fn formatting_reproduces_the_input() {
        for text in ["P1Y2M3DT4H5M6S", "PT1H", "P1D", "PT90M", "-PT0.5S", "P0D", "PT1.25S"] {
            assert_eq!(parsed(text).map(|d| d.to_string()).as_deref(), Some(text));
        }
    }

    #[test]
    fn malformed_durations_are_rejected() {
        for text in ["", "P", "PT", "1D", "P1H", "PT1D", "P1D2Y", "P1Y1Y", "PYD", "P1.5Y", "PT.5S", "PT5.S"] {
            assert!(parsed(text).is_none(), "{text:?} should be rejected");
        }
    }

    #[test]
    fn fixed_length_conversion_uses_nominal_months_and_years() {
        let d = parsed("P1Y1M1DT1H1M1S").and_then(|d| d.to_std());
        let expected = 365 * 86_400 + 30 * 86_400 + 86_400 + 3_600 + 60 + 1;
        assert_eq!(d, Some(Duration::from_secs(expected)));
        assert_eq!(parsed("-PT1S").and_then(|d| d.to_std()), None);
    }

    #[test]
    fn decomposition_from_std() {
        let d = XsdDuration::from_std(Duration::from_secs(86_400 + 5_400));
        assert_eq!(d.to_string(), "P1DT1H30M");
        assert_eq!(XsdDuration::from_std(Duration::ZERO).to_string(), "PT0S");
        let half = XsdDuration::from_std(Duration::from_millis(1_500));
        assert_eq!(half.to_string(), "PT1.5S");
    }
}
