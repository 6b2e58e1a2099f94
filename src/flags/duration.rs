//! Text codec for duration flags.
//!
//! Accepts a sequence of `<decimal><unit>` terms such as `99s`, `1h30m` or
//! `1.5ms`, plus a bare `0`. Formatting produces the shortest form that parses
//! back to the same value (`1m39s`, `250ms`, `0s`).

use std::fmt::Write;
use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Fraction digits beyond this are ignored; they are below nanosecond scale.
const MAX_FRACTION_DIGITS: usize = 18;

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(3_600 * NANOS_PER_SEC),
        _ => None,
    }
}

fn overflow() -> String {
    "duration out of range".to_string()
}

fn split_digits(s: &str) -> (&str, &str) {
    let len = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(len)
}

/// Parses duration text. The error is a human readable reason.
pub fn parse_duration(text: &str) -> Result<Duration, String> {
    let mut rest = text;
    if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    } else if rest.starts_with('-') {
        return Err("negative durations are not supported".to_string());
    }
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err("empty duration".to_string());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (int_part, after) = split_digits(rest);
        let (frac_part, after) = match after.strip_prefix('.') {
            Some(tail) => split_digits(tail),
            None => ("", after),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(format!("expected a number at '{rest}'"));
        }

        let unit_len = after
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(after.len());
        let (unit, tail) = after.split_at(unit_len);
        if unit.is_empty() {
            return Err("missing unit".to_string());
        }
        let scale = unit_nanos(unit).ok_or_else(|| format!("unknown unit '{unit}'"))?;

        let whole: u128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| overflow())?
        };
        let mut nanos = whole.checked_mul(scale).ok_or_else(overflow)?;

        let mut fraction: u128 = 0;
        let mut divisor: u128 = 1;
        for digit in frac_part.bytes().take(MAX_FRACTION_DIGITS) {
            fraction = fraction * 10 + u128::from(digit - b'0');
            divisor *= 10;
        }
        nanos = nanos
            .checked_add(fraction * scale / divisor)
            .ok_or_else(overflow)?;

        total = total.checked_add(nanos).ok_or_else(overflow)?;
        rest = tail;
    }

    let secs = u64::try_from(total / NANOS_PER_SEC).map_err(|_| overflow())?;
    Ok(Duration::new(secs, (total % NANOS_PER_SEC) as u32))
}

/// Renders `value / 10^scale_digits` without trailing fraction zeros.
fn decimal(value: u128, scale_digits: usize) -> String {
    let scale = 10u128.pow(scale_digits as u32);
    let (whole, frac) = (value / scale, value % scale);
    if frac == 0 {
        return whole.to_string();
    }
    let digits = format!("{frac:0scale_digits$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < 1_000 {
        return format!("{nanos}ns");
    }
    if nanos < 1_000_000 {
        return format!("{}µs", decimal(nanos, 3));
    }
    if nanos < NANOS_PER_SEC {
        return format!("{}ms", decimal(nanos, 6));
    }

    let secs = nanos / NANOS_PER_SEC;
    let (hours, minutes, seconds) = (secs / 3_600, secs / 60 % 60, secs % 60);

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    out.push_str(&decimal(seconds * NANOS_PER_SEC + nanos % NANOS_PER_SEC, 9));
    out.push('s');
    out
}
