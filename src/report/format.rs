//! Number formatting and text chart primitives

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::Write;

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Format an amount as currency: sign first, then symbol, thousands separators
/// and exactly `decimals` fraction digits
///
/// `format_currency(Decimal::new(-123456, 2), "₹", 2)` gives `-₹1,234.56`.
pub fn format_currency(amount: Decimal, symbol: &str, decimals: u32) -> String {
    let rounded = amount.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.*}", decimals as usize, rounded.abs());
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut grouped = group_thousands(integer);
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    format!("{sign}{symbol}{grouped}")
}

/// Format a percentage with one decimal, e.g. `12.5%`
pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    format!("{:.1}%", rounded)
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Horizontal bar whose length is proportional to `value / max`
///
/// Non-positive values or a non-positive `max` give an empty bar.
pub fn bar(value: Decimal, max: Decimal, width: usize) -> String {
    if value <= Decimal::ZERO || max <= Decimal::ZERO {
        return String::new();
    }
    let ratio = (value / max).min(Decimal::ONE).to_f64().unwrap_or(0.0);
    let length = (ratio * width as f64).round() as usize;
    "█".repeat(length.max(1))
}

/// One-line sparkline of `values`, resampled down to at most `width` columns
pub fn sparkline(values: &[Decimal], width: usize) -> String {
    if values.is_empty() || width == 0 {
        return String::new();
    }

    let sampled: Vec<Decimal> = if values.len() > width {
        (0..width)
            .map(|column| values[column * (values.len() - 1) / (width - 1).max(1)])
            .collect()
    } else {
        values.to_vec()
    };

    // The spread between extreme balances can exceed the Decimal range
    let sampled: Vec<f64> = sampled
        .iter()
        .map(|value| value.to_f64().unwrap_or(0.0))
        .collect();
    let min = sampled.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sampled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let top = SPARK_LEVELS.len() - 1;

    sampled
        .iter()
        .map(|value| {
            if span <= 0.0 {
                return SPARK_LEVELS[top / 2];
            }
            let level = ((value - min) / span * top as f64).round() as usize;
            SPARK_LEVELS[level.min(top)]
        })
        .collect()
}

/// Column alignment for [`write_table`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Write a plain text table with a header row
///
/// Columns are separated by two spaces and sized to their widest cell.
/// Trailing whitespace is trimmed from every line.
pub fn write_table(
    output: &mut dyn Write,
    headers: &[&str],
    align: &[Align],
    rows: &[Vec<String>],
) -> std::io::Result<()> {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            rows.iter()
                .filter_map(|row| row.get(column))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    for row in std::iter::once(&header_cells).chain(rows) {
        let line = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(column, (cell, &width))| {
                match align.get(column).copied().unwrap_or(Align::Left) {
                    Align::Left => format!("{cell:<width$}"),
                    Align::Right => format!("{cell:>width$}"),
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(output, "{}", line.trim_end())?;
    }

    Ok(())
}
