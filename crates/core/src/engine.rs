// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decomposition and rendering of a millisecond count.
//!
//! A duration is split along the unit ladder into [`Piece`]s, optionally
//! rounded with carries into larger units, rendered through a
//! [`Dictionary`] and joined into one phrase.

use crate::dictionary::{Dictionary, Languages};
use crate::error::HumanizeError;
use crate::languages;
use crate::options::{Options, MAX_DECIMAL_POINTS};
use crate::unit::{self, Unit, UnitMeasures};

const DEFAULT_DELIMITER: &str = ", ";
const DEFAULT_DECIMAL: &str = ".";

/// One unit and how many of it the duration holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub unit: Unit,
    pub count: f64,
}

/// Format `ms` according to `options`, resolving the language against
/// `languages` before the built-ins.
pub fn humanize(ms: f64, options: &Options, languages: &Languages) -> Result<String, HumanizeError> {
    options.validate()?;
    let dictionary =
        languages::resolve(&options.language, options.fallbacks.as_deref(), languages)?;

    let ladder = unit::ladder(&options.units);
    let Some(&smallest) = ladder.last() else {
        return Err(HumanizeError::configuration("units must name at least one unit"));
    };

    let mut pieces = decompose(ms.abs(), &ladder, &options.unit_measures, options.max_decimal_points);
    if options.round {
        round(&mut pieces, &options.unit_measures, options.largest);
    }
    tracing::trace!(ms, ?pieces, "decomposed duration");

    let rendered: Vec<String> = pieces
        .iter()
        .filter(|piece| is_occupied(piece.count))
        .take(options.largest.unwrap_or(usize::MAX))
        .map(|piece| render(piece.count, piece.unit, dictionary, options))
        .collect();

    if rendered.is_empty() {
        return Ok(render(0.0, smallest, dictionary, options));
    }

    let delimiter = options
        .delimiter
        .as_deref()
        .or(dictionary.list_delimiter())
        .unwrap_or(DEFAULT_DELIMITER);
    let conjunction = options.conjunction.as_deref().filter(|c| !c.is_empty());
    Ok(join(&rendered, delimiter, conjunction, options.serial_comma))
}

/// Split `ms` along `ladder`, largest unit first.
///
/// Every unit but the last takes a whole count. The last keeps the exact
/// remainder, or with `max_decimal_points` the remainder truncated to that
/// many digits.
pub(crate) fn decompose(
    ms: f64,
    ladder: &[Unit],
    measures: &UnitMeasures,
    max_decimal_points: Option<u32>,
) -> Vec<Piece> {
    let mut remaining = ms;
    let mut pieces = Vec::with_capacity(ladder.len());
    for (i, &unit) in ladder.iter().enumerate() {
        let unit_ms = measures.get(unit);
        let count = if i + 1 == ladder.len() {
            let quotient = remaining / unit_ms;
            match max_decimal_points {
                Some(points) => truncate_decimals(quotient, points),
                None => quotient,
            }
        } else {
            (remaining / unit_ms).floor()
        };
        pieces.push(Piece { unit, count });
        remaining -= count * unit_ms;
    }
    pieces
}

/// Truncate (not round) `value` to `points` fractional digits.
///
/// The scaled floor is followed by a fixed-point round trip so the result is
/// the nearest double to the truncated decimal: 7.999 at two points is 7.99.
fn truncate_decimals(value: f64, points: u32) -> f64 {
    let points = points.min(MAX_DECIMAL_POINTS);
    let scale = 10f64.powi(points as i32);
    let truncated = (value * scale).floor() / scale;
    format!("{truncated:.prec$}", prec = points as usize)
        .parse()
        .unwrap_or(truncated)
}

/// Round every piece to a whole count, smallest first.
///
/// A rounded count carries into the next larger piece when it is an exact
/// multiple of the ratio between the two units, or when the piece lies
/// beyond the `largest` display budget counted from the first occupied
/// piece.
pub fn round(pieces: &mut [Piece], measures: &UnitMeasures, largest: Option<usize>) {
    let first_occupied = pieces
        .iter()
        .position(|piece| is_occupied(piece.count))
        .unwrap_or(0);

    for i in (0..pieces.len()).rev() {
        pieces[i].count = pieces[i].count.round();
        if i == 0 {
            break;
        }

        let ratio = measures.get(pieces[i - 1].unit) / measures.get(pieces[i].unit);
        let over_budget =
            largest.is_some_and(|largest| i.saturating_sub(first_occupied) >= largest);
        if pieces[i].count % ratio == 0.0 || over_budget {
            let carried = pieces[i].count / ratio;
            pieces[i - 1].count += carried;
            pieces[i].count = 0.0;
        }
    }
}

fn is_occupied(count: f64) -> bool {
    count != 0.0 && !count.is_nan()
}

/// Render one piece: number and word in the dictionary's order.
pub fn render(count: f64, unit: Unit, dictionary: &Dictionary, options: &Options) -> String {
    let decimal = options
        .decimal
        .as_deref()
        .or(dictionary.decimal_separator())
        .unwrap_or(DEFAULT_DECIMAL);
    let count_str = dictionary.format_count(count, decimal);
    let word = dictionary.word(unit, count);

    if dictionary.is_word_first() {
        format!("{word}{}{count_str}", options.spacer)
    } else {
        format!("{count_str}{}{word}", options.spacer)
    }
}

/// Join rendered pieces into a list.
///
/// With a conjunction, two pieces are joined by it alone; three or more get
/// the delimiter between all but the last two, an optional serial comma, then
/// the conjunction.
pub fn join(pieces: &[String], delimiter: &str, conjunction: Option<&str>, serial_comma: bool) -> String {
    match (conjunction, pieces) {
        (Some(conjunction), [first, second]) => format!("{first}{conjunction}{second}"),
        (Some(conjunction), [init @ .., last]) if init.len() >= 2 => {
            let comma = if serial_comma { "," } else { "" };
            format!("{}{comma}{conjunction}{last}", init.join(delimiter))
        }
        _ => pieces.join(delimiter),
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
