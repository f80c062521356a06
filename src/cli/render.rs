//! Text rendering of lookup results, shared by `search` and `interactive`.

use std::io::{self, Write};

use crate::core::display::{detail_lines, format_price, summary_lines};
use crate::core::medication::MedicationRecord;
use crate::matching::engine::LookupOutcome;

pub fn write_outcome<W: Write>(out: &mut W, outcome: &LookupOutcome<'_>) -> io::Result<()> {
    match outcome {
        LookupOutcome::Found {
            record,
            max_price,
            alternatives,
        } => {
            write_record(out, record)?;
            writeln!(out)?;
            write_alternatives(out, alternatives, *max_price)
        }
        LookupOutcome::NotFound { query, suggestions } => {
            write_not_found(out, query, suggestions)
        }
    }
}

pub fn write_record<W: Write>(out: &mut W, record: &MedicationRecord) -> io::Result<()> {
    writeln!(out, "Found medication:")?;
    for line in detail_lines(record) {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

pub fn write_alternatives<W: Write>(
    out: &mut W,
    alternatives: &[&MedicationRecord],
    max_price: Option<f64>,
) -> io::Result<()> {
    let budget = max_price
        .map(|max| format!(" (max price {})", format_price(max)))
        .unwrap_or_default();

    if alternatives.is_empty() {
        writeln!(out, "No matching alternatives found{budget}.")?;
        return Ok(());
    }

    writeln!(
        out,
        "Found {} alternative(s){budget}:",
        alternatives.len()
    )?;
    for alternative in alternatives {
        let mut lines = summary_lines(alternative).into_iter();
        if let Some(first) = lines.next() {
            writeln!(out, "  - {first}")?;
        }
        for line in lines {
            writeln!(out, "    {line}")?;
        }
    }
    Ok(())
}

pub fn write_not_found<W: Write>(
    out: &mut W,
    query: &str,
    suggestions: &[String],
) -> io::Result<()> {
    if suggestions.is_empty() {
        writeln!(out, "No medication found with name '{query}'.")?;
        return Ok(());
    }

    writeln!(out, "Medication '{query}' not found. Did you mean:")?;
    for suggestion in suggestions {
        writeln!(out, "  - {suggestion}")?;
    }
    Ok(())
}
