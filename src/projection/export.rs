//! Tabular export of a projection run
//!
//! Produces the spreadsheet layout the surrounding application serves for
//! download: a generation-timestamp row, a labeled parameter row, a header
//! row, then one numeric row per day with empty cells for unused signal
//! columns.

use super::ledger::ProjectionResult;
use chrono::NaiveDateTime;
use std::io::Write;

/// Write the ledger as CSV
///
/// The timestamp is supplied by the caller so exports are testable;
/// binaries pass the current local time.
pub fn write_ledger<W: Write>(
    writer: W,
    result: &ProjectionResult,
    generated_at: NaiveDateTime,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);

    csv_writer.write_record([
        "Generated",
        &generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    ])?;

    let params = &result.params;
    csv_writer.write_record([
        "Inputs".to_string(),
        format!("Invested={:.2}", params.invested),
        format!("FirstReward={:.2}", params.first_reward),
        format!("Signals={}", params.signals_per_day),
        format!("Days={}", params.days),
        format!("FirstTime={}", if params.first_time { "1" } else { "0" }),
    ])?;

    let mut header = vec!["Day".to_string(), "Start".to_string()];
    for i in 1..=result.max_signal_columns {
        header.push(format!("Rate {}", i));
        header.push(format!("Amt {}", i));
        header.push(format!("Gain {}", i));
        header.push(format!("After {}", i));
    }
    header.push("End".to_string());
    csv_writer.write_record(&header)?;

    for day in &result.days {
        let mut row = vec![day.day.to_string(), format!("{:.2}", day.start_balance)];
        for signal in &day.signals {
            match signal {
                Some(entry) => {
                    row.push(format!("{:.4}", entry.rate));
                    row.push(format!("{:.2}", entry.base_amount));
                    row.push(format!("{:.2}", entry.gain));
                    row.push(format!("{:.2}", entry.balance));
                }
                None => {
                    row.extend(std::iter::repeat(String::new()).take(4));
                }
            }
        }
        row.push(format!("{:.2}", day.end_balance));
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}
