use crate::ops::{hex, HostRecord, PhoneNumberOps};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Encodes one phone number per line of `r`, writing `<formatted>\t<wire hex>\t<country code>` to `w`.
///
/// Blank lines are skipped. So are lines that fail, after their report has been emitted.
/// Returns the count of lines written.
pub fn encode_lines<R: HostRecord>(
    ops: &PhoneNumberOps,
    r: impl BufRead,
    w: &mut impl Write,
) -> Result<usize> {
    let mut w_count = 0;
    for line in r.lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        tracing::debug!(text, "encoding");

        let Ok(record) = ops.input::<R>(text) else {
            continue;
        };
        let Ok(formatted) = ops.output(&record) else {
            continue;
        };
        writeln!(
            w,
            "{}\t{}\t{}",
            formatted,
            hex(&ops.send(&record)),
            ops.country_code(&record)
        )?;
        w_count += 1;
    }
    w.flush()?;
    Ok(w_count)
}
