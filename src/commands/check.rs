//! Report issues in the latest post without changing it

use anyhow::Result;
use std::io::Write;

use super::fix;
use crate::DevChars;

/// Print the fix summary followed by the PowerShell count
pub fn run<W: Write>(app: &DevChars, output: &mut W) -> Result<()> {
    let inspection = fix::inspect(app, output)?;
    writeln!(
        output,
        "Found {} PowerShell capitalization errors",
        inspection.counts.powershell_case
    )?;
    Ok(())
}
