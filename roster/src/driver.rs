use std::io::Write;
use roster_lib::record::{is_topper, Record};
use roster_lib::tracer::Traced;
use tracing::info;
use crate::console::Console;
use crate::error::DriverError;

/// Run the fixed demonstration sequence, writing every line to `out`
///
/// # Errors
///
/// Returns `DriverError::Validation` if a record is created or updated with a
/// score outside `0..=100`, and `DriverError::Io` if `out` rejects a write or
/// flush.
pub fn run<W: Write>(out: W) -> Result<W, DriverError> {
    let console = Console::new(out);

    let rahul = Record::new("Rahul", 92)?;
    let mut anita = Record::new("Anita", 67)?;
    info!(first = %rahul.identifier(), second = %anita.identifier(), "records created");

    console.line("Records created using constructor:")?;
    console.line(rahul.describe())?;
    console.line(anita.describe())?;

    console.blank()?;
    console.line("Access through accessors:")?;
    console.line(format_args!("Identifier: {}", rahul.identifier()))?;
    console.line(format_args!("Score: {}", rahul.score()))?;
    console.line(format_args!("Rank: {}", rahul.rank()))?;

    console.blank()?;
    console.line("Updating score through validated setter:")?;
    anita.set_score(88)?;
    console.line(anita.describe())?;

    console.blank()?;
    console.line("Checking toppers through traced call:")?;
    let check = Traced::with_sink("is_topper", is_topper, &console);
    for record in [&rahul, &anita] {
        check.call((record,));
    }
    drop(check);

    Ok(console.finish()?)
}
