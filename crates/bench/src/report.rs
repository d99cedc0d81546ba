use std::io::{self, Write};

use crate::generator::ALL_SHAPES;
use crate::stats::as_micros;
use crate::sweep::BenchmarkRecord;

pub const SIZE_HEADER: &str = "Size";
pub const THRESHOLD_HEADER: &str = "Threshold";

/// Writes `records` as comma-separated rows under a `key_header,Random,Reverse,NearlySorted` header.
/// Times are whole microseconds.
pub fn write_table<W: Write>(
    out: &mut W,
    key_header: &str,
    records: &[BenchmarkRecord],
) -> io::Result<()> {
    write!(out, "{key_header}")?;
    for shape in ALL_SHAPES {
        write!(out, ",{}", shape.column())?;
    }
    writeln!(out)?;

    for record in records {
        write!(out, "{}", record.key)?;
        for shape in ALL_SHAPES {
            write!(out, ",{}", as_micros(record.time(shape)))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
