use crate::Result;
use crate::log::RecordKey;
use crate::model::ResultTable;
use anyhow::Context;
use std::fmt;
use std::io::Write;

/// One summary line without its newline: `<version> <job>\t<secs> <secs> ...`
struct Row<'a> {
    key: &'a RecordKey,
    secs: &'a [u64],
}

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t", self.key)?;
        for (i, s) in self.secs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", s)?;
        }
        Ok(())
    }
}

/// Render the table, one line per key in table order (empty for an empty
/// table).
pub fn render(table: &ResultTable) -> String {
    table
        .iter()
        .map(|(key, secs)| format!("{}\n", Row { key, secs }))
        .collect()
}

/// Stream the table to `out` in the same format as [`render`], then flush.
pub fn write_table<W: Write>(table: &ResultTable, mut out: W) -> Result<()> {
    for (key, secs) in table.iter() {
        writeln!(out, "{}", Row { key, secs })
            .with_context(|| format!("write summary line for {}", key))?;
    }
    out.flush().context("flush summary")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{Record, records_from_str};
    use crate::model::aggregate;
    use pretty_assertions::assert_eq;

    fn summarize(text: &str) -> String {
        render(&aggregate(records_from_str(text).unwrap()).unwrap())
    }

    #[test]
    fn repeated_job_on_one_line() {
        let text = "\
=== ./rust-raytracer-1.0 sphere ===
Render done at 100 (5s)...
=== ./rust-raytracer-1.0 sphere ===
Render done at 200 (7s)...
";
        assert_eq!(summarize(text), "1.0 sphere\t5 7\n");
    }

    #[test]
    fn interleaved_jobs_in_first_seen_order() {
        let text = "\
=== ./rust-raytracer-1.0 sphere ===
Render done at 100 (5s)...
=== ./rust-raytracer-1.0 cube ===
Render done at 150 (3s)...
=== ./rust-raytracer-1.0 sphere ===
Render done at 250 (6s)...
";
        assert_eq!(summarize(text), "1.0 sphere\t5 6\n1.0 cube\t3\n");
    }

    #[test]
    fn key_order_follows_first_completed_pair() {
        // The sphere header is swallowed while cube awaits its timing line.
        let text = "\
=== ./rust-raytracer-1.0 cube ===
=== ./rust-raytracer-1.0 sphere ===
Render done at 100 (5s)...
=== ./rust-raytracer-1.0 sphere ===
Render done at 200 (4s)...
=== ./rust-raytracer-1.0 cube ===
Render done at 300 (2s)...
";
        assert_eq!(summarize(text), "1.0 cube\t5 2\n1.0 sphere\t4\n");
    }

    #[test]
    fn empty_table_renders_nothing() {
        assert_eq!(summarize("no benchmarks here\n"), "");
    }

    #[test]
    fn zero_durations_are_kept() {
        let table: ResultTable = vec![
            Record::new("2.1", "teapot", 42),
            Record::new("2.1", "teapot", 0),
        ]
        .into_iter()
        .collect();
        assert_eq!(render(&table), "2.1 teapot\t42 0\n");
    }

    #[test]
    fn write_table_matches_render() {
        let table: ResultTable = vec![
            Record::new("1.0", "sphere", 5),
            Record::new("1.0", "cube", 3),
            Record::new("1.0", "sphere", 7),
        ]
        .into_iter()
        .collect();
        let mut buf = Vec::new();
        write_table(&table, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render(&table));
        assert_eq!(render(&table), "1.0 sphere\t5 7\n1.0 cube\t3\n");
    }

    #[test]
    fn write_table_reports_io_failure() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let table: ResultTable = vec![Record::new("1.0", "sphere", 5)].into_iter().collect();
        let err = write_table(&table, Broken).unwrap_err();
        assert_eq!(err.to_string(), "write summary line for 1.0 sphere");
    }
}
