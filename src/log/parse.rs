use crate::Result;
use crate::log::pattern::LineMatcher;
use crate::log::record::Record;
use anyhow::Context;
use std::io;
use std::iter::FusedIterator;

/// Matcher state between lines. Only the pending header is buffered.
#[derive(Debug)]
enum State {
    AwaitingHeader,
    AwaitingTiming { version: String, job: String },
}

/// Streaming extractor over a line source.
///
/// Scans for a header line, then for the next timing line, and yields one
/// [`Record`] per completed pair. Everything else is skipped, including further
/// header lines while a timing line is pending: the first header wins.
///
/// A header still pending at end of input produces nothing. Read errors and
/// out-of-range durations are yielded as `Err`, after which the iterator is
/// exhausted.
#[derive(Debug)]
pub struct Records<I> {
    lines: I,
    matcher: LineMatcher,
    state: State,
    lineno: usize,
    done: bool,
}

impl<I, S> Records<I>
where
    I: Iterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    pub fn new(lines: I) -> Result<Self> {
        Ok(Self {
            lines,
            matcher: LineMatcher::new()?,
            state: State::AwaitingHeader,
            lineno: 0,
            done: false,
        })
    }

    /// Advance the state machine by one line.
    fn step(&mut self, line: &str) -> Result<Option<Record>> {
        let (next, emitted) = match std::mem::replace(&mut self.state, State::AwaitingHeader) {
            State::AwaitingHeader => match self.matcher.header(line) {
                Some((version, job)) => (
                    State::AwaitingTiming {
                        version: version.to_string(),
                        job: job.to_string(),
                    },
                    None,
                ),
                None => (State::AwaitingHeader, None),
            },
            State::AwaitingTiming { version, job } => match self.matcher.timing(line) {
                Some(digits) => {
                    let elapsed_secs: u64 = digits.parse().with_context(|| {
                        format!(
                            "timing line {}: duration {:?} does not fit in u64",
                            self.lineno, digits
                        )
                    })?;
                    (
                        State::AwaitingHeader,
                        Some(Record {
                            version,
                            job,
                            elapsed_secs,
                        }),
                    )
                }
                None => (State::AwaitingTiming { version, job }, None),
            },
        };
        self.state = next;
        Ok(emitted)
    }
}

impl<I, S> Iterator for Records<I>
where
    I: Iterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(err)) => {
                    self.done = true;
                    let err = anyhow::Error::new(err)
                        .context(format!("read input line {}", self.lineno + 1));
                    return Some(Err(err));
                }
                None => {
                    self.done = true;
                    if let State::AwaitingTiming { version, job } = &self.state {
                        tracing::debug!(%version, %job, "input ended before timing line; header dropped");
                    }
                    return None;
                }
            };
            self.lineno += 1;

            match self.step(line.as_ref()) {
                Ok(Some(record)) => {
                    tracing::trace!(
                        line = self.lineno,
                        version = %record.version,
                        job = %record.job,
                        secs = record.elapsed_secs,
                        "record"
                    );
                    return Some(Ok(record));
                }
                Ok(None) => continue,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<I, S> FusedIterator for Records<I>
where
    I: Iterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
}

/// Build a fresh extractor over `lines`, e.g. `stdin().lock().lines()`.
pub fn extract_records<I, S>(lines: I) -> Result<Records<I::IntoIter>>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    Records::new(lines.into_iter())
}

/// Extractor over in-memory text.
pub fn records_from_str(
    text: &str,
) -> Result<Records<impl Iterator<Item = io::Result<&str>> + '_>> {
    Records::new(text.lines().map(Ok::<&str, io::Error>))
}
