use std::fmt;

/// One benchmark measurement: a header's (version, job) paired with the
/// duration from the timing line that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub version: String,
    pub job: String,
    pub elapsed_secs: u64,
}

/// Grouping key for records: the (version, job) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub version: String,
    pub job: String,
}

impl Record {
    pub fn new(version: impl Into<String>, job: impl Into<String>, elapsed_secs: u64) -> Self {
        Self {
            version: version.into(),
            job: job.into(),
            elapsed_secs,
        }
    }

    /// Split into the grouping key and the measured value.
    pub fn into_parts(self) -> (RecordKey, u64) {
        (
            RecordKey {
                version: self.version,
                job: self.job,
            },
            self.elapsed_secs,
        )
    }
}

impl RecordKey {
    pub fn new(version: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            job: job.into(),
        }
    }
}

/// Renders as "<version> <job>", the leading column of the summary table.
impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.version, self.job)
    }
}
