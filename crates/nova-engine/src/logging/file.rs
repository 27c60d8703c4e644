use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

/// `YYYY-MM-DD` (UTC) for `time`.
pub fn date_stamp(time: SystemTime) -> String {
    let secs = time
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let (y, m, d) = civil_from_days((secs / 86_400) as i64);
    format!("{y:04}-{m:02}-{d:02}")
}

// Days since 1970-01-01 to a proleptic Gregorian date.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let y = yoe + era * 400 + i64::from(m <= 2);
    (y, m, d)
}

/// First free path among `<stem>-<date>.log`, `<stem>-<date>-1.log`, ...
pub fn log_file_path(dir: &Path, stem: &str, date: &str) -> PathBuf {
    let base = format!("{stem}-{date}");
    let mut path = dir.join(format!("{base}.log"));
    let mut version = 0u32;
    while path.exists() {
        version += 1;
        path = dir.join(format!("{base}-{version}.log"));
    }
    path
}

/// Creates `dir` if needed and opens a fresh log file for today.
pub fn open_log_file(dir: &Path, stem: &str) -> Result<(PathBuf, File)> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let path = log_file_path(dir, stem, &date_stamp(SystemTime::now()));
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    Ok((path, file))
}

/// Writes every record to stderr and to the log file.
pub(crate) struct TeeWriter {
    file: File,
}

impl TeeWriter {
    pub(crate) fn new(file: File) -> Self {
        Self { file }
    }
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Console output is best effort; the file is the record.
        let _ = io::stderr().write_all(buf);
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let _ = io::stderr().flush();
        self.file.flush()
    }
}
