//! Rolling Logger
//!
//! File logger for Tauri shells. Lines go to `<dir>/<app>.log`, which is
//! rotated by size into `<app>.log.1 .. <app>.log.N`. The most recent lines
//! are also kept in memory so they can be shown without touching disk.
//!
//! `log` records are bridged into `tracing` on desktop. On Android the `log`
//! facade goes to logcat instead and only `tracing` events reach the file.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use thiserror::Error;
use tracing_subscriber::fmt::MakeWriter;

/// Rotate once the active file grows past this
pub const DEFAULT_MAX_BYTES: u64 = 2 * 1024 * 1024;
/// Rotated files kept besides the active one
pub const DEFAULT_MAX_FILES: usize = 3;
/// Lines kept in memory
pub const DEFAULT_RING_CAPACITY: usize = 500;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("log directory: {0}")]
    Io(#[from] io::Error),
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("failed to install subscriber: {0}")]
    Subscriber(String),
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub max_bytes: u64,
    pub max_files: usize,
    pub ring_capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            max_files: DEFAULT_MAX_FILES,
            ring_capacity: DEFAULT_RING_CAPACITY,
        }
    }
}

// ========================
// Ring buffer
// ========================

/// Bounded queue of the most recent log lines
#[derive(Debug)]
pub struct RingBuffer {
    lines: Mutex<VecDeque<String>>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn push(&self, line: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line.into());
    }

    /// Up to `count` lines, oldest first
    pub fn recent(&self, count: usize) -> Vec<String> {
        let lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        let skip = lines.len().saturating_sub(count);
        lines.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ========================
// Rolling file
// ========================

/// Size-rotated log file
#[derive(Debug)]
pub struct RollingFile {
    dir: PathBuf,
    name: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    pub fn open(dir: impl AsRef<Path>, name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{}.log", name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            dir,
            name: name.to_string(),
            max_bytes,
            max_files,
            file,
            written,
        })
    }

    pub fn active_path(&self) -> PathBuf {
        self.dir.join(format!("{}.log", self.name))
    }

    fn rotated_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}.log.{}", self.name, index))
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.max_files == 0 {
            // Nothing kept: start the active file over
            self.file = File::create(self.active_path())?;
            self.written = 0;
            return Ok(());
        }
        let oldest = self.rotated_path(self.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.max_files).rev() {
            let from = self.rotated_path(index);
            if from.exists() {
                fs::rename(&from, self.rotated_path(index + 1))?;
            }
        }
        fs::rename(self.active_path(), self.rotated_path(1))?;
        self.file = OpenOptions::new().create(true).append(true).open(self.active_path())?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

// ========================
// Subscriber plumbing
// ========================

struct LoggerState {
    file: Mutex<RollingFile>,
    ring: RingBuffer,
}

/// One formatted event; written to the file and the ring on drop
pub struct LineWriter {
    state: Arc<LoggerState>,
    buf: Vec<u8>,
}

impl Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let mut file = self.state.file.lock().unwrap_or_else(|e| e.into_inner());
        let _ = file.write_all(&self.buf);
        let _ = file.flush();
        drop(file);
        let text = String::from_utf8_lossy(&self.buf);
        for line in text.lines().filter(|l| !l.is_empty()) {
            self.state.ring.push(line);
        }
    }
}

#[derive(Clone)]
struct StateWriter(Arc<LoggerState>);

impl<'a> MakeWriter<'a> for StateWriter {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter {
            state: Arc::clone(&self.0),
            buf: Vec::new(),
        }
    }
}

/// Local timestamps like `2024-05-01 10:00:00.123`
struct LocalTime;

impl tracing_subscriber::fmt::time::FormatTime for LocalTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

static STATE: OnceLock<Arc<LoggerState>> = OnceLock::new();

/// Install the global logger with default limits
pub fn init_logger(dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(dir, app_name, LoggerConfig::default())
}

pub fn init_logger_with(dir: impl AsRef<Path>, app_name: &str, config: LoggerConfig) -> Result<(), LoggerError> {
    if STATE.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    let file = RollingFile::open(dir, app_name, config.max_bytes, config.max_files)?;
    let state = Arc::new(LoggerState {
        file: Mutex::new(file),
        ring: RingBuffer::new(config.ring_capacity),
    });
    STATE
        .set(Arc::clone(&state))
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    let subscriber = tracing_subscriber::fmt()
        .with_writer(StateWriter(state))
        .with_timer(LocalTime)
        .with_ansi(false)
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_tag(app_name)
                .with_max_level(log::LevelFilter::Info),
        );
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| LoggerError::Subscriber(e.to_string()))?;
    }

    #[cfg(not(target_os = "android"))]
    {
        use tracing_subscriber::util::SubscriberInitExt;
        subscriber
            .try_init()
            .map_err(|e| LoggerError::Subscriber(e.to_string()))?;
    }

    tracing::info!("{} logger started", app_name);
    Ok(())
}

fn ensure_initialized() -> Result<(), LoggerError> {
    if STATE.get().is_some() {
        Ok(())
    } else {
        Err(LoggerError::Subscriber("logger not initialized".into()))
    }
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::info!("{}", message);
    Ok(())
}

pub fn warn(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::warn!("{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::error!("{}", message);
    Ok(())
}

/// Most recent lines from the in-memory buffer, oldest first
pub fn recent_lines(count: usize) -> Vec<String> {
    STATE.get().map(|s| s.ring.recent(count)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_keeps_newest() {
        let ring = RingBuffer::new(3);
        for i in 0..5 {
            ring.push(format!("line {}", i));
        }
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.recent(10), vec!["line 2", "line 3", "line 4"]);
        assert_eq!(ring.recent(1), vec!["line 4"]);
    }

    #[test]
    fn test_zero_capacity_ring_stays_empty() {
        let ring = RingBuffer::new(0);
        ring.push("ignored");
        assert!(ring.is_empty());
    }

    #[test]
    fn test_rolling_file_rotates_by_size() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "app", 10, 2).unwrap();

        file.write_all(b"0123456789").unwrap();
        file.write_all(b"abcdefghij").unwrap();
        file.write_all(b"ABCDEFGHIJ").unwrap();
        file.write_all(b"last").unwrap();
        file.flush().unwrap();

        let read = |name: &str| fs::read_to_string(dir.path().join(name)).unwrap();
        assert_eq!(read("app.log"), "last");
        assert_eq!(read("app.log.1"), "ABCDEFGHIJ");
        assert_eq!(read("app.log.2"), "abcdefghij");
        assert!(!dir.path().join("app.log.3").exists());
    }

    #[test]
    fn test_rolling_file_appends_to_existing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.log"), "old\n").unwrap();
        let mut file = RollingFile::open(dir.path(), "app", 1024, 2).unwrap();
        file.write_all(b"new\n").unwrap();
        file.flush().unwrap();
        assert_eq!(fs::read_to_string(file.active_path()).unwrap(), "old\nnew\n");
    }

    #[test]
    fn test_line_writer_feeds_file_and_ring() {
        let dir = tempfile::tempdir().unwrap();
        let state = Arc::new(LoggerState {
            file: Mutex::new(RollingFile::open(dir.path(), "app", 1024, 1).unwrap()),
            ring: RingBuffer::new(10),
        });
        let make = StateWriter(Arc::clone(&state));
        {
            let mut writer = make.make_writer();
            writer.write_all(b"first line\n").unwrap();
        }
        {
            let mut writer = make.make_writer();
            writer.write_all(b"second line\n").unwrap();
        }
        assert_eq!(state.ring.recent(5), vec!["first line", "second line"]);
        let on_disk = fs::read_to_string(dir.path().join("app.log")).unwrap();
        assert_eq!(on_disk, "first line\nsecond line\n");
    }
}
