//! Fakes shared by the unit tests.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::core::{FilePicker, HostEnvironment, PickFileRequest};

/// Host with a simulated filesystem: only paths added with `add_path` exist,
/// and every one of them counts as a file. Built with `on_disk`, it defers to
/// the real filesystem instead.
pub struct FakeEnvironment {
    platform: String,
    user_name: String,
    home: Option<PathBuf>,
    existing: Option<HashSet<PathBuf>>,
}

impl FakeEnvironment {
    pub fn new(platform: &str, user_name: &str, home: Option<PathBuf>) -> Self {
        Self {
            platform: platform.to_string(),
            user_name: user_name.to_string(),
            home,
            existing: Some(HashSet::new()),
        }
    }

    pub fn on_disk(platform: &str, user_name: &str, home: &Path) -> Self {
        Self {
            platform: platform.to_string(),
            user_name: user_name.to_string(),
            home: Some(home.to_path_buf()),
            existing: None,
        }
    }

    pub fn add_path(&mut self, path: &Path) {
        if let Some(existing) = &mut self.existing {
            existing.insert(path.to_path_buf());
        }
    }
}

impl HostEnvironment for FakeEnvironment {
    fn platform(&self) -> String {
        self.platform.clone()
    }

    fn user_name(&self) -> String {
        self.user_name.clone()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn path_exists(&self, path: &Path) -> bool {
        match &self.existing {
            Some(existing) => existing.contains(path),
            None => path.exists(),
        }
    }

    fn is_file(&self, path: &Path) -> bool {
        match &self.existing {
            Some(existing) => existing.contains(path),
            None => path.is_file(),
        }
    }
}

/// File picker that always returns the same answer and records each request.
#[derive(Clone)]
pub struct ScriptedPicker {
    answer: Option<PathBuf>,
    requests: Arc<Mutex<Vec<PickFileRequest>>>,
}

impl ScriptedPicker {
    pub fn selecting(path: &str) -> Self {
        Self {
            answer: Some(PathBuf::from(path)),
            requests: Arc::default(),
        }
    }

    pub fn cancelling() -> Self {
        Self {
            answer: None,
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<PickFileRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl FilePicker for ScriptedPicker {
    fn pick_file(&self, request: &PickFileRequest) -> Option<PathBuf> {
        self.requests.lock().unwrap().push(request.clone());
        self.answer.clone()
    }
}

/// Shared buffer that collects formatted log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Route `tracing` output on the current thread into a buffer until the
/// returned guard is dropped.
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}
