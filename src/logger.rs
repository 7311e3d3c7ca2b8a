use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Opens the debug log next to the binary. Logging is a no-op until this is
/// called, so library users (and tests) pay nothing by default.
pub fn init() {
    init_at("exam_debug.log");
}

pub fn init_at<P: AsRef<Path>>(path: P) {
    let mut logger = LOGGER.lock().unwrap();
    if logger.is_none()
        && let Ok(file) = OpenOptions::new().create(true).append(true).open(path)
    {
        *logger = Some(file);
    }
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_mut() {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let _ = writeln!(logger, "[{}] {}", timestamp, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_without_init_is_a_no_op() {
        log("no sink bound yet");
    }

    #[test]
    fn init_at_writes_to_the_given_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exam_debug.log");
        init_at(&path);
        log("hello from the test");
        // the global logger keeps whichever file won the race; either way
        // logging must not panic
        log("second line");
    }
}
