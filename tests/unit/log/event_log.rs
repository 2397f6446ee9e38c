use super::*;
use crate::foundation::core::FrameIndex;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "manual_track_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn rec(frame: u64, angle: i32) -> LogRecord {
    LogRecord {
        frame: FrameIndex(frame),
        x: 5,
        y: 5,
        width: 100,
        height: 100,
        angle,
    }
}

#[test]
fn truncate_then_append_leaves_exactly_one_line() {
    let dir = temp_dir("log_truncate");
    let path = dir.join(CACHE_FILE_NAME);
    std::fs::write(&path, "old,junk\n").unwrap();

    let mut log = EventLog::open(&path, 8192).unwrap();
    log.append(&rec(9, 0)).unwrap();
    log.truncate().unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    assert!(log.is_open());

    log.append(&rec(1, 12)).unwrap();
    log.flush().unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1,5,5,100,100,12\n");
}

#[test]
fn open_appends_to_existing_content() {
    let dir = temp_dir("log_append");
    let path = dir.join(CACHE_FILE_NAME);
    std::fs::write(&path, "0,1,1,10,10,0\n").unwrap();

    let mut log = EventLog::open(&path, 64).unwrap();
    log.append(&rec(1, 12)).unwrap();
    log.close().unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "0,1,1,10,10,0\n1,5,5,100,100,12\n"
    );
}

#[test]
fn resize_flushes_pending_records_before_reopening() {
    let dir = temp_dir("log_resize");
    let path = dir.join(CACHE_FILE_NAME);

    let mut log = EventLog::open(&path, 8192).unwrap();
    log.append(&rec(1, 0)).unwrap();
    log.append(&rec(2, 0)).unwrap();
    log.resize(32).unwrap();
    assert_eq!(log.capacity(), 32);
    assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 2);

    log.append(&rec(3, 0)).unwrap();
    log.close().unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 3);
}

#[test]
fn export_copies_flushed_bytes_and_keeps_appending() {
    let dir = temp_dir("log_export");
    let path = dir.join(CACHE_FILE_NAME);
    let dest = dir.join("raw_tracking_data.csv");

    let mut log = EventLog::open(&path, 8192).unwrap();
    log.append(&rec(1, 12)).unwrap();
    let bytes = log.export(&dest).unwrap();
    assert_eq!(bytes, 17);
    assert_eq!(std::fs::read(&dest).unwrap(), std::fs::read(&path).unwrap());

    log.append(&rec(2, 24)).unwrap();
    log.close().unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 2);
    assert_eq!(std::fs::read_to_string(&dest).unwrap().lines().count(), 1);
}

#[test]
fn failed_export_still_reopens() {
    let dir = temp_dir("log_export_fail");
    let path = dir.join(CACHE_FILE_NAME);
    let dest = dir.join("missing_dir").join("out.csv");

    let mut log = EventLog::open(&path, 8192).unwrap();
    assert!(log.export(&dest).is_err());
    assert!(log.is_open());
    log.append(&rec(1, 0)).unwrap();
}

#[test]
fn export_onto_the_log_itself_is_rejected_and_keeps_content() {
    let dir = temp_dir("log_export_self");
    let path = dir.join(CACHE_FILE_NAME);

    let mut log = EventLog::open(&path, 8192).unwrap();
    log.append(&rec(1, 0)).unwrap();
    log.append(&rec(2, 12)).unwrap();

    assert!(matches!(log.export(&path), Err(TrackError::Validation(_))));
    let aliased = dir.join(".").join(CACHE_FILE_NAME);
    assert!(log.export(&aliased).is_err());
    assert!(log.is_open());

    log.close().unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "1,5,5,100,100,0\n2,5,5,100,100,12\n"
    );
}

#[test]
fn closed_log_rejects_appends() {
    let dir = temp_dir("log_closed");
    let mut log = EventLog::new(dir.join(CACHE_FILE_NAME), 32);
    assert!(matches!(
        log.append(&rec(1, 0)),
        Err(TrackError::LogClosed(_))
    ));
    assert!(log.close().is_ok());
}

#[test]
fn drop_flushes_buffered_records() {
    let dir = temp_dir("log_drop");
    let path = dir.join(CACHE_FILE_NAME);
    {
        let mut log = EventLog::open(&path, 8192).unwrap();
        log.append(&rec(7, 0)).unwrap();
    }
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "7,5,5,100,100,0\n");
}
