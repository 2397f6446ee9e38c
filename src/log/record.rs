use std::fmt;
use std::path::Path;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{TrackError, TrackResult};

/// One pose snapshot: `frame,x,y,width,height,angle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LogRecord {
    pub frame: FrameIndex,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Stored accumulator degrees, not the rendered rotation.
    pub angle: i32,
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.frame.0, self.x, self.y, self.width, self.height, self.angle
        )
    }
}

impl LogRecord {
    /// Parse one log line. `line_no` is 1-based and only used for error reporting.
    pub fn parse_line(line: &str, line_no: usize) -> TrackResult<Self> {
        let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
        if fields.len() != 6 {
            return Err(TrackError::parse(
                line_no,
                format!("expected 6 fields, found {}", fields.len()),
            ));
        }

        let int = |idx: usize, name: &str| -> TrackResult<i32> {
            fields[idx]
                .parse::<i32>()
                .map_err(|e| TrackError::parse(line_no, format!("{name}: {e}")))
        };

        let frame = fields[0]
            .parse::<u64>()
            .map_err(|e| TrackError::parse(line_no, format!("frame: {e}")))?;

        Ok(Self {
            frame: FrameIndex(frame),
            x: int(1, "x")?,
            y: int(2, "y")?,
            width: int(3, "width")?,
            height: int(4, "height")?,
            angle: int(5, "angle")?,
        })
    }
}

/// Parse a whole log body. Blank lines are skipped.
pub fn parse_log(text: &str) -> TrackResult<Vec<LogRecord>> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| LogRecord::parse_line(l, i + 1))
        .collect()
}

pub fn read_log(path: &Path) -> TrackResult<Vec<LogRecord>> {
    let text = std::fs::read_to_string(path).map_err(|e| TrackError::io("read", path, e))?;
    parse_log(&text)
}

#[cfg(test)]
#[path = "../../tests/unit/log/record.rs"]
mod tests;
