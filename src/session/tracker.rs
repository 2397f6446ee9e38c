use std::path::PathBuf;

use crate::foundation::core::{FrameIndex, PixelPos};
use crate::foundation::error::TrackResult;
use crate::log::event_log::EventLog;
use crate::log::record::LogRecord;
use crate::render::composite::{FrameView, stamp_points};
use crate::render::outline::outline_points;
use crate::session::host::Host;
use crate::session::settings::{Param, Settings};
use crate::transform::affine::{pose_affine, transform_points};
use crate::transform::angle::Angle;

pub const STATUS_RECORDING: &str = "Recording...";
pub const STATUS_STOPPED: &str = "Recording stopped";

pub const EXPORT_FILTER: &str = "Comma-Separated Values (*.csv)|*.csv";
pub const EXPORT_DEFAULT_NAME: &str = "raw_tracking_data.csv";

pub const HELP_TEXT: &str = "\
Manual Tracking
===============
Log the position, size and rotation of an object by hand, one frame at a time.
You are the tracker: the plugin only records where you put the box.

Usage
-----
1. Unbind the Up/Down shortcuts in the editor if you want to rotate the box.
2. Load a video and enable this filter.
3. Pick a rough width and height for the box.
4. Click on the preview to start recording.
5. Move the pointer so the box covers the target, step frames with the Right
   arrow, and keep following the target. Up/Down rotates the box.
6. Click again to stop. To redo a stretch after a bad cut, stop, step back a
   few frames and click to resume.
7. Stop recording, then press [Save CSV] to keep the data.
8. Press [Memory Clear] before starting an unrelated session.

CSV format
----------
No header. Each line is: frame,x,y,width,height,rotation
Frame numbers repeat when frames are revisited; the last line for a frame wins
during clean-up.

Settings
--------
width / height : box size, logged with every frame
RoT            : degrees added per Up/Down press
mode           : unused
bufSz          : log write buffer in bytes
line_w         : outline thickness (display only)
R / G / B      : outline color (display only)
";

/// Recording session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingState {
    Idle,
    Recording,
}

/// Keys the tracker reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotateKey {
    /// Up arrow: rotate by `+RoT`.
    Increase,
    /// Down arrow: rotate by `-RoT`.
    Decrease,
}

/// Pointer and keyboard input delivered by the host's message dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    PointerRelease(PixelPos),
    PointerMove(PixelPos),
    /// `key` is `None` for keys the tracker ignores. `repeat` is the host's auto-repeat count.
    KeyDown { key: Option<RotateKey>, repeat: u16 },
}

/// Buttons exposed on the filter panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    SaveCsv,
    MemoryClear,
    Help,
}

/// All mutable state of one filter instance.
///
/// The host calls into a tracker from a single dispatch thread. Every entry point takes
/// `&mut self`, so a frame snapshot can never interleave with input handling.
pub struct Tracker<P> {
    state: RecordingState,
    pointer: PixelPos,
    angle: Angle,
    settings: Settings,
    color: P,
    log: EventLog,
}

impl<P: Copy> Tracker<P> {
    /// Set up a tracker and open the pose log at `cache_path`.
    ///
    /// A log that fails to open is reported and left closed; frames are still drawn.
    pub fn init<H>(host: &H, settings: Settings, cache_path: impl Into<PathBuf>) -> Self
    where
        H: Host<Pixel = P>,
    {
        let color = host.device_color(settings.rgb());
        let mut log = EventLog::new(cache_path, settings.buf_size());
        if let Err(e) = log.reopen() {
            tracing::warn!(error = %e, "pose log unavailable; frames will not be recorded");
        }
        Self {
            state: RecordingState::Idle,
            pointer: PixelPos::default(),
            angle: Angle::new(),
            settings,
            color,
            log,
        }
    }

    pub fn state(&self) -> RecordingState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state == RecordingState::Recording
    }

    pub fn pointer(&self) -> PixelPos {
        self.pointer
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn border_color(&self) -> P {
        self.color
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Draw the outline and log the pose for one frame.
    ///
    /// Returns `true` when the frame was modified. Nothing happens unless recording is on,
    /// this filter is active and the host is editing.
    #[tracing::instrument(skip(self, host, frame_buf))]
    pub fn process_frame<H>(
        &mut self,
        host: &H,
        frame: FrameIndex,
        frame_buf: &mut FrameView<'_, P>,
    ) -> bool
    where
        H: Host<Pixel = P>,
    {
        if !self.is_recording() || !host.is_filter_active() || !host.is_editing() {
            return false;
        }

        let pointer = self.pointer;
        let angle = self.angle;
        let spec = self.settings.box_spec();

        let local = outline_points(spec);
        let placed = transform_points(pose_affine(angle, pointer), &local);
        let drawn = stamp_points(frame_buf, &placed, self.color);
        tracing::trace!(points = local.len(), drawn, "outline composited");

        let rec = LogRecord {
            frame,
            x: pointer.x,
            y: pointer.y,
            width: spec.width,
            height: spec.height,
            angle: angle.degrees(),
        };
        if let Err(e) = self.log.append(&rec) {
            tracing::warn!(error = %e, frame = frame.0, "pose record dropped");
        }
        true
    }

    /// React to a host setting change. `value` is stored clamped to its declared range.
    pub fn on_setting_changed<H>(&mut self, host: &H, param: Param, value: i32)
    where
        H: Host<Pixel = P>,
    {
        let value = self.settings.set(param, value);
        match param {
            Param::BufSize => {
                if let Err(e) = self.log.resize(value as usize) {
                    tracing::warn!(error = %e, "pose log resize failed");
                }
            }
            p if p.is_color() => {
                self.color = host.device_color(self.settings.rgb());
            }
            _ => {}
        }
    }

    /// Handle one input event. Returns `true` when the event was consumed.
    pub fn handle_input<H>(&mut self, host: &mut H, event: InputEvent) -> bool
    where
        H: Host<Pixel = P>,
    {
        match event {
            InputEvent::PointerRelease(at) => {
                if host.is_filter_active() {
                    self.toggle_recording(host, at);
                }
                true
            }
            InputEvent::PointerMove(at) => {
                if host.is_filter_active() && self.is_recording() {
                    self.pointer = at;
                }
                true
            }
            InputEvent::KeyDown { key, repeat } => {
                let Some(key) = key else {
                    return false;
                };
                if !host.is_filter_active() {
                    return false;
                }
                let step = self.settings.get(Param::RotStep) * i32::from(repeat);
                let delta = match key {
                    RotateKey::Increase => step,
                    RotateKey::Decrease => -step,
                };
                let now = self.angle.add(delta);
                tracing::debug!(delta, angle = now, "rotated");
                true
            }
        }
    }

    fn toggle_recording<H: Host<Pixel = P>>(&mut self, host: &mut H, at: PixelPos) {
        match self.state {
            RecordingState::Idle => {
                self.pointer = at;
                self.state = RecordingState::Recording;
                host.set_status(STATUS_RECORDING);
            }
            RecordingState::Recording => {
                self.state = RecordingState::Idle;
                host.set_status(STATUS_STOPPED);
            }
        }
        tracing::debug!(state = ?self.state, x = at.x, y = at.y, "recording toggled");
    }

    /// Run a panel button. Returns `false` when the command did not complete.
    #[tracing::instrument(skip(self, host))]
    pub fn run_command<H>(&mut self, host: &mut H, cmd: Command) -> bool
    where
        H: Host<Pixel = P>,
    {
        match cmd {
            Command::SaveCsv => {
                let Some(dest) = host.prompt_save_path(EXPORT_FILTER, EXPORT_DEFAULT_NAME) else {
                    return false;
                };
                match self.log.export(&dest) {
                    Ok(bytes) => {
                        tracing::info!(dest = %dest.display(), bytes, "tracking data exported");
                        host.message_box("Save tracking data", "Saved!");
                        true
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "tracking data export failed");
                        false
                    }
                }
            }
            Command::MemoryClear => {
                let cleared = self.log.truncate();
                if let Err(e) = &cleared {
                    tracing::warn!(error = %e, "pose log clear failed");
                }
                host.message_box("Memory Clear", "Cached Data Deleted!");
                cleared.is_ok()
            }
            Command::Help => {
                host.message_box("Instructions", HELP_TEXT);
                true
            }
        }
    }

    /// Close the pose log, flushing anything still buffered.
    pub fn teardown(mut self) -> TrackResult<()> {
        self.log.close()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/tracker.rs"]
mod tests;
