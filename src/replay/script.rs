use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::core::{FrameIndex, PixelPos, Rgb8};
use crate::foundation::error::{TrackError, TrackResult};
use crate::render::composite::FrameView;
use crate::session::host::Host;
use crate::session::settings::{Param, Settings};
use crate::session::tracker::{Command, InputEvent, RotateKey, Tracker};

/// Straight RGBA8 pixel used by the headless host.
pub type Rgba8 = [u8; 4];

/// Fill colour of replay frames before each draw.
pub const BACKGROUND: Rgba8 = [0, 0, 0, 255];

/// Visible frame dimensions for a scripted session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

/// One scripted host callback.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    PointerRelease {
        x: i32,
        y: i32,
    },
    PointerMove {
        x: i32,
        y: i32,
    },
    Key {
        key: RotateKey,
        #[serde(default = "default_repeat")]
        repeat: u16,
    },
    /// Run per-frame processing on a freshly cleared frame.
    Frame {
        index: u64,
    },
    Set {
        param: String,
        value: i32,
    },
    Command(Command),
    Active(bool),
    Editing(bool),
}

fn default_repeat() -> u16 {
    1
}

/// A recorded operator session, replayable without an editing host.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Script {
    pub frame: FrameSize,
    /// Row pitch in pixels; defaults to the frame width.
    #[serde(default)]
    pub stride: Option<u32>,
    /// Initial setting overrides keyed by setting name.
    #[serde(default)]
    pub settings: BTreeMap<String, i32>,
    /// Answer given to the "Save CSV" prompt. `None` dismisses the dialog.
    #[serde(default)]
    pub save_path: Option<PathBuf>,
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_reader<R: std::io::Read>(r: R) -> TrackResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TrackError::serde(format!("parse replay script JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> TrackResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| TrackError::io("open", path, e))?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> TrackResult<()> {
        if self.frame.width == 0 || self.frame.height == 0 {
            return Err(TrackError::validation("script frame must be non-empty"));
        }
        if self.stride.is_some_and(|s| s < self.frame.width) {
            return Err(TrackError::validation(
                "script stride must be >= frame width",
            ));
        }
        for name in self.settings.keys() {
            Param::from_name(name)?;
        }
        for step in &self.steps {
            if let Step::Set { param, .. } = step {
                Param::from_name(param)?;
            }
        }
        Ok(())
    }
}

/// [`Host`] over an in-memory RGBA frame, answering prompts from the script.
#[derive(Debug, Default)]
pub struct ScriptHost {
    pub active: bool,
    pub editing: bool,
    pub save_path: Option<PathBuf>,
    pub statuses: Vec<String>,
    pub messages: Vec<(String, String)>,
}

impl ScriptHost {
    pub fn new(save_path: Option<PathBuf>) -> Self {
        Self {
            active: true,
            editing: true,
            save_path,
            ..Self::default()
        }
    }
}

impl Host for ScriptHost {
    type Pixel = Rgba8;

    fn device_color(&self, rgb: Rgb8) -> Rgba8 {
        [rgb.r, rgb.g, rgb.b, 255]
    }

    fn is_filter_active(&self) -> bool {
        self.active
    }

    fn is_editing(&self) -> bool {
        self.editing
    }

    fn prompt_save_path(&mut self, _filter: &str, _default_name: &str) -> Option<PathBuf> {
        self.save_path.clone()
    }

    fn set_status(&mut self, text: &str) {
        tracing::info!(status = text, "status");
        self.statuses.push(text.to_string());
    }

    fn message_box(&mut self, title: &str, body: &str) {
        tracing::info!(title, "message box");
        self.messages.push((title.to_string(), body.to_string()));
    }
}

/// Outcome of [`replay`].
#[derive(Debug)]
pub struct ReplayReport {
    /// Last processed frame (background only when no frame was modified).
    pub frame: image::RgbaImage,
    /// Number of `frame` steps that drew an outline.
    pub frames_drawn: usize,
    pub statuses: Vec<String>,
    pub messages: Vec<(String, String)>,
    /// Per-command completion flags in script order.
    pub commands: Vec<(Command, bool)>,
    pub final_pointer: PixelPos,
    pub final_angle: i32,
}

/// Drive a fresh [`Tracker`] through `script`, logging to `cache_path`.
#[tracing::instrument(skip(script))]
pub fn replay(script: &Script, cache_path: &Path) -> TrackResult<ReplayReport> {
    script.validate()?;

    let mut settings = Settings::default();
    settings.apply_overrides(&script.settings)?;

    let width = script.frame.width as usize;
    let height = script.frame.height as usize;
    let stride = script.stride.map_or(width, |s| s as usize);
    let mut pixels = vec![BACKGROUND; stride * height];

    let mut host = ScriptHost::new(script.save_path.clone());
    let mut tracker = Tracker::init(&host, settings, cache_path);

    let mut frames_drawn = 0;
    let mut commands = Vec::new();
    for step in &script.steps {
        match step {
            Step::PointerRelease { x, y } => {
                tracker.handle_input(&mut host, InputEvent::PointerRelease(PixelPos::new(*x, *y)));
            }
            Step::PointerMove { x, y } => {
                tracker.handle_input(&mut host, InputEvent::PointerMove(PixelPos::new(*x, *y)));
            }
            Step::Key { key, repeat } => {
                tracker.handle_input(
                    &mut host,
                    InputEvent::KeyDown {
                        key: Some(*key),
                        repeat: *repeat,
                    },
                );
            }
            Step::Frame { index } => {
                pixels.fill(BACKGROUND);
                let mut view =
                    FrameView::new(&mut pixels, stride, width as i32, height as i32)?;
                if tracker.process_frame(&host, FrameIndex(*index), &mut view) {
                    frames_drawn += 1;
                }
            }
            Step::Set { param, value } => {
                tracker.on_setting_changed(&host, Param::from_name(param)?, *value);
            }
            Step::Command(cmd) => {
                let ok = tracker.run_command(&mut host, *cmd);
                commands.push((*cmd, ok));
            }
            Step::Active(v) => host.active = *v,
            Step::Editing(v) => host.editing = *v,
        }
    }

    let final_pointer = tracker.pointer();
    let final_angle = tracker.angle().degrees();
    tracker.teardown()?;

    let mut flat = Vec::with_capacity(width * height * 4);
    for row in pixels.chunks(stride) {
        for px in &row[..width] {
            flat.extend_from_slice(px);
        }
    }
    let frame = image::RgbaImage::from_raw(script.frame.width, script.frame.height, flat)
        .ok_or_else(|| TrackError::validation("replay frame buffer size mismatch"))?;

    Ok(ReplayReport {
        frame,
        frames_drawn,
        statuses: host.statuses,
        messages: host.messages,
        commands,
        final_pointer,
        final_angle,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/replay/script.rs"]
mod tests;
