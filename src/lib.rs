//! Manual Track is a hand-driven object tracker for video frames.
//!
//! An operator steers a rotatable rectangle over the picture with the pointer and keyboard.
//! While recording, every processed frame gets the rectangle outline stamped into it and a
//! `frame,x,y,w,h,angle` line appended to a buffered cache file. The cache can be exported
//! as CSV and post-processed into editor object text.
//!
//! # Layout
//!
//! - [`session`]: the [`Tracker`] state machine and the [`Host`] seam to the outside world
//! - [`render`] and [`transform`]: outline points, pose transform and pixel stamping
//! - [`log`]: record format and the buffered [`EventLog`]
//! - [`replay`]: headless sessions driven by a JSON [`Script`]
//! - [`post`]: clean-up passes and `.exo` export
#![forbid(unsafe_code)]

pub mod foundation;
pub mod log;
pub mod post;
pub mod render;
pub mod replay;
pub mod session;
pub mod transform;

pub use foundation::core::{
    Affine, BoxSpec, FrameIndex, PixelPos, PixelYc, Point, Rgb8, Vec2,
};
pub use foundation::error::{TrackError, TrackResult};
pub use log::event_log::{CACHE_FILE_NAME, EventLog};
pub use log::record::{LogRecord, parse_log, read_log};
pub use post::clean::{TrackPoint, dedupe_frames, simplify, smooth_positions, triangle_area};
pub use post::exo::{ExoOptions, Segment, render_exo, segments, to_editor_space};
pub use render::composite::{FrameView, stamp_points};
pub use render::outline::outline_points;
pub use replay::script::{
    BACKGROUND, FrameSize, ReplayReport, Rgba8, Script, ScriptHost, Step, replay,
};
pub use session::host::Host;
pub use session::settings::{PARAMS, Param, ParamDesc, Settings};
pub use session::tracker::{
    Command, EXPORT_DEFAULT_NAME, EXPORT_FILTER, HELP_TEXT, InputEvent, RecordingState,
    RotateKey, STATUS_RECORDING, STATUS_STOPPED, Tracker,
};
pub use transform::affine::{pose_affine, transform_points};
pub use transform::angle::Angle;
