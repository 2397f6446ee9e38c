//! Export of a simplified track as editor object text (`.exo`).
//!
//! Each pair of consecutive samples becomes one chained object whose size, position and
//! rotation interpolate linearly from the first sample to the second.

use std::fmt::Write as _;

use crate::foundation::error::{TrackError, TrackResult};
use crate::post::clean::TrackPoint;

/// Video parameters needed to place segments in editor coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExoOptions {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub new_width: Option<u32>,
    pub new_height: Option<u32>,
    pub new_fps: Option<u32>,
    pub audio_rate: u32,
    pub audio_channels: u32,
}

impl ExoOptions {
    pub fn new(width: u32, height: u32, fps: u32) -> Self {
        Self {
            width,
            height,
            fps,
            new_width: None,
            new_height: None,
            new_fps: None,
            audio_rate: 44_100,
            audio_channels: 2,
        }
    }

    fn validate(&self) -> TrackResult<()> {
        if self.width == 0 || self.height == 0 || self.fps == 0 {
            return Err(TrackError::validation(
                "exo export needs non-zero width, height and fps",
            ));
        }
        Ok(())
    }
}

/// One object spanning `frame_start..=frame_end`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Segment {
    pub id: usize,
    pub frame_start: f64,
    pub frame_end: f64,
    pub size_x: (f64, f64),
    pub size_y: (f64, f64),
    pub pos_x: (f64, f64),
    pub pos_y: (f64, f64),
    pub rotation: (f64, f64),
}

/// Pair consecutive samples. `frame_end` stops one frame short of the next sample.
pub fn segments(points: &[TrackPoint]) -> Vec<Segment> {
    points
        .windows(2)
        .enumerate()
        .map(|(id, w)| Segment {
            id,
            frame_start: w[0].frame,
            frame_end: w[1].frame - 1.0,
            size_x: (w[0].width, w[1].width),
            size_y: (w[0].height, w[1].height),
            pos_x: (w[0].x, w[1].x),
            pos_y: (w[0].y, w[1].y),
            rotation: (w[0].angle, w[1].angle),
        })
        .collect()
}

/// Move the origin to the video centre, rescale to the target size/rate, and switch to
/// 1-based frame numbers.
pub fn to_editor_space(segs: &[Segment], opts: &ExoOptions) -> Vec<Segment> {
    let x_shift = f64::from(opts.width) / -2.0;
    let y_shift = f64::from(opts.height) / -2.0;
    let x_scale = opts
        .new_width
        .map_or(1.0, |w| f64::from(w) / f64::from(opts.width));
    let y_scale = opts
        .new_height
        .map_or(1.0, |h| f64::from(h) / f64::from(opts.height));
    let fps_scale = opts
        .new_fps
        .map_or(1.0, |f| f64::from(f) / f64::from(opts.fps));

    let pos = |v: f64, shift: f64, scale: f64| (v + shift) * scale;
    segs.iter()
        .map(|s| Segment {
            id: s.id,
            frame_start: s.frame_start * fps_scale + 1.0,
            frame_end: s.frame_end * fps_scale + 1.0,
            size_x: (s.size_x.0 * x_scale, s.size_x.1 * x_scale),
            size_y: (s.size_y.0 * y_scale, s.size_y.1 * y_scale),
            pos_x: (pos(s.pos_x.0, x_shift, x_scale), pos(s.pos_x.1, x_shift, x_scale)),
            pos_y: (pos(s.pos_y.0, y_shift, y_scale), pos(s.pos_y.1, y_shift, y_scale)),
            rotation: s.rotation,
        })
        .collect()
}

fn num(v: f64) -> String {
    let r = (v * 100.0).round() / 100.0;
    if r.fract() == 0.0 {
        format!("{r:.1}")
    } else {
        format!("{r}")
    }
}

/// Render segments already in editor space as `.exo` text.
pub fn render_exo(segs: &[Segment], opts: &ExoOptions) -> TrackResult<String> {
    opts.validate()?;
    let last = segs
        .last()
        .ok_or_else(|| TrackError::validation("exo export needs at least two samples"))?;

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "[exedit]\nwidth={}\nheight={}\nrate={}\nscale=1\nlength={}\naudio_rate={}\naudio_ch={}\n\n",
        opts.new_width.unwrap_or(opts.width),
        opts.new_height.unwrap_or(opts.height),
        opts.new_fps.unwrap_or(opts.fps),
        last.frame_end as i64,
        opts.audio_rate,
        opts.audio_channels,
    );

    for s in segs {
        let id = s.id;
        let chain = if id != 0 { "chain=1\n" } else { "\n" };
        let _ = write!(
            out,
            "[{id}]\nstart={}\nend={}\nlayer=1\noverlay=1\ncamera=0\n{chain}",
            s.frame_start as i64, s.frame_end as i64,
        );
        let _ = write!(
            out,
            "[{id}.0]\n_name=Graphic\nSize=100\nrAspect=0.0\nLine width=4000\ntype=2\ncolor=ffffff\nname=\n",
        );
        let _ = write!(
            out,
            "[{id}.1]\n_name=Resize\nZoom%=100.00\nX={},{},1\nY={},{},1\nNo interpolation=0\nSpecified size by the number of dots=1\n",
            num(s.size_x.0),
            num(s.size_x.1),
            num(s.size_y.0),
            num(s.size_y.1),
        );
        let _ = write!(
            out,
            "[{id}.2]\n_name=Standard drawing\nX={},{},1\nY={},{},1\nZ=0.0\nZoom%=100.00\nClearness=70.0\nRotation={},{},1\nblend=0\n",
            num(s.pos_x.0),
            num(s.pos_x.1),
            num(s.pos_y.0),
            num(s.pos_y.1),
            num(s.rotation.0),
            num(s.rotation.1),
        );
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/post/exo.rs"]
mod tests;
