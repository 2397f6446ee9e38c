//! Named host settings with declared bounds and defaults.

use std::collections::BTreeMap;

use crate::foundation::core::{BoxSpec, Rgb8};
use crate::foundation::error::{TrackError, TrackResult};

/// Host-visible setting, in slider order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Param {
    Width,
    Height,
    /// Rate of turn: degrees added per rotation keypress.
    RotStep,
    /// Reserved by the host surface; has no effect.
    Mode,
    BufSize,
    LineWidth,
    Red,
    Green,
    Blue,
}

/// Bounds and default of one setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamDesc {
    pub param: Param,
    /// Label shown by the host.
    pub name: &'static str,
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

impl ParamDesc {
    pub fn clamp(&self, v: i32) -> i32 {
        v.clamp(self.min, self.max)
    }
}

#[rustfmt::skip]
pub const PARAMS: [ParamDesc; 9] = [
    ParamDesc { param: Param::Width, name: "width", min: 10, max: 1024, default: 100 },
    ParamDesc { param: Param::Height, name: "height", min: 10, max: 1024, default: 100 },
    ParamDesc { param: Param::RotStep, name: "RoT", min: 1, max: 120, default: 12 },
    ParamDesc { param: Param::Mode, name: "mode", min: 1, max: 3, default: 1 },
    ParamDesc { param: Param::BufSize, name: "bufSz", min: 32, max: 8192, default: 8192 },
    ParamDesc { param: Param::LineWidth, name: "line_w", min: 1, max: 10, default: 3 },
    ParamDesc { param: Param::Red, name: "R", min: 0, max: 255, default: 0 },
    ParamDesc { param: Param::Green, name: "G", min: 0, max: 255, default: 255 },
    ParamDesc { param: Param::Blue, name: "B", min: 0, max: 255, default: 0 },
];

impl Param {
    pub const ALL: [Param; 9] = [
        Param::Width,
        Param::Height,
        Param::RotStep,
        Param::Mode,
        Param::BufSize,
        Param::LineWidth,
        Param::Red,
        Param::Green,
        Param::Blue,
    ];

    pub fn desc(self) -> &'static ParamDesc {
        &PARAMS[self as usize]
    }

    /// Look up a setting by its host label (`"RoT"`) or serde name (`"rot_step"`).
    pub fn from_name(name: &str) -> TrackResult<Self> {
        let key = name.trim();
        if let Some(d) = PARAMS.iter().find(|d| d.name.eq_ignore_ascii_case(key)) {
            return Ok(d.param);
        }
        serde_json::from_value(serde_json::Value::String(key.to_ascii_lowercase()))
            .map_err(|_| TrackError::validation(format!("unknown setting '{key}'")))
    }

    pub fn is_color(self) -> bool {
        matches!(self, Param::Red | Param::Green | Param::Blue)
    }
}

/// Current value of every setting, always within declared bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    values: [i32; 9],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            values: PARAMS.map(|d| d.default),
        }
    }
}

impl Settings {
    pub fn get(&self, p: Param) -> i32 {
        self.values[p as usize]
    }

    /// Store `v` clamped to the declared range and return the stored value.
    pub fn set(&mut self, p: Param, v: i32) -> i32 {
        let v = p.desc().clamp(v);
        self.values[p as usize] = v;
        v
    }

    pub fn box_spec(&self) -> BoxSpec {
        BoxSpec {
            width: self.get(Param::Width),
            height: self.get(Param::Height),
            thickness: self.get(Param::LineWidth),
        }
    }

    pub fn rgb(&self) -> Rgb8 {
        // Colour settings are clamped to 0..=255 on every write.
        Rgb8::new(
            self.get(Param::Red) as u8,
            self.get(Param::Green) as u8,
            self.get(Param::Blue) as u8,
        )
    }

    pub fn buf_size(&self) -> usize {
        self.get(Param::BufSize) as usize
    }

    /// Apply partial overrides keyed by setting name.
    pub fn apply_overrides(&mut self, overrides: &BTreeMap<String, i32>) -> TrackResult<()> {
        for (name, v) in overrides {
            let p = Param::from_name(name)?;
            self.set(p, *v);
        }
        Ok(())
    }
}

impl serde::Serialize for Settings {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut m = s.serialize_map(Some(PARAMS.len()))?;
        for d in &PARAMS {
            m.serialize_entry(&d.param, &self.get(d.param))?;
        }
        m.end()
    }
}

/// Keys are resolved with [`Param::from_name`], so host labels and serde names both work.
impl<'de> serde::Deserialize<'de> for Settings {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = <BTreeMap<String, i32> as serde::Deserialize>::deserialize(d)?;
        let mut out = Settings::default();
        out.apply_overrides(&raw).map_err(serde::de::Error::custom)?;
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/settings.rs"]
mod tests;
