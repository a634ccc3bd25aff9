//! Character specification
//!
//! A [`CharacterSpec`] is the validated, read-only description of a sprite:
//! one shape per body part, one color per body part, the sprite edge length
//! and the number of walk-cycle frames.
//!
//! Callers usually hold the loose [`CharacterAttributes`] mapping (the JSON
//! shape used by save files and web requests) and convert it once with
//! [`CharacterAttributes::validate`]. Missing keys fall back to the documented
//! defaults; malformed values are reported as [`SpecError`].

use image::{Rgb, Rgba};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default sprite edge length in pixels
pub const DEFAULT_SIZE: u32 = 32;

/// Default number of animation frames (a single static pose)
pub const DEFAULT_ANIMATION_FRAMES: u32 = 1;

/// Default head and arm color
pub const DEFAULT_SKIN_COLOR: HexColor = HexColor::new(0xFF, 0xDD, 0xAA);

/// Default body and leg color
pub const DEFAULT_CLOTHING_COLOR: HexColor = HexColor::new(0x00, 0x66, 0xCC);

/// Shape name that explicitly leaves a body part out
pub const NO_SHAPE: &str = "none";

/// Errors raised while building or using a [`CharacterSpec`]
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// Color string is not `#RRGGBB`
    #[error("invalid color {0:?} (expected #RRGGBB)")]
    InvalidColor(String),

    /// Shape name not recognized for this body part
    #[error("unknown {part} type {value:?}")]
    UnknownPartType { part: BodyPart, value: String },

    /// `animation_frames` was zero or negative
    #[error("animation_frames must be at least 1 (got {0})")]
    NoFrames(i64),

    /// Frame index past the end of the walk cycle
    #[error("frame {frame} out of range (character has {total} frames)")]
    FrameOutOfRange { frame: u32, total: u32 },

    /// Spec file could not be read or written
    #[error("spec file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Spec file is not a valid attribute mapping
    #[error("malformed spec: {0}")]
    Json(#[from] serde_json::Error),
}

/// How unrecognized shape names are treated at the validation boundary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PartPolicy {
    /// Unknown shape names leave the part undrawn
    #[default]
    Lenient,
    /// Unknown shape names are an error
    Strict,
}

/// The four drawable body parts, in draw order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Legs,
    Body,
    Arms,
    Head,
}

impl BodyPart {
    /// Attribute key holding this part's shape
    pub fn type_key(self) -> &'static str {
        match self {
            BodyPart::Legs => "leg_type",
            BodyPart::Body => "body_type",
            BodyPart::Arms => "arm_type",
            BodyPart::Head => "head_type",
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BodyPart::Legs => "leg",
            BodyPart::Body => "body",
            BodyPart::Arms => "arm",
            BodyPart::Head => "head",
        };
        f.write_str(name)
    }
}

/// Closed set of shape variants for one body part
pub trait PartShape: Copy + Sized + 'static {
    /// Every variant, in menu order
    const ALL: [Self; 4];

    /// Lowercase attribute name
    fn as_str(self) -> &'static str;

    /// Look a variant up by its attribute name
    fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|shape| shape.as_str() == name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HeadShape {
    #[default]
    Round,
    Square,
    Oval,
    Triangle,
}

impl PartShape for HeadShape {
    const ALL: [Self; 4] = [Self::Round, Self::Square, Self::Oval, Self::Triangle];

    fn as_str(self) -> &'static str {
        match self {
            Self::Round => "round",
            Self::Square => "square",
            Self::Oval => "oval",
            Self::Triangle => "triangle",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BodyShape {
    #[default]
    Normal,
    Muscular,
    Slim,
    Round,
}

impl PartShape for BodyShape {
    const ALL: [Self; 4] = [Self::Normal, Self::Muscular, Self::Slim, Self::Round];

    fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Muscular => "muscular",
            Self::Slim => "slim",
            Self::Round => "round",
        }
    }
}

/// Shape shared by arms and legs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LimbShape {
    #[default]
    Normal,
    Muscular,
    Thin,
    Long,
}

impl PartShape for LimbShape {
    const ALL: [Self; 4] = [Self::Normal, Self::Muscular, Self::Thin, Self::Long];

    fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Muscular => "muscular",
            Self::Thin => "thin",
            Self::Long => "long",
        }
    }
}

/// 24-bit RGB color written as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(pub [u8; 3]);

impl HexColor {
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    pub const GRAY: Self = Self::new(0x80, 0x80, 0x80);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn rgb(self) -> Rgb<u8> {
        Rgb(self.0)
    }

    /// Fully opaque RGBA form
    pub fn rgba(self) -> Rgba<u8> {
        let [r, g, b] = self.0;
        Rgba([r, g, b, 255])
    }
}

impl FromStr for HexColor {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(digits) = s.strip_prefix('#') else {
            return Err(SpecError::InvalidColor(s.to_string()));
        };
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SpecError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| SpecError::InvalidColor(s.to_string()))
        };
        Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

/// Validated character description
///
/// A `None` shape means the part is not drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSpec {
    pub head: Option<HeadShape>,
    pub body: Option<BodyShape>,
    pub arms: Option<LimbShape>,
    pub legs: Option<LimbShape>,
    pub head_color: HexColor,
    pub body_color: HexColor,
    pub arm_color: HexColor,
    pub leg_color: HexColor,
    /// Sprite edge length in pixels
    pub size: u32,
    /// Frames in the walk cycle (at least 1)
    pub animation_frames: u32,
}

impl Default for CharacterSpec {
    fn default() -> Self {
        Self {
            head: Some(HeadShape::default()),
            body: Some(BodyShape::default()),
            arms: Some(LimbShape::default()),
            legs: Some(LimbShape::default()),
            head_color: DEFAULT_SKIN_COLOR,
            body_color: DEFAULT_CLOTHING_COLOR,
            arm_color: DEFAULT_SKIN_COLOR,
            leg_color: DEFAULT_CLOTHING_COLOR,
            size: DEFAULT_SIZE,
            animation_frames: DEFAULT_ANIMATION_FRAMES,
        }
    }
}

impl CharacterSpec {
    /// Parse a JSON attribute mapping and validate it
    pub fn from_json(json: &str, policy: PartPolicy) -> Result<Self, SpecError> {
        let attributes: CharacterAttributes = serde_json::from_str(json)?;
        attributes.validate(policy)
    }

    /// Pretty-printed JSON attribute mapping
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(&self.to_attributes())?)
    }

    /// Flatten back into the attribute mapping
    pub fn to_attributes(&self) -> CharacterAttributes {
        fn shape_name<T: PartShape>(shape: Option<T>) -> String {
            shape.map_or(NO_SHAPE, T::as_str).to_string()
        }

        CharacterAttributes {
            head_type: Some(shape_name(self.head)),
            body_type: Some(shape_name(self.body)),
            arm_type: Some(shape_name(self.arms)),
            leg_type: Some(shape_name(self.legs)),
            head_color: Some(self.head_color.to_string()),
            body_color: Some(self.body_color.to_string()),
            arm_color: Some(self.arm_color.to_string()),
            leg_color: Some(self.leg_color.to_string()),
            size: Some(i64::from(self.size)),
            animation_frames: Some(i64::from(self.animation_frames)),
        }
    }

    /// Colors in palette order: head, body, arm, leg
    pub fn part_colors(&self) -> [HexColor; 4] {
        [self.head_color, self.body_color, self.arm_color, self.leg_color]
    }
}

/// Loose attribute mapping, as stored in JSON spec files
///
/// Unknown keys (a web request's `name` or `frame`, say) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arm_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leg_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arm_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_frames: Option<i64>,
}

impl CharacterAttributes {
    /// Resolve defaults and check every value once
    pub fn validate(&self, policy: PartPolicy) -> Result<CharacterSpec, SpecError> {
        let defaults = CharacterSpec::default();

        let animation_frames = match self.animation_frames {
            None => defaults.animation_frames,
            Some(n) if n < 1 => return Err(SpecError::NoFrames(n)),
            Some(n) => u32::try_from(n).unwrap_or(u32::MAX),
        };

        // Non-positive sizes render as empty sprites rather than failing
        let size = match self.size {
            None => defaults.size,
            Some(n) => u32::try_from(n.max(0)).unwrap_or(u32::MAX),
        };

        Ok(CharacterSpec {
            head: resolve_shape(BodyPart::Head, self.head_type.as_deref(), defaults.head, policy)?,
            body: resolve_shape(BodyPart::Body, self.body_type.as_deref(), defaults.body, policy)?,
            arms: resolve_shape(BodyPart::Arms, self.arm_type.as_deref(), defaults.arms, policy)?,
            legs: resolve_shape(BodyPart::Legs, self.leg_type.as_deref(), defaults.legs, policy)?,
            head_color: resolve_color(self.head_color.as_deref(), defaults.head_color)?,
            body_color: resolve_color(self.body_color.as_deref(), defaults.body_color)?,
            arm_color: resolve_color(self.arm_color.as_deref(), defaults.arm_color)?,
            leg_color: resolve_color(self.leg_color.as_deref(), defaults.leg_color)?,
            size,
            animation_frames,
        })
    }
}

fn resolve_shape<T: PartShape>(
    part: BodyPart,
    value: Option<&str>,
    default: Option<T>,
    policy: PartPolicy,
) -> Result<Option<T>, SpecError> {
    let Some(name) = value else {
        return Ok(default);
    };
    if name == NO_SHAPE {
        return Ok(None);
    }
    match (T::parse(name), policy) {
        (Some(shape), _) => Ok(Some(shape)),
        (None, PartPolicy::Strict) => Err(SpecError::UnknownPartType {
            part,
            value: name.to_string(),
        }),
        (None, PartPolicy::Lenient) => {
            tracing::warn!("Unknown {} {:?}, part will not be drawn", part.type_key(), name);
            Ok(None)
        }
    }
}

fn resolve_color(value: Option<&str>, default: HexColor) -> Result<HexColor, SpecError> {
    value.map_or(Ok(default), |s| s.parse())
}

/// Load a JSON spec file
pub fn load_spec(path: &Path, policy: PartPolicy) -> Result<CharacterSpec, SpecError> {
    let json = std::fs::read_to_string(path).map_err(|source| SpecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    CharacterSpec::from_json(&json, policy)
}

/// Save a spec as a pretty-printed JSON attribute mapping
pub fn save_spec(spec: &CharacterSpec, path: &Path) -> Result<(), SpecError> {
    let json = spec.to_json_pretty()?;
    std::fs::write(path, json + "\n").map_err(|source| SpecError::Io {
        path: path.to_path_buf(),
        source,
    })
}
