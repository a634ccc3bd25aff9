//! Procedural character sprite generation
//!
//! Draws a small humanoid (legs, body, arms, head) from a [`CharacterSpec`]
//! into a transparent RGBA frame, posed for one step of a walk cycle.
//!
//! # Example
//! ```no_run
//! use character_gen::{render_frames, CharacterSpec, PartPolicy};
//!
//! let spec = CharacterSpec::from_json(
//!     r##"{"head_type": "oval", "body_type": "round", "animation_frames": 2}"##,
//!     PartPolicy::Strict,
//! )?;
//! let frames = render_frames(&spec);
//! assert_eq!(frames.len(), 2);
//! # Ok::<(), character_gen::SpecError>(())
//! ```

pub mod canvas;
pub mod parts;
pub mod pose;
pub mod random;
pub mod render;
pub mod spec;

pub use pose::Pose;
pub use random::{random_spec, random_spec_seeded};
pub use render::{render_frame, render_frames};
pub use spec::{
    load_spec, save_spec, BodyPart, BodyShape, CharacterAttributes, CharacterSpec, HeadShape,
    HexColor, LimbShape, PartPolicy, PartShape, SpecError,
};
