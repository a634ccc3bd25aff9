//! Manifest parsing and batch export
//!
//! A `characters.toml` lists several characters to export in one go:
//!
//! ```toml
//! strict = false           # unknown shape names: skip part (false) or error (true)
//!
//! [output]
//! dir = "sprites/"
//!
//! [characters.hero]
//! spec = "hero.json"       # JSON attribute file, relative to the manifest
//!
//! [characters.enemy]       # or the attributes inline
//! head_type = "triangle"
//! body_type = "slim"
//! size = 24
//! animation_frames = 3
//! ```
//!
//! Character names become file names and C symbols, so they are limited to
//! ASCII letters, digits, `_` and `-`.

use crate::export::{export_character, ExportSummary};
use anyhow::{Context, Result};
use character_gen::{load_spec, CharacterAttributes, CharacterSpec, PartPolicy};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Root manifest structure
#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub characters: BTreeMap<String, CharacterEntry>,
    /// Directory relative paths are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("sprites/")
}

/// One `[characters.<name>]` table: a JSON spec path or inline attributes
#[derive(Debug, Deserialize)]
pub struct CharacterEntry {
    #[serde(default)]
    pub spec: Option<PathBuf>,
    #[serde(flatten)]
    pub attributes: CharacterAttributes,
}

impl CharacterEntry {
    fn resolve(&self, base_dir: &Path, policy: PartPolicy) -> Result<CharacterSpec> {
        match &self.spec {
            Some(_) if self.attributes != CharacterAttributes::default() => {
                anyhow::bail!("`spec` and inline attributes cannot be combined")
            }
            Some(spec) => Ok(load_spec(&base_dir.join(spec), policy)?),
            None => Ok(self.attributes.validate(policy)?),
        }
    }
}

/// Reject names that would not stay a plain file stem in the output directory
fn check_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        anyhow::bail!("name may only contain ASCII letters, digits, '_' and '-'");
    }
    Ok(())
}

impl Manifest {
    pub fn policy(&self) -> PartPolicy {
        if self.strict {
            PartPolicy::Strict
        } else {
            PartPolicy::Lenient
        }
    }

    /// Validated spec for every character, in name order
    pub fn resolve(&self) -> Result<Vec<(&str, CharacterSpec)>> {
        self.characters
            .iter()
            .map(|(name, entry)| {
                let spec = check_name(name)
                    .and_then(|_| entry.resolve(&self.base_dir, self.policy()))
                    .with_context(|| format!("Character '{}'", name))?;
                Ok((name.as_str(), spec))
            })
            .collect()
    }
}

/// Load and parse a manifest file
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {:?}", path))?;
    let mut manifest: Manifest = toml::from_str(&content)
        .with_context(|| format!("Failed to parse manifest: {:?}", path))?;
    manifest.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(manifest)
}

/// Validate a manifest without building
pub fn validate(manifest: &Manifest) -> Result<()> {
    if manifest.characters.is_empty() {
        anyhow::bail!("Manifest lists no characters");
    }
    for (name, spec) in manifest.resolve()? {
        tracing::info!(
            "Character '{}': {}x{} px, {} frame(s)",
            name,
            spec.size,
            spec.size,
            spec.animation_frames
        );
    }
    Ok(())
}

/// Export every character in the manifest
pub fn build_all(manifest: &Manifest, output_override: Option<&Path>) -> Result<Vec<ExportSummary>> {
    let output_dir = match output_override {
        Some(dir) => dir.to_path_buf(),
        None => manifest.base_dir.join(&manifest.output.dir),
    };
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    let characters = manifest.resolve()?;
    let mut summaries = Vec::with_capacity(characters.len());
    for (name, spec) in characters {
        let output = output_dir.join(format!("{}.c", name));
        tracing::info!("Exporting character: {} -> {:?}", name, output);
        summaries.push(export_character(&spec, &output)?);
    }
    Ok(summaries)
}
