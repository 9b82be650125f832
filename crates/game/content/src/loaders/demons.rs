//! Demon roster loader.

use anyhow::Context;
use demon_core::{OpponentTemplate, RngOracle};

use super::LoadResult;

/// Registry for demon templates, easiest to hardest.
///
/// Templates are immutable and shared; battles spawn fresh
/// [`demon_core::OpponentState`] instances from them.
#[derive(Debug, Clone)]
pub struct DemonRegistry {
    demons: Vec<OpponentTemplate>,
}

impl DemonRegistry {
    /// Loads the roster from the embedded RON data file.
    pub fn load() -> LoadResult<Self> {
        let raw = include_str!("../../data/demons.ron");
        let demons: Vec<OpponentTemplate> =
            ron::from_str(raw).context("Failed to parse demons.ron")?;
        Ok(Self { demons })
    }

    /// All templates, in roster order.
    pub fn all(&self) -> &[OpponentTemplate] {
        &self.demons
    }

    /// Gets a template by roster index.
    pub fn get(&self, index: usize) -> Option<&OpponentTemplate> {
        self.demons.get(index)
    }

    /// Looks a template up by display name.
    pub fn by_name(&self, name: &str) -> Option<&OpponentTemplate> {
        self.demons.iter().find(|d| d.name == name)
    }

    /// Uniform sample for quick battles and survival waves.
    pub fn sample<R: RngOracle>(&self, rng: &mut R) -> &OpponentTemplate {
        let index = rng.roll_range(0, self.demons.len() as i32 - 1) as usize;
        &self.demons[index]
    }

    /// Number of registered demons.
    pub fn len(&self) -> usize {
        self.demons.len()
    }

    /// Returns true if the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.demons.is_empty()
    }
}
