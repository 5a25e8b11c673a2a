//! Benchmark configuration.
//!
//! Two historical harness revisions exist. They differ in defaults, in where
//! chunks land in the destination and in the size handed to strlcpy-style
//! callees; every one of those is overridable.

use thiserror::Error;

use crate::chunk::{ChunkPlan, Packing};
use crate::driver::SizeBudget;
use crate::timing::Clock;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step must be greater than zero")]
    ZeroStep,
    #[error("stride must be greater than zero")]
    ZeroStride,
    #[error("length {0} leaves no room for the terminator")]
    LenTooLarge(usize),
    #[error("packed output of {covered} bytes does not fit in memory")]
    PackedTooLarge { covered: usize },
    #[error("unknown variant `{0}` (try --list)")]
    UnknownVariant(String),
}

/// Harness revision presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Revision {
    /// 2 000 000 bytes in 10-byte chunks, strided output, `size = n`.
    #[value(name = "1")]
    First,
    /// 3 000 000 bytes in 11-byte chunks, packed output, `size = n + 1`.
    #[default]
    #[value(name = "2")]
    Second,
}

impl Revision {
    pub fn default_len(self) -> usize {
        match self {
            Revision::First => 2_000_000,
            Revision::Second => 3_000_000,
        }
    }

    pub fn default_step(self) -> usize {
        match self {
            Revision::First => 10,
            Revision::Second => 11,
        }
    }

    pub fn packing(self) -> Packing {
        match self {
            Revision::First => Packing::Strided,
            Revision::Second => Packing::Packed,
        }
    }

    pub fn size_budget(self) -> SizeBudget {
        match self {
            Revision::First => SizeBudget::Chunk,
            Revision::Second => SizeBudget::ChunkPlusNul,
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub len: usize,
    pub step: usize,
    /// Source stride; `None` means `2 * step`.
    pub stride: Option<usize>,
    pub packing: Packing,
    pub size_budget: SizeBudget,
    pub clock: Clock,
}

impl BenchConfig {
    pub fn for_revision(revision: Revision) -> Self {
        Self {
            len: revision.default_len(),
            step: revision.default_step(),
            stride: None,
            packing: revision.packing(),
            size_budget: revision.size_budget(),
            clock: Clock::default(),
        }
    }

    pub fn with_size(mut self, len: usize, step: usize) -> Self {
        self.len = len;
        self.step = step;
        self
    }

    pub fn effective_stride(&self) -> usize {
        self.stride.unwrap_or(self.step.saturating_mul(2))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if self.effective_stride() == 0 {
            return Err(ConfigError::ZeroStride);
        }
        self.dst_len().map(|_| ())
    }

    /// Destination buffer size, terminator included.
    ///
    /// Normally `len + 1`. Packed output with a stride below the step reads
    /// overlapping source chunks, so it can need more than the source holds.
    pub fn dst_len(&self) -> Result<usize, ConfigError> {
        let src_len = self
            .len
            .checked_add(1)
            .ok_or(ConfigError::LenTooLarge(self.len))?;
        if self.packing == Packing::Strided || self.effective_stride() >= self.step {
            return Ok(src_len);
        }
        let covered = self.plan().covered();
        covered
            .checked_add(1)
            .map(|n| n.max(src_len))
            .ok_or(ConfigError::PackedTooLarge { covered })
    }

    pub fn plan(&self) -> ChunkPlan {
        ChunkPlan::new(self.len, self.step, self.packing).with_stride(self.effective_stride())
    }
}
