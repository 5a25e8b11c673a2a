//! Chunk planning for the copy driver.
//!
//! A plan walks a source of `len` bytes with a cursor that advances by
//! `stride` (normally `2 * step`), taking up to `step` bytes at each stop.
//! Where the results land in the destination depends on the [`Packing`].

/// Destination placement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Packing {
    /// Destination offset mirrors the source offset. Gaps between chunks keep
    /// whatever the buffer held before.
    Strided,
    /// Chunks are written back to back from offset 0.
    Packed,
}

/// One copy call: read `len` bytes at `src_offset`, write at `dst_offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub src_offset: usize,
    pub len: usize,
    pub dst_offset: usize,
}

/// Chunk schedule over a source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPlan {
    pub len: usize,
    pub step: usize,
    pub stride: usize,
    pub packing: Packing,
}

impl ChunkPlan {
    /// Plan with the default stride of `2 * step`.
    pub fn new(len: usize, step: usize, packing: Packing) -> Self {
        Self {
            len,
            step,
            stride: step.saturating_mul(2),
            packing,
        }
    }

    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Iterate the chunks of this plan.
    ///
    /// A zero stride yields nothing rather than looping forever.
    pub fn chunks(&self) -> Chunks {
        Chunks {
            plan: *self,
            cursor: 0,
            packed: 0,
        }
    }

    /// Total bytes covered by all chunks, saturating at `usize::MAX`.
    pub fn covered(&self) -> usize {
        self.chunks().fold(0, |acc, c| acc.saturating_add(c.len))
    }
}

/// Iterator over the chunks of a [`ChunkPlan`].
#[derive(Debug, Clone)]
pub struct Chunks {
    plan: ChunkPlan,
    cursor: usize,
    packed: usize,
}

impl Chunks {
    /// Destination offset just past the last chunk handed out so far.
    pub fn packed_end(&self) -> usize {
        self.packed
    }
}

impl Iterator for Chunks {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        let ChunkPlan {
            len, step, stride, ..
        } = self.plan;
        if self.cursor >= len || stride == 0 {
            return None;
        }

        let i = self.cursor;
        let n = if i.saturating_add(step) < len { step } else { len - i };
        let dst_offset = match self.plan.packing {
            Packing::Strided => i,
            Packing::Packed => self.packed,
        };

        self.packed = self.packed.saturating_add(n);
        self.cursor = i.saturating_add(stride);
        Some(Chunk {
            src_offset: i,
            len: n,
            dst_offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Chunk, ChunkPlan, Packing};

    fn spans(len: usize, step: usize) -> Vec<(usize, usize)> {
        ChunkPlan::new(len, step, Packing::Strided)
            .chunks()
            .map(|c| (c.src_offset, c.len))
            .collect()
    }

    #[test]
    fn test_len_10_step_3() {
        assert_eq!(spans(10, 3), vec![(0, 3), (6, 3)]);
    }

    #[test]
    fn test_final_chunk_clamped() {
        assert_eq!(spans(10, 4), vec![(0, 4), (8, 2)]);
        assert_eq!(spans(7, 3), vec![(0, 3), (6, 1)]);
        assert_eq!(spans(3, 5), vec![(0, 3)]);
    }

    #[test]
    fn test_stride_formula_iteration_counts() {
        for (len, step) in [(1, 1), (2, 1), (100, 10), (101, 10), (2_000, 11), (37, 37)] {
            let chunks = spans(len, step);
            assert_eq!(chunks.len(), len.div_ceil(2 * step), "len={len} step={step}");
            for &(i, n) in &chunks {
                assert_eq!(i % (2 * step), 0);
                assert!(n <= step && n <= len - i);
                assert_eq!(n, if i + step < len { step } else { len - i });
            }
        }
    }

    #[test]
    fn test_empty_source_has_no_chunks() {
        assert!(spans(0, 10).is_empty());
    }

    #[test]
    fn test_packed_offsets_are_cumulative() {
        let plan = ChunkPlan::new(50, 7, Packing::Packed);
        let mut sum = 0;
        for c in plan.chunks() {
            assert_eq!(c.dst_offset, sum);
            sum += c.len;
        }
        assert_eq!(sum, plan.covered());
        assert_eq!(sum, 7 + 7 + 7 + 7);
    }

    #[test]
    fn test_strided_offsets_mirror_source() {
        assert!(
            ChunkPlan::new(50, 7, Packing::Strided)
                .chunks()
                .all(|c| c.dst_offset == c.src_offset)
        );
    }

    #[test]
    fn test_custom_stride_full_coverage() {
        let plan = ChunkPlan::new(10, 3, Packing::Packed).with_stride(3);
        let chunks: Vec<Chunk> = plan.chunks().collect();
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[3], Chunk { src_offset: 9, len: 1, dst_offset: 9 });
        assert_eq!(plan.covered(), 10);
    }

    #[test]
    fn test_zero_stride_yields_nothing() {
        assert_eq!(ChunkPlan::new(10, 0, Packing::Packed).chunks().count(), 0);
    }

    #[test]
    fn test_packed_end_tracks_progress() {
        let mut it = ChunkPlan::new(20, 4, Packing::Packed).chunks();
        while it.next().is_some() {}
        assert_eq!(it.packed_end(), 4 + 4 + 4);
    }
}
