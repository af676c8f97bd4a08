/*
cadmesh, caDNAno topology and geometry for DNA origami renderers.
    Copyright (C) 2021  Nicolas Levy <nicolaspierrelevy@gmail.com> and Nicolas Schabanel <nicolas.schabanel@ens-lyon.fr>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/
use super::{Design, DesignError};
use ahash::AHashMap;

/// Lookup tables derived from a design: where each virtual strand is stored and which color
/// each staple 5' end has.
///
/// The index is never updated, it must be built again after the design is modified.
#[derive(Debug, Clone, Default)]
pub struct TopologyIndex {
    strand_index: AHashMap<isize, usize>,
    staple_colors: AHashMap<(usize, usize), u32>,
}

impl TopologyIndex {
    pub fn build(design: &Design) -> Self {
        let mut strand_index = AHashMap::with_capacity(design.vstrands.len());
        let mut staple_colors = AHashMap::new();
        for (i, v) in design.vstrands.iter().enumerate() {
            if let Some(previous) = strand_index.insert(v.num, i) {
                log::warn!(
                    "Virtual strand number {} is used at indices {} and {}, keeping the last one",
                    v.num,
                    previous,
                    i
                );
            }
            for c in v.staple_colors.iter() {
                staple_colors.insert((i, c.base), c.color);
            }
        }
        Self {
            strand_index,
            staple_colors,
        }
    }

    /// The storage index of the virtual strand numbered `num`.
    pub fn resolve(&self, num: isize) -> Result<usize, DesignError> {
        self.strand_index
            .get(&num)
            .cloned()
            .ok_or(DesignError::UnknownStrand(num))
    }

    /// The color of the staple starting at `base` on the virtual strand stored at `strand_idx`.
    pub fn staple_color(&self, strand_idx: usize, base: usize) -> Option<u32> {
        self.staple_colors.get(&(strand_idx, base)).cloned()
    }
}
