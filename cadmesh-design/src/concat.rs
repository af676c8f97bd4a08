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
use super::sequence::UNKNOWN_BASIS;
use super::*;

/// The occupied interior of a design: the positions from the first to the last occupied base
/// over all arrays of all virtual strands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Interior {
    start: usize,
    end: usize,
}

impl Interior {
    fn len(&self) -> usize {
        self.end - self.start
    }

    fn of_design(design: &Design) -> Result<Self, DesignError> {
        let mut ret: Option<Self> = None;
        for v in design.vstrands.iter() {
            for kind in [StrandKind::Scaffold, StrandKind::Staple] {
                let links = v.links(kind);
                let first = links.iter().position(BaseLinks::is_occupied);
                let last = links.iter().rposition(BaseLinks::is_occupied);
                if let (Some(first), Some(last)) = (first, last) {
                    ret = Some(match ret {
                        Some(i) => Self {
                            start: i.start.min(first),
                            end: i.end.max(last + 1),
                        },
                        None => Self {
                            start: first,
                            end: last + 1,
                        },
                    });
                }
            }
        }
        ret.ok_or(DesignError::MalformedBoundary {
            num: design.vstrands.first().map(|v| v.num).unwrap_or(-1),
        })
    }

    /// Repeat the interior of `values` `repeat` times, keeping the leading and trailing parts.
    fn tile<T: Clone, F: Fn(&T, usize) -> T>(
        &self,
        values: &[T],
        repeat: usize,
        shift: F,
    ) -> Vec<T> {
        let mut ret = Vec::with_capacity(values.len() + (repeat - 1) * self.len());
        ret.extend_from_slice(&values[..self.start]);
        for i in 0..repeat {
            let offset = i * self.len();
            ret.extend(values[self.start..self.end].iter().map(|v| shift(v, offset)));
        }
        ret.extend_from_slice(&values[self.end..]);
        ret
    }
}

impl Design {
    /// Extend the design along the helix axis by repeating its occupied interior `repeat` times.
    ///
    /// The unoccupied bases before and after the interior are kept. Links inside the `i`-th
    /// copy are moved by `i` times the interior length, staple colors are copied along with
    /// the staples. Skips are reset to zero and the sequence is forgotten.
    pub fn concatenate(&mut self, repeat: usize) -> Result<(), DesignError> {
        if repeat == 0 {
            return Err(DesignError::InvalidRepeatCount(repeat));
        }
        let interior = Interior::of_design(self)?;
        if let Some(v) = self.vstrands.iter().find(|v| v.len() < interior.end) {
            return Err(DesignError::MalformedBoundary { num: v.num });
        }
        let interior_len = interior.len();
        let added_len = (repeat - 1)
            .checked_mul(interior_len)
            .ok_or(DesignError::InvalidRepeatCount(repeat))?;
        for v in self.vstrands.iter() {
            v.len()
                .checked_add(added_len)
                .ok_or(DesignError::InvalidRepeatCount(repeat))?;
        }
        for v in self.vstrands.iter_mut() {
            v.scaffold = interior.tile(&v.scaffold, repeat, BaseLinks::shifted);
            v.staple = interior.tile(&v.staple, repeat, BaseLinks::shifted);
            v.loops = interior.tile(&v.loops, repeat, |n, _| *n);
            v.skip = vec![0; v.staple.len()];
            v.sequence = vec![UNKNOWN_BASIS; v.staple.len()];
            v.staple_colors = v
                .staple_colors
                .iter()
                .flat_map(|c| {
                    let copies = if c.base >= interior.start && c.base < interior.end {
                        repeat
                    } else {
                        1
                    };
                    let trailing_shift = if c.base >= interior.end {
                        added_len
                    } else {
                        0
                    };
                    (0..copies).map(move |i| StapleColor {
                        base: c.base + i * interior_len + trailing_shift,
                        color: c.color,
                    })
                })
                .collect();
        }
        log::info!(
            "Repeated bases {}..{} {} times, virtual strands now have {} bases",
            interior.start,
            interior.end,
            repeat,
            self.vstrands[0].len()
        );
        Ok(())
    }
}
