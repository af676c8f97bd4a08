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
use super::*;

impl Design {
    /// Repair the scaffold breakpoints of every virtual strand and return how many were
    /// repaired.
    ///
    /// A breakpoint is a pair of adjacent bases `b - 1` and `b` of the same virtual strand that
    /// each have exactly one link, pointing away from the other base:
    ///
    /// * `b - 1` is a 3' end coming from `b - 2` and `b` is a 5' end going to `b + 1`, or
    /// * `b - 1` is a 5' end going to `b - 2` and `b` is a 3' end coming from `b + 1`.
    ///
    /// The two bases are linked to each other. Other discontinuities are left untouched.
    pub fn scaffold_stitch(&mut self) -> usize {
        let mut nb_stitched = 0;
        for v in self.vstrands.iter_mut() {
            let num = v.num;
            let scaf = &mut v.scaffold;
            for b in 2..scaf.len() {
                let (left, right) = (scaf[b - 1], scaf[b]);
                match (left.prev, left.next, right.prev, right.next) {
                    (Some(p), None, None, Some(n)) if p.base == b - 2 && n.base == b + 1 => {
                        scaf[b - 1].next = Some(BaseRef::new(p.strand, b));
                        scaf[b].prev = Some(BaseRef::new(n.strand, b - 1));
                    }
                    (None, Some(n), Some(p), None) if n.base == b - 2 && p.base == b + 1 => {
                        scaf[b - 1].prev = Some(BaseRef::new(n.strand, b));
                        scaf[b].next = Some(BaseRef::new(p.strand, b - 1));
                    }
                    _ => continue,
                }
                log::debug!("Stitched scaffold breakpoint [H{}:{}] [H{}:{}]", num, b - 1, num, b);
                nb_stitched += 1;
            }
        }
        if nb_stitched > 0 {
            log::info!("Stitched {} scaffold breakpoints", nb_stitched);
        }
        nb_stitched
    }
}
