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
//! The cylinder model: one block per run of consecutive scaffold bases.

use super::{RenderObject, Shape};
use cadmesh_design::{Design, Parameters, StrandKind};

pub fn cylinders(design: &Design, parameters: &Parameters) -> Vec<RenderObject> {
    let mut ret = Vec::new();
    for segments in design.scaffold_lengths() {
        let origin = design
            .lattice
            .origin_helix(parameters, segments.row, segments.col);
        for (start, end) in segments.segments {
            let depth = (end - start) as f64 * parameters.base_step;
            let z = start as f64 * parameters.base_step + depth / 2.;
            ret.push(RenderObject {
                name: format!("cylinder_{}_{}_{}", segments.row, segments.col, start),
                color: None,
                shape: Shape::Cylinder {
                    center: [origin.x, origin.y, z],
                    radius: parameters.dna_diameter / 2.,
                    depth,
                },
            });
        }
    }
    log::debug!(
        "{} cylinders for {} scaffold bases",
        ret.len(),
        design
            .vstrands
            .iter()
            .map(|v| v.nb_occupied(StrandKind::Scaffold))
            .sum::<usize>()
    );
    ret
}
