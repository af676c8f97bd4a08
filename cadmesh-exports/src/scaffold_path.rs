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
//! The scaffold path model: the scaffold drawn along the axes of the virtual strands.

use super::{RenderObject, Shape};
use cadmesh_design::{Design, DesignError, Parameters, PathPoint, ScaffoldRouting};
use itertools::Itertools;

/// One polyline per scaffold path. Its points are the first and last bases of the path and
/// both ends of every crossover, on the helix axes.
pub fn scaffold_polylines(
    design: &Design,
    parameters: &Parameters,
) -> Result<Vec<RenderObject>, DesignError> {
    let routing = ScaffoldRouting::detect(design);
    let paths = design.indexed().scaffold_paths(routing)?;
    Ok(paths
        .iter()
        .enumerate()
        .map(|(i, path)| RenderObject {
            name: format!("scaffold_{i}"),
            color: None,
            shape: Shape::Polyline(
                polyline_points(path)
                    .into_iter()
                    .map(|p| {
                        let pos = design
                            .lattice
                            .axis_position(parameters, p.row, p.col, p.base);
                        [pos.x, pos.y, pos.z]
                    })
                    .collect(),
            ),
        })
        .collect())
}

fn polyline_points(path: &[PathPoint]) -> Vec<PathPoint> {
    let mut ret = Vec::new();
    ret.extend(path.first().cloned());
    for (a, b) in path.iter().tuple_windows() {
        if (a.row, a.col) != (b.row, b.col) {
            ret.push(*a);
            ret.push(*b);
        }
    }
    ret.extend(path.last().cloned());
    ret.dedup();
    ret
}
