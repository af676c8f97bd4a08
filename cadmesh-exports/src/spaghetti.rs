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
//! The spaghetti model: the backbone of every strand as a curve around its helix axis.

use super::{RenderObject, Rgb, Shape};
use cadmesh_design::{Design, DesignError, Parameters, PathPoint, ScaffoldRouting};

/// The curves of the scaffold paths, named `scaffold_<i>`, followed by the curves of the
/// staples named `staple_<i>` and colored with their display color.
pub fn spaghetti(
    design: &Design,
    parameters: &Parameters,
) -> Result<Vec<RenderObject>, DesignError> {
    let indexed = design.indexed();
    let scaffold = indexed.scaffold_paths(ScaffoldRouting::detect(design))?;
    let staples = indexed.staple_paths()?;
    let mut ret = Vec::with_capacity(scaffold.len() + staples.len());
    for (i, path) in scaffold.iter().enumerate() {
        ret.push(RenderObject {
            name: format!("scaffold_{i}"),
            color: None,
            shape: Shape::Nurbs(backbone_points(design, parameters, path)),
        });
    }
    for (i, staple) in staples.iter().enumerate() {
        ret.push(RenderObject {
            name: format!("staple_{i}"),
            color: Some(Rgb::from_packed(staple.color).rgba()),
            shape: Shape::Nurbs(backbone_points(design, parameters, &staple.path)),
        });
    }
    Ok(ret)
}

fn backbone_points(design: &Design, parameters: &Parameters, path: &[PathPoint]) -> Vec<[f64; 4]> {
    path.iter()
        .map(|p| {
            let pos = design
                .lattice
                .helix_point_around(parameters, p.row, p.col, p.base)
                .going(p.going_right);
            [pos.x, pos.y, pos.z, 1.]
        })
        .collect()
}
