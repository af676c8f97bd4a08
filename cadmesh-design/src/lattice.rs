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
//! Placement of virtual strands on square and honeycomb lattices.
//!
//! Lattice coordinates are given as `(row, col)` pairs, as in caDNAno files. The helix axis is
//! the z axis and the lattice plane is the xy plane.

use super::Parameters;
use ultraviolet::{DVec2, DVec3};

/// The lattices on which caDNAno lays out virtual strands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatticeKind {
    Square,
    Honeycomb,
}

impl LatticeKind {
    /// Guess the lattice of a design from the length of its arrays.
    ///
    /// caDNAno grows square designs by steps of 32 bases and honeycomb designs by steps of 21
    /// bases.
    pub fn guess_from_length(len: usize) -> Self {
        if len % 21 == 0 && len % 32 != 0 {
            Self::Honeycomb
        } else {
            Self::Square
        }
    }

    fn division(&self) -> &'static dyn GridDivision {
        match self {
            Self::Square => &SquareGrid,
            Self::Honeycomb => &HoneyComb,
        }
    }

    /// Position of the axis of the virtual strand at `(row, col)` in the lattice plane.
    pub fn origin_helix(&self, parameters: &Parameters, row: isize, col: isize) -> DVec2 {
        self.division().origin_helix(parameters, row, col)
    }

    /// Position of base `base` on the axis of the virtual strand at `(row, col)`.
    pub fn axis_position(
        &self,
        parameters: &Parameters,
        row: isize,
        col: isize,
        base: usize,
    ) -> DVec3 {
        let origin = self.origin_helix(parameters, row, col);
        DVec3::new(origin.x, origin.y, base as f64 * parameters.base_step)
    }

    /// The backbone points of base `base` of the virtual strand at `(row, col)`, on the forward
    /// strand and on its complement.
    pub fn helix_point_around(
        &self,
        parameters: &Parameters,
        row: isize,
        col: isize,
        base: usize,
    ) -> HelixPoints {
        let origin = self.origin_helix(parameters, row, col);
        let phase = self.division().phase(base);
        let beta = parameters.angle_per_base();
        let z = base as f64 * parameters.base_step;
        HelixPoints {
            forward: point_on_circle(origin, parameters.backbone_radius, phase * beta, z),
            complement: point_on_circle(
                origin,
                parameters.backbone_radius,
                (phase - parameters.complement_offset) * beta,
                z,
            ),
        }
    }

    /// The backbone points of the bases `0..nb_bases` of the virtual strand at `(row, col)`.
    pub fn helix_points(
        &self,
        parameters: &Parameters,
        row: isize,
        col: isize,
        nb_bases: usize,
    ) -> Vec<HelixPoints> {
        (0..nb_bases)
            .map(|base| self.helix_point_around(parameters, row, col, base))
            .collect()
    }
}

fn point_on_circle(center: DVec2, radius: f64, theta: f64, z: f64) -> DVec3 {
    DVec3::new(
        center.x + radius * theta.cos(),
        center.y + radius * theta.sin(),
        z,
    )
}

/// The two backbone points of a base pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixPoints {
    pub forward: DVec3,
    pub complement: DVec3,
}

impl HelixPoints {
    /// The point on the strand running in the given direction.
    pub fn going(&self, going_right: bool) -> DVec3 {
        if going_right {
            self.forward
        } else {
            self.complement
        }
    }
}

pub trait GridDivision {
    /// Maps a vertex of the lattice to a coordinate in the plane.
    fn origin_helix(&self, parameters: &Parameters, row: isize, col: isize) -> DVec2;

    /// The angular position of base `base`, counted in bases.
    fn phase(&self, base: usize) -> f64 {
        base as f64
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SquareGrid;

impl GridDivision for SquareGrid {
    fn origin_helix(&self, parameters: &Parameters, row: isize, col: isize) -> DVec2 {
        DVec2::new(
            col as f64 * parameters.inter_helix_distance,
            row as f64 * parameters.inter_helix_distance,
        )
    }

    // Square lattice designs are half a turn out of phase with honeycomb ones.
    fn phase(&self, base: usize) -> f64 {
        (base + 1) as f64
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HoneyComb;

impl GridDivision for HoneyComb {
    /// In even columns the first helix is half a distance above the x axis and the gaps
    /// alternate `d, 2d, d, ...`, in odd columns the first helix is on the x axis and the gaps
    /// alternate `2d, d, 2d, ...`.
    fn origin_helix(&self, parameters: &Parameters, row: isize, col: isize) -> DVec2 {
        let d = parameters.inter_helix_distance;
        let (start, even_row_step, odd_row_step) = if col.rem_euclid(2) == 0 {
            (0.5 * d, d, 2. * d)
        } else {
            (0., 2. * d, d)
        };
        let y = (0..=row).fold(start, |y, i| {
            if i % 2 == 0 {
                y + even_row_step
            } else {
                y + odd_row_step
            }
        });
        DVec2::new(col as f64 * 0.75f64.sqrt() * d, y)
    }
}
