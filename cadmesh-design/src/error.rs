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
use thiserror::Error;

/// The ways loading, walking or editing a caDNAno design can fail.
#[derive(Debug, Error)]
pub enum DesignError {
    /// The text is not JSON, or the `vstrands` key or a per-strand field is missing.
    #[error("could not parse caDNAno file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("caDNAno file has no virtual strand")]
    NoVirtualStrands,
    #[error("the arrays of virtual strand {num} do not have the same length")]
    InconsistentLengths { num: isize },
    /// A link refers to a strand number that is not in the design.
    #[error("unknown virtual strand number {0}")]
    UnknownStrand(isize),
    #[error("base {base} is out of the arrays of virtual strand {strand}")]
    BaseOutOfRange { strand: isize, base: usize },
    /// A walk came back to where it started, or ran longer than the design, without meeting a
    /// 3' end.
    #[error("path starting at [H{strand}:{base}] loops without reaching a 3' end")]
    CyclicPath { strand: isize, base: usize },
    #[error("scaffold walk from [H{strand}:{base}] met a 3' end, the scaffold is not a closed loop")]
    NotClosedLoop { strand: isize, base: usize },
    /// Concatenation could not find an occupied interior between unoccupied boundaries.
    #[error("no occupied interior between the unoccupied boundaries of virtual strand {num}")]
    MalformedBoundary { num: isize },
    #[error("cannot repeat the design interior {0} times")]
    InvalidRepeatCount(usize),
    #[error("base [H{strand}:{base}] holds {basis:?}, which has no complement")]
    UnknownBase {
        strand: isize,
        base: usize,
        basis: char,
    },
    #[error("could not access caDNAno file: {0}")]
    Io(#[from] std::io::Error),
}
