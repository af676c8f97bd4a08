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

use std::fmt;
use std::fmt::Write;
use std::path::Path;

impl Design {
    /// A human readable description of the design and of each of its virtual strands. `file` is
    /// the file the design was read from, if any.
    pub fn formated_summary(&self, file: Option<&Path>) -> String {
        let mut ret = String::new();
        if let Some(file) = file {
            writeln!(&mut ret, "File name: {}", file.to_string_lossy()).unwrap_or_default();
        }
        writeln!(&mut ret, "Design name: {}", self.name).unwrap_or_default();
        writeln!(&mut ret, "Lattice: {:?}", self.lattice).unwrap_or_default();
        writeln!(&mut ret, "Number of virtual strands: {}", self.vstrands.len())
            .unwrap_or_default();
        for v in self.vstrands.iter() {
            writeln!(&mut ret, "\n---Virtual Strand---").unwrap_or_default();
            writeln!(&mut ret, "Number: {}", v.num).unwrap_or_default();
            writeln!(&mut ret, "Lattice Row: {}", v.row).unwrap_or_default();
            writeln!(&mut ret, "Lattice Column: {}", v.col).unwrap_or_default();
            writeln!(
                &mut ret,
                "Number of scaffold bases: {}",
                v.nb_occupied(StrandKind::Scaffold)
            )
            .unwrap_or_default();
            writeln!(
                &mut ret,
                "Number of staple bases: {}",
                v.nb_occupied(StrandKind::Staple)
            )
            .unwrap_or_default();
            writeln!(&mut ret, "Scaffold runs: {:?}", v.occupied_runs(StrandKind::Scaffold))
                .unwrap_or_default();
            writeln!(&mut ret, "Staple 5' ends: {}", v.staple_colors.len()).unwrap_or_default();
        }
        ret
    }
}

impl fmt::Display for BaseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[H{}:{}]", self.strand, self.base)
    }
}

impl fmt::Display for BaseLinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.prev, self.next) {
            (None, None) => write!(f, "[empty]"),
            (Some(prev), None) => write!(f, "{} -> [3']", prev),
            (None, Some(next)) => write!(f, "[5'] -> {}", next),
            (Some(prev), Some(next)) => write!(f, "{} -> {}", prev, next),
        }
    }
}
