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
//! This crate reads caDNAno designs and reconstructs their topology and geometry.
//!
//! A caDNAno file describes virtual strands laid on a square or honeycomb lattice. Each
//! virtual strand holds a scaffold array and a staple array of token-pointer records linking
//! every base to its 5' and 3' neighbours. From a loaded [`Design`], this crate rebuilds the
//! ordered strand paths, repairs scaffold breakpoints, maps a scaffold sequence onto the bases
//! and computes the 3D position of every base. Rendering is left to the caller.
use std::path::Path;

#[macro_use]
extern crate serde_derive;
extern crate serde;

pub use ultraviolet;

mod concat;
mod error;
pub mod format;
mod formating;
mod index;
pub mod lattice;
mod links;
mod parameters;
pub mod sequence;
mod stitch;
pub mod traversal;
mod vstrand;
#[cfg(test)]
mod tests;

pub use error::DesignError;
pub use index::TopologyIndex;
pub use lattice::{HelixPoints, LatticeKind};
pub use links::{BaseLinks, BaseRef};
pub use parameters::*;
pub use traversal::{PathPoint, ScaffoldRouting, ScaffoldSegments, Staple, StaplePath, StrandPath};
pub use vstrand::{StapleColor, StrandKind, VirtualStrand};

use format::CadnanoFile;
use serde_json::{Map, Value};

/// Format of the timestamp written in the name of saved designs.
const NAME_TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S";

/// A caDNAno design.
///
/// All derived data (index, paths, staples) is computed on demand from the design and must be
/// computed again after any modification.
#[derive(Debug, Clone)]
pub struct Design {
    pub name: String,
    pub lattice: LatticeKind,
    pub vstrands: Vec<VirtualStrand>,
    extra: Map<String, Value>,
}

impl Design {
    /// Read a design from the text of a caDNAno file.
    ///
    /// The lattice is guessed from the length of the arrays and can be changed with
    /// [`Design::set_lattice`].
    pub fn load(json: &str) -> Result<Self, DesignError> {
        let file: CadnanoFile = serde_json::from_str(json)?;
        Self::from_cadnano(file)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DesignError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let ret = Self::load(&json)?;
        log::info!(
            "Loaded {}: {} virtual strands of {} bases, {:?} lattice",
            path.as_ref().to_string_lossy(),
            ret.vstrands.len(),
            ret.vstrands[0].len(),
            ret.lattice
        );
        Ok(ret)
    }

    pub fn from_cadnano(file: CadnanoFile) -> Result<Self, DesignError> {
        let first = file.vstrands.first().ok_or(DesignError::NoVirtualStrands)?;
        let lattice = LatticeKind::guess_from_length(first.scaf.len());
        let reference_len = first.scaf.len();
        for v in file.vstrands.iter() {
            if !v.has_consistent_lengths() {
                return Err(DesignError::InconsistentLengths { num: v.num });
            }
            if v.scaf.len() != reference_len {
                log::warn!(
                    "Virtual strand {} has {} bases while the first one has {}",
                    v.num,
                    v.scaf.len(),
                    reference_len
                );
            }
        }
        Ok(Self {
            name: file.name,
            lattice,
            vstrands: file
                .vstrands
                .into_iter()
                .map(VirtualStrand::from_cadnano)
                .collect(),
            extra: file.extra,
        })
    }

    pub fn to_cadnano(&self) -> CadnanoFile {
        CadnanoFile {
            name: self.name.clone(),
            vstrands: self.vstrands.iter().map(VirtualStrand::to_cadnano).collect(),
            extra: self.extra.clone(),
        }
    }

    /// Encode the design in the caDNAno format. The name of the written design is the current
    /// date and time.
    ///
    /// Nothing is checked: breakpoints that were not stitched are written as they are.
    pub fn serialize(&self) -> Result<String, DesignError> {
        let mut file = self.to_cadnano();
        file.name = chrono::Local::now()
            .format(NAME_TIMESTAMP_FORMAT)
            .to_string();
        Ok(serde_json::to_string(&file)?)
    }

    /// Serialize the design and write it to `path`, replacing any existing file.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DesignError> {
        let json = self.serialize()?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Wrote design to {}", path.as_ref().to_string_lossy());
        Ok(())
    }

    pub fn set_lattice(&mut self, lattice: LatticeKind) {
        self.lattice = lattice;
    }

    /// Build the topology index of the design and bundle it with a reference to the design.
    ///
    /// The design cannot be modified while the returned value is alive.
    pub fn indexed(&self) -> IndexedDesign<'_> {
        IndexedDesign {
            design: self,
            index: TopologyIndex::build(self),
        }
    }

    /// Total number of base positions over all virtual strands.
    pub fn total_bases(&self) -> usize {
        self.vstrands.iter().map(|v| v.len()).sum()
    }

    /// Number of occupied scaffold bases whose basis is still unknown.
    pub fn unresolved_bases(&self) -> usize {
        self.vstrands
            .iter()
            .map(|v| {
                v.scaffold
                    .iter()
                    .zip(v.sequence.iter())
                    .filter(|(links, basis)| {
                        links.is_occupied() && **basis == sequence::UNKNOWN_BASIS
                    })
                    .count()
            })
            .sum()
    }
}

/// An immutable reference to a design together with its up-to-date topology index.
pub struct IndexedDesign<'a> {
    pub design: &'a Design,
    pub index: TopologyIndex,
}
