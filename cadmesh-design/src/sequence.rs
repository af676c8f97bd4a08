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
//! Scaffold sequence assignment and staple sequence derivation.

use super::traversal::WalkEnd;
use super::*;

/// The basis of a scaffold base whose sequence is not known.
pub const UNKNOWN_BASIS: char = '?';
/// The basis given to deleted scaffold bases.
pub const DELETION_MARKER: char = 'D';
/// Inserted in staple sequences where the staple jumps to another virtual strand.
pub const CROSSOVER_MARKER: &str = "X";

/// The Watson-Crick complement of a scaffold basis. A deletion has an empty complement and an
/// unknown basis stays unknown.
pub fn complement(basis: char) -> Option<&'static str> {
    match basis {
        'a' | 'A' => Some("T"),
        'c' | 'C' => Some("G"),
        'g' | 'G' => Some("C"),
        't' | 'T' => Some("A"),
        DELETION_MARKER => Some(""),
        UNKNOWN_BASIS => Some("?"),
        _ => None,
    }
}

impl Design {
    /// Assign `sequence` to the scaffold, starting at `start` which must be a 5' end, and
    /// return the number of characters used.
    ///
    /// Deleted bases receive the deletion marker without using a character. The assignment
    /// stops when `sequence` is exhausted, at the 3' end of the scaffold or when the walk comes
    /// back to `start`, whichever comes first. Bases that are not reached keep their basis.
    pub fn populate_sequence(
        &mut self,
        start: BaseRef,
        sequence: &str,
    ) -> Result<usize, DesignError> {
        let positions = {
            let indexed = self.indexed();
            let start_idx = indexed.index.resolve(start.strand)?;
            let mut positions = Vec::new();
            let end = indexed.walk(
                StrandKind::Scaffold,
                (start_idx, start.base),
                |strand_idx, base| {
                    positions.push((strand_idx, base));
                    Ok(())
                },
            )?;
            if end == WalkEnd::BackToStart {
                log::debug!("Scaffold sequence walk came back to its start");
            }
            positions
        };

        let mut chars = sequence.chars().peekable();
        let mut nb_used = 0;
        for (strand_idx, base) in positions {
            if chars.peek().is_none() {
                break;
            }
            let v = &mut self.vstrands[strand_idx];
            if v.is_deletion(base) {
                v.sequence[base] = DELETION_MARKER;
            } else if let Some(basis) = chars.next() {
                v.sequence[base] = basis;
                nb_used += 1;
            }
        }
        let nb_chars = sequence.chars().count();
        if nb_used < nb_chars {
            log::warn!(
                "Scaffold path is shorter than the sequence, {} of {} bases were used",
                nb_used,
                nb_chars
            );
        }
        log::info!(
            "Assigned {} bases, {} scaffold bases are still unknown",
            nb_used,
            self.unresolved_bases()
        );
        Ok(nb_used)
    }
}

impl<'a> IndexedDesign<'a> {
    /// The sequence of the staple starting at `start` whose bases have the records `bases`,
    /// one complement per base.
    ///
    /// Each base of the staple is paired with the scaffold base at the same position.
    pub fn staple_sequence(
        &self,
        start: BaseRef,
        bases: &[BaseLinks],
    ) -> Result<Vec<&'static str>, DesignError> {
        self.read_staple_sequence(start, bases, false)
    }

    /// Same as `staple_sequence`, with a crossover marker inserted after every base whose 3'
    /// neighbour is on another virtual strand.
    pub fn staple_sequence_with_crossovers(
        &self,
        start: BaseRef,
        bases: &[BaseLinks],
    ) -> Result<Vec<&'static str>, DesignError> {
        self.read_staple_sequence(start, bases, true)
    }

    fn read_staple_sequence(
        &self,
        start: BaseRef,
        bases: &[BaseLinks],
        mark_crossovers: bool,
    ) -> Result<Vec<&'static str>, DesignError> {
        let mut ret = Vec::with_capacity(bases.len());
        let mut current = start;
        for links in bases {
            ret.push(self.complement_at(current)?);
            let next = if let Some(next) = links.next {
                next
            } else {
                break;
            };
            if mark_crossovers && next.strand != current.strand {
                ret.push(CROSSOVER_MARKER);
            }
            current = next;
        }
        Ok(ret)
    }

    fn complement_at(&self, base: BaseRef) -> Result<&'static str, DesignError> {
        let strand_idx = self.index.resolve(base.strand)?;
        let basis = self.design.vstrands[strand_idx]
            .sequence
            .get(base.base)
            .cloned()
            .ok_or(DesignError::BaseOutOfRange {
                strand: base.strand,
                base: base.base,
            })?;
        complement(basis).ok_or(DesignError::UnknownBase {
            strand: base.strand,
            base: base.base,
            basis,
        })
    }
}

impl Staple {
    /// The sequence of the staple as a string, read from `design`.
    pub fn sequence(&self, design: &IndexedDesign) -> Result<String, DesignError> {
        Ok(design.staple_sequence(self.start, &self.bases)?.concat())
    }

    /// The sequence of the staple with its crossovers marked, read from `design`.
    pub fn sequence_with_crossovers(&self, design: &IndexedDesign) -> Result<String, DesignError> {
        Ok(design
            .staple_sequence_with_crossovers(self.start, &self.bases)?
            .concat())
    }
}
