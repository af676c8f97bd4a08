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
//! Typed view of the caDNAno token-pointer records.
//!
//! In a caDNAno file, every base of a scaffold or staple array is a 4-tuple
//! `[prev_strand, prev_base, next_strand, next_base]` where `-1` marks an absent neighbour.
//! Here the two halves of the tuple become optional `BaseRef`s.

/// A base of the design, identified by the number of its virtual strand (not its storage
/// index) and its position along the strand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BaseRef {
    pub strand: isize,
    pub base: usize,
}

impl BaseRef {
    pub fn new(strand: isize, base: usize) -> Self {
        Self { strand, base }
    }

    fn from_pair(strand: isize, base: isize) -> Option<Self> {
        if strand == -1 && base == -1 {
            None
        } else if strand < 0 || base < 0 {
            log::warn!(
                "Ignoring half empty link ({}, {}) in token-pointer record",
                strand,
                base
            );
            None
        } else {
            Some(Self {
                strand,
                base: base as usize,
            })
        }
    }

    fn shifted(self, offset: usize) -> Self {
        Self {
            base: self.base + offset,
            ..self
        }
    }
}

/// The 5' and 3' neighbours of one base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BaseLinks {
    /// The neighbour on the 5' side.
    pub prev: Option<BaseRef>,
    /// The neighbour on the 3' side.
    pub next: Option<BaseRef>,
}

impl BaseLinks {
    pub fn from_raw(raw: [isize; 4]) -> Self {
        Self {
            prev: BaseRef::from_pair(raw[0], raw[1]),
            next: BaseRef::from_pair(raw[2], raw[3]),
        }
    }

    pub fn to_raw(&self) -> [isize; 4] {
        let (prev_strand, prev_base) = pair(self.prev);
        let (next_strand, next_base) = pair(self.next);
        [prev_strand, prev_base, next_strand, next_base]
    }

    /// True iff the base is not part of any strand.
    pub fn is_empty(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }

    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    /// True iff the base starts a strand: nothing before it, something after it.
    pub fn is_5prime_end(&self) -> bool {
        self.prev.is_none() && self.next.is_some()
    }

    /// True iff the base ends a strand: something before it, nothing after it.
    pub fn is_3prime_end(&self) -> bool {
        self.prev.is_some() && self.next.is_none()
    }

    /// The same links with every base position moved by `offset`. Strand numbers are kept.
    pub fn shifted(&self, offset: usize) -> Self {
        Self {
            prev: self.prev.map(|r| r.shifted(offset)),
            next: self.next.map(|r| r.shifted(offset)),
        }
    }
}

fn pair(link: Option<BaseRef>) -> (isize, isize) {
    link.map(|r| (r.strand, r.base as isize))
        .unwrap_or((-1, -1))
}
