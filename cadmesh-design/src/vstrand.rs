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
use super::format::CadnanoVStrand;
use super::links::BaseLinks;
use super::sequence::UNKNOWN_BASIS;
use serde_json::{Map, Value};

/// The two kinds of strands laid on a virtual strand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrandKind {
    Scaffold,
    Staple,
}

/// The 5' end of a staple and the color it is displayed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StapleColor {
    pub base: usize,
    /// Packed 24 bits RGB value.
    pub color: u32,
}

/// A virtual helix of the design, holding one scaffold and one staple array.
#[derive(Debug, Clone)]
pub struct VirtualStrand {
    /// The identifier used by links. It is not necessarily the storage index of the strand.
    pub num: isize,
    pub row: isize,
    pub col: isize,
    pub scaffold: Vec<BaseLinks>,
    pub staple: Vec<BaseLinks>,
    /// 0 for a normal base, -1 for a deletion.
    pub skip: Vec<isize>,
    /// Number of bases inserted after each base.
    pub loops: Vec<isize>,
    pub staple_colors: Vec<StapleColor>,
    /// The basis assigned to each scaffold base, `'?'` until a sequence is populated.
    pub sequence: Vec<char>,
    extra: Map<String, Value>,
}

impl VirtualStrand {
    pub(crate) fn from_cadnano(v: CadnanoVStrand) -> Self {
        let len = v.scaf.len();
        Self {
            num: v.num,
            row: v.row,
            col: v.col,
            scaffold: v.scaf.into_iter().map(BaseLinks::from_raw).collect(),
            staple: v.stap.into_iter().map(BaseLinks::from_raw).collect(),
            skip: v.skip,
            loops: v.loop_,
            staple_colors: v
                .stap_colors
                .into_iter()
                .map(|(base, color)| StapleColor { base, color })
                .collect(),
            sequence: vec![UNKNOWN_BASIS; len],
            extra: v.extra,
        }
    }

    pub(crate) fn to_cadnano(&self) -> CadnanoVStrand {
        CadnanoVStrand {
            num: self.num,
            row: self.row,
            col: self.col,
            scaf: self.scaffold.iter().map(BaseLinks::to_raw).collect(),
            stap: self.staple.iter().map(BaseLinks::to_raw).collect(),
            skip: self.skip.clone(),
            loop_: self.loops.clone(),
            stap_colors: self
                .staple_colors
                .iter()
                .map(|c| (c.base, c.color))
                .collect(),
            extra: self.extra.clone(),
        }
    }

    /// Number of base positions of the strand.
    pub fn len(&self) -> usize {
        self.scaffold.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scaffold.is_empty()
    }

    pub fn links(&self, kind: StrandKind) -> &[BaseLinks] {
        match kind {
            StrandKind::Scaffold => &self.scaffold,
            StrandKind::Staple => &self.staple,
        }
    }

    /// The direction in which strands of the given kind run along this virtual strand.
    ///
    /// The scaffold goes to the right on even virtual strands and staples run antiparallel to it.
    pub fn going_right(&self, kind: StrandKind) -> bool {
        let even = self.num.rem_euclid(2) == 0;
        match kind {
            StrandKind::Scaffold => even,
            StrandKind::Staple => !even,
        }
    }

    pub fn is_deletion(&self, base: usize) -> bool {
        self.skip.get(base) == Some(&-1)
    }

    /// The maximal runs of occupied bases in the array of the given kind, as inclusive
    /// `(start, end)` pairs, from left to right.
    pub fn occupied_runs(&self, kind: StrandKind) -> Vec<(usize, usize)> {
        let links = self.links(kind);
        let mut ret = Vec::new();
        let mut start = None;
        for (i, base) in links.iter().enumerate() {
            match (start, base.is_occupied()) {
                (None, true) => start = Some(i),
                (Some(s), false) => {
                    ret.push((s, i - 1));
                    start = None;
                }
                _ => (),
            }
        }
        if let Some(s) = start {
            ret.push((s, links.len() - 1));
        }
        ret
    }

    pub fn nb_occupied(&self, kind: StrandKind) -> usize {
        self.links(kind).iter().filter(|l| l.is_occupied()).count()
    }
}
