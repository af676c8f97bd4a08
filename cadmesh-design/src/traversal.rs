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
//! Reconstruction of ordered strand paths from the token-pointer graph.

use super::*;

/// One base of a path, as needed to place it in space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathPoint {
    pub row: isize,
    pub col: isize,
    pub base: usize,
    /// True iff the strand runs to the right at this base.
    pub going_right: bool,
}

/// A continuous walk through the token-pointer graph, from 5' to 3'.
pub type StrandPath = Vec<PathPoint>;

/// A staple path and its display color.
#[derive(Debug, Clone, PartialEq)]
pub struct StaplePath {
    pub color: u32,
    pub path: StrandPath,
}

/// A staple given by the raw records of its bases, from 5' to 3'.
#[derive(Debug, Clone, PartialEq)]
pub struct Staple {
    /// The 5' end of the staple.
    pub start: BaseRef,
    pub color: u32,
    pub bases: Vec<BaseLinks>,
}

/// The occupied scaffold runs of one virtual strand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSegments {
    pub row: isize,
    pub col: isize,
    /// Inclusive `(start, end)` base positions.
    pub segments: Vec<(usize, usize)>,
}

/// How the scaffold is routed, which decides how scaffold paths are reconstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldRouting {
    /// The scaffold has 5' ends. There is one path per 5' end.
    Broken,
    /// The scaffold is a single closed loop with no 5' end. It makes a single path.
    ClosedLoop,
}

impl ScaffoldRouting {
    /// `Broken` if any scaffold base is a 5' end, `ClosedLoop` otherwise.
    pub fn detect(design: &Design) -> Self {
        let has_5prime_end = design
            .vstrands
            .iter()
            .any(|v| v.scaffold.iter().any(BaseLinks::is_5prime_end));
        if has_5prime_end {
            Self::Broken
        } else {
            Self::ClosedLoop
        }
    }
}

/// How a walk along 3' links ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WalkEnd {
    Prime3,
    BackToStart,
}

impl<'a> IndexedDesign<'a> {
    pub(crate) fn base_links(
        &self,
        kind: StrandKind,
        strand_idx: usize,
        base: usize,
    ) -> Result<&'a BaseLinks, DesignError> {
        let design = self.design;
        let v = &design.vstrands[strand_idx];
        v.links(kind).get(base).ok_or(DesignError::BaseOutOfRange {
            strand: v.num,
            base,
        })
    }

    /// Follow the 3' links from `start`, a `(storage index, base)` pair, calling `visit` on
    /// every visited base, `start` included.
    ///
    /// The walk stops on a 3' end or when it comes back to `start`. It fails if it takes more
    /// steps than there are bases in the design.
    pub(crate) fn walk<F>(
        &self,
        kind: StrandKind,
        start: (usize, usize),
        mut visit: F,
    ) -> Result<WalkEnd, DesignError>
    where
        F: FnMut(usize, usize) -> Result<(), DesignError>,
    {
        let bound = self.design.total_bases();
        let (mut strand_idx, mut base) = start;
        let mut nb_steps = 0;
        loop {
            let links = self.base_links(kind, strand_idx, base)?;
            visit(strand_idx, base)?;
            let next = if let Some(next) = links.next {
                next
            } else {
                return Ok(WalkEnd::Prime3);
            };
            strand_idx = self.index.resolve(next.strand)?;
            base = next.base;
            if (strand_idx, base) == start {
                return Ok(WalkEnd::BackToStart);
            }
            nb_steps += 1;
            if nb_steps > bound {
                return Err(self.cyclic_path(start));
            }
        }
    }

    fn cyclic_path(&self, start: (usize, usize)) -> DesignError {
        DesignError::CyclicPath {
            strand: self.design.vstrands[start.0].num,
            base: start.1,
        }
    }

    fn path_point(&self, kind: StrandKind, strand_idx: usize, base: usize) -> PathPoint {
        let v = &self.design.vstrands[strand_idx];
        PathPoint {
            row: v.row,
            col: v.col,
            base,
            going_right: v.going_right(kind),
        }
    }

    /// Every `(storage index, base)` pair that starts a strand of the given kind, in storage
    /// order.
    pub fn prime5_ends(&self, kind: StrandKind) -> Vec<(usize, usize)> {
        let mut ret = Vec::new();
        for (i, v) in self.design.vstrands.iter().enumerate() {
            for (j, links) in v.links(kind).iter().enumerate() {
                if links.is_5prime_end() {
                    ret.push((i, j));
                }
            }
        }
        ret
    }

    /// The path going from a 5' end to the next 3' end.
    fn path_from_5prime(
        &self,
        kind: StrandKind,
        start: (usize, usize),
    ) -> Result<StrandPath, DesignError> {
        let mut path = Vec::new();
        let end = self.walk(kind, start, |strand_idx, base| {
            path.push(self.path_point(kind, strand_idx, base));
            Ok(())
        })?;
        match end {
            WalkEnd::Prime3 => Ok(path),
            WalkEnd::BackToStart => Err(self.cyclic_path(start)),
        }
    }

    /// One path per 5' end of the given kind, in the order in which the 5' ends are stored.
    pub fn five_prime_paths(&self, kind: StrandKind) -> Result<Vec<StrandPath>, DesignError> {
        self.prime5_ends(kind)
            .into_iter()
            .map(|start| self.path_from_5prime(kind, start))
            .collect()
    }

    /// The scaffold path of a scaffold forming a single closed loop.
    ///
    /// The walk starts on the first occupied scaffold base of the first virtual strand that has
    /// one and ends when it is back there. It fails with `NotClosedLoop` if it meets a 3' end.
    /// A design without scaffold gives an empty path.
    pub fn closed_loop_path(&self) -> Result<StrandPath, DesignError> {
        let start = self
            .design
            .vstrands
            .iter()
            .enumerate()
            .find_map(|(i, v)| v.scaffold.iter().position(|l| l.is_occupied()).map(|j| (i, j)));
        let start = if let Some(start) = start {
            start
        } else {
            return Ok(Vec::new());
        };
        let mut path = Vec::new();
        let end = self.walk(StrandKind::Scaffold, start, |strand_idx, base| {
            path.push(self.path_point(StrandKind::Scaffold, strand_idx, base));
            Ok(())
        })?;
        match end {
            WalkEnd::BackToStart => Ok(path),
            WalkEnd::Prime3 => Err(DesignError::NotClosedLoop {
                strand: self.design.vstrands[start.0].num,
                base: start.1,
            }),
        }
    }

    /// The scaffold paths, reconstructed according to `routing`.
    pub fn scaffold_paths(&self, routing: ScaffoldRouting) -> Result<Vec<StrandPath>, DesignError> {
        match routing {
            ScaffoldRouting::Broken => self.five_prime_paths(StrandKind::Scaffold),
            ScaffoldRouting::ClosedLoop => {
                let path = self.closed_loop_path()?;
                if path.is_empty() {
                    Ok(Vec::new())
                } else {
                    Ok(vec![path])
                }
            }
        }
    }

    /// The 5' ends listed in the `stap_colors` entries, in storage order and then in entry
    /// order, as `(storage index, base, color)`. Colors are read from the index.
    fn staple_starts(&self) -> Vec<(usize, usize, u32)> {
        let mut ret = Vec::new();
        for (i, v) in self.design.vstrands.iter().enumerate() {
            for c in v.staple_colors.iter() {
                let color = self.index.staple_color(i, c.base).unwrap_or(c.color);
                ret.push((i, c.base, color));
            }
        }
        ret
    }

    fn walk_staple<F>(&self, start: (usize, usize), visit: F) -> Result<(), DesignError>
    where
        F: FnMut(usize, usize) -> Result<(), DesignError>,
    {
        let links = self.base_links(StrandKind::Staple, start.0, start.1)?;
        if !links.is_5prime_end() {
            log::warn!(
                "Staple color entry at [H{}:{}] is not on a 5' end",
                self.design.vstrands[start.0].num,
                start.1
            );
        }
        match self.walk(StrandKind::Staple, start, visit)? {
            WalkEnd::Prime3 => Ok(()),
            WalkEnd::BackToStart => Err(self.cyclic_path(start)),
        }
    }

    /// Every staple, given by the raw records of its bases.
    pub fn staples(&self) -> Result<Vec<Staple>, DesignError> {
        let mut ret = Vec::new();
        for (strand_idx, base, color) in self.staple_starts() {
            let mut bases = Vec::new();
            self.walk_staple((strand_idx, base), |i, j| {
                bases.push(*self.base_links(StrandKind::Staple, i, j)?);
                Ok(())
            })?;
            ret.push(Staple {
                start: BaseRef::new(self.design.vstrands[strand_idx].num, base),
                color,
                bases,
            });
        }
        Ok(ret)
    }

    /// Every staple, given by the lattice position of its bases.
    pub fn staple_paths(&self) -> Result<Vec<StaplePath>, DesignError> {
        let mut ret = Vec::new();
        for (strand_idx, base, color) in self.staple_starts() {
            let mut path = Vec::new();
            self.walk_staple((strand_idx, base), |i, j| {
                path.push(self.path_point(StrandKind::Staple, i, j));
                Ok(())
            })?;
            ret.push(StaplePath { color, path });
        }
        Ok(ret)
    }
}

impl Design {
    /// The occupied scaffold runs of every virtual strand, in storage order.
    pub fn scaffold_lengths(&self) -> Vec<ScaffoldSegments> {
        self.vstrands
            .iter()
            .map(|v| ScaffoldSegments {
                row: v.row,
                col: v.col,
                segments: v.occupied_runs(StrandKind::Scaffold),
            })
            .collect()
    }
}
