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
//! The caDNAno JSON file format, as read from and written to disk.
//!
//! Fields that this crate does not interpret (`scafLoop`, `stapLoop`, ...) are kept in `extra`
//! so that writing a loaded file back does not lose them.

use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CadnanoFile {
    #[serde(default)]
    pub name: String,
    pub vstrands: Vec<CadnanoVStrand>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CadnanoVStrand {
    pub num: isize,
    pub row: isize,
    pub col: isize,
    pub scaf: Vec<[isize; 4]>,
    pub stap: Vec<[isize; 4]>,
    pub skip: Vec<isize>,
    #[serde(rename = "loop")]
    pub loop_: Vec<isize>,
    /// `[base, color]` pairs marking the 5' end of each staple.
    pub stap_colors: Vec<(usize, u32)>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CadnanoVStrand {
    pub(crate) fn has_consistent_lengths(&self) -> bool {
        let len = self.scaf.len();
        self.stap.len() == len && self.skip.len() == len && self.loop_.len() == len
    }
}
