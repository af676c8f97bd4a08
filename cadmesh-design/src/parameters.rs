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
//! DNA geometric parmeters.

/// DNA geometric parameters used to place virtual strands and bases in space.
///
/// Every field can be left out of a parameters file, in which case the default value is used.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Distance between the axes of two neighbouring virtual strands, in nanometers. The same
    /// value is used for square and honeycomb lattices.
    pub inter_helix_distance: f64,
    /// Diameter of a double helix, in nanometers.
    pub dna_diameter: f64,
    /// Distance between two consecutive bases along the axis of a helix, in nanometers.
    pub base_step: f64,
    /// Number of bases per turn.
    pub bases_per_turn: f64,
    /// Number of bases by which the complementary backbone lags behind the forward one.
    pub complement_offset: f64,
    /// Radius of the circle on which backbone points are placed, in nanometers. It is smaller
    /// than the helix radius to leave room for the thickness of the drawn curves.
    pub backbone_radius: f64,
}

impl Parameters {
    /// Default values for the parameters of DNA.
    pub const DEFAULT: Parameters = Parameters {
        // Average helix-helix distance in both lattices: Yoo & Aksimentiev (PNAS 2013),
        // Fischer et al. (Nano Lett. 2016).
        inter_helix_distance: 2.6,
        dna_diameter: 2.1,
        base_step: 0.34,
        bases_per_turn: 10.5,
        // about 205°
        complement_offset: 6.,
        backbone_radius: 0.8,
    };

    /// Read parameters from a JSON file. Missing fields are set to their default value.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Angle between two consecutive bases around the helix axis.
    pub fn angle_per_base(&self) -> f64 {
        std::f64::consts::TAU / self.bases_per_turn
    }

    pub fn formated_string(&self) -> String {
        use std::fmt::Write;
        let mut ret = String::new();
        writeln!(
            &mut ret,
            "  Inter helix distance: {:.2} nm",
            self.inter_helix_distance
        )
        .unwrap_or_default();
        writeln!(&mut ret, "  DNA diameter: {:.2} nm", self.dna_diameter).unwrap_or_default();
        writeln!(&mut ret, "  Base step: {:.3} nm", self.base_step).unwrap_or_default();
        writeln!(&mut ret, "  #Bases per turn: {:.2}", self.bases_per_turn).unwrap_or_default();
        writeln!(
            &mut ret,
            "  Complement offset: {:.1} bases",
            self.complement_offset
        )
        .unwrap_or_default();
        writeln!(
            &mut ret,
            "  Backbone radius: {:.2} nm",
            self.backbone_radius
        )
        .unwrap_or_default();
        ret
    }
}

impl std::default::Default for Parameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}
