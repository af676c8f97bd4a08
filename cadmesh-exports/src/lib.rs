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
//! Render models of caDNAno designs, for renderers that are not part of this workspace.
//!
//! Each model is a flat list of named [`RenderObject`]s made of plain points and colors. The
//! models are written as JSON by [`export`].

#[macro_use]
extern crate serde_derive;

use strum::Display;

pub mod color;
pub mod cylinders;
pub mod scaffold_path;
pub mod spaghetti;

pub use color::Rgb;

use cadmesh_design::{Design, DesignError, LatticeKind, Parameters};
use std::path::PathBuf;

/// The render models that can be exported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportType {
    /// One cylinder per run of scaffold bases.
    Cylinders,
    /// One polyline per scaffold path, following the helix axes.
    Scaffold,
    /// The backbone of every scaffold and staple strand.
    Spaghetti,
}

/// The geometry of a drawable object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// A cylinder whose axis is parallel to the z axis.
    Cylinder {
        center: [f64; 3],
        radius: f64,
        depth: f64,
    },
    Polyline(Vec<[f64; 3]>),
    /// Weighted control points `(x, y, z, w)` of a curve to be smoothed by the renderer.
    Nurbs(Vec<[f64; 4]>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderObject {
    pub name: String,
    /// Normalized RGBA color. Objects without color use the renderer's default material.
    pub color: Option<[f32; 4]>,
    pub shape: Shape,
}

/// All the objects needed to draw a design with one of the render models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderModel {
    pub model: ExportType,
    pub name: String,
    pub lattice: LatticeKind,
    pub objects: Vec<RenderObject>,
}

impl RenderModel {
    fn new(model: ExportType, design: &Design, objects: Vec<RenderObject>) -> Self {
        Self {
            model,
            name: design.name.clone(),
            lattice: design.lattice,
            objects,
        }
    }
}

/// A value returned by [`export`] when the export was successfull.
///
/// This means that both the conversion and the write to the output file were successful.
pub enum ExportSuccess {
    Written { path: PathBuf, nb_objects: usize },
}

const SUCCESSFUL_EXPORT_MSG_PREFIX: &str = "Succussfully exported to";

impl ExportSuccess {
    /// A message telling that the export operation was successfull and giving the path to which
    /// the export was made
    pub fn message(&self) -> String {
        match self {
            Self::Written { path, nb_objects } => format!(
                "{SUCCESSFUL_EXPORT_MSG_PREFIX}\n{} ({nb_objects} objects)",
                path.to_string_lossy()
            ),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Could not read the design: {0}")]
    Design(#[from] DesignError),
    #[error("Could not serialize the render model: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Could not write the render model: {0}")]
    IOError(#[from] std::io::Error),
}

/// Build the render model `export_type` of `design`.
pub fn render_model(
    design: &Design,
    export_type: ExportType,
    parameters: &Parameters,
) -> Result<RenderModel, ExportError> {
    let objects = match export_type {
        ExportType::Cylinders => cylinders::cylinders(design, parameters),
        ExportType::Scaffold => scaffold_path::scaffold_polylines(design, parameters)?,
        ExportType::Spaghetti => spaghetti::spaghetti(design, parameters)?,
    };
    log::info!("{} model: {} objects", export_type, objects.len());
    Ok(RenderModel::new(export_type, design, objects))
}

/// Build the render model `export_type` of `design` and write it as JSON to `export_path`.
pub fn export(
    design: &Design,
    export_type: ExportType,
    parameters: &Parameters,
    export_path: &PathBuf,
) -> Result<ExportSuccess, ExportError> {
    let model = render_model(design, export_type, parameters)?;
    let json = serde_json::to_string_pretty(&model)?;
    std::fs::write(export_path, json)?;
    Ok(ExportSuccess::Written {
        path: export_path.clone(),
        nb_objects: model.objects.len(),
    })
}
