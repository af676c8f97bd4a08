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
//! Command line front-end of cadmesh: inspect, repair, extend and export caDNAno designs.

use anyhow::{anyhow, Context};
use cadmesh_design::{
    BaseRef, Design, LatticeKind, Parameters, ScaffoldRouting, StrandKind,
};
use cadmesh_exports::ExportType;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cadmesh")]
#[command(about = "caDNAno topology and geometry for DNA origami renderers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Raise the default log level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary of a design
    Info {
        /// caDNAno file
        file: PathBuf,

        #[arg(long, value_enum, default_value = "auto")]
        lattice: LatticeArg,

        /// Repair scaffold breakpoints before inspecting the design
        #[arg(long)]
        stitch: bool,
    },

    /// Write a render model of a design as JSON
    Export {
        /// caDNAno file
        file: PathBuf,

        #[arg(short, long, value_enum)]
        model: ModelArg,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        #[arg(long, value_enum, default_value = "auto")]
        lattice: LatticeArg,

        /// JSON file overriding the default DNA parameters
        #[arg(long)]
        parameters: Option<PathBuf>,

        /// Repair scaffold breakpoints before exporting
        #[arg(long)]
        stitch: bool,
    },

    /// Assign a scaffold sequence and print the staple sequences
    Staples {
        /// caDNAno file
        file: PathBuf,

        /// Text or FASTA file holding the scaffold sequence
        #[arg(short, long)]
        sequence: PathBuf,

        /// Scaffold base receiving the first basis, as NUM:BASE. Defaults to the first scaffold
        /// 5' end
        #[arg(long, value_parser = parse_base_ref)]
        start: Option<BaseRef>,

        /// Mark the crossovers of the staples with an X
        #[arg(long)]
        crossovers: bool,

        /// Repair scaffold breakpoints before assigning the sequence
        #[arg(long)]
        stitch: bool,
    },

    /// Repeat the occupied part of a design along the helix axis
    Concat {
        /// caDNAno file
        file: PathBuf,

        /// Number of copies
        #[arg(short, long)]
        times: usize,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Repair scaffold breakpoints before concatenating
        #[arg(long)]
        stitch: bool,
    },
}

#[derive(ValueEnum, Clone, Copy)]
enum LatticeArg {
    Auto,
    Square,
    Honeycomb,
}

#[derive(ValueEnum, Clone, Copy)]
enum ModelArg {
    Cylinders,
    Scaffold,
    Spaghetti,
}

impl From<ModelArg> for ExportType {
    fn from(model: ModelArg) -> Self {
        match model {
            ModelArg::Cylinders => Self::Cylinders,
            ModelArg::Scaffold => Self::Scaffold,
            ModelArg::Spaghetti => Self::Spaghetti,
        }
    }
}

fn parse_base_ref(s: &str) -> Result<BaseRef, String> {
    let (strand, base) = s
        .split_once(':')
        .ok_or_else(|| format!("expected NUM:BASE, got {s}"))?;
    let strand = strand
        .trim()
        .parse()
        .map_err(|e| format!("invalid strand number {strand}: {e}"))?;
    let base = base
        .trim()
        .parse()
        .map_err(|e| format!("invalid base index {base}: {e}"))?;
    Ok(BaseRef::new(strand, base))
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn open_design(path: &Path, lattice: LatticeArg, stitch: bool) -> anyhow::Result<Design> {
    let mut design = Design::from_file(path)
        .with_context(|| format!("Could not open {}", path.to_string_lossy()))?;
    match lattice {
        LatticeArg::Auto => (),
        LatticeArg::Square => design.set_lattice(LatticeKind::Square),
        LatticeArg::Honeycomb => design.set_lattice(LatticeKind::Honeycomb),
    }
    if stitch {
        let nb_stitched = design.scaffold_stitch();
        println!("Stitched {nb_stitched} scaffold breakpoints");
    }
    Ok(design)
}

fn read_parameters(path: Option<&Path>) -> anyhow::Result<Parameters> {
    if let Some(path) = path {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.to_string_lossy()))?;
        let parameters = Parameters::from_json(&json)?;
        log::info!("Parameters:\n{}", parameters.formated_string());
        Ok(parameters)
    } else {
        Ok(Parameters::DEFAULT)
    }
}

/// The scaffold sequence in a plain text or FASTA file. Header lines and white spaces are
/// ignored.
fn read_sequence(path: &Path) -> anyhow::Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.to_string_lossy()))?;
    Ok(text
        .lines()
        .filter(|l| !l.starts_with('>'))
        .flat_map(|l| l.chars())
        .filter(|c| !c.is_whitespace())
        .collect())
}

/// The first scaffold 5' end or, on a closed loop scaffold, the first scaffold base.
fn default_start(design: &Design) -> anyhow::Result<BaseRef> {
    let indexed = design.indexed();
    let start = match ScaffoldRouting::detect(design) {
        ScaffoldRouting::Broken => indexed
            .prime5_ends(StrandKind::Scaffold)
            .first()
            .map(|(i, j)| (*i, *j)),
        ScaffoldRouting::ClosedLoop => design.vstrands.iter().enumerate().find_map(|(i, v)| {
            v.scaffold
                .iter()
                .position(|l| l.is_occupied())
                .map(|j| (i, j))
        }),
    };
    start
        .map(|(i, j)| BaseRef::new(design.vstrands[i].num, j))
        .ok_or_else(|| anyhow!("The design has no scaffold"))
}

fn info(file: &Path, lattice: LatticeArg, stitch: bool) -> anyhow::Result<()> {
    let design = open_design(file, lattice, stitch)?;
    print!("{}", design.formated_summary(Some(file)));
    let routing = ScaffoldRouting::detect(&design);
    let indexed = design.indexed();
    let paths = indexed.scaffold_paths(routing)?;
    let staples = indexed.staples()?;
    println!("\n---Topology---");
    println!("Scaffold routing: {routing:?}");
    println!("Number of scaffold paths: {}", paths.len());
    println!(
        "Scaffold path lengths: {:?}",
        paths.iter().map(|p| p.len()).collect::<Vec<_>>()
    );
    println!("Number of staples: {}", staples.len());
    println!("Unresolved scaffold bases: {}", design.unresolved_bases());
    Ok(())
}

fn staples(
    file: &Path,
    sequence: &Path,
    start: Option<BaseRef>,
    crossovers: bool,
    stitch: bool,
) -> anyhow::Result<()> {
    let mut design = open_design(file, LatticeArg::Auto, stitch)?;
    let sequence = read_sequence(sequence)?;
    let start = match start {
        Some(start) => start,
        None => default_start(&design)?,
    };
    let nb_used = design.populate_sequence(start, &sequence)?;
    log::info!("Used {nb_used} bases of the scaffold sequence from {start}");
    let unresolved = design.unresolved_bases();
    if unresolved > 0 {
        log::warn!("{unresolved} scaffold bases have no basis");
    }
    let indexed = design.indexed();
    for staple in indexed.staples()? {
        let sequence = if crossovers {
            staple.sequence_with_crossovers(&indexed)?
        } else {
            staple.sequence(&indexed)?
        };
        println!("{}\t#{:06x}\t{}", staple.start, staple.color, sequence);
    }
    Ok(())
}

fn concat(file: &Path, times: usize, output: &Path, stitch: bool) -> anyhow::Result<()> {
    let mut design = open_design(file, LatticeArg::Auto, stitch)?;
    design.concatenate(times)?;
    design.write_file(output)?;
    println!(
        "Wrote {} virtual strands of {} bases to {}",
        design.vstrands.len(),
        design.vstrands.first().map(|v| v.len()).unwrap_or(0),
        output.to_string_lossy()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Info {
            file,
            lattice,
            stitch,
        } => info(&file, lattice, stitch)?,
        Commands::Export {
            file,
            model,
            output,
            lattice,
            parameters,
            stitch,
        } => {
            let design = open_design(&file, lattice, stitch)?;
            let parameters = read_parameters(parameters.as_deref())?;
            let success = cadmesh_exports::export(&design, model.into(), &parameters, &output)?;
            println!("{}", success.message());
        }
        Commands::Staples {
            file,
            sequence,
            start,
            crossovers,
            stitch,
        } => staples(&file, &sequence, start, crossovers, stitch)?,
        Commands::Concat {
            file,
            times,
            output,
            stitch,
        } => concat(&file, times, &output, stitch)?,
    }

    Ok(())
}
