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

use super::sequence::{DELETION_MARKER, UNKNOWN_BASIS};
use super::*;

/// Two virtual strands of 8 bases. The scaffold goes right on strand 0 from base 1 to 6, then
/// left on strand 1 from base 6 to 1. Two staples, each with one crossover.
const TWO_HELICES: &str = r##"{
  "name": "two_helices.json",
  "vstrands": [
    {
      "num": 0, "row": 0, "col": 0,
      "scaf": [[-1,-1,-1,-1], [-1,-1,0,2], [0,1,0,3], [0,2,0,4], [0,3,0,5], [0,4,0,6], [0,5,1,6], [-1,-1,-1,-1]],
      "stap": [[-1,-1,-1,-1], [0,2,-1,-1], [0,3,0,1], [1,3,0,2], [0,5,1,4], [0,6,0,4], [-1,-1,0,5], [-1,-1,-1,-1]],
      "skip": [0,0,0,0,0,0,0,0],
      "loop": [0,0,0,0,0,0,0,0],
      "stap_colors": [[6, 65280]],
      "scafLoop": [],
      "stapLoop": []
    },
    {
      "num": 1, "row": 0, "col": 1,
      "scaf": [[-1,-1,-1,-1], [1,2,-1,-1], [1,3,1,1], [1,4,1,2], [1,5,1,3], [1,6,1,4], [0,6,1,5], [-1,-1,-1,-1]],
      "stap": [[-1,-1,-1,-1], [-1,-1,1,2], [1,1,1,3], [1,2,0,3], [0,4,1,5], [1,4,1,6], [1,5,-1,-1], [-1,-1,-1,-1]],
      "skip": [0,0,0,0,0,0,0,0],
      "loop": [0,0,0,0,0,2,0,0],
      "stap_colors": [[1, 16711680]],
      "scafLoop": [],
      "stapLoop": []
    }
  ]
}"##;

/// A single base handed from strand 0 to strand 1.
const HANDOFF: &str = r##"{
  "name": "handoff",
  "vstrands": [
    {"num": 0, "row": 0, "col": 0, "scaf": [[-1,-1,1,0], [-1,-1,-1,-1]], "stap": [[-1,-1,-1,-1], [-1,-1,-1,-1]],
     "skip": [0,0], "loop": [0,0], "stap_colors": []},
    {"num": 1, "row": 0, "col": 1, "scaf": [[0,0,-1,-1], [-1,-1,-1,-1]], "stap": [[-1,-1,-1,-1], [-1,-1,-1,-1]],
     "skip": [0,0], "loop": [0,0], "stap_colors": []}
  ]
}"##;

/// A three bases scaffold whose middle base is deleted.
const WITH_DELETION: &str = r##"{
  "name": "deletion",
  "vstrands": [
    {"num": 0, "row": 0, "col": 0, "scaf": [[-1,-1,0,1], [0,0,0,2], [0,1,-1,-1]], "stap": [[-1,-1,-1,-1], [-1,-1,-1,-1], [-1,-1,-1,-1]],
     "skip": [0,-1,0], "loop": [0,0,0], "stap_colors": []}
  ]
}"##;

/// A scaffold loop over two strands, broken between bases 1 and 2 of strand 0.
const BROKEN_LOOP: &str = r##"{
  "name": "broken_loop",
  "vstrands": [
    {"num": 0, "row": 0, "col": 0, "scaf": [[1,0,0,1], [0,0,-1,-1], [-1,-1,0,3], [0,2,1,3]],
     "stap": [[-1,-1,-1,-1], [-1,-1,-1,-1], [-1,-1,-1,-1], [-1,-1,-1,-1]],
     "skip": [0,0,0,0], "loop": [0,0,0,0], "stap_colors": []},
    {"num": 1, "row": 1, "col": 0, "scaf": [[1,1,0,0], [1,2,1,0], [1,3,1,1], [0,3,1,2]],
     "stap": [[-1,-1,-1,-1], [-1,-1,-1,-1], [-1,-1,-1,-1], [-1,-1,-1,-1]],
     "skip": [0,0,0,0], "loop": [0,0,0,0], "stap_colors": []}
  ]
}"##;

/// An odd strand whose leftward scaffold is broken between bases 2 and 3.
const BROKEN_LEFTWARD: &str = r##"{
  "name": "broken_leftward",
  "vstrands": [
    {"num": 1, "row": 0, "col": 0, "scaf": [[1,1,-1,-1], [1,2,1,0], [-1,-1,1,1], [1,4,-1,-1], [1,5,1,3], [-1,-1,1,4]],
     "stap": [[-1,-1,-1,-1], [-1,-1,-1,-1], [-1,-1,-1,-1], [-1,-1,-1,-1], [-1,-1,-1,-1], [-1,-1,-1,-1]],
     "skip": [0,0,0,0,0,0], "loop": [0,0,0,0,0,0], "stap_colors": []}
  ]
}"##;

/// A 5' end leading into a cycle that does not contain it.
const RHO_SHAPED: &str = r##"{
  "name": "rho",
  "vstrands": [
    {"num": 0, "row": 0, "col": 0, "scaf": [[-1,-1,0,1], [0,0,0,2], [0,1,0,1]],
     "stap": [[-1,-1,-1,-1], [-1,-1,-1,-1], [-1,-1,-1,-1]],
     "skip": [0,0,0], "loop": [0,0,0], "stap_colors": []}
  ]
}"##;

/// A staple forming a ring over two bases, with a color entry but no 3' end.
const STAPLE_RING: &str = r##"{
  "name": "staple_ring",
  "vstrands": [
    {"num": 0, "row": 0, "col": 0, "scaf": [[-1,-1,-1,-1], [-1,-1,-1,-1]], "stap": [[0,1,0,1], [0,0,0,0]],
     "skip": [0,0], "loop": [0,0], "stap_colors": [[0, 255]]}
  ]
}"##;

fn two_helices() -> Design {
    Design::load(TWO_HELICES).expect("Could not load two helices design")
}

fn point(row: isize, col: isize, base: usize, going_right: bool) -> PathPoint {
    PathPoint {
        row,
        col,
        base,
        going_right,
    }
}

fn bases(path: &[PathPoint]) -> Vec<(isize, usize)> {
    path.iter().map(|p| (p.col, p.base)).collect()
}

fn assert_parse_error(json: &str) {
    match Design::load(json) {
        Err(DesignError::Parse(_)) => (),
        Err(e) => panic!("Expected a parse error, got {}", e),
        Ok(_) => panic!("Expected a parse error, got a design"),
    }
}

#[test]
fn load_initializes_unknown_sequence() {
    let design = two_helices();
    assert_eq!(design.vstrands.len(), 2);
    assert_eq!(design.name, "two_helices.json");
    for v in design.vstrands.iter() {
        assert_eq!(v.sequence, vec![UNKNOWN_BASIS; 8]);
    }
    assert_eq!(design.unresolved_bases(), 12);
    assert_eq!(design.total_bases(), 16);
}

#[test]
fn missing_vstrands_is_a_parse_error() {
    assert_parse_error(r#"{"name": "nothing"}"#);
    assert_parse_error("this is not json");
}

#[test]
fn missing_strand_field_is_a_parse_error() {
    assert_parse_error(
        r#"{"vstrands": [{"num": 0, "row": 0, "col": 0, "scaf": [], "stap": [], "skip": [], "loop": []}]}"#,
    );
}

#[test]
fn inconsistent_lengths_are_rejected() {
    let json = r#"{"vstrands": [{"num": 4, "row": 0, "col": 0, "scaf": [[-1,-1,-1,-1]], "stap": [],
        "skip": [0], "loop": [0], "stap_colors": []}]}"#;
    assert!(matches!(
        Design::load(json),
        Err(DesignError::InconsistentLengths { num: 4 })
    ));
}

#[test]
fn empty_design_is_rejected() {
    assert!(matches!(
        Design::load(r#"{"vstrands": []}"#),
        Err(DesignError::NoVirtualStrands)
    ));
}

#[test]
fn serialization_round_trip() {
    let design = two_helices();
    let json = design.serialize().unwrap();
    let reloaded = Design::load(&json).unwrap();
    assert_ne!(reloaded.name, design.name);
    let before = serde_json::to_value(design.to_cadnano().vstrands).unwrap();
    let after = serde_json::to_value(reloaded.to_cadnano().vstrands).unwrap();
    assert_eq!(before, after);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["vstrands"][0]["scafLoop"].is_array());
    assert_eq!(value["vstrands"][1]["loop"][5], 2);
}

#[test]
fn index_resolves_strand_numbers() {
    let mut design = two_helices();
    design.vstrands[0].num = 12;
    design.vstrands[1].num = 7;
    let index = TopologyIndex::build(&design);
    assert_eq!(index.resolve(12).unwrap(), 0);
    assert_eq!(index.resolve(7).unwrap(), 1);
    assert!(matches!(index.resolve(0), Err(DesignError::UnknownStrand(0))));
    assert_eq!(index.staple_color(1, 1), Some(0xff0000));
    assert_eq!(index.staple_color(0, 6), Some(0x00ff00));
    assert_eq!(index.staple_color(0, 5), None);
}

#[test]
fn handoff_gives_one_path_of_two_bases() {
    let design = Design::load(HANDOFF).unwrap();
    let paths = design
        .indexed()
        .five_prime_paths(StrandKind::Scaffold)
        .unwrap();
    assert_eq!(paths, vec![vec![point(0, 0, 0, true), point(0, 1, 0, false)]]);
}

#[test]
fn single_scaffold_path_covers_every_scaffold_base() {
    let design = two_helices();
    let indexed = design.indexed();
    assert_eq!(ScaffoldRouting::detect(&design), ScaffoldRouting::Broken);
    let paths = indexed.scaffold_paths(ScaffoldRouting::Broken).unwrap();
    assert_eq!(paths.len(), 1);
    let nb_scaffold_bases: usize = design
        .vstrands
        .iter()
        .map(|v| v.nb_occupied(StrandKind::Scaffold))
        .sum();
    assert_eq!(paths[0].len(), nb_scaffold_bases);
    assert_eq!(paths[0][0], point(0, 0, 1, true));
    assert_eq!(paths[0][5], point(0, 0, 6, true));
    assert_eq!(paths[0][6], point(0, 1, 6, false));
    assert_eq!(paths[0][11], point(0, 1, 1, false));
}

#[test]
fn unknown_strand_in_link() {
    let mut design = two_helices();
    design.vstrands[1].scaffold[6].next = Some(BaseRef::new(7, 5));
    assert!(matches!(
        design.indexed().five_prime_paths(StrandKind::Scaffold),
        Err(DesignError::UnknownStrand(7))
    ));
}

#[test]
fn walk_into_a_cycle_terminates() {
    let design = Design::load(RHO_SHAPED).unwrap();
    assert!(matches!(
        design.indexed().five_prime_paths(StrandKind::Scaffold),
        Err(DesignError::CyclicPath { strand: 0, base: 0 })
    ));
}

#[test]
fn staple_ring_is_cyclic() {
    let design = Design::load(STAPLE_RING).unwrap();
    let indexed = design.indexed();
    assert_eq!(indexed.index.staple_color(0, 0), Some(255));
    assert!(matches!(
        indexed.staples(),
        Err(DesignError::CyclicPath { strand: 0, base: 0 })
    ));
    assert!(matches!(
        indexed.staple_paths(),
        Err(DesignError::CyclicPath { strand: 0, base: 0 })
    ));
    assert!(indexed
        .five_prime_paths(StrandKind::Staple)
        .unwrap()
        .is_empty());
}

#[test]
fn scaffold_lengths_of_two_helices() {
    let design = two_helices();
    let lengths = design.scaffold_lengths();
    assert_eq!(
        lengths,
        vec![
            ScaffoldSegments {
                row: 0,
                col: 0,
                segments: vec![(1, 6)]
            },
            ScaffoldSegments {
                row: 0,
                col: 1,
                segments: vec![(1, 6)]
            },
        ]
    );
}

#[test]
fn scaffold_lengths_with_several_runs() {
    let json = r#"{"vstrands": [
        {"num": 0, "row": 2, "col": 3, "scaf": [[-1,-1,0,1], [0,0,-1,-1], [-1,-1,-1,-1], [-1,-1,0,4], [0,3,-1,-1]],
         "stap": [[-1,-1,-1,-1], [-1,-1,-1,-1], [-1,-1,-1,-1], [-1,-1,-1,-1], [-1,-1,-1,-1]],
         "skip": [0,0,0,0,0], "loop": [0,0,0,0,0], "stap_colors": []},
        {"num": 1, "row": 2, "col": 4, "scaf": [[-1,-1,-1,-1], [-1,-1,-1,-1], [-1,-1,-1,-1], [-1,-1,-1,-1], [-1,-1,-1,-1]],
         "stap": [[-1,-1,-1,-1], [-1,-1,-1,-1], [-1,-1,-1,-1], [-1,-1,-1,-1], [-1,-1,-1,-1]],
         "skip": [0,0,0,0,0], "loop": [0,0,0,0,0], "stap_colors": []}
    ]}"#;
    let design = Design::load(json).unwrap();
    let lengths = design.scaffold_lengths();
    assert_eq!(lengths[0].segments, vec![(0, 1), (3, 4)]);
    assert_eq!((lengths[0].row, lengths[0].col), (2, 3));
    assert!(lengths[1].segments.is_empty());
}

#[test]
fn staples_in_storage_order() {
    let design = two_helices();
    let indexed = design.indexed();
    let staples = indexed.staples().unwrap();
    assert_eq!(staples.len(), 2);
    assert_eq!(staples[0].start, BaseRef::new(0, 6));
    assert_eq!(staples[0].color, 0x00ff00);
    assert_eq!(staples[0].bases.len(), 6);
    assert!(staples[0].bases[0].is_5prime_end());
    assert!(staples[0].bases[5].is_3prime_end());
    assert_eq!(staples[1].start, BaseRef::new(1, 1));
    assert_eq!(staples[1].bases[2].to_raw(), [1, 2, 0, 3]);

    let paths = indexed.staple_paths().unwrap();
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].color, 0x00ff00);
    assert_eq!(
        bases(&paths[0].path),
        vec![(0, 6), (0, 5), (0, 4), (1, 4), (1, 5), (1, 6)]
    );
    assert!(!paths[0].path[0].going_right);
    assert!(paths[0].path[5].going_right);
    assert_eq!(
        bases(&paths[1].path),
        vec![(1, 1), (1, 2), (1, 3), (0, 3), (0, 2), (0, 1)]
    );
}

#[test]
fn staple_walks_match_five_prime_walks() {
    let design = two_helices();
    let indexed = design.indexed();
    let from_colors: Vec<StrandPath> = indexed
        .staple_paths()
        .unwrap()
        .into_iter()
        .map(|s| s.path)
        .collect();
    let from_ends = indexed.five_prime_paths(StrandKind::Staple).unwrap();
    assert_eq!(from_colors, from_ends);
}

#[test]
fn stitch_closes_the_scaffold_loop() {
    let mut design = Design::load(BROKEN_LOOP).unwrap();
    assert_eq!(ScaffoldRouting::detect(&design), ScaffoldRouting::Broken);
    let broken = design
        .indexed()
        .scaffold_paths(ScaffoldRouting::Broken)
        .unwrap();
    assert_eq!(broken.len(), 1);
    assert_eq!(broken[0].len(), 8);
    assert_eq!(broken[0][0].base, 2);
    assert!(matches!(
        design.indexed().closed_loop_path(),
        Err(DesignError::NotClosedLoop { strand: 0, base: 0 })
    ));

    assert_eq!(design.scaffold_stitch(), 1);
    assert_eq!(design.vstrands[0].scaffold[1].to_raw(), [0, 0, 0, 2]);
    assert_eq!(design.vstrands[0].scaffold[2].to_raw(), [0, 1, 0, 3]);
    assert_eq!(ScaffoldRouting::detect(&design), ScaffoldRouting::ClosedLoop);
    let indexed = design.indexed();
    assert!(indexed
        .scaffold_paths(ScaffoldRouting::Broken)
        .unwrap()
        .is_empty());
    let paths = indexed.scaffold_paths(ScaffoldRouting::ClosedLoop).unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(
        bases(&paths[0]),
        vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 3), (0, 2), (0, 1), (0, 0)]
    );
    assert_eq!(paths[0][4].row, 1);
}

#[test]
fn stitch_leftward_breakpoint() {
    let mut design = Design::load(BROKEN_LEFTWARD).unwrap();
    assert_eq!(design.scaffold_stitch(), 1);
    assert_eq!(design.vstrands[0].scaffold[2].to_raw(), [1, 3, 1, 1]);
    assert_eq!(design.vstrands[0].scaffold[3].to_raw(), [1, 4, 1, 2]);
    let paths = design.indexed().five_prime_paths(StrandKind::Scaffold).unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].len(), 6);
    assert!(paths[0].iter().all(|p| !p.going_right));
}

#[test]
fn stitch_ignores_regular_ends() {
    let mut design = two_helices();
    let before = design.vstrands[0].scaffold.clone();
    assert_eq!(design.scaffold_stitch(), 0);
    assert_eq!(design.vstrands[0].scaffold, before);
    let mut handoff = Design::load(HANDOFF).unwrap();
    assert_eq!(handoff.scaffold_stitch(), 0);
}

#[test]
fn deletions_do_not_consume_the_sequence() {
    let mut design = Design::load(WITH_DELETION).unwrap();
    let used = design.populate_sequence(BaseRef::new(0, 0), "AC").unwrap();
    assert_eq!(used, 2);
    assert_eq!(design.vstrands[0].sequence, vec!['A', DELETION_MARKER, 'C']);
    assert_eq!(design.unresolved_bases(), 0);
}

#[test]
fn short_path_leaves_sequence_unused() {
    let mut design = Design::load(WITH_DELETION).unwrap();
    let used = design
        .populate_sequence(BaseRef::new(0, 0), "GATTACA")
        .unwrap();
    assert_eq!(used, 2);
    assert_eq!(design.vstrands[0].sequence, vec!['G', 'D', 'A']);
}

#[test]
fn short_sequence_leaves_unknown_bases() {
    let mut design = two_helices();
    let used = design.populate_sequence(BaseRef::new(0, 1), "ACG").unwrap();
    assert_eq!(used, 3);
    assert_eq!(design.unresolved_bases(), 9);
    assert_eq!(&design.vstrands[0].sequence[..5], &['?', 'A', 'C', 'G', '?']);
}

#[test]
fn closed_loop_sequence_does_not_wrap() {
    let mut design = Design::load(BROKEN_LOOP).unwrap();
    design.scaffold_stitch();
    let used = design
        .populate_sequence(BaseRef::new(0, 0), "AAAACCCCGG")
        .unwrap();
    assert_eq!(used, 8);
    assert_eq!(design.vstrands[0].sequence, vec!['A'; 4]);
}

#[test]
fn staple_sequences_are_complementary() {
    let mut design = two_helices();
    design
        .populate_sequence(BaseRef::new(0, 1), "ACGTACGTACGT")
        .unwrap();
    let indexed = design.indexed();
    let staples = indexed.staples().unwrap();
    let first = indexed
        .staple_sequence(staples[0].start, &staples[0].bases)
        .unwrap();
    assert_eq!(first.len(), staples[0].bases.len());
    assert!(first
        .iter()
        .all(|b| ["A", "C", "G", "T", "", "?"].contains(b)));
    assert_eq!(staples[0].sequence(&indexed).unwrap(), "GTATAC");
    assert_eq!(staples[1].sequence(&indexed).unwrap(), "ACGCGT");
    assert_eq!(
        staples[0].sequence_with_crossovers(&indexed).unwrap(),
        "GTAXTAC"
    );
    assert_eq!(
        staples[1].sequence_with_crossovers(&indexed).unwrap(),
        "ACGXCGT"
    );
}

#[test]
fn staple_sequence_of_unassigned_scaffold() {
    let design = two_helices();
    let indexed = design.indexed();
    let staples = indexed.staples().unwrap();
    assert_eq!(staples[1].sequence(&indexed).unwrap(), "??????");
}

#[test]
fn staple_sequence_with_unknown_basis() {
    let mut design = two_helices();
    design
        .populate_sequence(BaseRef::new(0, 1), "NNNNNNNNNNNN")
        .unwrap();
    let indexed = design.indexed();
    let staples = indexed.staples().unwrap();
    assert!(matches!(
        staples[0].sequence(&indexed),
        Err(DesignError::UnknownBase { basis: 'N', .. })
    ));
}

#[test]
fn concatenate_once_only_resets_skips() {
    let mut design = two_helices();
    design.vstrands[0].skip[3] = -1;
    let before = design.clone();
    design.concatenate(1).unwrap();
    for (v, w) in design.vstrands.iter().zip(before.vstrands.iter()) {
        assert_eq!(v.scaffold, w.scaffold);
        assert_eq!(v.staple, w.staple);
        assert_eq!(v.loops, w.loops);
        assert_eq!(v.staple_colors, w.staple_colors);
        assert!(v.skip.iter().all(|s| *s == 0));
    }
}

#[test]
fn concatenate_tiles_the_interior() {
    let mut design = two_helices();
    design.concatenate(3).unwrap();
    for v in design.vstrands.iter() {
        assert_eq!(v.len(), 1 + 3 * 6 + 1);
        assert_eq!(v.staple.len(), v.len());
        assert_eq!(v.skip.len(), v.len());
        assert_eq!(v.loops.len(), v.len());
        assert_eq!(v.sequence.len(), v.len());
        assert!(v.scaffold[0].is_empty());
        assert!(v.scaffold[19].is_empty());
        for links in v.scaffold.iter().chain(v.staple.iter()) {
            for r in links.prev.iter().chain(links.next.iter()) {
                assert!(r.base >= 1 && r.base < 19, "{} points outside", links);
            }
        }
    }
    assert_eq!(design.vstrands[0].scaffold[7].to_raw(), [-1, -1, 0, 8]);
    assert_eq!(design.vstrands[0].scaffold[12].to_raw(), [0, 11, 1, 12]);
    assert_eq!(design.vstrands[1].loops[5 + 12], 2);

    let indexed = design.indexed();
    let paths = indexed.scaffold_paths(ScaffoldRouting::Broken).unwrap();
    assert_eq!(paths.len(), 3);
    assert!(paths.iter().all(|p| p.len() == 12));
    let staples = indexed.staples().unwrap();
    assert_eq!(staples.len(), 6);
    assert_eq!(
        staples.iter().map(|s| s.start).collect::<Vec<_>>(),
        vec![
            BaseRef::new(0, 6),
            BaseRef::new(0, 12),
            BaseRef::new(0, 18),
            BaseRef::new(1, 1),
            BaseRef::new(1, 7),
            BaseRef::new(1, 13),
        ]
    );
    assert!(staples.iter().all(|s| s.bases.len() == 6));
}

#[test]
fn concatenate_needs_an_interior() {
    let json = r#"{"vstrands": [{"num": 3, "row": 0, "col": 0, "scaf": [[-1,-1,-1,-1], [-1,-1,-1,-1]],
        "stap": [[-1,-1,-1,-1], [-1,-1,-1,-1]], "skip": [0,0], "loop": [0,0], "stap_colors": []}]}"#;
    let mut design = Design::load(json).unwrap();
    assert!(matches!(
        design.concatenate(2),
        Err(DesignError::MalformedBoundary { num: 3 })
    ));
    let mut design = two_helices();
    assert!(matches!(
        design.concatenate(0),
        Err(DesignError::InvalidRepeatCount(0))
    ));
}

#[test]
fn concatenate_rejects_overflowing_repeat_counts() {
    for repeat in [usize::MAX, usize::MAX / 2] {
        let mut design = two_helices();
        assert!(matches!(
            design.concatenate(repeat),
            Err(DesignError::InvalidRepeatCount(r)) if r == repeat
        ));
        assert!(design.vstrands.iter().all(|v| v.len() == 8));
    }
}

#[test]
fn summary_names_the_file() {
    let design = two_helices();
    let file = std::path::Path::new("designs/two_helices.json");
    let summary = design.formated_summary(Some(file));
    assert!(summary.starts_with("File name: designs/two_helices.json\n"));
    assert!(!design.formated_summary(None).contains("File name"));
}

#[test]
fn summary_lists_virtual_strands() {
    let summary = two_helices().formated_summary(None);
    assert!(summary.contains("Number of virtual strands: 2"));
    assert!(summary.contains("Number of scaffold bases: 6"));
    assert!(summary.contains("Lattice Column: 1"));
}

#[test]
fn links_display() {
    assert_eq!(
        BaseLinks::from_raw([0, 5, 1, 6]).to_string(),
        "[H0:5] -> [H1:6]"
    );
    assert_eq!(BaseLinks::from_raw([-1, -1, 0, 2]).to_string(), "[5'] -> [H0:2]");
}
