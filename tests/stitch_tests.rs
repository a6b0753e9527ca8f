//! End-to-end stitching through the library API.

mod common;

use std::collections::HashSet;

use common::{bare_container, container, sample_json, write_json};
use contig_stitch::parsing::model::resolve_alphabet;
use contig_stitch::parsing::probs::{parse_probs_file, parse_probs_text, ProbsFile};
use contig_stitch::parsing::region::parse_regions;
use contig_stitch::stitching::{Overlap, StitchError};
use contig_stitch::{Contig, MidpointResolver, Sample, SampleIndex, StitchConfig, StitchEngine};
use tempfile::tempdir;

const REFERENCE: &str = "ACGTTGCAACGTAGCTTAGCATGCAAGTCCGATCGATTACGGCATGCATTAGGCTAACGTGTCAGTCGATGCAATTGCCGTAGCTAGGATCCAGTACGA";

fn load(value: &serde_json::Value) -> ProbsFile {
    parse_probs_text(&value.to_string()).unwrap()
}

/// Windows of `width` every `step` bases over `seq`, ending at its last base
fn tile(ref_name: &str, seq: &str, width: usize, step: usize) -> Vec<serde_json::Value> {
    let mut samples = Vec::new();
    let mut start = 0;
    loop {
        let end = (start + width).min(seq.len());
        samples.push(sample_json(ref_name, start as u64, &seq[start..end]));
        if end == seq.len() {
            break;
        }
        start += step;
    }
    samples
}

fn stitch_all(files: Vec<ProbsFile>) -> Vec<Contig> {
    let alphabet = resolve_alphabet(files[0].label_decoding.as_ref(), None).unwrap();
    let index = SampleIndex::from_files(files);
    StitchEngine::new(&alphabet, &MidpointResolver, StitchConfig::default())
        .run(&index, None)
        .unwrap()
}

#[test]
fn test_overlapping_pair_with_fixed_split() {
    let probs = load(&container(vec![
        sample_json("chr1", 0, "ACGTACGTAC"),
        sample_json("chr1", 5, "CGTACCCGGT"),
    ]));
    let alphabet = resolve_alphabet(probs.label_decoding.as_ref(), None).unwrap();
    let index = SampleIndex::from_files(vec![probs]);

    let resolver = |_: &Sample, _: &Sample| Ok::<_, StitchError>(Overlap::split(5, 0));
    let contigs = StitchEngine::new(&alphabet, &resolver, StitchConfig::default())
        .run(&index, None)
        .unwrap();

    assert_eq!(
        contigs,
        vec![Contig::new("chr1:1.0-15.0", "ACGTACGTACCCGGT")]
    );
}

#[test]
fn test_non_overlapping_pair_gives_two_contigs() {
    let contigs = stitch_all(vec![load(&container(vec![
        sample_json("chr2", 0, "ACGTA"),
        sample_json("chr2", 40, "GGCCT"),
    ]))]);

    assert_eq!(
        contigs,
        vec![
            Contig::new("chr2:1.0-5.0", "ACGTA"),
            Contig::new("chr2:41.0-45.0", "GGCCT"),
        ]
    );
}

#[test]
fn test_tiled_windows_reconstruct_reference() {
    for (width, step) in [(20, 12), (30, 15), (17, 16), (100, 50)] {
        let contigs = stitch_all(vec![load(&container(tile("chr1", REFERENCE, width, step)))]);
        assert_eq!(contigs.len(), 1, "width {width} step {step}");
        assert_eq!(contigs[0].sequence, REFERENCE, "width {width} step {step}");
        assert_eq!(
            contigs[0].key,
            format!("chr1:1.0-{}.0", REFERENCE.len()),
            "width {width} step {step}"
        );
    }
}

#[test]
fn test_gaps_split_into_m_plus_one_contigs() {
    // Three holes between four islands of tiled windows
    let mut samples = Vec::new();
    for island in 0..4u64 {
        for offset in [0u64, 6] {
            samples.push(sample_json("chr3", island * 100 + offset, "ACGTACGTAC"));
        }
    }

    let contigs = stitch_all(vec![load(&container(samples))]);
    assert_eq!(contigs.len(), 4);
    assert_eq!(contigs[3].key, "chr3:301.0-316.0");
    assert!(contigs.iter().all(|c| c.sequence.len() == 16));
}

#[test]
fn test_gap_labels_are_stripped_across_joins() {
    // Gap columns inside the kept part of each window disappear from the output
    let contigs = stitch_all(vec![load(&container(vec![
        sample_json("chr1", 0, "AC*GTA*CGT"),
        sample_json("chr1", 5, "A*CGT**TTT"),
    ]))]);

    // Midpoint of shared 5..=9 is 7: first keeps rows 0..7, second resumes at row 2
    assert_eq!(contigs, vec![Contig::new("chr1:1.0-15.0", "ACGTACGTTTT")]);
}

#[test]
fn test_samples_merged_across_containers() {
    let windows = tile("chr1", REFERENCE, 24, 16);
    let (odd, even): (Vec<_>, Vec<_>) = windows
        .into_iter()
        .enumerate()
        .partition(|(i, _)| i % 2 == 1);

    let first = load(&container(even.into_iter().map(|(_, s)| s).collect()));
    let second = load(&bare_container(odd.into_iter().map(|(_, s)| s).collect()));

    let contigs = stitch_all(vec![first, second]);
    assert_eq!(contigs.len(), 1);
    assert_eq!(contigs[0].sequence, REFERENCE);
}

#[test]
fn test_region_filter_only_names_requested_references() {
    let probs = load(&container(vec![
        sample_json("chr1", 0, "ACGT"),
        sample_json("chr2", 0, "GGGG"),
        sample_json("chrM", 0, "TTTT"),
    ]));
    let alphabet = resolve_alphabet(probs.label_decoding.as_ref(), None).unwrap();
    let index = SampleIndex::from_files(vec![probs]);
    let regions = parse_regions(&["chrM:1-2", "chr1"]).unwrap();

    let contigs = StitchEngine::new(&alphabet, &MidpointResolver, StitchConfig::default())
        .run(&index, Some(regions.as_slice()))
        .unwrap();

    let requested: HashSet<&str> = ["chrM", "chr1"].into_iter().collect();
    assert_eq!(contigs.len(), 2);
    assert!(contigs.iter().all(|c| requested.contains(c.ref_name())));
}

#[test]
fn test_read_container_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("probs.json");
    write_json(
        &path,
        &container(vec![sample_json("chr1", 9, "TTAC"), sample_json("chr1", 11, "ACGG")]),
    );

    let contigs = stitch_all(vec![parse_probs_file(&path).unwrap()]);
    assert_eq!(contigs, vec![Contig::new("chr1:10.0-15.0", "TTACGG")]);
}

/// Windows over `REFERENCE` given as inclusive `(start, end)` positions
fn windows(ref_name: &str, spans: &[(usize, usize)]) -> Vec<serde_json::Value> {
    spans
        .iter()
        .map(|&(start, end)| sample_json(ref_name, start as u64, &REFERENCE[start..=end]))
        .collect()
}

#[test]
fn test_irregular_windows_cover_each_position_once() {
    // Shared starts, windows inside a neighbour, and a contained final window
    let layouts: [&[(usize, usize)]; 3] = [
        &[(0, 40), (0, 25), (10, 20), (30, 70), (35, 50), (60, 98), (60, 75), (90, 98)],
        &[(0, 60), (0, 30), (20, 98), (20, 40)],
        &[(0, 98), (10, 20), (50, 60)],
    ];

    for spans in layouts {
        let contigs = stitch_all(vec![load(&container(windows("chr1", spans)))]);
        assert_eq!(
            contigs,
            vec![Contig::new(format!("chr1:1.0-{}.0", REFERENCE.len()), REFERENCE)],
            "windows {spans:?}"
        );
    }
}

#[test]
fn test_last_window_inside_previous_keeps_its_tail() {
    let contigs = stitch_all(vec![load(&container(windows("chr1", &[(0, 20), (5, 10)])))]);
    assert_eq!(contigs, vec![Contig::new("chr1:1.0-21.0", &REFERENCE[..=20])]);
}

#[test]
fn test_window_inside_joined_neighbour() {
    let contigs = stitch_all(vec![load(&container(windows(
        "chr1",
        &[(0, 60), (10, 90), (11, 20)],
    )))]);
    assert_eq!(contigs, vec![Contig::new("chr1:1.0-91.0", &REFERENCE[..=90])]);
}
