use std::fs;

use iwn2ili::issues::Issues;
use iwn2ili::record::{load_records, Relation};
use iwn2ili::repair::repair;

#[test_log::test]
fn repair_then_parse() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("english-hindi-linked.tsv");
    let dst = dir.path().join("english-hindi-linked-fixed.tsv");

    let content = [
        "iwn_id\tiwn_pos\tpwn21_offset\tpwn21_pos\tenglish_lemmas\tenglish_gloss\thindi_lemmas\thindi_gloss\trelation",
        "3784\tADJECTIVE\t2927512\tADJECTIVE\tAmerican\tof the US\tअमेरिकी\tअमेरिका से",
        "\"संबंधित\"\tDirect",
        "5474\tNOUN\t407535\tNOUN\tgaming\tplaying games\tगेमिंग\tखेल\tWordN",
        "15835\tNOUN\t8729390\tNOUN\tTibet\tregion\tतिब्बत\tएक क्षेत्र",
        "\"हिमालय\"\tDirect",
    ]
    .join("\n");
    fs::write(&src, content + "\n").unwrap();

    let stats = repair(&src, &dst).unwrap();
    assert_eq!(stats.total_lines, 6);
    assert_eq!(stats.output_lines, 4);
    assert_eq!(stats.merged_lines, 2);
    assert_eq!(stats.fixed_wordn, 1);

    let fixed = fs::read_to_string(&dst).unwrap();
    assert_eq!(fixed.lines().count(), 4);
    assert!(fixed.ends_with('\n'));

    let mut issues = Issues::default();
    let records = load_records(&dst, &mut issues).unwrap();
    assert!(issues.malformed_lines.is_empty());
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].hindi_gloss, "अमेरिका से \"संबंधित\"");
    assert_eq!(records[0].rel, Relation::Equal);
    assert_eq!(records[1].rel, Relation::Hyper);
    assert_eq!(records[2].iwn_key, "15835_n");
}

#[test]
fn repair_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    assert!(repair(&dir.path().join("nope.tsv"), &dir.path().join("out.tsv")).is_err());
}
