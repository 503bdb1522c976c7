use gxfgrep::{run, Config, Mode};
use indoc::indoc;
use std::path::{Path, PathBuf};

/// Writes a file to the temporary directory and returns its path.
fn write_temp_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Filters a small GFF3 by feature type and attribute.
#[test]
fn filter_gff_by_type_and_attribute() {
    let dir = tempfile::tempdir().unwrap();
    let gff = indoc! {"
        ##gff-version 3
        chr1\tHAVANA\tgene\t11869\t14409\t.\t+\t.\tID=g1;gene_type=protein_coding
        chr1\tHAVANA\texon\t11869\t12227\t.\t+\t.\tID=e1;Parent=g1
        chr1\tHAVANA\tgene\t14410\t29570\t.\t-\t.\tID=g2;gene_type=lncRNA
    "};
    let input_path = write_temp_file(dir.path(), "input.gff3", gff.trim());
    let output_path = dir.path().join("output.gff3");

    let config = Config {
        input: input_path,
        output: Some(output_path.clone()),
        feature_type: Some("gene".to_string()),
        strand: None,
        attributes: vec![("gene_type".to_string(), "protein_coding".to_string())],
        mode: Mode::Strict,
    };

    let stats = run(&config).unwrap();
    assert_eq!(stats.records, 3);
    assert_eq!(stats.matched, 1);
    assert_eq!(stats.skipped, 0);

    let output = std::fs::read_to_string(&output_path).unwrap();
    let lines = output.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 1);
    assert_eq!(
        lines[0],
        "chr1\tHAVANA\tgene\t11869\t14409\t.\t+\t.\tID=g1;gene_type=protein_coding"
    );
}

/// Filters by strand; absent score and phase render back as dots.
#[test]
fn filter_gff_by_strand() {
    let dir = tempfile::tempdir().unwrap();
    let gff = indoc! {"
        chr1\tsrc\tgene\t100\t200\t.\t+\t.\tID=g1
        chr1\tsrc\tgene\t300\t400\t.\t-\t.\tID=g2
        chr1\tsrc\tgene\t500\t600\t.\t-\t.\tID=g3
    "};
    let input_path = write_temp_file(dir.path(), "input.gff", gff.trim());
    let output_path = dir.path().join("output.gff");

    let config = Config {
        input: input_path,
        output: Some(output_path.clone()),
        feature_type: None,
        strand: Some("-".to_string()),
        attributes: vec![],
        mode: Mode::Strict,
    };

    let stats = run(&config).unwrap();
    assert_eq!(stats.matched, 2);

    let output = std::fs::read_to_string(&output_path).unwrap();
    for line in output.lines() {
        let fields = line.split('\t').collect::<Vec<_>>();
        assert_eq!(fields.len(), 9);
        assert_eq!(fields[5], ".");
        assert_eq!(fields[6], "-");
        assert_eq!(fields[7], ".");
    }
}

/// A multi-valued attribute matches on any one of its comma-separated values.
#[test]
fn filter_gff_multi_value_attribute() {
    let dir = tempfile::tempdir().unwrap();
    let gff = indoc! {"
        chr1\tsrc\ttranscript\t100\t200\t.\t+\t.\tID=tx1;tag=appris,basic,CCDS
        chr1\tsrc\ttranscript\t300\t400\t.\t+\t.\tID=tx2;tag=exp_conf
    "};
    let input_path = write_temp_file(dir.path(), "input.gff3", gff.trim());
    let output_path = dir.path().join("output.gff3");

    let config = Config {
        input: input_path,
        output: Some(output_path.clone()),
        feature_type: None,
        strand: None,
        attributes: vec![("tag".to_string(), "basic".to_string())],
        mode: Mode::Strict,
    };

    let stats = run(&config).unwrap();
    assert_eq!(stats.matched, 1);

    let output = std::fs::read_to_string(&output_path).unwrap();
    assert!(output.contains("ID=tx1"));
    assert!(!output.contains("ID=tx2"));
}
