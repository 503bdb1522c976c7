use flate2::write::GzEncoder;
use flate2::Compression as GzCompression;
use gxfgrep::{run, Config, Mode};
use indoc::indoc;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes gz-compressed contents to a file and returns its path.
fn write_gzip_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let mut encoder = GzEncoder::new(Vec::new(), GzCompression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    let gz = encoder.finish().unwrap();

    let path = dir.join(name);
    std::fs::write(&path, gz).unwrap();
    path
}

/// Filters a gzipped GFF3 through the buffered gzip reader.
#[test]
fn filter_gzipped_gff() {
    let dir = tempfile::tempdir().unwrap();
    let gff = indoc! {"
        ##gff-version 3
        chr1\tsrc\tgene\t100\t200\t.\t+\t.\tID=g1
        chr1\tsrc\texon\t100\t150\t.\t+\t.\tID=e1;Parent=g1
    "};
    let input_path = write_gzip_file(dir.path(), "input.gff3.gz", gff.trim());
    let output_path = dir.path().join("output.gff3");

    let config = Config {
        input: input_path,
        output: Some(output_path.clone()),
        feature_type: Some("exon".to_string()),
        strand: None,
        attributes: vec![],
        mode: Mode::Strict,
    };

    let stats = run(&config).unwrap();
    assert_eq!(stats.records, 2);
    assert_eq!(stats.matched, 1);

    let output = std::fs::read_to_string(&output_path).unwrap();
    let line = output.lines().next().unwrap();
    let fields = line.split('\t').collect::<Vec<_>>();
    assert_eq!(fields[2], "exon");
    assert_eq!(fields[8], "ID=e1;Parent=g1");
}
