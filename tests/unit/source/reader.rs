use super::*;

const TXT: &str = "X Y Z Length vX vY vZ vAbs aX aY aZ aAbs\n\
                   0.1 0.2 0.3 0.0 0.0 0.0 0.0 0.0 0.0 0.0 0.0 0.0\n\
                   not a number line\n\
                   0.4 0.5 0.6 0.0 0.0 0.0 0.0 0.0 0.0 0.0 0.0 0.0\n";

const CSV: &str = "frame,X1,Y1,Z1,Length1,vX1,vY1,vZ1,vAbs1,aX1,aY1,aZ1,aAbs1\n\
                   0,0.1,0.2,0.3,0,0,0,0,0,0,0,0,0\n\
                   1,0.4,0.5,0.6,0,0,0,0,0,0,0,0,0\n";

#[test]
fn txt_skips_header_and_malformed_rows() {
    let mut source = DelimitedTextSource::new(TXT);
    let rows = source.read_rows().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], 0.1);
    assert_eq!(rows[1][2], 0.6);
}

#[test]
fn csv_drops_frame_column() {
    let mut source = CsvSource::new(CSV);
    let rows = source.read_rows().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].len(), 12);
    assert_eq!(rows[0][0], 0.1);
    assert_eq!(rows[1][1], 0.5);
}

#[test]
fn csv_without_frame_column_keeps_all_fields() {
    let content = "X1,Y1,Z1\n1.0,2.0,3.0\n";
    let mut source = CsvSource::new(content);
    let rows = source.read_rows().unwrap();
    assert_eq!(rows, vec![vec![1.0, 2.0, 3.0]]);
}

#[test]
fn both_formats_decode_the_same_stream() {
    let txt = read_stream(StreamKind::Centers, &mut DelimitedTextSource::new(TXT)).unwrap();
    let csv = read_stream(StreamKind::Centers, &mut CsvSource::new(CSV)).unwrap();
    assert_eq!(txt.rows(), csv.rows());
    assert_eq!(txt.num_joints(), 1);
    assert_eq!(csv.num_joints(), 1);
}

#[test]
fn content_without_rows_is_a_parse_error() {
    let err = read_stream(StreamKind::Rotations, &mut DelimitedTextSource::new("header only\n"))
        .unwrap_err();
    assert!(matches!(err, SwingcapError::Parse(_)));
}

#[test]
fn missing_file_is_reported_not_panicked() {
    let err = load_stream(
        StreamKind::Centers,
        SourceFormat::Txt,
        std::path::Path::new("/definitely/not/here.txt"),
    )
    .unwrap_err();
    assert!(matches!(err, SwingcapError::MissingInput(_)));
}
