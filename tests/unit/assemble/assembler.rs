use super::*;
use crate::source::stream::StreamKind;
use crate::transform::convert::{AngleUnit, CoordinateTransform};

fn stream_of(kind: StreamKind, frames: usize, fields: usize) -> SourceStream {
    let rows = (0..frames)
        .map(|_| (0..fields).map(|i| i as f64 * 0.01).collect())
        .collect();
    SourceStream::new(kind, rows)
}

fn assembler() -> MotionAssembler {
    MotionAssembler::new(Skeleton::standard(), CoordinateTransform::viewer())
}

#[test]
fn full_export_pair_resolves_every_skeleton_joint() {
    // 25 source joints of centers, 21 of rotations, 2 frames each.
    let centers = stream_of(StreamKind::Centers, 2, 300);
    let rotations = stream_of(StreamKind::Rotations, 2, 252);

    let sequence = assembler().assemble(&centers, &rotations).unwrap();
    assert_eq!(sequence.len(), 2);
    for frame in sequence.frames() {
        assert_eq!(frame.joints.len(), 22);
        for joint in Skeleton::standard().joint_names() {
            assert!(frame.pose(joint).is_some(), "missing joint '{joint}'");
        }
    }
}

#[test]
fn mismatched_stream_lengths_truncate_to_shorter() {
    let centers = stream_of(StreamKind::Centers, 5, 300);
    let rotations = stream_of(StreamKind::Rotations, 3, 252);

    let sequence = assembler().assemble(&centers, &rotations).unwrap();
    assert_eq!(sequence.len(), 3);
}

#[test]
fn root_translation_is_the_first_center_triple_transformed() {
    let mut row = vec![0.0; 300];
    row[0] = 0.5;
    row[1] = 1.0;
    row[2] = 1.5;
    let centers = SourceStream::new(StreamKind::Centers, vec![row]);
    let rotations = stream_of(StreamKind::Rotations, 1, 252);

    let sequence = assembler().assemble(&centers, &rotations).unwrap();
    let hips = sequence.frames()[0].pose("Hips").unwrap();
    assert_eq!(hips.position, Vec3::new(50.0, 100.0, 150.0));
}

#[test]
fn rotations_are_converted_to_degrees() {
    let centers = stream_of(StreamKind::Centers, 1, 300);
    let mut row = vec![0.0; 252];
    row[0] = std::f64::consts::PI; // source joint 0, X component
    let rotations = SourceStream::new(StreamKind::Rotations, vec![row]);

    let sequence = assembler().assemble(&centers, &rotations).unwrap();
    let hips = sequence.frames()[0].pose("Hips").unwrap();
    assert!((hips.rotation.x - 180.0).abs() < 1e-9);
}

#[test]
fn angle_unit_is_caller_configuration() {
    let transform = CoordinateTransform {
        angle_unit: AngleUnit::Degrees,
        ..CoordinateTransform::viewer()
    };
    let assembler = MotionAssembler::new(Skeleton::standard(), transform);

    let centers = stream_of(StreamKind::Centers, 1, 300);
    let mut row = vec![0.0; 252];
    row[0] = 90.0;
    let rotations = SourceStream::new(StreamKind::Rotations, vec![row]);

    let sequence = assembler.assemble(&centers, &rotations).unwrap();
    let hips = sequence.frames()[0].pose("Hips").unwrap();
    assert_eq!(hips.rotation.x, 90.0);
}

#[test]
fn short_trailing_rows_degrade_to_zero_poses() {
    // Second centers frame is truncated mid-block.
    let full: Vec<f64> = (0..300).map(|i| i as f64).collect();
    let short = vec![1.0, 2.0]; // not even one triple
    let centers = SourceStream::new(StreamKind::Centers, vec![full, short]);
    let rotations = stream_of(StreamKind::Rotations, 2, 252);

    let sequence = assembler().assemble(&centers, &rotations).unwrap();
    let hips = sequence.frames()[1].pose("Hips").unwrap();
    assert_eq!(hips.position, Vec3::new(0.0, 0.0, 0.0));
}

#[test]
fn out_of_range_frame_is_a_boundary_error() {
    let centers = stream_of(StreamKind::Centers, 2, 300);
    let rotations = stream_of(StreamKind::Rotations, 2, 252);
    let sequence = assembler().assemble(&centers, &rotations).unwrap();

    assert!(sequence.frame(1).is_ok());
    let err = sequence.frame(2).unwrap_err();
    assert!(matches!(err, SwingcapError::Boundary(_)));
}

#[test]
fn sequence_duration_follows_frame_rate() {
    let centers = stream_of(StreamKind::Centers, 3, 300);
    let rotations = stream_of(StreamKind::Rotations, 3, 252);
    let sequence = assembler()
        .with_frame_rate(FrameRate::new(60, 1).unwrap())
        .assemble(&centers, &rotations)
        .unwrap();
    assert!((sequence.duration_secs() - 0.05).abs() < 1e-12);
    assert!((sequence.frame_rate().frame_time_secs() - 1.0 / 60.0).abs() < 1e-12);
}
