//! End-to-end tests of the frame pipeline with a fixed-output detector.

use std::sync::Arc;

use image::{Rgb, RgbImage};
use imageproc::point::Point;
use lip_tint::topology::{FACE_MESH_LANDMARKS, LEFT_EYE_EDGES, LIPS_EDGES};
use lip_tint::{
    Color, FaceLandmarks, FramePipeline, LandmarkPoint, PipelineConfig, Region,
    RegionIndexRegistry, RegionStyle, StaticDetector, build_mask, build_region_indices,
};

/// A full face-mesh point set whose `edges` region is spread round `outline`.
/// Every other landmark sits at the origin.
fn face_with(edges: &[(usize, usize)], outline: &[(f32, f32)]) -> FaceLandmarks {
    let mut points = vec![LandmarkPoint::new(0.0, 0.0); FACE_MESH_LANDMARKS];
    for (k, idx) in build_region_indices(edges).into_iter().enumerate() {
        let (x, y) = outline[k % outline.len()];
        points[idx] = LandmarkPoint::new(x, y);
    }
    FaceLandmarks::new(points)
}

fn hexagon(cx: f32, cy: f32) -> Vec<(f32, f32)> {
    vec![
        (cx - 0.15, cy),
        (cx - 0.05, cy - 0.07),
        (cx + 0.05, cy - 0.07),
        (cx + 0.15, cy),
        (cx + 0.05, cy + 0.07),
        (cx - 0.05, cy + 0.07),
    ]
}

fn hull_mask_of(outline: &[(f32, f32)], w: u32, h: u32) -> lip_tint::RegionMask {
    let pts: Vec<Point<i32>> = outline
        .iter()
        .map(|&(x, y)| LandmarkPoint::new(x, y).to_pixel(w, h))
        .collect();
    build_mask(Region::Lips, &pts, w, h, 1).unwrap()
}

fn textured(w: u32, h: u32) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| {
        Rgb([(x * 5 % 256) as u8, (y * 3 % 256) as u8, ((x + y) % 256) as u8])
    })
}

#[test]
fn gray_frame_gets_red_lips_and_clean_corners() {
    let pipeline = FramePipeline::with_defaults().unwrap();
    let frame = RgbImage::from_pixel(100, 100, Rgb([128, 128, 128]));
    let face = face_with(LIPS_EDGES, &hexagon(0.5, 0.5));

    let out = pipeline
        .process_frame(&frame, &StaticDetector::new(vec![face]))
        .unwrap();

    let centre = out.get_pixel(50, 50);
    assert!(centre[0] > 200, "red channel only reached {}", centre[0]);
    assert_eq!(centre[1], 128);
    assert_eq!(centre[2], 128);
    for (x, y) in [(0, 0), (99, 0), (0, 99), (99, 99)] {
        assert_eq!(out.get_pixel(x, y), &Rgb([128, 128, 128]));
    }
}

#[test]
fn no_face_returns_identical_frame() {
    let pipeline = FramePipeline::with_defaults().unwrap();
    let frame = textured(64, 48);
    let out = pipeline
        .process_frame(&frame, &StaticDetector::new(Vec::new()))
        .unwrap();
    assert_eq!(out.as_raw(), frame.as_raw());
}

#[test]
fn two_point_face_is_skipped_and_others_still_process() {
    let pipeline = FramePipeline::with_defaults().unwrap();
    let frame = textured(120, 80);
    let degenerate = face_with(LIPS_EDGES, &[(0.2, 0.2), (0.3, 0.3)]);
    let good = face_with(LIPS_EDGES, &hexagon(0.7, 0.6));

    let both = pipeline
        .process_frame(&frame, &StaticDetector::new(vec![degenerate.clone(), good.clone()]))
        .unwrap();
    let good_only = pipeline
        .process_frame(&frame, &StaticDetector::new(vec![good]))
        .unwrap();
    let degenerate_only = pipeline
        .process_frame(&frame, &StaticDetector::new(vec![degenerate]))
        .unwrap();

    assert_eq!(degenerate_only, frame);
    assert_eq!(both, good_only);
    assert_ne!(both, frame);
}

#[test]
fn faces_do_not_leak_into_each_other() {
    let (w, h) = (160, 80);
    let pipeline = FramePipeline::with_defaults().unwrap();
    let frame = textured(w, h);
    let left_outline = hexagon(0.25, 0.5);
    let right_outline = hexagon(0.75, 0.5);
    let left = face_with(LIPS_EDGES, &left_outline);
    let right = face_with(LIPS_EDGES, &right_outline);

    let both = pipeline
        .process_frame(&frame, &StaticDetector::new(vec![left.clone(), right.clone()]))
        .unwrap();
    let left_alone = pipeline
        .process_frame(&frame, &StaticDetector::new(vec![left]))
        .unwrap();
    let right_alone = pipeline
        .process_frame(&frame, &StaticDetector::new(vec![right]))
        .unwrap();

    let left_mask = hull_mask_of(&left_outline, w, h);
    let right_mask = hull_mask_of(&right_outline, w, h);
    for (x, y, px) in both.enumerate_pixels() {
        if left_mask.in_hard(x, y) {
            assert_eq!(px, left_alone.get_pixel(x, y));
        } else if right_mask.in_hard(x, y) {
            assert_eq!(px, right_alone.get_pixel(x, y));
        } else {
            assert_eq!(px, frame.get_pixel(x, y));
        }
    }
}

#[test]
fn output_is_deterministic() {
    let pipeline = FramePipeline::with_defaults().unwrap();
    let frame = textured(90, 90);
    let detector = StaticDetector::new(vec![face_with(LIPS_EDGES, &hexagon(0.5, 0.55))]);
    let a = pipeline.process_frame(&frame, &detector).unwrap();
    let b = pipeline.process_frame(&frame, &detector).unwrap();
    assert_eq!(a, b);
}

#[test]
fn later_regions_stack_on_earlier_ones() {
    let mut lips = RegionStyle::lips(Color::rgb(255, 0, 0));
    lips.intensity = 0.3;
    let eye = RegionStyle {
        region: Region::LeftEye,
        color: Color::rgb(0, 0, 255),
        ..RegionStyle::default()
    };
    let config = PipelineConfig {
        regions: vec![lips, eye],
    };
    let pipeline = FramePipeline::new(Arc::new(RegionIndexRegistry::new().unwrap()), config);

    // Both regions outline the same hexagon, so the centre collects both tints.
    let outline = hexagon(0.5, 0.5);
    let mut face = face_with(LIPS_EDGES, &outline);
    let eye_face = face_with(LEFT_EYE_EDGES, &outline);
    for idx in build_region_indices(LEFT_EYE_EDGES) {
        face.points[idx] = eye_face.points[idx];
    }

    let frame = RgbImage::from_pixel(100, 100, Rgb([100, 100, 100]));
    let out = pipeline
        .process_frame(&frame, &StaticDetector::new(vec![face]))
        .unwrap();
    let centre = out.get_pixel(50, 50);
    assert!(centre[0] > 150);
    assert_eq!(centre[1], 100);
    assert!(centre[2] > 150);
}

#[test]
fn flat_frame_with_zero_intensity_is_unchanged() {
    let mut style = RegionStyle::default();
    style.intensity = 0.0;
    let pipeline = FramePipeline::new(
        Arc::new(RegionIndexRegistry::new().unwrap()),
        PipelineConfig {
            regions: vec![style],
        },
    );
    let frame = RgbImage::from_pixel(80, 80, Rgb([60, 70, 80]));
    let detector = StaticDetector::new(vec![face_with(LIPS_EDGES, &hexagon(0.5, 0.5))]);
    assert_eq!(pipeline.process_frame(&frame, &detector).unwrap(), frame);
}

#[test]
fn one_pipeline_serves_many_threads() {
    let pipeline = FramePipeline::with_defaults().unwrap();
    let frame = textured(70, 70);
    let detector = StaticDetector::new(vec![face_with(LIPS_EDGES, &hexagon(0.5, 0.5))]);
    let expected = pipeline.process_frame(&frame, &detector).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| pipeline.process_frame(&frame, &detector).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
