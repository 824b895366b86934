use super::*;

use crate::{compose::disposal::DisposalMode, gif_io::decode::read_gif};

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("pipeline_unit");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

/// Red background, then a green pixel drawn on top of it, then a blue pixel after a clear.
fn write_fixture(path: &Path) {
    let file = std::fs::File::create(path).unwrap();
    let mut enc = gif::Encoder::new(file, 2, 2, &[]).unwrap();

    let mut red = [255, 0, 0, 255].repeat(4);
    let mut f0 = gif::Frame::from_rgba(2, 2, &mut red);
    f0.delay = 10;
    f0.dispose = gif::DisposalMethod::Keep;
    enc.write_frame(&f0).unwrap();

    let mut green = vec![0, 255, 0, 255];
    let mut f1 = gif::Frame::from_rgba(1, 1, &mut green);
    f1.left = 1;
    f1.delay = 20;
    f1.dispose = gif::DisposalMethod::Background;
    enc.write_frame(&f1).unwrap();

    let mut blue = vec![0, 0, 255, 255];
    let mut f2 = gif::Frame::from_rgba(1, 1, &mut blue);
    f2.top = 1;
    f2.delay = 30;
    f2.dispose = gif::DisposalMethod::Keep;
    enc.write_frame(&f2).unwrap();
}

#[test]
fn composite_file_rebuilds_full_pictures() {
    let src = scratch("composite.gif");
    write_fixture(&src);

    let (screen, frames) = composite_file(&src).unwrap();
    assert_eq!((screen.width, screen.height), (2, 2));
    let durations: Vec<u32> = frames.iter().map(|f| f.duration_ms).collect();
    assert_eq!(durations, vec![100, 200, 300]);

    assert_eq!(frames[1].image.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(frames[1].image.get_pixel(1, 0).0, [0, 255, 0, 255]);
    // The second frame cleared the canvas before the third was drawn.
    assert_eq!(frames[2].image.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(frames[2].image.get_pixel(0, 1).0, [0, 0, 255, 255]);
}

#[test]
fn cut_keeps_overlapping_frames_with_clipped_durations() {
    let src = scratch("cut_src.gif");
    let dst = scratch("cut_dst.gif");
    write_fixture(&src);

    let report = cut_gif(&src, &dst, TimeWindow::new(0.05, 0.2).unwrap()).unwrap();
    assert_eq!(report.frames_in, 3);
    assert_eq!(report.duration_in_ms, 600);
    assert_eq!(report.frames_out, 2);
    assert_eq!(report.duration_out_ms, 150);

    let (_, frames) = read_gif(&dst).unwrap();
    let durations: Vec<u32> = frames.iter().map(|f| f.duration_ms).collect();
    assert_eq!(durations, vec![50, 100]);
    assert!(frames.iter().all(|f| f.disposal == DisposalMode::Reset));
}

#[test]
fn cut_outside_the_animation_is_an_error() {
    let src = scratch("cut_empty_src.gif");
    write_fixture(&src);

    let err = cut_gif(&src, &scratch("cut_empty_dst.gif"), TimeWindow::new(5.0, 6.0).unwrap())
        .unwrap_err();
    assert!(matches!(err, SnakeGifError::EmptyWindow { .. }));
}

#[test]
fn speed_doubling_halves_durations_and_names_the_output() {
    let src = scratch("fast.gif");
    write_fixture(&src);

    let (dst, report) = speed_gif(&src, SpeedRatio::new(2.0).unwrap()).unwrap();
    assert_eq!(dst, scratch("fast_2.gif"));
    assert_eq!(report.duration_out_ms, 300);

    let (_, frames) = read_gif(&dst).unwrap();
    let durations: Vec<u32> = frames.iter().map(|f| f.duration_ms).collect();
    assert_eq!(durations, vec![50, 100, 150]);
}

#[test]
fn extract_frame_returns_the_composited_picture() {
    let src = scratch("extract.gif");
    write_fixture(&src);

    let img = extract_frame(&src, FrameIndex(1)).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 255, 0, 255]);

    let err = extract_frame(&src, FrameIndex(3)).unwrap_err();
    assert!(matches!(err, SnakeGifError::Validation(_)));
}

#[test]
fn missing_input_is_reported_as_not_found() {
    let err = composite_file(&scratch("does_not_exist.gif")).unwrap_err();
    assert!(matches!(err, SnakeGifError::NotFound(_)));
}

#[test]
fn png_export_writes_a_readable_file() {
    let out = scratch("nested").join("frame.png");
    let _ = std::fs::remove_file(&out);
    let img = RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 255]));
    save_png(&img, &out).unwrap();
    let back = image::open(&out).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (3, 2));
    assert_eq!(back.get_pixel(2, 1).0, [1, 2, 3, 255]);
}
