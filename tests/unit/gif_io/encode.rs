use super::*;

fn solid(w: u32, h: u32, px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, image::Rgba(px))
}

#[test]
fn centis_conversion_truncates() {
    assert_eq!(ms_to_centis(100), 10);
    assert_eq!(ms_to_centis(15), 1);
    assert_eq!(ms_to_centis(9), 0);
    assert_eq!(ms_to_centis(u32::MAX), u16::MAX);
}

#[test]
fn config_validation_catches_bad_values() {
    let canvas = Canvas::new(4, 4).unwrap();
    let mut cfg = default_gif_config("target/unused.gif", canvas);
    assert!(cfg.validate().is_ok());

    cfg.quantize_speed = 0;
    assert!(cfg.validate().is_err());

    cfg.quantize_speed = 10;
    cfg.canvas = Canvas {
        width: 0,
        height: 4,
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn sink_rejects_mismatched_frame_size() {
    let canvas = Canvas::new(4, 4).unwrap();
    let mut sink = GifSink::new(Vec::new(), default_gif_config("mem.gif", canvas)).unwrap();
    let err = sink.push(&solid(3, 4, [255, 0, 0, 255]), 100).unwrap_err();
    assert!(err.to_string().contains("frame size mismatch"));
    assert_eq!(sink.frames_written(), 0);
}

#[test]
fn finish_without_frames_is_an_error() {
    let canvas = Canvas::new(4, 4).unwrap();
    let sink = GifSink::new(Vec::new(), default_gif_config("mem.gif", canvas)).unwrap();
    assert!(matches!(sink.finish(), Err(SnakeGifError::Encode(_))));
}

#[test]
fn sink_writes_delay_disposal_and_transparency() {
    let canvas = Canvas::new(4, 2).unwrap();
    let mut sink = GifSink::new(Vec::new(), default_gif_config("mem.gif", canvas)).unwrap();

    let mut first = solid(4, 2, [0, 0, 0, 0]);
    first.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
    sink.push(&first, 100).unwrap();
    sink.push(&solid(4, 2, [0, 0, 255, 255]), 35).unwrap();
    let bytes = sink.finish().unwrap();

    let frames = crate::gif_io::decode::GifFrames::new(std::io::Cursor::new(bytes)).unwrap();
    assert_eq!(frames.screen(), canvas);
    let frames: Vec<_> = frames.collect::<SnakeGifResult<_>>().unwrap();
    assert_eq!(frames.len(), 2);

    assert_eq!(frames[0].duration_ms, 100);
    assert_eq!(frames[1].duration_ms, 30);
    assert!(frames.iter().all(|f| f.disposal == DisposalMode::Reset));

    let px0 = &frames[0].rgba[0..4];
    assert_eq!(px0[3], 255);
    assert!(px0[0] > 200);
    let px1 = &frames[0].rgba[4..8];
    assert_eq!(px1[3], 0);
}
