use super::*;

use std::io::Cursor;

fn encode_two_frames() -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut enc = gif::Encoder::new(&mut out, 3, 2, &[]).unwrap();

        let mut full = vec![
            10, 20, 30, 255, 10, 20, 30, 255, 10, 20, 30, 255, //
            10, 20, 30, 255, 10, 20, 30, 255, 10, 20, 30, 255,
        ];
        let mut f0 = gif::Frame::from_rgba(3, 2, &mut full);
        f0.delay = 7;
        f0.dispose = gif::DisposalMethod::Keep;
        enc.write_frame(&f0).unwrap();

        let mut patch = vec![200, 0, 0, 255];
        let mut f1 = gif::Frame::from_rgba(1, 1, &mut patch);
        f1.left = 2;
        f1.top = 1;
        f1.delay = 12;
        f1.dispose = gif::DisposalMethod::Background;
        enc.write_frame(&f1).unwrap();
    }
    out
}

#[test]
fn centis_scale_to_millis() {
    assert_eq!(centis_to_ms(0), 0);
    assert_eq!(centis_to_ms(10), 100);
}

#[test]
fn decodes_geometry_timing_and_disposal() {
    let frames = GifFrames::new(Cursor::new(encode_two_frames())).unwrap();
    assert_eq!(frames.screen(), Canvas::new(3, 2).unwrap());

    let frames: Vec<RawFrame> = frames.collect::<SnakeGifResult<_>>().unwrap();
    assert_eq!(frames.len(), 2);

    assert_eq!((frames[0].width, frames[0].height), (3, 2));
    assert_eq!(frames[0].rgba.len(), 3 * 2 * 4);
    assert_eq!(frames[0].duration_ms, 70);
    assert_eq!(frames[0].disposal, DisposalMode::Accumulate);
    assert_eq!(&frames[0].rgba[0..4], &[10, 20, 30, 255]);

    assert_eq!(
        (frames[1].left, frames[1].top, frames[1].width, frames[1].height),
        (2, 1, 1, 1)
    );
    assert_eq!(frames[1].duration_ms, 120);
    assert_eq!(frames[1].disposal, DisposalMode::Reset);
    assert_eq!(frames[1].rgba, vec![200, 0, 0, 255]);
}

#[test]
fn garbage_is_a_decode_error() {
    let err = GifFrames::new(Cursor::new(b"not a gif at all".to_vec()))
        .err()
        .unwrap();
    assert!(matches!(err, SnakeGifError::Decode(_)));
}

#[test]
fn missing_file_is_not_found() {
    let err = read_gif(Path::new("target/definitely/missing.gif")).unwrap_err();
    assert!(matches!(err, SnakeGifError::NotFound(_)));
}
