use super::*;

fn cfg(in_path: &str, out_path: &str) -> TrimConfig {
    TrimConfig {
        in_path: PathBuf::from(in_path),
        out_path: PathBuf::from(out_path),
        window: TimeWindow::new(0.0, 19.67).unwrap(),
        overwrite: true,
    }
}

#[test]
fn args_seek_after_input_and_keep_looping() {
    let args: Vec<String> = cfg("snake.gif", "snake_cut.gif")
        .args()
        .into_iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    assert_eq!(args.first().map(String::as_str), Some("-y"));
    let pos = |flag: &str| args.iter().position(|a| a == flag).unwrap();
    assert!(pos("-i") < pos("-ss"));
    assert_eq!(args[pos("-ss") + 1], "0.000");
    assert_eq!(args[pos("-to") + 1], "19.670");
    assert_eq!(args[pos("-loop") + 1], "0");
    assert_eq!(args.last().map(String::as_str), Some("snake_cut.gif"));
}

#[test]
fn no_overwrite_uses_dash_n() {
    let mut c = cfg("snake.gif", "snake_cut.gif");
    c.overwrite = false;
    assert_eq!(c.args()[0], OsString::from("-n"));
}

#[test]
fn missing_input_is_not_found() {
    let c = cfg("target/definitely/missing.gif", "target/out.gif");
    assert!(matches!(c.validate(), Err(SnakeGifError::NotFound(_))));
}

#[test]
fn output_must_differ_from_input() {
    let dir = PathBuf::from("target").join("ffmpeg_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let src = dir.join("in.gif");
    std::fs::write(&src, b"GIF89a").unwrap();

    let c = TrimConfig {
        in_path: src.clone(),
        out_path: src,
        window: TimeWindow::new(0.0, 1.0).unwrap(),
        overwrite: true,
    };
    assert!(matches!(c.validate(), Err(SnakeGifError::Validation(_))));
}
