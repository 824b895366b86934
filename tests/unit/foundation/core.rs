use super::*;

#[test]
fn canvas_rejects_zero_and_oversized() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    let c = Canvas::new(1800, 360).unwrap();
    assert_eq!((c.width, c.height), (1800, 360));
}

#[test]
fn fps_tick_period_and_delay() {
    let fps = Fps::new(10).unwrap();
    assert_eq!(fps.tick_period(), Duration::from_millis(100));
    assert_eq!(fps.frame_delay_ms(), 100);

    let fps = Fps::new(30).unwrap();
    assert_eq!(fps.frame_delay_ms(), 33);
    assert_eq!(fps.tick_period(), Duration::from_nanos(33_333_333));
}

#[test]
fn fps_rejects_zero() {
    assert!(Fps::new(0).is_err());
}

#[test]
fn time_window_validation() {
    assert!(TimeWindow::new(0.0, 19.67).is_ok());
    assert!(TimeWindow::new(-1.0, 2.0).is_err());
    assert!(TimeWindow::new(3.0, 3.0).is_err());
    assert!(TimeWindow::new(4.0, 3.0).is_err());
    assert!(TimeWindow::new(0.0, f64::NAN).is_err());
    assert!(TimeWindow::new(0.0, f64::INFINITY).is_err());
}

#[test]
fn time_window_in_millis() {
    let w = TimeWindow::new(0.25, 1.5).unwrap();
    assert_eq!(w.start_ms(), 250.0);
    assert_eq!(w.end_ms(), 1500.0);
}
