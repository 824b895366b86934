use super::*;

#[test]
fn gif_methods_map_to_three_modes() {
    assert_eq!(
        DisposalMode::from(gif::DisposalMethod::Any),
        DisposalMode::Replace
    );
    assert_eq!(
        DisposalMode::from(gif::DisposalMethod::Keep),
        DisposalMode::Accumulate
    );
    assert_eq!(
        DisposalMode::from(gif::DisposalMethod::Background),
        DisposalMode::Reset
    );
    assert_eq!(
        DisposalMode::from(gif::DisposalMethod::Previous),
        DisposalMode::Replace
    );
}

#[test]
fn only_accumulate_keeps_the_canvas() {
    assert!(!DisposalMode::Accumulate.clears_canvas());
    assert!(DisposalMode::Reset.clears_canvas());
    assert!(DisposalMode::Replace.clears_canvas());
}

#[test]
fn to_gif_is_inverse_for_the_written_modes() {
    for mode in [
        DisposalMode::Replace,
        DisposalMode::Accumulate,
        DisposalMode::Reset,
    ] {
        assert_eq!(DisposalMode::from(mode.to_gif()), mode);
    }
}
