use super::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn arrows_and_wasd_steer() {
    assert_eq!(
        map_key(&key(KeyCode::Up)),
        Some(InputEvent::Turn(Direction::Up))
    );
    assert_eq!(
        map_key(&key(KeyCode::Char('a'))),
        Some(InputEvent::Turn(Direction::Left))
    );
    assert_eq!(
        map_key(&key(KeyCode::Char('S'))),
        Some(InputEvent::Turn(Direction::Down))
    );
    assert_eq!(
        map_key(&key(KeyCode::Right)),
        Some(InputEvent::Turn(Direction::Right))
    );
    assert_eq!(map_key(&key(KeyCode::Char('x'))), None);
}

#[test]
fn quit_keys() {
    assert_eq!(map_key(&key(KeyCode::Esc)), Some(InputEvent::Quit));
    assert_eq!(map_key(&key(KeyCode::Char('q'))), Some(InputEvent::Quit));
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(map_key(&ctrl_c), Some(InputEvent::Quit));
}

#[test]
fn key_release_is_ignored() {
    let mut k = key(KeyCode::Up);
    k.kind = KeyEventKind::Release;
    assert_eq!(map_key(&k), None);
}

#[test]
fn script_runs_out_to_silence() {
    let mut input = ScriptedInput::turns([Some(Direction::Up), None]);
    assert_eq!(
        input.poll().unwrap(),
        vec![InputEvent::Turn(Direction::Up)]
    );
    assert!(input.poll().unwrap().is_empty());
    assert!(input.poll().unwrap().is_empty());
}

#[test]
fn cycled_script_repeats() {
    let mut input =
        ScriptedInput::turns([Some(Direction::Down), Some(Direction::Left)]).cycled();
    let seen: Vec<_> = (0..5).map(|_| input.poll().unwrap()).collect();
    assert_eq!(seen[0], seen[2]);
    assert_eq!(seen[1], seen[3]);
    assert_eq!(seen[4], vec![InputEvent::Turn(Direction::Down)]);
}
