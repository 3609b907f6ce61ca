use life_matrix_embassy::prelude::*;
use life_matrix_embassy::random::small_rng;

#[test]
fn life_with_custom_rule_runs_on_full_size_panel() {
    let engine = AutomatonEngine::new(Rule::HIGHLIFE);
    let mut life = app::life::Life::with_engine(small_rng(21), LifeConfig::DEFAULT, engine).unwrap();
    let mut fb = FrameBuffer::<MAX_WIDTH, MAX_HEIGHT>::new(color::WHITE);

    for _ in 0..10 {
        life.tick(&mut fb);
    }
    assert_eq!(fb.frames(), 10);
    assert_eq!(life.generation(), 10);
    assert_eq!(life.grid().dimensions(), (MAX_WIDTH, MAX_HEIGHT));
}

#[test]
fn both_scenes_share_one_surface() {
    let mut fb = FrameBuffer::<32, 32>::new(color::WHITE);
    let mut life = app::life::new(
        small_rng(1),
        LifeConfig {
            width: 32,
            height: 32,
            ..LifeConfig::DEFAULT
        },
    )
    .unwrap();
    let mut rain = app::rain::new(
        small_rng(2),
        RainConfig {
            width: 32,
            height: 32,
            ..RainConfig::DEFAULT
        },
    );

    life.tick(&mut fb);
    rain.tick(&mut fb);
    // rain clears before drawing, so no white life cells survive
    assert!(fb.leds().all(|c| c != color::WHITE));
    assert_eq!(fb.frames(), 2);
}

#[test]
fn errors_render_readably() {
    let err = Grid::new(0, 300).unwrap_err();
    assert_eq!(err.to_string(), "invalid grid dimensions 0x300");
    let err = Error::DimensionMismatch {
        expected: (4, 4),
        found: (4, 5),
    };
    assert_eq!(
        err.to_string(),
        "grid dimension mismatch: expected 4x4, found 4x5"
    );
}
