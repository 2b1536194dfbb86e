mod common;

use common::{Kind, MemoryHost};
use lightshow_wasm::draw::{Baseline, DrawCommand, Point};
use lightshow_wasm::layout::{self, LayoutMode};
use lightshow_wasm::panel::{PanelSpec, PanelValues};
use lightshow_wasm::param::RangeParam;
use lightshow_wasm::{App, Config, ControlPanel, PatternMode, Rgba, Viewport};

fn launch(width: f64, height: f64) -> App<MemoryHost> {
    App::new(MemoryHost::default(), width, height, Config::default()).expect("panel builds")
}

fn assert_one_of_each(host: &MemoryHost) {
    assert_eq!(host.count(Kind::Color), 3);
    assert_eq!(host.count(Kind::Slider), 2);
    assert_eq!(host.count(Kind::Select), 1);
    assert_eq!(host.alive.len(), 6);
}

#[test]
fn default_launch_on_desktop() {
    let mut app = launch(1024.0, 768.0);
    let host = app.host();
    assert_one_of_each(host);
    assert_eq!(app.panel().mode(), LayoutMode::Desktop);

    let select = &host.of_kind(Kind::Select)[0];
    assert_eq!(select.value, "Pulse Rings");
    assert_eq!(
        select.options,
        vec!["Pulse Rings", "Swirl Orbs", "Outward Waves"]
    );
    let colors: Vec<&str> = host
        .of_kind(Kind::Color)
        .iter()
        .map(|w| w.value.as_str())
        .collect();
    assert_eq!(colors, vec!["#ff00ff", "#00ffff", "#ffff00"]);
    assert!(host.of_kind(Kind::Color).iter().all(|w| w.rect.width == 40.0));
    let sliders: Vec<&str> = host
        .of_kind(Kind::Slider)
        .iter()
        .map(|w| w.value.as_str())
        .collect();
    assert_eq!(sliders, vec!["120", "2"]);

    let cmds = app.frame();
    assert_eq!(app.clock().frame(), 1);
    assert!(matches!(cmds[0], DrawCommand::Fade { .. }));
    let rings = cmds
        .iter()
        .filter(|c| matches!(c, DrawCommand::StrokeCircle { .. }))
        .count();
    assert_eq!(rings, 3);
    let Some(DrawCommand::Text { at, baseline, .. }) = cmds.last() else {
        panic!("hint should be drawn last");
    };
    assert_eq!(*at, Point::new(20.0, 708.0));
    assert_eq!(*baseline, Baseline::Alphabetic);
}

#[test]
fn resizing_to_phone_moves_hint_and_enlarges_swatches() {
    let mut app = launch(1024.0, 768.0);
    assert!(matches!(app.resize(375.0, 667.0), Ok(true)));
    assert_one_of_each(app.host());
    assert!(app.viewport().is_mobile);
    assert!(app
        .host()
        .of_kind(Kind::Color)
        .iter()
        .all(|w| w.rect.width == 60.0 && w.rect.height == 60.0));

    let cmds = app.frame();
    let hint = cmds
        .iter()
        .position(|c| matches!(c, DrawCommand::Text { .. }))
        .expect("hint drawn");
    let DrawCommand::Text { at, baseline, .. } = &cmds[hint] else {
        unreachable!();
    };
    assert_eq!(*at, Point::new(20.0, 20.0));
    assert_eq!(*baseline, Baseline::Top);
    assert_eq!(cmds[hint + 1], DrawCommand::ResetBaseline);
}

#[test]
fn crossing_the_breakpoint_rebuilds_exactly_once() {
    let mut app = launch(1024.0, 768.0);
    assert_eq!(app.host().created, 6);

    assert!(matches!(app.resize(1280.0, 800.0), Ok(false)));
    assert_eq!(app.host().created, 6);

    assert!(matches!(app.resize(700.0, 800.0), Ok(true)));
    assert_eq!(app.host().created, 12);
    assert_eq!(app.host().removed, 6);
    assert_one_of_each(app.host());

    assert!(matches!(app.resize(1000.0, 800.0), Ok(true)));
    assert_eq!(app.host().created, 18);
    assert_eq!(app.host().removed, 12);
    assert_one_of_each(app.host());
    assert_eq!(app.panel().mode(), LayoutMode::Desktop);
}

#[test]
fn mobile_resizes_track_the_width() {
    let mut app = launch(400.0, 800.0);
    let before = app.host().of_kind(Kind::Slider)[0].rect.width;
    assert!(matches!(app.resize(600.0, 800.0), Ok(true)));
    let after = app.host().of_kind(Kind::Slider)[0].rect.width;
    assert_eq!(before, 150.0);
    assert_eq!(after, 250.0);
    assert_one_of_each(app.host());
}

#[test]
fn user_choices_survive_relayout() {
    let mut app = launch(1024.0, 768.0);
    {
        let (host, _) = app.parts_mut();
        host.set_nth(Kind::Slider, 0, "200");
        host.set_nth(Kind::Slider, 1, "3.5");
        host.set_nth(Kind::Select, 0, "Swirl Orbs");
        host.set_nth(Kind::Color, 2, "#123456");
    }
    assert!(matches!(app.resize(375.0, 667.0), Ok(true)));

    let values = app.panel().values(app.host());
    assert_eq!(values.size, 200.0);
    assert_eq!(values.speed, 3.5);
    assert_eq!(values.pattern, Some(PatternMode::SwirlOrbs));
    assert_eq!(values.colors[2], Rgba::rgb(0x12, 0x34, 0x56));
}

#[test]
fn color_reads_back_what_was_set() {
    let mut app = launch(1024.0, 768.0);
    let color = Rgba::rgb(18, 200, 7);
    {
        let (host, panel) = app.parts_mut();
        assert!(panel.set_color(host, 1, color));
        assert!(!panel.set_color(host, 3, Rgba::WHITE));
    }
    assert_eq!(app.panel().colors(app.host())[1], color);
    assert_eq!(app.panel().colors(app.host())[0], Rgba::rgb(255, 0, 255));
}

#[test]
fn unknown_pattern_renders_only_background_and_hint() {
    let mut app = launch(1024.0, 768.0);
    app.parts_mut().0.set_nth(Kind::Select, 0, "Mystery");
    let cmds = app.frame();
    assert_eq!(cmds.len(), 2);
    assert!(matches!(cmds[0], DrawCommand::Fade { .. }));
    assert!(matches!(cmds[1], DrawCommand::Text { .. }));
}

#[test]
fn unreadable_slider_falls_back_to_its_initial_value() {
    let mut app = launch(1024.0, 768.0);
    app.parts_mut().0.set_nth(Kind::Slider, 1, "");
    assert_eq!(app.panel().speed(app.host()), 2.0);
    app.parts_mut().0.set_nth(Kind::Slider, 0, "1000");
    assert_eq!(app.panel().size(app.host()), 300.0);
}

#[test]
fn frames_advance_the_animation() {
    let mut app = launch(1024.0, 768.0);
    app.parts_mut().0.set_nth(Kind::Select, 0, "Swirl Orbs");
    let first = app.frame();
    let second = app.frame();
    assert_eq!(app.clock().frame(), 2);
    assert_ne!(first, second);
}

#[test]
fn configured_breakpoint_and_defaults_apply() {
    let config = Config::from_json(r##"{"breakpoint": 1100, "pattern": "Outward Waves"}"##)
        .expect("valid config");
    let app = App::new(MemoryHost::default(), 1024.0, 768.0, config).expect("panel builds");
    assert_eq!(app.config().breakpoint, 1100.0);
    assert!(app.viewport().is_mobile);
    assert_eq!(app.panel().mode(), LayoutMode::Mobile);
    assert_eq!(
        app.panel().pattern(app.host()),
        Some(PatternMode::OutwardWaves)
    );
}

#[test]
fn failed_rebuild_leaves_no_orphans_and_recovers() {
    let mut app = launch(1024.0, 768.0);
    app.parts_mut().0.set_nth(Kind::Slider, 0, "200");
    app.parts_mut().0.refuse_sliders = true;

    assert_eq!(app.resize(375.0, 667.0), Err("slider refused"));
    assert!(app.host().alive.is_empty(), "{:?}", app.host().alive);
    assert!(app.panel().is_stale());
    let cmds = app.frame();
    assert!(matches!(cmds.last(), Some(DrawCommand::Text { .. })));

    // Still refused: the retry must not leak either.
    assert_eq!(app.resize(1024.0, 768.0), Err("slider refused"));
    assert!(app.host().alive.is_empty());

    app.parts_mut().0.refuse_sliders = false;
    assert_eq!(app.resize(1024.0, 768.0), Ok(true));
    assert!(!app.panel().is_stale());
    assert_eq!(app.panel().mode(), LayoutMode::Desktop);
    assert_one_of_each(app.host());
    assert_eq!(app.panel().size(app.host()), 200.0);
    assert_eq!(app.panel().pattern(app.host()), Some(PatternMode::PulseRings));
    assert_eq!(app.host().created, app.host().removed + 6);
}

#[test]
fn failed_build_removes_partial_widgets() {
    let mut host = MemoryHost {
        refuse_sliders: true,
        ..MemoryHost::default()
    };
    let config = Config::default();
    let spec = PanelSpec {
        geometry: layout::compute(&Viewport::new(1024.0, 768.0)),
        values: PanelValues::defaults(&config),
    };
    let built = ControlPanel::build(&mut host, &spec, &config);
    assert_eq!(built.err(), Some("slider refused"));
    assert_eq!(host.created, 3);
    assert_eq!(host.removed, 3);
    assert!(host.alive.is_empty());
}

#[test]
fn fallback_reading_stays_inside_the_configured_range() {
    // Built directly, so it skips the checks in `Config::from_json`.
    let config = Config {
        speed: RangeParam {
            default: 50.0,
            ..RangeParam::SPEED
        },
        ..Config::default()
    };
    let mut app = App::new(MemoryHost::default(), 1024.0, 768.0, config).expect("panel builds");
    app.parts_mut().0.set_nth(Kind::Slider, 1, "");
    assert_eq!(app.panel().speed(app.host()), 5.0);
}

#[test]
fn rejected_ranges_never_reach_the_panel() {
    for json in [
        r#"{"size": {"min": 300, "max": 30, "step": 1, "default": 120}}"#,
        r#"{"speed": {"min": 0.5, "max": 5, "step": 0.1, "default": 50}}"#,
    ] {
        let config = Config::from_json(json).unwrap_or_default();
        assert_eq!(config, Config::default());
        let mut app =
            App::new(MemoryHost::default(), 1024.0, 768.0, config).expect("panel builds");
        app.parts_mut().0.set_nth(Kind::Slider, 1, "");
        assert_eq!(app.panel().speed(app.host()), 2.0);
        assert_eq!(app.frame().len(), 5);
    }
}
