// Host-side tests for timeline scheduling and playback.
// The main crate is wasm-only, so these drive the platform-free core directly.

use site_core::{At, Ease, Playback, Player, Prop, Stage, TargetId, Timeline, Tween};

const A: TargetId = TargetId(0);
const B: TargetId = TargetId(1);
const C: TargetId = TargetId(2);

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Step until finished; returns elapsed time at completion.
fn run(pb: &mut Playback<&'static str>, stage: &mut Stage, dt: f64) -> (f64, Vec<&'static str>) {
    let mut cues = Vec::new();
    for _ in 0..10_000 {
        let step = pb.advance(dt, stage);
        cues.extend(step.cues);
        if step.finished {
            return (pb.elapsed(), cues);
        }
    }
    panic!("timeline never finished");
}

#[test]
fn end_places_instructions_back_to_back() {
    let tl: Timeline<()> = Timeline::new()
        .to(Tween::one(A, 1.0, Ease::Linear).prop(Prop::X, 10.0), At::End)
        .to(Tween::one(B, 0.5, Ease::Linear).prop(Prop::X, 10.0), At::End);
    assert_eq!(tl.start_times(), vec![0.0, 1.0]);
    assert!(approx(tl.duration(), 1.5));
}

#[test]
fn with_previous_and_absolute_offsets() {
    let tl: Timeline<()> = Timeline::new()
        .to(Tween::one(A, 1.0, Ease::Linear).prop(Prop::X, 1.0), At::Time(0.5))
        .to(Tween::one(B, 0.2, Ease::Linear).prop(Prop::X, 1.0), At::WithPrevious)
        .to(Tween::one(C, 0.2, Ease::Linear).prop(Prop::X, 1.0).delay(0.3), At::WithPrevious);
    let starts = tl.start_times();
    assert_eq!(&starts[..2], &[0.5, 0.5]);
    assert!(approx(starts[2], 0.8));
}

#[test]
fn negative_offset_overlaps_previous_start() {
    let tl: Timeline<()> = Timeline::new()
        .to(Tween::one(A, 1.0, Ease::Linear).prop(Prop::X, 1.0), At::Time(1.0))
        .to(Tween::one(B, 1.0, Ease::Linear).prop(Prop::X, 1.0), At::FromPreviousStart(-0.15));
    let starts = tl.start_times();
    assert!(approx(starts[1], 0.85));
}

#[test]
fn negative_offset_clamps_at_zero() {
    let tl: Timeline<()> = Timeline::new()
        .to(Tween::one(A, 1.0, Ease::Linear).prop(Prop::X, 1.0), At::Time(0.0))
        .to(Tween::one(B, 1.0, Ease::Linear).prop(Prop::X, 1.0), At::FromPreviousStart(-0.5));
    assert_eq!(tl.start_times(), vec![0.0, 0.0]);
}

#[test]
fn negative_stagger_starts_with_the_last_target() {
    let tl: Timeline<()> = Timeline::new().to(
        Tween::new(vec![A, B, C], 1.0, Ease::Linear)
            .prop(Prop::YPercent, 0.0)
            .stagger(-0.1),
        At::End,
    );
    let starts = tl.start_times();
    assert!(approx(starts[0], 0.2));
    assert!(approx(starts[1], 0.1));
    assert!(approx(starts[2], 0.0));
    assert!(approx(tl.duration(), 1.2));
}

#[test]
fn positive_stagger_runs_front_to_back() {
    let tl: Timeline<()> = Timeline::new().to(
        Tween::new(vec![A, B], 0.5, Ease::Linear)
            .prop(Prop::Opacity, 0.0)
            .stagger(0.25),
        At::End,
    );
    assert_eq!(tl.start_times(), vec![0.0, 0.25]);
}

#[test]
fn end_values_are_written_exactly() {
    let tl = Timeline::new()
        .to(Tween::one(A, 0.7, Ease::Hop).prop(Prop::YPercent, -110.0), At::End)
        .to(
            Tween::one(B, 0.3, Ease::BackOut(1.7))
                .prop(Prop::Scale, 0.8)
                .prop(Prop::Opacity, 0.0),
            At::WithPrevious,
        );
    let mut stage = Stage::new();
    let mut pb: Playback<&'static str> = Playback::new(tl);
    run(&mut pb, &mut stage, 1.0 / 60.0);
    assert_eq!(stage.get(A, Prop::YPercent), -110.0);
    assert_eq!(stage.get(B, Prop::Scale), 0.8);
    assert_eq!(stage.get(B, Prop::Opacity), 0.0);
}

#[test]
fn completion_never_precedes_the_last_tween() {
    let tl = Timeline::new()
        .to(Tween::one(A, 1.0, Ease::Linear).prop(Prop::X, 100.0), At::End)
        .to(
            Tween::new(vec![B, C], 0.5, Ease::Linear)
                .prop(Prop::X, 100.0)
                .stagger(-0.075),
            At::FromPreviousStart(0.8),
        );
    let total = tl.duration();
    let mut stage = Stage::new();
    let mut pb: Playback<&'static str> = Playback::new(tl);
    let (elapsed, _) = run(&mut pb, &mut stage, 0.05);
    assert!(elapsed + 1e-9 >= total);
    for t in [A, B, C] {
        assert_eq!(stage.get(t, Prop::X), 100.0);
    }
}

#[test]
fn tween_starts_from_the_current_stage_value() {
    let mut stage = Stage::new();
    stage.set(A, Prop::X, 40.0);
    let tl = Timeline::new().to(Tween::one(A, 1.0, Ease::Linear).prop(Prop::X, 0.0), At::End);
    let mut pb: Playback<&'static str> = Playback::new(tl);
    pb.advance(0.5, &mut stage);
    assert!(approx(stage.get(A, Prop::X), 20.0));
}

#[test]
fn untouched_props_read_their_rest_value() {
    let stage = Stage::new();
    assert_eq!(stage.get(A, Prop::Opacity), 1.0);
    assert_eq!(stage.get(A, Prop::Scale), 1.0);
    assert_eq!(stage.get(A, Prop::ClipBottom), 100.0);
    assert_eq!(stage.get(A, Prop::ClipTop), 0.0);
    assert_eq!(stage.try_get(A, Prop::X), None);
}

#[test]
fn set_jumps_and_cues_fire_in_time_order() {
    let tl = Timeline::new()
        .to(Tween::one(A, 0.4, Ease::Power2Out).prop(Prop::Y, -50.0), At::End)
        .cue("late", At::Time(0.9))
        .cue("swap", At::Time(0.4))
        .set(vec![A], &[(Prop::Y, 50.0)], At::WithPrevious)
        .to(Tween::one(A, 0.3, Ease::Power2Out).prop(Prop::Y, 0.0), At::End);
    let mut stage = Stage::new();
    let mut pb: Playback<&'static str> = Playback::new(tl);

    let step = pb.advance(0.41, &mut stage);
    assert_eq!(step.cues, vec!["swap"]);
    assert!(!step.finished);

    let (_, rest) = run(&mut pb, &mut stage, 0.1);
    assert_eq!(rest, vec!["late"]);
    assert_eq!(stage.get(A, Prop::Y), 0.0);
}

#[test]
fn one_large_step_finishes_everything() {
    let tl = Timeline::new()
        .to(Tween::one(A, 2.0, Ease::Linear).prop(Prop::Opacity, 0.0), At::End)
        .cue("done", At::End);
    let mut stage = Stage::new();
    let mut pb: Playback<&'static str> = Playback::new(tl);
    let step = pb.advance(10.0, &mut stage);
    assert!(step.finished);
    assert_eq!(step.cues, vec!["done"]);
    assert_eq!(stage.get(A, Prop::Opacity), 0.0);

    let again = pb.advance(1.0, &mut stage);
    assert!(again.finished);
    assert!(again.cues.is_empty());
}

#[test]
fn dirty_targets_drain_in_order() {
    let mut stage = Stage::new();
    stage.set_many(&[C, A], &[(Prop::X, 1.0)]);
    stage.set(B, Prop::Opacity, 0.5);
    assert_eq!(stage.take_dirty(), vec![A, B, C]);
    assert!(stage.take_dirty().is_empty());
}

fn show_cta() -> Timeline<&'static str> {
    Timeline::new().to(
        Tween::one(A, 0.25, Ease::BackOut(1.7))
            .prop(Prop::Opacity, 1.0)
            .prop(Prop::Scale, 1.0),
        At::End,
    )
}

fn hide_cta() -> Timeline<&'static str> {
    Timeline::new().to(
        Tween::one(A, 0.05, Ease::Power2In)
            .prop(Prop::Opacity, 0.0)
            .prop(Prop::Scale, 0.8),
        At::End,
    )
}

#[test]
fn latest_timeline_wins_on_shared_props() {
    let mut stage = Stage::new();
    stage.set_many(&[A], &[(Prop::Opacity, 0.0), (Prop::Scale, 0.8)]);
    let mut player = Player::new();
    player.play(show_cta(), Some("shown"));
    for _ in 0..3 {
        player.advance(1.0 / 60.0, &mut stage);
    }
    player.play(hide_cta(), Some("hidden"));
    let mut fired = Vec::new();
    for _ in 0..60 {
        fired.extend(player.advance(1.0 / 60.0, &mut stage));
    }
    assert_eq!(stage.get(A, Prop::Opacity), 0.0);
    assert_eq!(stage.get(A, Prop::Scale), 0.8);
    // the superseded timeline still completes, once its own length has run
    assert_eq!(fired, vec!["hidden", "shown"]);
    assert!(player.is_empty());
}

#[test]
fn released_props_leave_the_others_running() {
    let mut stage = Stage::new();
    let mut player: Player<()> = Player::new();
    player.play(
        Timeline::new().to(
            Tween::one(A, 1.0, Ease::Linear)
                .prop(Prop::X, 100.0)
                .prop(Prop::Opacity, 0.0),
            At::End,
        ),
        None,
    );
    player.advance(0.5, &mut stage);
    player.play(
        Timeline::new().to(Tween::one(A, 0.1, Ease::Linear).prop(Prop::Opacity, 1.0), At::End),
        None,
    );
    for _ in 0..20 {
        player.advance(0.1, &mut stage);
    }
    assert_eq!(stage.get(A, Prop::X), 100.0);
    assert_eq!(stage.get(A, Prop::Opacity), 1.0);
}

#[test]
fn player_fires_in_start_order_after_removals() {
    let mut stage = Stage::new();
    let mut player = Player::new();
    player.play(
        Timeline::new().to(Tween::one(A, 0.1, Ease::Linear).prop(Prop::X, 1.0), At::End),
        Some("a-done"),
    );
    player.play(Timeline::new().cue("b", At::Time(0.5)), None);
    player.play(Timeline::new().cue("c", At::Time(0.5)), None);

    assert_eq!(player.advance(0.2, &mut stage), vec!["a-done"]);
    assert_eq!(player.len(), 2);
    assert_eq!(player.advance(0.4, &mut stage), vec!["b", "c"]);
    assert!(player.is_empty());
}
