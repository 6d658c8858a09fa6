// Host-side tests for the scroll driver, pinned ranges and scrub smoothing.
// The main crate is wasm-only, so these drive the platform-free core directly.

use site_core::scroll::{damp, PinPhase, PinnedRange, ScrollDriver, ScrollTicket, Scrub};
use site_core::Ease;

const DT: f64 = 1.0 / 60.0;

/// Run frames until `ticket` is reported; returns the frame count.
fn frames_until(driver: &mut ScrollDriver, ticket: ScrollTicket) -> usize {
    for n in 1..=1000 {
        if driver.frame(DT).completed.contains(&ticket) {
            return n;
        }
    }
    panic!("ticket {ticket:?} never completed");
}

#[test]
fn damp_is_frame_rate_independent() {
    let one = damp(0.0, 100.0, 6.0, 0.1);
    let mut two = damp(0.0, 100.0, 6.0, 0.05);
    two = damp(two, 100.0, 6.0, 0.05);
    assert!((one - two).abs() < 1e-9);
}

#[test]
fn wheel_moves_toward_target_and_settles() {
    let mut d = ScrollDriver::new(1000.0);
    assert!(d.on_wheel(300.0));
    let first = d.frame(DT);
    assert!(first.moved);
    assert!(first.position > 0.0 && first.position < 300.0);
    for _ in 0..600 {
        d.frame(DT);
    }
    assert_eq!(d.position(), 300.0);
    assert!(d.is_idle());
}

#[test]
fn wheel_target_is_clamped_to_the_page() {
    let mut d = ScrollDriver::new(500.0);
    d.on_wheel(-100.0);
    assert_eq!(d.target(), 0.0);
    d.on_wheel(10_000.0);
    assert_eq!(d.target(), 500.0);
    d.set_limit(200.0);
    assert_eq!(d.target(), 200.0);
}

#[test]
fn stopped_driver_ignores_wheel_and_stays_put() {
    let mut d = ScrollDriver::new(1000.0);
    d.sync_native(400.0);
    d.stop();
    assert!(!d.on_wheel(100.0));
    let f = d.frame(DT);
    assert!(!f.moved);
    assert_eq!(f.position, 400.0);
    d.start();
    assert!(d.on_wheel(100.0));
}

#[test]
fn programmatic_scroll_lands_exactly_and_reports_once() {
    let mut d = ScrollDriver::new(2000.0);
    let ticket = d.scroll_to(1234.5, 0.8, Ease::ExpoOut, false);
    let n = frames_until(&mut d, ticket);
    assert!(n >= 48, "finished after {n} frames");
    assert_eq!(d.position(), 1234.5);
    for _ in 0..10 {
        assert!(!d.frame(DT).completed.contains(&ticket));
    }
}

#[test]
fn new_scroll_supersedes_the_previous_one() {
    let mut d = ScrollDriver::new(2000.0);
    let first = d.scroll_to(1000.0, 1.5, Ease::ExpoOut, false);
    d.frame(DT);
    let second = d.scroll_to(200.0, 0.5, Ease::ExpoOut, false);
    let f = d.frame(DT);
    assert!(f.completed.contains(&first));
    assert!(!f.completed.contains(&second));
    frames_until(&mut d, second);
    assert_eq!(d.position(), 200.0);
}

#[test]
fn unforced_scroll_while_stopped_completes_without_moving() {
    let mut d = ScrollDriver::new(2000.0);
    d.stop();
    let ticket = d.scroll_to(800.0, 1.0, Ease::ExpoOut, false);
    let f = d.frame(DT);
    assert!(f.completed.contains(&ticket));
    assert_eq!(f.position, 0.0);
}

#[test]
fn forced_scroll_runs_while_stopped() {
    let mut d = ScrollDriver::new(2000.0);
    d.stop();
    let ticket = d.scroll_to(800.0, 0.8, Ease::ExpoOut, true);
    frames_until(&mut d, ticket);
    assert_eq!(d.position(), 800.0);
    assert!(d.is_stopped());
}

#[test]
fn wheel_cancels_unforced_scroll_but_not_forced() {
    let mut d = ScrollDriver::new(2000.0);
    let ticket = d.scroll_to(1500.0, 1.5, Ease::ExpoOut, false);
    d.frame(DT);
    assert!(d.on_wheel(50.0));
    assert!(d.frame(DT).completed.contains(&ticket));
    assert!(!d.is_animating());

    let forced = d.scroll_to(1500.0, 1.5, Ease::ExpoOut, true);
    d.frame(DT);
    assert!(d.on_wheel(50.0));
    assert!(d.is_animating());
    frames_until(&mut d, forced);
}

#[test]
fn stop_cancels_an_unforced_scroll() {
    let mut d = ScrollDriver::new(2000.0);
    let ticket = d.scroll_to(1500.0, 1.5, Ease::ExpoOut, false);
    d.frame(DT);
    d.stop();
    assert!(d.frame(DT).completed.contains(&ticket));
}

#[test]
fn native_scroll_is_adopted_only_when_idle() {
    let mut d = ScrollDriver::new(2000.0);
    d.sync_native(640.0);
    assert_eq!(d.position(), 640.0);

    d.on_wheel(200.0);
    d.sync_native(10.0);
    assert_eq!(d.position(), 640.0);
}

#[test]
fn pinned_range_progress_and_phase() {
    let r = PinnedRange::new(100.0, 400.0);
    assert_eq!(r.progress(0.0), 0.0);
    assert_eq!(r.progress(300.0), 0.5);
    assert_eq!(r.progress(900.0), 1.0);
    assert_eq!(r.phase(100.0), PinPhase::Before);
    assert_eq!(r.phase(101.0), PinPhase::Pinned);
    assert_eq!(r.phase(500.0), PinPhase::After);

    let empty = PinnedRange::new(100.0, 0.0);
    assert_eq!(empty.progress(99.0), 0.0);
    assert_eq!(empty.progress(100.0), 1.0);
}

#[test]
fn scrub_lags_then_catches_up() {
    let mut s = Scrub::new(1.0);
    assert_eq!(s.follow(0.0, DT), 0.0);
    let v = s.follow(1.0, DT);
    assert!(v > 0.0 && v < 0.1);
    for _ in 0..600 {
        s.follow(1.0, DT);
    }
    assert_eq!(s.value(), 1.0);

    let mut instant = Scrub::new(0.0);
    instant.follow(0.0, DT);
    assert_eq!(instant.follow(0.7, DT), 0.7);
}
