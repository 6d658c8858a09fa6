// Host-side tests for the easing curves.
// The main crate is wasm-only, so these drive the platform-free core directly.

use site_core::easing::cubic_bezier;
use site_core::Ease;

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::Power2In,
    Ease::Power2Out,
    Ease::Power2InOut,
    Ease::Hop,
    Ease::BackOut(1.7),
    Ease::ExpoOut,
];

#[test]
fn endpoints_are_exact() {
    for e in ALL {
        assert_eq!(e.apply(0.0), 0.0, "{e:?}");
        assert_eq!(e.apply(1.0), 1.0, "{e:?}");
        assert_eq!(e.apply(-0.5), 0.0);
        assert_eq!(e.apply(2.0), 1.0);
    }
}

#[test]
fn monotonic_curves_never_go_backwards() {
    for e in [Ease::Linear, Ease::Power2In, Ease::Power2Out, Ease::Power2InOut, Ease::Hop, Ease::ExpoOut] {
        let mut prev = 0.0;
        for i in 1..=200 {
            let v = e.apply(i as f64 / 200.0);
            assert!(v + 1e-9 >= prev, "{e:?} at {i}");
            prev = v;
        }
    }
}

#[test]
fn back_out_overshoots() {
    let peak = (1..100)
        .map(|i| Ease::BackOut(1.7).apply(i as f64 / 100.0))
        .fold(0.0_f64, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn hop_is_symmetric_about_the_midpoint() {
    for i in 1..50 {
        let t = i as f64 / 100.0;
        let a = Ease::Hop.apply(t);
        let b = Ease::Hop.apply(1.0 - t);
        assert!((a + b - 1.0).abs() < 1e-5, "t={t}");
    }
    assert!((Ease::Hop.apply(0.5) - 0.5).abs() < 1e-5);
}

#[test]
fn linear_bezier_is_identity() {
    for i in 0..=10 {
        let x = i as f64 / 10.0;
        assert!((cubic_bezier(0.25, 0.25, 0.75, 0.75, x) - x).abs() < 1e-6);
    }
}
