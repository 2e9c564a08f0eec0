//! End-to-end checks of the equalizer response through the public API.

use approx::assert_abs_diff_eq;

use eq_response::dsp::{FilterParams, StageCoefficients};
use eq_response::engine::{EqualizerState, ParamChannel, Slot, TransferFunction, Update};
use eq_response::plot::{frequency_at_x, sample_curve, x_at_frequency, y_at_db};

const RATE: f64 = 48000.0;

fn sweep() -> impl Iterator<Item = f64> {
    (0..=200).map(|i| frequency_at_x(i as f64, 200.0))
}

fn derive(slot: Slot, params: FilterParams) -> StageCoefficients {
    StageCoefficients::derive(slot.kind(), &params)
}

fn all_enabled(gain_db: f64) -> EqualizerState {
    let mut state = EqualizerState::new();
    let bands = [(Slot::Band1, 160.0), (Slot::Band2, 397.0), (Slot::Band3, 1250.0), (Slot::Band4, 2500.0)];
    for (slot, freq) in bands {
        state.replace(slot, derive(slot, FilterParams::new(true, gain_db, freq, 0.5, RATE)));
    }
    state.replace(Slot::LowShelf, derive(Slot::LowShelf, FilterParams::new(true, gain_db, 80.0, 1.0, RATE)));
    state.replace(Slot::HighShelf, derive(Slot::HighShelf, FilterParams::new(true, gain_db, 8000.0, 1.0, RATE)));
    state.replace(Slot::HighPass, derive(Slot::HighPass, FilterParams::new(true, 0.0, 5.0, 0.7, RATE)));
    state.replace(Slot::LowPass, derive(Slot::LowPass, FilterParams::new(true, 0.0, 20000.0, 1.0, RATE)));
    state
}

#[test]
fn disabled_stages_are_exactly_flat() {
    let mut state = EqualizerState::new();
    for slot in Slot::ALL {
        state.replace(slot, derive(slot, FilterParams::new(false, 12.0, 1000.0, 1.0, RATE)));
    }
    for f in sweep() {
        assert_eq!(state.combined_response_db(f), 0.0);
    }
}

#[test]
fn axis_mapping_round_trips() {
    for x in [0.0, 1.0, 59.0, 118.0] {
        assert_abs_diff_eq!(x_at_frequency(frequency_at_x(x, 119.0), 119.0), x, epsilon = 1e-9);
    }
    assert_eq!(y_at_db(0.0), 50.0);
    assert_eq!(y_at_db(20.0), 0.0);
    assert_eq!(y_at_db(-20.0), 100.0);
}

#[test]
fn zero_gain_band_and_shelves_are_transparent() {
    for (slot, freq) in [(Slot::Band1, 60.0), (Slot::Band4, 9000.0), (Slot::LowShelf, 200.0), (Slot::HighShelf, 3000.0)] {
        let stage = derive(slot, FilterParams::new(true, 0.0, freq, 2.0, RATE));
        for f in sweep() {
            assert_abs_diff_eq!(stage.evaluate_db(f), 0.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn single_band_boost() {
    let state = EqualizerState::new().with_stage(
        Slot::Band1,
        derive(Slot::Band1, FilterParams::new(true, 6.0, 1000.0, 1.0, RATE)),
    );
    assert_abs_diff_eq!(state.combined_response_db(1000.0), 6.0, epsilon = 0.1);

    // monotonic decay on both sides of the center
    let mut previous = state.combined_response_db(1000.0);
    for f in [700.0, 400.0, 200.0, 100.0, 50.0, 20.0] {
        let db = state.combined_response_db(f);
        assert!(db < previous, "{} Hz: {} >= {}", f, db, previous);
        previous = db;
    }
    previous = state.combined_response_db(1000.0);
    for f in [1500.0, 3000.0, 6000.0, 12000.0, 20000.0] {
        let db = state.combined_response_db(f);
        assert!(db < previous, "{} Hz: {} >= {}", f, db, previous);
        previous = db;
    }
    assert!(state.combined_response_db(20.0).abs() < 0.1);
    assert!(state.combined_response_db(20000.0).abs() < 0.1);
}

#[test]
fn high_pass_attenuates_lows() {
    let state = EqualizerState::new().with_stage(
        Slot::HighPass,
        derive(Slot::HighPass, FilterParams::new(true, 0.0, 100.0, 0.707, RATE)),
    );
    assert!(state.combined_response_db(20.0) < -20.0);
    assert_abs_diff_eq!(state.combined_response_db(10000.0), 0.0, epsilon = 0.01);
}

#[test]
fn neutral_settings_stay_near_zero() {
    let state = all_enabled(0.0);
    for f in sweep() {
        // Only the resonant low-pass approximation departs from 0 dB here.
        let db = state.combined_response_db(f);
        assert!(db.abs() < 1.5, "{} Hz: {} dB", f, db);

        let lowpass = state.stage_response_db(Slot::LowPass, f);
        let highpass = state.stage_response_db(Slot::HighPass, f);
        assert_abs_diff_eq!(db, lowpass + highpass, epsilon = 1e-9);
    }
}

#[test]
fn derivation_is_pure() {
    let params = FilterParams::new(true, -3.5, 700.0, 0.8, RATE);
    for slot in Slot::ALL {
        assert_eq!(derive(slot, params), derive(slot, params));
    }
}

#[test]
fn curve_matches_combined_response() {
    let state = all_enabled(3.0);
    let points = sample_curve(&state, 119);
    assert_eq!(points.len(), 119);
    for p in points {
        let f = frequency_at_x(p.x as f64, 119.0);
        assert_eq!(p.y, y_at_db(state.combined_response_db(f)));
    }
}

#[test]
fn host_session() {
    let (mut tx, mut rx) = ParamChannel::with_defaults().split();
    let mut tf = TransferFunction::new(RATE);

    // The host announces every control once, then starts changing them.
    let defaults = TransferFunction::default();
    for (id, value) in defaults.values() {
        tx.send(id.symbol(), value).unwrap();
    }
    assert!(tx.send("peakreset", 1.0).is_err());
    assert!(rx.apply_pending(&mut tf));
    assert!(tf.is_complete());

    assert_eq!(tf.set_parameter("gain3", 6.0), Ok(Update::Stage(Slot::Band3)));
    assert_abs_diff_eq!(tf.response_db(1250.0).unwrap(), 6.0, epsilon = 0.1);

    tf.set_parameter(":bypass", 1.0).unwrap();
    assert!(!tf.is_active());
    // bypass only greys the curve out; the response is unchanged
    assert_abs_diff_eq!(tf.response_db(1250.0).unwrap(), 6.0, epsilon = 0.1);
}
