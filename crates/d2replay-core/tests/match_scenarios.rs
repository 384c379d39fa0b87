//! End-to-end reduction scenarios.
//!
//! Each test feeds a scripted snapshot stream through [`run`] and checks the
//! finished result (or the fatal error) the way a caller of the library
//! would see it.

#![allow(
    clippy::unwrap_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::arithmetic_side_effects
)]

use d2replay_core::config::ParseConfig;
use d2replay_core::dispatch::{Dispatcher, run};
use d2replay_core::error::{ReduceError, RunError};
use d2replay_core::lifecycle::MatchPhase;
use d2replay_core::source::VecSource;
use d2replay_types::schema::{
    DATA_SPECTATOR_CLASS, GAME_END_TIME, GAME_RULES_CLASS, GAME_START_TIME, GAME_TIME,
    GAME_WINNER, net_worth_key,
};
use d2replay_types::{EntitySnapshot, ROSTER_SIZE};

fn rules() -> EntitySnapshot {
    EntitySnapshot::new(GAME_RULES_CLASS)
}

fn clock(game_time: f32) -> EntitySnapshot {
    rules().with_f32(GAME_TIME, game_time)
}

fn spectator(base: i32) -> EntitySnapshot {
    let mut snap = EntitySnapshot::new(DATA_SPECTATOR_CLASS);
    for slot in 0..ROSTER_SIZE {
        let offset = i32::try_from(slot).unwrap() * 100;
        snap = snap.with_i32(net_worth_key(slot), base + offset);
    }
    snap
}

fn winner(team: i32, end_time: f32) -> EntitySnapshot {
    rules()
        .with_i32(GAME_WINNER, team)
        .with_f32(GAME_END_TIME, end_time)
}

#[test]
fn full_match_lifecycle() {
    let config = ParseConfig::default();
    let mut d = Dispatcher::new(&config).unwrap();

    // Pre-start tick: no start time yet.
    d.dispatch(&rules().with_f32(GAME_TIME, 3.0)).unwrap();
    assert_eq!(d.state().lifecycle.phase(), MatchPhase::NotStarted);

    // Start at t=10.
    d.dispatch(&rules().with_f32(GAME_START_TIME, 10.0).with_f32(GAME_TIME, 10.0))
        .unwrap();
    assert_eq!(d.state().lifecycle.start_time(), Some(10.0));
    assert_eq!(d.state().lifecycle.game_time(), 0);

    // First sample at game time 0 (0 >= -1).
    d.dispatch(&spectator(600)).unwrap();
    assert_eq!(d.state().series.len(), 1);
    assert_eq!(d.state().sampler.next_threshold(), 60);

    // Clock reaches 70 -> game time 60.
    d.dispatch(&clock(70.0)).unwrap();
    assert_eq!(d.state().lifecycle.game_time(), 60);

    // Second sample, 60 >= 60.
    d.dispatch(&spectator(1500)).unwrap();
    assert_eq!(d.state().series.len(), 2);

    // Winner declared at t=130.
    d.dispatch(&winner(1, 130.0)).unwrap();
    assert!(d.is_finished());

    // Everything afterwards is ignored.
    d.dispatch(&clock(500.0)).unwrap();
    d.dispatch(&spectator(9999)).unwrap();

    let result = d.finish();
    assert_eq!(result.phase, MatchPhase::Ended);
    assert_eq!(result.winner, Some(1));
    assert_eq!(result.duration(), Some(120.0));
    assert_eq!(result.final_game_time, 60);
    assert_eq!(result.net_worth.len(), 2);
    assert_eq!(result.net_worth.slot(0), Some(&[600, 1500][..]));
    assert_eq!(result.net_worth.slot(9), Some(&[1500, 2400][..]));
}

#[test]
fn samples_before_start_are_never_taken() {
    let mut source = VecSource::new(vec![
        spectator(1),
        spectator(2),
        rules().with_f32(GAME_TIME, 1.0),
        spectator(3),
        rules().with_f32(GAME_START_TIME, 30.0).with_f32(GAME_TIME, 30.0),
        spectator(4),
    ]);
    let result = run(&mut source, &ParseConfig::default()).unwrap();

    assert_eq!(result.phase, MatchPhase::InProgress);
    assert_eq!(result.net_worth.len(), 1);
    assert_eq!(result.net_worth.slot(0), Some(&[4][..]));
}

#[test]
fn countdown_is_not_sampled() {
    let mut d = Dispatcher::new(&ParseConfig::default()).unwrap();

    // Start time announced while the clock still reads 90 seconds early.
    d.dispatch(&rules().with_f32(GAME_START_TIME, 100.0).with_f32(GAME_TIME, 10.0))
        .unwrap();
    assert_eq!(d.state().lifecycle.phase(), MatchPhase::InProgress);
    assert_eq!(d.state().lifecycle.game_time(), -90);

    d.dispatch(&spectator(600)).unwrap();
    d.dispatch(&clock(99.5)).unwrap();
    assert_eq!(d.state().lifecycle.game_time(), -1);
    d.dispatch(&spectator(650)).unwrap();
    assert!(d.state().series.is_empty());
    assert_eq!(d.state().sampler.next_threshold(), -1);

    // The horn: elapsed time reaches zero and the first sample is taken.
    d.dispatch(&clock(100.0)).unwrap();
    assert_eq!(d.state().lifecycle.game_time(), 0);
    d.dispatch(&spectator(700)).unwrap();
    assert_eq!(d.state().series.slot(0), Some(&[700][..]));
    assert_eq!(d.state().sampler.next_threshold(), 60);

    d.dispatch(&clock(160.0)).unwrap();
    d.dispatch(&spectator(1300)).unwrap();
    assert_eq!(d.state().series.slot(0), Some(&[700, 1300][..]));
}

#[test]
fn missing_roster_slot_aborts_run() {
    let mut broken = spectator(600);
    broken.properties.remove(&net_worth_key(7));

    let mut source = VecSource::new(vec![
        rules().with_f32(GAME_START_TIME, 0.0).with_f32(GAME_TIME, 0.0),
        broken,
        winner(2, 100.0),
    ]);
    let err = run(&mut source, &ParseConfig::default()).unwrap_err();

    match err {
        RunError::Reduce {
            source: ReduceError::MissingProperty { class, key },
        } => {
            assert_eq!(class, DATA_SPECTATOR_CLASS);
            assert_eq!(key, "m_iNetWorth.0007");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_roster_slot_appends_nothing() {
    let mut d = Dispatcher::new(&ParseConfig::default()).unwrap();
    d.dispatch(&rules().with_f32(GAME_START_TIME, 0.0).with_f32(GAME_TIME, 0.0))
        .unwrap();

    let mut broken = spectator(600);
    broken.properties.remove(&net_worth_key(7));
    assert!(d.dispatch(&broken).is_err());

    assert!(d.state().series.is_empty());
    for slot in d.state().series.slots() {
        assert!(slot.is_empty());
    }
}

#[test]
fn winner_without_end_time_aborts_run() {
    let mut source = VecSource::new(vec![
        rules().with_f32(GAME_START_TIME, 0.0).with_f32(GAME_TIME, 0.0),
        spectator(600),
        rules().with_i32(GAME_WINNER, 2),
    ]);
    let err = run(&mut source, &ParseConfig::default()).unwrap_err();
    assert!(err.to_string().contains(GAME_END_TIME), "{err}");
}

#[test]
fn in_progress_update_without_clock_aborts_run() {
    let mut source = VecSource::new(vec![
        rules().with_f32(GAME_START_TIME, 0.0).with_f32(GAME_TIME, 0.0),
        rules(),
    ]);
    let err = run(&mut source, &ParseConfig::default()).unwrap_err();
    assert!(err.to_string().contains(GAME_TIME), "{err}");
}

#[test]
fn custom_interval_controls_spacing() {
    let config = ParseConfig {
        interval_seconds: 10,
        ..ParseConfig::default()
    };
    let mut snapshots = vec![rules().with_f32(GAME_START_TIME, 0.0).with_f32(GAME_TIME, 0.0)];
    for t in 0..=35_u16 {
        snapshots.push(clock(f32::from(t)));
        snapshots.push(spectator(i32::from(t)));
    }
    snapshots.push(winner(3, 40.0));

    let result = run(&mut VecSource::new(snapshots), &config).unwrap();
    // Sampled at 0, 10, 20, 30.
    assert_eq!(result.net_worth.slot(0), Some(&[0, 10, 20, 30][..]));
    assert_eq!(result.winner, Some(3));
}

#[test]
fn unknown_classes_pass_through() {
    let mut source = VecSource::new(vec![
        EntitySnapshot::new("CDOTA_Unit_Hero_Axe").with_i32("m_iHealth", 700),
        rules().with_f32(GAME_START_TIME, 0.0).with_f32(GAME_TIME, 0.0),
        EntitySnapshot::new("CDOTAPlayer"),
        spectator(600),
        winner(2, 60.0),
    ]);
    let result = run(&mut source, &ParseConfig::default()).unwrap();
    assert_eq!(result.net_worth.len(), 1);
    assert_eq!(result.snapshots_seen, 5);
}

#[test]
fn export_matches_documented_shape() {
    let mut source = VecSource::new(vec![
        rules().with_f32(GAME_START_TIME, 0.0).with_f32(GAME_TIME, 0.0),
        spectator(600),
        winner(2, 60.0),
    ]);
    let result = run(&mut source, &ParseConfig::default()).unwrap();
    let json = serde_json::to_string(&result.export()).unwrap();
    assert_eq!(
        json,
        r#"{"TimeSeries":{"Net Worth":[[600],[700],[800],[900],[1000],[1100],[1200],[1300],[1400],[1500]]}}"#
    );
}
