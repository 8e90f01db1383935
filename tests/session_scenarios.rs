//! End-to-end session scenarios against headless collaborators

use traffic_racer::highscores::load_highscore;
use traffic_racer::persistence::MemoryStore;
use traffic_racer::platform::ManualScheduler;
use traffic_racer::renderer::RecordingCanvas;
use traffic_racer::sim::{Road, Viewport};
use traffic_racer::ui::MemoryHud;
use traffic_racer::{Collaborators, Command, Session, SessionPhase, Tuning};

type Headless = Session<RecordingCanvas, MemoryHud, MemoryStore, ManualScheduler>;

fn quiet_tuning() -> Tuning {
    Tuning {
        spawn_chance: 0.0,
        ..Tuning::default()
    }
}

fn io(store: MemoryStore) -> Collaborators<RecordingCanvas, MemoryHud, MemoryStore, ManualScheduler> {
    Collaborators {
        canvas: RecordingCanvas::new(),
        hud: MemoryHud::new(),
        store,
        scheduler: ManualScheduler::new(),
    }
}

fn headless(store: MemoryStore) -> Headless {
    Session::new(io(store), quiet_tuning(), Viewport::new(1000.0, 600.0), 42)
}

/// Fire up to `n` due frames; returns how many actually fired
fn run_frames(session: &mut Headless, n: usize) -> usize {
    let mut fired = 0;
    for _ in 0..n {
        let Some(handle) = session.collaborators_mut().scheduler.pop_due() else {
            break;
        };
        session.on_frame(handle);
        fired += 1;
    }
    fired
}

fn park_enemy_on_player(session: &mut Headless) {
    let state = session.state_mut();
    let vehicle = state.player.vehicle.clone();
    state.enemies.push(vehicle);
}

#[test]
fn collision_on_first_tick_ends_the_run() {
    let mut session = headless(MemoryStore::new());
    session.start_game();
    park_enemy_on_player(&mut session);

    let fired = run_frames(&mut session, 10);

    assert_eq!(fired, 1);
    assert_eq!(session.phase(), SessionPhase::GameOver);
    assert_eq!(session.state().score, 0);
    assert_eq!(session.pending_frame(), None);
    assert!(session.collaborators().scheduler.pending().is_empty());
}

#[test]
fn pause_then_resume_continues_the_score() {
    let mut session = headless(MemoryStore::new());
    session.start_game();
    session.pause_game();
    assert_eq!(run_frames(&mut session, 5), 0);

    session.resume_game();
    assert_eq!(run_frames(&mut session, 4), 4);
    assert_eq!(session.state().score, 4);

    session.handle_command(Command::Pause);
    assert_eq!(run_frames(&mut session, 3), 0);
    assert_eq!(session.state().score, 4);

    session.handle_command(Command::Play);
    run_frames(&mut session, 2);
    assert_eq!(session.state().score, 6);
}

#[test]
fn restart_during_game_over_resets_the_run() {
    let mut session = headless(MemoryStore::new());
    session.start_game();
    run_frames(&mut session, 20);
    park_enemy_on_player(&mut session);
    run_frames(&mut session, 1);
    assert_eq!(session.phase(), SessionPhase::GameOver);
    assert_eq!(session.state().score, 20);

    session.start_game();

    assert_eq!(session.phase(), SessionPhase::Running);
    assert_eq!(session.state().score, 0);
    assert!(session.state().enemies.is_empty());
    assert_eq!(session.state().highscore, 20);
    assert_eq!(session.collaborators().hud.overlay, None);
}

#[test]
fn score_is_frozen_after_game_over() {
    let mut session = headless(MemoryStore::new());
    session.start_game();
    run_frames(&mut session, 3);
    park_enemy_on_player(&mut session);
    run_frames(&mut session, 1);

    session.resume_game();
    assert_eq!(run_frames(&mut session, 5), 0);
    assert_eq!(session.state().score, 3);
}

#[test]
fn highscore_survives_a_new_session() {
    let mut first = headless(MemoryStore::new());
    first.start_game();
    run_frames(&mut first, 12);
    let store = first.into_collaborators().store;
    assert_eq!(load_highscore(&store), 12);

    let mut second = headless(store);
    assert_eq!(second.state().highscore, 12);
    assert_eq!(second.collaborators().hud.highscore, 12);

    // Shorter run leaves the record alone
    second.start_game();
    run_frames(&mut second, 5);
    assert_eq!(second.state().highscore, 12);
    assert_eq!(load_highscore(&second.collaborators().store), 12);
}

#[test]
fn highscore_is_monotonic_across_runs() {
    let mut session = headless(MemoryStore::new());
    let mut last = 0;
    for frames in [8, 3, 15, 1] {
        session.start_game();
        run_frames(&mut session, frames);
        let highscore = session.state().highscore;
        assert!(highscore >= last);
        last = highscore;
    }
    assert_eq!(last, 15);
}

#[test]
fn stale_frames_never_double_the_loop() {
    let mut session = headless(MemoryStore::new());
    session.start_game();
    let stale = session.pending_frame().unwrap();
    session.start_game();
    session.start_game();

    // Delivered anyway, as a late browser callback would be
    session.on_frame(stale);
    assert_eq!(session.state().score, 0);
    assert_eq!(session.collaborators().scheduler.pending().len(), 1);

    run_frames(&mut session, 10);
    assert_eq!(session.state().score, 10);
    assert_eq!(session.collaborators().scheduler.pending().len(), 1);
}

#[test]
fn road_margin_for_wide_viewport() {
    let road = Road::for_viewport(1000.0, &Tuning::default());
    assert_eq!(road.margin, 300.0);

    let session = headless(MemoryStore::new());
    assert_eq!(session.state().road().margin, 300.0);
}

#[test]
fn player_stays_on_road_while_steering_hard() {
    let mut session = headless(MemoryStore::new());
    session.start_game();
    session.key_down("a");
    run_frames(&mut session, 100);
    assert_eq!(session.state().player.vehicle.x, 300.0);

    session.key_up("a");
    session.key_down("D");
    run_frames(&mut session, 100);
    let player = &session.state().player.vehicle;
    assert_eq!(player.x + player.width, 700.0);
}
