//! End-to-end session behavior through the public API

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use star_dodger::frontend::Silent;
use star_dodger::sim::Obstacle;
use star_dodger::tuning::TuningError;
use star_dodger::{
    EndScreen, Frame, MusicPlayer, Renderer, RunSummary, Session, SessionPhase, TickOutcome,
    Tuning,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Play,
    Pause,
    Rewind,
    Show(RunSummary),
    Hide,
}

type Log = Rc<RefCell<Vec<Call>>>;

struct RecordingMusic(Log);

impl MusicPlayer for RecordingMusic {
    fn play(&mut self) {
        self.0.borrow_mut().push(Call::Play);
    }
    fn pause(&mut self) {
        self.0.borrow_mut().push(Call::Pause);
    }
    fn rewind(&mut self) {
        self.0.borrow_mut().push(Call::Rewind);
    }
}

struct RecordingEndScreen(Log);

impl EndScreen for RecordingEndScreen {
    fn show(&mut self, summary: &RunSummary) {
        self.0.borrow_mut().push(Call::Show(*summary));
    }
    fn hide(&mut self) {
        self.0.borrow_mut().push(Call::Hide);
    }
}

/// Keeps the score shown in each drawn frame
#[derive(Default)]
struct ScoreCapture {
    scores: Vec<u64>,
    high_scores: Vec<u64>,
}

impl Renderer for ScoreCapture {
    fn draw(&mut self, frame: &Frame<'_>) {
        self.scores.push(frame.score);
        self.high_scores.push(frame.high_score);
    }
}

fn recording_session() -> (Session, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let session = Session::new(
        Tuning::default(),
        2024,
        Box::new(RecordingMusic(log.clone())),
        Box::new(RecordingEndScreen(log.clone())),
    )
    .expect("default tuning is valid");
    (session, log)
}

/// Tick `n` times with no obstacles in play, then crash on the next tick
fn play_run(session: &mut Session, survive: u64) -> RunSummary {
    session.state_mut().obstacles.clear();
    for _ in 0..survive {
        assert_eq!(session.tick(&mut Silent), TickOutcome::Continue);
    }
    // A full-width segment sitting on the ship after the next move
    session.state_mut().obstacles.push(Obstacle {
        pos: Vec2::new(0.0, 440.0),
        width: 540.0,
    });
    match session.tick(&mut Silent) {
        TickOutcome::Ended(summary) => summary,
        other => panic!("expected the run to end, got {:?}", other),
    }
}

#[test]
fn collaborators_follow_the_run_lifecycle() {
    let (mut session, log) = recording_session();

    session.assets_ready().unwrap();
    assert_eq!(*log.borrow(), vec![Call::Play]);

    let first = play_run(&mut session, 9);
    assert_eq!(first.score, 10);
    assert_eq!(
        *log.borrow(),
        vec![Call::Play, Call::Show(first), Call::Pause]
    );

    log.borrow_mut().clear();
    session.restart().unwrap();
    assert_eq!(*log.borrow(), vec![Call::Hide, Call::Rewind, Call::Play]);
}

#[test]
fn restart_resets_run_and_keeps_best_score() {
    let (mut session, _log) = recording_session();
    session.assets_ready().unwrap();
    session.advance_clock(0.0);

    let first = play_run(&mut session, 9);
    assert_eq!(first.score, 10);
    assert_eq!(first.high_score, 10);
    assert!(first.is_new_record());

    session.restart().unwrap();
    let second = play_run(&mut session, 36);
    assert_eq!(second.score, 37);
    assert_eq!(second.previous_high_score, 10);
    assert_eq!(second.high_score, 37);
    assert_eq!(session.high_score(), 37);

    session.restart().unwrap();
    let state = session.state();
    assert_eq!(session.phase(), SessionPhase::Running);
    assert_eq!(state.score, 0);
    assert_eq!(state.obstacle_speed, 2.0);
    assert_eq!(state.obstacle_interval_ms, 2000.0);
    assert_eq!(state.ship.pos, Vec2::new(245.0, 455.0));
    assert!(state.obstacles.is_empty());
    assert_eq!(state.stars.len(), 100);
    assert_eq!(session.high_score(), 37);

    // A worse run leaves the best alone
    let third = play_run(&mut session, 4);
    assert_eq!(third.score, 5);
    assert_eq!(third.high_score, 37);
    assert!(!third.is_new_record());
    assert_eq!(session.last_summary(), Some(third));
}

#[test]
fn drawn_frames_show_score_before_increment() {
    let (mut session, _log) = recording_session();
    session.assets_ready().unwrap();

    let mut capture = ScoreCapture::default();
    for _ in 0..3 {
        session.tick(&mut capture);
    }
    assert_eq!(capture.scores, vec![0, 1, 2]);
    assert_eq!(session.score(), 3);
    assert_eq!(capture.high_scores, vec![0, 0, 0]);
}

#[test]
fn ended_session_ignores_time_and_ticks() {
    let (mut session, _log) = recording_session();
    session.assets_ready().unwrap();
    session.advance_clock(0.0);
    let summary = play_run(&mut session, 2);

    let obstacles = session.state().obstacles.clone();
    session.advance_clock(60_000.0);
    assert_eq!(session.tick(&mut Silent), TickOutcome::Stopped);
    assert_eq!(session.state().obstacles, obstacles);
    assert_eq!(session.score(), summary.score);
}

#[test]
fn ship_follows_pointer_between_ticks() {
    let (mut session, _log) = recording_session();
    session.assets_ready().unwrap();

    session.move_ship_to(0.0, 0.0);
    assert_eq!(session.state().ship.pos, Vec2::ZERO);
    session.move_ship_to(10_000.0, 10_000.0);
    assert_eq!(session.state().ship.pos, Vec2::new(490.0, 910.0));
    session.move_ship_to(100.0, 700.0);
    assert_eq!(session.state().ship.center(), Vec2::new(100.0, 700.0));
}

#[test]
fn same_seed_same_run() {
    let run = |seed| {
        let mut session = Session::new(
            Tuning::default(),
            seed,
            Box::new(Silent),
            Box::new(Silent),
        )
        .expect("default tuning is valid");
        session.assets_ready().unwrap();
        for _ in 0..600 {
            session.frame_elapsed(1000.0 / 60.0, &mut Silent);
        }
        session.state().obstacles.clone()
    };
    assert_eq!(run(99), run(99));
}

#[test]
fn unplayable_tuning_is_rejected_up_front() {
    // No room for a gap: the first spawn would have nowhere to place it
    let tuning = Tuning {
        obstacle_gap: 540.0,
        ..Tuning::default()
    };
    let result = Session::new(tuning, 1, Box::new(Silent), Box::new(Silent));
    assert!(matches!(result, Err(TuningError::GapTooWide { .. })));
}

#[test]
fn end_screen_text_shows_best_before_the_run() {
    let (mut session, log) = recording_session();
    session.assets_ready().unwrap();
    play_run(&mut session, 9);
    session.restart().unwrap();
    let summary = play_run(&mut session, 36);

    assert_eq!(summary.to_string(), "Score: 37\nHigh Score: 10\nNew record!");
    assert!(log.borrow().contains(&Call::Show(summary)));
    assert_eq!(session.high_score(), 37);
}
