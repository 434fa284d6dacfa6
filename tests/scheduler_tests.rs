mod common;

use std::thread;
use std::time::Duration;

use common::Sink;
use xtmines::xtm_status::{Mood, StatusScheduler};
use xtmines::xtm_timer::{TimerService, TimerState};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn delayed_icon_appears() {
    let sink = Sink::default();
    let mut s = StatusScheduler::new(sink.screen(), 14, 10);
    s.schedule_delayed(Mood::Normal, ms(20));
    thread::sleep(ms(300));
    s.shutdown();
    assert!(sink.text().contains(Mood::Normal.icon()));
}

#[test]
fn cancelled_icon_never_shows() {
    let sink = Sink::default();
    let mut s = StatusScheduler::new(sink.screen(), 14, 10);
    s.schedule_delayed(Mood::Normal, ms(200));
    s.cancel();
    thread::sleep(ms(400));
    s.shutdown();
    assert!(!sink.text().contains(Mood::Normal.icon()));
}

#[test]
fn newer_schedule_replaces_the_waiting_one() {
    let sink = Sink::default();
    let mut s = StatusScheduler::new(sink.screen(), 14, 10);
    s.schedule_delayed(Mood::Normal, ms(200));
    s.schedule_delayed(Mood::Won, ms(20));
    thread::sleep(ms(500));
    s.shutdown();
    let text = sink.text();
    assert!(text.contains(Mood::Won.icon()));
    assert!(!text.contains(Mood::Normal.icon()));
}

#[test]
fn show_now_writes_immediately() {
    let sink = Sink::default();
    let mut s = StatusScheduler::new(sink.screen(), 14, 10);
    s.show_now(Mood::Processing);
    assert!(sink.text().contains(Mood::Processing.icon()));
    s.shutdown();
}

#[test]
fn nothing_is_written_after_shutdown() {
    let sink = Sink::default();
    let mut s = StatusScheduler::new(sink.screen(), 14, 10);
    s.schedule_delayed(Mood::Normal, ms(100));
    s.shutdown();
    s.show_now(Mood::Lost);
    s.schedule_delayed(Mood::Won, ms(1));
    thread::sleep(ms(300));
    let text = sink.text();
    assert!(!text.contains(Mood::Normal.icon()));
    assert!(!text.contains(Mood::Lost.icon()));
    assert!(!text.contains(Mood::Won.icon()));
}

#[test]
fn dropping_the_scheduler_stops_it() {
    let sink = Sink::default();
    {
        let s = StatusScheduler::new(sink.screen(), 14, 10);
        s.schedule_delayed(Mood::Normal, ms(100));
    }
    thread::sleep(ms(300));
    assert!(!sink.text().contains(Mood::Normal.icon()));
}

#[test]
fn timer_draws_and_stops_once() {
    let sink = Sink::default();
    let mut t = TimerService::new(sink.screen(), 8, 1);
    t.refresh();
    assert!(sink.text().contains("Time: "));
    assert!(sink.text().contains("0:00:00"));
    t.start();
    thread::sleep(ms(50));
    let elapsed = t.stop();
    assert!(elapsed >= 50);
    assert!(elapsed < 5_000);
    assert_eq!(t.stop(), 0);
    assert_eq!(t.state(), TimerState::Stopped);
}

#[test]
fn timer_ticks_while_running() {
    let sink = Sink::default();
    let mut t = TimerService::new(sink.screen(), 8, 1);
    t.start();
    thread::sleep(ms(1300));
    t.stop();
    assert!(sink.text().contains("0:00:01"));
}

#[test]
fn paused_timer_keeps_counting_time() {
    let sink = Sink::default();
    let mut t = TimerService::new(sink.screen(), 8, 1);
    t.start();
    t.pause();
    thread::sleep(ms(100));
    t.unpause();
    assert!(t.stop() >= 100);
}

#[test]
fn paused_timer_does_not_redraw() {
    let sink = Sink::default();
    let mut t = TimerService::new(sink.screen(), 8, 1);
    t.start();
    t.pause();
    thread::sleep(ms(2300));
    let text = sink.text();
    assert!(text.contains("0:00:00"));
    assert!(!text.contains("0:00:01"));
    assert!(!text.contains("0:00:02"));
    assert!(t.stop() >= 2300);
}
