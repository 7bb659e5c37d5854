//! Hand sources: the keyboard simulator and scripted replays.
//!
//! The public interface is a stream of [`HandSample`]s delivered over an
//! `mpsc` channel.  Consumers don't need to know whether the landmarks came
//! from a tracker, the simulator, or a script.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use particle_morph::HandSample;
use tracing::{debug, info};

use crate::classifier::{GestureClassifier, VideoFrame};
use crate::error::AppError;
use crate::landmarks::{synthetic_hand, Pose};

// ════════════════════════════════════════════════════════════════════════════
// HandSource trait: unified interface for every producer
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can deliver [`HandSample`]s over a channel.
///
/// `run` returns when its input is exhausted or the receiver hangs up.
pub trait HandSource: Send + 'static {
    fn run(self: Box<Self>, tx: Sender<HandSample>);
}

// ════════════════════════════════════════════════════════════════════════════
// HandFeed: spawn helper + receiving end
// ════════════════════════════════════════════════════════════════════════════

/// Receiving end of a spawned hand source.
pub struct HandFeed {
    rx:     Receiver<HandSample>,
    handle: JoinHandle<()>,
}

/// Spawn a hand source on its own thread.
pub fn spawn_hand_source<H: HandSource>(source: H) -> Result<HandFeed, AppError> {
    let (tx, rx) = mpsc::channel();
    let handle = thread::Builder::new()
        .name("hand-source".into())
        .spawn(move || Box::new(source).run(tx))
        .map_err(|e| AppError::HandSource(e.to_string()))?;
    Ok(HandFeed { rx, handle })
}

impl HandFeed {
    /// Drain everything queued and return the newest sample.  Never blocks.
    pub fn latest(&self) -> Option<HandSample> {
        let mut newest = None;
        loop {
            match self.rx.try_recv() {
                Ok(sample)                      => newest = Some(sample),
                Err(TryRecvError::Empty)        => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }
        newest
    }

    /// Block until the next sample arrives, the source ends, or `timeout`.
    pub fn next_timeout(&self, timeout: Duration) -> Option<HandSample> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Wait for the source thread to finish.  The source must already have
    /// been told to stop (for the simulator: its input sender dropped).
    pub fn shutdown(self) -> Result<(), AppError> {
        drop(self.rx);
        self.handle
            .join()
            .map_err(|_| AppError::HandSource("hand source thread panicked".into()))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// SimHandSource: keyboard simulation
// ════════════════════════════════════════════════════════════════════════════

/// Raw input event from the simulation window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimInput {
    KeyDown(SimKey),
}

/// Simulated key codes (mapped from minifb Key).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimKey {
    Fist,       // 1
    OpenPalm,   // 2
    Victory,    // 3
    Pinch,      // 4
    HandAway,   // 0
    TiltLeft,   // Left
    TiltRight,  // Right
}

const TILT_STEP: f32 = 0.26;
const SIM_WRIST: [f32; 2] = [0.5, 0.8];

/// Hand source driven by [`SimInput`] events from the visualizer's window.
///
/// Each key press puts a synthetic hand in front of a pretend camera,
/// stamps a new frame, and runs the real classifier on it.
pub struct SimHandSource {
    pub rx: Receiver<SimInput>,
}

impl HandSource for SimHandSource {
    fn run(self: Box<Self>, tx: Sender<HandSample>) {
        let started    = Instant::now();
        let mut classifier = GestureClassifier::new();
        let mut pose: Option<Pose> = None;
        let mut roll   = 0.0f32;
        let mut last_t = -1.0f64;

        for SimInput::KeyDown(key) in self.rx {
            match key {
                SimKey::Fist      => pose = Some(Pose::Fist),
                SimKey::OpenPalm  => pose = Some(Pose::Open),
                SimKey::Victory   => pose = Some(Pose::Victory),
                SimKey::Pinch     => pose = Some(Pose::Pinch),
                SimKey::HandAway  => pose = None,
                SimKey::TiltLeft  => roll -= TILT_STEP,
                SimKey::TiltRight => roll += TILT_STEP,
            }
            // strictly increasing, like a real camera clock
            let t = started.elapsed().as_secs_f64().max(last_t + 1e-3);
            last_t = t;

            let frame = match pose {
                Some(p) => VideoFrame::with_hand(t, synthetic_hand(p, SIM_WRIST, roll)),
                None    => VideoFrame::empty(t),
            };
            let sample = classifier.classify(&frame);
            debug!(?key, gesture = sample.gesture.name(), "sim input");
            if tx.send(sample).is_err() { return; }
        }
        info!("simulated hand source stopped");
    }
}

// ════════════════════════════════════════════════════════════════════════════
// ScriptedHandSource: fixed replay
// ════════════════════════════════════════════════════════════════════════════

/// Replays a fixed list of frames through a classifier, one per `interval`.
pub struct ScriptedHandSource {
    pub frames:   Vec<VideoFrame>,
    pub interval: Duration,
}

impl ScriptedHandSource {
    /// One frame per pose (`None` = no hand), timestamps `1/fps` apart.
    pub fn from_poses(poses: &[Option<Pose>], fps: f64, interval: Duration) -> Self {
        let frames = poses.iter().enumerate()
            .map(|(i, pose)| {
                let t = i as f64 / fps;
                match pose {
                    Some(p) => VideoFrame::with_hand(t, synthetic_hand(*p, SIM_WRIST, 0.0)),
                    None    => VideoFrame::empty(t),
                }
            })
            .collect();
        ScriptedHandSource { frames, interval }
    }
}

impl HandSource for ScriptedHandSource {
    fn run(self: Box<Self>, tx: Sender<HandSample>) {
        let mut classifier = GestureClassifier::new();
        for frame in &self.frames {
            if tx.send(classifier.classify(frame)).is_err() { return; }
            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use particle_morph::Gesture;

    fn collect(feed: &HandFeed, n: usize) -> Vec<HandSample> {
        (0..n)
            .map(|_| feed.next_timeout(Duration::from_secs(2)).expect("sample"))
            .collect()
    }

    #[test]
    fn sim_keys_map_to_gestures() {
        let (tx, rx) = mpsc::channel();
        let feed = spawn_hand_source(SimHandSource { rx }).unwrap();
        for key in [SimKey::Fist, SimKey::OpenPalm, SimKey::Victory, SimKey::Pinch, SimKey::HandAway] {
            tx.send(SimInput::KeyDown(key)).unwrap();
        }
        let got: Vec<_> = collect(&feed, 5).iter().map(|s| (s.gesture, s.present)).collect();
        assert_eq!(got, vec![
            (Gesture::ClosedFist, true),
            (Gesture::OpenPalm,   true),
            (Gesture::Victory,    true),
            (Gesture::Pinch,      true),
            (Gesture::None,       false),
        ]);
        drop(tx);
        feed.shutdown().unwrap();
    }

    #[test]
    fn tilt_changes_roll_not_gesture() {
        let (tx, rx) = mpsc::channel();
        let feed = spawn_hand_source(SimHandSource { rx }).unwrap();
        tx.send(SimInput::KeyDown(SimKey::Victory)).unwrap();
        tx.send(SimInput::KeyDown(SimKey::TiltRight)).unwrap();
        let s = collect(&feed, 2);
        assert_eq!(s[1].gesture, Gesture::Victory);
        assert!((s[1].roll - s[0].roll - TILT_STEP).abs() < 1e-4);
        drop(tx);
        feed.shutdown().unwrap();
    }

    #[test]
    fn scripted_source_replays_then_ends() {
        let script = ScriptedHandSource::from_poses(
            &[None, Some(Pose::Open), None, Some(Pose::Pinch)],
            30.0,
            Duration::ZERO,
        );
        let feed = spawn_hand_source(script).unwrap();
        let s = collect(&feed, 4);
        assert!(!s[0].present);
        assert_eq!(s[1].gesture, Gesture::OpenPalm);
        assert!(!s[2].present);
        assert_eq!(s[3].gesture, Gesture::Pinch);
        feed.shutdown().unwrap();
    }

    #[test]
    fn latest_keeps_only_the_newest() {
        let script = ScriptedHandSource::from_poses(
            &[Some(Pose::Fist), Some(Pose::Victory), Some(Pose::Open)],
            30.0,
            Duration::ZERO,
        );
        let feed = spawn_hand_source(script).unwrap();
        // the source ends on its own; once joined, everything is queued
        let HandFeed { rx, handle } = feed;
        handle.join().unwrap();
        let feed = HandFeed { rx, handle: thread::spawn(|| ()) };
        assert_eq!(feed.latest().map(|s| s.gesture), Some(Gesture::OpenPalm));
        assert_eq!(feed.latest(), None);
        feed.shutdown().unwrap();
    }
}
