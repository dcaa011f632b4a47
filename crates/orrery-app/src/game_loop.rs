//! Frame loop thread: runs the scene engine at the configured rate and emits snapshots.
//!
//! The engine is created inside this thread so it never crosses a thread
//! boundary. Commands arrive via `mpsc` channel. Snapshots go to the sink and
//! into shared state for synchronous polling. Fact lookups run on their own
//! threads and are collected here as they finish.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use orrery_core::layout::SceneLayout;
use orrery_core::state::FrameSnapshot;
use orrery_facts::{FactResponse, FactService, PendingFact};
use orrery_sim::clock::{FrameClock, SystemClock};
use orrery_sim::SceneEngine;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::sink::{FrameSink, HostEvent};
use crate::state::HostCommand;

/// Shared slots the loop publishes into.
#[derive(Clone, Default)]
pub struct LoopOutputs {
    pub latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    pub latest_fact: Arc<Mutex<Option<FactResponse>>>,
    /// Set to false once the loop thread has finished.
    pub running: Arc<Mutex<bool>>,
}

/// Nominal duration of one frame at `frame_rate` Hz.
pub fn frame_duration(frame_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(frame_rate.max(1)))
}

/// Spawns the frame loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: AppConfig,
    sink: impl FrameSink,
    facts: FactService,
    outputs: LoopOutputs,
) -> Result<(mpsc::Sender<HostCommand>, JoinHandle<()>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<HostCommand>();

    let handle = std::thread::Builder::new()
        .name("orrery-frame-loop".into())
        .spawn(move || {
            run_game_loop(config, sink, facts, cmd_rx, &outputs);
            if let Ok(mut running) = outputs.running.lock() {
                *running = false;
            }
        })
        .map_err(AppError::LoopSpawn)?;

    Ok((cmd_tx, handle))
}

/// The frame loop. Runs until Shutdown, channel disconnect, sink failure or
/// `max_frames`.
fn run_game_loop(
    config: AppConfig,
    mut sink: impl FrameSink,
    facts: FactService,
    cmd_rx: mpsc::Receiver<HostCommand>,
    outputs: &LoopOutputs,
) {
    let mut engine = SceneEngine::new(config.scene.clone());
    let mut clock = SystemClock::new();
    let mut pending: Vec<PendingFact> = Vec::new();
    let tick_duration = frame_duration(config.frame_rate);
    let emit_every = u64::from(config.emit_every_frames.max(1));

    let layout = SceneLayout::default();
    let scene = HostEvent::Scene {
        layout: &layout,
        stars: engine.starfield(),
    };
    if let Err(e) = sink.emit(&scene) {
        log::warn!("sink closed before first frame: {e}");
        return;
    }

    let mut next_tick_time = Instant::now();

    'frames: loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(HostCommand::Control { command }) => engine.queue_command(command),
                Ok(HostCommand::RequestFact { topic }) => {
                    log::info!("fact requested: {topic}");
                    pending.push(facts.request(topic));
                }
                Ok(HostCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => break 'frames,
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one frame
        let snapshot = engine.tick(clock.next_frame());

        // 3. Emit snapshot to the sink
        if snapshot.time.frame % emit_every == 0 {
            if let Err(e) = sink.emit(&HostEvent::Frame(&snapshot)) {
                log::warn!("sink closed, stopping frame loop: {e}");
                break;
            }
        }

        // 4. Store latest snapshot for synchronous polling
        let frame = snapshot.time.frame;
        if let Ok(mut lock) = outputs.latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Collect finished fact lookups
        let mut finished = Vec::new();
        pending.retain_mut(|p| match p.try_take() {
            Some(response) => {
                finished.push(response);
                false
            }
            None => true,
        });
        for response in finished {
            if !publish_fact(&mut sink, outputs, response) {
                break 'frames;
            }
        }

        if config.max_frames.is_some_and(|max| frame >= max) {
            break;
        }

        // 6. Sleep until next frame
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }

    // Lookups already in flight still get delivered.
    for p in pending {
        let response = p.wait();
        if !publish_fact(&mut sink, outputs, response) {
            break;
        }
    }
    log::info!("frame loop stopped after {} frames", engine.time().frame);
}

/// Send a finished fact to the sink and shared state. False if the sink is gone.
fn publish_fact(sink: &mut impl FrameSink, outputs: &LoopOutputs, response: FactResponse) -> bool {
    log::info!(
        "fact ready for {:?}{}",
        response.topic,
        if response.is_fallback { " (fallback)" } else { "" }
    );
    let delivered = match sink.emit(&HostEvent::Fact(&response)) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("sink closed while delivering fact: {e}");
            false
        }
    };
    if let Ok(mut lock) = outputs.latest_fact.lock() {
        *lock = Some(response);
    }
    delivered
}
