//! Tokio-driven carousel: a [`Paginator`] plus an auto-advance timer.
//!
//! One task owns the paginator. Navigation commands arrive over an `mpsc`
//! channel and timer ticks come from a `tokio::time::Interval`; the task
//! `select!`s between the two, so they never interleave. Every change is
//! published as a [`CarouselSnapshot`] on a `watch` channel for renderers.
//!
//! Dropping the [`Carousel`] handle aborts the task, which also drops the
//! interval. No tick can fire against a carousel whose owner is gone.

use std::time::Duration;

use serde::Serialize;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::error::{CarouselError, PaginatorError};
use crate::paginator::{OutOfRange, Paginator};

const COMMAND_QUEUE: usize = 32;

/// How a carousel behaves once spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselOptions {
    /// Time between auto-advance ticks.
    pub interval: Duration,
    /// Start in [`AutoAdvance::Advancing`] instead of [`AutoAdvance::Idle`].
    pub autoplay: bool,
    pub out_of_range: OutOfRange,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(5000),
            autoplay: false,
            out_of_range: OutOfRange::Reject,
        }
    }
}

/// Timer state of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoAdvance {
    Idle,
    Advancing,
}

/// What renderers see after every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselSnapshot {
    pub index: usize,
    pub item_count: usize,
    pub auto_advance: AutoAdvance,
}

enum Command {
    Next(oneshot::Sender<CarouselSnapshot>),
    Previous(oneshot::Sender<CarouselSnapshot>),
    GoTo(usize, oneshot::Sender<Result<CarouselSnapshot, PaginatorError>>),
    StartAutoAdvance(oneshot::Sender<CarouselSnapshot>),
    StopAutoAdvance(oneshot::Sender<CarouselSnapshot>),
    Shutdown,
}

/// Handle to a running carousel task.
#[derive(Debug)]
pub struct Carousel {
    commands: mpsc::Sender<Command>,
    state: watch::Receiver<CarouselSnapshot>,
    task: JoinHandle<()>,
}

impl Carousel {
    /// Spawn the carousel task on the current Tokio runtime.
    ///
    /// Fails with [`PaginatorError::Empty`] when `item_count` is zero; in that
    /// case nothing is spawned.
    pub fn spawn(item_count: usize, options: CarouselOptions) -> Result<Self, PaginatorError> {
        let paginator = Paginator::with_policy(item_count, options.out_of_range)?;
        let ticker = options.autoplay.then(|| new_ticker(options.interval));
        let initial = CarouselSnapshot {
            index: paginator.current(),
            item_count,
            auto_advance: if ticker.is_some() {
                AutoAdvance::Advancing
            } else {
                AutoAdvance::Idle
            },
        };
        let (commands, rx) = mpsc::channel(COMMAND_QUEUE);
        let (state_tx, state) = watch::channel(initial);

        let driver = Driver {
            paginator,
            interval: options.interval,
            ticker,
            state: state_tx,
        };
        let task = tokio::spawn(driver.run(rx));
        info!(item_count, autoplay = options.autoplay, "carousel spawned");

        Ok(Self {
            commands,
            state,
            task,
        })
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> CarouselSnapshot {
        *self.state.borrow()
    }

    /// A receiver that wakes on every change.
    pub fn subscribe(&self) -> watch::Receiver<CarouselSnapshot> {
        self.state.clone()
    }

    pub async fn next(&self) -> Result<CarouselSnapshot, CarouselError> {
        self.request(Command::Next).await
    }

    pub async fn previous(&self) -> Result<CarouselSnapshot, CarouselError> {
        self.request(Command::Previous).await
    }

    pub async fn go_to(&self, index: usize) -> Result<CarouselSnapshot, CarouselError> {
        let outcome = self.request(|reply| Command::GoTo(index, reply)).await?;
        Ok(outcome?)
    }

    /// Start (or restart, resetting the phase of) the auto-advance timer.
    pub async fn start_auto_advance(&self) -> Result<CarouselSnapshot, CarouselError> {
        self.request(Command::StartAutoAdvance).await
    }

    /// Cancel the auto-advance timer. The index stays where it is.
    pub async fn stop_auto_advance(&self) -> Result<CarouselSnapshot, CarouselError> {
        self.request(Command::StopAutoAdvance).await
    }

    /// Stop the task and wait for it to finish.
    pub async fn shutdown(mut self) {
        let _ = self.commands.send(Command::Shutdown).await;
        let _ = (&mut self.task).await;
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, CarouselError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(build(reply))
            .await
            .map_err(|_| CarouselError::Closed)?;
        response.await.map_err(|_| CarouselError::Closed)
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn new_ticker(period: Duration) -> Interval {
    // First tick one full period from now; `interval` would fire immediately.
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

async fn tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

struct Driver {
    paginator: Paginator,
    interval: Duration,
    ticker: Option<Interval>,
    state: watch::Sender<CarouselSnapshot>,
}

impl Driver {
    async fn run(mut self, mut commands: mpsc::Receiver<Command>) {
        loop {
            tokio::select! {
                biased;
                command = commands.recv() => {
                    let Some(command) = command else { break };
                    if !self.handle(command) {
                        break;
                    }
                }
                _ = tick(&mut self.ticker) => {
                    self.paginator.next();
                    self.publish();
                }
            }
        }
        debug!("carousel task finished");
    }

    /// Returns `false` when the task should exit.
    fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Next(reply) => {
                self.paginator.next();
                let _ = reply.send(self.publish());
            }
            Command::Previous(reply) => {
                self.paginator.previous();
                let _ = reply.send(self.publish());
            }
            Command::GoTo(index, reply) => {
                let outcome = self.paginator.go_to(index).map(|_| self.publish());
                let _ = reply.send(outcome);
            }
            Command::StartAutoAdvance(reply) => {
                self.ticker = Some(new_ticker(self.interval));
                debug!(interval_ms = self.interval.as_millis() as u64, "auto-advance started");
                let _ = reply.send(self.publish());
            }
            Command::StopAutoAdvance(reply) => {
                if self.ticker.take().is_some() {
                    debug!("auto-advance stopped");
                }
                let _ = reply.send(self.publish());
            }
            Command::Shutdown => return false,
        }
        true
    }

    fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            index: self.paginator.current(),
            item_count: self.paginator.item_count(),
            auto_advance: if self.ticker.is_some() {
                AutoAdvance::Advancing
            } else {
                AutoAdvance::Idle
            },
        }
    }

    fn publish(&self) -> CarouselSnapshot {
        let snapshot = self.snapshot();
        self.state.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(5);

    fn autoplay() -> CarouselOptions {
        CarouselOptions {
            interval: PERIOD,
            autoplay: true,
            ..CarouselOptions::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn manual_navigation_wraps() {
        let carousel = Carousel::spawn(3, CarouselOptions::default()).unwrap();
        assert_eq!(carousel.next().await.unwrap().index, 1);
        assert_eq!(carousel.next().await.unwrap().index, 2);
        assert_eq!(carousel.next().await.unwrap().index, 0);
        assert_eq!(carousel.previous().await.unwrap().index, 2);
        assert_eq!(carousel.snapshot().auto_advance, AutoAdvance::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_deck_does_not_spawn() {
        let err = Carousel::spawn(0, autoplay()).unwrap_err();
        assert_eq!(err, PaginatorError::Empty);
    }

    #[tokio::test(start_paused = true)]
    async fn one_step_per_elapsed_period() {
        let carousel = Carousel::spawn(3, autoplay()).unwrap();
        let mut rx = carousel.subscribe();
        let started = Instant::now();

        for expected in [1, 2, 0, 1] {
            rx.changed().await.unwrap();
            assert_eq!(rx.borrow_and_update().index, expected);
        }
        assert_eq!(started.elapsed(), PERIOD * 4);
    }

    #[tokio::test(start_paused = true)]
    async fn n_periods_advance_n_mod_count() {
        let carousel = Carousel::spawn(3, autoplay()).unwrap();
        tokio::time::sleep(PERIOD * 7 + Duration::from_millis(1)).await;
        assert_eq!(carousel.snapshot().index, 7 % 3);
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_timer_never_fires_again() {
        let carousel = Carousel::spawn(4, autoplay()).unwrap();
        tokio::time::sleep(PERIOD + Duration::from_millis(1)).await;
        let stopped = carousel.stop_auto_advance().await.unwrap();
        assert_eq!(stopped.index, 1);
        assert_eq!(stopped.auto_advance, AutoAdvance::Idle);

        let mut rx = carousel.subscribe();
        rx.borrow_and_update();
        tokio::time::sleep(PERIOD * 10).await;
        assert!(!rx.has_changed().unwrap());
        assert_eq!(carousel.snapshot().index, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_resets_the_phase() {
        let carousel = Carousel::spawn(3, autoplay()).unwrap();
        tokio::time::sleep(PERIOD - Duration::from_secs(1)).await;
        carousel.start_auto_advance().await.unwrap();

        // The first deadline passes without a tick.
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(carousel.snapshot().index, 0);

        tokio::time::sleep(PERIOD).await;
        assert_eq!(carousel.snapshot().index, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn go_to_reports_rejections() {
        let carousel = Carousel::spawn(3, CarouselOptions::default()).unwrap();
        assert_eq!(carousel.go_to(2).await.unwrap().index, 2);
        assert_eq!(
            carousel.go_to(9).await.unwrap_err(),
            CarouselError::Paginator(PaginatorError::IndexOutOfRange { index: 9, len: 3 })
        );
        assert_eq!(carousel.snapshot().index, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn navigation_is_legal_while_advancing() {
        let carousel = Carousel::spawn(5, autoplay()).unwrap();
        let snap = carousel.go_to(3).await.unwrap();
        assert_eq!(snap.index, 3);
        assert_eq!(snap.auto_advance, AutoAdvance::Advancing);
        tokio::time::sleep(PERIOD + Duration::from_millis(1)).await;
        assert_eq!(carousel.snapshot().index, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels_the_task() {
        let carousel = Carousel::spawn(3, autoplay()).unwrap();
        let mut rx = carousel.subscribe();
        drop(carousel);
        // The sender side goes away with the aborted task.
        assert!(rx.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_closes_the_channel() {
        let carousel = Carousel::spawn(2, CarouselOptions::default()).unwrap();
        let mut rx = carousel.subscribe();
        carousel.shutdown().await;
        assert!(rx.changed().await.is_err());
    }
}
