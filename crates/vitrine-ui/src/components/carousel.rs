//! # Carousel
//!
//! Automatic slide rotation for `.carousel-container` regions.
//!
//! ## Task Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Carousel Rotation Task                              │
//! │                                                                         │
//! │  spawn() ──► position slides ──► tick(interval) ──► advance ──┐        │
//! │                    ▲                                           │        │
//! │                    └───────────────────────────────────────────┘        │
//! │                                                                         │
//! │  handle.shutdown() ──► task exits, slides stay where they are          │
//! │                                                                         │
//! │  A single-slide carousel never starts: there is nothing to rotate.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

use crate::dom;
use crate::surface::Surface;

/// Configuration for one carousel region.
#[derive(Debug, Clone)]
pub struct CarouselConfig {
    /// Container selector (e.g. `.carousel-container`).
    pub selector: String,

    /// Number of slides inside the container.
    pub slide_count: usize,

    /// Rotation interval; the markup's `data-speed` in milliseconds.
    pub interval: Duration,
}

impl CarouselConfig {
    /// Creates a config with the markup's default speed (3000 ms).
    pub fn new(selector: impl Into<String>, slide_count: usize) -> Self {
        CarouselConfig {
            selector: selector.into(),
            slide_count,
            interval: Duration::from_millis(3000),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

/// Handle for stopping a running carousel.
pub struct CarouselHandle {
    shutdown_tx: mpsc::Sender<()>,
}

impl CarouselHandle {
    /// Stops the rotation task. Slides keep their current position.
    pub async fn shutdown(&self) {
        // A dropped receiver means the task is already gone
        let _ = self.shutdown_tx.send(()).await;
    }
}

/// Spawner for carousel rotation tasks.
pub struct Carousel;

impl Carousel {
    /// Positions the slides and starts rotating them.
    ///
    /// Returns `None` for zero or one slide: the initial layout is already
    /// correct and no task is needed.
    pub fn spawn(surface: Arc<dyn Surface>, config: CarouselConfig) -> Option<CarouselHandle> {
        if config.slide_count <= 1 {
            debug!(selector = %config.selector, "carousel not started (single slide)");
            return None;
        }

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        tokio::spawn(async move {
            let mut current = 0usize;
            position(surface.as_ref(), &config, current);

            let mut ticker = tokio::time::interval(config.interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // The first tick completes immediately; consume it so the first
            // advance happens one full interval after spawn
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        current = (current + 1) % config.slide_count;
                        position(surface.as_ref(), &config, current);
                    }
                    _ = shutdown_rx.recv() => {
                        debug!(selector = %config.selector, "carousel stopped");
                        break;
                    }
                }
            }
        });

        Some(CarouselHandle { shutdown_tx })
    }
}

/// Writes each slide's translateX offset relative to the current slide.
fn position(surface: &dyn Surface, config: &CarouselConfig, current: usize) {
    for index in 0..config.slide_count {
        let offset = (index as i64 - current as i64) * 100;
        let selector = format!(
            "{} {}:nth-of-type({})",
            config.selector,
            dom::CAROUSEL_SLIDE,
            index + 1
        );
        surface.set_style(&selector, "transform", &format!("translateX({}%)", offset));
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
