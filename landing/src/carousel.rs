//! Browser-side carousel: a shared [`Paginator`] driven by a `setInterval` timer.
//!
//! The paginator lives in a `StoredValue`; its observer mirrors every index
//! change into a signal the view reads. The interval handle is owned by the
//! same reactive scope and cleared in `on_cleanup`, so unmounting a section
//! always stops its timer.

use std::time::Duration;

use allyconnect_core::config::DeckConfig;
use allyconnect_core::{OutOfRange, Paginator, PaginatorError};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// Copyable handle to one carousel. Cheap to move into event handlers.
#[derive(Clone, Copy)]
pub struct CarouselControls {
    current: ReadSignal<usize>,
    advancing: ReadSignal<bool>,
    set_advancing: WriteSignal<bool>,
    paginator: StoredValue<Paginator>,
    timer: StoredValue<Option<IntervalHandle>>,
    interval: Duration,
}

/// Build a carousel over `item_count` items for the current component.
///
/// Starts advancing immediately when the deck has `autoplay` set.
pub fn use_carousel(
    item_count: usize,
    deck: DeckConfig,
    out_of_range: OutOfRange,
) -> Result<CarouselControls, PaginatorError> {
    let mut paginator = Paginator::with_policy(item_count, out_of_range)?;
    let (current, set_current) = signal(paginator.current());
    paginator.subscribe(move |change| set_current.set(change.current));
    let (advancing, set_advancing) = signal(false);

    let controls = CarouselControls {
        current,
        advancing,
        set_advancing,
        paginator: StoredValue::new(paginator),
        timer: StoredValue::new(None),
        interval: deck.interval(),
    };

    if deck.autoplay {
        controls.start_auto_advance();
    }
    on_cleanup(move || controls.clear_timer());

    Ok(controls)
}

impl CarouselControls {
    pub fn current(&self) -> usize {
        self.current.get()
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.current.get() == index
    }

    pub fn is_advancing(&self) -> bool {
        self.advancing.get()
    }

    pub fn next(&self) {
        self.paginator.update_value(|p| {
            p.next();
        });
    }

    pub fn previous(&self) {
        self.paginator.update_value(|p| {
            p.previous();
        });
    }

    pub fn go_to(&self, index: usize) {
        // Rejections are already logged by the paginator; the index stays put.
        self.paginator.update_value(|p| {
            let _ = p.go_to(index);
        });
    }

    /// Start the timer, replacing any running one so the phase restarts.
    ///
    /// At most one interval is alive per carousel: the previous handle is
    /// cleared before a new one is stored, and `on_cleanup` clears whatever
    /// handle is left when the owning component unmounts.
    pub fn start_auto_advance(&self) {
        self.clear_timer();
        let paginator = self.paginator;
        match set_interval_with_handle(
            move || {
                paginator.update_value(|p| {
                    p.next();
                });
            },
            self.interval,
        ) {
            Ok(handle) => {
                self.timer.set_value(Some(handle));
                self.set_advancing.set(true);
            }
            Err(err) => {
                web_sys::console::error_2(&JsValue::from_str("carousel timer failed to start:"), &err);
                self.set_advancing.set(false);
            }
        }
    }

    pub fn stop_auto_advance(&self) {
        self.clear_timer();
        self.set_advancing.set(false);
    }

    pub fn toggle_auto_advance(&self) {
        if self.advancing.get_untracked() {
            self.stop_auto_advance();
        } else {
            self.start_auto_advance();
        }
    }

    fn clear_timer(&self) {
        if let Some(handle) = self.timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    }
}
