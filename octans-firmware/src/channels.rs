//! Shared state between the render tick task and the sampling task
//!
//! The render text, cursors and tick counter live in one [`Renderer`]
//! behind a critical-section mutex. The tick task takes the lock once per
//! tick for the state transition; the sampling task takes it only for the
//! clear-and-rewrite. A partially written text can therefore never be
//! observed by a frame.

use core::cell::RefCell;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use octans_core::render::Renderer;

/// The render state both tasks share.
pub static RENDERER: Mutex<CriticalSectionRawMutex, RefCell<Renderer>> =
    Mutex::new(RefCell::new(Renderer::new()));
