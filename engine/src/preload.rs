//! Critical image preloading.
//!
//! The page shell warms the cache for above-the-fold imagery before the
//! first paint needs it. The simulation records the request list instead of
//! fetching; which images are critical is fixed.

/// Paths warmed at startup, in request order.
pub const CRITICAL_IMAGES: [&str; 4] = [
    "./images/logo-main.png",
    "./images/pick1.jpg",
    "./images/pick2.jpg",
    "./images/pick3.jpg",
];

/// Request the critical images. Exposed for external invocation alongside
/// `Page::handle_resize`.
#[must_use]
pub fn preload_critical_images() -> &'static [&'static str] {
    tracing::debug!(count = CRITICAL_IMAGES.len(), "preloading critical images");
    &CRITICAL_IMAGES
}
