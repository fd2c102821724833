//! Vitrina demo - runs the page engine against the sample page in real time.
//!
//! The script walks through every enhancement: the mobile menu, anchor
//! scrolling with reveal, the stat counters, live phone formatting, a full
//! form submission with the simulated delivery delay, and the privacy modal.
//! Notices that a page shell would alert are logged instead.

mod page;

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use vitrina_dom::Viewport;
use vitrina_engine::{Key, Page, PageEvent};

const FRAME_DURATION: Duration = Duration::from_millis(16);

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn report_notices(page: &mut Page) {
    for notice in page.take_notices() {
        tracing::info!("[alert] {}", notice.message());
    }
}

/// Drive the engine's deadlines with real time until it goes idle.
async fn pump_until_idle(page: &mut Page) {
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    while page.next_deadline().is_some() {
        frames.tick().await;
        page.advance(Instant::now());
        report_notices(page);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let (doc, handles) = page::build(Viewport {
        width: 1024.0,
        height: 768.0,
    });
    let mut page = Page::open(doc, Instant::now());

    // Open the mobile menu, then jump to the about section from it.
    page.handle(
        PageEvent::Click {
            target: handles.menu_btn,
        },
        Instant::now(),
    );
    page.handle(
        PageEvent::Click {
            target: handles.nav_about,
        },
        Instant::now(),
    );
    tracing::info!(y = page.document().scroll_y(), "jumped to #about");

    // Scroll on to the stats row and let the counters run out.
    page.handle(PageEvent::Scrolled { y: 1400.0 }, Instant::now());
    pump_until_idle(&mut page).await;
    for label in &handles.stat_labels {
        tracing::info!("stat settled: {}", page.document().text_content(*label));
    }

    // Fill the form, phone digit by digit so the live formatter shows.
    page.handle(
        PageEvent::Input {
            target: handles.name,
            value: "Алексей".to_string(),
        },
        Instant::now(),
    );
    for digit in "89991234567".chars() {
        let value = format!("{}{digit}", page.document().value(handles.phone));
        page.handle(
            PageEvent::Input {
                target: handles.phone,
                value,
            },
            Instant::now(),
        );
    }
    tracing::info!(
        "phone field reads {:?}",
        page.document().value(handles.phone)
    );
    page.handle(
        PageEvent::Input {
            target: handles.question,
            value: "Подскажите сроки поставки оборудования?".to_string(),
        },
        Instant::now(),
    );

    // Submit and wait out the simulated delivery.
    page.handle(
        PageEvent::Submit {
            target: handles.form,
        },
        Instant::now(),
    );
    pump_until_idle(&mut page).await;

    // Read the privacy policy and accept it.
    page.handle(
        PageEvent::Click {
            target: handles.privacy_link,
        },
        Instant::now(),
    );
    page.handle(
        PageEvent::Click {
            target: handles.accept_btn,
        },
        Instant::now(),
    );
    page.handle(PageEvent::KeyDown { key: Key::Escape }, Instant::now());
    report_notices(&mut page);

    tracing::info!("demo complete");
    Ok(())
}
