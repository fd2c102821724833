//! End-to-end flows over a realistic sample page.

use std::time::{Duration, Instant};

use vitrina_dom::{Document, NodeId, Overflow, Rect, Viewport};
use vitrina_engine::{
    COUNT_TICK, Key, Notice, Page, PageEvent, RESIZE_DEBOUNCE, SUBMIT_DELAY,
};

struct SamplePage {
    header: NodeId,
    menu_btn: NodeId,
    nav_menu: NodeId,
    nav_link: NodeId,
    name: NodeId,
    phone: NodeId,
    question: NodeId,
    submit: NodeId,
    form: NodeId,
    modal: NodeId,
    accept_btn: NodeId,
    privacy_link: NodeId,
    stat_block: NodeId,
    stat_label: NodeId,
    about: NodeId,
}

/// A trimmed-down version of the real marketing page: fixed header with the
/// mobile menu, an about section, a stats row, the contact form, and the
/// privacy modal.
fn sample_page() -> (Document, SamplePage) {
    let mut doc = Document::new(Viewport {
        width: 1024.0,
        height: 768.0,
    });
    let body = doc.body();

    let header = doc.create_element("header");
    doc.set_attr(header, "class", "header");
    doc.set_rect(header, Rect::new(0.0, 0.0, 1024.0, 80.0));
    doc.append_child(body, header);

    let menu_btn = doc.create_element("button");
    doc.set_attr(menu_btn, "class", "menu-btn");
    doc.append_child(header, menu_btn);

    let nav_menu = doc.create_element("nav");
    doc.set_attr(nav_menu, "class", "nav-menu");
    doc.append_child(header, nav_menu);

    let nav_link = doc.create_element("a");
    doc.set_attr(nav_link, "href", "#about");
    doc.append_child(nav_menu, nav_link);

    let about = doc.create_element("section");
    doc.set_attr(about, "id", "about");
    doc.set_attr(about, "class", "about-text");
    doc.set_rect(about, Rect::new(0.0, 900.0, 1024.0, 400.0));
    doc.append_child(body, about);

    let stat_block = doc.create_element("div");
    doc.set_attr(stat_block, "class", "stat-block");
    doc.set_rect(stat_block, Rect::new(0.0, 1600.0, 300.0, 200.0));
    doc.append_child(body, stat_block);
    let stat_label = doc.create_element("h4");
    doc.append_child(stat_block, stat_label);
    let stat_text = doc.create_text("500+ клиентов");
    doc.append_child(stat_label, stat_text);

    let form_container = doc.create_element("div");
    doc.set_attr(form_container, "class", "form-container");
    doc.set_rect(form_container, Rect::new(0.0, 2200.0, 1024.0, 500.0));
    doc.append_child(body, form_container);

    let form = doc.create_element("form");
    doc.set_attr(form, "id", "contact-form");
    doc.append_child(form_container, form);
    let name = doc.create_element("input");
    doc.set_attr(name, "name", "name");
    doc.append_child(form, name);
    let phone = doc.create_element("input");
    doc.set_attr(phone, "name", "phone");
    doc.append_child(form, phone);
    let question = doc.create_element("textarea");
    doc.set_attr(question, "name", "question");
    doc.append_child(form, question);
    let submit = doc.create_element("button");
    doc.set_attr(submit, "type", "submit");
    doc.append_child(form, submit);
    let submit_label = doc.create_text("Отправить вопрос");
    doc.append_child(submit, submit_label);

    let privacy_link = doc.create_element("a");
    doc.set_attr(privacy_link, "class", "privacy-link");
    doc.set_attr(privacy_link, "href", "#privacy-modal");
    doc.append_child(form, privacy_link);

    let modal = doc.create_element("div");
    doc.set_attr(modal, "id", "privacy-modal");
    doc.set_attr(modal, "aria-hidden", "true");
    doc.append_child(body, modal);
    let modal_content = doc.create_element("div");
    doc.append_child(modal, modal_content);
    let close_btn = doc.create_element("button");
    doc.set_attr(close_btn, "class", "modal-close");
    doc.append_child(modal_content, close_btn);
    let accept_btn = doc.create_element("button");
    doc.set_attr(accept_btn, "class", "accept-btn");
    doc.append_child(modal_content, accept_btn);

    let ids = SamplePage {
        header,
        menu_btn,
        nav_menu,
        nav_link,
        name,
        phone,
        question,
        submit,
        form,
        modal,
        accept_btn,
        privacy_link,
        stat_block,
        stat_label,
        about,
    };
    (doc, ids)
}

fn type_valid_submission(page: &mut Page, ids: &SamplePage, now: Instant) {
    page.handle(
        PageEvent::Input {
            target: ids.name,
            value: "Ал".to_string(),
        },
        now,
    );
    page.handle(
        PageEvent::Input {
            target: ids.phone,
            value: "89991234567".to_string(),
        },
        now,
    );
    page.handle(
        PageEvent::Input {
            target: ids.question,
            value: "Есть ли у вас доставка?".to_string(),
        },
        now,
    );
}

#[test]
fn startup_marks_body_and_preloads_images() {
    let (doc, _ids) = sample_page();
    let page = Page::open(doc, Instant::now());
    let body = page.document().body();
    assert!(page.document().has_class(body, "loaded"));
    assert_eq!(page.preloaded_images().len(), 4);
}

#[test]
fn regions_in_the_initial_viewport_reveal_at_startup() {
    let (doc, ids) = sample_page();
    let page = Page::open(doc, Instant::now());
    // Header is at y=0 but not observed; the about section starts at 900,
    // past the 768 px viewport, so nothing is revealed yet.
    assert!(!page.reveal_status(ids.about).revealed);

    let (mut doc, ids) = sample_page();
    doc.scroll_to(400.0);
    let page = Page::open(doc, Instant::now());
    assert!(page.reveal_status(ids.about).revealed);
}

#[test]
fn full_submission_round_trip() {
    let (doc, ids) = sample_page();
    let base = Instant::now();
    let mut page = Page::open(doc, base);

    type_valid_submission(&mut page, &ids, base);
    // The phone field was re-rendered live on input.
    assert_eq!(page.document().value(ids.phone), "+7 (999) 123-45-67");

    page.handle(PageEvent::Submit { target: ids.form }, base);
    assert!(page.document().is_disabled(ids.submit));
    assert_eq!(page.document().text_content(ids.submit), "Отправка...");
    assert_eq!(page.next_deadline(), Some(base + SUBMIT_DELAY));

    // Nothing lands before the simulated latency elapses.
    page.advance(base + Duration::from_millis(1000));
    assert!(page.take_notices().is_empty());

    page.advance(base + SUBMIT_DELAY);
    assert_eq!(page.take_notices(), vec![Notice::SubmissionDelivered]);
    assert_eq!(page.document().value(ids.name), "");
    assert_eq!(page.document().value(ids.phone), "");
    assert_eq!(page.document().value(ids.question), "");
    assert!(!page.document().is_disabled(ids.submit));
    assert_eq!(page.document().text_content(ids.submit), "Отправить вопрос");
}

#[test]
fn invalid_submission_aggregates_errors_and_consumes_gate() {
    let (doc, ids) = sample_page();
    let base = Instant::now();
    let mut page = Page::open(doc, base);

    page.handle(
        PageEvent::Input {
            target: ids.name,
            value: "А".to_string(),
        },
        base,
    );
    page.handle(
        PageEvent::Input {
            target: ids.question,
            value: "хм".to_string(),
        },
        base,
    );
    page.handle(PageEvent::Submit { target: ids.form }, base);

    let notices = page.take_notices();
    let [Notice::ValidationFailed { errors }] = notices.as_slice() else {
        panic!("expected one validation notice, got {notices:?}");
    };
    assert_eq!(errors.len(), 3);
    // Entered values are kept for correction.
    assert_eq!(page.document().value(ids.name), "А");

    // The failed attempt consumed the gate slot.
    type_valid_submission(&mut page, &ids, base);
    page.handle(
        PageEvent::Submit { target: ids.form },
        base + Duration::from_secs(3),
    );
    assert_eq!(page.take_notices(), vec![Notice::RateLimited]);

    page.handle(
        PageEvent::Submit { target: ids.form },
        base + Duration::from_secs(30),
    );
    assert!(page.take_notices().is_empty());
    assert!(page.document().is_disabled(ids.submit));
}

#[test]
fn menu_toggles_and_collapses_on_outside_click() {
    let (doc, ids) = sample_page();
    let base = Instant::now();
    let mut page = Page::open(doc, base);

    page.handle(PageEvent::Click { target: ids.menu_btn }, base);
    assert!(page.document().has_class(ids.nav_menu, "active"));
    assert!(page.document().has_class(ids.menu_btn, "active"));
    assert_eq!(page.document().body_overflow(), Overflow::Hidden);

    // Clicking the button again collapses rather than triggering the
    // outside-click path.
    page.handle(PageEvent::Click { target: ids.menu_btn }, base);
    assert!(!page.document().has_class(ids.nav_menu, "active"));
    assert_eq!(page.document().body_overflow(), Overflow::Unset);

    page.handle(PageEvent::Click { target: ids.menu_btn }, base);
    page.handle(PageEvent::Click { target: ids.about }, base);
    assert!(!page.document().has_class(ids.nav_menu, "active"));
    assert_eq!(page.document().body_overflow(), Overflow::Unset);
}

#[test]
fn menu_link_scrolls_collapses_and_reveals() {
    let (doc, ids) = sample_page();
    let base = Instant::now();
    let mut page = Page::open(doc, base);

    page.handle(PageEvent::Click { target: ids.menu_btn }, base);
    page.handle(PageEvent::Click { target: ids.nav_link }, base);

    // Scrolled to the about section minus the 80 px header.
    assert_eq!(page.document().scroll_y(), 820.0);
    // The menu collapsed on link selection.
    assert!(!page.document().has_class(ids.nav_menu, "active"));
    // The about section entered the trigger zone and revealed.
    assert!(page.reveal_status(ids.about).revealed);
    assert!(page.document().has_class(ids.about, "visible"));
}

#[test]
fn stat_block_animates_once_over_its_duration() {
    let (doc, ids) = sample_page();
    let base = Instant::now();
    let mut page = Page::open(doc, base);

    page.handle(PageEvent::Scrolled { y: 1500.0 }, base);
    assert!(page.reveal_status(ids.stat_block).revealed);
    assert!(page.reveal_status(ids.stat_block).animated);

    // Pump deadlines exactly as an embedder would.
    let mut last = base;
    while let Some(deadline) = page.next_deadline() {
        page.advance(deadline);
        last = deadline;
    }
    assert_eq!(page.document().text_content(ids.stat_label), "500+ клиентов");
    let elapsed = last - base;
    assert!(
        elapsed >= Duration::from_millis(1490) && elapsed <= Duration::from_millis(1600),
        "animation took {elapsed:?}"
    );

    // Leaving and re-entering the zone never restarts the counter.
    page.handle(PageEvent::Scrolled { y: 0.0 }, last);
    page.handle(PageEvent::Scrolled { y: 1500.0 }, last);
    assert_eq!(page.next_deadline(), None);
}

#[test]
fn mid_animation_label_shows_intermediate_count() {
    let (doc, ids) = sample_page();
    let base = Instant::now();
    let mut page = Page::open(doc, base);

    page.handle(PageEvent::Scrolled { y: 1500.0 }, base);
    page.advance(base + COUNT_TICK);
    let text = page.document().text_content(ids.stat_label);
    assert_eq!(text, "5+ клиентов");
}

#[test]
fn modal_round_trip_through_events() {
    let (doc, ids) = sample_page();
    let base = Instant::now();
    let mut page = Page::open(doc, base);

    page.handle(PageEvent::Click { target: ids.privacy_link }, base);
    assert!(page.document().has_class(ids.modal, "active"));
    assert_eq!(page.document().attr(ids.modal, "aria-hidden"), Some("false"));
    assert_eq!(page.document().body_overflow(), Overflow::Hidden);

    page.handle(PageEvent::KeyDown { key: Key::Escape }, base);
    assert!(!page.document().has_class(ids.modal, "active"));
    assert_eq!(page.document().attr(ids.modal, "aria-hidden"), Some("true"));
    assert_eq!(page.document().body_overflow(), Overflow::Auto);

    page.handle(PageEvent::Click { target: ids.privacy_link }, base);
    page.handle(PageEvent::Click { target: ids.accept_btn }, base);
    assert_eq!(page.take_notices(), vec![Notice::PrivacyAccepted]);
    assert!(!page.document().has_class(ids.modal, "active"));
}

#[test]
fn resize_is_debounced_and_drives_header_state() {
    let (doc, ids) = sample_page();
    let base = Instant::now();
    let mut page = Page::open(doc, base);
    assert!(!page.document().has_class(ids.header, "mobile"));

    page.handle(
        PageEvent::Resized {
            width: 500.0,
            height: 800.0,
        },
        base,
    );
    // Not yet: the layout waits out the quiescence window.
    assert!(!page.document().has_class(ids.header, "mobile"));
    assert_eq!(page.next_deadline(), Some(base + RESIZE_DEBOUNCE));

    page.advance(base + RESIZE_DEBOUNCE);
    assert!(page.document().has_class(ids.header, "mobile"));

    // Back to desktop with an expanded menu: the menu force-closes.
    page.handle(PageEvent::Click { target: ids.menu_btn }, base + RESIZE_DEBOUNCE);
    assert!(page.document().has_class(ids.nav_menu, "active"));
    let later = base + RESIZE_DEBOUNCE + Duration::from_secs(1);
    page.handle(
        PageEvent::Resized {
            width: 1024.0,
            height: 768.0,
        },
        later,
    );
    page.advance(later + RESIZE_DEBOUNCE);
    assert!(!page.document().has_class(ids.header, "mobile"));
    assert!(!page.document().has_class(ids.nav_menu, "active"));
    assert_eq!(page.document().body_overflow(), Overflow::Unset);
}

#[test]
fn rapid_resizes_collapse_into_one_application() {
    let (doc, ids) = sample_page();
    let base = Instant::now();
    let mut page = Page::open(doc, base);

    for step in 0u16..5 {
        page.handle(
            PageEvent::Resized {
                width: 900.0 - f32::from(step) * 100.0,
                height: 800.0,
            },
            base + Duration::from_millis(u64::from(step) * 50),
        );
    }
    let last_poke = base + Duration::from_millis(200);
    assert_eq!(page.next_deadline(), Some(last_poke + RESIZE_DEBOUNCE));
    page.advance(last_poke + RESIZE_DEBOUNCE);
    // Final width 500 < 768: mobile.
    assert!(page.document().has_class(ids.header, "mobile"));
    assert_eq!(page.next_deadline(), None);
}
