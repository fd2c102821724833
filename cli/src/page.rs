//! The sample marketing page the demo runs against.
//!
//! Layout rectangles approximate the real page: a fixed 80 px header, a hero
//! screen, the about section, a three-block stats row, and the contact form
//! with the privacy modal at the bottom.

use vitrina_dom::{Document, NodeId, Rect, Viewport};

pub struct PageHandles {
    pub menu_btn: NodeId,
    pub nav_about: NodeId,
    pub name: NodeId,
    pub phone: NodeId,
    pub question: NodeId,
    pub form: NodeId,
    pub privacy_link: NodeId,
    pub accept_btn: NodeId,
    pub stat_labels: Vec<NodeId>,
}

pub fn build(viewport: Viewport) -> (Document, PageHandles) {
    let mut doc = Document::new(viewport);
    let body = doc.body();

    let header = doc.create_element("header");
    doc.set_attr(header, "class", "header");
    doc.set_rect(header, Rect::new(0.0, 0.0, viewport.width, 80.0));
    doc.append_child(body, header);

    let menu_btn = doc.create_element("button");
    doc.set_attr(menu_btn, "class", "menu-btn");
    doc.append_child(header, menu_btn);

    let nav = doc.create_element("nav");
    doc.set_attr(nav, "class", "nav-menu");
    doc.append_child(header, nav);
    let nav_about = nav_link(&mut doc, nav, "#about", "О компании");
    nav_link(&mut doc, nav, "#stats", "Цифры");
    nav_link(&mut doc, nav, "#contacts", "Контакты");

    let about = doc.create_element("section");
    doc.set_attr(about, "id", "about");
    doc.set_attr(about, "class", "about-text");
    doc.set_rect(about, Rect::new(0.0, 900.0, viewport.width, 500.0));
    doc.append_child(body, about);

    let stats = doc.create_element("section");
    doc.set_attr(stats, "id", "stats");
    doc.set_rect(stats, Rect::new(0.0, 1500.0, viewport.width, 300.0));
    doc.append_child(body, stats);
    let stat_labels = vec![
        stat_block(&mut doc, stats, 0.0, "500+ клиентов"),
        stat_block(&mut doc, stats, 360.0, "12 лет на рынке"),
        stat_block(&mut doc, stats, 720.0, "98 процентов довольны"),
    ];

    let contacts = doc.create_element("section");
    doc.set_attr(contacts, "id", "contacts");
    doc.set_attr(contacts, "class", "form-container");
    doc.set_rect(contacts, Rect::new(0.0, 1900.0, viewport.width, 700.0));
    doc.append_child(body, contacts);

    let form = doc.create_element("form");
    doc.set_attr(form, "id", "contact-form");
    doc.append_child(contacts, form);
    let name = labeled_input(&mut doc, form, "input", "name");
    let phone = labeled_input(&mut doc, form, "input", "phone");
    let question = labeled_input(&mut doc, form, "textarea", "question");
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
    let modal_body = doc.create_element("div");
    doc.append_child(modal, modal_body);
    let close_btn = doc.create_element("button");
    doc.set_attr(close_btn, "class", "modal-close");
    doc.append_child(modal_body, close_btn);
    let accept_btn = doc.create_element("button");
    doc.set_attr(accept_btn, "class", "accept-btn");
    doc.append_child(modal_body, accept_btn);

    (
        doc,
        PageHandles {
            menu_btn,
            nav_about,
            name,
            phone,
            question,
            form,
            privacy_link,
            accept_btn,
            stat_labels,
        },
    )
}

fn nav_link(doc: &mut Document, nav: NodeId, href: &str, label: &str) -> NodeId {
    let link = doc.create_element("a");
    doc.set_attr(link, "href", href);
    let text = doc.create_text(label);
    doc.append_child(nav, link);
    doc.append_child(link, text);
    link
}

fn stat_block(doc: &mut Document, row: NodeId, x: f32, label: &str) -> NodeId {
    let block = doc.create_element("div");
    doc.set_attr(block, "class", "stat-block");
    doc.set_rect(block, Rect::new(x, 1550.0, 300.0, 200.0));
    doc.append_child(row, block);
    let heading = doc.create_element("h4");
    doc.append_child(block, heading);
    let text = doc.create_text(label);
    doc.append_child(heading, text);
    heading
}

fn labeled_input(doc: &mut Document, form: NodeId, tag: &str, field: &str) -> NodeId {
    let input = doc.create_element(tag);
    doc.set_attr(input, "name", field);
    doc.append_child(form, input);
    input
}
