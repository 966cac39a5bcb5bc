//! Per-page renderers and controllers.
//!
//! ARCHITECTURE
//! ============
//! Every page module has two halves. The pure half turns records plus a
//! `PreferenceSnapshot` into HTML strings and is tested natively. The
//! hydrate half (`start`) fetches fixtures, paints the containers, localizes
//! them, and wires delegated listeners that toggle preferences and apply
//! node-level patches.
//!
//! Each controller owns its `PreferenceRegistry` through a [`Session`]; there
//! is no global preference state.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod community;
pub(crate) mod contact_form;
pub(crate) mod detail;
pub mod event_detail;
pub mod events;
pub mod home;
pub mod language;
pub mod tip_detail;
pub mod tips;

/// The static pages that run a controller. Each HTML file passes its name to
/// the `startPage` entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Tips,
    Events,
    Community,
    TipDetail,
    EventDetail,
    Language,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Tips,
        Page::Events,
        Page::Community,
        Page::TipDetail,
        Page::EventDetail,
        Page::Language,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Tips => "tips",
            Self::Events => "events",
            Self::Community => "community",
            Self::TipDetail => "tip-detail",
            Self::EventDetail => "event-detail",
            Self::Language => "language",
        }
    }

    /// Page for a name as passed from HTML. `index` is accepted for home.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().trim_end_matches(".html");
        if name == "index" {
            return Some(Self::Home);
        }
        Self::ALL.into_iter().find(|page| page.name() == name)
    }
}

#[cfg(feature = "hydrate")]
pub use session::{Session, run};

#[cfg(feature = "hydrate")]
mod session {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::Page;
    use crate::components::cards::ItemKind;
    use crate::components::patch::bookmark_patches;
    use crate::i18n::Localizer;
    use crate::state::preferences::PreferenceRegistry;
    use crate::storage::browser::BrowserStorage;
    use crate::util::{date, dom};

    /// What every page controller shares: the preference registry over
    /// browser storage and the active localizer.
    #[derive(Clone)]
    pub struct Session {
        pub prefs: Rc<PreferenceRegistry<BrowserStorage>>,
        pub localizer: Rc<RefCell<Localizer>>,
    }

    impl Session {
        /// Load the stored language and localize the static markup.
        pub async fn start() -> Self {
            let prefs = Rc::new(PreferenceRegistry::new(BrowserStorage));
            let localizer = Localizer::init(prefs.as_ref()).await;
            localizer.apply_to_document();
            Self { prefs, localizer: Rc::new(RefCell::new(localizer)) }
        }

        /// Paint `html` into `#container_id` and localize the new fragment.
        pub fn paint(&self, container_id: &str, html: &str) {
            let Some(container) = dom::set_html(container_id, html) else {
                log::warn!("container #{container_id} not found");
                return;
            };
            self.localizer.borrow().apply_within(&container);
        }

        /// Flip a card bookmark and patch its icon.
        pub fn toggle_card_bookmark(&self, kind: ItemKind, id: &str) {
            match self.prefs.toggle_bookmark(id) {
                Ok(bookmarked) => dom::apply_patches(&bookmark_patches(kind, id, bookmarked)),
                Err(err) => log::warn!("bookmark {id} not saved: {err}"),
            }
        }
    }

    /// Boot `page`: localization, footer year, then the page controller.
    pub async fn run(page: Page) {
        let session = Session::start().await;
        dom::fill_year(date::current_year());
        log::info!("starting page {}", page.name());
        match page {
            Page::Home => super::home::start(session).await,
            Page::Tips => super::tips::start(session).await,
            Page::Events => super::events::start(session).await,
            Page::Community => super::community::start(session).await,
            Page::TipDetail => super::tip_detail::start(session).await,
            Page::EventDetail => super::event_detail::start(session).await,
            Page::Language => super::language::start(session).await,
        }
    }
}
