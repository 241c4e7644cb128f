#![forbid(unsafe_code)]

//! Interactive state of one rendered page.
//!
//! A [`PageModel`] owns everything on a page that reacts to the reader: the
//! navbar, the active-section tracker behind the sidebar, the expandable
//! cards of a project page, and the contact form on the home page. The static body is rendered once by the site
//! generator; the model only renders the interactive regions, each wrapped in
//! a `div[data-folio-region]` so a host can swap them in place.

use folio_content::{HOME_SECTIONS, NAV_ITEMS, PAGE_NAV_ITEMS, PROFILE, Resolved, Route};
use folio_core::{AnchorLayout, Event, SectionDescriptor};
use folio_extras::contact::{
    ContactField, ContactForm, ContactModel, ContactMsg, ContactPayload, SubmitError,
};
use folio_render::{Element, Node};
use folio_runtime::{Cmd, Model};
use folio_widgets::{
    ActiveSectionTracker, CardGroup, Navbar, SectionNav, StatefulWidget, TrackerError, Widget,
};
use tracing::debug;

/// Attribute naming an interactive region.
pub const REGION_ATTR: &str = "data-folio-region";

/// Single section used by pages without their own section list.
pub const FALLBACK_SECTIONS: &[SectionDescriptor] =
    &[SectionDescriptor::new("main", "Content", "file-text")];

#[derive(Debug, Clone, PartialEq)]
pub enum PageMsg {
    Scrolled(f64),
    Measured(AnchorLayout),
    Resized { width: u32, height: u32 },
    ToggleCard(usize),
    ToggleMenu,
    Tick,
    EditContact(ContactField, String),
    SubmitContact,
    ContactCompleted(Result<(), SubmitError>),
}

impl From<Event> for PageMsg {
    fn from(event: Event) -> Self {
        match event {
            Event::Scroll { offset } => Self::Scrolled(offset),
            Event::AnchorsMeasured(layout) => Self::Measured(layout),
            Event::Resize { width, height } => Self::Resized { width, height },
            Event::Tick => Self::Tick,
        }
    }
}

#[derive(Debug)]
pub struct PageModel {
    route: Route,
    is_home: bool,
    navbar: Navbar,
    tracker: ActiveSectionTracker,
    section_nav: SectionNav,
    cards: CardGroup,
    /// Present on the home page only.
    contact: Option<ContactModel>,
    viewport: Option<(u32, u32)>,
}

impl PageModel {
    /// Build the model for `route`. Unknown routes get the not-found page state.
    pub fn for_route(route: &Route) -> Result<Self, TrackerError> {
        let resolved = route.resolve();
        let (sections, section_nav, cards) = match resolved {
            Resolved::Home => (HOME_SECTIONS, SectionNav::new(), CardGroup::default()),
            Resolved::Post(post) => (post.sections, SectionNav::new(), CardGroup::default()),
            Resolved::Project(project) => (
                project.sections,
                SectionNav::compact(),
                CardGroup::new(project.cards),
            ),
            Resolved::BlogIndex
            | Resolved::ProjectIndex
            | Resolved::Resume(_)
            | Resolved::NotFound => (FALLBACK_SECTIONS, SectionNav::new(), CardGroup::default()),
        };
        let sections = if sections.is_empty() {
            FALLBACK_SECTIONS
        } else {
            sections
        };
        let is_home = matches!(resolved, Resolved::Home);
        let items = if is_home { NAV_ITEMS } else { PAGE_NAV_ITEMS };
        debug!(route = %route, sections = sections.len(), "page model created");
        Ok(Self {
            route: route.clone(),
            is_home,
            navbar: Navbar::new(PROFILE.name, PROFILE.title, items).resume(PROFILE.resume_path),
            tracker: ActiveSectionTracker::new(sections)?,
            section_nav,
            cards,
            contact: is_home.then(|| ContactModel::deferred(ContactForm::new())),
            viewport: None,
        })
    }

    /// Point the contact form at `endpoint`. No-op on pages without one.
    #[must_use]
    pub fn contact_endpoint(mut self, endpoint: &str) -> Self {
        if self.contact.is_some() {
            self.contact = Some(ContactModel::deferred(ContactForm::with_endpoint(endpoint)));
        }
        self
    }

    /// Shorthand for `for_route(&Route::parse(path))`.
    pub fn for_path(path: &str) -> Result<Self, TrackerError> {
        Self::for_route(&Route::parse(path))
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn tracker(&self) -> &ActiveSectionTracker {
        &self.tracker
    }

    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    pub fn cards(&self) -> &CardGroup {
        &self.cards
    }

    /// The active section id.
    pub fn active(&self) -> &'static str {
        self.tracker.active()
    }

    /// Section ids the host should measure.
    pub fn anchor_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tracker.sections().iter().map(|s| s.id)
    }

    pub fn viewport(&self) -> Option<(u32, u32)> {
        self.viewport
    }

    pub fn contact(&self) -> Option<&ContactModel> {
        self.contact.as_ref()
    }

    /// The payload of a submit that is waiting for the host to post it.
    pub fn take_contact_payload(&mut self) -> Option<ContactPayload> {
        self.contact.as_mut().and_then(ContactModel::take_pending)
    }

    pub fn navbar_region(&self) -> Node {
        region("navbar", self.navbar.render())
    }

    /// Sidebar of section links. Home has none; its sections are the navbar.
    pub fn sections_region(&self) -> Option<Node> {
        (!self.is_home).then(|| region("sections", self.section_nav.render(&self.tracker)))
    }

    pub fn cards_region(&self) -> Option<Node> {
        (!self.cards.is_empty()).then(|| region("cards", self.cards.render()))
    }

    /// Status banner and form.
    pub fn contact_region(&self) -> Option<Node> {
        self.contact.as_ref().map(|contact| {
            Element::new("div")
                .attr(REGION_ATTR, "contact")
                .children(contact.view())
                .into()
        })
    }

    fn forward_contact(&mut self, msg: ContactMsg) -> Cmd<PageMsg> {
        match self.contact.as_mut() {
            Some(contact) => contact.update(msg).map(contact_msg),
            None => {
                debug!("contact message on a page without a form");
                Cmd::none()
            }
        }
    }
}

fn region(name: &str, inner: Node) -> Node {
    Element::new("div")
        .attr(REGION_ATTR, name)
        .child(inner)
        .into()
}

fn contact_msg(msg: ContactMsg) -> PageMsg {
    match msg {
        ContactMsg::Edit(field, value) => PageMsg::EditContact(field, value),
        ContactMsg::Submit => PageMsg::SubmitContact,
        ContactMsg::Completed(result) => PageMsg::ContactCompleted(result),
        ContactMsg::Host(event) => PageMsg::from(event),
    }
}

impl Model for PageModel {
    type Message = PageMsg;

    fn update(&mut self, msg: PageMsg) -> Cmd<PageMsg> {
        match msg {
            PageMsg::Scrolled(offset) => {
                self.navbar.on_scroll(offset);
                self.tracker.on_scroll(offset);
            }
            PageMsg::Measured(layout) => {
                self.tracker.set_layout(layout);
            }
            PageMsg::Resized { width, height } => {
                self.viewport = Some((width, height));
            }
            PageMsg::ToggleCard(index) => {
                let expanded = self.cards.toggle(index);
                debug!(index, ?expanded, "card toggled");
            }
            PageMsg::ToggleMenu => self.navbar.toggle_menu(),
            PageMsg::Tick => {}
            PageMsg::EditContact(field, value) => {
                return self.forward_contact(ContactMsg::Edit(field, value));
            }
            PageMsg::SubmitContact => return self.forward_contact(ContactMsg::Submit),
            PageMsg::ContactCompleted(result) => {
                return self.forward_contact(ContactMsg::Completed(result));
            }
        }
        Cmd::none()
    }

    fn view(&self) -> Vec<Node> {
        let mut nodes = vec![self.navbar_region()];
        nodes.extend(self.sections_region());
        nodes.extend(self.cards_region());
        nodes.extend(self.contact_region());
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_extras::contact::{ERROR_MESSAGE, SUCCESS_MESSAGE, SubmitStatus};
    use folio_render::HtmlPresenter;
    use folio_runtime::ProgramSimulator;
    use pretty_assertions::assert_eq;

    fn efs_layout() -> AnchorLayout {
        AnchorLayout::from_offsets([
            ("introduction", 0.0),
            ("problem", 800.0),
            ("solution", 1600.0),
            ("results", 2400.0),
            ("lessons", 3200.0),
        ])
    }

    fn regions(nodes: &[Node]) -> Vec<String> {
        nodes
            .iter()
            .filter_map(Node::as_element)
            .filter_map(|el| el.get_attr(REGION_ATTR).map(str::to_owned))
            .collect()
    }

    #[test]
    fn post_tracks_sections_as_the_reader_scrolls() {
        let page = PageModel::for_path("/blog/aws-efs-latency-solutions").unwrap();
        let mut sim = ProgramSimulator::new(page);
        sim.init();
        sim.inject_event(Event::AnchorsMeasured(efs_layout()));
        assert_eq!(sim.model().active(), "introduction");

        sim.inject_event(Event::scroll(750.0));
        assert_eq!(sim.model().active(), "problem");
        assert!(sim.model().navbar().is_scrolled());

        sim.inject_event(Event::scroll(0.0));
        assert_eq!(sim.model().active(), "introduction");
        assert!(!sim.model().navbar().is_scrolled());
    }

    #[test]
    fn active_link_is_marked_in_the_sidebar() {
        let mut page = PageModel::for_path("/blog/aws-efs-latency-solutions").unwrap();
        page.update(PageMsg::Measured(efs_layout()));
        page.update(PageMsg::Scrolled(1550.0));
        let Some(Node::Element(sidebar)) = page.sections_region() else {
            panic!("post pages have a sidebar");
        };
        let current: Vec<_> = sidebar
            .find_all(&|e| e.get_attr("aria-current").is_some())
            .iter()
            .filter_map(|e| e.get_attr("data-section"))
            .collect();
        assert_eq!(current, vec!["solution"]);
    }

    #[test]
    fn project_cards_expand_one_at_a_time() {
        let mut page = PageModel::for_path("/projects/aws-infrastructure").unwrap();
        assert_eq!(page.cards().len(), 3);
        page.update(PageMsg::ToggleCard(0));
        page.update(PageMsg::ToggleCard(2));
        assert_eq!(page.cards().expanded(), Some(2));
        page.update(PageMsg::ToggleCard(2));
        assert_eq!(page.cards().expanded(), None);
        page.update(PageMsg::ToggleCard(42));
        assert_eq!(page.cards().expanded(), None);
        assert_eq!(regions(&page.view()), vec!["navbar", "sections", "cards"]);
    }

    #[test]
    fn home_has_no_sidebar() {
        let page = PageModel::for_route(&Route::Home).unwrap();
        assert_eq!(page.anchor_ids().collect::<Vec<_>>(), vec![
            "home",
            "about",
            "experience",
            "projects",
            "blog",
            "contact"
        ]);
        assert_eq!(regions(&page.view()), vec!["navbar", "contact"]);
    }

    #[test]
    fn unknown_routes_fall_back_to_a_single_section() {
        for path in ["/blog/missing", "/nowhere", "/projects"] {
            let mut page = PageModel::for_path(path).unwrap();
            assert_eq!(page.active(), "main", "{path}");
            page.update(PageMsg::Scrolled(5000.0));
            assert_eq!(page.active(), "main", "{path}");
        }
    }

    #[test]
    fn menu_and_viewport_messages() {
        let mut page = PageModel::for_route(&Route::Home).unwrap();
        page.update(PageMsg::ToggleMenu);
        assert!(page.navbar().is_menu_open());
        page.update(PageMsg::from(Event::Resize {
            width: 390,
            height: 844,
        }));
        assert_eq!(page.viewport(), Some((390, 844)));
    }

    fn fill_contact(page: &mut PageModel) {
        for (field, value) in [
            (ContactField::Name, "Ada"),
            (ContactField::Email, "ada@example.com"),
            (ContactField::Message, "Let's talk"),
        ] {
            page.update(PageMsg::EditContact(field, value.into()));
        }
    }

    #[test]
    fn home_contact_submit_waits_for_the_host() {
        let mut page =
            PageModel::for_route(&Route::Home).unwrap().contact_endpoint("https://example.test/f/1");
        assert_eq!(page.contact().unwrap().endpoint(), "https://example.test/f/1");
        fill_contact(&mut page);
        assert!(page.update(PageMsg::SubmitContact).is_none());
        assert_eq!(page.contact().unwrap().status(), SubmitStatus::Submitting);

        let payload = page.take_contact_payload().unwrap();
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.subject, None);
        assert_eq!(page.take_contact_payload(), None);

        let html = HtmlPresenter::new().render_node(&page.contact_region().unwrap());
        assert!(html.contains("Sending..."), "{html}");
    }

    #[test]
    fn contact_outcomes_render_in_the_region() {
        let mut page = PageModel::for_route(&Route::Home).unwrap();
        fill_contact(&mut page);
        page.update(PageMsg::SubmitContact);
        page.update(PageMsg::ContactCompleted(Err(SubmitError::Rejected(500))));
        let html = HtmlPresenter::new().render_node(&page.contact_region().unwrap());
        assert!(html.contains(ERROR_MESSAGE));
        assert!(html.contains(r#"value="Ada""#));

        page.update(PageMsg::SubmitContact);
        page.update(PageMsg::ContactCompleted(Ok(())));
        let html = HtmlPresenter::new().render_node(&page.contact_region().unwrap());
        assert!(html.contains(SUCCESS_MESSAGE));
        assert!(!html.contains(r#"value="Ada""#));
    }

    #[test]
    fn pages_without_a_form_ignore_contact_messages() {
        let mut page = PageModel::for_path("/blog").unwrap().contact_endpoint("https://x.test");
        assert!(page.contact().is_none());
        assert!(page.contact_region().is_none());
        assert!(page.update(PageMsg::SubmitContact).is_none());
        assert_eq!(page.take_contact_payload(), None);
    }

    #[test]
    fn frames_reflect_state() {
        let page = PageModel::for_path("/projects/eks-cicd").unwrap();
        let mut sim = ProgramSimulator::new(page);
        sim.init();
        let before = sim.capture_frame().to_owned();
        assert!(before.contains("data-folio-region=\"cards\""));
        assert!(!before.contains("aria-expanded=\"true\""));
        sim.send(PageMsg::ToggleCard(1));
        let after = sim.capture_frame();
        assert!(after.contains("aria-expanded=\"true\""));
    }
}
