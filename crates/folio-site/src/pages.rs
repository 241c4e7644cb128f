#![forbid(unsafe_code)]

//! Full-page composition.
//!
//! Each route becomes a [`Document`]: the interactive regions come from a
//! fresh [`PageModel`] in its initial state, and everything else is static
//! markup built here. Every page loads [`SCRIPT_PATH`], which hands those
//! regions to the browser bridge. Bodies of posts and projects go through the markdown
//! renderer, so code fences are highlighted and mermaid blocks become SVG at
//! generation time.

use folio_content::{
    CONTACT_LINKS, ContactLink, EXPERIENCE, Experience, NOT_FOUND_TITLE, POSTS, PROFILE,
    PROJECTS, Post, Project, Resolved, Route, SKILLS, SkillCategory,
};
use folio_core::IconRef;
use folio_extras::markdown::MarkdownRenderer;
use folio_render::{Document, Element, HtmlPresenter, Node};
use folio_web::PageModel;
use folio_widgets::{Badge, TrackerError, Widget};

/// Site-relative path of the generated stylesheet.
pub const STYLESHEET_PATH: &str = "/styles.css";

/// Site-relative path of the module that starts the browser bridge.
pub const SCRIPT_PATH: &str = "/folio.js";

/// Attribute on `<main>` naming the route, for the browser bridge.
pub const PAGE_ATTR: &str = "data-folio-page";

/// Builds documents for routes.
pub struct SiteRenderer {
    markdown: MarkdownRenderer,
    presenter: HtmlPresenter,
    endpoint: String,
}

impl SiteRenderer {
    /// `endpoint` is the contact form `action`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            markdown: MarkdownRenderer::new(),
            presenter: HtmlPresenter::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Render `route` to a complete HTML page.
    pub fn render(&self, route: &Route) -> Result<String, TrackerError> {
        Ok(self.document(route)?.to_html(&self.presenter))
    }

    pub fn document(&self, route: &Route) -> Result<Document, TrackerError> {
        let resolved = route.resolve();
        let page = PageModel::for_route(route)?.contact_endpoint(&self.endpoint);
        let main = match resolved {
            Resolved::Home => self.home(&page),
            Resolved::BlogIndex => blog_index(),
            Resolved::Post(post) => self.post(post, &page),
            Resolved::ProjectIndex => project_index(),
            Resolved::Project(project) => self.project(project, &page),
            Resolved::Resume(path) => resume(path),
            Resolved::NotFound => not_found(),
        };
        let main = main.attr(PAGE_ATTR, route.path());
        Ok(Document::new(resolved.meta())
            .stylesheet(STYLESHEET_PATH)
            .script(SCRIPT_PATH)
            .body([page.navbar_region(), main.into(), footer()]))
    }

    fn home(&self, page: &PageModel) -> Element {
        Element::new("main")
            .child(hero())
            .child(about())
            .child(experience())
            .child(project_cards())
            .child(post_cards())
            .child(contact(page))
    }

    fn post(&self, post: &Post, page: &PageModel) -> Element {
        let header = Element::new("header")
            .class("mb-8")
            .child(Badge::new(post.category).render())
            .child(
                Element::new("h1")
                    .class("text-4xl font-bold text-gray-900 mt-4")
                    .text(post.title),
            )
            .child(
                Element::new("p")
                    .class("text-gray-600 mt-2")
                    .text(format!("{} · {}", post.date, post.read_time)),
            );
        let tags = Element::new("section")
            .class("mt-12 pt-8 border-t border-gray-200")
            .child(Element::new("h2").class("text-lg font-semibold mb-4").text("Tags"))
            .child(badges(post.tags));
        let article = Element::new("article")
            .class("flex-1 min-w-0")
            .child(header)
            .child(Element::new("div").class("prose max-w-none").children(self.markdown.render(post.body)))
            .child(tags);
        with_sidebar(page, article)
    }

    fn project(&self, project: &Project, page: &PageModel) -> Element {
        let hero = Element::new("header")
            .class("bg-gradient-to-r from-blue-600 to-indigo-700 text-white rounded-2xl p-10 mb-10")
            .child(Element::new("h1").class("text-4xl font-bold").text(project.title))
            .child(Element::new("p").class("text-xl mt-4 text-blue-100").text(project.tagline))
            .child(badges(project.tags));
        let mut article = Element::new("article")
            .class("flex-1 min-w-0")
            .child(Element::new("div").class("prose max-w-none").children(self.markdown.render(project.body)));
        if let Some(cards) = page.cards_region() {
            article.push(
                Element::new("section")
                    .class("mt-12")
                    .child(Element::new("h2").class("text-2xl font-semibold mb-6").text("Highlights"))
                    .child(cards),
            );
        }
        let body = with_sidebar(page, article);
        Element::new("main").child(hero).children(body.children)
    }
}

/// Contact details next to the live form region.
fn contact(page: &PageModel) -> Element {
    let links = Element::new("ul")
        .class("space-y-4")
        .children(CONTACT_LINKS.iter().map(contact_link));
    let available = Element::new("ul")
        .class("space-y-2 text-gray-700")
        .children(
            PROFILE
                .available_for
                .iter()
                .map(|item| Element::new("li").text(*item)),
        );
    section("contact", "Get In Touch")
        .child(
            Element::new("div")
                .class("grid lg:grid-cols-2 gap-12")
                .child(
                    Element::new("div")
                        .child(links)
                        .child(
                            Element::new("h3")
                                .class("text-xl font-semibold mt-8 mb-4")
                                .text("Available For"),
                        )
                        .child(available),
                )
                .child(
                    Element::new("div")
                        .class("bg-white rounded-2xl shadow-lg p-8")
                        .children(page.contact_region()),
                ),
        )
}

fn icon(icon: IconRef) -> Element {
    Element::new("span")
        .class(format!("icon icon-{}", icon.name()))
        .attr("aria-hidden", "true")
}

fn section(id: &str, title: &str) -> Element {
    Element::new("section")
        .id(id)
        .class("py-20 px-4 max-w-7xl mx-auto")
        .child(
            Element::new("h2")
                .class("text-3xl font-bold text-gray-900 mb-12 text-center")
                .text(title),
        )
}

fn badges(labels: &[&str]) -> Element {
    Element::new("div")
        .class("flex flex-wrap gap-2 mt-4")
        .children(labels.iter().map(|l| Badge::tag(l).render()))
}

/// Sidebar plus content, both inside a `<main>`.
fn with_sidebar(page: &PageModel, content: Element) -> Element {
    let mut row = Element::new("div").class("flex gap-8 max-w-7xl mx-auto px-4 pt-24");
    if let Some(sidebar) = page.sections_region() {
        row.push(
            Element::new("aside")
                .class("hidden lg:block w-64 shrink-0 sticky top-24 self-start")
                .child(sidebar),
        );
    }
    row.push(content);
    Element::new("main").child(row)
}

fn hero() -> Element {
    Element::new("section")
        .id("home")
        .class("min-h-screen flex flex-col justify-center items-center text-center px-4 pt-24")
        .child(Element::new("h1").class("text-5xl font-bold text-gray-900").text(PROFILE.name))
        .child(Element::new("p").class("text-2xl text-blue-600 mt-4").text(PROFILE.title))
        .child(Element::new("p").class("text-lg text-gray-600 mt-6 max-w-3xl").text(PROFILE.tagline))
        .child(badges(PROFILE.highlights))
        .child(
            Element::new("div")
                .class("flex gap-4 mt-8")
                .child(
                    Element::new("a")
                        .attr("href", "#projects")
                        .class("px-8 py-3 rounded-lg bg-blue-600 text-white")
                        .text("View My Work"),
                )
                .child(
                    Element::new("a")
                        .attr("href", PROFILE.resume_path)
                        .attr("download", "")
                        .class("px-8 py-3 rounded-lg border border-blue-600 text-blue-600")
                        .text("Download Resume"),
                ),
        )
}

fn about() -> Element {
    section("about", "About Me").child(
        Element::new("div")
            .class("grid md:grid-cols-2 lg:grid-cols-3 gap-8")
            .children(SKILLS.iter().map(skill_card)),
    )
}

fn skill_card(category: &SkillCategory) -> Element {
    Element::new("div")
        .class("bg-white rounded-xl shadow-md p-6")
        .child(icon(category.icon))
        .child(Element::new("h3").class("text-xl font-semibold mt-4 mb-4").text(category.title))
        .child(badges(category.skills))
}

fn experience() -> Element {
    section("experience", "Experience").child(
        Element::new("ol")
            .class("relative border-l-2 border-blue-200 space-y-12")
            .children(EXPERIENCE.iter().map(experience_entry)),
    )
}

fn experience_entry(entry: &Experience) -> Element {
    Element::new("li")
        .class("ml-8")
        .child(Badge::new(entry.kind).render())
        .child(Element::new("h3").class("text-2xl font-bold mt-2").text(entry.role))
        .child(
            Element::new("p")
                .class("text-blue-600 font-semibold")
                .text(format!("{} · {}", entry.company, entry.location)),
        )
        .child(Element::new("p").class("text-gray-500 text-sm").text(entry.period))
        .child(
            Element::new("ul")
                .class("list-disc pl-6 mt-4 space-y-2 text-gray-700")
                .children(entry.highlights.iter().map(|h| Element::new("li").text(*h))),
        )
}

fn project_card(project: &Project) -> Element {
    Element::new("a")
        .attr("href", project.path())
        .class("block bg-white rounded-2xl shadow-md p-6 hover:shadow-xl transition-shadow")
        .child(Element::new("h3").class("text-xl font-semibold text-gray-900").text(project.title))
        .child(Element::new("p").class("text-gray-600 mt-2").text(project.tagline))
        .child(badges(project.tags))
}

fn post_card(post: &Post) -> Element {
    Element::new("a")
        .attr("href", post.path())
        .class("block bg-white rounded-2xl shadow-md p-6 hover:shadow-xl transition-shadow")
        .child(Badge::new(post.category).render())
        .child(Element::new("h3").class("text-xl font-semibold text-gray-900 mt-3").text(post.title))
        .child(Element::new("p").class("text-gray-600 mt-2").text(post.excerpt))
        .child(
            Element::new("p")
                .class("text-gray-500 text-sm mt-4")
                .text(format!("{} · {}", post.date, post.read_time)),
        )
}

fn project_cards() -> Element {
    section("projects", "Featured Projects").child(
        Element::new("div")
            .class("grid md:grid-cols-2 gap-8")
            .children(PROJECTS.iter().map(project_card)),
    )
}

fn post_cards() -> Element {
    section("blog", "Latest Articles").child(
        Element::new("div")
            .class("grid md:grid-cols-2 gap-8")
            .children(POSTS.iter().map(post_card)),
    )
}

fn contact_link(link: &ContactLink) -> Element {
    let mut anchor = Element::new("a")
        .attr("href", link.href)
        .class("flex items-center gap-4 p-4 rounded-lg hover:bg-blue-50");
    if link.is_external() {
        anchor.set_attr("target", "_blank");
        anchor.set_attr("rel", "noopener noreferrer");
    }
    let anchor = anchor
        .child(icon(link.icon))
        .child(
            Element::new("span")
                .child(Element::new("span").class("block font-semibold").text(link.label))
                .child(Element::new("span").class("block text-gray-600").text(link.value)),
        );
    Element::new("li").child(anchor)
}

fn listing(title: &str, intro: &str, cards: Vec<Element>) -> Element {
    Element::new("main").child(
        Element::new("section")
            .id("main")
            .class("max-w-7xl mx-auto px-4 pt-32 pb-20")
            .child(Element::new("h1").class("text-4xl font-bold text-gray-900").text(title))
            .child(Element::new("p").class("text-lg text-gray-600 mt-4 mb-12").text(intro))
            .child(Element::new("div").class("grid md:grid-cols-2 gap-8").children(cards)),
    )
}

fn blog_index() -> Element {
    listing(
        "Blog",
        "Notes from building and running AWS infrastructure.",
        POSTS.iter().map(post_card).collect(),
    )
}

fn project_index() -> Element {
    listing(
        "Projects",
        "Real-world cloud architectures and DevOps automation.",
        PROJECTS.iter().map(project_card).collect(),
    )
}

fn resume(path: &str) -> Element {
    Element::new("main").child(
        Element::new("section")
            .id("main")
            .class("max-w-3xl mx-auto px-4 pt-32 pb-20 text-center")
            .child(Element::new("h1").class("text-4xl font-bold").text("Resume"))
            .child(
                Element::new("a")
                    .attr("href", path)
                    .attr("download", "")
                    .class("inline-block mt-8 px-8 py-3 rounded-lg bg-blue-600 text-white")
                    .text("Download PDF"),
            ),
    )
}

fn not_found() -> Element {
    Element::new("main").child(
        Element::new("section")
            .id("main")
            .class("max-w-3xl mx-auto px-4 pt-32 pb-20 text-center")
            .child(Element::new("h1").class("text-4xl font-bold text-gray-900").text(NOT_FOUND_TITLE))
            .child(
                Element::new("p")
                    .class("text-lg text-gray-600 mt-4")
                    .text("The page you are looking for does not exist."),
            )
            .child(
                Element::new("a")
                    .attr("href", "/")
                    .class("inline-block mt-8 text-blue-600 hover:underline")
                    .text("Back to home"),
            ),
    )
}

fn footer() -> Node {
    Element::new("footer")
        .class("bg-gray-900 text-gray-400 text-center py-8")
        .child(Element::new("p").text(format!("© {}. {}", PROFILE.name, PROFILE.title)))
        .into()
}
