#![forbid(unsafe_code)]

//! Path routing.
//!
//! [`Route::parse`] is purely syntactic: it never fails, and anything it does
//! not recognize becomes [`Route::NotFound`]. [`Route::resolve`] then looks
//! slugs up in the static tables. An unknown slug resolves to
//! [`Resolved::NotFound`] exactly like an unknown path.
//!
//! ```
//! use folio_content::{Resolved, Route};
//!
//! let route = Route::parse("/blog/aws-efs-latency-solutions/");
//! assert!(matches!(route.resolve(), Resolved::Post(_)));
//! assert!(matches!(Route::parse("/blog/nope").resolve(), Resolved::NotFound));
//! ```

use std::fmt;

use folio_render::PageMeta;
use serde::Serialize;

use crate::posts::{POSTS, Post, find_post};
use crate::profile::{PROFILE, RESUME_FILE};
use crate::projects::{PROJECTS, Project, find_project};

pub const HOME_TITLE: &str = "Prasad Narkhede - Cloud & DevOps Engineer | AWS Solutions Architect";
pub const NOT_FOUND_TITLE: &str = "Page Not Found";

/// A parsed site path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    BlogIndex,
    Post(String),
    ProjectIndex,
    Project(String),
    Resume(String),
    /// The normalized path that matched nothing.
    NotFound(String),
}

impl Route {
    /// Parse a request path. Query strings, fragments, and trailing slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let route = match segments.as_slice() {
            [] => Self::Home,
            ["blog"] => Self::BlogIndex,
            ["blog", slug] => Self::Post((*slug).to_owned()),
            ["projects"] => Self::ProjectIndex,
            ["projects", slug] => Self::Project((*slug).to_owned()),
            ["resume", file] => Self::Resume((*file).to_owned()),
            _ => Self::NotFound(format!("/{}", segments.join("/"))),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(path, ?route, "route parsed");
        route
    }

    /// Canonical path, without a trailing slash.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::BlogIndex => "/blog".to_owned(),
            Self::Post(slug) => format!("/blog/{slug}"),
            Self::ProjectIndex => "/projects".to_owned(),
            Self::Project(slug) => format!("/projects/{slug}"),
            Self::Resume(file) => format!("/resume/{file}"),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// Look the route up in the content tables.
    pub fn resolve(&self) -> Resolved {
        let resolved = match self {
            Self::Home => Resolved::Home,
            Self::BlogIndex => Resolved::BlogIndex,
            Self::Post(slug) => find_post(slug).map_or(Resolved::NotFound, Resolved::Post),
            Self::ProjectIndex => Resolved::ProjectIndex,
            Self::Project(slug) => find_project(slug).map_or(Resolved::NotFound, Resolved::Project),
            Self::Resume(file) if file == RESUME_FILE => Resolved::Resume(PROFILE.resume_path),
            Self::Resume(_) | Self::NotFound(_) => Resolved::NotFound,
        };
        #[cfg(feature = "tracing")]
        if matches!(resolved, Resolved::NotFound) {
            tracing::debug!(path = %self.path(), "route resolved to not found");
        }
        resolved
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// What a route points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    Home,
    BlogIndex,
    Post(&'static Post),
    ProjectIndex,
    Project(&'static Project),
    /// Static asset at this site path.
    Resume(&'static str),
    NotFound,
}

impl Resolved {
    /// Head metadata for the page.
    pub fn meta(&self) -> PageMeta {
        match self {
            Self::Home => PageMeta::new(HOME_TITLE)
                .description("Cloud & DevOps Engineer specializing in AWS architecture, CI/CD automation, infrastructure as code, and cost optimization.")
                .keywords("AWS Cloud Engineer, DevOps Engineer, Terraform, CI/CD, Docker, Kubernetes, Cloud Cost Optimization")
                .canonical(PROFILE.url("/")),
            Self::BlogIndex => PageMeta::new("Blog | Prasad Narkhede - Cloud & DevOps Articles")
                .description("Technical blog featuring AWS tutorials, DevOps best practices, infrastructure automation guides, and cloud architecture insights.")
                .keywords("AWS Tutorials, DevOps Blog, Cloud Architecture, Terraform Guides, CI/CD Best Practices")
                .canonical(PROFILE.url("/blog")),
            Self::Post(post) => PageMeta::new(post.meta_title())
                .description(post.description)
                .keywords(post.keywords)
                .canonical(PROFILE.url(&post.path())),
            Self::ProjectIndex => PageMeta::new("Projects | Prasad Narkhede - AWS & DevOps Portfolio")
                .description("Showcase of real-world cloud infrastructure projects, AWS architectures, and DevOps automation solutions.")
                .keywords("AWS Projects, DevOps Portfolio, Cloud Architecture, Terraform, CI/CD")
                .canonical(PROFILE.url("/projects")),
            Self::Project(project) => PageMeta::new(project.meta_title())
                .description(project.description)
                .keywords(project.keywords)
                .canonical(PROFILE.url(&project.path())),
            Self::Resume(path) => PageMeta::new("Resume | Prasad Narkhede").canonical(PROFILE.url(path)),
            Self::NotFound => PageMeta::new(NOT_FOUND_TITLE)
                .description("The page you are looking for does not exist."),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Every page route, in generation order. The resume asset is not a page.
pub fn all_pages() -> Vec<Route> {
    let mut routes = Vec::with_capacity(3 + POSTS.len() + PROJECTS.len());
    routes.push(Route::Home);
    routes.push(Route::BlogIndex);
    routes.extend(POSTS.iter().map(|p| Route::Post(p.slug.to_owned())));
    routes.push(Route::ProjectIndex);
    routes.extend(PROJECTS.iter().map(|p| Route::Project(p.slug.to_owned())));
    routes
}

/// One row of the `site.json` manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub path: String,
    pub title: String,
    pub description: String,
    pub kind: &'static str,
}

impl RouteEntry {
    pub fn new(route: &Route) -> Self {
        let resolved = route.resolve();
        let meta = resolved.meta();
        let kind = match resolved {
            Resolved::Home => "home",
            Resolved::BlogIndex => "blog-index",
            Resolved::Post(_) => "post",
            Resolved::ProjectIndex => "project-index",
            Resolved::Project(_) => "project",
            Resolved::Resume(_) => "asset",
            Resolved::NotFound => "not-found",
        };
        Self {
            path: route.path(),
            title: meta.title,
            description: meta.description,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn parse_table() {
        let cases = [
            ("/", Route::Home),
            ("", Route::Home),
            ("/blog", Route::BlogIndex),
            ("/blog/", Route::BlogIndex),
            ("/blog/ssl-certificate-monitoring", Route::Post("ssl-certificate-monitoring".into())),
            ("/projects/eks-cicd/", Route::Project("eks-cicd".into())),
            ("/projects?tab=all", Route::ProjectIndex),
            ("/blog#top", Route::BlogIndex),
            ("/resume/Prasad_Narkhede_AWSCloud.pdf", Route::Resume("Prasad_Narkhede_AWSCloud.pdf".into())),
            ("/about/me/now", Route::NotFound("/about/me/now".into())),
            ("//blog//x//", Route::Post("x".into())),
        ];
        for (path, expected) in cases {
            assert_eq!(Route::parse(path), expected, "{path}");
        }
    }

    #[test]
    fn known_post_resolves_with_title_metadata() {
        let resolved = Route::parse("/blog/aws-efs-latency-solutions").resolve();
        let Resolved::Post(post) = resolved else {
            panic!("expected a post, got {resolved:?}");
        };
        assert_eq!(post.slug, "aws-efs-latency-solutions");
        assert_eq!(
            resolved.meta().title,
            "Fixing AWS EFS Latency: Why ElastiCache & S3 are Better for Sessions & Uploads | Prasad Narkhede Blog"
        );
        assert!(post.body.contains("ElastiCache"));
    }

    #[test]
    fn unknown_slugs_are_not_found() {
        for path in ["/blog/missing", "/projects/missing", "/resume/other.pdf", "/contact"] {
            let resolved = Route::parse(path).resolve();
            assert!(resolved.is_not_found(), "{path}");
            assert_eq!(resolved.meta().title, NOT_FOUND_TITLE);
        }
    }

    #[test]
    fn resume_resolves_to_asset() {
        assert_eq!(
            Route::parse(PROFILE.resume_path).resolve(),
            Resolved::Resume("/resume/Prasad_Narkhede_AWSCloud.pdf")
        );
    }

    #[test]
    fn home_meta() {
        assert_eq!(Resolved::Home.meta().title, HOME_TITLE);
        assert_eq!(
            Resolved::Home.meta().canonical.as_deref(),
            Some("https://prasadnarkhede.dev/")
        );
    }

    #[test]
    fn all_pages_resolve() {
        let pages = all_pages();
        assert_eq!(pages.len(), 3 + POSTS.len() + PROJECTS.len());
        for route in &pages {
            assert!(!route.resolve().is_not_found(), "{route}");
            assert_eq!(&Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn route_entry_kinds() {
        let entry = RouteEntry::new(&Route::Project("client-isolation".into()));
        assert_eq!(entry.kind, "project");
        assert_eq!(entry.path, "/projects/client-isolation");
        assert_eq!(RouteEntry::new(&Route::Home).kind, "home");
        assert_eq!(RouteEntry::new(&Route::Post("x".into())).kind, "not-found");
    }

    proptest! {
        #[test]
        fn parse_and_resolve_never_panic(path in "[a-z/?#._-]{0,40}") {
            let route = Route::parse(&path);
            let _ = route.resolve().meta();
        }

        #[test]
        fn trailing_slashes_are_ignored(slug in "[a-z0-9-]{1,20}", slashes in 1usize..4) {
            let bare = Route::parse(&format!("/blog/{slug}"));
            let slashed = Route::parse(&format!("/blog/{slug}{}", "/".repeat(slashes)));
            prop_assert_eq!(bare, slashed);
        }
    }
}
