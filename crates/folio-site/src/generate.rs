#![forbid(unsafe_code)]

//! Static generation of the whole site into an output directory.
//!
//! Layout of the output:
//!
//! ```text
//! <out>/index.html                 home
//! <out>/blog/index.html            blog index
//! <out>/blog/<slug>/index.html     one per post
//! <out>/projects/...               same for projects
//! <out>/404.html                   not-found page
//! <out>/styles.css                 named styles + base rules
//! <out>/folio.js                   browser bridge bootstrap
//! <out>/site.json                  route manifest
//! <out>/resume/<file>              copied from the asset directory, if present
//! ```
//!
//! Pages are rendered sequentially. A missing resume is not an error: it is
//! logged and listed in [`GenerateReport::skipped`].

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use folio_content::{RESUME_FILE, Route, RouteEntry, all_pages};
use folio_style::StyleSheet;
use folio_widgets::TrackerError;
use tracing::{debug, info, warn};

use crate::pages::{SCRIPT_PATH, SiteRenderer};

/// Class prefix for the named styles in `styles.css`.
pub const CSS_PREFIX: &str = "folio";

/// Rules appended after the named styles.
pub const BASE_CSS: &str = "\
html{scroll-behavior:smooth}
.folio-section-nav a[aria-current]{font-weight:600}
.folio-mermaid svg{max-width:100%;height:auto}
.folio-plain,.folio-code{font-family:ui-monospace,SFMono-Regular,Menlo,monospace}
[data-folio-region=\"navbar\"] nav{position:fixed}
";

/// Module that loads the wasm package and wires page events to it.
pub const BOOTSTRAP_JS: &str = include_str!("../assets/folio.js");

#[derive(Debug)]
pub enum GenerateError {
    Io { path: PathBuf, source: io::Error },
    Json(serde_json::Error),
    Page { route: String, source: TrackerError },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Json(err) => write!(f, "site manifest: {err}"),
            Self::Page { route, source } => write!(f, "page {route}: {source}"),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Page { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// What a generation run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// HTML files written, `404.html` included.
    pub pages: usize,
    /// Static assets copied.
    pub assets: usize,
    /// Assets that were expected but not found.
    pub skipped: Vec<PathBuf>,
}

pub struct SiteGenerator {
    renderer: SiteRenderer,
    out: PathBuf,
    assets: PathBuf,
}

impl SiteGenerator {
    pub fn new(out: impl Into<PathBuf>, assets: impl Into<PathBuf>, endpoint: impl Into<String>) -> Self {
        Self {
            renderer: SiteRenderer::new(endpoint),
            out: out.into(),
            assets: assets.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out
    }

    pub fn renderer(&self) -> &SiteRenderer {
        &self.renderer
    }

    /// Output file for a page route.
    pub fn page_path(&self, route: &Route) -> PathBuf {
        let mut path = self.out.clone();
        for segment in route.path().split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push("index.html");
        path
    }

    pub fn generate(&self) -> Result<GenerateReport, GenerateError> {
        info!(out = %self.out.display(), "generating site");
        let mut report = GenerateReport::default();
        let mut manifest = Vec::new();

        for route in all_pages() {
            let html = self.render_page(&route)?;
            let path = self.page_path(&route);
            write_file(&path, html.as_bytes())?;
            debug!(route = %route, path = %path.display(), "page written");
            manifest.push(RouteEntry::new(&route));
            report.pages += 1;
        }

        let missing = Route::NotFound("/404".to_owned());
        let html = self.render_page(&missing)?;
        write_file(&self.out.join("404.html"), html.as_bytes())?;
        report.pages += 1;

        let mut css = StyleSheet::with_defaults().to_css(CSS_PREFIX);
        css.push_str(BASE_CSS);
        write_file(&self.out.join("styles.css"), css.as_bytes())?;
        write_file(
            &self.out.join(SCRIPT_PATH.trim_start_matches('/')),
            BOOTSTRAP_JS.as_bytes(),
        )?;

        let resume = Route::Resume(RESUME_FILE.to_owned());
        if self.copy_resume()? {
            manifest.push(RouteEntry::new(&resume));
            report.assets += 1;
        } else {
            report.skipped.push(self.assets.join(RESUME_FILE));
        }

        let json = serde_json::to_vec_pretty(&manifest)?;
        write_file(&self.out.join("site.json"), &json)?;

        info!(
            pages = report.pages,
            assets = report.assets,
            skipped = report.skipped.len(),
            "site generated"
        );
        Ok(report)
    }

    fn render_page(&self, route: &Route) -> Result<String, GenerateError> {
        self.renderer.render(route).map_err(|source| GenerateError::Page {
            route: route.path(),
            source,
        })
    }

    /// Copy the resume PDF. `Ok(false)` when the source does not exist.
    fn copy_resume(&self) -> Result<bool, GenerateError> {
        let src = self.assets.join(RESUME_FILE);
        if !src.is_file() {
            warn!(path = %src.display(), "resume not found; skipping");
            return Ok(false);
        }
        let dest = self.out.join("resume").join(RESUME_FILE);
        ensure_parent(&dest)?;
        fs::copy(&src, &dest).map_err(|source| GenerateError::Io {
            path: dest.clone(),
            source,
        })?;
        debug!(from = %src.display(), to = %dest.display(), "resume copied");
        Ok(true)
    }
}

fn ensure_parent(path: &Path) -> Result<(), GenerateError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| GenerateError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), GenerateError> {
    ensure_parent(path)?;
    fs::write(path, contents).map_err(|source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_extras::contact::DEFAULT_ENDPOINT;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_paths_nest_under_out() {
        let generator = SiteGenerator::new("/srv/site", "public", DEFAULT_ENDPOINT);
        assert_eq!(
            generator.page_path(&Route::Home),
            PathBuf::from("/srv/site/index.html")
        );
        assert_eq!(
            generator.page_path(&Route::Post("aws-efs-latency-solutions".into())),
            PathBuf::from("/srv/site/blog/aws-efs-latency-solutions/index.html")
        );
        assert_eq!(
            generator.page_path(&Route::ProjectIndex),
            PathBuf::from("/srv/site/projects/index.html")
        );
    }

    #[test]
    fn io_error_names_the_path() {
        let err = GenerateError::Io {
            path: PathBuf::from("/nope/index.html"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "/nope/index.html: denied");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn generate_without_resume_skips_it() {
        let out = tempfile::tempdir().unwrap();
        let assets = tempfile::tempdir().unwrap();
        let generator = SiteGenerator::new(out.path(), assets.path(), DEFAULT_ENDPOINT);
        let report = generator.generate().unwrap();

        assert_eq!(report.pages, all_pages().len() + 1);
        assert_eq!(report.assets, 0);
        assert_eq!(report.skipped, vec![assets.path().join(RESUME_FILE)]);
        assert!(!out.path().join("resume").exists());
    }

    #[test]
    fn css_contains_named_styles_and_base_rules() {
        let out = tempfile::tempdir().unwrap();
        let generator = SiteGenerator::new(out.path(), out.path().join("none"), DEFAULT_ENDPOINT);
        generator.generate().unwrap();
        let css = fs::read_to_string(out.path().join("styles.css")).unwrap();
        assert!(css.contains(".folio-nav-active{"));
        assert!(css.contains(".folio-status-error{"));
        assert!(css.ends_with(BASE_CSS));
    }

    #[test]
    fn bootstrap_is_written_beside_the_pages() {
        let out = tempfile::tempdir().unwrap();
        let generator = SiteGenerator::new(out.path(), out.path().join("none"), DEFAULT_ENDPOINT);
        generator.generate().unwrap();
        let js = fs::read_to_string(out.path().join("folio.js")).unwrap();
        assert_eq!(js, BOOTSTRAP_JS);
        assert!(js.contains("new FolioWeb(location.pathname"));
        assert!(js.contains("page.measure()"));
        assert!(js.contains("page.onScroll(scrollY)"));
        assert!(js.contains("page.submitContact()"));
    }
}
