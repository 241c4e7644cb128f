use std::fs;

use folio_content::{POSTS, PROJECTS, RESUME_FILE, Route, all_pages};
use folio_site::{SiteGenerator, SiteRenderer};
use pretty_assertions::assert_eq;

const ENDPOINT: &str = "https://example.test/f/contact";

#[test]
fn generates_one_file_per_route_plus_404() {
    let out = tempfile::tempdir().unwrap();
    let assets = tempfile::tempdir().unwrap();
    fs::write(assets.path().join(RESUME_FILE), b"%PDF-1.4 test").unwrap();

    let generator = SiteGenerator::new(out.path(), assets.path(), ENDPOINT);
    let report = generator.generate().unwrap();

    assert_eq!(report.pages, 3 + POSTS.len() + PROJECTS.len() + 1);
    assert_eq!(report.assets, 1);
    assert!(report.skipped.is_empty());

    for route in all_pages() {
        let path = generator.page_path(&route);
        let html = fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"), "{}", path.display());
        assert!(html.contains(&format!("data-folio-page=\"{}\"", route.path())));
        assert!(
            html.contains(r#"<script type="module" src="/folio.js"></script>"#),
            "{}",
            path.display()
        );
    }

    let not_found = fs::read_to_string(out.path().join("404.html")).unwrap();
    assert!(not_found.contains("<title>Page Not Found</title>"));
    assert!(not_found.contains(r#"src="/folio.js""#));
    assert!(out.path().join("folio.js").is_file());

    let resume = fs::read(out.path().join("resume").join(RESUME_FILE)).unwrap();
    assert_eq!(resume, b"%PDF-1.4 test");
}

#[test]
fn manifest_lists_pages_and_the_resume() {
    let out = tempfile::tempdir().unwrap();
    let assets = tempfile::tempdir().unwrap();
    fs::write(assets.path().join(RESUME_FILE), b"pdf").unwrap();
    SiteGenerator::new(out.path(), assets.path(), ENDPOINT)
        .generate()
        .unwrap();

    let json = fs::read_to_string(out.path().join("site.json")).unwrap();
    let entries: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(entries.len(), all_pages().len() + 1);
    assert_eq!(entries[0]["path"], "/");
    assert_eq!(entries[0]["kind"], "home");
    let last = entries.last().unwrap();
    assert_eq!(last["kind"], "asset");
    assert_eq!(last["path"], format!("/resume/{RESUME_FILE}"));
    assert!(
        entries
            .iter()
            .any(|e| e["path"] == "/blog/aws-efs-latency-solutions" && e["kind"] == "post")
    );
}

#[test]
fn generated_page_matches_single_route_render() {
    let out = tempfile::tempdir().unwrap();
    let generator = SiteGenerator::new(out.path(), out.path().join("assets"), ENDPOINT);
    generator.generate().unwrap();

    let route = Route::parse("/projects/eks-cicd/");
    let on_disk = fs::read_to_string(generator.page_path(&route)).unwrap();
    let direct = SiteRenderer::new(ENDPOINT).render(&route).unwrap();
    assert_eq!(on_disk, direct);
}

#[test]
fn home_page_carries_the_configured_endpoint() {
    let out = tempfile::tempdir().unwrap();
    let generator = SiteGenerator::new(out.path(), out.path(), ENDPOINT);
    generator.generate().unwrap();
    let home = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(home.contains(&format!("action=\"{ENDPOINT}\"")));
    assert!(home.contains("<link rel=\"stylesheet\" href=\"/styles.css\">"));
}
