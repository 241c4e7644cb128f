//! Every shipped body renders, every diagram parses, and every section anchor exists.

use folio_content::{POSTS, PROJECTS};
use folio_extras::markdown::{MarkdownRenderer, outline};
use folio_extras::mermaid;

fn mermaid_blocks(body: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Option<String> = None;
    for line in body.lines() {
        match current.as_mut() {
            None if line.trim_start().starts_with("```mermaid") => current = Some(String::new()),
            None => {}
            Some(_) if line.trim_start().starts_with("```") => {
                blocks.extend(current.take());
            }
            Some(buf) => {
                buf.push_str(line);
                buf.push('\n');
            }
        }
    }
    blocks
}

fn bodies() -> impl Iterator<Item = (&'static str, &'static str)> {
    POSTS
        .iter()
        .map(|p| (p.slug, p.body))
        .chain(PROJECTS.iter().map(|p| (p.slug, p.body)))
}

#[test]
fn every_diagram_parses() {
    let mut count = 0;
    for (slug, body) in bodies() {
        for block in mermaid_blocks(body) {
            count += 1;
            if let Err(err) = mermaid::parse(block.trim()) {
                panic!("{slug}: {err}\n{block}");
            }
        }
    }
    assert!(count >= 5, "expected diagrams in the content, found {count}");
}

#[test]
fn outline_covers_every_section() {
    for post in POSTS {
        let ids: Vec<_> = outline(post.body).into_iter().map(|e| e.id).collect();
        for section in post.sections {
            assert!(ids.iter().any(|id| id == section.id), "{}: {}", post.slug, section.id);
        }
    }
    for project in PROJECTS {
        let ids: Vec<_> = outline(project.body).into_iter().map(|e| e.id).collect();
        for section in project.sections {
            assert!(ids.iter().any(|id| id == section.id), "{}: {}", project.slug, section.id);
        }
    }
}

#[test]
fn rendered_bodies_carry_section_ids_and_no_diagram_errors() {
    let renderer = MarkdownRenderer::new();
    for post in POSTS {
        let html = renderer.render_html(post.body);
        for section in post.sections {
            assert!(html.contains(&format!(r#"id="{}""#, section.id)), "{}: {}", post.slug, section.id);
        }
        assert!(!html.contains("Diagram error"), "{}", post.slug);
    }
    for project in PROJECTS {
        let html = renderer.render_html(project.body);
        assert!(!html.contains("Diagram error"), "{}", project.slug);
    }
}

#[test]
fn serialized_tables_omit_bodies() {
    let post = serde_json::to_value(&POSTS[0]).unwrap();
    assert_eq!(post["slug"], POSTS[0].slug);
    assert!(post.get("body").is_none());
    assert_eq!(post["sections"][0]["id"], "introduction");

    let project = serde_json::to_value(&PROJECTS[0]).unwrap();
    assert!(project.get("body").is_none());
    assert!(project.get("cards").is_none());
}
