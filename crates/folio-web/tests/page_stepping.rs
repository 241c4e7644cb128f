use core::time::Duration;

use folio_content::{POSTS, PROJECTS, Route};
use folio_core::{AnchorLayout, Event};
use folio_runtime::Model;
use folio_web::{PageModel, PageMsg, StepProgram};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Lay sections out evenly, `spacing` pixels apart.
fn even_layout(model: &PageModel, spacing: f64) -> AnchorLayout {
    let ids: Vec<&str> = model.anchor_ids().collect();
    AnchorLayout::from_offsets(ids.iter().enumerate().map(|(i, id)| (*id, i as f64 * spacing)))
}

#[test]
fn every_post_and_project_steps_through_its_sections() {
    let routes = POSTS
        .iter()
        .map(|p| Route::Post(p.slug.to_owned()))
        .chain(PROJECTS.iter().map(|p| Route::Project(p.slug.to_owned())));

    for route in routes {
        let page = PageModel::for_route(&route).unwrap();
        let layout = even_layout(&page, 1000.0);
        let ids: Vec<&str> = page.anchor_ids().collect();

        let mut prog = StepProgram::new(page);
        prog.init().unwrap();
        prog.push_event(Event::AnchorsMeasured(layout));
        prog.step().unwrap();

        for (i, id) in ids.iter().enumerate() {
            prog.push_event(Event::scroll(i as f64 * 1000.0));
            prog.advance_time(Duration::from_millis(16));
            prog.step().unwrap();
            assert_eq!(prog.model().active(), *id, "{route}");
        }
    }
}

#[test]
fn rendered_html_tracks_the_active_link() {
    let page = PageModel::for_path("/blog/ssl-certificate-monitoring").unwrap();
    let layout = even_layout(&page, 500.0);
    let mut prog = StepProgram::new(page);
    prog.init().unwrap();
    prog.push_event(Event::AnchorsMeasured(layout));
    prog.push_event(Event::scroll(1000.0));
    let result = prog.step().unwrap();
    assert_eq!(result.events_processed, 2);

    let html = prog.take_outputs().last_html.unwrap_or_default();
    let solution = html.find("data-section=\"solution\"").unwrap();
    let results = html.find("data-section=\"results\"").unwrap();
    let current = html.find("aria-current=\"location\"").unwrap();
    assert!(solution < current && current < results, "{html}");
    assert!(html.contains("data-scrolled=\"true\""));
}

#[test]
fn card_toggles_survive_scrolling() {
    let page = PageModel::for_path("/projects/client-isolation").unwrap();
    let mut prog = StepProgram::new(page);
    prog.init().unwrap();
    prog.send(PageMsg::ToggleCard(1));
    prog.push_event(Event::scroll(400.0));
    prog.step().unwrap();
    assert_eq!(prog.model().cards().expanded(), Some(1));
}

proptest! {
    #[test]
    fn active_section_matches_a_linear_scan(
        tops in proptest::collection::vec(0.0f64..5000.0, 5),
        scroll in 0.0f64..6000.0,
    ) {
        let mut page = PageModel::for_path("/blog/aws-efs-latency-solutions").unwrap();
        let ids: Vec<&'static str> = page.anchor_ids().collect();
        let layout = AnchorLayout::from_offsets(ids.iter().copied().zip(tops.iter().copied()));

        page.update(PageMsg::Measured(layout));
        page.update(PageMsg::Scrolled(scroll));

        let target = scroll + 100.0;
        let mut expected = 0;
        let mut best: Option<f64> = None;
        for (i, top) in tops.iter().enumerate() {
            if *top <= target && best.is_none_or(|b| *top > b) {
                best = Some(*top);
                expected = i;
            }
        }
        prop_assert_eq!(page.active(), ids[expected]);
    }
}
