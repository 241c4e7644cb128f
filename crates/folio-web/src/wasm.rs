#![forbid(unsafe_code)]

use folio_core::{AnchorLayout, Event};
use folio_extras::contact::{ContactField, TransportError, classify};
use folio_render::{HtmlPresenter, Node};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::fetch::FetchTransport;
use crate::page::{PageModel, PageMsg, REGION_ATTR};
use crate::step_program::StepProgram;

/// Browser bridge for one page.
///
/// JS owns the listeners; this type owns the state. A typical wiring:
///
/// ```js
/// const page = new FolioWeb(location.pathname);
/// page.measure();
/// addEventListener("scroll", () => page.onScroll(scrollY));
/// addEventListener("load", () => page.measure());
///
/// form.addEventListener("submit", (e) => {
///   e.preventDefault();
///   for (const [name, value] of new FormData(form)) page.editContact(name, String(value));
///   page.submitContact()?.then(
///     (status) => page.contactCompleted(status),
///     (err) => page.contactFailed(String(err)),
///   );
/// });
/// ```
#[wasm_bindgen]
pub struct FolioWeb {
    program: StepProgram<PageModel>,
    presenter: HtmlPresenter,
    /// The contact region is re-rendered only after submit and completion, so
    /// typing in the form is never clobbered.
    contact_stale: bool,
}

#[wasm_bindgen]
impl FolioWeb {
    #[wasm_bindgen(constructor)]
    pub fn new(page_path: &str, endpoint: Option<String>) -> Result<FolioWeb, JsValue> {
        let mut page =
            PageModel::for_path(page_path).map_err(|e| JsValue::from_str(&e.to_string()))?;
        if let Some(endpoint) = endpoint.filter(|e| !e.is_empty()) {
            page = page.contact_endpoint(&endpoint);
        }
        let mut program = StepProgram::new(page);
        program.init().map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            program,
            presenter: HtmlPresenter {
                inline_styles: false,
            },
            contact_stale: false,
        })
    }

    /// Measure every section anchor and feed the layout in.
    ///
    /// Anchors missing from the document are recorded as absent. Returns how
    /// many were found.
    pub fn measure(&mut self) -> Result<u32, JsValue> {
        let document = document()?;
        let mut layout = AnchorLayout::new();
        let mut found = 0;
        for id in self.program.model().anchor_ids() {
            let top = document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .map(|el| f64::from(el.offset_top()));
            found += u32::from(top.is_some());
            layout.push(id, top);
        }
        self.program.push_event(Event::AnchorsMeasured(layout));
        self.step()?;
        Ok(found)
    }

    /// Report a scroll offset. Returns the active section id.
    #[wasm_bindgen(js_name = onScroll)]
    pub fn on_scroll(&mut self, offset: f64) -> Result<String, JsValue> {
        self.program.push_event(Event::scroll(offset));
        self.step()?;
        Ok(self.active_section())
    }

    /// Toggle a project card. Returns the expanded index, if any.
    #[wasm_bindgen(js_name = toggleCard)]
    pub fn toggle_card(&mut self, index: u32) -> Result<Option<u32>, JsValue> {
        self.program.send(PageMsg::ToggleCard(index as usize));
        self.step()?;
        Ok(self
            .program
            .model()
            .cards()
            .expanded()
            .and_then(|i| u32::try_from(i).ok()))
    }

    #[wasm_bindgen(js_name = toggleMenu)]
    pub fn toggle_menu(&mut self) -> Result<(), JsValue> {
        self.program.send(PageMsg::ToggleMenu);
        self.step()
    }

    /// Record the value of a contact field by its form control name.
    #[wasm_bindgen(js_name = editContact)]
    pub fn edit_contact(&mut self, name: &str, value: String) -> Result<(), JsValue> {
        let field = ContactField::from_name(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown contact field: {name}")))?;
        self.program.send(PageMsg::EditContact(field, value));
        self.step()
    }

    /// Validate and start a submission.
    ///
    /// Returns a promise of the response status when a request was sent, or
    /// `undefined` when the form is invalid or a submission is in flight. The
    /// caller reports the outcome with `contactCompleted` or `contactFailed`.
    #[wasm_bindgen(js_name = submitContact)]
    pub fn submit_contact(&mut self) -> Result<Option<js_sys::Promise>, JsValue> {
        self.program.send(PageMsg::SubmitContact);
        self.contact_stale = true;
        self.step()?;
        let model = self.program.model_mut();
        let Some(payload) = model.take_contact_payload() else {
            return Ok(None);
        };
        let endpoint = model
            .contact()
            .map(|c| c.endpoint().to_owned())
            .unwrap_or_default();
        let transport = FetchTransport::new(endpoint);
        Ok(Some(wasm_bindgen_futures::future_to_promise(async move {
            transport
                .send(&payload)
                .await
                .map(JsValue::from)
                .map_err(|e| JsValue::from_str(&e.to_string()))
        })))
    }

    /// Report the HTTP status of a submission.
    #[wasm_bindgen(js_name = contactCompleted)]
    pub fn contact_completed(&mut self, status: u16) -> Result<(), JsValue> {
        self.finish_contact(Ok(status))
    }

    /// Report a submission that never got a response.
    #[wasm_bindgen(js_name = contactFailed)]
    pub fn contact_failed(&mut self, message: String) -> Result<(), JsValue> {
        self.finish_contact(Err(TransportError::Network(message)))
    }

    #[wasm_bindgen(js_name = activeSection)]
    pub fn active_section(&self) -> String {
        self.program.model().active().to_owned()
    }

    #[wasm_bindgen(js_name = anchorIds)]
    pub fn anchor_ids(&self) -> js_sys::Array {
        self.program
            .model()
            .anchor_ids()
            .map(JsValue::from_str)
            .collect()
    }
}

impl FolioWeb {
    fn finish_contact(&mut self, outcome: Result<u16, TransportError>) -> Result<(), JsValue> {
        self.program.send(PageMsg::ContactCompleted(classify(outcome)));
        self.contact_stale = true;
        self.step()
    }

    fn step(&mut self) -> Result<(), JsValue> {
        let result = self
            .program
            .step()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        if result.rendered {
            self.patch_regions()?;
        }
        Ok(())
    }

    /// Replace each interactive region in the document with its new rendering.
    fn patch_regions(&mut self) -> Result<(), JsValue> {
        let document = document()?;
        let model = self.program.model();
        let regions: Vec<Node> = std::iter::once(model.navbar_region())
            .chain(model.sections_region())
            .chain(model.cards_region())
            .chain(model.contact_region().filter(|_| self.contact_stale))
            .collect();
        self.contact_stale = false;
        for node in &regions {
            let Some(name) = node.as_element().and_then(|el| el.get_attr(REGION_ATTR)) else {
                continue;
            };
            let selector = format!("[{REGION_ATTR}=\"{name}\"]");
            if let Some(target) = document.query_selector(&selector)? {
                target.set_outer_html(&self.presenter.render_node(node));
            }
        }
        self.program.take_outputs();
        Ok(())
    }
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}
