#![forbid(unsafe_code)]

//! Contact form model and submission transport.
//!
//! [`ContactModel`] drives the form through the runtime: edits update field
//! values, `Submit` validates and hands the payload to a [`FormTransport`]
//! inside a `Cmd::task`, and `Completed` settles the status banner.
//!
//! # Status flow
//!
//! ```text
//! Idle --Submit(valid)--> Submitting --Completed(Ok)--> Success (fields cleared)
//!                                    \--Completed(Err)-> Error   (fields kept)
//! ```
//!
//! Submitting again from `Success` or `Error` starts a fresh attempt. There is
//! no retry.
//!
//! Hosts that cannot block (a browser) build the model with
//! [`ContactModel::deferred`]. A valid `Submit` then parks the payload instead
//! of returning a task; the host takes it with [`ContactModel::take_pending`],
//! delivers it asynchronously, and sends `Completed` with the outcome.

use std::fmt;
use std::sync::Arc;

use folio_core::Event;
use folio_render::{Element, Node};
use folio_runtime::{Cmd, Model};
use folio_widgets::StatefulWidget;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::forms::{
    Form, FormField, FormState, ValidationError, all_of, email_shape, required,
};

/// Default submission endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/mvgqyevv";

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
pub const ERROR_MESSAGE: &str =
    "There was an error submitting your message. Please try again later.";

const SUBMIT_LABEL: &str = "Send Message";
const BUSY_LABEL: &str = "Sending...";

/// The four contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Form control name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// JSON body posted to the form service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request never produced a response.
    Network(String),
    /// The payload could not be encoded or the request could not be built.
    Encode(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Encode(msg) => write!(f, "could not encode request: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The service answered with a non-2xx status.
    Rejected(u16),
    Transport(TransportError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(status) => write!(f, "submission rejected with status {status}"),
            Self::Transport(err) => write!(f, "submission failed: {err}"),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rejected(_) => None,
            Self::Transport(err) => Some(err),
        }
    }
}

impl From<TransportError> for SubmitError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}

/// Delivers a payload and reports the HTTP status.
pub trait FormTransport: Send + Sync {
    fn submit(&self, payload: &ContactPayload) -> Result<u16, TransportError>;
}

/// Map a transport outcome to a submission result. Any 2xx is success.
pub fn classify(outcome: Result<u16, TransportError>) -> Result<(), SubmitError> {
    match outcome? {
        200..=299 => Ok(()),
        status => Err(SubmitError::Rejected(status)),
    }
}

/// Name, email, optional subject, and message with their validators.
#[derive(Debug)]
pub struct ContactForm {
    form: Form,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Form whose `action` posts to `endpoint`.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let form = Form::new(vec![
            FormField::text(ContactField::Name.name(), "Name")
                .required()
                .placeholder("Your name"),
            FormField::email(ContactField::Email.name(), "Email")
                .required()
                .placeholder("your.email@example.com"),
            FormField::text(ContactField::Subject.name(), "Subject")
                .placeholder("What's this about?"),
            FormField::textarea(ContactField::Message.name(), "Message", 6)
                .required()
                .placeholder("Tell me about your project or opportunity..."),
        ])
        .validate(0, required("Please enter your name"))
        .validate(
            1,
            all_of(vec![
                required("Please enter your email"),
                email_shape("Please enter a valid email address"),
            ]),
        )
        .validate(3, required("Please enter a message"))
        .action(endpoint)
        .submit_labels(SUBMIT_LABEL, BUSY_LABEL);
        Self { form }
    }

    pub fn get(&self, field: ContactField) -> &str {
        self.form.value(field.name()).unwrap_or_default()
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set_value(field.name(), value);
    }

    pub fn clear(&mut self) {
        self.form.clear();
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn endpoint(&self) -> &str {
        self.form.action_url().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// The payload, or every field error.
    pub fn payload(&self) -> Result<ContactPayload, Vec<ValidationError>> {
        let errors = self.form.validate_all();
        if !errors.is_empty() {
            return Err(errors);
        }
        let subject = self.get(ContactField::Subject).trim();
        Ok(ContactPayload {
            name: self.get(ContactField::Name).trim().to_owned(),
            email: self.get(ContactField::Email).trim().to_owned(),
            subject: (!subject.is_empty()).then(|| subject.to_owned()),
            message: self.get(ContactField::Message).to_owned(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    /// Banner text, if any.
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Success => Some(SUCCESS_MESSAGE),
            Self::Error => Some(ERROR_MESSAGE),
            Self::Idle | Self::Submitting => None,
        }
    }
}

pub enum ContactMsg {
    Edit(ContactField, String),
    Submit,
    Completed(Result<(), SubmitError>),
    /// Host events are not used by the form.
    Host(Event),
}

impl fmt::Debug for ContactMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edit(field, _) => f.debug_tuple("Edit").field(field).finish(),
            Self::Submit => f.write_str("Submit"),
            Self::Completed(result) => f.debug_tuple("Completed").field(result).finish(),
            Self::Host(event) => f.debug_tuple("Host").field(event).finish(),
        }
    }
}

impl From<Event> for ContactMsg {
    fn from(event: Event) -> Self {
        Self::Host(event)
    }
}

/// Contact form state machine.
pub struct ContactModel {
    form: ContactForm,
    state: FormState,
    status: SubmitStatus,
    /// `None` for deferred delivery.
    transport: Option<Arc<dyn FormTransport>>,
    pending: Option<ContactPayload>,
}

impl fmt::Debug for ContactModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactModel")
            .field("form", &self.form)
            .field("state", &self.state)
            .field("status", &self.status)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl ContactModel {
    pub fn new(transport: Arc<dyn FormTransport>) -> Self {
        Self::build(ContactForm::new(), Some(transport))
    }

    /// Model posting `form` through `transport` inside a task.
    pub fn with_form(form: ContactForm, transport: Arc<dyn FormTransport>) -> Self {
        Self::build(form, Some(transport))
    }

    /// Model whose payloads are delivered by the host.
    pub fn deferred(form: ContactForm) -> Self {
        Self::build(form, None)
    }

    fn build(form: ContactForm, transport: Option<Arc<dyn FormTransport>>) -> Self {
        Self {
            form,
            state: FormState::default(),
            status: SubmitStatus::Idle,
            transport,
            pending: None,
        }
    }

    pub fn is_deferred(&self) -> bool {
        self.transport.is_none()
    }

    /// The validated payload awaiting delivery, if a deferred submit is in
    /// flight and the host has not taken it yet.
    pub fn take_pending(&mut self) -> Option<ContactPayload> {
        self.pending.take()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn endpoint(&self) -> &str {
        self.form.endpoint()
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.state.errors
    }

    fn submit(&mut self) -> Cmd<ContactMsg> {
        if self.status == SubmitStatus::Submitting {
            debug!("contact submit ignored while in flight");
            return Cmd::none();
        }
        let payload = match self.form.payload() {
            Ok(payload) => payload,
            Err(errors) => {
                debug!(count = errors.len(), "contact form invalid");
                self.state.errors = errors;
                return Cmd::none();
            }
        };
        self.state.errors.clear();
        self.state.busy = true;
        self.status = SubmitStatus::Submitting;
        let Some(transport) = self.transport.clone() else {
            debug!("contact payload parked for host delivery");
            self.pending = Some(payload);
            return Cmd::none();
        };
        Cmd::task_named("contact-submit", move || {
            ContactMsg::Completed(classify(transport.submit(&payload)))
        })
    }

    fn complete(&mut self, result: Result<(), SubmitError>) {
        self.state.busy = false;
        self.pending = None;
        match result {
            Ok(()) => {
                info!("contact form submitted");
                self.status = SubmitStatus::Success;
                self.form.clear();
            }
            Err(err) => {
                warn!(error = %err, "contact form submission failed");
                self.status = SubmitStatus::Error;
            }
        }
    }
}

impl Model for ContactModel {
    type Message = ContactMsg;

    fn update(&mut self, msg: ContactMsg) -> Cmd<ContactMsg> {
        match msg {
            ContactMsg::Edit(field, value) => {
                self.form.set(field, value);
                self.state.clear_error(field.name());
                Cmd::none()
            }
            ContactMsg::Submit => self.submit(),
            ContactMsg::Completed(result) => {
                self.complete(result);
                Cmd::none()
            }
            ContactMsg::Host(_) => Cmd::none(),
        }
    }

    fn view(&self) -> Vec<Node> {
        let mut nodes = Vec::with_capacity(2);
        if let Some(message) = self.status.message() {
            let class = if self.status == SubmitStatus::Success {
                "mb-6 p-4 rounded-lg bg-green-50 text-green-800 border border-green-200"
            } else {
                "mb-6 p-4 rounded-lg bg-red-50 text-red-800 border border-red-200"
            };
            nodes.push(
                Element::new("div")
                    .attr("role", "status")
                    .class(class)
                    .text(message)
                    .into(),
            );
        }
        nodes.push(self.form.form().render(&self.state));
        nodes
    }
}

/// Blocking HTTP transport.
#[cfg(all(feature = "http", not(target_arch = "wasm32")))]
pub mod http {
    use reqwest::blocking::Client;
    use reqwest::header::ACCEPT;
    use tracing::debug;

    use super::{ContactPayload, DEFAULT_ENDPOINT, FormTransport, TransportError};

    /// Posts the payload as JSON.
    #[derive(Debug, Clone)]
    pub struct HttpTransport {
        endpoint: String,
        client: Client,
    }

    impl HttpTransport {
        pub fn new(endpoint: impl Into<String>) -> Result<Self, TransportError> {
            let client = Client::builder()
                .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
                .build()
                .map_err(|e| TransportError::Encode(e.to_string()))?;
            Ok(Self {
                endpoint: endpoint.into(),
                client,
            })
        }

        /// Transport over a preconfigured client.
        pub fn with_client(endpoint: impl Into<String>, client: Client) -> Self {
            Self {
                endpoint: endpoint.into(),
                client,
            }
        }

        pub fn with_default_endpoint() -> Result<Self, TransportError> {
            Self::new(DEFAULT_ENDPOINT)
        }

        pub fn endpoint(&self) -> &str {
            &self.endpoint
        }
    }

    impl FormTransport for HttpTransport {
        fn submit(&self, payload: &ContactPayload) -> Result<u16, TransportError> {
            debug!(endpoint = %self.endpoint, "posting contact form");
            let response = self
                .client
                .post(&self.endpoint)
                .header(ACCEPT, "application/json")
                .json(payload)
                .send()
                .map_err(|e| {
                    if e.is_builder() {
                        TransportError::Encode(e.to_string())
                    } else {
                        TransportError::Network(e.to_string())
                    }
                })?;
            Ok(response.status().as_u16())
        }
    }

    #[cfg(test)]
    mod tests {
        use std::io::{BufRead, BufReader, Read, Write};
        use std::net::TcpListener;
        use std::thread::{self, JoinHandle};

        use pretty_assertions::assert_eq;
        use serde_json::json;

        use super::*;
        use crate::contact::{SubmitError, classify};

        /// Request line, lowercased header lines, and body.
        type Captured = (String, Vec<String>, String);

        /// Accept one request on a loopback port, answer with `status`, and
        /// return what was received.
        fn serve_once(status: &'static str) -> (String, JoinHandle<Captured>) {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let url = format!("http://{}/f/contact", listener.local_addr().unwrap());
            let handle = thread::spawn(move || {
                let (stream, _) = listener.accept().unwrap();
                let mut reader = BufReader::new(stream);
                let mut request_line = String::new();
                reader.read_line(&mut request_line).unwrap();
                let mut headers = Vec::new();
                loop {
                    let mut line = String::new();
                    reader.read_line(&mut line).unwrap();
                    let line = line.trim_end();
                    if line.is_empty() {
                        break;
                    }
                    headers.push(line.to_ascii_lowercase());
                }
                let len = headers
                    .iter()
                    .find_map(|h| h.strip_prefix("content-length:"))
                    .map_or(0, |v| v.trim().parse::<usize>().unwrap());
                let mut body = vec![0; len];
                reader.read_exact(&mut body).unwrap();
                let mut stream = reader.into_inner();
                write!(
                    stream,
                    "HTTP/1.1 {status}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                )
                .unwrap();
                (
                    request_line.trim_end().to_owned(),
                    headers,
                    String::from_utf8(body).unwrap(),
                )
            });
            (url, handle)
        }

        fn transport(url: &str) -> HttpTransport {
            let client = Client::builder().no_proxy().build().unwrap();
            HttpTransport::with_client(url, client)
        }

        fn payload() -> ContactPayload {
            ContactPayload {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                subject: None,
                message: "Hello".into(),
            }
        }

        #[test]
        fn posts_json_with_content_type_and_accept() {
            let (url, server) = serve_once("200 OK");
            let status = transport(&url).submit(&payload()).unwrap();
            assert_eq!(classify(Ok(status)), Ok(()));

            let (line, headers, body) = server.join().unwrap();
            assert_eq!(line, "POST /f/contact HTTP/1.1");
            assert!(
                headers.iter().any(|h| h == "content-type: application/json"),
                "{headers:?}"
            );
            assert!(
                headers.iter().any(|h| h == "accept: application/json"),
                "{headers:?}"
            );
            let body: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert_eq!(
                body,
                json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"})
            );
        }

        #[test]
        fn non_success_status_is_rejected() {
            let (url, server) = serve_once("422 Unprocessable Entity");
            let outcome = transport(&url).submit(&payload());
            assert_eq!(outcome, Ok(422));
            assert_eq!(classify(outcome), Err(SubmitError::Rejected(422)));
            server.join().unwrap();
        }

        #[test]
        fn refused_connection_is_a_network_error() {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let url = format!("http://{}/f/contact", listener.local_addr().unwrap());
            drop(listener);
            let outcome = transport(&url).submit(&payload());
            assert!(matches!(outcome, Err(TransportError::Network(_))), "{outcome:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_render::HtmlPresenter;
    use folio_runtime::{CmdRecord, ProgramSimulator};
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Records payloads and answers with a canned outcome.
    struct MockTransport {
        outcome: Result<u16, TransportError>,
        seen: Mutex<Vec<ContactPayload>>,
    }

    impl MockTransport {
        fn new(outcome: Result<u16, TransportError>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn seen(&self) -> Vec<ContactPayload> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl FormTransport for MockTransport {
        fn submit(&self, payload: &ContactPayload) -> Result<u16, TransportError> {
            self.seen.lock().unwrap().push(payload.clone());
            self.outcome.clone()
        }
    }

    fn fill(sim: &mut ProgramSimulator<ContactModel>) {
        sim.send(ContactMsg::Edit(ContactField::Name, "Ada".into()));
        sim.send(ContactMsg::Edit(ContactField::Email, "ada@example.com".into()));
        sim.send(ContactMsg::Edit(ContactField::Message, "Hello there".into()));
    }

    #[test]
    fn success_clears_fields() {
        let transport = MockTransport::new(Ok(200));
        let mut sim = ProgramSimulator::new(ContactModel::new(transport.clone()));
        sim.init();
        fill(&mut sim);
        sim.send(ContactMsg::Submit);

        assert_eq!(sim.model().status(), SubmitStatus::Success);
        for field in ContactField::ALL {
            assert_eq!(sim.model().form().get(field), "");
        }
        assert_eq!(
            transport.seen(),
            vec![ContactPayload {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                subject: None,
                message: "Hello there".into(),
            }]
        );
        assert!(
            sim.command_log()
                .contains(&CmdRecord::Task(Some("contact-submit".into())))
        );
        let html = sim.capture_frame().to_owned();
        assert!(html.contains(SUCCESS_MESSAGE));
    }

    #[test]
    fn rejected_status_keeps_fields() {
        let transport = MockTransport::new(Ok(422));
        let mut sim = ProgramSimulator::new(ContactModel::new(transport));
        fill(&mut sim);
        sim.send(ContactMsg::Submit);
        assert_eq!(sim.model().status(), SubmitStatus::Error);
        assert_eq!(sim.model().form().get(ContactField::Name), "Ada");
        assert_eq!(sim.model().form().get(ContactField::Message), "Hello there");
        let html = sim.capture_frame();
        assert!(html.contains(ERROR_MESSAGE));
        assert!(html.contains(r#"value="Ada""#));
    }

    #[test]
    fn network_failure_is_an_error() {
        let transport = MockTransport::new(Err(TransportError::Network("refused".into())));
        let mut sim = ProgramSimulator::new(ContactModel::new(transport));
        fill(&mut sim);
        sim.send(ContactMsg::Submit);
        assert_eq!(sim.model().status(), SubmitStatus::Error);
        assert_eq!(
            sim.model().form().get(ContactField::Email),
            "ada@example.com"
        );
    }

    #[test]
    fn endpoint_sets_form_action() {
        let form = ContactForm::with_endpoint("https://example.test/f/abc");
        let node = form.form().render(&FormState::default());
        let html = HtmlPresenter::new().render_node(&node);
        assert!(html.contains(r#"action="https://example.test/f/abc""#), "{html}");
        let default = ContactForm::new().form().render(&FormState::default());
        assert!(HtmlPresenter::new().render_node(&default).contains(DEFAULT_ENDPOINT));
    }

    #[test]
    fn invalid_form_never_reaches_transport() {
        let transport = MockTransport::new(Ok(200));
        let mut sim = ProgramSimulator::new(ContactModel::new(transport.clone()));
        sim.send(ContactMsg::Edit(ContactField::Name, "Ada".into()));
        sim.send(ContactMsg::Edit(ContactField::Email, "ada-at-example".into()));
        sim.send(ContactMsg::Submit);

        assert!(transport.seen().is_empty());
        assert_eq!(sim.model().status(), SubmitStatus::Idle);
        let names: Vec<_> = sim.model().errors().iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["email", "message"]);
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let transport = MockTransport::new(Ok(200));
        let mut model = ContactModel::new(transport);
        let _ = model.update(ContactMsg::Submit);
        assert_eq!(model.errors().len(), 3);
        let _ = model.update(ContactMsg::Edit(ContactField::Email, "x".into()));
        assert!(model.errors().iter().all(|e| e.name != "email"));
        assert_eq!(model.errors().len(), 2);
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let transport = MockTransport::new(Ok(200));
        let mut model = ContactModel::new(transport);
        let _ = model.update(ContactMsg::Edit(ContactField::Name, "Ada".into()));
        let _ = model.update(ContactMsg::Edit(ContactField::Email, "a@b.io".into()));
        let _ = model.update(ContactMsg::Edit(ContactField::Message, "Hi".into()));

        let first = model.update(ContactMsg::Submit);
        assert!(matches!(first, Cmd::Task(..)));
        assert_eq!(model.status(), SubmitStatus::Submitting);

        let html = HtmlPresenter::new().render(&model.view());
        assert!(html.contains(BUSY_LABEL));
        assert!(html.contains("disabled"));

        let second = model.update(ContactMsg::Submit);
        assert!(matches!(second, Cmd::None));
    }

    #[test]
    fn subject_is_trimmed_and_omitted_when_blank() {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, " Ada ");
        form.set(ContactField::Email, "ada@example.com");
        form.set(ContactField::Subject, "   ");
        form.set(ContactField::Message, "Hi");
        let payload = form.payload().unwrap();
        assert_eq!(payload.subject, None);
        assert_eq!(payload.name, "Ada");
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"name":"Ada","email":"ada@example.com","message":"Hi"}"#
        );

        form.set(ContactField::Subject, "Consulting");
        let json = serde_json::to_value(form.payload().unwrap()).unwrap();
        assert_eq!(json["subject"], "Consulting");
    }

    #[test]
    fn classify_statuses() {
        assert_eq!(classify(Ok(200)), Ok(()));
        assert_eq!(classify(Ok(204)), Ok(()));
        assert_eq!(classify(Ok(299)), Ok(()));
        assert_eq!(classify(Ok(302)), Err(SubmitError::Rejected(302)));
        assert_eq!(classify(Ok(500)), Err(SubmitError::Rejected(500)));
        let err = classify(Err(TransportError::Network("dns".into()))).unwrap_err();
        assert_eq!(err.to_string(), "submission failed: network error: dns");
    }

    #[test]
    fn deferred_submit_parks_the_payload_for_the_host() {
        let mut model = ContactModel::deferred(ContactForm::with_endpoint("https://example.test/f/abc"));
        assert!(model.is_deferred());
        assert_eq!(model.endpoint(), "https://example.test/f/abc");
        let _ = model.update(ContactMsg::Submit);
        assert_eq!(model.take_pending(), None);
        assert_eq!(model.status(), SubmitStatus::Idle);

        let _ = model.update(ContactMsg::Edit(ContactField::Name, "Ada".into()));
        let _ = model.update(ContactMsg::Edit(ContactField::Email, "ada@example.com".into()));
        let _ = model.update(ContactMsg::Edit(ContactField::Message, "Hi".into()));
        assert!(model.update(ContactMsg::Submit).is_none());
        assert_eq!(model.status(), SubmitStatus::Submitting);
        let payload = model.take_pending().unwrap();
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(model.take_pending(), None);

        assert!(model.update(ContactMsg::Submit).is_none());
        assert_eq!(model.take_pending(), None);

        let _ = model.update(ContactMsg::Completed(classify(Ok(503))));
        assert_eq!(model.status(), SubmitStatus::Error);
        assert_eq!(model.form().get(ContactField::Name), "Ada");

        let _ = model.update(ContactMsg::Submit);
        assert!(model.take_pending().is_some());
        let _ = model.update(ContactMsg::Completed(classify(Ok(200))));
        assert_eq!(model.status(), SubmitStatus::Success);
        assert_eq!(model.form().get(ContactField::Message), "");
    }

    #[test]
    fn field_names_round_trip() {
        for field in ContactField::ALL {
            assert_eq!(ContactField::from_name(field.name()), Some(field));
        }
        assert_eq!(ContactField::from_name("phone"), None);
    }

    #[test]
    fn idle_view_has_no_banner() {
        let model = ContactModel::new(MockTransport::new(Ok(200)));
        let view = model.view();
        assert_eq!(view.len(), 1);
        let html = HtmlPresenter::new().render(&view);
        assert!(html.starts_with("<form"));
        assert!(html.contains(r#"action="https://formspree.io/f/mvgqyevv""#));
        assert!(html.contains(SUBMIT_LABEL));
    }
}
