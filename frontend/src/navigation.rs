use std::rc::Rc;

use leptos::{provide_context, use_context};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::{json, Value};

/// One term of a host domain predicate. Passed through to the host
/// verbatim; the widget never validates it.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainTerm {
    pub field: String,
    pub operator: String,
    pub value: Value,
}

impl DomainTerm {
    pub fn new(field: impl Into<String>, operator: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

/// A request to open a filtered view in the host application.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRequest {
    pub target_model: String,
    pub view_modes: Vec<String>,
    pub domain: Vec<DomainTerm>,
    pub display_mode: String,
}

impl ViewRequest {
    pub fn list(target_model: impl Into<String>) -> Self {
        Self {
            target_model: target_model.into(),
            view_modes: vec!["list".into(), "form".into()],
            domain: Vec::new(),
            display_mode: "current".into(),
        }
    }

    pub fn with_term(mut self, term: DomainTerm) -> Self {
        self.domain.push(term);
        self
    }

    fn domain_json(&self) -> Value {
        Value::Array(
            self.domain
                .iter()
                .map(|t| json!([t.field, t.operator, t.value]))
                .collect(),
        )
    }

    /// Serializes the request into the host's action URL. The domain rides
    /// along as percent-encoded JSON triples.
    pub fn to_action_url(&self) -> String {
        let domain = self.domain_json().to_string();
        format!(
            "/host/action?model={}&views={}&display={}&domain={}",
            utf8_percent_encode(&self.target_model, NON_ALPHANUMERIC),
            utf8_percent_encode(&self.view_modes.join(","), NON_ALPHANUMERIC),
            utf8_percent_encode(&self.display_mode, NON_ALPHANUMERIC),
            utf8_percent_encode(&domain, NON_ALPHANUMERIC),
        )
    }
}

fn open_in_host(request: &ViewRequest) {
    let url = request.to_action_url();
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&url);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    log::info!("host navigation (no window): {url}");
}

/// Hands `ViewRequest`s to the host application. The default delegate
/// assigns the action URL to `window.location`; tests provide a recorder.
#[derive(Clone)]
pub struct HostNavigator(Rc<dyn Fn(ViewRequest)>);

impl Default for HostNavigator {
    fn default() -> Self {
        Self(Rc::new(|request| open_in_host(&request)))
    }
}

impl HostNavigator {
    pub fn new(open: impl Fn(ViewRequest) + 'static) -> Self {
        Self(Rc::new(open))
    }

    pub fn open(&self, request: ViewRequest) {
        (self.0)(request);
    }
}

pub fn use_host_navigator() -> HostNavigator {
    match use_context::<HostNavigator>() {
        Some(navigator) => navigator,
        None => {
            let navigator = HostNavigator::default();
            provide_context(navigator.clone());
            navigator
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn action_url_encodes_model_views_and_domain() {
        let request = ViewRequest::list("hr.attendance")
            .with_term(DomainTerm::new("check_in", ">=", "2024-03-01"))
            .with_term(DomainTerm::new("employee_id.gender", "=", "male"));
        let url = request.to_action_url();

        assert!(url.starts_with("/host/action?model=hr%2Eattendance&views=list%2Cform"));
        assert!(url.contains("display=current"));
        // The domain is JSON triples, percent-encoded.
        assert!(url.contains("%22check%5Fin%22"));
        assert!(url.contains("%22male%22"));
    }

    #[test]
    fn domain_json_preserves_term_order() {
        let request = ViewRequest::list("project.task")
            .with_term(DomainTerm::new("stage_id", "=", 7))
            .with_term(DomainTerm::new("date_deadline", ">=", "2024-04-01"));
        assert_eq!(
            request.domain_json(),
            serde_json::json!([
                ["stage_id", "=", 7],
                ["date_deadline", ">=", "2024-04-01"]
            ])
        );
    }

    #[test]
    fn navigator_delegates_to_injected_callback() {
        let seen: Rc<RefCell<Vec<ViewRequest>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let navigator = HostNavigator::new(move |request| sink.borrow_mut().push(request));

        navigator.open(ViewRequest::list("hr.leave"));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].target_model, "hr.leave");
        assert_eq!(seen[0].view_modes, vec!["list", "form"]);
    }
}
