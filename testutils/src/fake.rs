use httpmock::prelude::*;
use httpmock::{
    Mock,
    Then,
    When,
};
use pw_core::prelude::*;
use serde_json::json;

use crate::constants::*;

pub struct MockServerBuilder {
    server: MockServer,
    handlers: Vec<Box<dyn Fn(When, Then)>>,
    mock_ids: Vec<usize>,
}

fn print_req(req: &HttpMockRequest) -> bool {
    // Use println instead of info! so that this works outside of the lib crate
    println!("    Received: {} {}", req.method(), req.uri().path());
    true
}

impl MockServerBuilder {
    pub fn new() -> MockServerBuilder {
        MockServerBuilder {
            server: MockServer::start(),
            handlers: vec![],
            mock_ids: vec![],
        }
    }

    // Each registered handler must have been hit exactly once
    pub fn assert(&self) {
        for id in &self.mock_ids {
            println!("checking assertions for mock {id}");
            Mock::new(*id, &self.server).assert()
        }
    }

    pub fn handle<F: Fn(When, Then) + 'static>(&mut self, f: F) -> &mut Self {
        self.handlers.push(Box::new(move |w, t| {
            let w = w.matches(print_req);
            f(w, t);
        }));
        self
    }

    pub fn handle_pod_list(&mut self, namespace: &str, label_selector: &str, pods: Vec<corev1::Pod>) -> &mut Self {
        let path = format!("/api/v1/namespaces/{namespace}/pods");
        let label_selector = label_selector.to_string();
        self.handle(move |when, then| {
            when.method(GET).path(&path).query_param("labelSelector", &label_selector);
            then.json_body(pod_list(&pods));
        })
    }

    pub fn handle_pod_list_status(&mut self, namespace: &str, code: u16, reason: &str) -> &mut Self {
        let path = format!("/api/v1/namespaces/{namespace}/pods");
        let reason = reason.to_string();
        self.handle(move |when, then| {
            when.method(GET).path(&path);
            then.status(code).json_body(status_failure(code, &reason));
        })
    }

    pub fn build(&mut self) {
        for f in self.handlers.iter() {
            self.mock_ids.push(self.server.mock(f).id);
        }

        // Print all unmatched/unhandled requests for easier debugging;
        // this has to go last so that the other mock rules have a chance
        // to match first
        self.server.mock(|when, _| {
            when.matches(print_req);
        });
    }

    pub fn url(&self) -> http::Uri {
        http::Uri::try_from(self.server.url("/")).unwrap()
    }
}

impl Default for MockServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn make_fake_apiserver() -> (MockServerBuilder, kube::Client) {
    let builder = MockServerBuilder::new();
    let mut config = kube::Config::new(builder.url());
    config.default_namespace = TEST_NAMESPACE.into();
    let client = kube::Client::try_from(config).unwrap();
    (builder, client)
}

pub fn pod_list(pods: &[corev1::Pod]) -> serde_json::Value {
    json!({
        "kind": "PodList",
        "apiVersion": "v1",
        "metadata": {"resourceVersion": "1"},
        "items": pods,
    })
}

pub fn status_failure(code: u16, reason: &str) -> serde_json::Value {
    json!({
      "kind": "Status",
      "apiVersion": "v1",
      "metadata": {},
      "status": "Failure",
      "message": format!("fake apiserver says {reason}"),
      "reason": reason,
      "code": code
    })
}
