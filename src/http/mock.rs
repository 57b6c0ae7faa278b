//! `ScriptedClient`: test-only [`HttpClient`] that replays canned replies.
//!
//! Replies are matched on method + URL (query string excluded).  Unmatched
//! requests fail with [`HttpError::Connect`], which is what an unreachable
//! host looks like to the probes.  Every request is recorded for assertions.

use std::sync::Mutex;

use async_trait::async_trait;

use super::client::{HttpClient, HttpError, HttpRequest, HttpResponse, Method};

struct Rule {
    method: Method,
    url: String,
    reply: Result<HttpResponse, HttpError>,
}

/// Canned-response [`HttpClient`].
///
/// ```ignore
/// let client = ScriptedClient::new()
///     .respond(Method::Post, TOKEN_URL, HttpResponse::new(200, "tok"))
///     .fail(Method::Get, BASE_URL, HttpError::Timeout);
/// ```
#[derive(Default)]
pub struct ScriptedClient {
    rules: Vec<Rule>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply with `response` to every `method` request on `url`.
    pub fn respond(mut self, method: Method, url: &str, response: HttpResponse) -> Self {
        self.rules.push(Rule {
            method,
            url: url.to_string(),
            reply: Ok(response),
        });
        self
    }

    /// Shorthand for a status + text body reply.
    pub fn status(self, method: Method, url: &str, status: u16, body: &str) -> Self {
        self.respond(method, url, HttpResponse::new(status, body))
    }

    /// Fail every `method` request on `url` with `error`.
    pub fn fail(mut self, method: Method, url: &str, error: HttpError) -> Self {
        self.rules.push(Rule {
            method,
            url: url.to_string(),
            reply: Err(error),
        });
        self
    }

    /// Snapshot of every request sent so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests sent to `url`.
    pub fn requests_to(&self, url: &str) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.url == url)
            .collect()
    }
}

#[async_trait]
impl HttpClient for ScriptedClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let reply = self
            .rules
            .iter()
            .find(|r| r.method == request.method && r.url == request.url)
            .map(|r| r.reply.clone())
            .unwrap_or_else(|| {
                Err(HttpError::Connect(format!(
                    "no route to {}",
                    request.url
                )))
            });

        self.requests.lock().unwrap().push(request);
        reply
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn replays_and_records() {
        let client = ScriptedClient::new().status(Method::Get, "https://a", 404, "nope");

        let resp = client
            .send(HttpRequest::get("https://a", Duration::from_secs(1)))
            .await
            .unwrap();
        assert_eq!(resp.status, 404);
        assert_eq!(resp.text(), "nope");

        let err = client
            .send(HttpRequest::post("https://a", Duration::from_secs(1)))
            .await
            .unwrap_err();
        assert!(matches!(err, HttpError::Connect(_)));

        assert_eq!(client.requests().len(), 2);
        assert_eq!(client.requests_to("https://a").len(), 2);
    }
}
