//! Token acquisition and token-format validation.

use std::fmt;
use std::time::Duration;

use crate::http::{HttpClient, HttpRequest};
use crate::report::{Failure, TestDetail, TestResult, TokenDetail, TokenFormatDetail, TokenKind};

/// Shortest length accepted as a real access token.
pub const MIN_TOKEN_LEN: usize = 50;

/// Characters of the token shown in reports.
const PREVIEW_CHARS: usize = 20;

// ---------------------------------------------------------------------------
// AuthToken
// ---------------------------------------------------------------------------

/// Short-lived access token for one run.  `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First 20 characters, with `...` appended when the token is longer.
    pub fn preview(&self) -> String {
        if self.len() > PREVIEW_CHARS {
            let head: String = self.0.chars().take(PREVIEW_CHARS).collect();
            format!("{head}...")
        } else {
            self.0.clone()
        }
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthToken(<{} chars>)", self.len())
    }
}

// ---------------------------------------------------------------------------
// Token acquisition
// ---------------------------------------------------------------------------

/// Result of the token probe plus the token itself when one was issued.
#[derive(Debug, Clone)]
pub struct TokenOutcome {
    pub result: TestResult,
    pub token: Option<AuthToken>,
}

/// `POST` to the token-issuance endpoint.  Status 200 ⇒ the body is the
/// token; anything else ⇒ no token, with status and body recorded.
pub async fn acquire_token(
    client: &dyn HttpClient,
    name: &str,
    description: &str,
    token_url: &str,
    subscription_key: &str,
    timeout: Duration,
) -> TokenOutcome {
    log::info!("{name}: requesting access token");

    let request = HttpRequest::post(token_url, timeout)
        .header("Ocp-Apim-Subscription-Key", subscription_key)
        .header("Content-Type", "application/x-www-form-urlencoded");

    match client.send(request).await {
        Ok(response) if response.status == 200 && response.text().trim().is_empty() => {
            log::error!("{name}: token endpoint returned an empty body");
            let detail = TestDetail::Token(TokenDetail {
                status: Some(response.status),
                token_length: None,
            });
            TokenOutcome {
                result: TestResult::fail(
                    name,
                    description,
                    Some(detail),
                    Failure::InvalidResponse("empty token".into()),
                ),
                token: None,
            }
        }
        Ok(response) if response.status == 200 => {
            let token = AuthToken::new(response.text());
            log::info!("{name}: successfully obtained access token");
            let detail = TestDetail::Token(TokenDetail {
                status: Some(response.status),
                token_length: Some(token.len()),
            });
            TokenOutcome {
                result: TestResult::pass(name, description, detail),
                token: Some(token),
            }
        }
        Ok(response) => {
            log::error!("{name}: failed to get token, status {}", response.status);
            log::error!("{name}: response: {}", response.text());
            let detail = TestDetail::Token(TokenDetail {
                status: Some(response.status),
                token_length: None,
            });
            TokenOutcome {
                result: TestResult::fail(
                    name,
                    description,
                    Some(detail),
                    Failure::UnexpectedStatus {
                        status: response.status,
                        body: response.text(),
                    },
                ),
                token: None,
            }
        }
        Err(e) => {
            log::error!("{name}: request failed: {e}");
            let detail = TestDetail::Token(TokenDetail {
                status: None,
                token_length: None,
            });
            TokenOutcome {
                result: TestResult::fail(name, description, Some(detail), e.into()),
                token: None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Token-format validation
// ---------------------------------------------------------------------------

/// Pure format check: fewer than [`MIN_TOKEN_LEN`] characters fails.
///
/// Exactly two `.` separators classify the token as a JWT; anything else is
/// opaque.  The classification never fails a token on its own.
///
/// ```
/// use speech_endpoint_tester::probe::validate_token_format;
/// use speech_endpoint_tester::report::TokenKind;
///
/// let opaque = "a".repeat(62);
/// assert_eq!(validate_token_format(&opaque), Ok(TokenKind::Opaque));
/// assert!(validate_token_format("short").is_err());
/// ```
pub fn validate_token_format(token: &str) -> Result<TokenKind, Failure> {
    let length = token.chars().count();
    if length < MIN_TOKEN_LEN {
        return Err(Failure::TokenTooShort {
            length,
            minimum: MIN_TOKEN_LEN,
        });
    }

    Ok(classify(token))
}

fn classify(token: &str) -> TokenKind {
    if token.matches('.').count() == 2 {
        TokenKind::Structured
    } else {
        TokenKind::Opaque
    }
}

/// Wrap [`validate_token_format`] as a test result.
pub fn token_validation(name: &str, description: &str, token: &AuthToken) -> TestResult {
    let kind = classify(token.as_str());
    let detail = TestDetail::TokenFormat(TokenFormatDetail {
        length: token.len(),
        preview: token.preview(),
        kind,
    });

    match validate_token_format(token.as_str()) {
        Ok(_) => {
            log::info!("{name}: token appears to be {}", kind.label());
            TestResult::pass(name, description, detail)
        }
        Err(failure) => {
            log::warn!("{name}: {failure}");
            TestResult::fail(name, description, Some(detail), failure)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpError, Method, ScriptedClient};

    const TOKEN_URL: &str = "https://eastus.api.cognitive.microsoft.com/sts/v1.0/issuetoken";

    async fn acquire(client: &ScriptedClient) -> TokenOutcome {
        acquire_token(
            client,
            "token_acquisition",
            "Access token request test",
            TOKEN_URL,
            "my-key",
            Duration::from_secs(10),
        )
        .await
    }

    #[tokio::test]
    async fn status_200_yields_token() {
        let body = format!("{}==", "a".repeat(60));
        let client = ScriptedClient::new().status(Method::Post, TOKEN_URL, 200, &body);

        let outcome = acquire(&client).await;

        assert!(outcome.result.passed());
        assert_eq!(outcome.token.as_ref().map(AuthToken::as_str), Some(body.as_str()));

        let requests = client.requests();
        let sent = &requests[0];
        assert_eq!(sent.header_value("Ocp-Apim-Subscription-Key"), Some("my-key"));
        assert_eq!(
            sent.header_value("Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(sent.timeout, Duration::from_secs(10));
    }

    #[tokio::test]
    async fn status_401_yields_no_token() {
        let client =
            ScriptedClient::new().status(Method::Post, TOKEN_URL, 401, "Access denied");

        let outcome = acquire(&client).await;

        assert!(outcome.token.is_none());
        assert!(!outcome.result.passed());
        assert_eq!(
            outcome.result.failure(),
            Some(&Failure::UnexpectedStatus {
                status: 401,
                body: "Access denied".into()
            })
        );
    }

    #[tokio::test]
    async fn blank_200_body_yields_no_token() {
        let client = ScriptedClient::new().status(Method::Post, TOKEN_URL, 200, " \n");

        let outcome = acquire(&client).await;

        assert!(outcome.token.is_none());
        assert_eq!(
            outcome.result.failure(),
            Some(&Failure::InvalidResponse("empty token".into()))
        );
    }

    #[tokio::test]
    async fn transport_error_yields_no_token() {
        let client =
            ScriptedClient::new().fail(Method::Post, TOKEN_URL, HttpError::Timeout);
        let outcome = acquire(&client).await;

        assert!(outcome.token.is_none());
        assert_eq!(
            outcome.result.failure(),
            Some(&Failure::Transport(HttpError::Timeout))
        );
    }

    #[test]
    fn opaque_token_passes() {
        let token = format!("\"{}==", "a".repeat(59));
        assert_eq!(token.chars().count(), 62);
        assert_eq!(validate_token_format(&token), Ok(TokenKind::Opaque));
    }

    #[test]
    fn jwt_is_structured() {
        let token = format!("{}.{}.{}", "h".repeat(20), "p".repeat(40), "s".repeat(20));
        assert_eq!(validate_token_format(&token), Ok(TokenKind::Structured));
    }

    #[test]
    fn three_dots_is_opaque() {
        let token = format!(
            "{}.{}.{}.{}",
            "a".repeat(20),
            "b".repeat(20),
            "c".repeat(20),
            "d"
        );
        assert_eq!(validate_token_format(&token), Ok(TokenKind::Opaque));
    }

    #[test]
    fn short_token_fails() {
        assert_eq!(
            validate_token_format(&"x".repeat(49)),
            Err(Failure::TokenTooShort {
                length: 49,
                minimum: MIN_TOKEN_LEN
            })
        );
        assert!(validate_token_format(&"x".repeat(50)).is_ok());
        assert!(validate_token_format("").is_err());
    }

    #[test]
    fn validation_result_carries_preview() {
        let token = AuthToken::new("abcdefghijklmnopqrstuvwxyz".repeat(3));
        let result =
            token_validation("token_validation", "Token format validation test", &token);

        assert!(result.passed());
        match result.detail() {
            Some(TestDetail::TokenFormat(d)) => {
                assert_eq!(d.length, 78);
                assert_eq!(d.preview, "abcdefghijklmnopqrst...");
                assert_eq!(d.kind, TokenKind::Opaque);
            }
            other => panic!("unexpected detail {other:?}"),
        }
    }

    #[test]
    fn short_preview_is_whole_token() {
        assert_eq!(AuthToken::new("short").preview(), "short");
    }

    #[test]
    fn debug_redacts_token() {
        let token = AuthToken::new("secret-token-value");
        let printed = format!("{token:?}");
        assert!(!printed.contains("secret"));
        assert!(printed.contains("18 chars"));
    }
}
