//! The fixed step list and its dependency table.

use std::fmt;

/// Something a step needs from an earlier step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prerequisite {
    /// An access token from `token_acquisition`.
    Token,
}

impl fmt::Display for Prerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prerequisite::Token => write!(f, "no token available"),
        }
    }
}

/// One entry of the run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Connectivity,
    TokenAcquisition,
    TokenValidation,
    SttConnectivity,
    TtsConnectivity,
    SttFunctional,
    TtsFunctional,
}

impl Step {
    /// Every step, in the order the suite runs them.
    pub const ORDER: [Step; 7] = [
        Step::Connectivity,
        Step::TokenAcquisition,
        Step::TokenValidation,
        Step::SttConnectivity,
        Step::TtsConnectivity,
        Step::SttFunctional,
        Step::TtsFunctional,
    ];

    /// Result name.
    pub fn name(self) -> &'static str {
        match self {
            Step::Connectivity => "connectivity",
            Step::TokenAcquisition => "token_acquisition",
            Step::TokenValidation => "token_validation",
            Step::SttConnectivity => "stt_connectivity",
            Step::TtsConnectivity => "tts_connectivity",
            Step::SttFunctional => "stt_functional",
            Step::TtsFunctional => "tts_functional",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Step::Connectivity => "Basic endpoint reachability test",
            Step::TokenAcquisition => "Access token request test",
            Step::TokenValidation => "Token format validation test",
            Step::SttConnectivity => "Speech-to-text endpoint reachability test",
            Step::TtsConnectivity => "Text-to-speech endpoint reachability test",
            Step::SttFunctional => "Speech-to-text recognition with synthesized audio",
            Step::TtsFunctional => "Text-to-speech synthesis of catalog samples",
        }
    }

    /// What must be available before the step can run.
    pub fn prerequisite(self) -> Option<Prerequisite> {
        match self {
            Step::TokenValidation | Step::SttFunctional | Step::TtsFunctional => {
                Some(Prerequisite::Token)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_fixed() {
        let names: Vec<_> = Step::ORDER.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            [
                "connectivity",
                "token_acquisition",
                "token_validation",
                "stt_connectivity",
                "tts_connectivity",
                "stt_functional",
                "tts_functional",
            ]
        );
    }

    #[test]
    fn only_token_consumers_have_prerequisites() {
        let dependent: Vec<_> = Step::ORDER
            .iter()
            .filter(|s| s.prerequisite().is_some())
            .map(|s| s.name())
            .collect();
        assert_eq!(dependent, ["token_validation", "stt_functional", "tts_functional"]);
    }

    #[test]
    fn missing_token_message() {
        assert_eq!(Prerequisite::Token.to_string(), "no token available");
    }
}
