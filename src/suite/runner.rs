//! Suite orchestrator.
//!
//! Runs [`Step::ORDER`] strictly in sequence against one shared
//! [`HttpClient`].  A step never aborts the run: failures, transport errors
//! and missing prerequisites all become failed results, so every run yields
//! exactly seven results.
//!
//! ```text
//! connectivity ─▶ token_acquisition ─┬─▶ token_validation
//!                                    │
//! stt_connectivity   tts_connectivity│
//!                                    ├─▶ stt_functional (one sub-probe per case)
//!                                    └─▶ tts_functional (one sub-probe per sample)
//! ```

use crate::catalog::{self, DEFAULT_SAMPLE};
use crate::config::endpoints::{STT_PATH_SUFFIX, TOKEN_PATH_SUFFIX, TTS_PATH_SUFFIX};
use crate::config::{AppConfig, ConfigError, Endpoints};
use crate::http::HttpClient;
use crate::probe::{
    acquire_token, check_connectivity, token_validation, AuthToken, SttProbe, TtsProbe,
};
use crate::report::{TestResult, TestSuiteRun};

use super::plan::{Prerequisite, Step};

/// One configured run of the suite.
pub struct TestSuite<'a> {
    client: &'a dyn HttpClient,
    config: &'a AppConfig,
    endpoints: Endpoints,
    subscription_key: &'a str,
}

impl<'a> TestSuite<'a> {
    /// Validate `config` and resolve the service URLs.
    ///
    /// Fails before any request is made when the key is missing or neither
    /// a region nor a custom endpoint is configured.
    pub fn new(client: &'a dyn HttpClient, config: &'a AppConfig) -> Result<Self, ConfigError> {
        let subscription_key = config.subscription_key()?;
        let endpoints = config.endpoints()?;

        Ok(Self {
            client,
            config,
            endpoints,
            subscription_key,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Execute every step once, in order.
    pub async fn run(&self) -> TestSuiteRun {
        log::info!("Starting speech service tests");
        log::info!("Token endpoint: {}", self.endpoints.token_url);
        log::info!("STT endpoint: {}", self.endpoints.stt_url);
        log::info!("TTS endpoint: {}", self.endpoints.tts_url);

        let mut token: Option<AuthToken> = None;
        let mut results = Vec::with_capacity(Step::ORDER.len());

        for step in Step::ORDER {
            log::info!("Running {}", step.name());

            let result = match step.prerequisite() {
                Some(prerequisite) if token.is_none() => {
                    log::warn!("{}: {prerequisite}", step.name());
                    TestResult::prerequisite_missing(step.name(), step.description(), prerequisite)
                }
                _ => self.run_step(step, &mut token).await,
            };

            results.push(result);
        }

        TestSuiteRun::new(self.endpoints.clone(), results)
    }

    /// Run one step.  `token_acquisition` fills `token`; the token consumers
    /// read it.
    async fn run_step(&self, step: Step, token: &mut Option<AuthToken>) -> TestResult {
        let timeouts = &self.config.timeouts;
        let (name, description) = (step.name(), step.description());

        match step {
            Step::Connectivity => {
                check_connectivity(
                    self.client,
                    name,
                    description,
                    &self.endpoints.token_url,
                    TOKEN_PATH_SUFFIX,
                    timeouts.connectivity(),
                )
                .await
            }
            Step::TokenAcquisition => {
                let outcome = acquire_token(
                    self.client,
                    name,
                    description,
                    &self.endpoints.token_url,
                    self.subscription_key,
                    timeouts.token(),
                )
                .await;
                *token = outcome.token;
                outcome.result
            }
            Step::SttConnectivity => {
                check_connectivity(
                    self.client,
                    name,
                    description,
                    &self.endpoints.stt_url,
                    STT_PATH_SUFFIX,
                    timeouts.connectivity(),
                )
                .await
            }
            Step::TtsConnectivity => {
                check_connectivity(
                    self.client,
                    name,
                    description,
                    &self.endpoints.tts_url,
                    TTS_PATH_SUFFIX,
                    timeouts.connectivity(),
                )
                .await
            }
            Step::TokenValidation | Step::SttFunctional | Step::TtsFunctional => {
                let Some(token) = token.as_ref() else {
                    return TestResult::prerequisite_missing(
                        name,
                        description,
                        Prerequisite::Token,
                    );
                };
                match step {
                    Step::TokenValidation => token_validation(name, description, token),
                    Step::SttFunctional => self.stt_sweep(token).await,
                    _ => self.tts_sweep(token).await,
                }
            }
        }
    }

    async fn stt_sweep(&self, token: &AuthToken) -> TestResult {
        let step = Step::SttFunctional;
        let probe = SttProbe::new(
            self.client,
            &self.endpoints.stt_url,
            &self.config.stt,
            self.config.timeouts.functional(),
        );

        let mut sub_results = Vec::with_capacity(self.config.stt.cases.len());
        for case in &self.config.stt.cases {
            sub_results.push(probe.run(token, case).await);
        }

        TestResult::sweep(step.name(), step.description(), sub_results)
    }

    async fn tts_sweep(&self, token: &AuthToken) -> TestResult {
        let step = Step::TtsFunctional;
        let probe = TtsProbe::new(
            self.client,
            &self.endpoints.tts_url,
            catalog::output_format(&self.config.tts.output_format),
            self.config.timeouts.functional(),
        );

        let mut samples: Vec<_> = self
            .config
            .tts
            .samples
            .iter()
            .filter_map(|name| {
                let found = catalog::find(name);
                if found.is_none() {
                    log::warn!("tts sample '{name}' is not in the catalog, skipping");
                }
                found
            })
            .collect();
        if samples.is_empty() {
            log::warn!("no configured tts sample found, using the default text");
            samples.push(&DEFAULT_SAMPLE);
        }

        let mut sub_results = Vec::with_capacity(samples.len());
        for sample in samples {
            sub_results.push(probe.run(token, sample).await);
        }

        TestResult::sweep(step.name(), step.description(), sub_results)
    }
}
