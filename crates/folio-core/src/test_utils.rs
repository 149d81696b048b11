//! Test doubles for the gateway seams.
//!
//! Only compiled when running tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::gateway::wire::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerateVideoResponse,
    GeneratedSample, GenerateVideosRequest, Part, VideoFile, VideoOperation,
    VideoOperationResponse,
};
use crate::gateway::{ClientFactory, CredentialProvider, Gateway, GenAiClient, Pacer};

pub const TEST_API_KEY: &str = "test-key";

/// Canned answers plus a record of what the gateway asked for.
#[derive(Debug, Default)]
pub struct Script {
    pub content: Option<Result<GenerateContentResponse, GatewayError>>,
    pub start: Option<Result<VideoOperation, GatewayError>>,
    /// Answers to successive polls; once drained every poll reports "still running".
    pub polls: VecDeque<Result<VideoOperation, GatewayError>>,
    pub poll_count: u32,
    pub clients_created: u32,
    pub content_requests: Vec<(String, GenerateContentRequest)>,
    pub video_requests: Vec<(String, GenerateVideosRequest)>,
}

/// [`ClientFactory`] handing out clients that replay a shared [`Script`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedFactory {
    pub script: Arc<Mutex<Script>>,
    pub fail_create: bool,
}

impl ScriptedFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(self, response: Result<GenerateContentResponse, GatewayError>) -> Self {
        self.script.lock().unwrap().content = Some(response);
        self
    }

    pub fn with_start(self, operation: Result<VideoOperation, GatewayError>) -> Self {
        self.script.lock().unwrap().start = Some(operation);
        self
    }

    pub fn with_polls(self, polls: impl IntoIterator<Item = VideoOperation>) -> Self {
        self.script.lock().unwrap().polls = polls.into_iter().map(Ok).collect();
        self
    }

    pub fn poll_count(&self) -> u32 {
        self.script.lock().unwrap().poll_count
    }

    pub fn clients_created(&self) -> u32 {
        self.script.lock().unwrap().clients_created
    }

    pub fn last_content_request(&self) -> Option<(String, GenerateContentRequest)> {
        self.script.lock().unwrap().content_requests.last().cloned()
    }

    pub fn last_video_request(&self) -> Option<(String, GenerateVideosRequest)> {
        self.script.lock().unwrap().video_requests.last().cloned()
    }
}

impl ClientFactory for ScriptedFactory {
    fn create(&self) -> Result<Box<dyn GenAiClient>, GatewayError> {
        if self.fail_create {
            return Err(GatewayError::Credential("no API key configured".to_string()));
        }
        self.script.lock().unwrap().clients_created += 1;
        Ok(Box::new(ScriptedClient {
            script: Arc::clone(&self.script),
        }))
    }
}

struct ScriptedClient {
    script: Arc<Mutex<Script>>,
}

#[async_trait(?Send)]
impl GenAiClient for ScriptedClient {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GatewayError> {
        let mut script = self.script.lock().unwrap();
        script
            .content_requests
            .push((model.to_string(), request.clone()));
        script
            .content
            .clone()
            .unwrap_or_else(|| Ok(GenerateContentResponse::default()))
    }

    async fn start_video_generation(
        &self,
        model: &str,
        request: &GenerateVideosRequest,
    ) -> Result<VideoOperation, GatewayError> {
        let mut script = self.script.lock().unwrap();
        script
            .video_requests
            .push((model.to_string(), request.clone()));
        script
            .start
            .clone()
            .unwrap_or_else(|| Ok(pending_operation()))
    }

    async fn poll_video_operation(
        &self,
        operation: &VideoOperation,
    ) -> Result<VideoOperation, GatewayError> {
        let mut script = self.script.lock().unwrap();
        script.poll_count += 1;
        script.polls.pop_front().unwrap_or_else(|| {
            Ok(VideoOperation {
                done: false,
                ..operation.clone()
            })
        })
    }

    fn api_key(&self) -> &str {
        TEST_API_KEY
    }
}

/// [`CredentialProvider`] that records picker invocations.
#[derive(Debug, Default)]
pub struct MockCredentials {
    pub selected: bool,
    pub opened: Mutex<u32>,
}

impl MockCredentials {
    pub fn selected() -> Self {
        Self {
            selected: true,
            ..Self::default()
        }
    }

    pub fn unselected() -> Self {
        Self::default()
    }

    pub fn open_count(&self) -> u32 {
        *self.opened.lock().unwrap()
    }
}

#[async_trait(?Send)]
impl CredentialProvider for MockCredentials {
    async fn has_selected_key(&self) -> Result<bool, GatewayError> {
        Ok(self.selected)
    }

    async fn open_select_key(&self) -> Result<(), GatewayError> {
        *self.opened.lock().unwrap() += 1;
        Ok(())
    }
}

/// [`Pacer`] that returns immediately and records the requested pauses.
#[derive(Debug, Default)]
pub struct RecordingPacer {
    pub pauses: Mutex<Vec<Duration>>,
}

impl RecordingPacer {
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Pacer for RecordingPacer {
    async fn pause(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
    }
}

/// Gateway wired to the given doubles with default config.
pub fn test_gateway(
    factory: &ScriptedFactory,
    credentials: Arc<MockCredentials>,
    pacer: Arc<RecordingPacer>,
) -> Gateway {
    test_gateway_with_config(GatewayConfig::default(), factory, credentials, pacer)
}

pub fn test_gateway_with_config(
    config: GatewayConfig,
    factory: &ScriptedFactory,
    credentials: Arc<MockCredentials>,
    pacer: Arc<RecordingPacer>,
) -> Gateway {
    Gateway::new(config, Arc::new(factory.clone()), credentials, pacer)
}

pub fn pending_operation() -> VideoOperation {
    VideoOperation {
        name: "models/veo/operations/op-1".to_string(),
        ..VideoOperation::default()
    }
}

pub fn finished_operation(uri: &str) -> VideoOperation {
    VideoOperation {
        done: true,
        response: Some(VideoOperationResponse {
            generate_video_response: Some(GenerateVideoResponse {
                generated_samples: vec![GeneratedSample {
                    video: Some(VideoFile {
                        uri: Some(uri.to_string()),
                    }),
                }],
            }),
        }),
        ..pending_operation()
    }
}

/// Response whose first candidate holds exactly `parts`.
pub fn response_with_parts(parts: Vec<Part>) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(Content { role: None, parts }),
            grounding_metadata: None,
        }],
    }
}
