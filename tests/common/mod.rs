//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;

use git2::{Oid, Repository, Signature};
use ghostwriter::{ClientConfig, Config, OpenAiClient};
use serde_json::{Value, json};
use wiremock::MockServer;

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    /// Get the test signature for commits.
    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Write a file relative to the repository root.
    pub fn write(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write test file");
    }

    /// Stage a file and commit it. Returns the commit OID.
    pub fn commit_file(&self, name: &str, content: &str, message: &str) -> Oid {
        self.write(name, content);

        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let sig = self.signature();
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }
}

/// A chat completions response body carrying `content`.
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
    })
}

/// Client settings pointing at a mock server.
pub fn mock_client_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        organization: Some("org-test".to_string()),
        base_url: format!("{}/v1", server.uri()),
        ..ClientConfig::new("sk-test")
    }
}

/// A completion client pointing at a mock server.
pub fn mock_client(server: &MockServer, config: &Config) -> OpenAiClient {
    OpenAiClient::new(&mock_client_config(server), config).expect("Failed to build client")
}
