//! Common helpers for depview integration tests
//!
//! Every test runs the compiled `depview` binary in an isolated temp
//! directory, with a config path that does not exist unless the test writes
//! one, so the developer's own `~/.depview/config.toml` never leaks in.

// Not every helper is used by every test module.
#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use anyhow::Result;
use assert_cmd::Command;
use tempfile::TempDir;

use depview_cli::test_utils::ObjectListFixture;

/// Temp workspace plus a `depview` command builder bound to it.
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// Write a fixture into the workspace.
    pub fn write_fixture(&self, fixture: &ObjectListFixture) -> Result<PathBuf> {
        fixture.write_to(self.dir.path())
    }

    /// Path the binary reads its config from.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    /// Write `content` as the config file.
    pub fn write_config(&self, content: &str) -> Result<()> {
        std::fs::write(self.config_path(), content)?;
        Ok(())
    }

    /// `depview` with isolated config, no spinners and no colors.
    pub fn depview(&self) -> Command {
        let mut cmd = Command::cargo_bin("depview").unwrap();
        cmd.current_dir(self.dir.path())
            .env("DEPVIEW_CONFIG", self.config_path())
            .env("DEPVIEW_NO_PROGRESS", "1")
            .env("NO_COLOR", "1")
            .env("NO_PROXY", "127.0.0.1")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Minimal HTTP server answering one canned response per connection.
///
/// Each accepted connection gets the next response in order; the server
/// stops once the list is exhausted. Raw request heads are recorded.
pub struct MockEndpoint {
    pub url: String,
    pub requests: Arc<Mutex<Vec<String>>>,
    handle: Option<JoinHandle<()>>,
}

impl MockEndpoint {
    pub fn start(responses: Vec<(u16, String)>) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let url = format!("http://{}/v1/objects", listener.local_addr()?);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        let handle = std::thread::spawn(move || {
            for (status, body) in responses {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };

                let mut reader = BufReader::new(stream.try_clone().unwrap());
                let mut head = String::new();
                loop {
                    let mut line = String::new();
                    if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                        break;
                    }
                    head.push_str(&line);
                }
                recorded.lock().unwrap().push(head);

                let response = format!(
                    "HTTP/1.1 {status} Mock\r\nContent-Type: application/json\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        Ok(Self {
            url,
            requests,
            handle: Some(handle),
        })
    }

    /// Wait for the server thread and return the recorded request heads.
    pub fn finish(mut self) -> Vec<String> {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        self.requests.lock().unwrap().clone()
    }
}
