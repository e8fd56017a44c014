#![allow(dead_code)]

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

// Scratch documentation project laid out as <root>/docs/{docs.json,deribit_openapi.json}.
pub struct TempProject {
    dir: TempDir,
}

impl TempProject {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("failed to allocate temp project")?;
        fs::create_dir_all(dir.path().join("docs"))?;
        Ok(Self { dir })
    }

    pub fn with_documents(docs: &Value, openapi: &Value) -> Result<Self> {
        let project = Self::new()?;
        project.write_docs(docs)?;
        project.write_openapi(openapi)?;
        Ok(project)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn docs_path(&self) -> PathBuf {
        self.root().join("docs/docs.json")
    }

    pub fn openapi_path(&self) -> PathBuf {
        self.root().join("docs/deribit_openapi.json")
    }

    pub fn write_docs(&self, docs: &Value) -> Result<()> {
        write_pretty(&self.docs_path(), docs)
    }

    pub fn write_openapi(&self, openapi: &Value) -> Result<()> {
        write_pretty(&self.openapi_path(), openapi)
    }

    pub fn read_docs_raw(&self) -> Result<String> {
        fs::read_to_string(self.docs_path()).context("reading docs.json")
    }

    pub fn read_docs(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.read_docs_raw()?)?)
    }
}

fn write_pretty(path: &Path, value: &Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))
}

pub fn navsync_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_navsync"));
    cmd.env_remove("NAVSYNC_ROOT")
        .env_remove("NAVSYNC_DOCS")
        .env_remove("NAVSYNC_OPENAPI")
        .env_remove("RUST_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd.output().context("failed to spawn navsync")?;
    Ok(output)
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// Navigation config with a curated "Methods overview" block and a sibling tab
// that must survive every run untouched.
pub fn sample_docs() -> Value {
    json!({
        "$schema": "https://example.com/docs.json",
        "theme": "mint",
        "name": "Exchange API",
        "navigation": {
            "tabs": [
                {
                    "tab": "Guides",
                    "groups": [
                        { "group": "Getting started", "pages": ["index", "quickstart"] }
                    ]
                },
                {
                    "tab": "Methods",
                    "groups": [
                        {
                            "group": "Methods overview",
                            "pages": [
                                "api-reference/overview",
                                { "group": "Authentication", "pages": [] },
                                {
                                    "group": "Session Management",
                                    "icon": "clock",
                                    "pages": ["api-reference/session-management/stale"]
                                },
                                { "group": "Trading", "pages": ["api-reference/trading/old-page"] },
                                { "group": "Wallet", "pages": ["api-reference/wallet/get-privateget_address_book"] }
                            ]
                        }
                    ]
                }
            ]
        }
    })
}

pub fn sample_openapi() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": { "title": "Exchange", "version": "2.1.1" },
        "paths": {
            "/public/auth": {
                "get": { "tags": ["Authentication", "Public"], "summary": "Authenticate" }
            },
            "/private/logout": {
                "get": { "tags": ["Authentication", "WebSocket Only"] }
            },
            "/public/set_heartbeat": {
                "get": { "tags": ["Session Management", "Public"] }
            },
            "/private/get_positions": {
                "get": { "tags": ["Trading"] }
            },
            "/private/buy": {
                "parameters": [{ "name": "instrument_name", "in": "query" }],
                "get": { "tags": ["Trading"] }
            },
            "/public/hello": {
                "get": { "tags": ["Chat"] }
            },
            "/private/get_subaccounts": {
                "get": { "tags": ["Account Management"] }
            }
        }
    })
}
