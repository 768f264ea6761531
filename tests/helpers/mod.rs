use anyhow::{anyhow, Context, Result};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use tempfile::TempDir;

/// One HTTP request as received by [`StubAnkiConnect`]
#[allow(dead_code)]
#[derive(Debug)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: serde_json::Value,
}

#[allow(dead_code)]
impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Local HTTP endpoint that answers exactly one request with a canned reply
///
/// Only understands what reqwest sends for a JSON POST: a `Content-Length`
/// body read through a buffered reader. Chunked transfer encoding is not
/// decoded.
pub struct StubAnkiConnect {
    url: String,
    handle: JoinHandle<Result<CapturedRequest>>,
}

#[allow(dead_code)]
impl StubAnkiConnect {
    /// Reply like AnkiConnect does after adding a note
    pub fn accepting() -> Result<Self> {
        Self::respond_with("200 OK", r#"{"result": 1496198395707, "error": null}"#)
    }

    pub fn respond_with(status_line: &'static str, body: &'static str) -> Result<Self> {
        let listener =
            TcpListener::bind("127.0.0.1:0").context("Failed to bind stub AnkiConnect")?;
        let addr = listener.local_addr()?;

        let handle = thread::spawn(move || -> Result<CapturedRequest> {
            let (mut stream, _) = listener.accept()?;
            let captured = read_request(&mut stream)?;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes())?;
            stream.flush()?;
            Ok(captured)
        });

        Ok(Self {
            url: format!("http://{}", addr),
            handle,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Wait for the stub to finish and return what it received
    pub fn captured(self) -> Result<CapturedRequest> {
        self.handle
            .join()
            .map_err(|_| anyhow!("Stub AnkiConnect thread panicked"))?
    }
}

fn read_request(stream: &mut TcpStream) -> Result<CapturedRequest> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_ascii_lowercase(), value.trim().to_string()));
        }
    }

    let content_length = headers
        .iter()
        .find(|(k, _)| k == "content-length")
        .map(|(_, v)| v.parse::<usize>())
        .transpose()?
        .unwrap_or(0);
    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body)?;

    Ok(CapturedRequest {
        method,
        path,
        headers,
        body: serde_json::from_slice(&body).context("Request body is not JSON")?,
    })
}

/// URL on which nothing listens
#[allow(dead_code)]
pub fn unreachable_url() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

/// Temporary directory holding a settings file path
#[allow(dead_code)]
pub struct TestSettingsDir {
    _temp_dir: TempDir,
    pub settings_path: PathBuf,
}

#[allow(dead_code)]
impl TestSettingsDir {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let settings_path = temp_dir.path().join("qstardict").join("anki.toml");
        Ok(Self {
            _temp_dir: temp_dir,
            settings_path,
        })
    }

    /// Write an `[anki]` table pointing at `connect_url`
    pub fn with_connect_url(connect_url: &str) -> Result<Self> {
        let dir = Self::new()?;
        std::fs::create_dir_all(dir.settings_path.parent().context("No parent dir")?)?;
        std::fs::write(
            &dir.settings_path,
            format!("[anki]\nconnect_url = \"{}\"\ndeck_name = \"Vocabulary\"\n", connect_url),
        )?;
        Ok(dir)
    }
}
