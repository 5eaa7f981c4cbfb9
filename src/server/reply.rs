//! Response values.
//!
//! Handlers build a [`Reply`]; only the request loop turns it into a
//! `tiny_http::Response`.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::PathBuf;

use tiny_http::{Header, Request, Response, StatusCode};

use crate::utils::mime::types::{JSON, PLAIN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Empty,
    Bytes(Cow<'static, [u8]>),
    /// `len` bytes of a file starting at `start`, streamed on send.
    File { path: PathBuf, start: u64, len: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    pub body: Body,
}

impl Reply {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Body::Empty,
        }
    }

    pub fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    pub fn with_bytes(self, content_type: &'static str, bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        self.with_header("Content-Type", content_type)
            .with_body(Body::Bytes(bytes.into()))
    }

    pub fn json(status: u16, body: Vec<u8>) -> Self {
        Self::new(status).with_bytes(JSON, body)
    }

    pub fn text(status: u16, message: impl Into<String>) -> Self {
        Self::new(status).with_bytes(PLAIN, message.into().into_bytes())
    }

    pub fn not_found() -> Self {
        Self::text(404, "404 Not Found")
    }

    /// Server shutting down.
    pub fn unavailable() -> Self {
        Self::text(503, "503 Service Unavailable")
    }

    /// First value of a header, case-insensitive.
    #[cfg(test)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Read the whole body into memory.
    #[cfg(test)]
    pub fn body_bytes(&self) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        self.body.reader()?.0.read_to_end(&mut out)?;
        Ok(out)
    }

    /// Send over `request`.
    pub fn send(self, request: Request) -> io::Result<()> {
        let (reader, len) = self.body.reader()?;
        let headers = self
            .headers
            .iter()
            .filter_map(|(name, value)| Header::from_bytes(*name, value.as_bytes()).ok())
            .collect();
        let response = Response::new(StatusCode(self.status), headers, reader, Some(len), None);
        request.respond(response)
    }
}

impl Body {
    /// Reader over the body plus its exact length.
    fn reader(&self) -> io::Result<(Box<dyn Read + Send>, usize)> {
        Ok(match self {
            Self::Empty => (Box::new(io::empty()), 0),
            Self::Bytes(bytes) => (Box::new(Cursor::new(bytes.clone())), bytes.len()),
            Self::File { path, start, len } => {
                let mut file = File::open(path)?;
                file.seek(SeekFrom::Start(*start))?;
                (Box::new(file.take(*len)), *len as usize)
            }
        })
    }
}
