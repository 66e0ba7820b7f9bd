//! `multipart/form-data` bodies for uploads.

use std::io::{Cursor, Read};

use bytes::Bytes;
use mime::Mime;
use multipart::client::lazy::Multipart;
use serde::Serialize;

use crate::Result;

/// A file to upload alongside a message-like payload.
#[derive(Debug, Clone)]
pub struct File {
    pub name: String,
    /// Defaults to `application/octet-stream`.
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl File {
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> File {
        File {
            name: name.into(),
            content_type: None,
            data: data.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> File {
        self.content_type = Some(content_type.into());
        self
    }

    fn mime(&self) -> Mime {
        self.content_type
            .as_deref()
            .and_then(|c| c.parse().ok())
            .unwrap_or(mime::APPLICATION_OCTET_STREAM)
    }
}

/// Collects form fields, then renders them into a single buffered body.
pub struct Form {
    fields: Multipart<'static, 'static>,
}

impl Form {
    pub fn new() -> Form {
        Form {
            fields: Multipart::new(),
        }
    }

    pub fn json_part<T: Serialize + ?Sized>(&mut self, name: &str, payload: &T) -> Result<()> {
        let data = serde_json::to_vec(payload)?;
        self.fields.add_stream(
            name.to_owned(),
            Cursor::new(data),
            None::<String>,
            Some(mime::APPLICATION_JSON),
        );
        Ok(())
    }

    /// Text fields are written ahead of json and file parts.
    pub fn text_part(&mut self, name: &str, value: &str) {
        self.fields.add_text(name.to_owned(), value.to_owned());
    }

    pub fn file_part(&mut self, name: &str, file: &File) {
        self.fields.add_stream(
            name.to_owned(),
            Cursor::new(file.data.clone()),
            Some(escape_quotes(&file.name)),
            Some(file.mime()),
        );
    }

    /// Returns the outer content type and the finished body.
    pub fn finish(mut self) -> Result<(String, Bytes)> {
        let mut prepared = self.fields.prepare().map_err(|e| e.error)?;
        let content_type = format!("multipart/form-data; boundary={}", prepared.boundary());

        let mut body = Vec::new();
        prepared.read_to_end(&mut body)?;

        Ok((content_type, Bytes::from(body)))
    }
}

impl Default for Form {
    fn default() -> Self {
        Form::new()
    }
}

fn escape_quotes(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// `payload_json` followed by `file0..fileN`.
pub fn encode_with_files<T: Serialize + ?Sized>(payload: &T, files: &[File]) -> Result<(String, Bytes)> {
    let mut form = Form::new();
    form.json_part("payload_json", payload)?;

    for (i, file) in files.iter().enumerate() {
        form.file_part(&format!("file{}", i), file);
    }

    form.finish()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Splits a `multipart/form-data` body into `(headers, data)` pairs.
    pub(crate) fn parts(content_type: &str, body: &[u8]) -> Vec<(String, Vec<u8>)> {
        let boundary = content_type
            .strip_prefix("multipart/form-data; boundary=")
            .unwrap();
        let delimiter = format!("--{}", boundary);
        let next = format!("\r\n{}", delimiter);

        let start = find(body, delimiter.as_bytes()).unwrap();
        let mut rest = &body[start..];
        let mut parts = Vec::new();
        loop {
            assert!(rest.starts_with(delimiter.as_bytes()));
            rest = &rest[delimiter.len()..];
            if rest.starts_with(b"--") {
                break;
            }
            rest = &rest[2..];

            let header_end = find(rest, b"\r\n\r\n").unwrap();
            let headers = String::from_utf8(rest[..header_end].to_vec()).unwrap();
            rest = &rest[header_end + 4..];

            let data_end = find(rest, next.as_bytes()).unwrap();
            parts.push((headers, rest[..data_end].to_vec()));
            rest = &rest[data_end + 2..];
        }

        parts
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    #[test]
    fn test_boundary() {
        let encode = || encode_with_files(&serde_json::json!({}), &[]).unwrap().0;
        let (first, second) = (encode(), encode());

        assert!(first.starts_with("multipart/form-data; boundary="));
        assert_ne!(first, second);
    }

    #[test]
    fn test_encode_with_files() {
        let png = vec![0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n', 0, 1, 2];
        let files = vec![
            File::new("a.png", png.clone()).with_content_type("image/png"),
            File::new("we\"ird\\.bin", &b"raw"[..]),
        ];

        let (content_type, body) = encode_with_files(&serde_json::json!({"content": "hi"}), &files).unwrap();
        let parts = parts(&content_type, &body);
        assert_eq!(parts.len(), 3);

        assert_eq!(
            parts[0].0,
            "Content-Disposition: form-data; name=\"payload_json\"\r\nContent-Type: application/json"
        );
        assert_eq!(parts[0].1, br#"{"content":"hi"}"#);

        assert_eq!(
            parts[1].0,
            "Content-Disposition: form-data; name=\"file0\"; filename=\"a.png\"\r\nContent-Type: image/png"
        );
        assert_eq!(parts[1].1, png);

        assert_eq!(
            parts[2].0,
            "Content-Disposition: form-data; name=\"file1\"; filename=\"we\\\"ird\\\\.bin\"\r\nContent-Type: application/octet-stream"
        );
        assert_eq!(parts[2].1, b"raw");
    }

    #[test]
    fn test_text_part() {
        let mut form = Form::new();
        form.text_part("name", "wave");
        form.text_part("tags", "hello, wave");
        let (content_type, body) = form.finish().unwrap();

        let parts = parts(&content_type, &body);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].0, "Content-Disposition: form-data; name=\"name\"");
        assert_eq!(parts[0].1, b"wave");
        assert_eq!(parts[1].1, b"hello, wave");
    }

    #[test]
    fn test_invalid_content_type_falls_back() {
        let file = File::new("x", &b""[..]).with_content_type("not a mime");
        assert_eq!(file.mime(), mime::APPLICATION_OCTET_STREAM);
    }
}
