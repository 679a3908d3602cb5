//! Minimal HTTP/1.1 server serving canned HTML pages for integration tests.
//!
//! Pages are keyed by request target (path plus raw query). Unknown targets
//! get a 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// One page: `<title>` and a single paragraph of body text.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub body: String,
}

impl Page {
    pub fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    fn html(&self) -> String {
        format!(
            "<!DOCTYPE html><html><head><title>{}</title></head><body><p>{}</p></body></html>",
            self.title, self.body
        )
    }
}

/// Starts a server in a background thread. Returns the origin
/// (e.g. "http://127.0.0.1:12345"), without a trailing slash.
pub fn start(pages: Vec<(&str, Page)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let pages: Arc<HashMap<String, Page>> =
        Arc::new(pages.into_iter().map(|(t, p)| (t.to_string(), p)).collect());
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let pages = Arc::clone(&pages);
            thread::spawn(move || handle(stream, &pages));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream, pages: &HashMap<String, Page>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    let (status, body) = match pages.get(target) {
        Some(page) => ("200 OK", page.html()),
        None => ("404 Not Found", "<html><body>not found</body></html>".to_string()),
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}
