//! One-shot HTTP responder for tests that exercise the network paths.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::thread::{self, JoinHandle};

/// Answer a single request with `status` and `body`.
///
/// Joining the handle yields the raw request, head and body.
pub(crate) fn respond_once(status: &str, body: &str) -> (SocketAddr, JoinHandle<String>) {
	let listener = TcpListener::bind("127.0.0.1:0").unwrap();
	let addr = listener.local_addr().unwrap();
	let response = format!(
		"HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
		body.len()
	);

	let handle = thread::spawn(move || {
		let (stream, _) = listener.accept().unwrap();
		let mut reader = BufReader::new(stream);
		let request = read_request(&mut reader);
		reader.get_mut().write_all(response.as_bytes()).unwrap();
		request
	});
	(addr, handle)
}

/// An address nothing listens on.
pub(crate) fn closed_port() -> SocketAddr {
	let listener = TcpListener::bind("127.0.0.1:0").unwrap();
	listener.local_addr().unwrap()
}

fn read_request(reader: &mut impl BufRead) -> String {
	let mut head = String::new();
	let mut content_length = 0;
	let mut chunked = false;
	loop {
		let mut line = String::new();
		if reader.read_line(&mut line).unwrap() == 0 {
			break;
		}
		let lower = line.to_ascii_lowercase();
		if let Some(value) = lower.strip_prefix("content-length:") {
			content_length = value.trim().parse().unwrap();
		}
		if lower.starts_with("transfer-encoding:") && lower.contains("chunked") {
			chunked = true;
		}
		head.push_str(&line);
		if line == "\r\n" {
			break;
		}
	}

	let body = if chunked {
		read_chunked(reader)
	} else {
		let mut body = vec![0; content_length];
		reader.read_exact(&mut body).unwrap();
		body
	};
	head + &String::from_utf8_lossy(&body)
}

fn read_chunked(reader: &mut impl BufRead) -> Vec<u8> {
	let mut body = Vec::new();
	loop {
		let mut size_line = String::new();
		reader.read_line(&mut size_line).unwrap();
		let size_hex = size_line.split(';').next().unwrap_or_default().trim();
		let size = usize::from_str_radix(size_hex, 16).unwrap();
		let mut chunk = vec![0; size + 2];
		reader.read_exact(&mut chunk).unwrap();
		if size == 0 {
			return body;
		}
		body.extend_from_slice(&chunk[..size]);
	}
}
