//! Canned HTTP responses for exercising fetch paths in tests

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

/// A request path and its response body; `None` answers 404
pub type Route = (&'static str, Option<Vec<u8>>);

/// Serve canned responses on a loopback port for an exact number of
/// requests, returning the base URL to request against.
///
/// The listener is dropped after the last expected request, so a surplus
/// request fails with connection refused instead of hanging the test.
pub fn serve(routes: Vec<Route>, requests: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let base_url = format!("http://{}", listener.local_addr().expect("listener address"));

    thread::spawn(move || {
        for _ in 0..requests {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                return;
            }
            // drain headers
            loop {
                let mut header = String::new();
                match reader.read_line(&mut header) {
                    Ok(_) if header != "\r\n" && !header.is_empty() => continue,
                    _ => break,
                }
            }

            let path = request_line.split_whitespace().nth(1).unwrap_or("/");
            let body = routes
                .iter()
                .find(|(route, _)| *route == path)
                .and_then(|(_, body)| body.clone());

            let response = match body {
                Some(bytes) => {
                    let mut response = format!(
                        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                        bytes.len()
                    )
                    .into_bytes();
                    response.extend_from_slice(&bytes);
                    response
                }
                None => {
                    b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                        .to_vec()
                }
            };
            let _ = stream.write_all(&response);
        }
    });

    base_url
}
