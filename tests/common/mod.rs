#![allow(dead_code)]

pub mod http {
    use std::io::{Read, Write};
    use std::net::{SocketAddr, TcpStream};
    use std::time::Duration;

    /// Write a raw request and read until the server goes quiet.
    pub fn send_request(addr: &SocketAddr, req: &str) -> String {
        let mut stream = TcpStream::connect(addr).unwrap();
        stream.write_all(req.as_bytes()).unwrap();
        stream
            .set_read_timeout(Some(Duration::from_millis(200)))
            .unwrap();
        let mut buf = Vec::new();
        loop {
            let mut tmp = [0u8; 1024];
            match stream.read(&mut tmp) {
                Ok(0) => break,
                Ok(n) => buf.extend_from_slice(&tmp[..n]),
                Err(ref e)
                    if e.kind() == std::io::ErrorKind::WouldBlock
                        || e.kind() == std::io::ErrorKind::TimedOut =>
                {
                    break
                }
                Err(e) => panic!("read error: {:?}", e),
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    /// Build a request with a JSON body and the matching Content-Length.
    pub fn request_with_body(method: &str, path: &str, body: &str) -> String {
        format!(
            "{method} {path} HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
            body.len()
        )
    }

    pub fn request(method: &str, path: &str) -> String {
        format!("{method} {path} HTTP/1.1\r\nHost: localhost\r\n\r\n")
    }

    /// `(status, content_type, body)`
    pub fn parse_response_parts(resp: &str) -> (u16, String, String) {
        let (headers, body) = resp.split_once("\r\n\r\n").unwrap_or((resp, ""));
        let mut status = 0;
        let mut content_type = String::new();
        for line in headers.lines() {
            if line.starts_with("HTTP/1.1") {
                status = line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or("0")
                    .parse()
                    .unwrap();
            } else if let Some((name, val)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-type") {
                    content_type = val.trim().to_string();
                }
            }
        }
        (status, content_type, body.to_string())
    }

    pub fn parse_json_response(resp: &str) -> (u16, serde_json::Value) {
        let (status, content_type, body) = parse_response_parts(resp);
        assert!(
            content_type.starts_with("application/json"),
            "expected JSON, got {content_type:?}: {body}"
        );
        (status, serde_json::from_str(&body).unwrap())
    }
}

pub mod test_server {
    use std::net::{SocketAddr, TcpListener};
    use std::sync::Once;
    use std::time::Duration;
    use users_api::config::{HttpConfig, ServiceConfig};
    use users_api::server::{serve, AppService, RunningServer};
    use users_api::store::StoreConfig;

    /// Ensures May coroutines are configured only once
    static MAY_INIT: Once = Once::new();

    pub fn setup_may_runtime() {
        MAY_INIT.call_once(|| {
            may::config().set_stack_size(0x8000);
        });
    }

    /// Running service on a random local port, stopped on drop.
    pub struct TestServer {
        handle: Option<RunningServer>,
        addr: SocketAddr,
    }

    impl TestServer {
        pub fn new() -> Self {
            Self::with_store(StoreConfig::default())
        }

        pub fn with_store(store: StoreConfig) -> Self {
            setup_may_runtime();
            let config = ServiceConfig {
                store,
                ..ServiceConfig::default()
            };
            Self::with_service(users_api::cli::build_service(&config))
        }

        pub fn with_service(service: AppService) -> Self {
            setup_may_runtime();
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);
            let handle = serve(service, &HttpConfig { addr }).unwrap();
            handle.wait_accepting(Duration::from_millis(250)).unwrap();
            Self {
                handle: Some(handle),
                addr,
            }
        }

        pub fn addr(&self) -> SocketAddr {
            self.addr
        }

        pub fn running(&self) -> Option<&RunningServer> {
            self.handle.as_ref()
        }
    }

    impl Drop for TestServer {
        fn drop(&mut self) {
            if let Some(handle) = self.handle.take() {
                handle.shutdown();
            }
        }
    }
}
