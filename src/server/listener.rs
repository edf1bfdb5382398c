use super::AppService;
use crate::config::HttpConfig;
use may::coroutine::JoinHandle;
use std::io;
use std::net::{SocketAddr, TcpStream};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const PROBE_INTERVAL: Duration = Duration::from_millis(5);

/// The accept loop of a started service.
pub struct RunningServer {
    addr: SocketAddr,
    accept_loop: JoinHandle<()>,
}

/// Bind `config.addr` and start accepting connections for `service`.
///
/// `config.addr` must name a concrete port; it is reported back as-is.
///
/// # Errors
///
/// Returns the bind error from `may_minihttp` (address in use, permission).
pub fn serve(service: AppService, config: &HttpConfig) -> io::Result<RunningServer> {
    let accept_loop = may_minihttp::HttpServer(service).start(config.addr)?;
    info!(addr = %config.addr, "accept loop started");
    Ok(RunningServer {
        addr: config.addr,
        accept_loop,
    })
}

impl RunningServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Block until a TCP connect to the listener succeeds or `timeout` passes.
    pub fn wait_accepting(&self, timeout: Duration) -> io::Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            match TcpStream::connect(self.addr) {
                Ok(_) => return Ok(()),
                Err(e) if Instant::now() >= deadline => {
                    return Err(io::Error::new(
                        io::ErrorKind::TimedOut,
                        format!("{} not accepting after {timeout:?}: {e}", self.addr),
                    ))
                }
                Err(_) => thread::sleep(PROBE_INTERVAL),
            }
        }
    }

    /// Cancel the accept loop and wait for it to unwind.
    pub fn shutdown(self) {
        debug!(addr = %self.addr, "shutting down accept loop");
        // SAFETY: the loop only owns its listener socket, which is closed when
        // the cancelled coroutine unwinds.
        unsafe { self.accept_loop.coroutine().cancel() };
        let _ = self.accept_loop.join();
    }

    /// Block for as long as the accept loop runs.
    pub fn wait(self) -> io::Result<()> {
        let addr = self.addr;
        self.accept_loop
            .join()
            .map_err(|_| io::Error::other(format!("accept loop on {addr} panicked")))
    }
}
