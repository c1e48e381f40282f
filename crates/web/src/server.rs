use crate::handler::RequestHandler;
use crate::router::Router;
use crate::{RequestContext, ResponseBody};
use http::{Request, Response, StatusCode};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use modelbind::Binders;
use std::convert::Infallible;
use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

pub struct ServerBuilder {
    router: Option<Router>,
    default_handler: Option<Box<dyn RequestHandler>>,
    address: Option<io::Result<Vec<SocketAddr>>>,
    binders: Binders,
}

impl ServerBuilder {
    fn new() -> Self {
        Self { router: None, default_handler: None, address: None, binders: Binders::default() }
    }

    pub fn address<A: ToSocketAddrs>(mut self, address: A) -> Self {
        self.address = Some(address.to_socket_addrs().map(|addrs| addrs.collect::<Vec<_>>()));
        self
    }

    pub fn router(mut self, router: Router) -> Self {
        self.router = Some(router);
        self
    }

    pub fn default_handler(mut self, request_handler: impl RequestHandler + 'static) -> Self {
        self.default_handler = Some(Box::new(request_handler));
        self
    }

    /// Replaces the default binder chain used to resolve handler parameters.
    pub fn binders(mut self, binders: Binders) -> Self {
        self.binders = binders;
        self
    }

    pub fn build(self) -> Result<Server, ServerBuildError> {
        let router = self.router.ok_or(ServerBuildError::MissingRouter)?;
        let address = match self.address {
            Some(Ok(address)) => address,
            Some(Err(e)) => return Err(ServerBuildError::InvalidAddress(e)),
            None => return Err(ServerBuildError::MissingAddress),
        };
        Ok(Server { router, default_handler: self.default_handler, address, binders: self.binders })
    }
}

pub struct Server {
    router: Router,
    default_handler: Option<Box<dyn RequestHandler>>,
    address: Vec<SocketAddr>,
    binders: Binders,
}

#[derive(Error, Debug)]
pub enum ServerBuildError {
    #[error("router must be set")]
    MissingRouter,
    #[error("address must be set")]
    MissingAddress,
    #[error("address cannot be resolved")]
    InvalidAddress(#[from] io::Error),
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::new()
    }

    /// Binds the listener without serving yet, so callers can learn the local
    /// address when binding to port 0.
    pub async fn bind(self) -> io::Result<BoundServer> {
        let listener = TcpListener::bind(self.address.as_slice()).await?;
        let local_addr = listener.local_addr()?;
        info!(address = %local_addr, "server started listening");

        let shared = Arc::new(Dispatcher {
            router: self.router,
            default_handler: self.default_handler,
            binders: self.binders,
        });
        Ok(BoundServer { listener, local_addr, shared })
    }

    pub async fn start(self) {
        match self.bind().await {
            Ok(bound_server) => bound_server.serve().await,
            Err(e) => error!(cause = %e, "bind server error"),
        }
    }
}

pub struct BoundServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    shared: Arc<Dispatcher>,
}

impl BoundServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub async fn serve(self) {
        loop {
            let (tcp_stream, _remote_addr) = match self.listener.accept().await {
                Ok(stream_and_addr) => stream_and_addr,
                Err(e) => {
                    warn!(cause = %e, "failed to accept");
                    continue;
                }
            };

            let dispatcher = Arc::clone(&self.shared);
            tokio::spawn(async move {
                let io = TokioIo::new(tcp_stream);
                let service = service_fn(move |req| {
                    let dispatcher = Arc::clone(&dispatcher);
                    async move { Ok::<_, Infallible>(dispatcher.dispatch(req).await) }
                });

                match http1::Builder::new().serve_connection(io, service).await {
                    Ok(_) => {
                        info!("finished process, connection shutdown");
                    }
                    Err(e) => {
                        error!("service has error, cause {}, connection shutdown", e);
                    }
                }
            });
        }
    }
}

struct Dispatcher {
    router: Router,
    default_handler: Option<Box<dyn RequestHandler>>,
    binders: Binders,
}

impl Dispatcher {
    async fn dispatch(&self, req: Request<Incoming>) -> Response<ResponseBody> {
        // handler parameters bind from headers and query only, the body is dropped
        let (parts, _body) = req.into_parts();

        let route_result = self.router.at(parts.uri.path());
        let request_context = RequestContext::new(&parts, route_result.params(), &self.binders);

        let handler_option = route_result
            .router_items()
            .iter()
            .filter(|item| item.filter().matches(&request_context))
            .map(|item| item.handler())
            .take(1)
            .next();

        match handler_option {
            Some(handler) => handler.invoke(request_context).await,
            None => match self.default_handler.as_deref() {
                Some(default_handler) => default_handler.invoke(request_context).await,
                None => not_found(),
            },
        }
    }
}

fn not_found() -> Response<ResponseBody> {
    Response::builder().status(StatusCode::NOT_FOUND).body(ResponseBody::from("404 not found")).unwrap()
}
