mod body;

mod fn_trait;
mod handler;
mod request;
mod responder;
mod server;

pub mod extract;
pub mod router;

pub use body::ResponseBody;
pub use extract::FromRequest;
pub use fn_trait::FnTrait;
pub use handler::handler_fn;
pub use handler::FnHandler;
pub use handler::RequestHandler;
pub use request::PathParams;
pub use request::RequestContext;
pub use responder::Json;
pub use responder::Responder;
pub use router::Router;
pub use server::BoundServer;
pub use server::Server;
pub use server::ServerBuildError;
