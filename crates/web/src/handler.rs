use crate::body::ResponseBody;
use crate::fn_trait::FnTrait;
use crate::responder::Responder;
use crate::{FromRequest, RequestContext};
use async_trait::async_trait;
use http::Response;
use std::marker::PhantomData;

/// Processes one routed request into a response.
///
/// Extraction or binding failures do not surface here: a handler renders them
/// through [`Responder`], so every routed request gets a response.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    async fn invoke(&self, req: RequestContext<'_, '_>) -> Response<ResponseBody>;
}

/// a `FnTrait` holder which represents any async Fn
pub struct FnHandler<F, Args> {
    f: F,
    _phantom: PhantomData<fn(Args)>,
}

impl<F, Args> FnHandler<F, Args>
where
    F: FnTrait<Args>,
{
    fn new(f: F) -> Self {
        Self { f, _phantom: PhantomData }
    }
}

/// Wraps an async function into a [`RequestHandler`].
///
/// The function's parameters are extracted from the request through
/// [`FromRequest`] and its return value is rendered through [`Responder`].
pub fn handler_fn<F, Args>(f: F) -> FnHandler<F, Args>
where
    F: FnTrait<Args>,
{
    FnHandler::new(f)
}

#[async_trait]
impl<F, Args> RequestHandler for FnHandler<F, Args>
where
    F: for<'r> FnTrait<Args::Output<'r>> + Send + Sync,
    for<'r> <F as FnTrait<Args::Output<'r>>>::Output: Responder,
    Args: FromRequest,
{
    async fn invoke(&self, req: RequestContext<'_, '_>) -> Response<ResponseBody> {
        match Args::from_request(&req).await {
            Ok(args) => {
                let responder = self.f.call(args).await;
                responder.response_to(&req)
            }
            Err(err) => err.response_to(&req),
        }
    }
}
