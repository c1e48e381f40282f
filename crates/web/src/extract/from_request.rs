use crate::responder::Responder;
use crate::{RequestContext, ResponseBody};
use async_trait::async_trait;
use http::{Response, StatusCode};
use modelbind::BindError;
use tracing::error;

/// Extracts typed values from a request context.
///
/// Implementations produce owned values, so extracted arguments can be handed
/// to a handler function without tying the handler to the request lifetime.
/// An extraction failure is itself a [`Responder`] and renders the error
/// response for the request.
#[async_trait]
pub trait FromRequest {
    type Output<'r>: Send;
    type Error: Responder + Send;

    async fn from_request<'r>(req: &'r RequestContext<'_, '_>) -> Result<Self::Output<'r>, Self::Error>;
}

#[async_trait]
impl<T> FromRequest for Option<T>
where
    T: FromRequest,
{
    type Output<'r> = Option<T::Output<'r>>;
    type Error = T::Error;

    async fn from_request<'r>(req: &'r RequestContext<'_, '_>) -> Result<Self::Output<'r>, Self::Error> {
        match T::from_request(req).await {
            Ok(t) => Ok(Some(t)),
            Err(_) => Ok(None),
        }
    }
}

#[async_trait]
impl<T> FromRequest for Result<T, T::Error>
where
    T: FromRequest,
{
    type Output<'r> = Result<T::Output<'r>, T::Error>;
    type Error = BindError;

    async fn from_request<'r>(req: &'r RequestContext<'_, '_>) -> Result<Self::Output<'r>, Self::Error> {
        Ok(T::from_request(req).await)
    }
}

#[async_trait]
impl FromRequest for () {
    type Output<'r> = ();
    type Error = BindError;

    async fn from_request<'r>(_req: &'r RequestContext<'_, '_>) -> Result<Self::Output<'r>, Self::Error> {
        Ok(())
    }
}

/// Binding failures map onto client errors except for an unregistered
/// binder, which is a server misconfiguration.
impl Responder for BindError {
    fn response_to(self, req: &RequestContext) -> Response<ResponseBody> {
        match self {
            BindError::Missing { .. } | BindError::Convert { .. } | BindError::Encoding { .. } => {
                (StatusCode::BAD_REQUEST, self.to_string()).response_to(req)
            }
            BindError::NoBinder { .. } => {
                error!(cause = %self, "no binder registered for a routed parameter");
                (StatusCode::INTERNAL_SERVER_ERROR, "binder not registered").response_to(req)
            }
        }
    }
}
