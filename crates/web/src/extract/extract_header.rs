use crate::extract::from_request::FromRequest;
use crate::RequestContext;
use async_trait::async_trait;
use http::{HeaderMap, Method, Uri, Version};
use modelbind::BindError;

#[async_trait]
impl FromRequest for Method {
    type Output<'r> = Method;
    type Error = BindError;

    async fn from_request<'r>(req: &'r RequestContext<'_, '_>) -> Result<Self::Output<'r>, Self::Error> {
        Ok(req.method().clone())
    }
}

#[async_trait]
impl FromRequest for HeaderMap {
    type Output<'r> = HeaderMap;
    type Error = BindError;

    async fn from_request<'r>(req: &'r RequestContext<'_, '_>) -> Result<Self::Output<'r>, Self::Error> {
        Ok(req.headers().clone())
    }
}

#[async_trait]
impl FromRequest for Uri {
    type Output<'r> = Uri;
    type Error = BindError;

    async fn from_request<'r>(req: &'r RequestContext<'_, '_>) -> Result<Self::Output<'r>, Self::Error> {
        Ok(req.uri().clone())
    }
}

#[async_trait]
impl FromRequest for Version {
    type Output<'r> = Version;
    type Error = BindError;

    async fn from_request<'r>(req: &'r RequestContext<'_, '_>) -> Result<Self::Output<'r>, Self::Error> {
        Ok(req.version())
    }
}
