use crate::extract::from_request::FromRequest;
use crate::extract::{HeaderParam, ParamKey, QueryParam};
use crate::RequestContext;
use async_trait::async_trait;
use modelbind::{Bindable, BindError, ParamMeta};

#[async_trait]
impl<K, T> FromRequest for HeaderParam<K, T>
where
    K: ParamKey,
    T: Bindable + Send,
{
    type Output<'r> = HeaderParam<K, T>;
    type Error = BindError;

    async fn from_request<'r>(req: &'r RequestContext<'_, '_>) -> Result<Self::Output<'r>, Self::Error> {
        let meta = ParamMeta::header(K::NAME, T::SHAPE);
        req.bind_param(&meta).map(HeaderParam::new)
    }
}

#[async_trait]
impl<K, T> FromRequest for QueryParam<K, T>
where
    K: ParamKey,
    T: Bindable + Send,
{
    type Output<'r> = QueryParam<K, T>;
    type Error = BindError;

    async fn from_request<'r>(req: &'r RequestContext<'_, '_>) -> Result<Self::Output<'r>, Self::Error> {
        let meta = ParamMeta::query(K::NAME, T::SHAPE);
        req.bind_param(&meta).map(QueryParam::new)
    }
}
