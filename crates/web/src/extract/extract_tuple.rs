use crate::extract::from_request::FromRequest;
use crate::responder::Responder;
use crate::{RequestContext, ResponseBody};
use async_trait::async_trait;
use http::Response;

macro_rules! impl_from_request_for_tuple {
    ($either:ident, $($param:ident)*) => {
        #[async_trait]
        impl<$($param,)*> FromRequest for ($($param,)*)
        where
            $($param: FromRequest,)*
            $(for <'any> $param::Output<'any>: Send,)*
        {
            type Output<'r> = ($($param::Output<'r>,)*);
            type Error = $either<$($param::Error,)*>;

            #[allow(non_snake_case)]
            async fn from_request<'r>(req: &'r RequestContext<'_, '_>) -> Result<Self::Output<'r>, Self::Error> {
                Ok(($($param::from_request(req).await.map_err($either::$param)?,)*))
            }
        }

        #[derive(Debug)]
        pub enum $either<$($param,)*> {
            $(
            $param($param),
            )*
        }

        impl<$($param,)*> Responder for $either<$($param,)*>
            where
                $(
                $param: Responder,
                )*
        {
            #[allow(non_snake_case)]
            fn response_to(self, req: &RequestContext) -> Response<ResponseBody> {
                match self {
                    $(
                        $either::$param($param) => $param.response_to(req),
                    )*
                }
            }
        }
    }
}

impl_from_request_for_tuple! { EitherA, A }
impl_from_request_for_tuple! { EitherAB, A B }
impl_from_request_for_tuple! { EitherABC, A B C }
impl_from_request_for_tuple! { EitherABCD, A B C D }
impl_from_request_for_tuple! { EitherABCDE, A B C D E }
impl_from_request_for_tuple! { EitherABCDEF, A B C D E F }
impl_from_request_for_tuple! { EitherABCDEFG, A B C D E F G }
impl_from_request_for_tuple! { EitherABCDEFGH, A B C D E F G H }
