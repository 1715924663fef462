use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderValue, X_FRAME_OPTIONS, X_XSS_PROTECTION},
    Error,
};
use futures::future::{ready, LocalBoxFuture, Ready};

/// Adds anti-XSS and anti-framing headers to every response.
pub struct SecureHeaders;

impl<S, B> Transform<S, ServiceRequest> for SecureHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SecureHeadersService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecureHeadersService { service }))
    }
}

pub struct SecureHeadersService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for SecureHeadersService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            let headers = res.headers_mut();
            headers.insert(X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block"));
            headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("deny"));
            Ok(res)
        })
    }
}
