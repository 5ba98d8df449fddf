use crate::helpers::JsonResponse;
use crate::middleware::connection::*;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse},
    web, Error, HttpMessage,
};
use futures::future::{FutureExt, LocalBoxFuture};
use sqlx::MySqlPool;
use std::rc::Rc;
use tracing::Instrument;

pub struct ManagerMiddleware<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ManagerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<ServiceResponse<B>, Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let pool = req
            .app_data::<web::Data<MySqlPool>>()
            .map(|pool| pool.get_ref().clone());

        async move {
            let pool = pool.ok_or_else(|| {
                tracing::error!("no database pool registered for {}", req.path());
                JsonResponse::build().internal_server_error(CONNECT_ERROR)
            })?;

            // waits for a free slot up to the pool's acquire timeout
            let acquire_span = tracing::info_span!("Acquiring database connection");
            let conn = pool
                .acquire()
                .instrument(acquire_span)
                .await
                .map_err(|err| {
                    tracing::error!("Error connecting to database: {:?}", err);
                    JsonResponse::build().internal_server_error(CONNECT_ERROR)
                })?;

            if req.extensions_mut().insert(Connection::new(conn)).is_some() {
                tracing::error!("connection middleware already called once");
            }

            service.call(req).await
        }
        .boxed_local()
    }
}
