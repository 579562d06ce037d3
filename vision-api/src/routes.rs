use crate::shell::shell;
use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use tower_http::compression::CompressionLayer;
use vision_app::domain::{Vision, VisionRequest};
use vision_app::AppContext;
use vision_errors::AppError;
use vision_ui::App;

pub fn build_router(app_context: AppContext, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);

    Router::new()
        .merge(json_api(app_context.clone()))
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options)
}

/// `POST /vision`: the same generation as the page, as plain JSON.
pub fn json_api<S>(app_context: AppContext) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/vision", post({
        let ctx = app_context;
        move |payload: Result<Json<VisionRequest>, JsonRejection>| {
            let ctx = ctx.clone();
            async move { handle_vision(ctx, payload).await }
        }
    }))
}

async fn handle_vision(
    ctx: AppContext,
    payload: Result<Json<VisionRequest>, JsonRejection>,
) -> Result<Json<Vision>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Rejected /vision body: {}", rejection.body_text());
        AppError::InvalidRequest(rejection.body_text())
    })?;
    ctx.generate_vision.execute(request).await.map(Json)
}
