use std::sync::Arc;

#[tokio::main]
async fn main() {
    virtunest_observability::init();

    // The product set is fixed and known-good; a seed failure is a
    // programming error, not a runtime condition.
    let catalog = virtunest_catalog::seed::catalog().expect("seed catalog is valid");
    tracing::info!(packs = catalog.len(), "catalog seeded");

    let app = virtunest_api::app::build_app(Arc::new(catalog));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
