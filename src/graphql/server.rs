use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;

use super::schema::RosterSchema;

/// GraphQL execution handler for POST requests.
pub async fn graphql_handler(
    State(schema): State<RosterSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// Human-readable landing page served on GET, a GraphiQL IDE pointed at the
/// same endpoint.
pub async fn landing_page() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

/// The single-endpoint router: GET `/` serves the landing page, POST `/`
/// executes GraphQL requests.
pub fn router(schema: RosterSchema) -> Router {
    Router::new()
        .route("/", get(landing_page).post(graphql_handler))
        .with_state(schema)
}

/// Bind and serve until the process is terminated.
pub async fn run_server(schema: RosterSchema, bind: &str, port: u16) -> std::io::Result<()> {
    let addr = format!("{}:{}", bind, port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "GraphQL server listening");
    axum::serve(listener, router(schema)).await
}
