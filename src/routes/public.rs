use axum::{Router, response::Html, routing::get};

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}
