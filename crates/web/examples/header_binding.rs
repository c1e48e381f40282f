use modelbind::{Binders, SplitHeaderBinderProvider};
use modelbind_web::extract::{HeaderParam, QueryParam};
use modelbind_web::router::get;
use modelbind_web::{handler_fn, param_key, Json, Router, Server};
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

param_key!(pub Hello => "Hello");
param_key!(pub Tag => "tag");

#[derive(Serialize, Debug)]
pub struct BindingResult {
    #[serde(rename = "Result")]
    result: Vec<String>,
}

// curl -v -H "Hello: x y,z" http://127.0.0.1:8080/binding
async fn binding(hello: HeaderParam<Hello, Option<Vec<String>>>) -> Json<BindingResult> {
    let result = hello.into_inner().unwrap_or_default();
    Json(BindingResult { result })
}

// curl -v -H "Hello: x y,z" http://127.0.0.1:8080/echo
async fn echo(hello: HeaderParam<Hello, Option<String>>) -> String {
    match hello.into_inner() {
        Some(value) => value,
        None => String::from("no hello header"),
    }
}

// curl -v "http://127.0.0.1:8080/search?tag=rust&tag=http"
async fn search(tags: QueryParam<Tag, Vec<String>>) -> Json<BindingResult> {
    Json(BindingResult { result: tags.into_inner() })
}

async fn default_handler() -> &'static str {
    "404 not found"
}

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let binders = Binders::builder().defaults().add_first(SplitHeaderBinderProvider::new()).build();

    let router = Router::builder()
        .route("/binding", get(handler_fn(binding)))
        .route("/echo", get(handler_fn(echo)))
        .route("/search", get(handler_fn(search)))
        .build();

    Server::builder()
        .router(router)
        .binders(binders)
        .address("127.0.0.1:8080")
        .default_handler(handler_fn(default_handler))
        .build()
        .unwrap()
        .start()
        .await;
}
