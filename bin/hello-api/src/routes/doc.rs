use utoipa::OpenApi;

use crate::routes::hello;

#[derive(OpenApi)]
#[openapi(info(
    title = "hello-api",
    description = "Greeting API backed by Postgres",
    version = "0.1.0",
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(hello::HelloApi::openapi());
    root
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn docs_describe_hello_route_only() {
        let docs = get_docs();
        let paths: Vec<&String> = docs.paths.paths.keys().collect();
        assert_eq!(paths, vec!["/api/hello"]);
    }
}
