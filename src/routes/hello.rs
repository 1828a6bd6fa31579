use actix_web::{get, Responder};

/// Illustrative endpoint registered by the factory.
///
/// Returns a fixed greeting with the default text content type, useful for
/// checking that a bootstrapped application is serving requests.
#[get("/hello")]
pub async fn hello() -> impl Responder {
    "Hello, World! :)"
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn test_hello_endpoint() {
        let app = test::init_service(actix_web::App::new().service(hello)).await;

        let req = test::TestRequest::get().uri("/hello").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);

        let body = test::read_body(resp).await;
        assert_eq!(body, "Hello, World! :)".as_bytes());
    }
}
