//! HTTP surface tests against a mock Azure OpenAI deployment

#[cfg(test)]
mod tests {
    use crate::common::ConfigFactory;
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use chat_gateway::server::HttpServer;
    use chat_gateway::utils::error::ErrorResponse;
    use serde_json::{Value, json};
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CHAT_PATH: &str = "/openai/deployments/gpt-test/chat/completions";

    fn completion(content: &str) -> Value {
        json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "finish_reason": "stop",
                "message": {"role": "assistant", "content": content}
            }],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
        })
    }

    fn chat(ip: &str, body: Value) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/ai/chat")
            .insert_header(("x-forwarded-for", ip))
            .set_json(body)
    }

    async fn state_for(server: &MockServer) -> web::Data<chat_gateway::server::AppState> {
        let config = ConfigFactory::with_endpoint(&server.uri());
        let http = HttpServer::new(&config).expect("server should build");
        web::Data::new(http.state().clone())
    }

    #[actix_web::test]
    async fn test_chat_round_trip_through_azure() {
        let azure = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CHAT_PATH))
            .and(query_param("api-version", "2024-06-01"))
            .and(header("api-key", "test-key"))
            .and(body_partial_json(json!({
                "messages": [
                    {"role": "system", "content": "Be brief."},
                    {"role": "user", "content": "Say hi!"}
                ],
                "max_tokens": 256,
                "n": 1
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("Hi!")))
            .expect(1)
            .mount(&azure)
            .await;

        let app = test::init_service(HttpServer::create_app(state_for(&azure).await)).await;

        let resp = test::call_service(
            &app,
            chat(
                "203.0.113.9",
                json!({"messages": [
                    {"role": "system", "content": "Be brief."},
                    {"role": "user", "content": "Say hi!"}
                ]}),
            )
            .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "reply": "Hi!",
                "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
            })
        );
    }

    #[actix_web::test]
    async fn test_rate_limited_requests_never_reach_azure() {
        let azure = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CHAT_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
            .expect(3)
            .mount(&azure)
            .await;

        let app = test::init_service(HttpServer::create_app(state_for(&azure).await)).await;
        let body = json!({"messages": [{"role": "user", "content": "hi"}]});

        let mut statuses = Vec::new();
        for _ in 0..5 {
            let resp = test::call_service(&app, chat("1.2.3.4", body.clone()).to_request()).await;
            statuses.push(resp.status());
        }

        assert_eq!(
            statuses,
            vec![
                StatusCode::OK,
                StatusCode::OK,
                StatusCode::OK,
                StatusCode::TOO_MANY_REQUESTS,
                StatusCode::TOO_MANY_REQUESTS,
            ]
        );
    }

    #[actix_web::test]
    async fn test_azure_error_status_is_bad_gateway_without_body_leak() {
        let azure = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CHAT_PATH))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"error": {"message": "key sk-live-123 revoked"}})),
            )
            .mount(&azure)
            .await;

        let app = test::init_service(HttpServer::create_app(state_for(&azure).await)).await;
        let resp = test::call_service(
            &app,
            chat("1.2.3.4", json!({"messages": [{"role": "user", "content": "hi"}]})).to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.code, "PROVIDER_ERROR");
        assert!(!body.detail.contains("sk-live-123"));
        assert!(!body.detail.contains("test-key"));
    }

    #[actix_web::test]
    async fn test_malformed_azure_body_is_bad_gateway() {
        let azure = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CHAT_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&azure)
            .await;

        let app = test::init_service(HttpServer::create_app(state_for(&azure).await)).await;
        let resp = test::call_service(
            &app,
            chat("1.2.3.4", json!({"messages": [{"role": "user", "content": "hi"}]})).to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn test_long_prompt_rejected_before_azure() {
        let azure = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CHAT_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
            .expect(0)
            .mount(&azure)
            .await;

        let app = test::init_service(HttpServer::create_app(state_for(&azure).await)).await;
        let resp = test::call_service(
            &app,
            chat(
                "1.2.3.4",
                json!({"messages": [{"role": "user", "content": "x".repeat(6001)}]}),
            )
            .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.detail, "Prompt too long");
        assert_eq!(body.error.code, "PAYLOAD_TOO_LARGE");
    }
}
