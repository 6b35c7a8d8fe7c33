//! Custom test assertions

use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;

/// Assert `resp` is exactly the guard's denial: 401 with the fixed warning body
pub async fn assert_unauthorized<B>(resp: ServiceResponse<B>)
where
    B: actix_web::body::MessageBody,
{
    assert_eq!(
        resp.status(),
        StatusCode::UNAUTHORIZED,
        "Expected 401 Unauthorized"
    );
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!({"Warning": "You're Unauthorized"}),
        "Unexpected denial body"
    );
}
