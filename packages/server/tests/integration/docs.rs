use crate::common::{TestApp, routes};

#[tokio::test]
async fn openapi_document_lists_the_api() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::OPENAPI).await;
    assert_eq!(res.status, 200);
    assert!(res.body["paths"]["/api/add-delicious/"].is_object());
    assert!(res.body["paths"]["/api/today-menu/"].is_object());
}
