use crate::common::{TestApp, routes};

#[tokio::test]
async fn upload_uses_requested_filename() {
    let app = TestApp::spawn().await;

    let res = app
        .upload_image("IMG_0001.jpg", b"jpeg bytes".to_vec(), Some("rice.jpg"))
        .await;

    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["success"], true);
    assert_eq!(res.body["filename"], "rice.jpg");
    assert_eq!(
        std::fs::read(app.image_dir.join("rice.jpg")).unwrap(),
        b"jpeg bytes"
    );
    assert!(!app.image_dir.join("IMG_0001.jpg").exists());
}

#[tokio::test]
async fn upload_defaults_to_uploaded_file_name() {
    let app = TestApp::spawn().await;

    let res = app.upload_image("soup.png", b"png".to_vec(), None).await;

    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["filename"], "soup.png");
    assert!(app.image_dir.join("soup.png").exists());
}

#[tokio::test]
async fn upload_overwrites_existing_image() {
    let app = TestApp::spawn().await;

    app.upload_image("a.jpg", b"old".to_vec(), Some("dish.jpg")).await;
    let res = app.upload_image("b.jpg", b"new".to_vec(), Some("dish.jpg")).await;

    assert_eq!(res.status, 200);
    assert_eq!(std::fs::read(app.image_dir.join("dish.jpg")).unwrap(), b"new");
}

#[tokio::test]
async fn missing_image_field_is_rejected() {
    let app = TestApp::spawn().await;

    let form = reqwest::multipart::Form::new().text("filename", "rice.jpg");
    let res = app
        .client
        .post(format!("http://{}{}", app.addr, routes::UPLOAD_IMAGE))
        .multipart(form)
        .send()
        .await
        .unwrap();
    let res = crate::common::TestResponse::from_response(res).await;

    res.assert_error(400);
}

#[tokio::test]
async fn path_traversal_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app
        .upload_image("x.jpg", b"evil".to_vec(), Some("../escape.jpg"))
        .await;

    res.assert_error(400);
    assert!(!app.image_dir.parent().unwrap().join("escape.jpg").exists());
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let app = TestApp::spawn_with(|config| config.storage.max_upload_size = 1024).await;

    let res = app
        .upload_image("big.jpg", vec![0u8; 8 * 1024], Some("big.jpg"))
        .await;

    res.assert_error(400);
    assert!(!app.image_dir.join("big.jpg").exists());
}

#[tokio::test]
async fn non_multipart_body_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app
        .post_json(routes::UPLOAD_IMAGE, &serde_json::json!({"filename": "rice.jpg"}))
        .await;

    res.assert_error(400);
    assert!(!app.image_dir.join("rice.jpg").exists());
}
