use serde_json::json;

use crate::common::{TestApp, routes};

mod add_psw_account {
    use super::*;

    #[tokio::test]
    async fn stores_account_and_returns_created() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(
                routes::ADD_PSW_ACCOUNT,
                &json!({"account": "10086", "password": 123456}),
            )
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert_eq!(res.body["success"], true);
        let id = res.id();

        let list = app.get(routes::PSW_DATA).await;
        assert_eq!(list.status, 200);
        let entries = list.body.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["id"], id);
        assert_eq!(entries[0]["account"], 10086);
        assert_eq!(entries[0]["password"], 123456);
        assert!(entries[0]["time"].is_string());
    }

    #[tokio::test]
    async fn duplicates_are_allowed() {
        let app = TestApp::spawn().await;
        let first = app.create_credential(json!(1), json!(2)).await;
        let second = app.create_credential(json!(1), json!(2)).await;

        assert_ne!(first, second);
        assert_eq!(app.get(routes::PSW_DATA).await.body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn empty_fields_are_rejected() {
        let app = TestApp::spawn().await;

        for body in [
            json!({}),
            json!({"account": "", "password": "1"}),
            json!({"account": "1", "password": ""}),
            json!({"account": "1"}),
        ] {
            let res = app.post_json(routes::ADD_PSW_ACCOUNT, &body).await;
            res.assert_error(400);
        }
        assert_eq!(app.get(routes::PSW_DATA).await.body, json!([]));
    }

    #[tokio::test]
    async fn non_numeric_and_oversized_values_are_rejected() {
        let app = TestApp::spawn().await;

        app.post_json(
            routes::ADD_PSW_ACCOUNT,
            &json!({"account": "alice", "password": "1"}),
        )
        .await
        .assert_error(400);

        app.post_json(
            routes::ADD_PSW_ACCOUNT,
            &json!({"account": 1, "password": 100_000_000_000_i64}),
        )
        .await
        .assert_error(400);
    }

    #[tokio::test]
    async fn largest_allowed_values_round_trip() {
        let app = TestApp::spawn().await;
        app.create_credential(json!(99_999_999_999_i64), json!("99999999999"))
            .await;

        let list = app.get(routes::PSW_DATA).await;
        assert_eq!(list.body[0]["account"], 99_999_999_999_i64);
        assert_eq!(list.body[0]["password"], 99_999_999_999_i64);
    }
}

mod delete_psw_account {
    use super::*;

    #[tokio::test]
    async fn deletes_existing_account() {
        let app = TestApp::spawn().await;
        let id = app.create_credential(json!(1), json!(2)).await;

        let res = app.delete(&routes::delete_psw_account(id)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["success"], true);
        assert!(res.body["message"].is_string());

        assert_eq!(app.get(routes::PSW_DATA).await.body, json!([]));
    }

    #[tokio::test]
    async fn unknown_account_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.delete(&routes::delete_psw_account(12345)).await;
        res.assert_error(404);
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let app = TestApp::spawn().await;
        let id = app.create_credential(json!(7), json!(8)).await;

        assert_eq!(app.delete(&routes::delete_psw_account(id)).await.status, 200);
        app.delete(&routes::delete_psw_account(id))
            .await
            .assert_error(404);
    }

    #[tokio::test]
    async fn id_beyond_integer_range_is_not_found() {
        let app = TestApp::spawn().await;

        app.delete("/api/delete-psw-account/3000000000/")
            .await
            .assert_error(404);
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let app = TestApp::spawn().await;

        app.delete("/api/delete-psw-account/first/")
            .await
            .assert_error(400);
    }
}
