use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::json;

use menu_server::entity::vote;

use crate::common::{TestApp, routes};

mod dish_creation {
    use super::*;

    #[tokio::test]
    async fn created_dish_appears_once_in_listing() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(
                routes::ADD_DELICIOUS,
                &json!({"name": "Rice", "price": 5.00, "src": "img/rice.jpg"}),
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["success"], true);
        assert!(res.body["message"].is_string());
        let id = res.id();

        let list = app.get(routes::DELICIOUS_DATA).await;
        assert_eq!(list.status, 200);
        assert_eq!(
            list.body,
            json!([{"id": id, "name": "Rice", "price": "5.00", "src": "img/rice.jpg"}])
        );
    }

    #[tokio::test]
    async fn price_may_be_a_numeric_string() {
        let app = TestApp::spawn().await;
        app.create_dish("Noodles", json!("12.5"), "img/noodles.jpg").await;

        let list = app.get(routes::DELICIOUS_DATA).await;
        assert_eq!(list.body[0]["price"], "12.50");
    }

    #[tokio::test]
    async fn unparsable_price_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(
                routes::ADD_DELICIOUS,
                &json!({"name": "Soup", "price": "cheap", "src": "img/soup.jpg"}),
            )
            .await;

        res.assert_error(400);
        assert!(app.get(routes::DELICIOUS_DATA).await.body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(routes::ADD_DELICIOUS, &json!({"name": "Soup"}))
            .await;
        res.assert_error(400);
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.post_raw(routes::ADD_DELICIOUS, "{not json").await;
        res.assert_error(400);
    }

    #[tokio::test]
    async fn long_name_and_src_are_truncated() {
        let app = TestApp::spawn().await;
        let name = "n".repeat(60);
        let src = "s".repeat(120);

        app.create_dish(&name, json!(1), &src).await;

        let list = app.get(routes::DELICIOUS_DATA).await;
        assert_eq!(list.body[0]["name"].as_str().unwrap().chars().count(), 50);
        assert_eq!(list.body[0]["src"].as_str().unwrap().chars().count(), 100);
    }
}

mod dish_listing {
    use super::*;

    #[tokio::test]
    async fn empty_catalog_lists_nothing() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::MENU_DATA).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!([]));
    }

    #[tokio::test]
    async fn menu_data_matches_delicious_data() {
        let app = TestApp::spawn().await;
        app.create_dish("Rice", json!(5), "img/rice.jpg").await;
        app.create_dish("Soup", json!("3.20"), "img/soup.jpg").await;

        let menu = app.get(routes::MENU_DATA).await;
        let delicious = app.get(routes::DELICIOUS_DATA).await;

        assert_eq!(menu.status, 200);
        assert_eq!(menu.body, delicious.body);
        assert_eq!(menu.body.as_array().unwrap().len(), 2);
        assert_eq!(menu.body[0]["name"], "Rice");
        assert_eq!(menu.body[1]["name"], "Soup");
    }

    #[tokio::test]
    async fn wrong_method_is_not_allowed() {
        let app = TestApp::spawn().await;

        let res = app.post_json(routes::MENU_DATA, &json!({})).await;
        assert_eq!(res.status, 405);
    }
}

mod dish_deletion {
    use super::*;

    #[tokio::test]
    async fn deleting_a_dish_removes_it() {
        let app = TestApp::spawn().await;
        let keep = app.create_dish("Rice", json!(5), "img/rice.jpg").await;
        let gone = app.create_dish("Soup", json!(3), "img/soup.jpg").await;

        let res = app.delete(&routes::delete_menu(gone)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!({"success": true}));

        let list = app.get(routes::MENU_DATA).await;
        let ids: Vec<i64> = list
            .body
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![keep as i64]);
    }

    #[tokio::test]
    async fn deleting_a_dish_removes_its_votes() {
        let app = TestApp::spawn().await;
        let rice = app.create_dish("Rice", json!(5), "img/rice.jpg").await;
        let soup = app.create_dish("Soup", json!(3), "img/soup.jpg").await;
        app.vote_at(rice, 2, "2024-01-01T10:00:00Z").await;
        app.vote_at(rice, 1, "2024-01-02T10:00:00Z").await;
        app.vote_at(soup, 1, "2024-01-01T10:00:00Z").await;

        let res = app.delete(&routes::delete_menu(rice)).await;
        assert_eq!(res.status, 200);

        let rice_votes = vote::Entity::find()
            .filter(vote::Column::DeliciousId.eq(rice))
            .count(&app.db)
            .await
            .unwrap();
        assert_eq!(rice_votes, 0);

        let remaining = vote::Entity::find().count(&app.db).await.unwrap();
        assert_eq!(remaining, 1);
    }

    #[tokio::test]
    async fn deleting_unknown_dish_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.delete(&routes::delete_menu(999)).await;
        res.assert_error(404);
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let app = TestApp::spawn().await;

        app.delete("/api/delete-menu/abc/").await.assert_error(400);
    }

    #[tokio::test]
    async fn id_beyond_integer_range_is_not_found() {
        let app = TestApp::spawn().await;
        app.create_dish("Rice", json!(5), "img/rice.jpg").await;

        app.delete("/api/delete-menu/3000000000/").await.assert_error(404);
        assert_eq!(app.get(routes::DELICIOUS_DATA).await.body.as_array().unwrap().len(), 1);
    }
}
