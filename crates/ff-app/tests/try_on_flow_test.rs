//! Catalog → select → project → save, through the REST adapters against a mock backend.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use ff_app::{CatalogLoad, LoadCatalog, SaveOutfit, TryOnController};
use ff_core::errors::SaveOutfitError;
use ff_core::intro::IntroPose;
use ff_core::ports::RenderSurfacePort;
use ff_core::scene::{EntityKind, SceneEntity};
use ff_core::{AuthSession, ItemId, UserId, ViewerContext};
use ff_infra::{RestClient, RestItemRepository, RestObjectStorage, RestOutfitRepository, SystemClock};
use mockito::{Matcher, Server, ServerGuard};

#[derive(Default)]
struct SceneLog(Mutex<Vec<Vec<SceneEntity>>>);

impl RenderSurfacePort for SceneLog {
    fn present_scene(&self, entities: &[SceneEntity]) {
        self.0.lock().unwrap().push(entities.to_vec());
    }

    fn present_intro(&self, _pose: &IntroPose) {}
}

fn viewer() -> ViewerContext {
    ViewerContext::signed_in(AuthSession {
        user_id: UserId::from_str("u1"),
        email: Some("u1@example.com".to_string()),
        access_token: "u1-token".to_string(),
    })
}

fn controller(server: &ServerGuard, viewer: ViewerContext) -> (TryOnController, Arc<SceneLog>) {
    let client = Arc::new(RestClient::new(server.url(), "anon").unwrap());
    let storage = Arc::new(RestObjectStorage::new(client.clone()));
    let load = Arc::new(LoadCatalog::from_ports(
        Arc::new(RestItemRepository::new(client.clone())),
        storage,
        "garments",
    ));
    let save = Arc::new(SaveOutfit::from_ports(
        Arc::new(RestOutfitRepository::new(client)),
        Arc::new(SystemClock),
    ));
    let surface = Arc::new(SceneLog::default());
    (
        TryOnController::new(viewer, load, save, surface.clone()),
        surface,
    )
}

async fn mock_catalog(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/rest/v1/items")
        .match_query(Matcher::UrlEncoded("user_id".into(), "eq.u1".into()))
        .with_status(200)
        .with_body(
            r#"[
                {"id":"B","user_id":"u1","item_name":"Boots","image_url":"u1/b.png","asset_path":"b.glb","metadata":{"category":"Shoes"}},
                {"id":"A","user_id":"u1","item_name":"Apron","image_url":"u1/a.png","asset_path":null,"metadata":{"category":"Tops"}}
            ]"#,
        )
        .create_async()
        .await
}

#[tokio::test]
async fn select_both_items_project_and_save() {
    let mut server = Server::new_async().await;
    let catalog = mock_catalog(&mut server).await;
    let insert = server
        .mock("POST", "/rest/v1/outfits")
        .match_header("authorization", "Bearer u1-token")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "user_id": "u1",
            "avatar_type": "female",
            "metadata": {"item_count": 2, "avatar_id": "avatar1"}
        })))
        .with_status(201)
        .with_body(r#"[{"id":"outfit-1"}]"#)
        .expect(1)
        .create_async()
        .await;

    let (controller, surface) = controller(&server, viewer());
    assert_eq!(controller.load_catalog().await.unwrap(), CatalogLoad::Loaded(2));
    catalog.assert_async().await;

    assert_eq!(controller.toggle_item(&ItemId::from_str("A")).await, Some(true));
    assert_eq!(controller.toggle_item(&ItemId::from_str("B")).await, Some(true));

    let record = controller
        .session()
        .await
        .serialize(controller.viewer().identity(), Utc::now())
        .unwrap();
    let ids: Vec<&str> = record.items_used.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);

    let scene = surface.0.lock().unwrap().last().cloned().unwrap();
    let kinds: Vec<EntityKind> = scene.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![EntityKind::AvatarModel, EntityKind::PlanarTexture, EntityKind::Model3d]
    );
    assert_eq!(
        scene[1].src,
        format!("{}/storage/v1/object/public/garments/u1/a.png", server.url())
    );
    assert_eq!(controller.scene().await, scene);

    let outfit_id = controller.save().await.unwrap();
    assert_eq!(outfit_id.as_str(), "outfit-1");
    insert.assert_async().await;
}

#[tokio::test]
async fn saving_without_items_never_reaches_the_backend() {
    let mut server = Server::new_async().await;
    let _catalog = mock_catalog(&mut server).await;
    let insert = server
        .mock("POST", "/rest/v1/outfits")
        .expect(0)
        .create_async()
        .await;

    let (controller, _) = controller(&server, viewer());
    controller.load_catalog().await.unwrap();
    controller.toggle_item(&ItemId::from_str("A")).await;
    controller.toggle_item(&ItemId::from_str("A")).await;

    let err = controller.save().await.unwrap_err();
    assert_eq!(err, SaveOutfitError::NoItemsSelected);
    insert.assert_async().await;
}

#[tokio::test]
async fn failed_catalog_load_leaves_catalog_empty() {
    let mut server = Server::new_async().await;
    let _failing = server
        .mock("GET", "/rest/v1/items")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"message":"relation \"items\" does not exist"}"#)
        .create_async()
        .await;

    let (controller, _) = controller(&server, viewer());
    let err = controller.load_catalog().await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "failed to load items: relation \"items\" does not exist"
    );
    assert!(controller.catalog().await.is_empty());
}
