use coupon_service::{build_app, ConfigProvider, CouponServer, StorageSettings, TomlConfig};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::sync::oneshot;

fn toml_config(storage: &str) -> TomlConfig {
    let content = format!(
        r#"
[server]
bind = "127.0.0.1:0"
base_path = "/api/cupones"

[gateway]
url = "http://gateway.test/api/proxy/cupones"

{}
"#,
        storage
    );
    TomlConfig::from_toml_str(&content).unwrap()
}

#[tokio::test]
async fn test_end_to_end_coupon_lifecycle() {
    let config = toml_config("");
    let server = CouponServer::bind(&config).await.unwrap();
    let addr = server.local_addr().unwrap();

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server.run_until(async {
        let _ = shutdown_rx.await;
    }));

    let client = reqwest::Client::new();
    let base = format!("http://{}/api/cupones", addr);

    // 建立
    let created: Value = client
        .post(&base)
        .json(&json!({
            "codigo": "DESCUENTO25",
            "descuento": 25,
            "validoHasta": "2025-12-31"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["idCupon"], 1);
    assert_eq!(created["codigo"], "DESCUENTO25");

    // 查詢 (含 HATEOAS)
    let response = client
        .get(format!("{}/hateoas/1", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let resource: Value = response.json().await.unwrap();
    assert_eq!(
        resource["_links"]["self"]["href"],
        "http://gateway.test/api/proxy/cupones/hateoas/1"
    );

    // 更新
    let response = client
        .put(format!("{}/1", base))
        .json(&json!({ "codigo": "NUEVOCODIGO", "descuento": 50 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["descuento"], 50);

    // 刪除
    let response = client.delete(format!("{}/1", base)).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);

    let response = client.get(format!("{}/1", base)).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    shutdown_tx.send(()).unwrap();
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_file_storage_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("cupones.json");
    let storage = format!(
        "[storage]\ntype = \"file\"\npath = {:?}\n",
        data_file.to_str().unwrap()
    );

    let config = toml_config(&storage);
    assert!(matches!(config.storage(), StorageSettings::File { .. }));

    {
        let server = CouponServer::bind(&config).await.unwrap();
        let addr = server.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.run_until(async {
            let _ = shutdown_rx.await;
        }));

        let response = reqwest::Client::new()
            .post(format!("http://{}/api/cupones", addr))
            .json(&json!({
                "codigo": "VERANO10",
                "descuento": 10,
                "validoHasta": "2026-01-15"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        shutdown_tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }

    assert!(data_file.exists());

    let server = CouponServer::bind(&config).await.unwrap();
    let addr = server.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server.run_until(async {
        let _ = shutdown_rx.await;
    }));

    let list: Value = reqwest::get(format!("http://{}/api/cupones", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    assert_eq!(list[0]["codigo"], "VERANO10");

    shutdown_tx.send(()).unwrap();
    handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_invalid_config_is_rejected() {
    let config = TomlConfig::from_toml_str(
        r#"
[server]
bind = "127.0.0.1:0"

[gateway]
url = "ftp://gateway.test"
"#,
    )
    .unwrap();

    assert!(build_app(&config).await.is_err());
}
