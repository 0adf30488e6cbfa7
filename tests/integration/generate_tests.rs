use crate::client_for;
use oasis_sitegen::artifact::ArtifactFormat;
use oasis_sitegen::generate::run_generation;
use oasis_sitegen::{ApiError, ResolveError, Settings, SiteConfig, SitegenError};
use serde_json::{json, Value};
use tempfile::tempdir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_in(dir: &std::path::Path, format: ArtifactFormat) -> Settings {
    let file = match format {
        ArtifactFormat::TypeScript => "site-config.ts",
        ArtifactFormat::Json => "site-config.json",
    };
    Settings {
        store_id: "store-42".to_string(),
        base_url: "http://unused".to_string(),
        environment: "test".to_string(),
        output_path: dir.join("config").join(file),
        format,
        ..Default::default()
    }
}

async fn mount_site_config(server: &MockServer, site_config: Value) {
    Mock::given(method("GET"))
        .and(path("/site/get-site-config/"))
        .and(query_param("storeId", "store-42"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "siteConfig": site_config } })),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_generate_writes_typescript_artifact() {
    let server = MockServer::start().await;
    mount_site_config(
        &server,
        json!({
            "_id": "665f",
            "storeId": "store-42",
            "name": "Casa Verde",
            "theme": { "themeName": "ocean", "themeType": "dark" },
            "hours": [{ "day": "Monday", "open": "10:00", "close": "20:00" }]
        }),
    )
    .await;

    let dir = tempdir().unwrap();
    let settings = settings_in(dir.path(), ArtifactFormat::TypeScript);

    let generated = run_generation(&client_for(&server), &settings, false)
        .await
        .expect("generation should succeed");

    assert!(generated.written);
    assert_eq!(generated.config.name, "Casa Verde");
    assert_eq!(generated.config.theme.theme.primary, "#17a2b8");

    let monday = generated
        .config
        .hours
        .iter()
        .find(|h| h.day == "Monday")
        .unwrap();
    assert_eq!(monday.open, "10:00");
    // Only the days the backend lists survive
    assert_eq!(generated.config.hours.len(), 1);
    assert_eq!(monday.close, "20:00");

    let written = std::fs::read_to_string(&settings.output_path).unwrap();
    assert_eq!(written, generated.contents);
    assert!(written.contains("// Environment: test"));
    assert!(written.contains("const siteConfig: SiteConfig = {"));
    assert!(written.trim_end().ends_with("export default siteConfig;"));
    assert!(!written.contains("storeId"));
    assert!(!written.contains("665f"));
}

#[tokio::test]
async fn test_generate_writes_json_artifact() {
    let server = MockServer::start().await;
    mount_site_config(&server, json!({ "name": "Casa Verde" })).await;

    let dir = tempdir().unwrap();
    let settings = settings_in(dir.path(), ArtifactFormat::Json);

    run_generation(&client_for(&server), &settings, false)
        .await
        .unwrap();

    let written = std::fs::read_to_string(&settings.output_path).unwrap();
    let document: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(document["environment"], "test");
    assert!(document["generatedAt"].as_str().unwrap().ends_with('Z'));

    let parsed: SiteConfig = serde_json::from_value(document["siteConfig"].clone()).unwrap();
    assert_eq!(parsed.name, "Casa Verde");
    assert!(!parsed.homepage.features.items.is_empty());
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let server = MockServer::start().await;
    mount_site_config(&server, json!({})).await;

    let dir = tempdir().unwrap();
    let settings = settings_in(dir.path(), ArtifactFormat::TypeScript);

    let generated = run_generation(&client_for(&server), &settings, true)
        .await
        .unwrap();

    assert!(!generated.written);
    assert!(!generated.contents.is_empty());
    assert!(!settings.output_path.exists());
}

#[tokio::test]
async fn test_fetch_failure_leaves_previous_artifact() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/site/get-site-config/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let settings = settings_in(dir.path(), ArtifactFormat::TypeScript);
    std::fs::create_dir_all(settings.output_path.parent().unwrap()).unwrap();
    std::fs::write(&settings.output_path, "previous").unwrap();

    let err = run_generation(&client_for(&server), &settings, false)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SitegenError::Api(ApiError::Status { status: 500, .. })
    ));
    assert_eq!(
        std::fs::read_to_string(&settings.output_path).unwrap(),
        "previous"
    );
}

#[tokio::test]
async fn test_malformed_response_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/site/get-site-config/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let settings = settings_in(dir.path(), ArtifactFormat::TypeScript);

    let err = run_generation(&client_for(&server), &settings, false)
        .await
        .unwrap_err();

    assert!(matches!(err, SitegenError::Api(ApiError::Decode { .. })));
    assert!(!settings.output_path.exists());
}

#[tokio::test]
async fn test_invalid_remote_writes_nothing() {
    let server = MockServer::start().await;
    mount_site_config(
        &server,
        json!({
            "homepage": {
                "testimonials": {
                    "items": [{ "id": "t1", "content": "Lovely", "author": "Ana", "rating": 9 }]
                }
            }
        }),
    )
    .await;

    let dir = tempdir().unwrap();
    let settings = settings_in(dir.path(), ArtifactFormat::TypeScript);

    let err = run_generation(&client_for(&server), &settings, false)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SitegenError::Resolve(ResolveError::InvalidRating { .. })
    ));
    assert!(!settings.output_path.exists());
}

#[tokio::test]
async fn test_defaults_file_replaces_built_in_defaults() {
    let server = MockServer::start().await;
    mount_site_config(&server, json!({ "description": "From the backend" })).await;

    let dir = tempdir().unwrap();
    let defaults_path = dir.path().join("defaults.json");
    let mut defaults = oasis_sitegen::site::default_config();
    defaults.name = "Harbor Grill".to_string();
    std::fs::write(&defaults_path, serde_json::to_string(&defaults).unwrap()).unwrap();

    let mut settings = settings_in(dir.path(), ArtifactFormat::Json);
    settings.defaults_path = Some(defaults_path);

    let generated = run_generation(&client_for(&server), &settings, false)
        .await
        .unwrap();

    assert_eq!(generated.config.name, "Harbor Grill");
    assert_eq!(generated.config.description, "From the backend");
}
