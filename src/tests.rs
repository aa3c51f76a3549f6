#[cfg(test)]
mod integration_tests {
    use crate::schemas::{HealthResponse, RootResponse};
    use crate::test_utils::test_utils::{
        setup_fallback_app, setup_test_app, setup_test_app_with, test_today,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use axum_test::multipart::{MultipartForm, Part};
    use chrono::Duration;
    use common::{
        AnalysisSummary, CentersResponse, DatasetOverview, ErrorResponse, ForecastResponse,
        ItemsResponse, ModelKind,
    };
    use compute::settings::EngineSettings;

    const UPLOAD_CSV: &str = "date,center,item,qty\n\
        2024-01-05,VASAI,MUNDI,120\n\
        2024-02-05,VASAI,MUNDI,80\n\
        2024-03-05,UTTAN,BOMBIL,100\n\
        2024-04-05,UTTAN,BOMBIL,140\n";

    fn server() -> TestServer {
        TestServer::new(setup_test_app()).unwrap()
    }

    fn csv_form(file_name: &str, content: &str) -> MultipartForm {
        MultipartForm::new().add_part(
            "file",
            Part::bytes(content.as_bytes().to_vec())
                .file_name(file_name)
                .mime_type("text/csv"),
        )
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = server();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.history_records, 10);
        assert_eq!(body.catalog_source, "history");
    }

    #[tokio::test]
    async fn test_tracing_stays_installed_across_apps() {
        let _first = setup_test_app();
        let _second = setup_fallback_app();

        assert!(tracing::dispatcher::has_been_set());
        tracing::warn!("emitted after the test apps were built");
        server().get("/health").await.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_root() {
        let server = server();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        let body: RootResponse = response.json();
        assert_eq!(body.status, "active");
    }

    #[tokio::test]
    async fn test_centers_are_sorted_and_stable() {
        let server = server();

        let first: CentersResponse = server.get("/centers").await.json();
        let second: CentersResponse = server.get("/centers").await.json();

        assert_eq!(first.centers, vec!["UTTAN", "VASAI"]);
        assert_eq!(first.count, 2);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_items_with_and_without_center() {
        let server = server();

        let all: ItemsResponse = server.get("/items").await.json();
        assert_eq!(all.items, vec!["BOMBIL", "CHILAPI", "MUNDI"]);
        assert_eq!(all, server.get("/items").await.json::<ItemsResponse>());

        let uttan: ItemsResponse = server
            .get("/items")
            .add_query_param("center", "UTTAN")
            .await
            .json();
        assert_eq!(uttan.items, vec!["CHILAPI", "MUNDI"]);
        assert_eq!(uttan.count, 2);

        let unknown = server.get("/items").add_query_param("center", "NOWHERE").await;
        unknown.assert_status(StatusCode::OK);
        assert_eq!(unknown.json::<ItemsResponse>().count, 0);
    }

    #[tokio::test]
    async fn test_fallback_catalog_without_history() {
        let server = TestServer::new(setup_fallback_app()).unwrap();

        let centers: CentersResponse = server.get("/centers").await.json();
        assert_eq!(centers.centers, vec!["ALIBAG", "KASARA", "TALOJA", "UTTAN", "VASAI"]);

        let items: ItemsResponse = server.get("/items").await.json();
        assert_eq!(
            items.items,
            vec!["BOMBIL", "CHILAPI", "MIX FISH", "MUNDI", "PRAWN HEAD AND SHEL"]
        );

        let response = server
            .get("/forecast")
            .add_query_param("center", "KASARA")
            .add_query_param("item", "MIX FISH")
            .add_query_param("days", 3)
            .await;
        response.assert_status(StatusCode::OK);
        let body: ForecastResponse = response.json();
        assert_eq!(body.series().len(), 3);
        assert!(body.series().iter().all(|p| p.forecast >= 100.0));
    }

    #[tokio::test]
    async fn test_forecast_defaults() {
        let server = server();

        let response = server
            .get("/forecast")
            .add_query_param("center", "VASAI")
            .add_query_param("item", "MUNDI")
            .await;

        response.assert_status(StatusCode::OK);
        let body: ForecastResponse = response.json();
        assert_eq!(body.forecast_days, 30);
        assert_eq!(body.model_used, ModelKind::XgBoost);

        let series = body.series();
        assert_eq!(series.len(), 30);
        assert_eq!(series[0].date, test_today() + Duration::days(1));
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
        for point in series {
            assert!(point.forecast >= 0.0);
            assert!(point.lower_bound <= point.forecast);
            assert!(point.forecast <= point.upper_bound);
        }
    }

    #[tokio::test]
    async fn test_forecast_with_model_and_days() {
        let server = server();

        let response = server
            .get("/forecast")
            .add_query_param("center", "UTTAN")
            .add_query_param("item", "CHILAPI")
            .add_query_param("days", 7)
            .add_query_param("model", "LightGBM")
            .await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["model_used"], "lightgbm");
        assert_eq!(body["forecasts"]["UTTAN"]["CHILAPI"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_forecast_rejects_bad_horizon() {
        let server = server();

        for days in ["0", "366"] {
            let response = server
                .get("/forecast")
                .add_query_param("center", "VASAI")
                .add_query_param("item", "MUNDI")
                .add_query_param("days", days)
                .await;
            response.assert_status(StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_forecast_horizon_follows_configured_max_days() {
        let mut settings = EngineSettings::default();
        settings.forecast.max_days = 500;
        let server = TestServer::new(setup_test_app_with(&settings)).unwrap();

        let response = server
            .get("/forecast")
            .add_query_param("center", "VASAI")
            .add_query_param("item", "MUNDI")
            .add_query_param("days", 400)
            .await;
        response.assert_status(StatusCode::OK);
        assert_eq!(response.json::<ForecastResponse>().series().len(), 400);

        let response = server
            .get("/forecast")
            .add_query_param("center", "VASAI")
            .add_query_param("item", "MUNDI")
            .add_query_param("days", 501)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<ErrorResponse>().code, "INVALID_HORIZON");
    }

    #[tokio::test]
    async fn test_forecast_rejects_unknown_model() {
        let server = server();

        let response = server
            .get("/forecast")
            .add_query_param("center", "VASAI")
            .add_query_param("item", "MUNDI")
            .add_query_param("model", "prophet")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "UNSUPPORTED_MODEL");
        assert!(!body.success);
    }

    #[tokio::test]
    async fn test_forecast_unknown_center_and_item() {
        let server = server();

        let response = server
            .get("/forecast")
            .add_query_param("center", "NOWHERE")
            .add_query_param("item", "MUNDI")
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<ErrorResponse>().code, "UNKNOWN_CENTER");

        let response = server
            .get("/forecast")
            .add_query_param("center", "VASAI")
            .add_query_param("item", "TUNA")
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<ErrorResponse>().code, "UNKNOWN_ITEM");
    }

    #[tokio::test]
    async fn test_forecast_rejects_item_not_sold_at_center() {
        let server = server();

        let vasai: ItemsResponse = server
            .get("/items")
            .add_query_param("center", "VASAI")
            .await
            .json();
        assert_eq!(vasai.items, vec!["BOMBIL", "MUNDI"]);

        // CHILAPI is only sold at UTTAN
        let response = server
            .get("/forecast")
            .add_query_param("center", "VASAI")
            .add_query_param("item", "CHILAPI")
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<ErrorResponse>().code, "UNKNOWN_ITEM");
    }

    #[tokio::test]
    async fn test_forecast_requires_center_and_item() {
        let server = server();

        let response = server.get("/forecast").add_query_param("center", "VASAI").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_forecast() {
        let server = server();

        let form = csv_form("history.csv", UPLOAD_CSV).add_text("forecast_months", "6");
        let response = server.post("/upload-forecast").multipart(form).await;

        response.assert_status(StatusCode::OK);
        let body: AnalysisSummary = response.json();
        assert_eq!(body.status, "success");
        assert_eq!(body.total_months, 6);
        assert_eq!(body.records_analyzed, 4);
        assert_eq!(body.monthly_forecast.len(), 6);
        assert_eq!(body.monthly_forecast[0].month, "2024-05");
        assert!(body.estimated_demand >= 0.0);
        assert!(body.recommended_inventory >= 0.0);
        assert_eq!(body.unit, "kg");
    }

    #[tokio::test]
    async fn test_upload_forecast_defaults_to_twelve_months() {
        let server = server();

        let response = server
            .post("/upload-forecast")
            .multipart(csv_form("history.csv", UPLOAD_CSV))
            .await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.json::<AnalysisSummary>().total_months, 12);
    }

    #[tokio::test]
    async fn test_identical_uploads_are_recomputed() {
        let server = server();

        let first: AnalysisSummary = server
            .post("/upload-forecast")
            .multipart(csv_form("history.csv", UPLOAD_CSV))
            .await
            .json();
        let second: AnalysisSummary = server
            .post("/upload-forecast")
            .multipart(csv_form("history.csv", UPLOAD_CSV))
            .await
            .json();

        assert_eq!(first.estimated_demand, second.estimated_demand);
        assert_eq!(first.monthly_forecast, second.monthly_forecast);
    }

    #[tokio::test]
    async fn test_upload_rejects_non_csv() {
        let server = server();

        let form = MultipartForm::new().add_part(
            "file",
            Part::bytes(b"hello".to_vec()).file_name("notes.txt").mime_type("text/plain"),
        );
        let response = server.post("/upload-forecast").multipart(form).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "INVALID_FILE_TYPE");
    }

    #[tokio::test]
    async fn test_upload_requires_file() {
        let server = server();

        let form = MultipartForm::new().add_text("forecast_months", "12");
        let response = server.post("/upload-forecast").multipart(form).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<ErrorResponse>().code, "MISSING_FILE");
    }

    #[tokio::test]
    async fn test_upload_rejects_bad_forecast_months() {
        let server = server();

        for months in ["0", "61", "soon"] {
            let form = csv_form("history.csv", UPLOAD_CSV).add_text("forecast_months", months);
            let response = server.post("/upload-forecast").multipart(form).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            assert_eq!(response.json::<ErrorResponse>().code, "INVALID_FORECAST_MONTHS");
        }
    }

    #[tokio::test]
    async fn test_upload_analysis_failure_is_reported_in_body() {
        let server = server();

        let form = csv_form("history.csv", "date,center\n2024-01-01,VASAI\n");
        let response = server.post("/upload-forecast").multipart(form).await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("Forecast generation failed"));
    }

    #[tokio::test]
    async fn test_analyze_data() {
        let server = server();

        let response = server
            .post("/analyze-data")
            .multipart(csv_form("history.csv", UPLOAD_CSV))
            .await;

        response.assert_status(StatusCode::OK);
        let body: DatasetOverview = response.json();
        assert_eq!(body.total_records, 4);
        assert_eq!(body.columns, vec!["date", "center", "item", "qty"]);
        assert_eq!(body.centers, vec!["UTTAN", "VASAI"]);
        assert_eq!(body.products, vec!["BOMBIL", "MUNDI"]);
        assert_eq!(body.total_demand, 440.0);
        assert!(body.date_range.is_some());
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let server = server();

        let response = server.get("/api-docs/openapi.json").await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert!(body["paths"]["/forecast"].is_object());
    }
}
