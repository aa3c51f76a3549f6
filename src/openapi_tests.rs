#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::OpenApi;
    use utoipa::openapi::PathItemType;
    use utoipa::openapi::{RefOr, schema::Schema};

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();

        for schema in [
            "ErrorResponse",
            "HealthResponse",
            "CentersResponse",
            "ItemsResponse",
            "ForecastResponse",
            "ForecastPoint",
            "AnalysisSummary",
            "DatasetOverview",
        ] {
            assert!(components.schemas.contains_key(schema), "missing schema {}", schema);
        }

        // Verify that the schema can be serialized to JSON without errors
        assert!(serde_json::to_string(&openapi).is_ok());
    }

    #[test]
    fn test_error_response_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let error_response_schema = components.schemas.get("ErrorResponse").unwrap();

        if let RefOr::T(Schema::Object(obj)) = error_response_schema {
            let properties = &obj.properties;
            assert!(properties.contains_key("error"));
            assert!(properties.contains_key("code"));
            assert!(properties.contains_key("success"));
        } else {
            panic!("ErrorResponse should be an object schema");
        }
    }

    #[test]
    fn test_forecast_point_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let schema = components.schemas.get("ForecastPoint").unwrap();

        if let RefOr::T(Schema::Object(obj)) = schema {
            for field in ["date", "forecast", "lower_bound", "upper_bound"] {
                assert!(obj.properties.contains_key(field), "missing field {}", field);
            }
        } else {
            panic!("ForecastPoint should be an object schema");
        }
    }

    #[test]
    fn test_openapi_paths() {
        let openapi = ApiDoc::openapi();

        for path in ["/", "/health", "/centers", "/items", "/forecast"] {
            let item = openapi.paths.paths.get(path).unwrap();
            assert!(item.operations.contains_key(&PathItemType::Get), "GET {}", path);
        }
        for path in ["/upload-forecast", "/analyze-data"] {
            let item = openapi.paths.paths.get(path).unwrap();
            assert!(item.operations.contains_key(&PathItemType::Post), "POST {}", path);
        }
    }

    #[test]
    fn test_forecast_documents_error_statuses() {
        let openapi = ApiDoc::openapi();
        let forecast = openapi.paths.paths.get("/forecast").unwrap();
        let get = forecast.operations.get(&PathItemType::Get).unwrap();

        assert!(get.responses.responses.contains_key("200"));
        assert!(get.responses.responses.contains_key("400"));
        assert!(get.responses.responses.contains_key("404"));
    }

    #[test]
    fn test_all_error_responses_reference_correct_schema() {
        let openapi_json = serde_json::to_string(&ApiDoc::openapi()).unwrap();

        assert!(!openapi_json.contains("crate.schemas.ErrorResponse"));
        assert!(!openapi_json.contains("crate::schemas::ErrorResponse"));
        assert!(openapi_json.contains("#/components/schemas/ErrorResponse"));
    }
}
