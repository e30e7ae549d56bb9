use contact_core::contract::ProfileResponse;
use serde_json::Value;
use tracing::{error, info};

use crate::adapters::profile_store::ProfileStore;
use crate::handlers::apigw::{decode_event, json_response, message_response, ApiGatewayResponse};

/// Dispatches a profile request on its HTTP method. Persistence is entirely
/// the store's concern; this layer only shapes responses.
pub fn handle_profile_event(event: Value, store: &dyn ProfileStore) -> ApiGatewayResponse {
    let request = match decode_event(event) {
        Ok(value) => value,
        Err(message) => return profile_response(ProfileResponse::without_data(message, 400)),
    };

    let method = request.method().unwrap_or_default().to_lowercase();
    match method.as_str() {
        "get" => match store.get_profile(&request) {
            Ok(Some(profile)) => profile_response(ProfileResponse {
                message: "Successfully Retrieving Profile".to_string(),
                data: profile,
                status: 200,
            }),
            Ok(None) => profile_response(ProfileResponse::without_data(
                "no user Profile found",
                404,
            )),
            Err(failure) => {
                error!(method = "get", error = %failure, "profile_lookup_failed");
                profile_response(ProfileResponse::without_data(
                    "Error Retrieving Profile",
                    500,
                ))
            }
        },
        "post" => match store.create_profile(&request) {
            Ok(()) => profile_response(ProfileResponse::without_data("Profile Created", 201)),
            Err(failure) => {
                info!(method = "post", error = %failure, "profile_rejected");
                profile_response(ProfileResponse::without_data(failure, 400))
            }
        },
        "put" => match store.update_profile(&request) {
            Ok(()) => profile_response(ProfileResponse::without_data(
                "profile update successful",
                200,
            )),
            Err(failure) => {
                info!(method = "put", error = %failure, "profile_rejected");
                profile_response(ProfileResponse::without_data(failure, 400))
            }
        },
        _ => message_response(501, "Not implemented"),
    }
}

fn profile_response(payload: ProfileResponse) -> ApiGatewayResponse {
    json_response(payload.status, payload)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;
    use crate::handlers::apigw::ApiGatewayRequest;

    #[derive(Default)]
    struct FakeProfileStore {
        profile: Option<Value>,
        failure: Option<String>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl FakeProfileStore {
        fn record(&self, call: &'static str) -> Result<(), String> {
            self.calls.lock().expect("poisoned mutex").push(call);
            match &self.failure {
                Some(error) => Err(error.clone()),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().expect("poisoned mutex").clone()
        }
    }

    impl ProfileStore for FakeProfileStore {
        fn get_profile(&self, _request: &ApiGatewayRequest) -> Result<Option<Value>, String> {
            self.record("get")?;
            Ok(self.profile.clone())
        }

        fn create_profile(&self, _request: &ApiGatewayRequest) -> Result<(), String> {
            self.record("create")
        }

        fn update_profile(&self, _request: &ApiGatewayRequest) -> Result<(), String> {
            self.record("update")
        }
    }

    fn event(method: &str) -> Value {
        json!({
            "requestContext": {"http": {"method": method}},
            "pathParameters": {"userid": "u-1"}
        })
    }

    fn body(response: &ApiGatewayResponse) -> Value {
        serde_json::from_str(&response.body).expect("body should be json")
    }

    #[test]
    fn get_returns_profile_data() {
        let store = FakeProfileStore {
            profile: Some(json!({"displayName": "Jane"})),
            ..FakeProfileStore::default()
        };

        let response = handle_profile_event(event("GET"), &store);

        assert_eq!(response.status_code, 200);
        assert_eq!(
            body(&response),
            json!({
                "message": "Successfully Retrieving Profile",
                "data": {"displayName": "Jane"},
                "status": 200
            })
        );
    }

    #[test]
    fn get_without_profile_is_not_found() {
        let store = FakeProfileStore::default();

        let response = handle_profile_event(event("get"), &store);

        assert_eq!(response.status_code, 404);
        assert_eq!(body(&response)["message"], "no user Profile found");
    }

    #[test]
    fn get_failure_is_internal_error() {
        let store = FakeProfileStore {
            failure: Some("table unavailable".to_string()),
            ..FakeProfileStore::default()
        };

        let response = handle_profile_event(event("GET"), &store);

        assert_eq!(response.status_code, 500);
        assert_eq!(body(&response)["message"], "Error Retrieving Profile");
    }

    #[test]
    fn post_creates_profile() {
        let store = FakeProfileStore::default();

        let response = handle_profile_event(event("POST"), &store);

        assert_eq!(response.status_code, 201);
        assert_eq!(
            body(&response),
            json!({"message": "Profile Created", "data": "", "status": 201})
        );
        assert_eq!(store.calls(), vec!["create"]);
    }

    #[test]
    fn create_failure_echoes_store_message() {
        let store = FakeProfileStore {
            failure: Some("profile already exists".to_string()),
            ..FakeProfileStore::default()
        };

        let response = handle_profile_event(event("POST"), &store);

        assert_eq!(response.status_code, 400);
        assert_eq!(body(&response)["message"], "profile already exists");
    }

    #[test]
    fn put_updates_profile() {
        let store = FakeProfileStore::default();

        let response = handle_profile_event(event("PUT"), &store);

        assert_eq!(response.status_code, 200);
        assert_eq!(body(&response)["message"], "profile update successful");
        assert_eq!(store.calls(), vec!["update"]);
    }

    #[test]
    fn update_failure_is_bad_request() {
        let store = FakeProfileStore {
            failure: Some("invalid profile".to_string()),
            ..FakeProfileStore::default()
        };

        let response = handle_profile_event(event("PUT"), &store);

        assert_eq!(response.status_code, 400);
        assert_eq!(body(&response)["status"], 400);
    }

    #[test]
    fn other_methods_are_not_implemented() {
        let store = FakeProfileStore::default();

        let response = handle_profile_event(event("DELETE"), &store);

        assert_eq!(response.status_code, 501);
        assert_eq!(body(&response), json!({"message": "Not implemented"}));
        assert!(store.calls().is_empty());
    }
}
