use serde_json::Value;

use crate::handlers::apigw::ApiGatewayRequest;

/// Backing store for user profiles. Implementations read whatever they need
/// (path parameters, body) from the decoded request.
pub trait ProfileStore {
    fn get_profile(&self, request: &ApiGatewayRequest) -> Result<Option<Value>, String>;
    fn create_profile(&self, request: &ApiGatewayRequest) -> Result<(), String>;
    fn update_profile(&self, request: &ApiGatewayRequest) -> Result<(), String>;
}
