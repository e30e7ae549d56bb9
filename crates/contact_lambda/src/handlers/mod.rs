pub mod apigw;
pub mod contact;
pub mod profile;
