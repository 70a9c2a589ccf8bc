pub mod current_identity;
pub mod owner_email;
pub mod validated_json;

pub use current_identity::CurrentIdentity;
pub use owner_email::OwnerEmail;
pub use validated_json::ValidatedJson;
