use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Quote {
    #[validate(length(min = 1, message = "Quote text cannot be empty"))]
    pub text: String,

    #[validate(length(min = 1, message = "Quote author cannot be empty"))]
    pub author: String,
}
