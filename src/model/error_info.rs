use serde::{Deserialize, Serialize};

/// One entry of the error list the API returns on a failed request.
///
/// `user_message` is meant for the person at the keyboard; `developer_message`
/// only ever goes to the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    pub user_message: String,
    #[serde(default)]
    pub developer_message: String,
}

impl ErrorInfo {
    pub fn new(user_message: impl Into<String>, developer_message: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
            developer_message: developer_message.into(),
        }
    }
}
