use serde::{Deserialize, Serialize};

use crate::shared::alert::AlertInfo;

/// Upload submission. Only the file name is sent; contents are not used.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
}

pub fn upload_message(file_name: &str) -> String {
    format!("File \"{file_name}\" uploaded successfully. Data has been integrated.")
}

pub fn no_file_alert() -> AlertInfo {
    AlertInfo::error(
        "No File Selected",
        "Please select a file to upload before saving.",
    )
}

pub fn upload_success_alert(message: &str) -> AlertInfo {
    AlertInfo::success("Upload Successful", message)
}

pub fn upload_failed_alert() -> AlertInfo {
    AlertInfo::error(
        "Upload Failed",
        "An error occurred during the upload. Please try again.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_message() {
        assert_eq!(
            upload_message("stock.csv"),
            "File \"stock.csv\" uploaded successfully. Data has been integrated."
        );
    }
}
