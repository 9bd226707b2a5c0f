pub const UPLOAD_BASE_URL: &str = "https://storage.example";

/// Upload target for `filename`. There is no object storage behind it yet, the URL only has the
/// shape a signed one would have.
pub fn placeholder_upload_url(filename: &str) -> String {
    format!(
        "{}/{}/{}",
        UPLOAD_BASE_URL,
        filename,
        chrono::Utc::now().timestamp()
    )
}
