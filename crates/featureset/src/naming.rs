/// Display name of the instance of `feature_key` sitting at `index`.
pub fn instance_name(feature_key: &str, index: usize) -> String {
    format!("{feature_key}:{index}")
}
