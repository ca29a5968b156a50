// Firestore REST endpoint builders

pub const FIRESTORE_BASE: &str = "https://firestore.googleapis.com/v1";

pub fn documents_url(project_id: &str, collection: &str) -> String {
    format!(
        "{}/projects/{}/databases/(default)/documents/{}",
        FIRESTORE_BASE, project_id, collection
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_url() {
        assert_eq!(
            documents_url("fightstats-30352", "fighterData"),
            "https://firestore.googleapis.com/v1/projects/fightstats-30352/databases/(default)/documents/fighterData"
        );
    }
}
