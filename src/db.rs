use crate::{error::StoreError, store::PayrollStore};

/// Accepts a `sqlite:` URL or a bare file path such as `payroll.db`.
pub async fn init_db(database_url: &str) -> Result<PayrollStore, StoreError> {
    let store = if database_url.starts_with("sqlite:") {
        PayrollStore::new(database_url)?
    } else {
        PayrollStore::from_path(database_url)
    };
    store.initialize().await?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[actix_web::test]
    async fn plain_path_creates_database_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("payroll.db");

        let store = init_db(path.to_str().unwrap()).await.unwrap();

        assert!(path.exists());
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn sqlite_url_is_accepted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("url.db");
        let url = format!("sqlite://{}", path.display());

        init_db(&url).await.unwrap();

        assert!(path.exists());
    }
}
