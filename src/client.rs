//! Typed client for the `/records` endpoints.
//!
//! Every call is a single request. Nothing is retried, validated or cached;
//! any response status of 400 or above is returned as [`ClientError::Status`].

use derive_more::Display;
use reqwest::{Client, Response, StatusCode};
use url::Url;

use crate::entities::student::{NewStudent, Student};

#[derive(Debug, Display)]
pub enum ClientError {
    #[display("Invalid base URL: {_0}")]
    InvalidUrl(String),

    #[display("Request failed: {_0}")]
    Request(reqwest::Error),

    #[display("Server responded with {_0}")]
    Status(StatusCode),
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Request(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Request(err)
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status(status) => Some(*status),
            ClientError::Request(e) => e.status(),
            ClientError::InvalidUrl(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

#[derive(Clone, Debug)]
pub struct StudentClient {
    client: Client,
    records_url: Url,
}

impl StudentClient {
    /// `base_url` is the service root, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ClientError> {
        let mut base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(StudentClient {
            client,
            records_url: base.join("records")?,
        })
    }

    fn record_url(&self, id: i32) -> Result<Url, ClientError> {
        Ok(Url::parse(&format!("{}/{}", self.records_url, id))?)
    }

    pub async fn get_all(&self) -> Result<Vec<Student>, ClientError> {
        let response = self.client.get(self.records_url.clone()).send().await?;

        Ok(check_status(response)?.json().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Student, ClientError> {
        let response = self.client.get(self.record_url(id)?).send().await?;

        Ok(check_status(response)?.json().await?)
    }

    pub async fn create(&self, student: &NewStudent) -> Result<Student, ClientError> {
        let response = self.client
            .post(self.records_url.clone())
            .json(student)
            .send()
            .await?;

        Ok(check_status(response)?.json().await?)
    }

    pub async fn update(&self, id: i32, student: &NewStudent) -> Result<(), ClientError> {
        let response = self.client
            .put(self.record_url(id)?)
            .json(student)
            .send()
            .await?;

        check_status(response)?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), ClientError> {
        let response = self.client.delete(self.record_url(id)?).send().await?;

        check_status(response)?;
        Ok(())
    }
}

fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        tracing::debug!("Request to {} failed with {}", response.url(), status);
        return Err(ClientError::Status(status));
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_url_is_joined_onto_base() {
        let client = StudentClient::new("http://localhost:8080").unwrap();
        assert_eq!(client.records_url.as_str(), "http://localhost:8080/records");

        let nested = StudentClient::new("http://localhost:8080/api").unwrap();
        assert_eq!(nested.records_url.as_str(), "http://localhost:8080/api/records");
        assert_eq!(nested.record_url(5).unwrap().as_str(), "http://localhost:8080/api/records/5");
    }

    #[test]
    fn rejects_unusable_base_url() {
        assert!(matches!(StudentClient::new("not a url"), Err(ClientError::InvalidUrl(_))));
        assert!(matches!(StudentClient::new("mailto:a@x.com"), Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn status_errors_report_not_found() {
        assert!(ClientError::Status(StatusCode::NOT_FOUND).is_not_found());
        assert!(!ClientError::Status(StatusCode::INTERNAL_SERVER_ERROR).is_not_found());
    }
}
